//! # Command Interpreter
//!
//! Walks a ZPL command stream, mutating [`State`] and appending elements to a
//! [`LabelDocument`].
//!
//! ## Dispatch Table
//!
//! | Code | Effect |
//! |------|--------|
//! | `XA` | start of format, no effect |
//! | `XZ` | end of format, stop processing |
//! | `FO` `FT` | move the cursor |
//! | `A0` | font size (floored at the configured minimum) and weight |
//! | `CF` | font size |
//! | `FR` / `FS` | reverse the next field / end the field |
//! | `GB` | emit a box at the cursor |
//! | `BY` | `7` selects GS1-128 as the default symbology |
//! | `BC` `BX` | configure a pending barcode |
//! | `FD` | emit the pending barcode, or text |
//! | `GF` | decode a graphic field, emit an image |
//! | `PW` | set the document width |
//! | `CI` | record the code page |
//!
//! ## Recovery
//!
//! Nothing here fails. A command with too few arguments is skipped, an
//! unparsable number is replaced by its default, an unknown code is ignored.
//! Each of these is reported to the [`DiagnosticSink`] with the command code
//! and its position in the stream.
//!
//! ```
//! use zpl_label::document::Element;
//! use zpl_label::interpreter::interpret;
//!
//! let result = interpret("^XA^FO10,20^GB100,50,2,B^FDHello^FS^XZ");
//! assert!(result.diagnostics.is_empty());
//! assert!(matches!(result.document.elements[0], Element::Box(_)));
//! assert!(matches!(result.document.elements[1], Element::Text(_)));
//! ```

mod state;

pub use state::{PendingBarcode, State};

use std::fmt::Display;
use std::ops::ControlFlow;
use std::str::FromStr;

use crate::diagnostic::{Diagnostic, DiagnosticKind, DiagnosticSink};
use crate::document::{
    BarcodeElement, BoxElement, Code128Mode, Color, Element, GraphicFormat, ImageElement,
    LabelDocument, LinearParams, MatrixParams, Orientation, SymbolParams, Symbology, TextElement,
};
use crate::gs1;
use crate::printer::LabelConfig;
use crate::protocol::{Arg, Args, Command, CommandCode, tokenize};
use crate::raster;

/// Symbol quality handed to the encoder when a command does not set one.
pub const DEFAULT_QUALITY: u32 = 200;

/// `^BX` symbol height when the argument is absent.
pub const DATAMATRIX_HEIGHT: u32 = 50;

/// `^A0` font names rendered bold.
const BOLD_FONTS: [&str; 5] = ["0", "2", "4", "6", "8"];

const ORIENTATIONS: [char; 4] = ['N', 'R', 'I', 'B'];
const CODE128_MODES: [char; 4] = ['N', 'U', 'A', 'D'];

/// Finished document plus everything reported while building it.
#[derive(Debug, Clone)]
pub struct Interpretation {
    pub document: LabelDocument,
    pub diagnostics: Vec<Diagnostic>,
}

/// Interpret a stream onto the standard 800×1200 canvas.
pub fn interpret(stream: &str) -> Interpretation {
    interpret_with(stream, LabelConfig::default())
}

/// Interpret a stream with an explicit configuration.
pub fn interpret_with(stream: &str, config: LabelConfig) -> Interpretation {
    let mut interpreter = Interpreter::new(config, Vec::new());
    if interpreter.feed(stream).is_break() {
        tracing::debug!(elements = interpreter.document().len(), "stopped at end of format");
    }
    let (document, diagnostics) = interpreter.finish();
    Interpretation {
        document,
        diagnostics,
    }
}

// ============================================================================
// INTERPRETER
// ============================================================================

/// Stateful interpreter for one label.
///
/// Commands can be fed in pieces; once `^XZ` is seen the interpreter stays
/// halted and ignores further input.
///
/// ```
/// use zpl_label::diagnostic::TracingSink;
/// use zpl_label::interpreter::Interpreter;
/// use zpl_label::printer::LabelConfig;
///
/// let mut interpreter = Interpreter::new(LabelConfig::COMPACT, TracingSink);
/// let _ = interpreter.feed("^XA^FO5,5^FDfirst^FS");
/// let _ = interpreter.feed("^FO5,40^FDsecond^FS^XZ^FDignored");
/// assert!(interpreter.is_halted());
///
/// let (document, _) = interpreter.finish();
/// assert_eq!(document.len(), 2);
/// ```
#[derive(Debug)]
pub struct Interpreter<S: DiagnosticSink> {
    config: LabelConfig,
    state: State,
    document: LabelDocument,
    sink: S,
    halted: bool,
}

impl<S: DiagnosticSink> Interpreter<S> {
    pub fn new(config: LabelConfig, sink: S) -> Self {
        Self {
            state: State::new(&config),
            document: LabelDocument::from_config(&config),
            config,
            sink,
            halted: false,
        }
    }

    /// Tokenize and execute a stream (or a piece of one).
    ///
    /// Returns `Break` once the end of the format has been reached.
    pub fn feed(&mut self, stream: &str) -> ControlFlow<()> {
        for command in tokenize(stream) {
            self.execute(&command)?;
        }
        if self.halted {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    /// Execute a single command.
    pub fn execute(&mut self, command: &Command<'_>) -> ControlFlow<()> {
        if self.halted {
            return ControlFlow::Break(());
        }

        let Some(code) = command.kind else {
            self.report(
                command,
                DiagnosticKind::UnknownCommand,
                format!("unknown command ^{}", command.code),
            );
            return ControlFlow::Continue(());
        };

        tracing::debug!(
            code = code.as_str(),
            index = command.index,
            args = command.args.len(),
            "dispatch"
        );

        if command.args.len() < code.min_args() {
            self.report(
                command,
                DiagnosticKind::MalformedCommand,
                format!(
                    "expected at least {} arguments, got {}",
                    code.min_args(),
                    command.args.len()
                ),
            );
            return ControlFlow::Continue(());
        }

        match code {
            CommandCode::StartFormat => {}
            CommandCode::EndFormat => {
                tracing::debug!(index = command.index, "end of format");
                self.halted = true;
                return ControlFlow::Break(());
            }
            CommandCode::FieldOrigin | CommandCode::FieldTypeset => self.field_origin(command),
            CommandCode::Font => self.font(command),
            CommandCode::ChangeFont => self.change_font(command),
            CommandCode::FieldReverse => self.state.reverse_field = true,
            CommandCode::FieldSeparator => self.state.reverse_field = false,
            CommandCode::GraphicBox => self.graphic_box(command),
            CommandCode::BarcodeDefault => self.barcode_default(command),
            CommandCode::Code128 => self.code128(command),
            CommandCode::DataMatrix => self.data_matrix(command),
            CommandCode::FieldData => self.field_data(command),
            CommandCode::GraphicField => self.graphic_field(command),
            CommandCode::PrintWidth => self.print_width(command),
            CommandCode::ChangeEncoding => self.change_encoding(command),
        }
        ControlFlow::Continue(())
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn config(&self) -> &LabelConfig {
        &self.config
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn document(&self) -> &LabelDocument {
        &self.document
    }

    /// Hand back the document and the sink.
    pub fn finish(self) -> (LabelDocument, S) {
        (self.document, self.sink)
    }

    // ========================================================================
    // HANDLERS
    // ========================================================================

    fn field_origin(&mut self, command: &Command<'_>) {
        let x = self.number(command, 0, 0);
        let y = self.number(command, 1, 0);
        self.state.cursor = (x, y);
    }

    fn font(&mut self, command: &Command<'_>) {
        let bold = command
            .args
            .get(0)
            .map(str::trim)
            .is_some_and(|name| BOLD_FONTS.contains(&name));
        let size = self.number(command, 2, self.config.default_font_size);
        self.state.font_size = size.max(self.config.min_font_size);
        self.state.font_bold = bold;
    }

    fn change_font(&mut self, command: &Command<'_>) {
        self.state.font_size = self.number(command, 1, self.config.default_font_size);
    }

    fn graphic_box(&mut self, command: &Command<'_>) {
        let width = self.number(command, 0, 1u32).max(1);
        let height = self.number(command, 1, 1u32).max(1);
        let thickness = self.number(command, 2, 1u32);
        let color = command
            .args
            .get(3)
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map_or(Color::BLACK, Color::from_zpl);
        let rounding = self.number(command, 4, 0u8).min(8);

        let (x, y) = self.state.cursor;
        let element = BoxElement {
            x,
            y,
            width,
            height,
            thickness,
            line_color: color,
            fill_color: (thickness == 0).then_some(color),
            rounding,
            reverse: self.state.reverse_field,
        };
        self.state.reverse_field = false;
        self.emit(element);
    }

    fn barcode_default(&mut self, command: &Command<'_>) {
        self.state.default_symbology = match command.args.get(0).map(str::trim) {
            Some("7") => Symbology::Gs1128,
            _ => Symbology::Code128,
        };
    }

    fn code128(&mut self, command: &Command<'_>) {
        let args = &command.args;
        let params = LinearParams {
            orientation: orientation(args, 0),
            interpretation_line: args.flag(2, true),
            line_above: args.flag(3, false),
            check_digit: args.flag(4, false),
            mode: Code128Mode::from_char(args.choice(5, &CODE128_MODES, 'N')).unwrap_or_default(),
        };
        let height = self.number(command, 1, self.config.linear_barcode_height);

        self.state.pending_barcode = Some(PendingBarcode {
            symbology: self.state.default_symbology,
            width: self.config.linear_barcode_width,
            height,
            quality: DEFAULT_QUALITY,
            params: SymbolParams::Linear(params),
        });
    }

    fn data_matrix(&mut self, command: &Command<'_>) {
        let defaults = MatrixParams::default();
        let height = self.number(command, 1, DATAMATRIX_HEIGHT);
        let quality = self.number(command, 2, DEFAULT_QUALITY);
        let params = MatrixParams {
            orientation: orientation(&command.args, 0),
            columns: self.number(command, 3, defaults.columns),
            rows: self.number(command, 4, defaults.rows),
            format: self.number(command, 5, defaults.format),
            escape: command
                .args
                .get(6)
                .and_then(|e| e.trim().chars().next())
                .unwrap_or(defaults.escape),
            ratio: self.number(command, 7, defaults.ratio),
        };

        self.state.pending_barcode = Some(PendingBarcode {
            symbology: Symbology::DataMatrix,
            width: height,
            height,
            quality,
            params: SymbolParams::Matrix(params),
        });
    }

    fn field_data(&mut self, command: &Command<'_>) {
        let data = command.args.get(0).unwrap_or("");
        let (x, y) = self.state.cursor;

        let Some(pending) = self.state.pending_barcode.take() else {
            let element = TextElement {
                x,
                y,
                content: data.to_string(),
                font_size: self.state.font_size,
                bold: self.state.font_bold,
                reverse: self.state.reverse_field,
            };
            self.emit(element);
            return;
        };

        let symbology = match pending.symbology {
            Symbology::Code128 if gs1::is_delimited(data) => Symbology::Gs1128,
            other => other,
        };
        let payload = match symbology {
            Symbology::Gs1128 => gs1::format_with(data, &mut self.command_sink(command)),
            Symbology::DataMatrix => gs1::datamatrix_payload(data),
            Symbology::Code128 => data.to_string(),
        };

        self.emit(BarcodeElement {
            x,
            y,
            data: data.to_string(),
            payload,
            width: pending.width,
            height: pending.height,
            symbology,
            quality: pending.quality,
            params: pending.params,
        });
    }

    fn graphic_field(&mut self, command: &Command<'_>) {
        let format = GraphicFormat::from_tag(command.args.get(0).unwrap_or(""));
        let total: usize = self.number(command, 1, 0);
        let bytes_per_row: usize = self.number(command, 3, 0);
        if bytes_per_row == 0 {
            self.report(
                command,
                DiagnosticKind::MalformedCommand,
                "bytes per row must be positive",
            );
            return;
        }

        let geometry = u32::try_from(total / bytes_per_row)
            .ok()
            .and_then(|rows| raster::field_size(bytes_per_row, rows));
        let Some((_, height)) = geometry else {
            self.report(
                command,
                DiagnosticKind::MalformedCommand,
                format!(
                    "graphic field of {} bytes at {} bytes per row exceeds {} bytes",
                    total,
                    bytes_per_row,
                    raster::MAX_FIELD_BYTES
                ),
            );
            return;
        };
        let data = command.args.rest(4);
        let bitmap =
            raster::decode_with(&data, bytes_per_row, height, &mut self.command_sink(command));

        let (x, y) = self.state.cursor;
        self.emit(ImageElement {
            x,
            y,
            width: bitmap.width(),
            height,
            format,
            bitmap,
        });
    }

    fn print_width(&mut self, command: &Command<'_>) {
        let current = self.document.width;
        match command.args.number::<u32>(0, current) {
            Arg::Parsed(width) => self.document.width = width,
            Arg::Missing(_) => self.report(
                command,
                DiagnosticKind::InvalidNumeric,
                format!("missing print width, keeping {}", current),
            ),
            Arg::Invalid { raw, .. } => self.report(
                command,
                DiagnosticKind::InvalidNumeric,
                format!("invalid print width {:?}, keeping {}", raw, current),
            ),
        }
    }

    fn change_encoding(&mut self, command: &Command<'_>) {
        if let Some(page) = command.args.get(0).map(str::trim).filter(|p| !p.is_empty()) {
            self.state.code_page = Some(page.to_string());
        }
    }

    // ========================================================================
    // HELPERS
    // ========================================================================

    fn emit(&mut self, element: impl Into<Element>) {
        let element = element.into();
        let (x, y) = element.position();
        tracing::trace!(kind = element.kind(), x, y, "emit element");
        self.document.push(element);
    }

    /// Numeric argument; an unparsable value is reported and replaced.
    fn number<T: FromStr + Display>(&mut self, command: &Command<'_>, index: usize, default: T) -> T {
        match command.args.number(index, default) {
            Arg::Invalid { value, raw } => {
                self.report(
                    command,
                    DiagnosticKind::InvalidNumeric,
                    format!("argument {} is not a valid number: {:?}, using {}", index, raw, value),
                );
                value
            }
            arg => arg.value(),
        }
    }

    fn report(&mut self, command: &Command<'_>, kind: DiagnosticKind, message: impl Into<String>) {
        self.sink
            .report(Diagnostic::new(kind, message).at(command.code, command.index));
    }

    fn command_sink<'s>(&'s mut self, command: &'s Command<'_>) -> CommandSink<'s, S> {
        CommandSink {
            inner: &mut self.sink,
            code: command.code,
            index: command.index,
        }
    }
}

fn orientation(args: &Args<'_>, index: usize) -> Orientation {
    Orientation::from_char(args.choice(index, &ORIENTATIONS, 'N')).unwrap_or_default()
}

/// Stamps the current command onto diagnostics raised by the codec and
/// formatter.
struct CommandSink<'s, S> {
    inner: &'s mut S,
    code: &'s str,
    index: usize,
}

impl<S: DiagnosticSink> DiagnosticSink for CommandSink<'_, S> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.inner.report(diagnostic.at(self.code, self.index));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::NullSink;

    fn run(stream: &str) -> Interpretation {
        interpret(stream)
    }

    fn kinds(result: &Interpretation) -> Vec<DiagnosticKind> {
        result.diagnostics.iter().map(|d| d.kind).collect()
    }

    fn only_text(result: &Interpretation) -> &TextElement {
        match &result.document.elements[..] {
            [Element::Text(text)] => text,
            other => panic!("expected one text element, got {:?}", other),
        }
    }

    fn only_barcode(result: &Interpretation) -> &BarcodeElement {
        match &result.document.elements[..] {
            [Element::Barcode(barcode)] => barcode,
            other => panic!("expected one barcode element, got {:?}", other),
        }
    }

    #[test]
    fn test_box_then_text_at_cursor() {
        let result = run("^FO10,20^GB100,50,2,B^FDHello");
        assert!(result.diagnostics.is_empty());
        assert_eq!(result.document.len(), 2);

        let Element::Box(frame) = &result.document.elements[0] else {
            panic!("expected box first");
        };
        assert_eq!((frame.x, frame.y), (10, 20));
        assert_eq!((frame.width, frame.height, frame.thickness), (100, 50, 2));
        assert_eq!(frame.line_color, Color::BLACK);
        assert_eq!(frame.fill_color, None);

        let Element::Text(text) = &result.document.elements[1] else {
            panic!("expected text second");
        };
        assert_eq!((text.x, text.y), (10, 20));
        assert_eq!(text.content, "Hello");
    }

    #[test]
    fn test_field_data_without_barcode_is_text() {
        let result = run("^XA^A00,30,30^FO5,6^FDPlain^FS^XZ");
        let text = only_text(&result);
        assert_eq!(text.content, "Plain");
        assert_eq!(text.font_size, 30);
        assert!(text.bold);
    }

    #[test]
    fn test_field_data_kept_verbatim() {
        let result = run("^FD  a, b ,c  ^FS");
        assert_eq!(only_text(&result).content, "  a, b ,c  ");
    }

    #[test]
    fn test_empty_field_data_is_empty_text() {
        let result = run("^FD^FS");
        assert_eq!(only_text(&result).content, "");
    }

    #[test]
    fn test_font_size_floor() {
        let result = run("^A0N,5,5^FDtiny");
        let text = only_text(&result);
        assert_eq!(text.font_size, 12);
        assert!(!text.bold);
    }

    #[test]
    fn test_change_font_sets_size_without_floor() {
        let result = run("^CF0,8^FDsmall");
        assert_eq!(only_text(&result).font_size, 8);
    }

    #[test]
    fn test_reverse_cleared_by_field_separator() {
        let mut interpreter = Interpreter::new(LabelConfig::default(), NullSink);
        let _ = interpreter.feed("^FR");
        assert!(interpreter.state().reverse_field);
        let _ = interpreter.feed("^FS");
        assert!(!interpreter.state().reverse_field);
        let _ = interpreter.feed("^FS");
        assert!(!interpreter.state().reverse_field);
    }

    #[test]
    fn test_reverse_applies_to_text_until_separator() {
        let result = run("^FR^FDone^FDtwo^FS^FDthree");
        let reversed: Vec<bool> = result
            .document
            .iter()
            .map(|e| match e {
                Element::Text(t) => t.reverse,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(reversed, vec![true, true, false]);
    }

    #[test]
    fn test_box_consumes_reverse() {
        let result = run("^FR^GB10,10,0^FDafter");
        let Element::Box(frame) = &result.document.elements[0] else {
            panic!("expected box");
        };
        assert!(frame.reverse);
        assert!(frame.is_filled());
        assert_eq!(frame.fill_color, Some(Color::BLACK));
        let Element::Text(text) = &result.document.elements[1] else {
            panic!("expected text");
        };
        assert!(!text.reverse);
    }

    #[test]
    fn test_box_white_and_rounding() {
        let result = run("^GB10,0,3,W,12");
        let Element::Box(frame) = &result.document.elements[0] else {
            panic!("expected box");
        };
        assert_eq!(frame.height, 1);
        assert_eq!(frame.line_color, Color::WHITE);
        assert_eq!(frame.rounding, 8);
    }

    #[test]
    fn test_code128_barcode() {
        let result = run("^FO50,60^BCN,80,Y,N,N^FD12345^FS");
        let barcode = only_barcode(&result);
        assert_eq!(barcode.symbology, Symbology::Code128);
        assert_eq!((barcode.x, barcode.y), (50, 60));
        assert_eq!(barcode.height, 80);
        assert_eq!(barcode.width, 700);
        assert_eq!(barcode.quality, DEFAULT_QUALITY);
        assert_eq!(barcode.payload, "12345");
    }

    #[test]
    fn test_code128_default_height() {
        let result = run("^BC^FDX");
        let barcode = only_barcode(&result);
        assert_eq!(barcode.height, 10);
        assert_eq!(barcode.params, SymbolParams::Linear(LinearParams::default()));
    }

    #[test]
    fn test_code128_params() {
        let result = run("^BCR,40,N,Y,Y,D^FDX");
        let SymbolParams::Linear(params) = only_barcode(&result).params else {
            panic!("expected linear params");
        };
        assert_eq!(params.orientation, Orientation::Rotated);
        assert!(!params.interpretation_line);
        assert!(params.line_above);
        assert!(params.check_digit);
        assert_eq!(params.mode, Code128Mode::UccEan);
    }

    #[test]
    fn test_pending_barcode_consumed_once() {
        let result = run("^BC,50^FD111^FS^FD222^FS");
        assert!(matches!(result.document.elements[0], Element::Barcode(_)));
        assert!(matches!(result.document.elements[1], Element::Text(_)));
    }

    #[test]
    fn test_barcode_default_gs1() {
        let result = run("^BY7^BC^FD;0112345^FS");
        let barcode = only_barcode(&result);
        assert_eq!(barcode.symbology, Symbology::Gs1128);
        assert_eq!(barcode.payload, "\u{1D}(01)12345");

        let result = run("^BY7^BY3^BC^FD123^FS");
        assert_eq!(only_barcode(&result).symbology, Symbology::Code128);
    }

    #[test]
    fn test_delimited_payload_upgrades_to_gs1() {
        let result = run("^BC,100^FD>;;0109501101530003>8;17140704>;^FS");
        let barcode = only_barcode(&result);
        assert_eq!(barcode.symbology, Symbology::Gs1128);
        assert_eq!(barcode.data, ">;;0109501101530003>8;17140704>;");
        assert_eq!(barcode.payload, "\u{1D}(01)09501101530003\u{1D}(17)140704");
    }

    #[test]
    fn test_unknown_ai_reported_with_command_context() {
        let result = run("^XA^BC^FD>;;5512>;^FS");
        assert_eq!(kinds(&result), vec![DiagnosticKind::UnknownApplicationIdentifier]);
        assert_eq!(result.diagnostics[0].code.as_deref(), Some("FD"));
        assert_eq!(result.diagnostics[0].index, Some(2));
    }

    #[test]
    fn test_data_matrix_defaults() {
        let result = run("^FO1,2^BX^FDABC^FS");
        let barcode = only_barcode(&result);
        assert_eq!(barcode.symbology, Symbology::DataMatrix);
        assert_eq!((barcode.width, barcode.height), (50, 50));
        assert_eq!(barcode.quality, 200);
        assert_eq!(barcode.params, SymbolParams::Matrix(MatrixParams::default()));
        assert_eq!(barcode.payload, "ABC");
    }

    #[test]
    fn test_data_matrix_params_and_gs1_payload() {
        let result = run("^BXN,80,140,24,24,6,~,2^FD_10112345_121SN^FS");
        let barcode = only_barcode(&result);
        assert_eq!(barcode.height, 80);
        assert_eq!(barcode.quality, 140);
        let SymbolParams::Matrix(params) = barcode.params else {
            panic!("expected matrix params");
        };
        assert_eq!((params.columns, params.rows, params.ratio), (24, 24, 2));
        assert_eq!(params.escape, '~');
        assert_eq!(barcode.payload, "\u{E8}0112345\u{1D}21SN");
    }

    #[test]
    fn test_graphic_field_decodes_image() {
        let result = run("^FO3,4^GFA,4,4,2,!,^FS");
        assert!(result.diagnostics.is_empty());
        let Element::Image(image) = &result.document.elements[0] else {
            panic!("expected image");
        };
        assert_eq!((image.x, image.y), (3, 4));
        assert_eq!((image.width, image.height), (16, 2));
        assert_eq!(image.format, GraphicFormat::Ascii);
        assert_eq!(image.bitmap.data(), &[0xFF, 0xFF, 0x00, 0x00]);
    }

    #[test]
    fn test_graphic_field_data_rejoined_on_commas() {
        let result = run("^GFA,3,3,1,G0!,,!^FS");
        let Element::Image(image) = &result.document.elements[0] else {
            panic!("expected image");
        };
        assert_eq!(image.bitmap.data(), &[0x0F, 0x00, 0xFF]);
    }

    #[test]
    fn test_graphic_field_short_data_reported() {
        let result = run("^GFA,4,4,1,!^FS");
        assert_eq!(kinds(&result), vec![DiagnosticKind::CodecOutOfRange]);
        assert_eq!(result.diagnostics[0].code.as_deref(), Some("GF"));
        assert_eq!(result.document.len(), 1);
    }

    #[test]
    fn test_graphic_field_zero_bytes_per_row() {
        let result = run("^GFA,4,4,0,FF");
        assert_eq!(kinds(&result), vec![DiagnosticKind::MalformedCommand]);
        assert!(result.document.is_empty());
    }

    #[test]
    fn test_bare_start_stop_is_gs1() {
        let result = run("^BC^FD>;^FS");
        let barcode = only_barcode(&result);
        assert_eq!(barcode.symbology, Symbology::Gs1128);
        assert_eq!(barcode.payload, "\u{1D}");
    }

    #[test]
    fn test_graphic_field_oversized_geometry_skipped() {
        let result = run("^XA^GFA,0,0,4611686018427387904,!^FS^FDafter^XZ");
        assert_eq!(kinds(&result), vec![DiagnosticKind::MalformedCommand]);
        assert_eq!(result.diagnostics[0].code.as_deref(), Some("GF"));
        assert_eq!(only_text(&result).content, "after");

        let result = run("^GFA,4000000000,4000000000,1,!^FS^FDafter");
        assert_eq!(kinds(&result), vec![DiagnosticKind::MalformedCommand]);
        assert_eq!(result.document.len(), 1);
    }

    #[test]
    fn test_malformed_command_skipped() {
        let result = run("^FO5,5^FO10^FDx");
        assert_eq!(kinds(&result), vec![DiagnosticKind::MalformedCommand]);
        assert_eq!(result.diagnostics[0].index, Some(1));
        assert_eq!(only_text(&result).x, 5);
    }

    #[test]
    fn test_invalid_number_uses_default() {
        let result = run("^FOabc,7^FDx");
        assert_eq!(kinds(&result), vec![DiagnosticKind::InvalidNumeric]);
        assert_eq!((only_text(&result).x, only_text(&result).y), (0, 7));
    }

    #[test]
    fn test_unknown_command_skipped() {
        let result = run("^ZZ1,2^FDx");
        assert_eq!(kinds(&result), vec![DiagnosticKind::UnknownCommand]);
        assert_eq!(result.diagnostics[0].code.as_deref(), Some("ZZ"));
        assert_eq!(result.document.len(), 1);
    }

    #[test]
    fn test_processing_stops_at_end_of_format() {
        let result = run("^FDbefore^XZ^FDafter^ZZ");
        assert_eq!(result.document.len(), 1);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_halted_interpreter_ignores_input() {
        let mut interpreter = Interpreter::new(LabelConfig::default(), Vec::new());
        assert!(interpreter.feed("^XA^FDa").is_continue());
        assert!(interpreter.feed("^XZ").is_break());
        assert!(interpreter.feed("^FDb").is_break());
        let (document, diagnostics) = interpreter.finish();
        assert_eq!(document.len(), 1);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_print_width() {
        let result = run("^PW600");
        assert_eq!(result.document.width, 600);

        let result = run("^PW\n");
        assert_eq!(result.document.width, 800);
        assert_eq!(kinds(&result), vec![DiagnosticKind::InvalidNumeric]);

        let result = run("^PWwide");
        assert_eq!(result.document.width, 800);
        assert_eq!(kinds(&result), vec![DiagnosticKind::InvalidNumeric]);
    }

    #[test]
    fn test_change_encoding_recorded() {
        let mut interpreter = Interpreter::new(LabelConfig::default(), NullSink);
        let _ = interpreter.feed("^CI28");
        assert_eq!(interpreter.state().code_page.as_deref(), Some("28"));
    }

    #[test]
    fn test_field_typeset_moves_cursor() {
        let result = run("^FT30,40^FDx");
        assert_eq!((only_text(&result).x, only_text(&result).y), (30, 40));
    }

    #[test]
    fn test_cursor_persists() {
        let result = run("^FO9,9^FDa^FS^FDb^FS");
        for element in result.document.iter() {
            assert_eq!(element.position(), (9, 9));
        }
    }

    #[test]
    fn test_compact_config() {
        let result = interpret_with("^BC^FDx", LabelConfig::COMPACT);
        assert_eq!((result.document.width, result.document.height), (400, 600));
    }
}
