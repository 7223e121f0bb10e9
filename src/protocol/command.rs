//! Command codes and the stream tokenizer.

use super::args::Args;

/// # Supported Command Codes
///
/// | Code | Variant | Min args |
/// |------|---------|----------|
/// | `XA` | [`StartFormat`](CommandCode::StartFormat) | 0 |
/// | `XZ` | [`EndFormat`](CommandCode::EndFormat) | 0 |
/// | `FO` | [`FieldOrigin`](CommandCode::FieldOrigin) | 2 |
/// | `FT` | [`FieldTypeset`](CommandCode::FieldTypeset) | 2 |
/// | `A0` | [`Font`](CommandCode::Font) | 3 |
/// | `CF` | [`ChangeFont`](CommandCode::ChangeFont) | 2 |
/// | `FR` | [`FieldReverse`](CommandCode::FieldReverse) | 0 |
/// | `FS` | [`FieldSeparator`](CommandCode::FieldSeparator) | 0 |
/// | `GB` | [`GraphicBox`](CommandCode::GraphicBox) | 3 |
/// | `BY` | [`BarcodeDefault`](CommandCode::BarcodeDefault) | 0 |
/// | `BC` | [`Code128`](CommandCode::Code128) | 0 |
/// | `BX` | [`DataMatrix`](CommandCode::DataMatrix) | 0 |
/// | `FD` | [`FieldData`](CommandCode::FieldData) | 0 |
/// | `GF` | [`GraphicField`](CommandCode::GraphicField) | 5 |
/// | `PW` | [`PrintWidth`](CommandCode::PrintWidth) | 0 |
/// | `CI` | [`ChangeEncoding`](CommandCode::ChangeEncoding) | 0 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandCode {
    StartFormat,
    EndFormat,
    FieldOrigin,
    FieldTypeset,
    Font,
    ChangeFont,
    FieldReverse,
    FieldSeparator,
    GraphicBox,
    BarcodeDefault,
    Code128,
    DataMatrix,
    FieldData,
    GraphicField,
    PrintWidth,
    ChangeEncoding,
}

impl CommandCode {
    pub const ALL: [CommandCode; 16] = [
        CommandCode::StartFormat,
        CommandCode::EndFormat,
        CommandCode::FieldOrigin,
        CommandCode::FieldTypeset,
        CommandCode::Font,
        CommandCode::ChangeFont,
        CommandCode::FieldReverse,
        CommandCode::FieldSeparator,
        CommandCode::GraphicBox,
        CommandCode::BarcodeDefault,
        CommandCode::Code128,
        CommandCode::DataMatrix,
        CommandCode::FieldData,
        CommandCode::GraphicField,
        CommandCode::PrintWidth,
        CommandCode::ChangeEncoding,
    ];

    /// Case-sensitive lookup of a two-character code.
    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "XA" => CommandCode::StartFormat,
            "XZ" => CommandCode::EndFormat,
            "FO" => CommandCode::FieldOrigin,
            "FT" => CommandCode::FieldTypeset,
            "A0" => CommandCode::Font,
            "CF" => CommandCode::ChangeFont,
            "FR" => CommandCode::FieldReverse,
            "FS" => CommandCode::FieldSeparator,
            "GB" => CommandCode::GraphicBox,
            "BY" => CommandCode::BarcodeDefault,
            "BC" => CommandCode::Code128,
            "BX" => CommandCode::DataMatrix,
            "FD" => CommandCode::FieldData,
            "GF" => CommandCode::GraphicField,
            "PW" => CommandCode::PrintWidth,
            "CI" => CommandCode::ChangeEncoding,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CommandCode::StartFormat => "XA",
            CommandCode::EndFormat => "XZ",
            CommandCode::FieldOrigin => "FO",
            CommandCode::FieldTypeset => "FT",
            CommandCode::Font => "A0",
            CommandCode::ChangeFont => "CF",
            CommandCode::FieldReverse => "FR",
            CommandCode::FieldSeparator => "FS",
            CommandCode::GraphicBox => "GB",
            CommandCode::BarcodeDefault => "BY",
            CommandCode::Code128 => "BC",
            CommandCode::DataMatrix => "BX",
            CommandCode::FieldData => "FD",
            CommandCode::GraphicField => "GF",
            CommandCode::PrintWidth => "PW",
            CommandCode::ChangeEncoding => "CI",
        }
    }

    /// Fewest arguments the handler needs; shorter commands are skipped.
    pub fn min_args(&self) -> usize {
        match self {
            CommandCode::FieldOrigin | CommandCode::FieldTypeset | CommandCode::ChangeFont => 2,
            CommandCode::Font | CommandCode::GraphicBox => 3,
            CommandCode::GraphicField => 5,
            _ => 0,
        }
    }

    /// Whether the remainder is one argument rather than a comma list.
    pub fn is_verbatim(&self) -> bool {
        matches!(self, CommandCode::FieldData)
    }
}

/// One command from the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command<'a> {
    /// Position among the non-empty commands of the stream
    pub index: usize,
    /// The two-character code as written (may be shorter at end of input)
    pub code: &'a str,
    /// `None` for codes outside the supported set
    pub kind: Option<CommandCode>,
    pub args: Args<'a>,
}

/// Split a command stream into commands.
///
/// The stream is trimmed and split on `^`; empty pieces are dropped. The
/// first two characters of each piece are the code, the rest its arguments.
///
/// ```
/// use zpl_label::protocol::{CommandCode, tokenize};
///
/// let commands: Vec<_> = tokenize("^XA^FO10,20^FDa,b^XZ").collect();
/// assert_eq!(commands.len(), 4);
/// assert_eq!(commands[1].kind, Some(CommandCode::FieldOrigin));
/// assert_eq!(commands[1].args.len(), 2);
/// assert_eq!(commands[2].args.get(0), Some("a,b"));
/// ```
pub fn tokenize(stream: &str) -> impl Iterator<Item = Command<'_>> {
    stream
        .trim()
        .split('^')
        .filter(|piece| !piece.is_empty())
        .enumerate()
        .map(|(index, piece)| {
            let split = piece
                .char_indices()
                .nth(2)
                .map(|(i, _)| i)
                .unwrap_or(piece.len());
            let (code, rest) = piece.split_at(split);
            let kind = CommandCode::from_code(code);
            let args = match kind {
                Some(k) if k.is_verbatim() => Args::verbatim(rest),
                _ => Args::split(rest),
            };
            Command {
                index,
                code,
                kind,
                args,
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_table_round_trips() {
        for code in CommandCode::ALL {
            assert_eq!(CommandCode::from_code(code.as_str()), Some(code));
        }
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        assert_eq!(CommandCode::from_code("fo"), None);
        assert_eq!(CommandCode::from_code("FO"), Some(CommandCode::FieldOrigin));
    }

    #[test]
    fn test_empty_pieces_not_counted() {
        let commands: Vec<_> = tokenize("^^XA^^FS").collect();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].index, 0);
        assert_eq!(commands[1].index, 1);
        assert_eq!(commands[1].code, "FS");
    }

    #[test]
    fn test_leading_text_is_a_command() {
        let commands: Vec<_> = tokenize("  junk^XA").collect();
        assert_eq!(commands[0].code, "ju");
        assert_eq!(commands[0].kind, None);
    }

    #[test]
    fn test_short_piece() {
        let commands: Vec<_> = tokenize("^X").collect();
        assert_eq!(commands[0].code, "X");
        assert!(commands[0].args.is_empty());
    }

    #[test]
    fn test_multibyte_code_boundary() {
        let commands: Vec<_> = tokenize("^Zé1,2").collect();
        assert_eq!(commands[0].code, "Zé");
        assert_eq!(commands[0].args.len(), 2);
    }

    #[test]
    fn test_field_data_is_verbatim() {
        let commands: Vec<_> = tokenize("^FD>;;0112,3>;").collect();
        assert_eq!(commands[0].args.len(), 1);
        assert_eq!(commands[0].args.get(0), Some(">;;0112,3>;"));
    }

    #[test]
    fn test_min_args() {
        assert_eq!(CommandCode::GraphicField.min_args(), 5);
        assert_eq!(CommandCode::Font.min_args(), 3);
        assert_eq!(CommandCode::FieldData.min_args(), 0);
    }
}
