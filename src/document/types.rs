//! Element types for the label document.
//!
//! All types derive `Serialize + Deserialize` so a document built by the
//! interpreter can be handed to a renderer as JSON, or constructed directly
//! in Rust.

use serde::{Deserialize, Serialize};

use crate::raster::Bitmap;

// ============================================================================
// COLORS & SYMBOLOGIES
// ============================================================================

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Self = Self(0, 0, 0);
    pub const WHITE: Self = Self(255, 255, 255);

    /// `^GB` color argument: `B` is black, anything else white.
    pub fn from_zpl(tag: &str) -> Self {
        if tag.trim().eq_ignore_ascii_case("B") {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }
}

/// Barcode symbology handed to the symbol encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbology {
    #[default]
    Code128,
    #[serde(rename = "gs1-128")]
    Gs1128,
    DataMatrix,
}

impl Symbology {
    pub fn is_linear(&self) -> bool {
        !matches!(self, Symbology::DataMatrix)
    }
}

/// Field orientation (`N` normal, `R` rotated 90°, `I` inverted 180°,
/// `B` read from bottom up, 270°).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Normal,
    Rotated,
    Inverted,
    Bottom,
}

impl Orientation {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(Orientation::Normal),
            'R' => Some(Orientation::Rotated),
            'I' => Some(Orientation::Inverted),
            'B' => Some(Orientation::Bottom),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Orientation::Normal => 'N',
            Orientation::Rotated => 'R',
            Orientation::Inverted => 'I',
            Orientation::Bottom => 'B',
        }
    }
}

/// Code 128 subset selection mode of `^BC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Code128Mode {
    /// `N`: no mode selected
    #[default]
    None,
    /// `U`: UCC case mode
    Ucc,
    /// `A`: automatic subset selection
    Automatic,
    /// `D`: UCC/EAN mode
    UccEan,
}

impl Code128Mode {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(Code128Mode::None),
            'U' => Some(Code128Mode::Ucc),
            'A' => Some(Code128Mode::Automatic),
            'D' => Some(Code128Mode::UccEan),
            _ => None,
        }
    }
}

/// `^BC` parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearParams {
    pub orientation: Orientation,
    /// Print the human-readable line below the bars
    pub interpretation_line: bool,
    /// Print the human-readable line above the bars
    pub line_above: bool,
    /// Append a UCC check digit
    pub check_digit: bool,
    pub mode: Code128Mode,
}

impl Default for LinearParams {
    fn default() -> Self {
        Self {
            orientation: Orientation::Normal,
            interpretation_line: true,
            line_above: false,
            check_digit: false,
            mode: Code128Mode::None,
        }
    }
}

/// `^BX` parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixParams {
    pub orientation: Orientation,
    pub columns: u32,
    pub rows: u32,
    pub format: u32,
    /// Control-character escape; `_1` introduces GS1 data
    pub escape: char,
    pub ratio: u32,
}

impl Default for MatrixParams {
    fn default() -> Self {
        Self {
            orientation: Orientation::Normal,
            columns: 10,
            rows: 10,
            format: 6,
            escape: '_',
            ratio: 1,
        }
    }
}

/// Symbology-specific parameters carried on a barcode element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SymbolParams {
    Linear(LinearParams),
    Matrix(MatrixParams),
}

impl SymbolParams {
    pub fn orientation(&self) -> Orientation {
        match self {
            SymbolParams::Linear(p) => p.orientation,
            SymbolParams::Matrix(p) => p.orientation,
        }
    }
}

/// Encoding tag of a `^GF` graphic field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphicFormat {
    /// `A`: hex ASCII, optionally compressed
    Ascii,
    /// `B`: raw binary
    Binary,
    /// `C`: compressed binary
    CompressedBinary,
    Other(String),
}

impl GraphicFormat {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "A" => GraphicFormat::Ascii,
            "B" => GraphicFormat::Binary,
            "C" => GraphicFormat::CompressedBinary,
            other => GraphicFormat::Other(other.to_string()),
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            GraphicFormat::Ascii => "A",
            GraphicFormat::Binary => "B",
            GraphicFormat::CompressedBinary => "C",
            GraphicFormat::Other(tag) => tag,
        }
    }
}

// ============================================================================
// ELEMENTS
// ============================================================================

/// Text field produced by `^FD` without a pending barcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextElement {
    pub x: u32,
    pub y: u32,
    pub content: String,
    pub font_size: u32,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub reverse: bool,
}

impl TextElement {
    /// Ink color: white when reversed, black otherwise.
    pub fn color(&self) -> Color {
        if self.reverse { Color::WHITE } else { Color::BLACK }
    }
}

/// Rectangle produced by `^GB`.
///
/// `thickness == 0` means a filled box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxElement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub thickness: u32,
    pub line_color: Color,
    #[serde(default)]
    pub fill_color: Option<Color>,
    /// Corner rounding, 0..=8
    #[serde(default)]
    pub rounding: u8,
    #[serde(default)]
    pub reverse: bool,
}

impl BoxElement {
    /// `(line, fill)` as drawn.
    ///
    /// A reversed box swaps its colors; a missing fill becomes a white line.
    ///
    /// ```
    /// use zpl_label::document::{BoxElement, Color};
    ///
    /// let mut frame = BoxElement {
    ///     x: 0, y: 0, width: 10, height: 10, thickness: 2,
    ///     line_color: Color::BLACK, fill_color: None, rounding: 0, reverse: false,
    /// };
    /// assert_eq!(frame.resolved_colors(), (Color::BLACK, None));
    ///
    /// frame.reverse = true;
    /// assert_eq!(frame.resolved_colors(), (Color::WHITE, Some(Color::BLACK)));
    /// ```
    pub fn resolved_colors(&self) -> (Color, Option<Color>) {
        if self.reverse {
            (self.fill_color.unwrap_or(Color::WHITE), Some(self.line_color))
        } else {
            (self.line_color, self.fill_color)
        }
    }

    pub fn is_filled(&self) -> bool {
        self.thickness == 0
    }
}

/// Barcode produced by `^BC`/`^BX` followed by `^FD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeElement {
    pub x: u32,
    pub y: u32,
    /// Field data exactly as it appeared after `^FD`
    pub data: String,
    /// Data handed to the symbol encoder (GS1 payloads already formatted)
    pub payload: String,
    pub width: u32,
    pub height: u32,
    pub symbology: Symbology,
    pub quality: u32,
    pub params: SymbolParams,
}

/// Embedded graphic produced by `^GF`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageElement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub format: GraphicFormat,
    pub bitmap: Bitmap,
}

fn default_logo_size() -> u32 {
    100
}

/// Image file placed on the label. Only constructed through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoElement {
    pub x: u32,
    pub y: u32,
    pub path: String,
    #[serde(default = "default_logo_size")]
    pub width: u32,
    #[serde(default = "default_logo_size")]
    pub height: u32,
}

impl LogoElement {
    /// Logo at `(x, y)` with the default 100×100 size.
    pub fn new(x: u32, y: u32, path: impl Into<String>) -> Self {
        Self {
            x,
            y,
            path: path.into(),
            width: default_logo_size(),
            height: default_logo_size(),
        }
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// A positioned, drawable label element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Text(TextElement),
    Box(BoxElement),
    Barcode(BarcodeElement),
    Image(ImageElement),
    Logo(LogoElement),
}

impl Element {
    /// Top-left anchor in device pixels.
    pub fn position(&self) -> (u32, u32) {
        match self {
            Element::Text(e) => (e.x, e.y),
            Element::Box(e) => (e.x, e.y),
            Element::Barcode(e) => (e.x, e.y),
            Element::Image(e) => (e.x, e.y),
            Element::Logo(e) => (e.x, e.y),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Element::Text(_) => "text",
            Element::Box(_) => "box",
            Element::Barcode(_) => "barcode",
            Element::Image(_) => "image",
            Element::Logo(_) => "logo",
        }
    }
}

impl From<TextElement> for Element {
    fn from(e: TextElement) -> Self {
        Element::Text(e)
    }
}

impl From<BoxElement> for Element {
    fn from(e: BoxElement) -> Self {
        Element::Box(e)
    }
}

impl From<BarcodeElement> for Element {
    fn from(e: BarcodeElement) -> Self {
        Element::Barcode(e)
    }
}

impl From<ImageElement> for Element {
    fn from(e: ImageElement) -> Self {
        Element::Image(e)
    }
}

impl From<LogoElement> for Element {
    fn from(e: LogoElement) -> Self {
        Element::Logo(e)
    }
}
