//! Per-document interpreter state.

use crate::document::{SymbolParams, Symbology};
use crate::printer::LabelConfig;

/// Barcode configured by `^BC`/`^BX`, waiting for its `^FD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingBarcode {
    pub symbology: Symbology,
    pub width: u32,
    pub height: u32,
    pub quality: u32,
    pub params: SymbolParams,
}

/// Mutable state threaded through the command handlers.
///
/// - `cursor` persists until the next `^FO`/`^FT`
/// - `reverse_field` holds only until the next `^FS` (or `^GB`)
/// - `pending_barcode` is consumed by the next `^FD`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub cursor: (u32, u32),
    pub font_size: u32,
    pub font_bold: bool,
    pub reverse_field: bool,
    /// Symbology `^BC` uses; `^BY7` selects GS1-128
    pub default_symbology: Symbology,
    pub pending_barcode: Option<PendingBarcode>,
    /// Code page recorded by `^CI`
    pub code_page: Option<String>,
}

impl State {
    pub fn new(config: &LabelConfig) -> Self {
        Self {
            cursor: (0, 0),
            font_size: config.default_font_size,
            font_bold: false,
            reverse_field: false,
            default_symbology: Symbology::Code128,
            pending_barcode: None,
            code_page: None,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(&LabelConfig::default())
    }
}
