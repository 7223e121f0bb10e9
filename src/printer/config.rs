//! # Label Configuration
//!
//! Canvas dimensions and the interpreter defaults that depend on the target
//! label stock.
//!
//! ## Presets
//!
//! | Preset | Canvas (dots) | Notes |
//! |--------|---------------|-------|
//! | `STANDARD` | 800 × 1200 | 4×6in label at 203 DPI, default |
//! | `COMPACT` | 400 × 600 | 2×3in label at 203 DPI |
//!
//! ## Usage
//!
//! ```
//! use zpl_label::printer::LabelConfig;
//!
//! let config = LabelConfig::STANDARD.with_size(812, 1218);
//! assert_eq!(config.width, 812);
//! assert_eq!(config.default_font_size, 12);
//! ```

/// # Label Configuration
///
/// ## Canvas
///
/// - **width / height**: initial size of the [`LabelDocument`](crate::document::LabelDocument).
///   `^PW` may widen or narrow the document later.
///
/// ## Interpreter Defaults
///
/// - **default_font_size**: font size before any `^A0`/`^CF`, and the fallback
///   for an unparsable size argument
/// - **min_font_size**: floor applied by `^A0`
/// - **linear_barcode_width**: element width of Code128/GS1-128 symbols; the
///   symbol image is resized to it
/// - **linear_barcode_height**: `^BC` height when the argument is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelConfig {
    /// Preset name
    pub name: &'static str,

    /// Canvas width in dots
    pub width: u32,

    /// Canvas height in dots
    pub height: u32,

    /// Font size in effect at the start of a label
    pub default_font_size: u32,

    /// Smallest font size `^A0` will select
    pub min_font_size: u32,

    /// Width given to linear barcode elements
    pub linear_barcode_width: u32,

    /// Bar height used when `^BC` omits it
    pub linear_barcode_height: u32,
}

impl LabelConfig {
    /// # 4×6in label (800 × 1200 dots)
    pub const STANDARD: Self = Self {
        name: "standard",
        width: 800,
        height: 1200,
        default_font_size: 12,
        min_font_size: 12,
        linear_barcode_width: 700,
        linear_barcode_height: 10,
    };

    /// # 2×3in label (400 × 600 dots)
    pub const COMPACT: Self = Self {
        name: "compact",
        width: 400,
        height: 600,
        ..Self::STANDARD
    };

    /// Same defaults, different canvas.
    pub const fn with_size(self, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_dimensions() {
        let config = LabelConfig::STANDARD;
        assert_eq!((config.width, config.height), (800, 1200));
        assert_eq!(config.linear_barcode_width, 700);
        assert_eq!(config.linear_barcode_height, 10);
    }

    #[test]
    fn test_compact_shares_defaults() {
        let compact = LabelConfig::COMPACT;
        assert_eq!((compact.width, compact.height), (400, 600));
        assert_eq!(compact.default_font_size, LabelConfig::STANDARD.default_font_size);
        assert_eq!(compact.min_font_size, 12);
    }

    #[test]
    fn test_with_size_keeps_name() {
        let config = LabelConfig::COMPACT.with_size(10, 20);
        assert_eq!(config.name, "compact");
        assert_eq!((config.width, config.height), (10, 20));
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(LabelConfig::default(), LabelConfig::STANDARD);
    }
}
