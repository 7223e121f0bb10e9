//! # zpl-label - ZPL Label Interpreter
//!
//! zpl-label turns a ZPL (Zebra Programming Language) command stream into a
//! structured, positioned label document. It provides:
//!
//! - **Interpreter**: a state machine over the supported command subset
//! - **Raster codec**: the run-length compressed hex body of `^GFA` graphic fields
//! - **GS1 formatting**: Application Identifier shaping for GS1-128 and
//!   GS1 DataMatrix payloads
//! - **Render driver**: walks the document over caller-supplied canvas and
//!   symbol encoder
//!
//! ## Quick Start
//!
//! ```
//! use zpl_label::{document::Element, interpret};
//!
//! let result = interpret("^XA^FO10,20^GB100,50,2,B^FS^FO10,20^FDHello^FS^XZ");
//! assert!(result.diagnostics.is_empty());
//!
//! let kinds: Vec<_> = result.document.iter().map(Element::kind).collect();
//! assert_eq!(kinds, vec!["box", "text"]);
//! ```
//!
//! Embedding an image goes the other way:
//!
//! ```
//! use zpl_label::raster::{Bitmap, Threshold, graphic_field};
//!
//! let img = image::RgbImage::from_pixel(16, 2, image::Rgb([0, 0, 0]));
//! let bitmap = Bitmap::from_rgb(&img, Threshold::DEFAULT);
//! assert_eq!(graphic_field(&bitmap, true), "^GFA,4,4,2,!:");
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`interpreter`] | Command dispatch and interpreter state |
//! | [`protocol`] | Tokenizer and typed argument access |
//! | [`document`] | Label document and element types |
//! | [`raster`] | Bitmap threshold, `^GF` encoder and decoder |
//! | [`gs1`] | GS1 Application Identifier formatting |
//! | [`render`] | Canvas / symbol encoder traits and render driver |
//! | [`printer`] | Label presets |
//! | [`diagnostic`] | Recoverable problems and their sinks |
//! | [`error`] | Error types |

pub mod diagnostic;
pub mod document;
pub mod error;
pub mod gs1;
pub mod interpreter;
pub mod printer;
pub mod protocol;
pub mod raster;
pub mod render;

// Re-exports for convenience
pub use document::LabelDocument;
pub use error::LabelError;
pub use interpreter::{Interpretation, interpret, interpret_with};
pub use printer::LabelConfig;
