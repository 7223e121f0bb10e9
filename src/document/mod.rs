//! # Label Document
//!
//! Ordered container of positioned elements. Elements are kept in the order
//! they were added and must be drawn in that order: later elements may cover
//! earlier ones.
//!
//! The same type is built by the interpreter, constructed by hand, and
//! exchanged as JSON.
//!
//! ```
//! use zpl_label::document::{Element, LabelDocument, LogoElement};
//!
//! // Rust construction
//! let mut doc = LabelDocument::new(800, 1200);
//! doc.push(LogoElement::new(10, 10, "logo.png"));
//!
//! // JSON round trip
//! let json = doc.to_json()?;
//! let back = LabelDocument::from_json(&json)?;
//! assert_eq!(back, doc);
//! assert!(matches!(back.elements[0], Element::Logo(_)));
//! # Ok::<(), zpl_label::LabelError>(())
//! ```

pub mod types;

pub use types::*;

use serde::{Deserialize, Serialize};

use crate::error::LabelError;
use crate::printer::LabelConfig;

/// A label: canvas size plus elements in drawing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelDocument {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl LabelDocument {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    /// Empty document sized to a preset's canvas.
    pub fn from_config(config: &LabelConfig) -> Self {
        Self::new(config.width, config.height)
    }

    /// Append an element after every existing one.
    pub fn push(&mut self, element: impl Into<Element>) {
        self.elements.push(element.into());
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn to_json(&self) -> Result<String, LabelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, LabelError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for LabelDocument {
    fn default() -> Self {
        Self::from_config(&LabelConfig::default())
    }
}

impl<'a> IntoIterator for &'a LabelDocument {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
