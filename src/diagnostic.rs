//! # Diagnostics
//!
//! Non-fatal problems found while interpreting a command stream or decoding
//! raster data. Every one of them is recovered locally (the command is skipped
//! or a default is substituted) and then handed to a [`DiagnosticSink`].
//!
//! ```
//! use zpl_label::diagnostic::DiagnosticKind;
//! use zpl_label::interpreter::interpret;
//!
//! let result = interpret("^XA^FO10^ZZ^XZ");
//! let kinds: Vec<_> = result.diagnostics.iter().map(|d| d.kind).collect();
//! assert_eq!(kinds, vec![DiagnosticKind::MalformedCommand, DiagnosticKind::UnknownCommand]);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Machine-readable category of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Fewer arguments than the command requires. The command was skipped.
    MalformedCommand,
    /// A numeric argument did not parse. The documented default was used.
    InvalidNumeric,
    /// Command code not in the dispatch table. The command was skipped.
    UnknownCommand,
    /// Raster data too short for the declared geometry. Missing pixels are non-ink.
    CodecOutOfRange,
    /// GS1 field without a known Application Identifier. Passed through verbatim.
    UnknownApplicationIdentifier,
}

impl DiagnosticKind {
    /// Stable string tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::MalformedCommand => "MALFORMED_COMMAND",
            DiagnosticKind::InvalidNumeric => "INVALID_NUMERIC",
            DiagnosticKind::UnknownCommand => "UNKNOWN_COMMAND",
            DiagnosticKind::CodecOutOfRange => "CODEC_OUT_OF_RANGE",
            DiagnosticKind::UnknownApplicationIdentifier => "UNKNOWN_APPLICATION_IDENTIFIER",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recovered problem, with optional source context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Human-readable description.
    pub message: String,
    /// Two-character command code the problem belongs to, if any.
    pub code: Option<String>,
    /// Index of the command in the stream (0-based, empty commands not counted).
    pub index: Option<usize>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            code: None,
            index: None,
        }
    }

    /// Attach the command code and stream index.
    pub fn at(mut self, code: impl Into<String>, index: usize) -> Self {
        self.code = Some(code.into());
        self.index = Some(index);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.code, self.index) {
            (Some(code), Some(index)) => {
                write!(f, "[{}] ^{} (#{}): {}", self.kind, code, index, self.message)
            }
            (Some(code), None) => write!(f, "[{}] ^{}: {}", self.kind, code, self.message),
            _ => write!(f, "[{}] {}", self.kind, self.message),
        }
    }
}

// ============================================================================
// SINKS
// ============================================================================

/// Receiver for diagnostics.
///
/// The interpreter, the raster decoder and the GS1 formatter report into a
/// sink instead of printing, so callers decide whether to collect, log or
/// drop them.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

/// Forwards each diagnostic to `tracing` at WARN level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(
            kind = diagnostic.kind.as_str(),
            code = diagnostic.code.as_deref().unwrap_or(""),
            index = diagnostic.index,
            "{}",
            diagnostic.message
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_collects_in_order() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.report(Diagnostic::new(DiagnosticKind::UnknownCommand, "first"));
        sink.report(Diagnostic::new(DiagnosticKind::InvalidNumeric, "second"));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].message, "first");
        assert_eq!(sink[1].kind, DiagnosticKind::InvalidNumeric);
    }

    #[test]
    fn test_reborrowed_sink_reports_into_owner() {
        fn report_into<S: DiagnosticSink>(mut sink: S) {
            sink.report(Diagnostic::new(DiagnosticKind::CodecOutOfRange, "short"));
        }

        let mut sink: Vec<Diagnostic> = Vec::new();
        report_into(&mut sink);
        report_into(&mut sink);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_display_with_context() {
        let d = Diagnostic::new(DiagnosticKind::MalformedCommand, "expected 3 arguments, got 1")
            .at("GB", 4);
        assert_eq!(
            d.to_string(),
            "[MALFORMED_COMMAND] ^GB (#4): expected 3 arguments, got 1"
        );
    }

    #[test]
    fn test_display_without_context() {
        let d = Diagnostic::new(DiagnosticKind::UnknownApplicationIdentifier, "no AI for 77x");
        assert_eq!(d.to_string(), "[UNKNOWN_APPLICATION_IDENTIFIER] no AI for 77x");
    }

    #[test]
    fn test_kind_tags_are_distinct() {
        let kinds = [
            DiagnosticKind::MalformedCommand,
            DiagnosticKind::InvalidNumeric,
            DiagnosticKind::UnknownCommand,
            DiagnosticKind::CodecOutOfRange,
            DiagnosticKind::UnknownApplicationIdentifier,
        ];
        let mut tags: Vec<_> = kinds.iter().map(|k| k.as_str()).collect();
        tags.sort();
        tags.dedup();
        assert_eq!(tags.len(), kinds.len());
    }
}
