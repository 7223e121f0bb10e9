//! # GS1 Payload Formatting
//!
//! Reshapes ZPL GS1-128 field data into the element string a Code 128 symbol
//! encoder expects.
//!
//! ## ZPL Markers
//!
//! | Marker | Meaning |
//! |--------|---------|
//! | `>;` | start/stop pair around the whole payload; also splits fields |
//! | `>8` | group separator between variable-length fields |
//! | `;` | leading marker of a field that starts with an AI |
//!
//! ## Output
//!
//! Each field becomes `(AI)value`; fields are joined with
//! [`FIELD_SEPARATOR`] (ASCII GS), which is also prepended once.
//!
//! ```
//! use zpl_label::gs1;
//!
//! let formatted = gs1::format(">;;0109501101530003>8;17140704>8;10AB-123>;");
//! assert_eq!(formatted, "\u{1D}(01)09501101530003\u{1D}(17)140704\u{1D}(10)AB-123");
//! ```

mod ai;

pub use ai::{APPLICATION_IDENTIFIERS, is_known, longest_ai};

use crate::diagnostic::{Diagnostic, DiagnosticKind, DiagnosticSink, NullSink};

/// Start/stop pair delimiting a GS1 payload.
pub const START_STOP: &str = ">;";

/// Group separator between fields.
pub const GROUP_SEPARATOR: &str = ">8";

/// Leading marker of an AI field.
pub const FIELD_MARKER: char = ';';

/// Non-printable separator placed between formatted fields (ASCII 29, GS).
pub const FIELD_SEPARATOR: char = '\u{1D}';

/// GS1 DataMatrix FNC1 codeword (232) marking a GS1 payload.
pub const DATAMATRIX_FNC1: char = '\u{E8}';

/// Prefix that flags GS1 data in a DataMatrix field.
pub const DATAMATRIX_GS1_PREFIX: &str = "_1";

/// Payload with its `>;` start/stop pair removed, if it has one. A lone `>;`
/// counts as both markers and strips to nothing.
pub fn strip_start_stop(data: &str) -> Option<&str> {
    if !data.starts_with(START_STOP) || !data.ends_with(START_STOP) {
        return None;
    }
    let inner = data
        .get(START_STOP.len()..data.len() - START_STOP.len())
        .unwrap_or("");
    Some(inner)
}

/// Whether `data` is wrapped in the GS1 start/stop pair.
pub fn is_delimited(data: &str) -> bool {
    strip_start_stop(data).is_some()
}

/// Format a GS1-128 payload. Unknown AIs pass through silently.
pub fn format(raw: &str) -> String {
    format_with(raw, &mut NullSink)
}

/// Format a GS1-128 payload, reporting fields without a known AI.
pub fn format_with<S: DiagnosticSink>(raw: &str, sink: &mut S) -> String {
    let data = strip_start_stop(raw).unwrap_or(raw);

    let mut fragments: Vec<String> = Vec::new();
    for segment in data.split(GROUP_SEPARATOR) {
        for field in segment.split(START_STOP) {
            if let Some(field) = field.strip_prefix(FIELD_MARKER) {
                match longest_ai(field) {
                    Some(ai) => fragments.push(format!("({}){}", ai, &field[ai.len()..])),
                    None => {
                        sink.report(Diagnostic::new(
                            DiagnosticKind::UnknownApplicationIdentifier,
                            format!("no application identifier matches {:?}", field),
                        ));
                        fragments.push(field.to_string());
                    }
                }
            } else if !field.is_empty() {
                fragments.push(field.to_string());
            }
        }
    }

    let mut out = String::new();
    for fragment in &fragments {
        out.push(FIELD_SEPARATOR);
        out.push_str(fragment);
    }
    if fragments.is_empty() {
        out.push(FIELD_SEPARATOR);
    }
    out
}

/// Shape a DataMatrix payload.
///
/// Data starting with `_1` is GS1: the prefix is dropped, every further `_1`
/// becomes a [`FIELD_SEPARATOR`], and [`DATAMATRIX_FNC1`] is prepended. Other
/// data is returned unchanged.
///
/// ```
/// use zpl_label::gs1;
///
/// assert_eq!(gs1::datamatrix_payload("_101095011015300031715_110ABC"),
///            "\u{E8}01095011015300031715\u{1D}10ABC");
/// assert_eq!(gs1::datamatrix_payload("PLAIN"), "PLAIN");
/// ```
pub fn datamatrix_payload(raw: &str) -> String {
    let Some(body) = raw.strip_prefix(DATAMATRIX_GS1_PREFIX) else {
        return raw.to_string();
    };
    let body = body.replace(DATAMATRIX_GS1_PREFIX, &FIELD_SEPARATOR.to_string());
    let formatted = format(&body);
    let mut out = String::with_capacity(formatted.len() + 1);
    out.push(DATAMATRIX_FNC1);
    out.push_str(formatted.strip_prefix(FIELD_SEPARATOR).unwrap_or(&formatted));
    out
}
