//! Typed access to command arguments.
//!
//! Every numeric read yields an [`Arg`], so a handler always gets a usable
//! value and can still tell whether it came from the stream.

use std::str::FromStr;

/// Outcome of reading one argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg<T> {
    /// Present and parsed.
    Parsed(T),
    /// Absent or empty; carries the default.
    Missing(T),
    /// Present but unparsable; carries the default and the offending text.
    Invalid { value: T, raw: String },
}

impl<T> Arg<T> {
    /// The parsed value or the default.
    pub fn value(self) -> T {
        match self {
            Arg::Parsed(v) | Arg::Missing(v) | Arg::Invalid { value: v, .. } => v,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Arg::Invalid { .. })
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, Arg::Parsed(_))
    }
}

/// Arguments following a two-character command code.
///
/// ```
/// use zpl_label::protocol::{Arg, Args};
///
/// let args = Args::split("100, 50,x");
/// assert_eq!(args.len(), 3);
/// assert_eq!(args.number::<u32>(1, 0), Arg::Parsed(50));
/// assert_eq!(args.number::<u32>(3, 7), Arg::Missing(7));
/// assert!(args.number::<u32>(2, 0).is_invalid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Args<'a> {
    parts: Vec<&'a str>,
}

impl<'a> Args<'a> {
    /// Comma-separated arguments. An empty remainder has no arguments.
    pub fn split(raw: &'a str) -> Self {
        if raw.is_empty() {
            return Self::default();
        }
        Self {
            parts: raw.split(',').collect(),
        }
    }

    /// The whole remainder as a single argument, commas included.
    pub fn verbatim(raw: &'a str) -> Self {
        Self { parts: vec![raw] }
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Raw argument text.
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.parts.get(index).copied()
    }

    /// Arguments from `index` on, rejoined with `,`.
    pub fn rest(&self, index: usize) -> String {
        self.parts.get(index..).map(|p| p.join(",")).unwrap_or_default()
    }

    /// Numeric argument, surrounding whitespace ignored.
    pub fn number<T: FromStr>(&self, index: usize, default: T) -> Arg<T> {
        let raw = match self.get(index).map(str::trim) {
            None | Some("") => return Arg::Missing(default),
            Some(raw) => raw,
        };
        match raw.parse() {
            Ok(v) => Arg::Parsed(v),
            Err(_) => Arg::Invalid {
                value: default,
                raw: raw.to_string(),
            },
        }
    }

    /// Single-letter argument restricted to `allowed`; anything else is `default`.
    pub fn choice(&self, index: usize, allowed: &[char], default: char) -> char {
        let raw = self.get(index).map(str::trim).unwrap_or("");
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if allowed.contains(&c) => c,
            _ => default,
        }
    }

    /// `Y`/`N` flag.
    pub fn flag(&self, index: usize, default: bool) -> bool {
        match self.choice(index, &['Y', 'N'], '?') {
            'Y' => true,
            'N' => false,
            _ => default,
        }
    }
}
