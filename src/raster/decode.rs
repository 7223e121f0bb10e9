//! ZPL hex-ASCII (compressed or plain) → bitmap.
//!
//! Decoding never fails. Unknown characters are skipped, short rows are
//! padded with `0`, and pixels the data does not reach stay non-ink. When the
//! data falls short of the declared geometry a
//! [`CodecOutOfRange`](crate::diagnostic::DiagnosticKind::CodecOutOfRange)
//! diagnostic is reported. Geometry larger than [`MAX_FIELD_BYTES`] decodes
//! to an empty bitmap.

use super::bitmap::Bitmap;
use super::rle;
use crate::diagnostic::{Diagnostic, DiagnosticKind, DiagnosticSink, NullSink};

/// Largest graphic field accepted, in packed bytes.
pub const MAX_FIELD_BYTES: usize = 16 * 1024 * 1024;

/// Pixel `(width, height)` of a `bytes_per_row` × `height` field, or `None`
/// when the field exceeds [`MAX_FIELD_BYTES`] or the width overflows `u32`.
///
/// ```
/// use zpl_label::raster::field_size;
///
/// assert_eq!(field_size(2, 3), Some((16, 3)));
/// assert_eq!(field_size(usize::MAX, 0), None);
/// ```
pub fn field_size(bytes_per_row: usize, height: u32) -> Option<(u32, u32)> {
    let total = bytes_per_row.checked_mul(height as usize)?;
    if total > MAX_FIELD_BYTES || bytes_per_row > MAX_FIELD_BYTES {
        return None;
    }
    let width = u32::try_from(bytes_per_row.checked_mul(8)?).ok()?;
    Some((width, height))
}

/// Decode a `^GFA` body into a `bytes_per_row * 8` × `height` bitmap.
///
/// ```
/// use zpl_label::raster::decode;
///
/// let bitmap = decode("!", 1, 1);
/// assert_eq!(bitmap.width(), 8);
/// assert_eq!(bitmap.ink_count(), 8);
/// ```
pub fn decode(data: &str, bytes_per_row: usize, height: u32) -> Bitmap {
    decode_with(data, bytes_per_row, height, &mut NullSink)
}

/// [`decode`], reporting shortfalls to `sink`.
pub fn decode_with<S: DiagnosticSink>(
    data: &str,
    bytes_per_row: usize,
    height: u32,
    sink: &mut S,
) -> Bitmap {
    let Some((width, height)) = field_size(bytes_per_row, height) else {
        sink.report(Diagnostic::new(
            DiagnosticKind::CodecOutOfRange,
            format!(
                "{} rows of {} bytes exceed the {} byte field limit",
                height, bytes_per_row, MAX_FIELD_BYTES
            ),
        ));
        return Bitmap::new(0, 0);
    };
    let mut bitmap = Bitmap::new(width, height);

    let bytes: Vec<u8> = expand_rows(data, bytes_per_row, height as usize)
        .iter()
        .flat_map(|row| hex_to_bytes(row))
        .collect();

    let mut out_of_range = false;
    for y in 0..height {
        for x in 0..width {
            let byte_index = y as usize * bytes_per_row + x as usize / 8;
            let bit_index = 7 - (x % 8);
            match bytes.get(byte_index) {
                Some(byte) => bitmap.set(x, y, (byte >> bit_index) & 1 == 1),
                None => out_of_range = true,
            }
        }
    }

    if out_of_range {
        let needed = bytes_per_row * height as usize;
        sink.report(Diagnostic::new(
            DiagnosticKind::CodecOutOfRange,
            format!(
                "graphic data covers {} of {} bytes; remaining pixels left blank",
                bytes.len().min(needed),
                needed
            ),
        ));
    }

    bitmap
}

/// Expand a compressed body into uncompressed hex rows of exactly
/// `bytes_per_row * 2` digits.
///
/// | Token | Meaning |
/// |-------|---------|
/// | `0`-`9` `A`-`F` | literal digit (lowercase accepted) |
/// | `G`-`Y` `g`-`z` | repeat the next digit, counts add up |
/// | `,` | fill the rest of the row with `0` |
/// | `!` | fill the rest of the row with `F` |
/// | `:` | repeat the previous row |
///
/// A row ends once it holds `bytes_per_row * 2` digits; the excess of a run
/// that would overflow it is dropped. Output stops at [`MAX_FIELD_BYTES`]
/// worth of rows.
///
/// ```
/// use zpl_label::raster::expand;
///
/// assert_eq!(expand("GA,!:", 2), vec!["A000", "FFFF", "FFFF"]);
/// ```
pub fn expand(data: &str, bytes_per_row: usize) -> Vec<String> {
    expand_rows(data, bytes_per_row, usize::MAX)
}

/// [`expand`], stopping after `max_rows` rows.
fn expand_rows(data: &str, bytes_per_row: usize, max_rows: usize) -> Vec<String> {
    if bytes_per_row == 0 || bytes_per_row > MAX_FIELD_BYTES {
        return Vec::new();
    }
    let max_rows = max_rows.min(MAX_FIELD_BYTES / bytes_per_row);
    let mut rows = RowBuilder::new(bytes_per_row * 2, max_rows);

    let mut pending = 0usize;
    for ch in data.chars() {
        if rows.is_full() {
            break;
        }
        if let Some(count) = rle::letter_count(ch) {
            pending = pending.saturating_add(count);
            continue;
        }
        match ch {
            '0'..='9' | 'A'..='F' | 'a'..='f' => {
                rows.push_run(ch.to_ascii_uppercase(), pending.max(1));
            }
            ',' => rows.fill('0'),
            '!' => rows.fill('F'),
            ':' => rows.repeat_previous(),
            _ => {
                tracing::trace!(char = ?ch, "skipping character in graphic data");
            }
        }
        pending = 0;
    }
    rows.finish()
}

/// Hex digits → bytes. An odd trailing digit is read as if followed by `0`;
/// non-hex characters read as `0`.
///
/// ```
/// use zpl_label::raster::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("FF0A"), vec![0xFF, 0x0A]);
/// assert_eq!(hex_to_bytes("ABC"), vec![0xAB, 0xC0]);
/// ```
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    let nibbles: Vec<u8> = hex
        .chars()
        .map(|c| c.to_digit(16).unwrap_or(0) as u8)
        .collect();
    nibbles
        .chunks(2)
        .map(|pair| (pair[0] << 4) | pair.get(1).copied().unwrap_or(0))
        .collect()
}

struct RowBuilder {
    row_len: usize,
    max_rows: usize,
    rows: Vec<String>,
    current: String,
}

impl RowBuilder {
    fn new(row_len: usize, max_rows: usize) -> Self {
        Self {
            row_len,
            max_rows,
            rows: Vec::new(),
            current: String::new(),
        }
    }

    fn is_full(&self) -> bool {
        self.rows.len() >= self.max_rows
    }

    fn push_run(&mut self, digit: char, count: usize) {
        let room = self.row_len - self.current.len();
        for _ in 0..count.min(room) {
            self.current.push(digit);
        }
        if self.current.len() == self.row_len {
            self.complete();
        }
    }

    fn fill(&mut self, digit: char) {
        while self.current.len() < self.row_len {
            self.current.push(digit);
        }
        self.complete();
    }

    fn repeat_previous(&mut self) {
        if !self.current.is_empty() {
            self.fill('0');
        }
        let row = match self.rows.last() {
            Some(previous) => previous.clone(),
            None => "0".repeat(self.row_len),
        };
        self.push_row(row);
    }

    fn complete(&mut self) {
        let row = std::mem::take(&mut self.current);
        self.push_row(row);
    }

    fn push_row(&mut self, row: String) {
        if !self.is_full() {
            self.rows.push(row);
        }
    }

    fn finish(mut self) -> Vec<String> {
        if !self.current.is_empty() && !self.is_full() {
            self.fill('0');
        }
        self.rows
    }
}
