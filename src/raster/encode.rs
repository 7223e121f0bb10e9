//! Bitmap → ZPL hex-ASCII, with optional run-length compression.

use super::bitmap::Bitmap;
use super::rle;

/// Hex-digit rows of a bitmap, each terminated by `\n`.
///
/// This is the uncompressed `^GFA` body: two uppercase hex digits per byte.
///
/// ```
/// use zpl_label::raster::{Bitmap, encode_hex};
///
/// let bitmap = Bitmap::from_fn(12, 2, |x, _| x < 4);
/// assert_eq!(encode_hex(&bitmap), "F000\nF000\n");
/// ```
pub fn encode_hex(bitmap: &Bitmap) -> String {
    let mut out = String::with_capacity((bitmap.bytes_per_row() * 2 + 1) * bitmap.height() as usize);
    for row in bitmap.rows() {
        push_hex_row(&mut out, row);
        out.push('\n');
    }
    out
}

/// Compressed `^GFA` body for a bitmap.
///
/// ```
/// use zpl_label::raster::{Bitmap, encode};
///
/// // One all-black byte: the whole row is `F`, so it collapses to `!`
/// let bitmap = Bitmap::from_fn(8, 1, |_, _| true);
/// assert_eq!(encode(&bitmap), "!");
/// ```
pub fn encode(bitmap: &Bitmap) -> String {
    let mut out = String::new();
    let mut hex_row = String::with_capacity(bitmap.bytes_per_row() * 2);
    let mut previous: Option<String> = None;
    for row in bitmap.rows() {
        hex_row.clear();
        push_hex_row(&mut hex_row, row);
        let encoded = compress_row(&hex_row);
        push_row_token(&mut out, &mut previous, encoded);
    }
    out
}

/// Compress an uncompressed hex body (rows separated by line breaks).
///
/// Empty lines are skipped, so a trailing newline is harmless.
///
/// ```
/// use zpl_label::raster::compress;
///
/// assert_eq!(compress("0F00\nFFFF\nFFFF\n"), "G0GF,!:");
/// ```
pub fn compress(hex: &str) -> String {
    let mut out = String::new();
    let mut previous: Option<String> = None;
    for line in hex.lines().map(str::trim_end).filter(|l| !l.is_empty()) {
        push_row_token(&mut out, &mut previous, compress_row(line));
    }
    out
}

/// Run-length encode one row of hex digits.
///
/// A trailing run of `0` becomes `,` and a trailing run of `F` becomes `!`;
/// every other run is its repeat letters followed by the digit.
pub fn compress_row(hex_row: &str) -> String {
    let mut out = String::new();
    let mut chars = hex_row.chars().peekable();
    while let Some(digit) = chars.next() {
        let mut count = 1;
        while chars.peek() == Some(&digit) {
            chars.next();
            count += 1;
        }
        let trailing = chars.peek().is_none();
        match digit {
            '0' if trailing => out.push(','),
            'F' if trailing => out.push('!'),
            _ => {
                rle::push_count(&mut out, count);
                out.push(digit);
            }
        }
    }
    out
}

/// Full `^GFA` command: `^GFA,<total>,<total>,<bytes_per_row>,<data>`.
///
/// ```
/// use zpl_label::raster::{Bitmap, graphic_field};
///
/// let bitmap = Bitmap::from_fn(16, 2, |_, _| true);
/// assert_eq!(graphic_field(&bitmap, true), "^GFA,4,4,2,!:");
/// assert_eq!(graphic_field(&bitmap, false), "^GFA,4,4,2,FFFF\nFFFF\n");
/// ```
pub fn graphic_field(bitmap: &Bitmap, compressed: bool) -> String {
    let total = bitmap.data().len();
    let body = if compressed { encode(bitmap) } else { encode_hex(bitmap) };
    format!("^GFA,{},{},{},{}", total, total, bitmap.bytes_per_row(), body)
}

fn push_row_token(out: &mut String, previous: &mut Option<String>, encoded: String) {
    if previous.as_deref() == Some(encoded.as_str()) {
        out.push(':');
    } else {
        out.push_str(&encoded);
        *previous = Some(encoded);
    }
}

fn push_hex_row(out: &mut String, row: &[u8]) {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    for byte in row {
        out.push(HEX[(byte >> 4) as usize] as char);
        out.push(HEX[(byte & 0x0F) as usize] as char);
    }
}
