//! # ZPL Raster Codec
//!
//! Converts monochrome bitmaps to and from the hex-ASCII body of the `^GFA`
//! (graphic field, ASCII) command.
//!
//! ## Pipeline
//!
//! ```text
//! RGB image ──threshold──► Bitmap ──hex──► rows ──RLE──► "G0GF,!:"
//!                            ▲                              │
//!                            └──────── decode ◄─────────────┘
//! ```
//!
//! Decoding reconstructs ink bits only; the original colors are gone after
//! thresholding.
//!
//! ## Compression Tokens
//!
//! | Token | Meaning |
//! |-------|---------|
//! | `G`..`Y` | repeat next digit 1..19 times |
//! | `g`..`z` | repeat next digit 20..400 times (steps of 20) |
//! | `,` | rest of the row is `0` |
//! | `!` | rest of the row is `F` |
//! | `:` | same as the previous row |
//!
//! ## Example
//!
//! ```
//! use zpl_label::raster::{self, Bitmap};
//!
//! let bitmap = Bitmap::from_fn(16, 4, |x, y| y == 0 || x == 0);
//! let body = raster::encode(&bitmap);
//! assert_eq!(body, "!G8,::");
//!
//! let decoded = raster::decode(&body, bitmap.bytes_per_row(), bitmap.height());
//! assert_eq!(decoded, bitmap);
//! ```

mod bitmap;
mod decode;
mod encode;
pub mod rle;

pub use bitmap::{Bitmap, MAX_CHANNEL_SUM, Threshold, bytes_per_row};
pub use decode::{MAX_FIELD_BYTES, decode, decode_with, expand, field_size, hex_to_bytes};
pub use encode::{compress, compress_row, encode, encode_hex, graphic_field};
