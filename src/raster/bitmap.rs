//! Packed 1-bit bitmaps and the ink threshold used to produce them.

use image::{DynamicImage, GrayImage, Luma, RgbImage};
use serde::{Deserialize, Serialize};

/// Largest possible `r + g + b` for an 8-bit RGB pixel.
pub const MAX_CHANNEL_SUM: u16 = 765;

/// # Blackness Threshold
///
/// A pixel is ink when `r + g + b <= black_limit`. The boundary is inclusive.
///
/// ```
/// use zpl_label::raster::Threshold;
///
/// let t = Threshold::DEFAULT;
/// assert!(t.is_ink(0, 0, 0));
/// assert!(!t.is_ink(255, 255, 255));
/// assert_eq!(Threshold::from_percentage(100).black_limit, 765);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold {
    /// Highest channel sum still counted as ink
    pub black_limit: u16,
}

impl Threshold {
    /// About half of [`MAX_CHANNEL_SUM`].
    pub const DEFAULT: Self = Self { black_limit: 380 };

    /// Limit expressed as a percentage of [`MAX_CHANNEL_SUM`], clamped to 100.
    pub fn from_percentage(percent: u8) -> Self {
        let percent = percent.min(100) as u16;
        Self {
            black_limit: percent * MAX_CHANNEL_SUM / 100,
        }
    }

    #[inline]
    pub fn is_ink(&self, r: u8, g: u8, b: u8) -> bool {
        r as u16 + g as u16 + b as u16 <= self.black_limit
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// # Monochrome Bitmap
///
/// Row-major, 8 pixels per byte, most significant bit = leftmost pixel,
/// 1 = ink. Each row occupies `bytes_per_row = ceil(width / 8)` bytes and the
/// unused low bits of the last byte stay zero.
///
/// ```text
/// width = 10, bytes_per_row = 2
///
///   byte 0    byte 1
/// ┌────────┬────────┐
/// │76543210│76______│  ← bits 5..0 of byte 1 are padding
/// └────────┴────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBitmap")]
pub struct Bitmap {
    width: u32,
    height: u32,
    bytes_per_row: usize,
    data: Vec<u8>,
}

/// Unchecked serialized form of [`Bitmap`].
#[derive(Deserialize)]
struct RawBitmap {
    width: u32,
    height: u32,
    bytes_per_row: usize,
    data: Vec<u8>,
}

impl TryFrom<RawBitmap> for Bitmap {
    type Error = String;

    fn try_from(raw: RawBitmap) -> Result<Self, Self::Error> {
        let expected_bpr = bytes_per_row(raw.width);
        if raw.bytes_per_row != expected_bpr {
            return Err(format!(
                "bitmap of width {} needs {} bytes per row, got {}",
                raw.width, expected_bpr, raw.bytes_per_row
            ));
        }
        let expected_len = expected_bpr.checked_mul(raw.height as usize);
        if expected_len != Some(raw.data.len()) {
            return Err(format!(
                "bitmap of {}x{} needs {} bytes of data, got {}",
                raw.width,
                raw.height,
                expected_bpr.saturating_mul(raw.height as usize),
                raw.data.len()
            ));
        }
        Ok(Self {
            width: raw.width,
            height: raw.height,
            bytes_per_row: raw.bytes_per_row,
            data: raw.data,
        })
    }
}

impl Bitmap {
    /// Blank (all non-ink) bitmap.
    pub fn new(width: u32, height: u32) -> Self {
        let bytes_per_row = bytes_per_row(width);
        Self {
            width,
            height,
            bytes_per_row,
            data: vec![0; bytes_per_row * height as usize],
        }
    }

    /// Build a bitmap by asking `ink(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, ink: impl Fn(u32, u32) -> bool) -> Self {
        let mut bitmap = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                if ink(x, y) {
                    bitmap.set(x, y, true);
                }
            }
        }
        bitmap
    }

    /// Threshold an RGB image.
    pub fn from_rgb(image: &RgbImage, threshold: Threshold) -> Self {
        Self::from_fn(image.width(), image.height(), |x, y| {
            let [r, g, b] = image.get_pixel(x, y).0;
            threshold.is_ink(r, g, b)
        })
    }

    /// Threshold any decoded image (alpha is ignored).
    pub fn from_image(image: &DynamicImage, threshold: Threshold) -> Self {
        Self::from_rgb(&image.to_rgb8(), threshold)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bytes_per_row(&self) -> usize {
        self.bytes_per_row
    }

    /// Packed rows, `bytes_per_row * height` bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Iterate packed rows.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        let bpr = self.bytes_per_row;
        (0..self.height as usize).map(move |y| &self.data[y * bpr..(y + 1) * bpr])
    }

    /// Ink at `(x, y)`. Out-of-bounds coordinates read as non-ink.
    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let (index, mask) = self.locate(x, y);
        self.data[index] & mask != 0
    }

    /// Set ink at `(x, y)`. Out-of-bounds coordinates are ignored.
    pub fn set(&mut self, x: u32, y: u32, ink: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let (index, mask) = self.locate(x, y);
        if ink {
            self.data[index] |= mask;
        } else {
            self.data[index] &= !mask;
        }
    }

    /// Number of ink pixels.
    pub fn ink_count(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Render as grayscale: ink = 0 (black), everything else = 255.
    pub fn to_gray_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| {
            if self.get(x, y) { Luma([0]) } else { Luma([255]) }
        })
    }

    #[inline]
    fn locate(&self, x: u32, y: u32) -> (usize, u8) {
        let index = y as usize * self.bytes_per_row + x as usize / 8;
        let mask = 1u8 << (7 - (x % 8));
        (index, mask)
    }
}

/// `ceil(width / 8)`
#[inline]
pub fn bytes_per_row(width: u32) -> usize {
    width.div_ceil(8) as usize
}
