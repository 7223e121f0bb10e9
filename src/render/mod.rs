//! # Rendering Driver
//!
//! Hands a finished [`LabelDocument`] to external collaborators: a
//! [`Canvas`] that draws primitives and a [`SymbolEncoder`] that turns barcode
//! payloads into images. Font rasterization, symbol module placement and
//! pixel compositing all live behind these traits.
//!
//! ## Contract
//!
//! | Element | Canvas call |
//! |---------|-------------|
//! | `Text` | [`draw_text`](Canvas::draw_text) with black, or white when reversed |
//! | `Box` | [`draw_box`](Canvas::draw_box) with [`resolved_colors`](BoxElement::resolved_colors) |
//! | `Barcode` | encoder, then [`draw_symbol`](Canvas::draw_symbol) resized to the element size |
//! | `Image` | [`draw_bitmap`](Canvas::draw_bitmap) |
//! | `Logo` | [`draw_logo`](Canvas::draw_logo) |
//!
//! Elements are drawn strictly in document order. The first collaborator
//! error stops the walk.

use image::GrayImage;
use image::imageops::{self, FilterType};

use crate::document::{
    BoxElement, Color, Element, LabelDocument, LogoElement, SymbolParams, Symbology, TextElement,
};
use crate::error::LabelError;
use crate::raster::Bitmap;

/// Drawing surface for label primitives.
pub trait Canvas {
    fn draw_text(&mut self, text: &TextElement, color: Color) -> Result<(), LabelError>;

    /// `line` and `fill` are already swapped for reversed boxes.
    fn draw_box(
        &mut self,
        frame: &BoxElement,
        line: Color,
        fill: Option<Color>,
    ) -> Result<(), LabelError>;

    fn draw_bitmap(&mut self, x: u32, y: u32, bitmap: &Bitmap) -> Result<(), LabelError>;

    /// Paste an encoded symbol, already resized to the element size.
    fn draw_symbol(&mut self, x: u32, y: u32, symbol: &GrayImage) -> Result<(), LabelError>;

    fn draw_logo(&mut self, logo: &LogoElement) -> Result<(), LabelError>;
}

/// What the symbol encoder is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolRequest<'a> {
    /// Encoder-ready data (GS1 payloads already formatted)
    pub data: &'a str,
    pub symbology: Symbology,
    pub height: u32,
    pub quality: u32,
    pub params: &'a SymbolParams,
}

/// Barcode / DataMatrix generator.
pub trait SymbolEncoder {
    fn encode(&mut self, request: &SymbolRequest<'_>) -> Result<GrayImage, LabelError>;
}

/// Draw every element of `document` in order.
pub fn render<C, E>(
    document: &LabelDocument,
    canvas: &mut C,
    encoder: &mut E,
) -> Result<(), LabelError>
where
    C: Canvas + ?Sized,
    E: SymbolEncoder + ?Sized,
{
    tracing::debug!(
        width = document.width,
        height = document.height,
        elements = document.len(),
        "rendering label"
    );

    for element in document {
        match element {
            Element::Text(text) => canvas.draw_text(text, text.color())?,
            Element::Box(frame) => {
                let (line, fill) = frame.resolved_colors();
                canvas.draw_box(frame, line, fill)?;
            }
            Element::Barcode(barcode) => {
                let request = SymbolRequest {
                    data: &barcode.payload,
                    symbology: barcode.symbology,
                    height: barcode.height,
                    quality: barcode.quality,
                    params: &barcode.params,
                };
                let symbol = encoder.encode(&request)?;
                let symbol = fit_symbol(&symbol, barcode.width, barcode.height);
                canvas.draw_symbol(barcode.x, barcode.y, &symbol)?;
            }
            Element::Image(image) => canvas.draw_bitmap(image.x, image.y, &image.bitmap)?,
            Element::Logo(logo) => canvas.draw_logo(logo)?,
        }
    }
    Ok(())
}

/// Nearest-neighbour resize, so bar edges stay sharp.
fn fit_symbol(symbol: &GrayImage, width: u32, height: u32) -> GrayImage {
    let (width, height) = (width.max(1), height.max(1));
    if symbol.dimensions() == (width, height) {
        return symbol.clone();
    }
    imageops::resize(symbol, width, height, FilterType::Nearest)
}
