use embedded_graphics::image::ImageRaw;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{OriginDimensions, Size};

use crate::color::Rgba;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PaintStyle {
    Stroke,
    Fill,
}

/// How a primitive is drawn. A stroke width of zero means a hairline.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Paint {
    pub style: PaintStyle,
    pub color: Rgba,
    pub stroke_width: f32,
}

impl Paint {
    pub const fn stroke(color: Rgba, stroke_width: f32) -> Self {
        Self {
            style: PaintStyle::Stroke,
            color,
            stroke_width,
        }
    }

    pub const fn fill(color: Rgba) -> Self {
        Self {
            style: PaintStyle::Fill,
            color,
            stroke_width: 0.0,
        }
    }
}

/// The drawing surface a widget paints onto.
///
/// Geometry is in fractional pixels; rasterizing backends decide how to snap
/// it to the pixel grid.
pub trait Canvas {
    type Error;

    fn draw_round_rect(
        &mut self,
        rect: RectF,
        rx: f32,
        ry: f32,
        paint: &Paint,
    ) -> Result<(), Self::Error>;

    fn draw_rect(&mut self, rect: RectF, paint: &Paint) -> Result<(), Self::Error>;

    fn draw_line(&mut self, from: PointF, to: PointF, paint: &Paint) -> Result<(), Self::Error>;

    fn draw_image(
        &mut self,
        image: &BadgeImage<'_>,
        left: f32,
        top: f32,
        paint: &Paint,
    ) -> Result<(), Self::Error>;
}

pub const CHARGE_BADGE_WIDTH: u32 = 8;

/// Lightning bolt, one byte per row, most significant bit leftmost.
pub const CHARGE_BADGE: [u8; 12] = [
    0b0000_0110,
    0b0000_1100,
    0b0001_1000,
    0b0011_0000,
    0b0111_1110,
    0b0111_1110,
    0b0000_1100,
    0b0001_1000,
    0b0011_0000,
    0b0110_0000,
    0b0100_0000,
    0b1000_0000,
];

/// A decoded, immutable 1-bit image mask together with the color its set
/// pixels are inked with. Unset pixels are transparent.
#[derive(Copy, Clone, Debug)]
pub struct BadgeImage<'a> {
    raw: ImageRaw<'a, BinaryColor>,
    color: Rgba,
}

impl<'a> BadgeImage<'a> {
    /// Returns `None` when `data` does not hold a whole number of
    /// `width`-pixel rows.
    pub fn new(data: &'a [u8], width: u32, color: Rgba) -> Option<Self> {
        if width == 0 || data.is_empty() {
            return None;
        }

        let stride = (width as usize + 7) / 8;

        if data.len() % stride != 0 {
            return None;
        }

        Some(Self {
            raw: ImageRaw::new(data, width),
            color,
        })
    }

    pub fn raw(&self) -> &ImageRaw<'a, BinaryColor> {
        &self.raw
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn size(&self) -> Size {
        self.raw.size()
    }
}

impl BadgeImage<'static> {
    pub fn charge() -> Self {
        Self {
            raw: ImageRaw::new(&CHARGE_BADGE, CHARGE_BADGE_WIDTH),
            color: Rgba::BLACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_badge() {
        let badge = BadgeImage::charge();

        assert_eq!(badge.size(), Size::new(8, 12));
        assert_eq!(badge.color(), Rgba::BLACK);
    }

    #[test]
    fn rejects_undecodable_data() {
        assert!(BadgeImage::new(&[], 8, Rgba::BLACK).is_none());
        assert!(BadgeImage::new(&CHARGE_BADGE, 0, Rgba::BLACK).is_none());
        // 12 pixels wide needs two bytes per row
        assert!(BadgeImage::new(&[0xFF; 3], 12, Rgba::BLACK).is_none());
    }

    #[test]
    fn multi_byte_rows() {
        let badge = BadgeImage::new(&[0xFF; 6], 12, Rgba::RED).unwrap();

        assert_eq!(badge.size(), Size::new(12, 3));
    }

    #[test]
    fn rect_extent() {
        let rect = RectF::new(2.5, 2.5, 92.5, 37.5);

        assert_eq!(rect.width(), 90.0);
        assert_eq!(rect.height(), 35.0);
    }
}
