use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::image::Image;
use embedded_graphics::pixelcolor::{BinaryColor, Rgb888};
use embedded_graphics::prelude::{Dimensions, Point, Primitive, Size};
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::{Drawable, Pixel};

use crate::canvas::{BadgeImage, Canvas, Paint, PaintStyle, PointF, RectF};
use crate::color::Rgba;

pub trait FlushableDrawTarget: DrawTarget {
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Gives a plain display a flush step, run by `flush`.
pub struct FlushableAdaptor<F, D> {
    flush: F,
    display: D,
}

impl<F, D> FlushableAdaptor<F, D> {
    pub fn new(flush: F, display: D) -> Self {
        Self { flush, display }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn release(self) -> D {
        self.display
    }
}

impl<D> FlushableAdaptor<fn(&mut D) -> Result<(), D::Error>, D>
where
    D: DrawTarget,
{
    pub fn noop(display: D) -> Self {
        Self {
            flush: |_| Ok(()),
            display,
        }
    }
}

impl<F, D> FlushableDrawTarget for FlushableAdaptor<F, D>
where
    F: FnMut(&mut D) -> Result<(), D::Error>,
    D: DrawTarget,
{
    fn flush(&mut self) -> Result<(), Self::Error> {
        (self.flush)(&mut self.display)
    }
}

impl<F, D> DrawTarget for FlushableAdaptor<F, D>
where
    D: DrawTarget,
{
    type Error = D::Error;

    type Color = D::Color;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.display.draw_iter(pixels)
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        self.display.fill_contiguous(area, colors)
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.display.fill_solid(area, color)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.display.clear(color)
    }
}

impl<F, D> Dimensions for FlushableAdaptor<F, D>
where
    D: Dimensions,
{
    fn bounding_box(&self) -> Rectangle {
        self.display.bounding_box()
    }
}

/// Inks the set pixels of a 1-bit mask with one color and leaves the unset
/// ones untouched.
pub struct TintAdaptor<'d, D>
where
    D: DrawTarget,
{
    color: D::Color,
    display: &'d mut D,
}

impl<'d, D> TintAdaptor<'d, D>
where
    D: DrawTarget,
{
    pub fn new(color: D::Color, display: &'d mut D) -> Self {
        Self { color, display }
    }
}

impl<'d, D> DrawTarget for TintAdaptor<'d, D>
where
    D: DrawTarget,
{
    type Error = D::Error;

    type Color = BinaryColor;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let color = self.color;

        self.display.draw_iter(
            pixels
                .into_iter()
                .filter(|pixel| pixel.1.is_on())
                .map(|pixel| Pixel(pixel.0, color)),
        )
    }
}

impl<'d, D> Dimensions for TintAdaptor<'d, D>
where
    D: DrawTarget,
{
    fn bounding_box(&self) -> Rectangle {
        self.display.bounding_box()
    }
}

/// Rasterizes [`Canvas`] calls onto an embedded-graphics display.
///
/// Coordinates are rounded to the nearest pixel and strokes are centered on
/// the outline. Fully transparent paints draw nothing.
pub struct DisplayCanvas<'d, D> {
    display: &'d mut D,
}

impl<'d, D> DisplayCanvas<'d, D>
where
    D: DrawTarget,
    D::Color: From<Rgb888>,
{
    pub fn new(display: &'d mut D) -> Self {
        Self { display }
    }

    fn style(paint: &Paint) -> PrimitiveStyle<D::Color> {
        let color = to_color(paint.color);

        match paint.style {
            PaintStyle::Stroke => PrimitiveStyle::with_stroke(color, stroke_width(paint)),
            PaintStyle::Fill => PrimitiveStyle::with_fill(color),
        }
    }
}

impl<'d, D> Canvas for DisplayCanvas<'d, D>
where
    D: DrawTarget,
    D::Color: From<Rgb888>,
{
    type Error = D::Error;

    fn draw_round_rect(
        &mut self,
        rect: RectF,
        rx: f32,
        ry: f32,
        paint: &Paint,
    ) -> Result<(), Self::Error> {
        if paint.color.is_transparent() {
            return Ok(());
        }

        RoundedRectangle::with_equal_corners(
            to_rectangle(rect),
            Size::new(px(rx).max(0) as u32, px(ry).max(0) as u32),
        )
        .into_styled(Self::style(paint))
        .draw(self.display)
    }

    fn draw_rect(&mut self, rect: RectF, paint: &Paint) -> Result<(), Self::Error> {
        if paint.color.is_transparent() {
            return Ok(());
        }

        to_rectangle(rect)
            .into_styled(Self::style(paint))
            .draw(self.display)
    }

    fn draw_line(&mut self, from: PointF, to: PointF, paint: &Paint) -> Result<(), Self::Error> {
        if paint.color.is_transparent() {
            return Ok(());
        }

        // A line has no interior, so it is stroked whatever the paint style
        Line::new(to_point(from), to_point(to))
            .into_styled(PrimitiveStyle::with_stroke(
                to_color(paint.color),
                stroke_width(paint),
            ))
            .draw(self.display)
    }

    fn draw_image(
        &mut self,
        image: &BadgeImage<'_>,
        left: f32,
        top: f32,
        _paint: &Paint,
    ) -> Result<(), Self::Error> {
        if image.color().is_transparent() {
            return Ok(());
        }

        Image::new(image.raw(), Point::new(px(left), px(top)))
            .draw(&mut TintAdaptor::new(to_color(image.color()), self.display))
    }
}

fn to_color<C>(color: Rgba) -> C
where
    C: From<Rgb888>,
{
    Rgb888::from(color).into()
}

fn to_point(point: PointF) -> Point {
    Point::new(px(point.x), px(point.y))
}

fn to_rectangle(rect: RectF) -> Rectangle {
    let top_left = Point::new(px(rect.left), px(rect.top));
    let bottom_right = Point::new(px(rect.right), px(rect.bottom));

    Rectangle::new(
        top_left,
        Size::new(
            (bottom_right.x - top_left.x).max(0) as u32,
            (bottom_right.y - top_left.y).max(0) as u32,
        ),
    )
}

/// Hairlines (zero width) are one pixel wide.
fn stroke_width(paint: &Paint) -> u32 {
    px(paint.stroke_width).max(1) as u32
}

/// Rounds half away from zero; `f32::round` is not available in `core`.
fn px(value: f32) -> i32 {
    if value >= 0.0 {
        (value + 0.5) as i32
    } else {
        (value - 0.5) as i32
    }
}
