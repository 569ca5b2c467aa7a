use log::{debug, warn};

use crate::canvas::{BadgeImage, Canvas, Paint, PointF, RectF};
use crate::color::Rgba;
use crate::status::BatteryStatus;
use crate::style::BatteryStyle;

pub const MIN_POWER: i32 = 1;
pub const MAX_POWER: i32 = 100;

/// Below this level the glyph turns red.
pub const LOW_POWER_THRESHOLD: i32 = 30;

/// Corner radius of the outer frame.
pub const RADIUS: f32 = 4.0;

/// Gap between the inner edge of the frame and the charge fill.
pub const SPACE_BETWEEN: f32 = 2.0;

/// Stroke width of the "no data" cross.
pub const CROSS_STROKE_WIDTH: f32 = 2.0;

/// Layout of the glyph derived from the measured size alone.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Geometry {
    pub width: f32,
    pub height: f32,
    pub stroke_width: f32,
    pub frame: RectF,
    pub nub: RectF,
}

impl Geometry {
    pub fn new(width: u32, height: u32) -> Self {
        let width = width as f32;
        let height = height as f32;

        let stroke_width = width / 20.0;
        let half = stroke_width / 2.0;

        Self {
            width,
            height,
            stroke_width,
            frame: RectF::new(half, half, width - stroke_width - half, height - half),
            nub: RectF::new(width - stroke_width, height * 0.25, width, height * 0.75),
        }
    }

    fn inset(&self) -> f32 {
        self.stroke_width + SPACE_BETWEEN
    }

    /// The charge fill for `power` percent.
    pub fn fill(&self, power: i32) -> RectF {
        let span = self.width - self.stroke_width * 2.0 - SPACE_BETWEEN * 2.0 - self.stroke_width;
        let extent = span * power as f32 / 100.0;

        let inset = self.inset();

        RectF::new(inset, inset, extent + inset, self.height - inset)
    }
}

/// A battery indicator: outline, charge level, charging badge and a crossed
/// out "no data" state.
///
/// The host measures it with [`BatteryView::on_measure`], mutates it through
/// the setters and repaints it with [`BatteryView::paint`] whenever
/// [`BatteryView::take_invalidated`] reports a pending repaint request.
#[derive(Clone, Debug)]
pub struct BatteryView<'a> {
    power: i32,
    status: BatteryStatus,
    color: Rgba,
    width: u32,
    height: u32,
    badge: Option<BadgeImage<'a>>,
    invalidated: bool,
}

impl<'a> BatteryView<'a> {
    pub fn new(style: BatteryStyle, badge: Option<BadgeImage<'a>>) -> Self {
        if badge.is_none() {
            warn!("No charging badge, charging state will be drawn without it");
        }

        Self {
            power: clamp_power(style.battery_power),
            status: style.battery_status,
            color: style.battery_color,
            width: 0,
            height: 0,
            badge,
            invalidated: true,
        }
    }

    pub fn with_defaults(badge: Option<BadgeImage<'a>>) -> Self {
        Self::new(BatteryStyle::default(), badge)
    }

    pub fn on_measure(&mut self, width: u32, height: u32) {
        if (width, height) != (self.width, self.height) {
            debug!("Measured {}x{}", width, height);

            self.width = width;
            self.height = height;
            self.invalidate();
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn power(&self) -> i32 {
        self.power
    }

    pub fn status(&self) -> BatteryStatus {
        self.status
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn badge(&self) -> Option<&BadgeImage<'a>> {
        self.badge.as_ref()
    }

    pub fn set_power(&mut self, power: i32) {
        self.power = clamp_power(power);
        self.invalidate();
    }

    pub fn set_status(&mut self, status: BatteryStatus) {
        self.status = status;
        self.invalidate();
    }

    /// Sets the status from its host code (1 = loss, 2 = charge, 3 = work).
    /// Unknown codes leave the status untouched.
    pub fn set_battery_status(&mut self, code: i32) {
        match BatteryStatus::try_from(code) {
            Ok(status) => self.set_status(status),
            Err(e) => warn!("Ignoring battery status: {}", e),
        }
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
        self.invalidate();
    }

    /// Returns whether a repaint was requested since the last call.
    pub fn take_invalidated(&mut self) -> bool {
        core::mem::replace(&mut self.invalidated, false)
    }

    pub fn is_invalidated(&self) -> bool {
        self.invalidated
    }

    fn invalidate(&mut self) {
        self.invalidated = true;
    }

    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.width, self.height)
    }

    pub fn paint<C>(&self, canvas: &mut C) -> Result<(), C::Error>
    where
        C: Canvas,
    {
        let geometry = self.geometry();
        let outline = self.outline_color();

        canvas.draw_round_rect(
            geometry.frame,
            RADIUS,
            RADIUS,
            &Paint::stroke(outline, geometry.stroke_width),
        )?;

        match self.status {
            BatteryStatus::Loss => self.paint_loss(&geometry, canvas)?,
            BatteryStatus::Charge => {
                let paint = self.paint_level(&geometry, canvas)?;
                self.paint_badge(&paint, canvas)?;
            }
            BatteryStatus::Work => {
                self.paint_level(&geometry, canvas)?;
            }
        }

        canvas.draw_rect(geometry.nub, &Paint::fill(outline))
    }

    fn paint_loss<C>(&self, geometry: &Geometry, canvas: &mut C) -> Result<(), C::Error>
    where
        C: Canvas,
    {
        // Always full, whatever the stored power
        canvas.draw_rect(geometry.fill(MAX_POWER), &Paint::fill(Rgba::WHITE))?;

        let frame = geometry.frame;
        let start = geometry.stroke_width;
        let paint = Paint::stroke(Rgba::RED, CROSS_STROKE_WIDTH);

        canvas.draw_line(
            PointF::new(start, start),
            PointF::new(frame.right, frame.bottom),
            &paint,
        )?;
        canvas.draw_line(
            PointF::new(start, frame.bottom),
            PointF::new(frame.right, start),
            &paint,
        )
    }

    fn paint_level<C>(&self, geometry: &Geometry, canvas: &mut C) -> Result<Paint, C::Error>
    where
        C: Canvas,
    {
        let paint = Paint::fill(level_color(self.power));

        canvas.draw_rect(geometry.fill(self.power), &paint)?;

        Ok(paint)
    }

    fn paint_badge<C>(&self, paint: &Paint, canvas: &mut C) -> Result<(), C::Error>
    where
        C: Canvas,
    {
        let Some(badge) = &self.badge else {
            return Ok(());
        };

        let size = badge.size();

        // Centered on whole pixels
        let left = (self.width as i64 - size.width as i64) / 2;
        let top = (self.height as i64 - size.height as i64) / 2;

        canvas.draw_image(badge, left as f32, top as f32, paint)
    }

    fn outline_color(&self) -> Rgba {
        match self.status {
            BatteryStatus::Loss => self.color,
            BatteryStatus::Charge | BatteryStatus::Work => level_color(self.power),
        }
    }
}

fn level_color(power: i32) -> Rgba {
    if power < LOW_POWER_THRESHOLD {
        Rgba::RED
    } else {
        Rgba::WHITE
    }
}

fn clamp_power(power: i32) -> i32 {
    power.clamp(MIN_POWER, MAX_POWER)
}
