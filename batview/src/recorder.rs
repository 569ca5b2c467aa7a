use core::fmt;

use embedded_graphics::prelude::Size;

use crate::canvas::{BadgeImage, Canvas, Paint, PointF, RectF};

pub const RECORDER_CAPACITY: usize = 8;

/// One primitive issued against a [`Canvas`], captured by value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawCommand {
    RoundRect {
        rect: RectF,
        rx: f32,
        ry: f32,
        paint: Paint,
    },
    Rect {
        rect: RectF,
        paint: Paint,
    },
    Line {
        from: PointF,
        to: PointF,
        paint: Paint,
    },
    Image {
        size: Size,
        left: f32,
        top: f32,
        paint: Paint,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RecorderFull;

impl fmt::Display for RecorderFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "draw command recorder is full")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RecorderFull {}

/// A [`Canvas`] that rasterizes nothing and keeps the command stream instead.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    commands: heapless::Vec<DrawCommand, RECORDER_CAPACITY>,
}

impl Recorder {
    pub const fn new() -> Self {
        Self {
            commands: heapless::Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    fn record(&mut self, command: DrawCommand) -> Result<(), RecorderFull> {
        self.commands.push(command).map_err(|_| RecorderFull)
    }
}

impl Canvas for Recorder {
    type Error = RecorderFull;

    fn draw_round_rect(
        &mut self,
        rect: RectF,
        rx: f32,
        ry: f32,
        paint: &Paint,
    ) -> Result<(), Self::Error> {
        self.record(DrawCommand::RoundRect {
            rect,
            rx,
            ry,
            paint: *paint,
        })
    }

    fn draw_rect(&mut self, rect: RectF, paint: &Paint) -> Result<(), Self::Error> {
        self.record(DrawCommand::Rect {
            rect,
            paint: *paint,
        })
    }

    fn draw_line(&mut self, from: PointF, to: PointF, paint: &Paint) -> Result<(), Self::Error> {
        self.record(DrawCommand::Line {
            from,
            to,
            paint: *paint,
        })
    }

    fn draw_image(
        &mut self,
        image: &BadgeImage<'_>,
        left: f32,
        top: f32,
        paint: &Paint,
    ) -> Result<(), Self::Error> {
        self.record(DrawCommand::Image {
            size: image.size(),
            left,
            top,
            paint: *paint,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::color::Rgba;

    use super::*;

    #[test]
    fn records_in_order() {
        let mut recorder = Recorder::new();
        let paint = Paint::fill(Rgba::RED);

        recorder
            .draw_rect(RectF::new(0.0, 0.0, 1.0, 1.0), &paint)
            .unwrap();
        recorder
            .draw_line(PointF::new(0.0, 0.0), PointF::new(2.0, 2.0), &paint)
            .unwrap();

        assert_eq!(
            recorder.commands(),
            &[
                DrawCommand::Rect {
                    rect: RectF::new(0.0, 0.0, 1.0, 1.0),
                    paint,
                },
                DrawCommand::Line {
                    from: PointF::new(0.0, 0.0),
                    to: PointF::new(2.0, 2.0),
                    paint,
                },
            ]
        );

        recorder.clear();
        assert!(recorder.commands().is_empty());
    }

    #[test]
    fn overflow() {
        let mut recorder = Recorder::new();
        let paint = Paint::fill(Rgba::WHITE);

        for _ in 0..RECORDER_CAPACITY {
            recorder.draw_rect(RectF::default(), &paint).unwrap();
        }

        assert_eq!(
            recorder.draw_rect(RectF::default(), &paint),
            Err(RecorderFull)
        );
    }
}
