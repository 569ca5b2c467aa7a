#![no_std]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod canvas;
pub mod color;
pub mod display;
pub mod error;
pub mod recorder;
pub mod render;
pub mod status;
pub mod style;
pub mod view;

pub use canvas::{BadgeImage, Canvas, Paint, PaintStyle, PointF, RectF};
pub use color::Rgba;
pub use status::BatteryStatus;
pub use style::BatteryStyle;
pub use view::BatteryView;
