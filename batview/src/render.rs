use core::fmt::Debug;

use log::trace;

use embedded_graphics::pixelcolor::Rgb888;

use crate::color::Rgba;
use crate::display::{DisplayCanvas, FlushableDrawTarget};
use crate::error;
use crate::view::BatteryView;

/// Repaints `view` onto `display` if it requested a repaint.
///
/// The whole display is cleared to `background` first, then the view is
/// painted and the display flushed. Returns whether anything was drawn.
pub fn render<D>(
    display: &mut D,
    view: &mut BatteryView<'_>,
    background: Rgba,
) -> error::Result<bool>
where
    D: FlushableDrawTarget,
    D::Color: From<Rgb888>,
    D::Error: Debug,
{
    if !view.take_invalidated() {
        return Ok(false);
    }

    trace!(
        "Repainting {:?} battery at {}%",
        view.status(),
        view.power()
    );

    display
        .clear(Rgb888::from(background).into())
        .map_err(error::debug)?;

    view.paint(&mut DisplayCanvas::new(display))
        .map_err(error::debug)?;

    display.flush().map_err(error::debug)?;

    Ok(true)
}
