//! Seam between the coordinator and the scrollable content it follows.

use crate::geometry::{EdgeInsets, Point, Size};

/// What the coordinator needs from a scroll view.
///
/// Coordinate conventions follow the usual scroll-view model: `content_offset`
/// grows as the content advances (scrolls toward its end) and rests at
/// `-content_inset().top` when the content sits flush under a fully shown top
/// bar, so overscroll past the top reads as increasingly negative `y`.
/// `touch_location` is the current position of the driving gesture in the
/// surface's own coordinate space; the coordinator derives its per-frame
/// delta from finger movement, not from offset movement, so rubber-banding
/// does not distort bar travel.
pub trait ScrollSurface {
    fn content_offset(&self) -> Point;
    fn viewport_size(&self) -> Size;
    fn content_size(&self) -> Size;
    fn content_inset(&self) -> EdgeInsets;
    fn touch_location(&self) -> Point;

    /// Apply a new content inset. Implementations that synchronously emit a
    /// scroll notification from inside this call are tolerated; the
    /// coordinator guards itself against the echo.
    fn set_content_inset(&mut self, inset: EdgeInsets);

    /// Mirror the content inset onto the scroll indicators.
    fn set_indicator_inset(&mut self, inset: EdgeInsets);
}
