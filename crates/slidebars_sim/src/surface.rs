//! An owned scroll-content model with touch-driven physics.
//!
//! `SimScrollView` plays the part of a real scroll view: the finger leads
//! during a drag (including overscroll), velocity is tracked with an
//! exponential moving average over the drag deltas, and after release the
//! offset coasts under linear friction until it stops or hits the
//! inset-adjusted content bounds.

use slidebars::{EdgeInsets, Point, ScrollSurface, Size};

/// Friction applied while coasting, in px/s².
const DECELERATION: f32 = 1500.0;
/// Coasting stops once the speed falls below this, in px/s.
const VELOCITY_THRESHOLD: f32 = 10.0;
/// Smoothing factor for the drag-velocity moving average.
const VELOCITY_SMOOTHING: f32 = 0.3;

/// Headless scroll view: content metrics, gesture bookkeeping, momentum.
pub struct SimScrollView {
    offset: Point,
    viewport: Size,
    content: Size,
    content_inset: EdgeInsets,
    indicator_inset: EdgeInsets,
    touch: Point,
    /// Content-offset velocity in px/s; positive advances the content.
    velocity_y: f32,
    has_velocity_sample: bool,
    dragging: bool,
    /// When set, invoked synchronously from inside `set_content_inset`,
    /// like surfaces that re-fire their scroll notification during the
    /// setter.
    scroll_echo: Option<Box<dyn Fn()>>,
}

impl SimScrollView {
    pub fn new(viewport: Size, content: Size) -> Self {
        Self {
            offset: Point::ZERO,
            viewport,
            content,
            content_inset: EdgeInsets::ZERO,
            indicator_inset: EdgeInsets::ZERO,
            touch: Point::ZERO,
            velocity_y: 0.0,
            has_velocity_sample: false,
            dragging: false,
            scroll_echo: None,
        }
    }

    pub fn set_scroll_echo(&mut self, echo: Box<dyn Fn()>) {
        self.scroll_echo = Some(echo);
    }

    pub fn set_content_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    pub fn set_content_size(&mut self, content: Size) {
        self.content = content;
    }

    pub fn indicator_inset(&self) -> EdgeInsets {
        self.indicator_inset
    }

    pub fn velocity_y(&self) -> f32 {
        self.velocity_y
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Smallest legal offset: overscroll rests against the top inset.
    pub fn min_offset_y(&self) -> f32 {
        -self.content_inset.top
    }

    /// Largest legal offset: the content's end plus the bottom inset.
    pub fn max_offset_y(&self) -> f32 {
        (self.content.height - self.viewport.height + self.content_inset.bottom)
            .max(self.min_offset_y())
    }

    /// Finger down: start a drag at `at`.
    pub fn press(&mut self, at: Point) {
        self.touch = at;
        self.dragging = true;
        self.velocity_y = 0.0;
        self.has_velocity_sample = false;
    }

    /// One frame of finger movement. The touch point moves by (`dx`, `dy`)
    /// and the content follows it, so the offset moves the opposite way.
    /// `dt` is the frame duration in seconds.
    pub fn drag_by(&mut self, dx: f32, dy: f32, dt: f32) {
        if !self.dragging {
            return;
        }
        self.touch.x += dx;
        self.touch.y += dy;
        self.offset.x -= dx;
        self.offset.y -= dy;

        let instant = if dt > 0.0 { -dy / dt } else { 0.0 };
        if self.has_velocity_sample {
            self.velocity_y =
                self.velocity_y * (1.0 - VELOCITY_SMOOTHING) + instant * VELOCITY_SMOOTHING;
        } else {
            // First sample: assume one 60Hz frame's worth of movement.
            self.velocity_y = -dy * 60.0;
            self.has_velocity_sample = true;
        }
    }

    /// Finger up. Returns true when enough velocity remains for momentum.
    pub fn release(&mut self) -> bool {
        self.dragging = false;
        self.velocity_y.abs() > VELOCITY_THRESHOLD
    }

    /// One frame of coasting. Applies velocity, bleeds it off with linear
    /// friction, and stops dead at the content bounds. Returns true while
    /// still moving.
    pub fn step(&mut self, dt: f32) -> bool {
        if self.dragging {
            return false;
        }
        if self.velocity_y.abs() <= VELOCITY_THRESHOLD {
            self.velocity_y = 0.0;
            return false;
        }

        self.offset.y += self.velocity_y * dt;

        let decel = DECELERATION * dt;
        if self.velocity_y > 0.0 {
            self.velocity_y = (self.velocity_y - decel).max(0.0);
        } else {
            self.velocity_y = (self.velocity_y + decel).min(0.0);
        }

        let min = self.min_offset_y();
        let max = self.max_offset_y();
        if self.offset.y <= min {
            self.offset.y = min;
            self.velocity_y = 0.0;
        } else if self.offset.y >= max {
            self.offset.y = max;
            self.velocity_y = 0.0;
        }

        tracing::trace!(
            "coast offset_y={:.1} velocity_y={:.0}",
            self.offset.y,
            self.velocity_y
        );
        self.velocity_y != 0.0
    }
}

impl ScrollSurface for SimScrollView {
    fn content_offset(&self) -> Point {
        self.offset
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn content_size(&self) -> Size {
        self.content
    }

    fn content_inset(&self) -> EdgeInsets {
        self.content_inset
    }

    fn touch_location(&self) -> Point {
        self.touch
    }

    fn set_content_inset(&mut self, inset: EdgeInsets) {
        self.content_inset = inset;
        if let Some(echo) = &self.scroll_echo {
            echo();
        }
    }

    fn set_indicator_inset(&mut self, inset: EdgeInsets) {
        self.indicator_inset = inset;
    }
}
