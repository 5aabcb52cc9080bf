//! Bar provider backed by plain fields, with the presentation helpers an
//! embedding app typically derives: content alpha fades with retraction,
//! and heights can change out from under the coordinator (rotation), to be
//! reconciled with `refresh`.

use slidebars::{BarGeometry, BarPositionProvider};

/// Headless top/bottom bar pair.
pub struct SimBars {
    top: BarGeometry,
    bottom: BarGeometry,
}

impl SimBars {
    pub fn new(top_height: f32, top_min: f32, bottom_height: f32, bottom_min: f32) -> Self {
        Self {
            top: BarGeometry::new(0.0, top_height, top_min),
            bottom: BarGeometry::new(0.0, bottom_height, bottom_min),
        }
    }

    /// Alpha for the top bar's contents: fully opaque at rest, transparent
    /// once only the residual strip remains.
    pub fn top_alpha(&self) -> f32 {
        self.top.visible_fraction()
    }

    pub fn bottom_alpha(&self) -> f32 {
        self.bottom.visible_fraction()
    }

    /// Change the top bar's metrics (e.g. on rotation). Call
    /// `BarCoordinator::refresh` afterwards so positions and insets agree
    /// with the new heights.
    pub fn set_top_bar_height(&mut self, height: f32, min_height: f32) {
        self.top.height = height;
        self.top.min_height = min_height;
    }

    pub fn set_bottom_bar_height(&mut self, height: f32, min_height: f32) {
        self.bottom.height = height;
        self.bottom.min_height = min_height;
    }
}

impl BarPositionProvider for SimBars {
    fn top_bar(&self) -> BarGeometry {
        self.top
    }

    fn bottom_bar(&self) -> BarGeometry {
        self.bottom
    }

    fn set_top_bar_position(&mut self, position: f32) {
        self.top.position = position;
    }

    fn set_bottom_bar_position(&mut self, position: f32) {
        self.bottom.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_follows_retraction() {
        let mut bars = SimBars::new(64.0, 20.0, 44.0, 0.0);
        assert_eq!(bars.top_alpha(), 1.0);

        bars.set_top_bar_position(11.0);
        assert!((bars.top_alpha() - 0.75).abs() < 1e-6);

        bars.set_top_bar_position(44.0);
        assert_eq!(bars.top_alpha(), 0.0);
    }

    #[test]
    fn height_change_keeps_position() {
        let mut bars = SimBars::new(64.0, 20.0, 44.0, 0.0);
        bars.set_top_bar_position(10.0);
        bars.set_top_bar_height(44.0, 0.0);

        let top = bars.top_bar();
        assert_eq!(top.position, 10.0);
        assert_eq!(top.max_position(), 44.0);
    }
}
