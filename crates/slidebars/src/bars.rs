//! Bar geometry and the position-provider seam.
//!
//! A bar's `position` is its travel away from fully visible: `0.0` means the
//! bar sits at its resting place, `max_position()` means it has retracted to
//! its minimum residual height. The coordinator never touches layout
//! directly; it reads [`BarGeometry`] snapshots from a
//! [`BarPositionProvider`] and writes clamped positions back through it.

use serde::{Deserialize, Serialize};

/// Read snapshot of one bar: current travel plus the metrics that bound it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BarGeometry {
    /// Travel away from fully visible. `0.0` = fully shown.
    pub position: f32,
    /// Full height of the bar when shown.
    pub height: f32,
    /// Residual height that always stays on screen (e.g. a status-bar strip).
    pub min_height: f32,
}

impl BarGeometry {
    pub const fn new(position: f32, height: f32, min_height: f32) -> Self {
        Self {
            position,
            height,
            min_height,
        }
    }

    /// Maximum travel before the bar bottoms out at its residual height.
    pub fn max_position(&self) -> f32 {
        (self.height - self.min_height).max(0.0)
    }

    /// Clamp a candidate travel into the legal `[0, max_position]` range.
    pub fn clamp(&self, candidate: f32) -> f32 {
        candidate.clamp(0.0, self.max_position())
    }

    /// The bar has retracted as far as it can.
    pub fn is_hidden(&self) -> bool {
        self.position >= self.max_position()
    }

    /// The bar is at its resting place.
    pub fn is_fully_shown(&self) -> bool {
        self.position <= 0.0
    }

    /// Strictly between the two terminal states.
    pub fn is_partial(&self) -> bool {
        !self.is_hidden() && !self.is_fully_shown()
    }

    /// Fraction of the travel already covered, in `[0, 1]`.
    ///
    /// A bar with zero travel reports `0.0` rather than dividing by zero.
    pub fn hidden_fraction(&self) -> f32 {
        let max = self.max_position();
        if max <= 0.0 {
            0.0
        } else {
            (self.position / max).clamp(0.0, 1.0)
        }
    }

    /// `1 - hidden_fraction()`; doubles as the alpha the embedding app can
    /// fade bar contents with while the bar retracts.
    pub fn visible_fraction(&self) -> f32 {
        1.0 - self.hidden_fraction()
    }

    /// Classify into the three-state model used by tests and scenario files.
    pub fn state(&self) -> BarState {
        if self.is_fully_shown() {
            BarState::FullyShown
        } else if self.is_hidden() {
            BarState::Hidden
        } else {
            BarState::Partial
        }
    }
}

/// Coarse bar state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarState {
    FullyShown,
    Partial,
    Hidden,
}

/// Seam between the coordinator and whatever owns the bars' layout.
///
/// Reads return fresh snapshots; writes receive positions the coordinator
/// has already clamped into `[0, max_position]`. Implementations apply the
/// position to layout however they like (constraint constants, transforms,
/// plain fields) and may derive fades from
/// [`BarGeometry::visible_fraction`].
pub trait BarPositionProvider {
    fn top_bar(&self) -> BarGeometry;
    fn bottom_bar(&self) -> BarGeometry;
    fn set_top_bar_position(&mut self, position: f32);
    fn set_bottom_bar_position(&mut self, position: f32);
}
