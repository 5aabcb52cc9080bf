//! Scripted gesture scenarios for headless runs.
//!
//! A script pairs a world description (viewport, content, bar metrics) with
//! a flat list of steps: gestures, chrome commands, and expectations.
//! Scripts load from JSON and execute via [`crate::runner::run_script`].

use serde::Deserialize;
use slidebars::{BarState, Size};
use std::path::Path;
use thiserror::Error;

/// Errors from loading or running a gesture script.
#[derive(Error, Debug)]
pub enum ScriptError {
    /// Script file could not be read.
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),

    /// Script text does not match the schema.
    #[error("failed to parse script: {0}")]
    Parse(#[from] serde_json::Error),

    /// A step could not be executed or an expectation did not hold.
    #[error("step {index} ({step}): {message}")]
    Step {
        index: usize,
        step: &'static str,
        message: String,
    },
}

/// Initial world a script runs in.
#[derive(Debug, Clone, Deserialize)]
pub struct WorldSetup {
    pub viewport: Size,
    pub content: Size,
    pub top_bar: BarSetup,
    pub bottom_bar: BarSetup,
}

/// Height metrics for one bar.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BarSetup {
    pub height: f32,
    /// Residual height that never leaves the screen. Defaults to zero.
    #[serde(default)]
    pub min_height: f32,
}

/// A gesture scenario: one world plus the steps to perform in it.
#[derive(Debug, Clone, Deserialize)]
pub struct GestureScript {
    pub world: WorldSetup,
    pub steps: Vec<GestureStep>,
}

impl GestureScript {
    /// Load a script from JSON text.
    pub fn from_json(input: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a script from file.
    pub fn from_path(path: &Path) -> Result<Self, ScriptError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

/// One scripted step.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GestureStep {
    /// Finger down at (`x`, `y`) in viewport coordinates.
    Press { x: f32, y: f32 },
    /// Move the finger by (`dx`, `dy`) spread evenly over `frames` frames.
    /// Positive `dy` moves the finger down the screen.
    Drag { dx: f32, dy: f32, frames: u32 },
    /// Finger up. `decelerate` forces the momentum decision; when omitted
    /// the surface's tracked velocity decides.
    Release {
        #[serde(default)]
        decelerate: Option<bool>,
    },
    /// Let momentum play out for `frames` frames.
    Coast { frames: u32 },
    /// Idle frames with no scrolling; pending bar transitions land here.
    Tick { frames: u32 },
    /// Programmatic reveal.
    ShowBars { animate: bool },
    /// Programmatic retract.
    HideBars { animate: bool },
    /// Snap the bars to their nearest terminal state, e.g. after a layout
    /// change altered the bar heights.
    Refresh { animate: bool },
    /// Status-bar tap.
    ScrollToTop,
    /// Assert the top bar's coarse state.
    ExpectTop { state: BarState },
    /// Assert the bottom bar's coarse state.
    ExpectBottom { state: BarState },
    /// Assert the vertical content insets currently applied to the surface.
    ExpectInset { top: f32, bottom: f32 },
}

impl GestureStep {
    /// Short name used in error reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Press { .. } => "press",
            Self::Drag { .. } => "drag",
            Self::Release { .. } => "release",
            Self::Coast { .. } => "coast",
            Self::Tick { .. } => "tick",
            Self::ShowBars { .. } => "show_bars",
            Self::HideBars { .. } => "hide_bars",
            Self::Refresh { .. } => "refresh",
            Self::ScrollToTop => "scroll_to_top",
            Self::ExpectTop { .. } => "expect_top",
            Self::ExpectBottom { .. } => "expect_bottom",
            Self::ExpectInset { .. } => "expect_inset",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_steps() {
        let script = GestureScript::from_json(
            r#"{
                "world": {
                    "viewport": { "width": 375.0, "height": 667.0 },
                    "content": { "width": 375.0, "height": 2000.0 },
                    "top_bar": { "height": 64.0, "min_height": 20.0 },
                    "bottom_bar": { "height": 44.0 }
                },
                "steps": [
                    { "type": "press", "x": 200.0, "y": 400.0 },
                    { "type": "drag", "dx": 0.0, "dy": -30.0, "frames": 3 },
                    { "type": "release" },
                    { "type": "expect_top", "state": "hidden" }
                ]
            }"#,
        )
        .expect("script should parse");

        assert_eq!(script.steps.len(), 4);
        assert_eq!(script.steps[1].name(), "drag");
        assert!(matches!(
            script.steps[3],
            GestureStep::ExpectTop {
                state: BarState::Hidden
            }
        ));
    }

    #[test]
    fn min_height_defaults_to_zero() {
        let script = GestureScript::from_json(
            r#"{
                "world": {
                    "viewport": { "width": 320.0, "height": 480.0 },
                    "content": { "width": 320.0, "height": 1200.0 },
                    "top_bar": { "height": 64.0 },
                    "bottom_bar": { "height": 44.0 }
                },
                "steps": []
            }"#,
        )
        .expect("script should parse");

        assert_eq!(script.world.top_bar.min_height, 0.0);
        assert_eq!(script.world.bottom_bar.min_height, 0.0);
    }
}
