//! Executes a [`GestureScript`] against a freshly built world.
//!
//! Runs are fail-fast: the first step that cannot execute, or whose
//! expectation does not hold, aborts with [`ScriptError::Step`] carrying the
//! step index and name.

use crate::bars::SimBars;
use crate::harness::ScrollHarness;
use crate::script::{GestureScript, GestureStep, ScriptError};
use slidebars::Point;

/// Tolerance for scripted inset expectations.
const INSET_TOLERANCE: f32 = 1e-3;

/// Outcome of a completed script run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Steps executed, expectations included.
    pub completed_steps: usize,
    /// Frames the simulated world advanced.
    pub frames: u64,
}

/// Build the world described by `script.world` and execute every step.
pub fn run_script(script: &GestureScript) -> Result<RunReport, ScriptError> {
    let world = &script.world;
    let bars = SimBars::new(
        world.top_bar.height,
        world.top_bar.min_height,
        world.bottom_bar.height,
        world.bottom_bar.min_height,
    );
    let harness = ScrollHarness::new(world.viewport, world.content, bars);

    for (index, step) in script.steps.iter().enumerate() {
        run_step(&harness, index, step)?;
    }

    Ok(RunReport {
        completed_steps: script.steps.len(),
        frames: harness.host().frame(),
    })
}

fn run_step(harness: &ScrollHarness, index: usize, step: &GestureStep) -> Result<(), ScriptError> {
    tracing::debug!("script step={} index={}", step.name(), index);

    match *step {
        GestureStep::Press { x, y } => {
            if harness.surface().borrow().is_dragging() {
                return Err(step_error(index, step, "finger is already down".into()));
            }
            harness.press(Point::new(x, y));
        }
        GestureStep::Drag { dx, dy, frames } => {
            require_finger_down(harness, index, step)?;
            if frames == 0 {
                return Err(step_error(index, step, "frames must be at least 1".into()));
            }
            let per_dx = dx / frames as f32;
            let per_dy = dy / frames as f32;
            for _ in 0..frames {
                harness.drag_by(per_dx, per_dy);
            }
        }
        GestureStep::Release { decelerate } => {
            require_finger_down(harness, index, step)?;
            match decelerate {
                Some(momentum) => harness.release_with(momentum),
                None => {
                    harness.release();
                }
            }
        }
        GestureStep::Coast { frames } | GestureStep::Tick { frames } => {
            harness.run_frames(frames);
        }
        GestureStep::ShowBars { animate } => harness.coordinator().show_bars(animate),
        GestureStep::HideBars { animate } => harness.coordinator().hide_bars(animate),
        GestureStep::Refresh { animate } => harness.coordinator().refresh(animate),
        GestureStep::ScrollToTop => {
            harness.request_scroll_to_top();
        }
        GestureStep::ExpectTop { state } => {
            let actual = harness.top_state();
            if actual != state {
                let (position, _) = harness.positions();
                return Err(step_error(
                    index,
                    step,
                    format!(
                        "top bar is {:?} at position {:.1}, expected {:?}",
                        actual, position, state
                    ),
                ));
            }
        }
        GestureStep::ExpectBottom { state } => {
            let actual = harness.bottom_state();
            if actual != state {
                let (_, position) = harness.positions();
                return Err(step_error(
                    index,
                    step,
                    format!(
                        "bottom bar is {:?} at position {:.1}, expected {:?}",
                        actual, position, state
                    ),
                ));
            }
        }
        GestureStep::ExpectInset { top, bottom } => {
            let inset = harness.content_inset();
            if (inset.top - top).abs() > INSET_TOLERANCE
                || (inset.bottom - bottom).abs() > INSET_TOLERANCE
            {
                return Err(step_error(
                    index,
                    step,
                    format!(
                        "content inset is ({:.1}, {:.1}), expected ({:.1}, {:.1})",
                        inset.top, inset.bottom, top, bottom
                    ),
                ));
            }
        }
    }

    Ok(())
}

fn require_finger_down(
    harness: &ScrollHarness,
    index: usize,
    step: &GestureStep,
) -> Result<(), ScriptError> {
    if harness.surface().borrow().is_dragging() {
        Ok(())
    } else {
        Err(step_error(index, step, "no finger is down".into()))
    }
}

fn step_error(index: usize, step: &GestureStep, message: String) -> ScriptError {
    ScriptError::Step {
        index,
        step: step.name(),
        message,
    }
}
