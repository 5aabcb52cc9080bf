//! Slidebars simulation
//!
//! A complete headless scroll world for exercising [`slidebars`] without a
//! platform: a momentum-capable scroll view, bars that fade with their
//! travel, a frame-counting transition host, and a harness that delivers
//! the callbacks in native order. Gesture rides can be written directly
//! against [`ScrollHarness`] or loaded from JSON via [`GestureScript`] and
//! replayed with [`run_script`].
//!
//! ```ignore
//! use slidebars_sim::{run_script, GestureScript};
//!
//! let script = GestureScript::from_path(Path::new("ride.json"))?;
//! let report = run_script(&script)?;
//! println!("ok after {} frames", report.frames);
//! ```

pub mod bars;
pub mod harness;
pub mod host;
pub mod runner;
pub mod script;
pub mod surface;

pub use bars::SimBars;
pub use harness::{FRAME_DT, ScrollHarness};
pub use host::{FrameHost, TransitionRecord};
pub use runner::{run_script, RunReport};
pub use script::{BarSetup, GestureScript, GestureStep, ScriptError, WorldSetup};
pub use surface::SimScrollView;
