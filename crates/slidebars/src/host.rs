//! Host capabilities the coordinator borrows for deferred and animated work.
//!
//! The coordinator never owns an event loop or an animation system. When a
//! show/hide needs to animate, it asks its [`TransitionHost`] to defer the
//! work by one tick and then run the state change once inside a timed,
//! interruptible transition. How the host interpolates presentation over
//! that duration (springs, curves, nothing at all) is the host's business.
//!
//! Methods take `&self`: a deferred action re-enters the host to schedule
//! its transition, so hosts keep their queues behind interior mutability.

use std::time::Duration;

/// One-shot deferred work.
pub type HostAction = Box<dyn FnOnce()>;

/// Event-loop and transition services provided by the embedding application.
pub trait TransitionHost {
    /// Queue `action` to run on the next turn of the host's event loop.
    ///
    /// Actions must run in FIFO order, on the same thread, after the current
    /// callback has returned.
    fn run_on_next_tick(&self, action: HostAction);

    /// Run `change` exactly once as the sole mutation inside a transition of
    /// the given duration. A transition scheduled while an earlier one is
    /// still presenting supersedes it (last write wins on the target state).
    fn animate(&self, duration: Duration, change: HostAction);
}

/// Degenerate host that runs everything inline.
///
/// Useful in tests and in hosts without an event loop; it collapses the
/// one-tick deferral and presents transitions as instantaneous jumps.
#[derive(Debug, Default)]
pub struct ImmediateHost;

impl ImmediateHost {
    pub fn new() -> Self {
        Self
    }
}

impl TransitionHost for ImmediateHost {
    fn run_on_next_tick(&self, action: HostAction) {
        action();
    }

    fn animate(&self, _duration: Duration, change: HostAction) {
        change();
    }
}
