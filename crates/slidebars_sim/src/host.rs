//! Frame-stepped transition host.
//!
//! `FrameHost` queues next-tick actions until [`tick`](FrameHost::tick) and
//! records every transition it was asked to run, so tests and demos can
//! assert on scheduling without an animation system. The recorded change
//! runs immediately: presentation interpolation is out of scope here, the
//! logical state jumps to its target the way the coordinator expects.

use slidebars::{HostAction, TransitionHost};
use std::cell::{Cell, RefCell};
use std::time::Duration;

/// One transition the host was asked to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRecord {
    /// Frame counter value when the transition started.
    pub frame: u64,
    pub duration: Duration,
}

/// Queue-draining host driven by explicit frames.
#[derive(Default)]
pub struct FrameHost {
    queue: RefCell<Vec<HostAction>>,
    transitions: RefCell<Vec<TransitionRecord>>,
    frame: Cell<u64>,
}

impl FrameHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one frame and run every action queued before this tick.
    /// Actions queued by those actions land on the next tick.
    pub fn tick(&self) {
        self.frame.set(self.frame.get() + 1);
        let due: Vec<HostAction> = self.queue.borrow_mut().drain(..).collect();
        for action in due {
            action();
        }
    }

    pub fn frame(&self) -> u64 {
        self.frame.get()
    }

    pub fn pending_actions(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn transitions(&self) -> Vec<TransitionRecord> {
        self.transitions.borrow().clone()
    }
}

impl TransitionHost for FrameHost {
    fn run_on_next_tick(&self, action: HostAction) {
        self.queue.borrow_mut().push(action);
    }

    fn animate(&self, duration: Duration, change: HostAction) {
        self.transitions.borrow_mut().push(TransitionRecord {
            frame: self.frame.get(),
            duration,
        });
        change();
    }
}
