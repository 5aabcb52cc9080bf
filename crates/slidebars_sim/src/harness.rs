//! Wires a coordinator to the simulated scroll view and bars, and delivers
//! the callbacks in the order a real scroll view does: touch and offset move
//! first, then the coordinator hears about it, then the host's event loop
//! turns. Every harness method spans exactly one frame.

use crate::bars::SimBars;
use crate::host::FrameHost;
use crate::surface::SimScrollView;
use slidebars::{
    BarCoordinator, BarPositionProvider, BarState, CoordinatorConfig, EdgeInsets, Point,
    ScrollSurface, Size,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Frame duration used throughout the simulation (60Hz).
pub const FRAME_DT: f32 = 1.0 / 60.0;

/// A coordinator embedded in a fully simulated scroll world.
pub struct ScrollHarness {
    coordinator: Rc<BarCoordinator>,
    surface: Rc<RefCell<SimScrollView>>,
    bars: Rc<RefCell<SimBars>>,
    host: Rc<FrameHost>,
}

impl ScrollHarness {
    pub fn new(viewport: Size, content: Size, bars: SimBars) -> Self {
        Self::with_config(viewport, content, bars, CoordinatorConfig::default())
    }

    pub fn with_config(
        viewport: Size,
        content: Size,
        bars: SimBars,
        config: CoordinatorConfig,
    ) -> Self {
        let surface = Rc::new(RefCell::new(SimScrollView::new(viewport, content)));
        let bars = Rc::new(RefCell::new(bars));
        let host = Rc::new(FrameHost::new());
        let coordinator = Rc::new(BarCoordinator::with_config(host.clone(), config));
        coordinator.attach(surface.clone(), bars.clone());

        // Settle at rest: content flush under the freshly synced top inset.
        let resting = surface.borrow().min_offset_y();
        surface.borrow_mut().set_content_offset(Point::new(0.0, resting));

        Self {
            coordinator,
            surface,
            bars,
            host,
        }
    }

    pub fn coordinator(&self) -> &Rc<BarCoordinator> {
        &self.coordinator
    }

    pub fn surface(&self) -> &Rc<RefCell<SimScrollView>> {
        &self.surface
    }

    pub fn bars(&self) -> &Rc<RefCell<SimBars>> {
        &self.bars
    }

    pub fn host(&self) -> &Rc<FrameHost> {
        &self.host
    }

    /// Make the simulated surface re-fire its scroll notification from
    /// inside every content-inset write, the way real scroll views do.
    pub fn enable_scroll_echo(&self) {
        let weak = Rc::downgrade(&self.coordinator);
        self.surface.borrow_mut().set_scroll_echo(Box::new(move || {
            if let Some(coordinator) = weak.upgrade() {
                coordinator.on_scroll();
            }
        }));
    }

    /// Teleport the content to offset `y` without any gesture.
    pub fn jump_to(&self, y: f32) {
        self.surface
            .borrow_mut()
            .set_content_offset(Point::new(0.0, y));
    }

    /// Finger down at `at`.
    pub fn press(&self, at: Point) {
        self.surface.borrow_mut().press(at);
        self.coordinator.on_drag_begin();
        self.host.tick();
    }

    /// One frame of finger movement by (`dx`, `dy`); positive `dy` moves the
    /// finger down the screen.
    pub fn drag_by(&self, dx: f32, dy: f32) {
        self.surface.borrow_mut().drag_by(dx, dy, FRAME_DT);
        self.coordinator.on_scroll();
        self.host.tick();
    }

    /// Finger up. Momentum is decided by the surface's tracked velocity.
    /// Returns true when the scroll coasts on.
    pub fn release(&self) -> bool {
        let momentum = self.surface.borrow_mut().release();
        self.deliver_release(momentum);
        momentum
    }

    /// Finger up with the momentum decision forced, for scripted runs.
    pub fn release_with(&self, momentum: bool) {
        self.surface.borrow_mut().release();
        self.deliver_release(momentum);
    }

    fn deliver_release(&self, momentum: bool) {
        self.coordinator.on_drag_end(momentum);
        if momentum {
            self.coordinator.on_deceleration_begin();
        }
        self.host.tick();
    }

    /// One idle frame: momentum integration, scroll notification, host tick.
    pub fn step(&self) {
        let moved = self.surface.borrow_mut().step(FRAME_DT);
        if moved {
            self.coordinator.on_scroll();
        }
        self.host.tick();
    }

    pub fn run_frames(&self, n: u32) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Status-bar tap: jump to the very top if the coordinator permits it.
    /// On veto the bars come back instead and the offset stays put.
    pub fn request_scroll_to_top(&self) -> bool {
        let allowed = self.coordinator.should_scroll_to_top();
        if allowed {
            let top = self.surface.borrow().min_offset_y();
            self.jump_to(top);
        }
        self.host.tick();
        allowed
    }

    // ========================================================================
    // State peeks
    // ========================================================================

    pub fn top_state(&self) -> BarState {
        self.bars.borrow().top_bar().state()
    }

    pub fn bottom_state(&self) -> BarState {
        self.bars.borrow().bottom_bar().state()
    }

    pub fn positions(&self) -> (f32, f32) {
        let b = self.bars.borrow();
        (b.top_bar().position, b.bottom_bar().position)
    }

    pub fn content_inset(&self) -> EdgeInsets {
        self.surface.borrow().content_inset()
    }

    pub fn content_offset_y(&self) -> f32 {
        self.surface.borrow().content_offset().y
    }
}
