//! The drag-driven coordinator that slides bars in and out.
//!
//! [`BarCoordinator`] mirrors a scroll view's delegate callbacks: wire
//! `on_drag_begin` / `on_scroll` / `on_drag_end` / `on_deceleration_begin` /
//! `should_scroll_to_top` 1:1 to the host's scroll events and the coordinator
//! keeps both bars, the content inset, and the indicator inset consistent
//! with the gesture. Handlers take `&self`: all mutable state lives in
//! `Cell`s so the scroll surface may call back into the coordinator
//! synchronously (a content-inset write typically re-fires a scroll
//! notification before the setter returns).
//!
//! The whole machine is single-threaded by contract. Callbacks, deferred
//! actions, and transition changes all run on the host's UI thread, one at a
//! time.
//!
//! # Example
//!
//! ```ignore
//! let host = Rc::new(ImmediateHost::new());
//! let coordinator = Rc::new(BarCoordinator::new(host));
//! coordinator.attach(surface, bars);
//!
//! // from the scroll view's callbacks:
//! coordinator.on_drag_begin();
//! coordinator.on_scroll();
//! coordinator.on_drag_end(false);
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::bars::{BarGeometry, BarPositionProvider};
use crate::geometry::Point;
use crate::host::TransitionHost;
use crate::surface::ScrollSurface;

/// Shared handle to the scroll-content source.
pub type SharedSurface = Rc<RefCell<dyn ScrollSurface>>;
/// Shared handle to the bar layout owner.
pub type SharedBars = Rc<RefCell<dyn BarPositionProvider>>;
/// Shared handle to the host's deferral/transition services.
pub type SharedHost = Rc<dyn TransitionHost>;

// ============================================================================
// Drag session
// ============================================================================

/// Finger direction over the last scroll step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    /// No vertical movement yet.
    #[default]
    None,
    /// Finger moving up: content advances, bars retract.
    Up,
    /// Finger moving down: content rewinds, bars return.
    Down,
}

/// Per-drag state, created on drag-begin and consumed on drag-end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Content offset when the drag started.
    pub begin_offset: Point,
    /// Touch point of the previous scroll step, for delta derivation.
    pub prev_touch: Point,
    /// Direction of the most recent step in this drag.
    pub direction: ScrollDirection,
    /// The drag started at (or past) the very bottom of the content while
    /// the bottom bar was out of the way. Used to pop the bars back in when
    /// the user keeps pulling against the bottom edge.
    pub from_bottom_edge: bool,
}

// ============================================================================
// Configuration
// ============================================================================

/// Tunables for the show/hide behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinatorConfig {
    /// Length of the show/hide transition handed to the host.
    pub transition_duration: Duration,
    /// Bottom-bar hidden fraction at or below which a released drag snaps
    /// the bars back to fully shown instead of hiding them.
    pub appear_threshold: f32,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            transition_duration: Duration::from_millis(200),
            appear_threshold: 0.25,
        }
    }
}

// ============================================================================
// Coordinator
// ============================================================================

/// Terminal state a show/hide drives both bars toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BarTarget {
    Shown,
    Hidden,
}

#[derive(Clone)]
struct Bindings {
    surface: SharedSurface,
    bars: SharedBars,
}

/// Drives top/bottom bar travel from scroll gestures.
///
/// Construct once, [`attach`](Self::attach) to a surface/provider pair, and
/// forward the scroll callbacks. `show_bars` / `hide_bars` / `refresh` are
/// also safe to call directly (e.g. reveal the chrome when the user taps a
/// link, or re-snap after a bar changed height).
pub struct BarCoordinator {
    bindings: RefCell<Option<Bindings>>,
    host: SharedHost,
    config: CoordinatorConfig,
    drag: Cell<Option<DragSession>>,
    /// Direction of the last drag, kept past the session's end because the
    /// deceleration callback arrives after drag-end.
    last_direction: Cell<ScrollDirection>,
    /// Re-entrancy flag around inset writes; shared with scheduled
    /// transition changes.
    inset_guard: Rc<Cell<bool>>,
}

impl BarCoordinator {
    pub fn new(host: SharedHost) -> Self {
        Self::with_config(host, CoordinatorConfig::default())
    }

    pub fn with_config(host: SharedHost, config: CoordinatorConfig) -> Self {
        Self {
            bindings: RefCell::new(None),
            host,
            config,
            drag: Cell::new(None),
            last_direction: Cell::new(ScrollDirection::None),
            inset_guard: Rc::new(Cell::new(false)),
        }
    }

    pub fn config(&self) -> CoordinatorConfig {
        self.config
    }

    /// Bind the coordinator to a scroll surface and a bar provider, then
    /// bring the surface's insets in line with the bars' current state.
    /// Rebinding replaces both references.
    pub fn attach(&self, surface: SharedSurface, bars: SharedBars) {
        let bindings = Bindings { surface, bars };
        *self.bindings.borrow_mut() = Some(bindings.clone());
        sync_insets(&bindings, &self.inset_guard);
        tracing::debug!("attached to scroll surface; insets synced");
    }

    /// True while a drag session is live.
    pub fn is_dragging(&self) -> bool {
        self.drag.get().is_some()
    }

    /// Snapshot of the live drag session, if any.
    pub fn drag_session(&self) -> Option<DragSession> {
        self.drag.get()
    }

    // ========================================================================
    // Direct bar control
    // ========================================================================

    /// Drive both bars to fully shown and recompute insets.
    pub fn show_bars(&self, animate: bool) {
        self.drive_to(BarTarget::Shown, animate);
    }

    /// Drive both bars to their maximum travel and recompute insets.
    pub fn hide_bars(&self, animate: bool) {
        self.drive_to(BarTarget::Hidden, animate);
    }

    /// Re-snap to the nearer terminal state: if either bar is hidden, hide
    /// both; otherwise show both. Call after a bar's height changed (e.g.
    /// rotation) so positions and insets agree again. Safe no-op when not
    /// attached.
    pub fn refresh(&self, animate: bool) {
        let Some(bindings) = self.bindings() else {
            return;
        };
        let (top, bottom) = read_bars(&bindings);
        if top.is_hidden() || bottom.is_hidden() {
            self.hide_bars(animate);
        } else {
            self.show_bars(animate);
        }
    }

    fn drive_to(&self, target: BarTarget, animate: bool) {
        let Some(bindings) = self.bindings() else {
            return;
        };
        tracing::debug!("driving bars to {:?} animate={}", target, animate);
        if animate {
            // One tick of deferral keeps the transition from fighting the
            // callback that requested it; the change itself runs once inside
            // the host's timed transition and reads bar metrics at that
            // moment, not now.
            let host = self.host.clone();
            let guard = self.inset_guard.clone();
            let duration = self.config.transition_duration;
            self.host.run_on_next_tick(Box::new(move || {
                host.animate(
                    duration,
                    Box::new(move || apply_terminal(&bindings, &guard, target)),
                );
            }));
        } else {
            apply_terminal(&bindings, &self.inset_guard, target);
        }
    }

    // ========================================================================
    // Scroll callbacks
    // ========================================================================

    /// The user put a finger down and started dragging.
    pub fn on_drag_begin(&self) {
        let Some(bindings) = self.bindings() else {
            return;
        };
        let (begin_offset, prev_touch, at_bottom_edge) = {
            let surface = bindings.surface.borrow();
            let offset = surface.content_offset();
            let at_bottom_edge = surface.content_size().height
                - surface.viewport_size().height
                <= offset.y + f32::EPSILON;
            (offset, surface.touch_location(), at_bottom_edge)
        };
        let bottom = bindings.bars.borrow().bottom_bar();
        let from_bottom_edge =
            at_bottom_edge && (bottom.is_hidden() || bottom.max_position() == 0.0);
        self.drag.set(Some(DragSession {
            begin_offset,
            prev_touch,
            direction: ScrollDirection::None,
            from_bottom_edge,
        }));
        tracing::trace!(
            "drag begin offset_y={:.1} from_bottom_edge={}",
            begin_offset.y,
            from_bottom_edge
        );
    }

    /// The surface scrolled while the finger is down. Applies the finger
    /// delta to both bars, clamped to their travel ranges. No-op when not
    /// dragging (momentum frames) or while an inset write is in flight.
    pub fn on_scroll(&self) {
        let Some(mut session) = self.drag.get() else {
            return;
        };
        if self.inset_guard.get() {
            return;
        }
        let Some(bindings) = self.bindings() else {
            return;
        };

        let (current, offset, viewport, content) = {
            let surface = bindings.surface.borrow();
            (
                surface.touch_location(),
                surface.content_offset(),
                surface.viewport_size(),
                surface.content_size(),
            )
        };

        session.direction = if current.y == session.prev_touch.y {
            ScrollDirection::None
        } else if current.y < session.prev_touch.y {
            ScrollDirection::Up
        } else {
            ScrollDirection::Down
        };
        // Finger down means the content rewinds and the bars come back, so
        // the travel delta is the negated finger movement.
        let delta = -(current.y - session.prev_touch.y);
        session.prev_touch = current;
        self.drag.set(Some(session));

        let (top, bottom) = read_bars(&bindings);
        let small_content =
            content.height <= viewport.height - top.height + f32::EPSILON;
        let past_bottom =
            offset.y + viewport.height > content.height - f32::EPSILON;

        if small_content {
            // Content that fits on screen never moves the bars.
        } else if past_bottom {
            if bottom.is_hidden() && session.from_bottom_edge {
                // Pulling against the bottom edge with the chrome gone:
                // bring it back.
                self.show_bars(true);
            }
        } else {
            // Band where the content's top edge sits under the retracted part
            // of the top bar; bars keep tracking the finger there even though
            // they read as hidden.
            let under_top_bar =
                offset.y < -top.min_height && offset.y >= -top.height;
            // Pulled further down than the top bar is tall (deep rubber
            // band); bar travel freezes entirely.
            let past_top_bar = offset.y < -top.height;

            if (!top.is_hidden() || under_top_bar) && !past_top_bar {
                bindings
                    .bars
                    .borrow_mut()
                    .set_top_bar_position(top.clamp(top.position + delta));
            }
            if (!bottom.is_hidden() || under_top_bar) && !past_top_bar {
                bindings
                    .bars
                    .borrow_mut()
                    .set_bottom_bar_position(bottom.clamp(bottom.position + delta));
                sync_insets(&bindings, &self.inset_guard);
            }
            let (top, bottom) = read_bars(&bindings);
            tracing::trace!(
                "drag step delta={:.1} offset_y={:.1} top={:.1} bottom={:.1}",
                delta,
                offset.y,
                top.position,
                bottom.position
            );
        }
    }

    /// The finger lifted. When no momentum follows, a bar caught between its
    /// terminal states snaps to the nearer sensible one: back to shown if the
    /// content is pulled below the top bar's residual band or the bottom bar
    /// has barely moved, otherwise away.
    pub fn on_drag_end(&self, will_decelerate: bool) {
        let Some(session) = self.drag.take() else {
            return;
        };
        self.last_direction.set(session.direction);
        let Some(bindings) = self.bindings() else {
            return;
        };

        if will_decelerate {
            return;
        }

        let (top, bottom) = read_bars(&bindings);
        if top.is_partial() || bottom.is_partial() {
            let offset_y = bindings.surface.borrow().content_offset().y;
            let under_top_bar = offset_y < -top.min_height;
            let appear_ratio = bottom.hidden_fraction();
            tracing::debug!(
                "drag end: under_top_bar={} appear_ratio={:.2}",
                under_top_bar,
                appear_ratio
            );
            if under_top_bar || appear_ratio <= self.config.appear_threshold {
                self.show_bars(true);
            } else {
                self.hide_bars(true);
            }
        }
    }

    /// Momentum is about to carry the scroll on after drag-end. Resolves the
    /// bars from the last drag's direction: downward flicks reveal, upward
    /// flicks hide unless the scroll is pinned at a content edge with the
    /// bottom bar fully shown.
    pub fn on_deceleration_begin(&self) {
        let Some(bindings) = self.bindings() else {
            return;
        };
        let (top, bottom) = read_bars(&bindings);

        match self.last_direction.get() {
            ScrollDirection::Down => {
                if !top.is_fully_shown() || !bottom.is_fully_shown() {
                    self.show_bars(true);
                }
            }
            ScrollDirection::Up => {
                let (offset, viewport, content) = {
                    let surface = bindings.surface.borrow();
                    (
                        surface.content_offset(),
                        surface.viewport_size(),
                        surface.content_size(),
                    )
                };
                let past_bottom =
                    offset.y + viewport.height > content.height - f32::EPSILON;
                let at_content_edge = past_bottom || offset.y < 0.0;
                if !(top.is_hidden() && bottom.is_hidden())
                    && !(bottom.is_fully_shown() && at_content_edge)
                {
                    self.hide_bars(true);
                }
            }
            ScrollDirection::None => {}
        }
    }

    /// The user asked to jump to the very top (status-bar tap). Permits the
    /// jump only when the top bar is fully shown; otherwise reveals the bars
    /// first and vetoes this jump.
    pub fn should_scroll_to_top(&self) -> bool {
        let Some(bindings) = self.bindings() else {
            return true;
        };
        let top = bindings.bars.borrow().top_bar();
        if !top.is_fully_shown() {
            tracing::debug!("scroll-to-top vetoed; revealing bars first");
            self.show_bars(true);
            return false;
        }
        true
    }

    fn bindings(&self) -> Option<Bindings> {
        self.bindings.borrow().clone()
    }
}

// ============================================================================
// Inset synchronization
// ============================================================================

/// RAII holder for the inset re-entrancy flag.
struct InsetGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> InsetGuard<'a> {
    fn engage(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self { flag }
    }
}

impl Drop for InsetGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

fn read_bars(bindings: &Bindings) -> (BarGeometry, BarGeometry) {
    let bars = bindings.bars.borrow();
    (bars.top_bar(), bars.bottom_bar())
}

/// Set both bars to a terminal state and recompute insets. Runs either
/// inline (`animate: false`) or once inside the host's transition; either
/// way the bar metrics are read here, at execution time.
fn apply_terminal(bindings: &Bindings, guard: &Cell<bool>, target: BarTarget) {
    {
        let mut bars = bindings.bars.borrow_mut();
        let (top, bottom) = match target {
            BarTarget::Shown => (0.0, 0.0),
            BarTarget::Hidden => (
                bars.top_bar().max_position(),
                bars.bottom_bar().max_position(),
            ),
        };
        bars.set_top_bar_position(top);
        bars.set_bottom_bar_position(bottom);
    }
    sync_insets(bindings, guard);
}

/// Recompute the surface's vertical insets from the bars' current travel and
/// mirror them onto the indicators. The guard flag stays engaged across both
/// writes so the scroll notifications those writes fire synchronously are
/// ignored by [`BarCoordinator::on_scroll`].
fn sync_insets(bindings: &Bindings, guard: &Cell<bool>) {
    let _hold = InsetGuard::engage(guard);
    let (top, bottom) = read_bars(bindings);
    let mut surface = bindings.surface.borrow_mut();
    let mut inset = surface.content_inset();
    inset.top = top.height - top.position;
    inset.bottom = bottom.height - bottom.position;
    surface.set_content_inset(inset);
    surface.set_indicator_inset(inset);
}
