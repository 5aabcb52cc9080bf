//! Slidebars
//!
//! Scroll-driven coordination of top and bottom bars over a scrollable
//! surface: drag up and the chrome slides out of the way, drag down and it
//! glides back, release mid-way and it snaps to the nearer sensible state.
//!
//! # Features
//!
//! - **Finger-true tracking**: bar travel follows the touch delta, so rubber
//!   banding never distorts it
//! - **Inset upkeep**: content and indicator insets always match the bars'
//!   current travel, guarded against notification echo
//! - **Terminal snapping**: release, momentum, and scroll-to-top all resolve
//!   to fully shown or fully hidden through the host's timed transition
//! - **Headless by design**: the coordinator speaks only through the
//!   [`ScrollSurface`], [`BarPositionProvider`], and [`TransitionHost`] seams
//!
//! # Example
//!
//! ```ignore
//! use slidebars::{BarCoordinator, ImmediateHost};
//! use std::rc::Rc;
//!
//! let coordinator = Rc::new(BarCoordinator::new(Rc::new(ImmediateHost::new())));
//! coordinator.attach(surface.clone(), bars.clone());
//!
//! // Forward the scroll view's callbacks 1:1:
//! coordinator.on_drag_begin();
//! coordinator.on_scroll();
//! coordinator.on_drag_end(false);
//!
//! // Or drive the chrome directly, e.g. when the user taps a link:
//! coordinator.show_bars(true);
//! ```

pub mod bars;
pub mod coordinator;
pub mod geometry;
pub mod host;
pub mod surface;

pub use bars::{BarGeometry, BarPositionProvider, BarState};
pub use coordinator::{
    BarCoordinator, CoordinatorConfig, DragSession, ScrollDirection, SharedBars, SharedHost,
    SharedSurface,
};
pub use geometry::{EdgeInsets, Point, Size};
pub use host::{HostAction, ImmediateHost, TransitionHost};
pub use surface::ScrollSurface;
