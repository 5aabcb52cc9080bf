//! End-to-end gesture rides through the simulated scroll world.
//!
//! Unlike the coordinator's own tests, these run the real simulation stack:
//! momentum decides whether a release coasts, the frame host defers and
//! times transitions, and the harness delivers callbacks in native order.
//! World throughout: 375x667 viewport over 375x2000 content, a 64pt top bar
//! with a 20pt residual strip, a 44pt bottom bar that hides completely. At
//! rest the content sits at offset -64.

use slidebars::{BarState, Point, Size};
use slidebars_sim::{ScrollHarness, SimBars};
use std::time::Duration;

fn world() -> ScrollHarness {
    ScrollHarness::new(
        Size::new(375.0, 667.0),
        Size::new(375.0, 2000.0),
        SimBars::new(64.0, 20.0, 44.0, 0.0),
    )
}

// ============================================================================
// Drag tracking
// ============================================================================

/// A steady upward drag from rest walks both bars out in lockstep with the
/// finger and keeps shrinking the insets until only the residual strip is
/// left.
#[test]
fn upward_drag_walks_the_bars_out() {
    let harness = world();

    harness.press(Point::new(200.0, 400.0));
    for _ in 0..12 {
        harness.drag_by(0.0, -8.0);
    }

    assert_eq!(harness.top_state(), BarState::Hidden);
    assert_eq!(harness.bottom_state(), BarState::Hidden);
    let inset = harness.content_inset();
    assert_eq!((inset.top, inset.bottom), (20.0, 0.0));
    assert_eq!(
        harness.content_offset_y(),
        32.0,
        "96px of finger travel from rest lands the content at -64 + 96"
    );
}

/// The surface echoes a scroll notification out of every inset write. With
/// the echo live, a drag must still consume each finger delta exactly once.
#[test]
fn echoing_surface_cannot_double_count_a_drag() {
    let harness = world();
    harness.enable_scroll_echo();

    harness.press(Point::new(200.0, 400.0));
    for _ in 0..6 {
        harness.drag_by(0.0, -8.0);
    }

    assert_eq!(harness.positions(), (44.0, 44.0));
    let session = harness
        .coordinator()
        .drag_session()
        .expect("drag is still live");
    assert_eq!(
        session.prev_touch.y, 352.0,
        "six 8px steps from y=400, each consumed once"
    );
}

// ============================================================================
// Release and momentum
// ============================================================================

/// Lifting the finger mid-travel with plenty of velocity starts momentum,
/// and the upward coast finishes hiding the chrome.
#[test]
fn released_momentum_keeps_hiding_after_the_finger_lifts() {
    let harness = world();

    harness.press(Point::new(200.0, 400.0));
    for _ in 0..3 {
        harness.drag_by(0.0, -8.0);
    }
    assert_eq!(harness.top_state(), BarState::Partial);

    assert!(harness.release(), "a fast drag keeps momentum");
    assert_eq!(harness.top_state(), BarState::Hidden);
    assert_eq!(harness.bottom_state(), BarState::Hidden);

    let transitions = harness.host().transitions();
    assert_eq!(transitions.len(), 1);
    assert_eq!(transitions[0].duration, Duration::from_millis(200));

    harness.run_frames(30);
    assert!(
        harness.content_offset_y() > 0.0,
        "the coast carried the content well past the resting offset"
    );
    assert_eq!(harness.top_state(), BarState::Hidden, "coasting leaves the bars alone");
}

/// A short pull released without momentum snaps the bars back: the bottom
/// bar moved less than a quarter of its travel.
#[test]
fn slow_release_below_threshold_snaps_shown() {
    let harness = world();
    harness.jump_to(300.0);

    harness.press(Point::new(200.0, 400.0));
    for _ in 0..4 {
        harness.drag_by(0.0, -2.0);
    }
    for _ in 0..12 {
        harness.drag_by(0.0, 0.0);
    }
    assert_eq!(harness.positions(), (8.0, 8.0));

    assert!(!harness.release(), "holding still bleeds the velocity off");
    assert_eq!(harness.top_state(), BarState::FullyShown);
    assert_eq!(harness.bottom_state(), BarState::FullyShown);
    let inset = harness.content_inset();
    assert_eq!((inset.top, inset.bottom), (64.0, 44.0));
}

/// The same slow release hides the bars once the bottom bar is past a
/// quarter of its travel.
#[test]
fn slow_release_past_threshold_snaps_hidden() {
    let harness = world();
    harness.jump_to(300.0);

    harness.press(Point::new(200.0, 400.0));
    for _ in 0..10 {
        harness.drag_by(0.0, -2.0);
    }
    for _ in 0..12 {
        harness.drag_by(0.0, 0.0);
    }
    assert_eq!(harness.positions(), (20.0, 20.0));

    assert!(!harness.release());
    assert_eq!(harness.top_state(), BarState::Hidden);
    let inset = harness.content_inset();
    assert_eq!((inset.top, inset.bottom), (20.0, 0.0));
}

/// With the content's top edge still under the retracted top bar, a
/// momentum-free release restores the chrome no matter how far the bars
/// travelled.
#[test]
fn slow_release_under_the_top_bar_restores_chrome() {
    let harness = world();

    harness.press(Point::new(200.0, 400.0));
    for _ in 0..10 {
        harness.drag_by(0.0, -2.0);
    }
    for _ in 0..12 {
        harness.drag_by(0.0, 0.0);
    }
    assert_eq!(harness.positions(), (20.0, 20.0));
    assert_eq!(harness.content_offset_y(), -44.0);

    assert!(!harness.release());
    assert_eq!(
        harness.top_state(),
        BarState::FullyShown,
        "past-threshold travel still shows because the offset is under the bar"
    );
}

/// A downward flick mid-content brings the chrome back through the timed
/// transition, and the following coast leaves it alone.
#[test]
fn downward_flick_brings_chrome_back() {
    let harness = world();
    harness.jump_to(800.0);
    harness.coordinator().hide_bars(false);

    harness.press(Point::new(200.0, 300.0));
    for _ in 0..3 {
        harness.drag_by(0.0, 15.0);
    }
    assert_eq!(
        harness.positions(),
        (44.0, 44.0),
        "hidden bars do not track a mid-content downward drag"
    );

    assert!(harness.release(), "a flick this sharp coasts on");
    assert_eq!(harness.top_state(), BarState::FullyShown);
    let inset = harness.content_inset();
    assert_eq!((inset.top, inset.bottom), (64.0, 44.0));

    harness.run_frames(10);
    assert_eq!(harness.top_state(), BarState::FullyShown);
}

// ============================================================================
// Bottom edge
// ============================================================================

/// An upward flick thrown while the scroll is already pinned at the content
/// bottom spares fully shown chrome; the coast just parks the offset at the
/// inset-adjusted bound.
#[test]
fn upward_flick_pinned_at_the_bottom_edge_spares_the_chrome() {
    let harness = world();
    harness.jump_to(1340.0);

    harness.press(Point::new(200.0, 500.0));
    for _ in 0..3 {
        harness.drag_by(0.0, -10.0);
    }
    assert!(harness.release());

    assert_eq!(harness.top_state(), BarState::FullyShown);
    assert!(
        harness.host().transitions().is_empty(),
        "no show or hide was scheduled at all"
    );

    harness.run_frames(5);
    assert_eq!(
        harness.content_offset_y(),
        1377.0,
        "the coast stops dead at content bottom plus the bottom inset"
    );
}

/// Starting a drag at the very bottom with the chrome gone and pulling
/// further against the edge pops the bars back mid-drag.
#[test]
fn pulling_against_the_bottom_edge_revives_hidden_chrome() {
    let harness = world();
    harness.coordinator().hide_bars(false);
    harness.jump_to(1333.0);

    harness.press(Point::new(200.0, 500.0));
    harness.drag_by(0.0, -6.0);

    assert_eq!(harness.top_state(), BarState::FullyShown);
    assert_eq!(harness.bottom_state(), BarState::FullyShown);
    let inset = harness.content_inset();
    assert_eq!((inset.top, inset.bottom), (64.0, 44.0));
    assert_eq!(harness.host().transitions().len(), 1);

    // Keep pulling and let go; the chrome that just returned stays.
    harness.drag_by(0.0, -6.0);
    assert!(harness.release());
    assert_eq!(harness.top_state(), BarState::FullyShown);
    assert_eq!(harness.host().transitions().len(), 1, "no second transition");
}

// ============================================================================
// Scroll to top and rotation
// ============================================================================

/// With hidden chrome the first status-bar tap only restores the bars; the
/// second is honored and jumps to the inset-adjusted top.
#[test]
fn status_bar_tap_vetoed_until_chrome_returns() {
    let harness = world();
    harness.jump_to(500.0);
    harness.coordinator().hide_bars(false);

    assert!(!harness.request_scroll_to_top(), "first tap is vetoed");
    assert_eq!(harness.content_offset_y(), 500.0, "the offset stays put");
    assert_eq!(harness.top_state(), BarState::FullyShown, "but the chrome returns");

    assert!(harness.request_scroll_to_top(), "second tap goes through");
    assert_eq!(harness.content_offset_y(), -64.0);
}

/// After a rotation-style height change, `refresh` re-snaps to the nearer
/// terminal state and the insets agree with the new metrics.
#[test]
fn bar_height_change_realigns_on_refresh() {
    let harness = world();
    harness.coordinator().hide_bars(false);

    // Landscape: the top bar shrinks to 44pt over the same 20pt strip.
    harness.bars().borrow_mut().set_top_bar_height(44.0, 20.0);
    harness.coordinator().refresh(false);

    assert_eq!(harness.positions(), (24.0, 44.0));
    let inset = harness.content_inset();
    assert_eq!((inset.top, inset.bottom), (20.0, 0.0));

    // Back to portrait while shown.
    harness.coordinator().show_bars(false);
    harness.bars().borrow_mut().set_top_bar_height(64.0, 20.0);
    harness.coordinator().refresh(false);

    assert_eq!(harness.positions(), (0.0, 0.0));
    let inset = harness.content_inset();
    assert_eq!((inset.top, inset.bottom), (64.0, 44.0));
}
