//! Toolbar Ride
//!
//! Drives a full gesture ride through the simulated scroll world and prints
//! what the chrome does at each phase:
//! - Slow upward drag: the bars track the finger out of the way
//! - Release into momentum: the chrome tucks away through a timed transition
//! - Fast downward flick: momentum brings the chrome back
//! - Scroll-to-top veto: the first tap restores the chrome, the second jumps
//!
//! Run with: cargo run -p slidebars_sim --example toolbar_ride

use anyhow::Result;
use slidebars::{Point, Size};
use slidebars_sim::{ScrollHarness, SimBars};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let bars = SimBars::new(64.0, 20.0, 44.0, 0.0);
    let harness = ScrollHarness::new(Size::new(375.0, 667.0), Size::new(375.0, 2000.0), bars);
    harness.enable_scroll_echo();

    println!("== toolbar ride ==");
    report(&harness, "at rest");

    // Slow upward drag: 5px of finger travel per frame for 6 frames. The
    // bars slide out in lockstep with the finger.
    harness.press(Point::new(200.0, 400.0));
    for _ in 0..6 {
        harness.drag_by(0.0, -5.0);
    }
    report(&harness, "mid-drag, finger 30px up");

    // Letting go with this much velocity coasts on, and the upward momentum
    // finishes hiding the chrome.
    harness.release();
    report(&harness, "released into momentum");

    harness.run_frames(30);
    report(&harness, "coasted to a stop");

    // Sharp downward flick: the chrome comes back even though the content
    // is nowhere near the top.
    harness.press(Point::new(200.0, 300.0));
    for _ in 0..3 {
        harness.drag_by(0.0, 40.0);
    }
    harness.release();
    harness.run_frames(20);
    report(&harness, "after downward flick");

    // Status-bar tap with hidden chrome: vetoed once, honored the second
    // time.
    harness.coordinator().hide_bars(false);
    report(&harness, "chrome hidden again");

    let first = harness.request_scroll_to_top();
    report(&harness, "first scroll-to-top tap");
    let second = harness.request_scroll_to_top();
    report(&harness, "second scroll-to-top tap");
    println!("taps honored: first={first} second={second}");

    println!(
        "transitions run: {}",
        harness.host().transitions().len()
    );
    Ok(())
}

fn report(harness: &ScrollHarness, phase: &str) {
    let (top, bottom) = harness.positions();
    let inset = harness.content_inset();
    let alpha = harness.bars().borrow().top_alpha();
    println!(
        "{phase:>26}  top={top:5.1} bottom={bottom:5.1}  inset=({:.0}, {:.0})  offset_y={:7.1}  alpha={alpha:.2}",
        inset.top,
        inset.bottom,
        harness.content_offset_y(),
    );
}
