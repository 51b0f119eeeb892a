// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-dismiss.
//!
//! Drag a presented sheet up (rubber band), release slowly (spring back), then flick it down
//! (dismiss).
//!
//! Run:
//! - `cargo run -p understory_demos --example sheet_dismiss_gesture`

use std::time::Duration;

use kurbo::{Point, Rect, Vec2};
use understory_sheet_motion::{
    GestureConfig, GestureDismissCoordinator, PanSample, SurfaceHandle, TransitionContext,
    TransitionMachine,
};

fn main() {
    let ctx = TransitionContext::new(
        Some(SurfaceHandle(1)),
        Some(SurfaceHandle(2)),
        Rect::new(0.0, 0.0, 375.0, 812.0),
    );
    let mut machine = TransitionMachine::default();
    machine.present(&ctx);
    for event in machine.finish() {
        println!("{event:?}");
    }

    let resting = Point::new(187.5, 600.0);
    let mut coord = GestureDismissCoordinator::new(GestureConfig::sheet(), resting);

    println!("-- drag up");
    coord.handle(PanSample::began(), &machine);
    for ty in [-20.0, -60.0, -150.0, -400.0] {
        let outcome = coord.handle(PanSample::changed(Vec2::new(0.0, ty)), &machine);
        println!("  translation {ty:>6}: {outcome:?}");
    }

    println!("-- slow release");
    let outcome = coord.handle(PanSample::ended(Vec2::ZERO, Vec2::new(0.0, 30.0)), &machine);
    println!("  {outcome:?}");
    while coord.is_snapping() {
        coord.advance(Duration::from_millis(40));
        println!("  y = {:.1}", coord.position().y);
    }

    println!("-- flick down");
    coord.handle(PanSample::began(), &machine);
    coord.handle(PanSample::changed(Vec2::new(0.0, 40.0)), &machine);
    coord.handle(PanSample::changed(Vec2::new(0.0, 90.0)), &machine);
    let (outcome, event) = coord.drive(
        PanSample::ended(Vec2::new(0.0, 90.0), Vec2::new(0.0, 900.0)),
        &mut machine,
        &ctx,
    );
    println!("  {outcome:?} -> {event:?}");
    for event in machine.advance(machine.transition_duration()) {
        println!("  {event:?}");
    }
}
