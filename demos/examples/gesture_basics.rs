// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture classification basics.
//!
//! Feed raw pointer events to `understory_gesture` and print the gestures it
//! recognizes, including a single tap that is only confirmed once the
//! double-tap window closes.
//!
//! Run:
//! - `cargo run -p understory_demos --example gesture_basics`

use kurbo::Point;
use understory_gesture::{GestureClassifier, PointerEvent, PointerPhase, PointerSample};

fn main() {
    let mut gestures = GestureClassifier::default();
    println!("{:?}", gestures.config());

    let stream = [
        // Trembling press, then a drag.
        PointerEvent::down(1, Point::new(100.0, 100.0), 0),
        PointerEvent::moved(1, Point::new(101.0, 99.0), 16),
        PointerEvent::moved(1, Point::new(120.0, 100.0), 32),
        PointerEvent::moved(1, Point::new(150.0, 110.0), 48),
        PointerEvent::up(1, Point::new(150.0, 110.0), 64),
        // Double tap.
        PointerEvent::down(1, Point::new(300.0, 300.0), 1000),
        PointerEvent::up(1, Point::new(300.0, 300.0), 1050),
        PointerEvent::down(1, Point::new(310.0, 295.0), 1200),
        PointerEvent::up(1, Point::new(310.0, 295.0), 1250),
        // Pinch.
        PointerEvent::new(
            PointerPhase::Down,
            &[PointerSample::new(1, 200.0, 200.0), PointerSample::new(2, 300.0, 200.0)],
            2000,
        ),
        PointerEvent::moved(2, Point::new(400.0, 200.0), 2016),
        PointerEvent::moved(1, Point::new(100.0, 200.0), 2032),
        PointerEvent::cancel(2048),
        // Lone tap.
        PointerEvent::down(1, Point::new(50.0, 60.0), 3000),
        PointerEvent::up(1, Point::new(50.0, 60.0), 3080),
    ];

    for event in &stream {
        for gesture in gestures.handle(event) {
            println!("t={:>4} {:?} -> {gesture:?}", event.timestamp, event.phase);
        }
    }

    let mut now = 3080;
    while gestures.has_pending_tap() {
        now += 100;
        for gesture in gestures.poll(now) {
            println!("t={now:>4} poll -> {gesture:?}");
        }
    }
}
