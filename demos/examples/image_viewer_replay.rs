// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image viewer replay.
//!
//! Replay a scripted touch session through `understory_image_viewer` and print
//! what a host would see: transforms to paint with, clicks and stream claims.
//!
//! Run:
//! - `cargo run -p understory_demos --example image_viewer_replay`

use kurbo::{Affine, Point, Size};
use understory_gesture::{PointerEvent, PointerPhase, PointerSample};
use understory_image_viewer::{ImageViewer, ViewerEvent, ViewerHost, ViewerQueue};
use understory_zoom_view::ZoomState;

/// Prints every host notification.
struct Printer;

impl ViewerHost for Printer {
    fn transform_changed(&mut self, transform: Affine) {
        let [s, _, _, _, tx, ty] = transform.as_coeffs();
        println!("  paint: scale {s:.3}, translate ({tx:.1}, {ty:.1})");
    }

    fn transform_cleared(&mut self) {
        println!("  paint: nothing");
    }

    fn click(&mut self, position: Point) {
        println!("  click at ({:.0}, {:.0})", position.x, position.y);
    }

    fn claim_pointer_stream(&mut self, claim: bool) {
        if claim {
            println!("  parent: stop intercepting");
        } else {
            println!("  parent: may intercept again");
        }
    }
}

fn pair(phase: PointerPhase, a: (f64, f64), b: (f64, f64), t: u64) -> ViewerEvent {
    ViewerEvent::Pointer(PointerEvent::new(
        phase,
        &[PointerSample::new(1, a.0, a.1), PointerSample::new(2, b.0, b.1)],
        t,
    ))
}

fn one(event: PointerEvent) -> ViewerEvent {
    ViewerEvent::Pointer(event)
}

fn main() {
    let script = vec![
        ("viewport 1000x1000", ViewerEvent::ViewportResized(Size::new(1000.0, 1000.0))),
        ("image 2000x1000", ViewerEvent::ImageLoaded(Size::new(2000.0, 1000.0))),
        ("two fingers down", pair(PointerPhase::Down, (450.0, 500.0), (550.0, 500.0), 0)),
        ("spread to 3x", pair(PointerPhase::Move, (350.0, 500.0), (650.0, 500.0), 16)),
        ("spread further", pair(PointerPhase::Move, (100.0, 500.0), (900.0, 500.0), 32)),
        ("lift both", pair(PointerPhase::Up, (100.0, 500.0), (900.0, 500.0), 48)),
        ("finger down", one(PointerEvent::down(1, Point::new(500.0, 500.0), 600))),
        ("drag left", one(PointerEvent::moved(1, Point::new(300.0, 520.0), 616))),
        ("drag far right", one(PointerEvent::moved(1, Point::new(5000.0, 520.0), 632))),
        ("lift", one(PointerEvent::up(1, Point::new(5000.0, 520.0), 648))),
        ("tap", one(PointerEvent::down(1, Point::new(700.0, 200.0), 1200))),
        ("release", one(PointerEvent::up(1, Point::new(700.0, 200.0), 1250))),
        ("second tap", one(PointerEvent::down(1, Point::new(705.0, 210.0), 1350))),
        ("release", one(PointerEvent::up(1, Point::new(705.0, 210.0), 1400))),
        ("tap", one(PointerEvent::down(1, Point::new(100.0, 100.0), 3000))),
        ("release", one(PointerEvent::up(1, Point::new(100.0, 100.0), 3040))),
        ("time passes", ViewerEvent::Tick(3400)),
        ("rotate to 1000x600", ViewerEvent::ViewportResized(Size::new(1000.0, 600.0))),
        ("image removed", ViewerEvent::ImageCleared),
    ];

    let mut viewer = ImageViewer::new(Printer);
    let mut queue = ViewerQueue::new();
    for (label, event) in script {
        println!("{label}:");
        queue.push(event);
        viewer.drain(&mut queue);
        match viewer.view().state() {
            ZoomState::Unavailable => println!("  (nothing to show)"),
            ZoomState::Fitted => println!("  fitted"),
            ZoomState::Zoomed => println!("  zoomed {:.2}x", viewer.view().zoom()),
        }
    }
}
