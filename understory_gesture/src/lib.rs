// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gesture --heading-base-level=0

//! Understory Gesture: classify multi-pointer input into semantic gestures.
//!
//! This crate turns a raw, ordered stream of [`PointerEvent`]s into a small
//! vocabulary of [`GestureEvent`]s:
//!
//! - `Tap(point)`: one pointer pressed and released without leaving the
//!   dead-zone, confirmed once no second tap followed in time.
//! - `DoubleTap(point)`: two such taps close together in time and space.
//! - `Drag(delta)`: one pointer moving after leaving the dead-zone.
//! - `Pinch { factor, focus }`: two or more pointers changing their span.
//!
//! Exactly one intent is active at a time. A pinch suppresses drag and tap;
//! a drag rules out a tap. The building blocks are exposed for callers that
//! want to compose their own recognizers:
//!
//! - [`drag`]: dead-zone aware drag deltas.
//! - [`pinch`]: focus/span based incremental scale factors.
//!
//! ## Usage
//!
//! ```rust
//! use kurbo::Point;
//! use understory_gesture::{GestureClassifier, GestureEvent, PointerEvent};
//!
//! let mut gestures = GestureClassifier::default();
//!
//! // Two quick taps at nearly the same spot.
//! gestures.handle(&PointerEvent::down(1, Point::new(50.0, 50.0), 0));
//! gestures.handle(&PointerEvent::up(1, Point::new(50.0, 50.0), 60));
//! gestures.handle(&PointerEvent::down(1, Point::new(52.0, 49.0), 180));
//! let events = gestures.handle(&PointerEvent::up(1, Point::new(52.0, 49.0), 230));
//! assert_eq!(events.as_slice(), &[GestureEvent::DoubleTap(Point::new(50.0, 50.0))]);
//!
//! // A single tap is reported once the double-tap window has passed.
//! gestures.handle(&PointerEvent::down(1, Point::new(10.0, 10.0), 1_000));
//! gestures.handle(&PointerEvent::up(1, Point::new(10.0, 10.0), 1_050));
//! assert!(gestures.poll(1_200).is_empty());
//! assert_eq!(
//!     gestures.poll(1_400).as_slice(),
//!     &[GestureEvent::Tap(Point::new(10.0, 10.0))]
//! );
//! ```
//!
//! Timestamps are plain milliseconds supplied by the caller, so the
//! classifier needs no clock and is fully deterministic.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: select how Kurbo computes distances.
//!
//! This crate is `no_std`.

#![no_std]

mod classifier;
pub mod drag;
pub mod pinch;
mod pointer;
mod tap;

pub use classifier::{GestureClassifier, GestureConfig, GestureEvent, GestureEvents};
pub use pointer::{InvalidPointerEvent, PointerEvent, PointerId, PointerPhase, PointerSample};
