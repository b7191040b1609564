// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture classifier: turn a raw pointer stream into tap, double-tap, drag
//! and pinch events.
//!
//! [`GestureClassifier`] knows nothing about what the gestures act on. It
//! tracks the set of active pointers and decides, one event at a time, which
//! single intent the stream currently expresses:
//!
//! - one pointer, still inside the dead-zone: a potential tap;
//! - one pointer, outside the dead-zone: a drag;
//! - two or more pointers: a pinch, which suppresses drag and tap.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_gesture::{GestureClassifier, GestureEvent, PointerEvent};
//!
//! let mut gestures = GestureClassifier::default();
//!
//! assert!(gestures.handle(&PointerEvent::down(1, Point::new(100.0, 100.0), 0)).is_empty());
//! let events = gestures.handle(&PointerEvent::moved(1, Point::new(110.0, 104.0), 16));
//! assert_eq!(events.as_slice(), &[GestureEvent::Drag(Vec2::new(10.0, 4.0))]);
//! ```

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::drag::DragState;
use crate::pinch::PinchState;
use crate::pointer::{PointerEvent, PointerId, PointerPhase, PointerSample};
use crate::tap::TapState;

/// A classified gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// A confirmed single tap at the press position.
    Tap(Point),
    /// A double tap, reported at the first tap's press position.
    DoubleTap(Point),
    /// Single-pointer movement since the previous drag event.
    Drag(Vec2),
    /// Multi-pointer scale change since the previous pinch event.
    Pinch {
        /// Ratio of the current span to the previous one.
        factor: f64,
        /// Centroid of the active pointers.
        focus: Point,
    },
}

/// Gestures produced by a single pointer event.
pub type GestureEvents = SmallVec<[GestureEvent; 2]>;

/// Thresholds used by [`GestureClassifier`].
///
/// Distances are in viewport units, times in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Per-axis displacement a single pointer must exceed before it drags.
    pub drag_dead_zone: f64,
    /// Longest press that still counts as a tap.
    pub tap_timeout: u64,
    /// Longest gap between a tap's release and the next press for a double tap.
    pub double_tap_timeout: u64,
    /// Largest distance between the two presses of a double tap.
    pub double_tap_slop: f64,
    /// Pinch spans at or below this never produce a factor.
    pub min_pinch_span: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            drag_dead_zone: 2.0,
            tap_timeout: 500,
            double_tap_timeout: 300,
            double_tap_slop: 100.0,
            min_pinch_span: 1.0,
        }
    }
}

/// Classifies pointer events into [`GestureEvent`]s.
///
/// Events must be fed in arrival order; each call completes before the next.
#[derive(Clone, Debug, Default)]
pub struct GestureClassifier {
    config: GestureConfig,
    active: SmallVec<[PointerSample; 4]>,
    drag: DragState,
    pinch: PinchState,
    taps: TapState,
}

impl GestureClassifier {
    /// Creates a classifier with the given thresholds.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the thresholds in use.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Replaces the thresholds. In-flight gestures continue with the new values.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    /// Number of pointers currently down.
    #[must_use]
    pub fn active_pointers(&self) -> usize {
        self.active.len()
    }

    /// Returns `true` while two or more pointers are down.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.active.len() >= 2
    }

    /// Returns `true` while a single pointer is dragging past the dead-zone.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.active.len() == 1 && self.drag.is_engaged()
    }

    /// Returns `true` while a completed tap waits for a possible second tap.
    #[must_use]
    pub fn has_pending_tap(&self) -> bool {
        self.taps.has_pending()
    }

    /// Drops all state, including a pending tap.
    pub fn reset(&mut self) {
        self.active.clear();
        self.drag.end();
        self.pinch.end();
        self.taps.cancel();
    }

    /// Advances time without input, confirming a pending tap once the
    /// double-tap window has closed.
    pub fn poll(&mut self, now: u64) -> GestureEvents {
        let mut out = GestureEvents::new();
        self.taps.expire(now, &self.config, &mut out);
        out
    }

    /// Classifies one pointer event.
    ///
    /// Malformed events (see [`PointerEvent::validate`]) are ignored.
    pub fn handle(&mut self, event: &PointerEvent) -> GestureEvents {
        let mut out = GestureEvents::new();
        if let Err(err) = event.validate() {
            log::debug!("ignoring pointer event: {err}");
            return out;
        }
        self.taps.expire(event.timestamp, &self.config, &mut out);
        match event.phase {
            PointerPhase::Down => self.on_down(event, &mut out),
            PointerPhase::Move => self.on_move(event, &mut out),
            PointerPhase::Up => self.on_up(event, &mut out),
            PointerPhase::Cancel => self.reset(),
        }
        for gesture in &out {
            log::trace!("{:?} at {} -> {gesture:?}", event.phase, event.timestamp);
        }
        out
    }

    fn on_down(&mut self, event: &PointerEvent, out: &mut GestureEvents) {
        for sample in &event.pointers {
            match self.slot(sample.id) {
                Some(i) => {
                    log::debug!("pointer {} pressed again without lifting", sample.id.0);
                    self.active[i].position = sample.position;
                }
                None => self.active.push(*sample),
            }
        }
        match self.active.len() {
            // Either the first pointer, or the only one pressed again after
            // its up was lost. Both start a fresh press.
            1 => {
                let pos = self.active[0].position;
                self.taps.press(pos, event.timestamp, &self.config, out);
                self.drag.start(pos);
            }
            _ => {
                self.taps.spoil(out);
                self.drag.end();
                self.pinch.rebaseline(&self.positions());
            }
        }
    }

    fn on_move(&mut self, event: &PointerEvent, out: &mut GestureEvents) {
        let mut moved = false;
        for sample in &event.pointers {
            if let Some(i) = self.slot(sample.id) {
                self.active[i].position = sample.position;
                moved = true;
            }
        }
        if !moved {
            return;
        }
        if self.active.len() == 1 {
            let engaged = self.drag.is_engaged();
            let delta = self
                .drag
                .update(self.active[0].position, self.config.drag_dead_zone);
            if !engaged && self.drag.is_engaged() {
                self.taps.spoil(out);
            }
            if let Some(delta) = delta {
                out.push(GestureEvent::Drag(delta));
            }
        } else if let Some((factor, focus)) =
            self.pinch.update(&self.positions(), self.config.min_pinch_span)
        {
            out.push(GestureEvent::Pinch { factor, focus });
        }
    }

    fn on_up(&mut self, event: &PointerEvent, out: &mut GestureEvents) {
        let mut last = None;
        for sample in &event.pointers {
            if let Some(i) = self.slot(sample.id) {
                self.active.remove(i);
                last = Some(sample.position);
            }
        }
        let Some(last) = last else {
            return;
        };
        match self.active.len() {
            0 => {
                // Lifting outside the dead-zone without a move in between
                // still rules out a tap.
                let dz = self.config.drag_dead_zone;
                if self
                    .drag
                    .total_offset(last)
                    .is_some_and(|o| o.x.abs() > dz || o.y.abs() > dz)
                {
                    self.taps.spoil(out);
                }
                self.taps.release(event.timestamp, &self.config, out);
                self.drag.end();
                self.pinch.end();
            }
            1 => {
                self.pinch.end();
                self.drag.start(self.active[0].position);
            }
            _ => self.pinch.rebaseline(&self.positions()),
        }
    }

    fn slot(&self, id: PointerId) -> Option<usize> {
        self.active.iter().position(|s| s.id == id)
    }

    fn positions(&self) -> SmallVec<[Point; 4]> {
        self.active.iter().map(|s| s.position).collect()
    }
}
