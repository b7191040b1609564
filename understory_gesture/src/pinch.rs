// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch state helper: incremental scale factors from multi-pointer spans.
//!
//! A pinch is described by a focus point (the centroid of all active
//! pointers) and a span (twice the mean distance of the pointers from the
//! focus, which for two pointers is simply their distance). Each update
//! reports the ratio of the new span to the previous one.
//!
//! ```
//! use kurbo::Point;
//! use understory_gesture::pinch::PinchState;
//!
//! let mut pinch = PinchState::default();
//! pinch.rebaseline(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
//!
//! let (factor, focus) = pinch
//!     .update(&[Point::new(-50.0, 0.0), Point::new(150.0, 0.0)], 1.0)
//!     .unwrap();
//! assert_eq!(factor, 2.0);
//! assert_eq!(focus, Point::new(50.0, 0.0));
//! ```

use kurbo::{Point, Vec2};

/// Tracks the previous span of a pinch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PinchState {
    span: Option<f64>,
}

impl PinchState {
    /// Records the current span without reporting a factor.
    ///
    /// Call this whenever the set of active pointers changes so the next
    /// update does not jump.
    pub fn rebaseline(&mut self, points: &[Point]) {
        self.span = geometry(points).map(|(_, span)| span);
    }

    /// Returns `(factor, focus)` for the new positions.
    ///
    /// `factor` is the ratio to the previous span. Nothing is reported when
    /// there was no baseline, when either span is at most `min_span`, or when
    /// the ratio is not a finite positive number.
    pub fn update(&mut self, points: &[Point], min_span: f64) -> Option<(f64, Point)> {
        let (focus, span) = geometry(points)?;
        let previous = self.span.replace(span)?;
        if previous <= min_span || span <= min_span {
            return None;
        }
        let factor = span / previous;
        (factor.is_finite() && factor > 0.0).then_some((factor, focus))
    }

    /// Forgets the baseline.
    pub fn end(&mut self) {
        self.span = None;
    }

    /// Returns `true` while a baseline span is recorded.
    pub fn is_active(&self) -> bool {
        self.span.is_some()
    }
}

/// Focus and span of at least two points.
fn geometry(points: &[Point]) -> Option<(Point, f64)> {
    if points.len() < 2 {
        return None;
    }
    let n = points.len() as f64;
    let sum = points.iter().fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
    let focus = (sum / n).to_point();
    let mean = points.iter().map(|p| (*p - focus).hypot()).sum::<f64>() / n;
    Some((focus, 2.0 * mean))
}
