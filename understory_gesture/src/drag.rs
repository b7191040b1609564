// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: hold motion in a dead-zone, then report movement deltas.
//!
//! ## Usage
//!
//! 1) Call [`DragState::start`] when the only pointer goes down.
//! 2) On each move, call [`DragState::update`]. It returns `None` until the
//!    displacement since the start exceeds the dead-zone on either axis, and
//!    the movement delta since the last reported position afterwards.
//! 3) Call [`DragState::end`] on up or cancel.
//!
//! The first delta reported after leaving the dead-zone covers all motion
//! since the start, so content dragged with the pointer never lags behind it.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_gesture::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 20.0));
//!
//! // A 1px tremble stays inside a 2px dead-zone.
//! assert_eq!(drag.update(Point::new(11.0, 21.0), 2.0), None);
//! assert!(!drag.is_engaged());
//!
//! // Moving further engages the drag and reports everything since the start.
//! assert_eq!(drag.update(Point::new(14.0, 21.0), 2.0), Some(Vec2::new(4.0, 1.0)));
//! assert_eq!(drag.update(Point::new(15.0, 25.0), 2.0), Some(Vec2::new(1.0, 4.0)));
//! assert_eq!(drag.total_offset(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//! ```

use kurbo::{Point, Vec2};

/// Tracks one pointer's drag for move event processing.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Position where the pointer went down.
    pub start_pos: Option<Point>,
    /// Last position reported as part of a drag.
    pub last_pos: Option<Point>,
    /// Whether motion has left the dead-zone.
    pub engaged: bool,
}

impl DragState {
    /// Start tracking a pointer at `pos`, discarding any previous drag.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.engaged = false;
    }

    /// Feed a new position and return the delta to apply, if any.
    ///
    /// Returns `None` when no drag was started, while the displacement since
    /// the start is at most `dead_zone` on both axes, and for zero-length
    /// moves once engaged.
    pub fn update(&mut self, pos: Point, dead_zone: f64) -> Option<Vec2> {
        let start = self.start_pos?;
        if !self.engaged {
            let offset = pos - start;
            if offset.x.abs() <= dead_zone && offset.y.abs() <= dead_zone {
                return None;
            }
            self.engaged = true;
        }
        let last = self.last_pos.replace(pos).unwrap_or(start);
        let delta = pos - last;
        (delta != Vec2::ZERO).then_some(delta)
    }

    /// Get total offset from the drag start position.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| current_pos - start)
    }

    /// End the current drag and reset state.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` between [`DragState::start`] and [`DragState::end`].
    pub fn is_tracking(&self) -> bool {
        self.start_pos.is_some()
    }

    /// Returns `true` once motion has left the dead-zone.
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEAD_ZONE: f64 = 2.0;

    #[test]
    fn fresh_state_is_idle() {
        let mut drag = DragState::default();
        assert!(!drag.is_tracking());
        assert!(!drag.is_engaged());
        assert_eq!(drag.update(Point::new(50.0, 50.0), DEAD_ZONE), None);
        assert_eq!(drag.total_offset(Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn motion_inside_dead_zone_is_held() {
        let mut drag = DragState::default();
        drag.start(Point::new(100.0, 100.0));

        for p in [(101.0, 100.0), (102.0, 98.0), (98.0, 102.0), (100.5, 101.5)] {
            assert_eq!(drag.update(Point::new(p.0, p.1), DEAD_ZONE), None);
        }
        assert!(!drag.is_engaged());
        assert_eq!(drag.last_pos, Some(Point::new(100.0, 100.0)));
    }

    #[test]
    fn either_axis_leaving_dead_zone_engages() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0));
        assert_eq!(
            drag.update(Point::new(0.5, -2.5), DEAD_ZONE),
            Some(Vec2::new(0.5, -2.5))
        );
        assert!(drag.is_engaged());

        // Once engaged, small moves are reported as-is.
        assert_eq!(
            drag.update(Point::new(1.0, -2.0), DEAD_ZONE),
            Some(Vec2::new(0.5, 0.5))
        );
    }

    #[test]
    fn zero_length_move_reports_nothing() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0));
        drag.update(Point::new(10.0, 0.0), DEAD_ZONE);
        assert_eq!(drag.update(Point::new(10.0, 0.0), DEAD_ZONE), None);
        assert!(drag.is_engaged());
    }

    #[test]
    fn deltas_sum_to_total_offset() {
        let mut drag = DragState::default();
        let start = Point::new(3.0, 4.0);
        drag.start(start);
        let path = [(4.0, 4.0), (9.0, 6.0), (12.0, 1.0), (-20.0, 8.0)];
        let mut sum = Vec2::ZERO;
        for p in path {
            if let Some(d) = drag.update(Point::new(p.0, p.1), DEAD_ZONE) {
                sum += d;
            }
        }
        assert_eq!(Some(sum), drag.total_offset(Point::new(-20.0, 8.0)));
    }

    #[test]
    fn start_rearms_the_dead_zone() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0));
        drag.update(Point::new(30.0, 0.0), DEAD_ZONE);
        assert!(drag.is_engaged());

        drag.start(Point::new(30.0, 0.0));
        assert!(!drag.is_engaged());
        assert_eq!(drag.update(Point::new(31.0, 1.0), DEAD_ZONE), None);
    }

    #[test]
    fn end_resets_state() {
        let mut drag = DragState::default();
        drag.start(Point::new(10.0, 20.0));
        drag.update(Point::new(50.0, 20.0), DEAD_ZONE);

        drag.end();

        assert!(drag.start_pos.is_none());
        assert!(drag.last_pos.is_none());
        assert!(!drag.engaged);
    }
}
