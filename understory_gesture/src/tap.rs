// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap and double-tap recognition.
//!
//! A completed tap is held as *pending* until either a second tap turns it
//! into a double tap or the double-tap window closes, at which point it is
//! confirmed as a single tap. Time only advances through event timestamps
//! and explicit polls, so no timer is needed.

use kurbo::Point;

use crate::classifier::{GestureConfig, GestureEvent, GestureEvents};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Press {
    origin: Point,
    down_time: u64,
    is_tap: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct PendingTap {
    position: Point,
    up_time: u64,
}

impl PendingTap {
    fn accepts(&self, pos: Point, time: u64, config: &GestureConfig) -> bool {
        time.saturating_sub(self.up_time) <= config.double_tap_timeout
            && (pos - self.position).hypot() <= config.double_tap_slop
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct TapState {
    press: Option<Press>,
    pending: Option<PendingTap>,
}

impl TapState {
    /// The first pointer of a gesture went down.
    pub(crate) fn press(
        &mut self,
        pos: Point,
        time: u64,
        config: &GestureConfig,
        out: &mut GestureEvents,
    ) {
        if self.pending.is_some_and(|p| !p.accepts(pos, time, config)) {
            self.confirm(out);
        }
        self.press = Some(Press {
            origin: pos,
            down_time: time,
            is_tap: true,
        });
    }

    /// The current press can no longer be a tap.
    pub(crate) fn spoil(&mut self, out: &mut GestureEvents) {
        if let Some(press) = &mut self.press {
            press.is_tap = false;
        }
        self.confirm(out);
    }

    /// The last pointer of a gesture lifted.
    pub(crate) fn release(&mut self, time: u64, config: &GestureConfig, out: &mut GestureEvents) {
        let Some(press) = self.press.take() else {
            return;
        };
        if !press.is_tap || time.saturating_sub(press.down_time) > config.tap_timeout {
            self.confirm(out);
            return;
        }
        match self.pending.take() {
            Some(first) => out.push(GestureEvent::DoubleTap(first.position)),
            None => {
                self.pending = Some(PendingTap {
                    position: press.origin,
                    up_time: time,
                });
            }
        }
    }

    /// Confirms a pending tap whose double-tap window has closed by `now`.
    pub(crate) fn expire(&mut self, now: u64, config: &GestureConfig, out: &mut GestureEvents) {
        // A press in progress was already accepted as a possible second tap.
        if self.press.is_some() {
            return;
        }
        if self
            .pending
            .is_some_and(|p| now.saturating_sub(p.up_time) > config.double_tap_timeout)
        {
            self.confirm(out);
        }
    }

    pub(crate) fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub(crate) fn cancel(&mut self) {
        *self = Self::default();
    }

    fn confirm(&mut self, out: &mut GestureEvents) {
        if let Some(pending) = self.pending.take() {
            out.push(GestureEvent::Tap(pending.position));
        }
    }
}
