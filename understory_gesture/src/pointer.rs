// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw pointer input as delivered by the platform.

use core::fmt;

use kurbo::Point;
use smallvec::SmallVec;

/// Identifies one contact (finger, pen, mouse button) for its whole lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

/// Phase of a [`PointerEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// The listed pointers made contact.
    Down,
    /// The listed pointers moved.
    Move,
    /// The listed pointers lifted.
    Up,
    /// The platform took the stream away; every pointer is gone.
    Cancel,
}

/// One pointer's position in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Pointer identity.
    pub id: PointerId,
    /// Position in viewport coordinates.
    pub position: Point,
}

impl PointerSample {
    /// Creates a sample.
    #[must_use]
    pub fn new(id: u64, x: f64, y: f64) -> Self {
        Self {
            id: PointerId(id),
            position: Point::new(x, y),
        }
    }
}

/// A single pointer event.
///
/// For [`PointerPhase::Down`] and [`PointerPhase::Up`] the samples are the
/// pointers whose contact changed. For [`PointerPhase::Move`] they are the
/// updated positions of the pointers that moved. [`PointerPhase::Cancel`]
/// ignores its samples.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Event phase.
    pub phase: PointerPhase,
    /// Affected pointers.
    pub pointers: SmallVec<[PointerSample; 2]>,
    /// Monotonic timestamp in milliseconds.
    pub timestamp: u64,
}

impl PointerEvent {
    /// Creates an event from a phase, samples and timestamp.
    #[must_use]
    pub fn new(phase: PointerPhase, pointers: &[PointerSample], timestamp: u64) -> Self {
        Self {
            phase,
            pointers: SmallVec::from_slice(pointers),
            timestamp,
        }
    }

    /// A single pointer going down.
    #[must_use]
    pub fn down(id: u64, position: Point, timestamp: u64) -> Self {
        Self::single(PointerPhase::Down, id, position, timestamp)
    }

    /// A single pointer moving.
    #[must_use]
    pub fn moved(id: u64, position: Point, timestamp: u64) -> Self {
        Self::single(PointerPhase::Move, id, position, timestamp)
    }

    /// A single pointer lifting.
    #[must_use]
    pub fn up(id: u64, position: Point, timestamp: u64) -> Self {
        Self::single(PointerPhase::Up, id, position, timestamp)
    }

    /// The whole stream being cancelled.
    #[must_use]
    pub fn cancel(timestamp: u64) -> Self {
        Self::new(PointerPhase::Cancel, &[], timestamp)
    }

    fn single(phase: PointerPhase, id: u64, position: Point, timestamp: u64) -> Self {
        Self::new(
            phase,
            &[PointerSample {
                id: PointerId(id),
                position,
            }],
            timestamp,
        )
    }

    /// Checks that the event is well formed.
    ///
    /// Every sample must have finite coordinates, and down/up/move events
    /// must name at least one pointer.
    pub fn validate(&self) -> Result<(), InvalidPointerEvent> {
        if self.phase == PointerPhase::Cancel {
            return Ok(());
        }
        if self.pointers.is_empty() {
            return Err(InvalidPointerEvent::NoPointers { phase: self.phase });
        }
        match self.pointers.iter().find(|s| !s.position.is_finite()) {
            Some(s) => Err(InvalidPointerEvent::NonFinitePosition {
                id: s.id,
                position: s.position,
            }),
            None => Ok(()),
        }
    }
}

/// Why a [`PointerEvent`] was rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InvalidPointerEvent {
    /// A sample had a NaN or infinite coordinate.
    NonFinitePosition {
        /// Offending pointer.
        id: PointerId,
        /// Its reported position.
        position: Point,
    },
    /// A down/move/up event listed no pointers.
    NoPointers {
        /// Phase of the empty event.
        phase: PointerPhase,
    },
}

impl fmt::Display for InvalidPointerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinitePosition { id, position } => write!(
                f,
                "pointer {} reported a non-finite position ({}, {})",
                id.0, position.x, position.y
            ),
            Self::NoPointers { phase } => write!(f, "{phase:?} event without any pointers"),
        }
    }
}

impl core::error::Error for InvalidPointerEvent {}
