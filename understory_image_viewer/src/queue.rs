// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-consumer FIFO of viewer input.
//!
//! Platforms that deliver input on several threads, or from callbacks that
//! cannot borrow the viewer, push [`ViewerEvent`]s here; the thread that owns
//! the [`crate::ImageViewer`] drains them with
//! [`ImageViewer::drain`](crate::ImageViewer::drain). Each event is fully
//! handled before the next one is popped.

use alloc::collections::VecDeque;

use kurbo::Size;
use understory_gesture::PointerEvent;

/// One unit of viewer input.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewerEvent {
    /// A new image finished loading; its intrinsic size.
    ImageLoaded(Size),
    /// The image was removed.
    ImageCleared,
    /// The viewport changed size.
    ViewportResized(Size),
    /// Raw pointer input.
    Pointer(PointerEvent),
    /// Time passed without input, in the pointer timestamp clock.
    Tick(u64),
}

/// FIFO of [`ViewerEvent`]s.
#[derive(Clone, Debug, Default)]
pub struct ViewerQueue {
    events: VecDeque<ViewerEvent>,
}

impl ViewerQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event.
    pub fn push(&mut self, event: ViewerEvent) {
        self.events.push_back(event);
    }

    /// Removes the oldest event.
    pub fn pop(&mut self) -> Option<ViewerEvent> {
        self.events.pop_front()
    }

    /// Number of queued events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drops every queued event.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Extend<ViewerEvent> for ViewerQueue {
    fn extend<I: IntoIterator<Item = ViewerEvent>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}
