// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_image_viewer --heading-base-level=0

//! Understory Image Viewer: the interaction core of a full-screen image viewer.
//!
//! [`ImageViewer`] glues `understory_gesture` and `understory_zoom_view`
//! together:
//!
//! ```text
//! PointerEvent ─▶ GestureClassifier ─▶ GestureEvent ─▶ ZoomPanView ─▶ ViewerHost
//!                                                         ▲
//!                           image loaded / viewport resized
//! ```
//!
//! The host receives the image-to-viewport transform to paint with, click
//! notifications for single taps, and pointer-stream claims so an enclosing
//! scroll container can back off while the user pinches or drags.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Affine, Point, Size};
//! use understory_gesture::{PointerEvent, PointerPhase, PointerSample};
//! use understory_image_viewer::{ImageViewer, ViewerHost};
//!
//! #[derive(Default)]
//! struct Surface {
//!     transform: Option<Affine>,
//! }
//!
//! impl ViewerHost for Surface {
//!     fn transform_changed(&mut self, transform: Affine) {
//!         self.transform = Some(transform);
//!     }
//!
//!     fn click(&mut self, _position: Point) {}
//! }
//!
//! let mut viewer = ImageViewer::new(Surface::default());
//! viewer.on_viewport_resized(Size::new(1000.0, 1000.0));
//! viewer.on_image_loaded(Size::new(2000.0, 1000.0));
//! assert_eq!(
//!     viewer.host().transform.unwrap().as_coeffs(),
//!     [0.5, 0.0, 0.0, 0.5, 0.0, 250.0]
//! );
//!
//! // Spread two fingers from 100 to 300 apart around the center.
//! let down = PointerEvent::new(
//!     PointerPhase::Down,
//!     &[PointerSample::new(1, 450.0, 500.0), PointerSample::new(2, 550.0, 500.0)],
//!     0,
//! );
//! let spread = PointerEvent::new(
//!     PointerPhase::Move,
//!     &[PointerSample::new(1, 350.0, 500.0), PointerSample::new(2, 650.0, 500.0)],
//!     16,
//! );
//! viewer.on_pointer_event(&down);
//! assert!(viewer.on_pointer_event(&spread));
//! assert_eq!(viewer.view().zoom(), 3.0);
//! assert_eq!(
//!     viewer.host().transform.unwrap().as_coeffs(),
//!     [1.5, 0.0, 0.0, 1.5, -1000.0, -250.0]
//! );
//! ```
//!
//! ## Event ordering
//!
//! Everything runs synchronously on the caller's thread: each call finishes
//! classification, transform mutation, clamping and publishing before it
//! returns. Input produced elsewhere can be collected in a [`ViewerQueue`]
//! and handed over with [`ImageViewer::drain`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod host;
mod queue;
mod viewer;

pub use host::ViewerHost;
pub use queue::{ViewerEvent, ViewerQueue};
pub use viewer::{ImageViewer, ViewerConfig};
