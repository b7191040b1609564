// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_zoom_view --heading-base-level=0

//! Understory Zoom View: fitted, clamped zoom and pan for a single image.
//!
//! This crate provides a small, headless model of an image shown inside a
//! fixed-size viewport, the way a full-screen photo viewer presents it:
//! - [`fit_within`] computes the base transform that scales the image to fit
//!   the viewport without cropping and centers it.
//! - [`ZoomPanView`] owns the live transform on top of that base and applies
//!   pinch, pan and double-tap operations while keeping two invariants:
//!   the zoom factor stays within `[1.0, max_zoom]`, and the image never
//!   reveals blank viewport area past its edges on an axis where it is larger
//!   than the viewport (it is centered on axes where it is smaller).
//!
//! It does **not** interpret pointer input or draw anything. Callers are
//! expected to:
//! - Classify raw pointer input into gestures at a higher layer (for example
//!   with `understory_gesture`).
//! - Feed viewport and image size changes into [`ZoomPanView`].
//! - Read [`ZoomPanView::transform`] and hand it to their rendering surface.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use understory_zoom_view::{ZoomPanView, ZoomState};
//!
//! let mut view = ZoomPanView::new();
//! view.set_viewport(Size::new(1000.0, 1000.0));
//! view.set_image(Some(Size::new(2000.0, 1000.0)));
//! assert_eq!(view.state(), ZoomState::Fitted);
//!
//! // Pinch out around the viewport center.
//! view.pinch(3.0, Point::new(500.0, 500.0));
//! assert_eq!(view.zoom(), 3.0);
//!
//! // Drag far to the right: the left image edge stops at the viewport edge.
//! view.pan(Vec2::new(5000.0, 0.0));
//! assert_eq!(view.image_rect().unwrap().x0, 0.0);
//!
//! // Double tap while zoomed goes back to the fitted transform.
//! view.double_tap(Point::new(10.0, 10.0));
//! assert_eq!(view.transform(), view.base_transform());
//! ```
//!
//! ## Design notes
//!
//! - Transforms are `kurbo::Affine` values with a uniform scale and no
//!   rotation.
//! - Zoom is tracked as a factor relative to the base transform, not as an
//!   absolute scale, so `1.0` always means "fitted".
//! - Resizing the viewport or loading a new image resets to the fitted state.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod fit;
mod zoom_pan;

pub use config::{DOUBLE_TAP_ZOOM, MAX_ZOOM, ZoomConfig, ZoomState};
pub use fit::fit_within;
pub use zoom_pan::{ZoomPanDebugInfo, ZoomPanView};
