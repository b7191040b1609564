// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::config::{ZoomConfig, ZoomState};
use crate::fit::{fit_within, is_drawable};

/// Zoom and pan state for one image inside a fixed-size viewport.
///
/// `ZoomPanView` owns the live image-to-viewport transform. It starts at the
/// fitted base transform (see [`fit_within`]) and is mutated by pinch, pan and
/// double-tap operations. After every mutation:
/// - the zoom factor relative to the base stays within `[1.0, max_zoom]`;
/// - on each axis where the image is no larger than the viewport, the image
///   is centered;
/// - on each axis where the image is larger, no blank viewport area is
///   exposed past either image edge.
///
/// Every operation is a no-op until both an image and a non-empty viewport
/// are known. Mutating operations return `true` when the transform changed.
#[derive(Clone, Debug)]
pub struct ZoomPanView {
    viewport: Size,
    image: Option<Size>,
    config: ZoomConfig,
    base: Option<Affine>,
    transform: Affine,
    zoom: f64,
}

impl Default for ZoomPanView {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoomPanView {
    /// Creates an empty view with a zero viewport, no image and default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ZoomConfig::default())
    }

    /// Creates an empty view using the given zoom limits.
    ///
    /// The config is normalized with [`ZoomConfig::normalized`].
    #[must_use]
    pub fn with_config(config: ZoomConfig) -> Self {
        Self {
            viewport: Size::ZERO,
            image: None,
            config: config.normalized(),
            base: None,
            transform: Affine::IDENTITY,
            zoom: 1.0,
        }
    }

    /// Returns the current zoom limits.
    #[must_use]
    pub fn config(&self) -> ZoomConfig {
        self.config
    }

    /// Replaces the zoom limits.
    ///
    /// The current zoom is clamped into the new range; if that changes it,
    /// the image is re-zoomed about the viewport center.
    pub fn set_config(&mut self, config: ZoomConfig) -> bool {
        self.config = config.normalized();
        if self.zoom > self.config.max_zoom {
            let center = self.viewport_center();
            return self.zoom_to(self.config.max_zoom, center);
        }
        false
    }

    /// Returns the viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Sets the viewport size and resets to the fitted transform.
    ///
    /// Any zoom or pan is discarded, even when the size did not change the
    /// aspect ratio.
    pub fn set_viewport(&mut self, viewport: Size) -> bool {
        if self.viewport == viewport {
            return false;
        }
        self.viewport = viewport;
        self.rebuild_base()
    }

    /// Returns the intrinsic image size, if an image is loaded.
    #[must_use]
    pub fn image(&self) -> Option<Size> {
        self.image
    }

    /// Sets (or clears) the intrinsic image size and resets to the fitted
    /// transform.
    pub fn set_image(&mut self, image: Option<Size>) -> bool {
        self.image = image;
        self.rebuild_base()
    }

    /// Returns the live transform, or `None` if nothing can be drawn yet.
    #[must_use]
    pub fn transform(&self) -> Option<Affine> {
        self.base.map(|_| self.transform)
    }

    /// Returns the fitted base transform, if available.
    #[must_use]
    pub fn base_transform(&self) -> Option<Affine> {
        self.base
    }

    /// Returns the zoom factor on top of the base transform.
    ///
    /// This is `1.0` while fitted or unavailable.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the coarse zoom state.
    #[must_use]
    pub fn state(&self) -> ZoomState {
        match self.base {
            None => ZoomState::Unavailable,
            Some(_) if self.zoom > 1.0 => ZoomState::Zoomed,
            Some(_) => ZoomState::Fitted,
        }
    }

    /// Returns `true` while zoomed past the fitted size.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.state() == ZoomState::Zoomed
    }

    /// Returns the image bounds mapped into viewport coordinates.
    #[must_use]
    pub fn image_rect(&self) -> Option<Rect> {
        self.base.and(self.image).map(|image| {
            self.transform
                .transform_rect_bbox(Rect::from_origin_size(Point::ORIGIN, image))
        })
    }

    /// Applies an incremental pinch.
    ///
    /// `factor` is the ratio since the previous pinch sample. The resulting
    /// zoom is clamped into `[1.0, max_zoom]` and the scale is applied about
    /// `focus` (viewport coordinates). Landing on `1.0` restores the base
    /// transform exactly.
    ///
    /// A non-finite or non-positive factor, or a non-finite focus, is ignored.
    pub fn pinch(&mut self, factor: f64, focus: Point) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            log::debug!("ignoring pinch with degenerate factor {factor}");
            return false;
        }
        // The product overflows to infinity for huge finite factors.
        let target = (self.zoom * factor).min(self.config.max_zoom);
        self.zoom_to(target, focus)
    }

    /// Zooms to an absolute factor relative to the base transform, keeping
    /// `focus` fixed where possible.
    pub fn zoom_to(&mut self, target: f64, focus: Point) -> bool {
        if self.base.is_none() {
            return false;
        }
        if !target.is_finite() || !focus.is_finite() {
            log::debug!("ignoring zoom to {target} about {focus:?}");
            return false;
        }
        let target = target.clamp(1.0, self.config.max_zoom);
        if target == self.zoom {
            return false;
        }
        if target == 1.0 {
            return self.reset();
        }
        let step = target / self.zoom;
        let anchor = focus.to_vec2();
        self.transform = Affine::translate(anchor)
            * Affine::scale(step)
            * Affine::translate(-anchor)
            * self.transform;
        self.zoom = target;
        self.clamp_to_viewport();
        true
    }

    /// Pans by a delta in viewport coordinates.
    ///
    /// Only has an effect while zoomed; at the fitted size drags are dropped,
    /// not buffered.
    pub fn pan(&mut self, delta: Vec2) -> bool {
        if !self.is_zoomed() || delta == Vec2::ZERO {
            return false;
        }
        if !delta.is_finite() {
            log::debug!("ignoring pan by {delta:?}");
            return false;
        }
        let before = self.transform;
        self.transform = Affine::translate(delta) * self.transform;
        self.clamp_to_viewport();
        self.transform != before
    }

    /// Toggles between the fitted size and the configured double-tap zoom.
    pub fn double_tap(&mut self, point: Point) -> bool {
        if self.is_zoomed() {
            self.reset()
        } else {
            self.zoom_to(self.config.double_tap_zoom, point)
        }
    }

    /// Returns to the fitted base transform.
    pub fn reset(&mut self) -> bool {
        let Some(base) = self.base else {
            return false;
        };
        let changed = self.transform != base || self.zoom != 1.0;
        self.transform = base;
        self.zoom = 1.0;
        changed
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ZoomPanDebugInfo {
        ZoomPanDebugInfo {
            viewport: self.viewport,
            image: self.image,
            state: self.state(),
            zoom: self.zoom,
            base: self.base,
            transform: self.transform(),
            image_rect: self.image_rect(),
            config: self.config,
        }
    }

    fn viewport_center(&self) -> Point {
        Point::new(self.viewport.width / 2.0, self.viewport.height / 2.0)
    }

    fn rebuild_base(&mut self) -> bool {
        let previous = self.transform();
        self.base = self.image.and_then(|image| fit_within(self.viewport, image));
        self.zoom = 1.0;
        match self.base {
            Some(base) => {
                log::debug!(
                    "fitted {:?} into {:?}: {:?}",
                    self.image,
                    self.viewport,
                    base.as_coeffs()
                );
                self.transform = base;
            }
            None => {
                if self.image.is_some_and(|image| !is_drawable(image)) {
                    log::debug!("image size {:?} cannot be drawn", self.image);
                }
                self.transform = Affine::IDENTITY;
            }
        }
        previous != self.transform()
    }

    fn clamp_to_viewport(&mut self) {
        let Some(mapped) = self.image_rect() else {
            return;
        };
        let dx = axis_correction(mapped.x0, mapped.x1, self.viewport.width);
        let dy = axis_correction(mapped.y0, mapped.y1, self.viewport.height);
        if dx != 0.0 || dy != 0.0 {
            self.transform = Affine::translate((dx, dy)) * self.transform;
        }
    }
}

/// Translation needed on one axis to center a short image or to close a gap
/// left by a long one. The viewport spans `0..extent`.
fn axis_correction(start: f64, end: f64, extent: f64) -> f64 {
    let len = end - start;
    if len <= extent {
        (extent - len) / 2.0 - start
    } else if start > 0.0 {
        -start
    } else if end < extent {
        extent - end
    } else {
        0.0
    }
}

/// Debug snapshot of a [`ZoomPanView`] state.
#[derive(Clone, Copy, Debug)]
pub struct ZoomPanDebugInfo {
    /// Viewport size.
    pub viewport: Size,
    /// Intrinsic image size, if loaded.
    pub image: Option<Size>,
    /// Coarse zoom state.
    pub state: ZoomState,
    /// Zoom factor on top of the base transform.
    pub zoom: f64,
    /// Fitted base transform.
    pub base: Option<Affine>,
    /// Live transform.
    pub transform: Option<Affine>,
    /// Image bounds in viewport coordinates.
    pub image_rect: Option<Rect>,
    /// Zoom limits.
    pub config: ZoomConfig,
}
