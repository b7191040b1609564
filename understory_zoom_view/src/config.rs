// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Upper bound on the zoom factor applied on top of the fitted transform.
pub const MAX_ZOOM: f64 = 5.0;

/// Zoom factor a double tap jumps to from the fitted state.
pub const DOUBLE_TAP_ZOOM: f64 = 2.5;

/// Zoom limits consulted by [`crate::ZoomPanView`].
///
/// Both factors are relative to the fitted base transform, so `1.0` always
/// means "the whole image fits the viewport".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Largest zoom factor reachable by pinching or double tapping.
    pub max_zoom: f64,
    /// Zoom factor used by [`crate::ZoomPanView::double_tap`] when fitted.
    pub double_tap_zoom: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            max_zoom: MAX_ZOOM,
            double_tap_zoom: DOUBLE_TAP_ZOOM,
        }
    }
}

impl ZoomConfig {
    /// Returns a copy with every field forced into a usable range.
    ///
    /// - Non-finite values fall back to the defaults.
    /// - `max_zoom` is at least `1.0`.
    /// - `double_tap_zoom` is clamped into `[1.0, max_zoom]`.
    #[must_use]
    pub fn normalized(self) -> Self {
        let max_zoom = if self.max_zoom.is_finite() {
            self.max_zoom.max(1.0)
        } else {
            MAX_ZOOM
        };
        let double_tap_zoom = if self.double_tap_zoom.is_finite() {
            self.double_tap_zoom
        } else {
            DOUBLE_TAP_ZOOM
        };
        Self {
            max_zoom,
            double_tap_zoom: double_tap_zoom.clamp(1.0, max_zoom),
        }
    }
}

/// Coarse state of a [`crate::ZoomPanView`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomState {
    /// No image, or a degenerate viewport; nothing can be drawn.
    Unavailable,
    /// The image is shown at its fitted base transform.
    Fitted,
    /// The image is zoomed past the fitted size and may be panned.
    Zoomed,
}
