// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Size};

/// Computes the transform that fits `image` inside `viewport` without cropping.
///
/// The image is scaled uniformly by `min(vw / iw, vh / ih)` and centered, so
/// the leftover margin is split evenly on whichever axis has any.
///
/// Returns `None` unless every extent is finite and strictly positive; callers
/// should not draw anything in that case.
///
/// ```rust
/// use kurbo::Size;
/// use understory_zoom_view::fit_within;
///
/// let base = fit_within(Size::new(1000.0, 1000.0), Size::new(2000.0, 1000.0)).unwrap();
/// assert_eq!(base.as_coeffs(), [0.5, 0.0, 0.0, 0.5, 0.0, 250.0]);
/// ```
#[must_use]
pub fn fit_within(viewport: Size, image: Size) -> Option<Affine> {
    if !is_drawable(viewport) || !is_drawable(image) {
        return None;
    }
    let scale = (viewport.width / image.width).min(viewport.height / image.height);
    let tx = (viewport.width - image.width * scale) / 2.0;
    let ty = (viewport.height - image.height * scale) / 2.0;
    Some(Affine::translate((tx, ty)) * Affine::scale(scale))
}

pub(crate) fn is_drawable(size: Size) -> bool {
    size.is_finite() && size.width > 0.0 && size.height > 0.0
}
