// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point};

/// Receives everything an [`crate::ImageViewer`] makes externally visible.
///
/// All calls happen synchronously from inside the viewer's event handling.
pub trait ViewerHost {
    /// The image-to-viewport transform changed. Paint the image with it.
    fn transform_changed(&mut self, transform: Affine);

    /// No transform is available any more (image cleared, viewport collapsed).
    fn transform_cleared(&mut self) {}

    /// A single tap that the viewer did not use for zooming.
    fn click(&mut self, position: Point);

    /// Whether the viewer wants to keep the current pointer stream for itself.
    ///
    /// `true` is reported once a pinch changes the transform or a drag pans
    /// the zoomed image, so an enclosing scroll container should stop
    /// intercepting; `false` once the last pointer lifts or the view is reset.
    fn claim_pointer_stream(&mut self, _claim: bool) {}
}

/// Headless host that ignores everything.
impl ViewerHost for () {
    fn transform_changed(&mut self, _transform: Affine) {}

    fn click(&mut self, _position: Point) {}
}

impl<H: ViewerHost + ?Sized> ViewerHost for &mut H {
    fn transform_changed(&mut self, transform: Affine) {
        (**self).transform_changed(transform);
    }

    fn transform_cleared(&mut self) {
        (**self).transform_cleared();
    }

    fn click(&mut self, position: Point) {
        (**self).click(position);
    }

    fn claim_pointer_stream(&mut self, claim: bool) {
        (**self).claim_pointer_stream(claim);
    }
}
