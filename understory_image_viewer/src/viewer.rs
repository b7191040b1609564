// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Size};
use understory_gesture::{GestureClassifier, GestureConfig, GestureEvent, PointerEvent};
use understory_zoom_view::{ZoomConfig, ZoomPanView};

use crate::host::ViewerHost;
use crate::queue::{ViewerEvent, ViewerQueue};

/// Combined thresholds for an [`ImageViewer`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewerConfig {
    /// Gesture classification thresholds.
    pub gesture: GestureConfig,
    /// Zoom limits.
    pub zoom: ZoomConfig,
}

/// Pinch/drag/double-tap image viewer.
///
/// Owns the gesture classifier and the zoom view for one image, routes
/// gestures to transform operations and reports results to its host:
/// - `Pinch` zooms about the pinch focus.
/// - `Drag` pans, only while zoomed.
/// - `DoubleTap` toggles between fitted and the double-tap zoom.
/// - `Tap` is forwarded to [`ViewerHost::click`].
///
/// The transform is published to [`ViewerHost::transform_changed`] whenever
/// it differs from the previously published one.
#[derive(Debug)]
pub struct ImageViewer<H> {
    host: H,
    gestures: GestureClassifier,
    view: ZoomPanView,
    published: Option<Affine>,
    claimed: bool,
}

impl<H: ViewerHost> ImageViewer<H> {
    /// Creates a viewer with default thresholds.
    #[must_use]
    pub fn new(host: H) -> Self {
        Self::with_config(host, ViewerConfig::default())
    }

    /// Creates a viewer with the given thresholds.
    #[must_use]
    pub fn with_config(host: H, config: ViewerConfig) -> Self {
        Self {
            host,
            gestures: GestureClassifier::new(config.gesture),
            view: ZoomPanView::with_config(config.zoom),
            published: None,
            claimed: false,
        }
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the viewer and returns its host.
    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }

    /// Read-only access to the zoom state.
    #[must_use]
    pub fn view(&self) -> &ZoomPanView {
        &self.view
    }

    /// Read-only access to the gesture classifier.
    #[must_use]
    pub fn gestures(&self) -> &GestureClassifier {
        &self.gestures
    }

    /// The last published transform, if any.
    #[must_use]
    pub fn transform(&self) -> Option<Affine> {
        self.published
    }

    /// A new image finished loading; fits it into the viewport.
    pub fn on_image_loaded(&mut self, size: Size) {
        self.view.set_image(Some(size));
        self.after_reset();
    }

    /// The image was removed; nothing can be drawn until the next load.
    pub fn on_image_cleared(&mut self) {
        self.view.set_image(None);
        self.gestures.reset();
        self.after_reset();
    }

    /// The viewport changed size; the image is re-fitted and zoom discarded.
    pub fn on_viewport_resized(&mut self, size: Size) {
        if self.view.set_viewport(size) {
            self.after_reset();
        }
    }

    /// Handles one pointer event.
    ///
    /// Returns `true` if the event was consumed by the viewer, meaning an
    /// enclosing scroll container should not act on it: the image is zoomed
    /// in or a pinch is in progress. Events are ignored (and `false`
    /// returned) while no transform is available.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        if self.view.transform().is_none() {
            self.gestures.reset();
            return false;
        }
        for gesture in self.gestures.handle(event) {
            self.apply(gesture);
        }
        if self.gestures.active_pointers() == 0 {
            self.set_claim(false);
        }
        self.publish();
        self.view.is_zoomed() || self.gestures.is_pinching()
    }

    /// Advances time without input so a pending single tap can be confirmed.
    pub fn poll(&mut self, now: u64) {
        for gesture in self.gestures.poll(now) {
            self.apply(gesture);
        }
        self.publish();
    }

    /// Handles one queued event, returning whether a pointer event was consumed.
    pub fn dispatch(&mut self, event: ViewerEvent) -> bool {
        match event {
            ViewerEvent::ImageLoaded(size) => self.on_image_loaded(size),
            ViewerEvent::ImageCleared => self.on_image_cleared(),
            ViewerEvent::ViewportResized(size) => self.on_viewport_resized(size),
            ViewerEvent::Pointer(pointer) => return self.on_pointer_event(&pointer),
            ViewerEvent::Tick(now) => self.poll(now),
        }
        false
    }

    /// Handles every queued event in arrival order.
    pub fn drain(&mut self, queue: &mut ViewerQueue) {
        while let Some(event) = queue.pop() {
            self.dispatch(event);
        }
    }

    fn apply(&mut self, gesture: GestureEvent) {
        match gesture {
            GestureEvent::Pinch { factor, focus } => {
                if self.view.pinch(factor, focus) {
                    self.set_claim(true);
                }
            }
            GestureEvent::Drag(delta) => {
                self.view.pan(delta);
                if self.view.is_zoomed() {
                    self.set_claim(true);
                }
            }
            // Reported on the final up, so there is no stream left to claim.
            GestureEvent::DoubleTap(point) => {
                self.view.double_tap(point);
            }
            GestureEvent::Tap(point) => self.host.click(point),
        }
    }

    fn after_reset(&mut self) {
        self.set_claim(false);
        self.publish();
    }

    fn set_claim(&mut self, claim: bool) {
        if self.claimed != claim {
            self.claimed = claim;
            self.host.claim_pointer_stream(claim);
        }
    }

    fn publish(&mut self) {
        let current = self.view.transform();
        if current == self.published {
            return;
        }
        self.published = current;
        match current {
            Some(transform) => {
                log::trace!("publishing {:?}", transform.as_coeffs());
                self.host.transform_changed(transform);
            }
            None => {
                log::debug!("transform unavailable: {:?}", self.view.debug_info());
                self.host.transform_cleared();
            }
        }
    }
}
