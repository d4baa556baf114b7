// Copyright 2026 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use pinchview_gesture::pan::PanState;
use pinchview_gesture::pinch::PinchState;
use pinchview_gesture::sample::{PointerPhase, PointerSample};

use crate::{Phase, Transform};

/// Largest allowed scale, as a multiple of the fit ratio.
///
/// The cumulative scale is always kept within
/// `[fit ratio, MAX_ZOOM_MULTIPLE * fit ratio]`.
pub const MAX_ZOOM_MULTIPLE: f64 = 4.0;

/// An image bound to the viewport: intrinsic size plus an opaque handle.
///
/// The viewport never touches pixel data. The handle is whatever the
/// application uses to reach the decoded bitmap at composite time — a texture
/// ID, an `Arc` to the pixels, or `()` when the caller keeps track of the
/// bitmap itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Image<H = ()> {
    /// Intrinsic raster size in pixels.
    pub size: Size,
    /// Application handle to the pixel data.
    pub handle: H,
}

impl Image {
    /// Creates a handle-less image from its intrinsic dimensions.
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            handle: (),
        }
    }
}

impl<H> Image<H> {
    /// Creates an image from its intrinsic size and an application handle.
    pub fn new(size: Size, handle: H) -> Self {
        Self { size, handle }
    }
}

/// One redraw: the transform to composite the bound image with.
#[derive(Debug)]
pub struct Frame<'a, H = ()> {
    /// Affine parameters for this frame.
    pub transform: Transform,
    /// The bound image the transform applies to.
    pub image: &'a Image<H>,
}

/// Touch-driven pan/zoom state for one image inside a rectangular view.
///
/// The viewport consumes pointer samples through
/// [`ImageViewport::handle_sample`] and produces transform frames through
/// [`ImageViewport::render`]. Both are expected to run on one sequential
/// timeline: sample, then render if the sample requested it, then the next
/// sample.
#[derive(Clone, Debug)]
pub struct ImageViewport<H = ()> {
    view_size: Size,
    image: Option<Image<H>>,
    phase: Phase,
    init_ratio: f64,
    total_ratio: f64,
    translate: Vec2,
    scaled_size: Size,
    pan: PanState,
    pinch: PinchState,
    pinch_center: Point,
    move_delta: Vec2,
    step_ratio: f64,
}

impl<H> Default for ImageViewport<H> {
    fn default() -> Self {
        Self {
            view_size: Size::ZERO,
            image: None,
            phase: Phase::Init,
            init_ratio: 1.0,
            total_ratio: 1.0,
            translate: Vec2::ZERO,
            scaled_size: Size::ZERO,
            pan: PanState::default(),
            pinch: PinchState::default(),
            pinch_center: Point::ZERO,
            move_delta: Vec2::ZERO,
            step_ratio: 1.0,
        }
    }
}

impl<H> ImageViewport<H> {
    /// Creates an empty viewport with no image and a zero view size.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty viewport covering the given view size.
    #[must_use]
    pub fn with_view_size(view_size: Size) -> Self {
        Self {
            view_size,
            ..Self::default()
        }
    }

    /// Sets the view size in device-independent pixels.
    ///
    /// Supplied by the host on layout; it takes effect on the next fit
    /// computation and does not disturb an in-progress transform.
    pub fn set_view_size(&mut self, size: Size) {
        self.view_size = size;
    }

    /// Returns the current view size.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Binds an image, discarding all transform and gesture state except the
    /// view size.
    ///
    /// The next [`ImageViewport::render`] call fits the new image to the
    /// view.
    pub fn bind_image(&mut self, image: Image<H>) {
        self.image = Some(image);
        self.reset_transform_state();
    }

    /// Removes the bound image, returning it, and resets transform state.
    pub fn unbind(&mut self) -> Option<Image<H>> {
        let image = self.image.take();
        self.reset_transform_state();
        image
    }

    /// Returns the bound image, if any.
    #[must_use]
    pub fn image(&self) -> Option<&Image<H>> {
        self.image.as_ref()
    }

    /// Returns the phase the next frame will render.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the fit-to-view ratio computed at initialization.
    #[must_use]
    pub fn init_ratio(&self) -> f64 {
        self.init_ratio
    }

    /// Returns the cumulative scale factor relative to the intrinsic size.
    #[must_use]
    pub fn total_ratio(&self) -> f64 {
        self.total_ratio
    }

    /// Returns the current translation of the image's top-left corner in
    /// view coordinates.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translate
    }

    /// Returns the image size under the current scale.
    #[must_use]
    pub fn scaled_size(&self) -> Size {
        self.scaled_size
    }

    /// Returns the currently stored transform.
    ///
    /// This reflects the state as of the last rendered frame; a pending
    /// gesture is not folded in until [`ImageViewport::render`] runs.
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform::new(self.total_ratio, self.translate)
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            view_size: self.view_size,
            image_size: self.image.as_ref().map(|image| image.size),
            phase: self.phase,
            init_ratio: self.init_ratio,
            total_ratio: self.total_ratio,
            translate: self.translate,
            scaled_size: self.scaled_size,
        }
    }

    /// Feeds one pointer sample through the gesture classifier.
    ///
    /// Returns `true` when the sample changed the pending transform and a
    /// redraw should be scheduled. Samples are ignored — no state change, no
    /// redraw — when no image is bound, the view size is empty, the image has
    /// not been fitted yet, or the pointer count is inconsistent with the
    /// sample's phase.
    pub fn handle_sample(&mut self, sample: PointerSample<'_>) -> bool {
        if self.image.is_none() || self.view_size.width <= 0.0 || self.view_size.height <= 0.0 {
            return false;
        }
        match sample.phase {
            PointerPhase::SecondaryDown => {
                if let Some((a, b)) = sample.pair() {
                    self.pinch.begin(a, b);
                }
                false
            }
            PointerPhase::Moved => {
                if let Some(pos) = sample.single() {
                    self.pan_sample(pos)
                } else if let Some((a, b)) = sample.pair() {
                    self.pinch_sample(a, b)
                } else {
                    false
                }
            }
            PointerPhase::SecondaryUp => {
                // The next one-finger move re-seeds instead of measuring
                // against the coordinates of the finger that lifted.
                self.pan.end();
                false
            }
            PointerPhase::Other => false,
        }
    }

    /// Renders the pending state into a transform frame.
    ///
    /// Returns `None` while no image is bound or the view size is empty.
    /// With no gesture pending this reapplies the stored transform
    /// unchanged, so spurious repaints are idempotent.
    pub fn render(&mut self) -> Option<Frame<'_, H>> {
        if self.view_size.width <= 0.0 || self.view_size.height <= 0.0 {
            return None;
        }
        let image_size = self.image.as_ref()?.size;
        match self.phase {
            Phase::Init => self.fit(image_size),
            Phase::ZoomOut | Phase::ZoomIn => self.apply_zoom(image_size),
            Phase::Move => self.apply_move(),
            Phase::Settled => {}
        }
        self.phase = Phase::Settled;
        Some(Frame {
            transform: Transform::new(self.total_ratio, self.translate),
            image: self.image.as_ref()?,
        })
    }

    fn reset_transform_state(&mut self) {
        self.phase = Phase::Init;
        self.init_ratio = 1.0;
        self.total_ratio = 1.0;
        self.translate = Vec2::ZERO;
        self.scaled_size = Size::ZERO;
        self.pan.end();
        self.pinch.end();
        self.pinch_center = Point::ZERO;
        self.move_delta = Vec2::ZERO;
        self.step_ratio = 1.0;
    }

    fn pan_sample(&mut self, pos: Point) -> bool {
        // Until the first fit there is no scaled size to clamp against.
        if self.phase == Phase::Init {
            return false;
        }
        let Some(delta) = self.pan.update(pos) else {
            // Seed-only sample: the tracked position is recorded, nothing to
            // draw yet.
            return false;
        };

        // Boundary check against the translation the pending delta would
        // produce. An out-of-bound delta is rejected whole on that axis, not
        // truncated to the boundary.
        let mut delta = delta;
        let x = self.translate.x + self.move_delta.x + delta.x;
        if x > 0.0 || self.view_size.width - x > self.scaled_size.width {
            delta.x = 0.0;
        }
        let y = self.translate.y + self.move_delta.y + delta.y;
        if y > 0.0 || self.view_size.height - y > self.scaled_size.height {
            delta.y = 0.0;
        }

        self.move_delta += delta;
        self.phase = Phase::Move;
        true
    }

    fn pinch_sample(&mut self, a: Point, b: Point) -> bool {
        if self.phase == Phase::Init {
            return false;
        }
        let Some(measured) = self.pinch.measure(a, b) else {
            return false;
        };

        // Soft stop at the zoom limits: a sample pushing past a bound is
        // ignored outright, baseline distance included.
        let max_ratio = MAX_ZOOM_MULTIPLE * self.init_ratio;
        let within = if measured.is_spreading() {
            self.total_ratio < max_ratio
        } else {
            self.total_ratio > self.init_ratio
        };
        if !within {
            return false;
        }

        self.total_ratio = (self.total_ratio * measured.ratio).clamp(self.init_ratio, max_ratio);
        self.step_ratio *= measured.ratio;
        self.pinch_center = measured.center;
        self.phase = if measured.is_spreading() {
            Phase::ZoomOut
        } else {
            Phase::ZoomIn
        };
        self.pinch.commit(measured.distance);
        true
    }

    /// Computes the initial fit: scale down an overflowing image so it fits
    /// the view, center everything else.
    ///
    /// When the image overflows on either axis, the axis with the larger
    /// overflow drives the fit ratio and the other axis is centered at that
    /// same ratio.
    fn fit(&mut self, image: Size) {
        let view = self.view_size;
        let overflow_x = image.width - view.width;
        let overflow_y = image.height - view.height;

        if overflow_x > 0.0 || overflow_y > 0.0 {
            let fit_to_width = overflow_x > overflow_y;
            let ratio = if fit_to_width {
                view.width / image.width
            } else {
                view.height / image.height
            };
            self.init_ratio = ratio;
            self.total_ratio = ratio;
            self.scaled_size = image * ratio;
            self.translate = if fit_to_width {
                Vec2::new(0.0, (view.height - self.scaled_size.height) / 2.0)
            } else {
                Vec2::new((view.width - self.scaled_size.width) / 2.0, 0.0)
            };
        } else {
            self.init_ratio = 1.0;
            self.total_ratio = 1.0;
            self.scaled_size = image;
            self.translate = Vec2::new(
                (view.width - image.width) / 2.0,
                (view.height - image.height) / 2.0,
            );
        }
    }

    /// Applies a pending zoom step: rescale, then position each axis either
    /// centered (image smaller than the view) or anchored about the pinch
    /// center and clamped to keep the view covered.
    fn apply_zoom(&mut self, image: Size) {
        let view = self.view_size;
        let ratio = self.step_ratio;
        let scaled = image * self.total_ratio;

        let x = if scaled.width < view.width {
            (view.width - scaled.width) / 2.0
        } else {
            // Keeps the image point under the pinch center visually fixed
            // across the scale step, then clamps so no blank margin appears.
            let anchored = self.translate.x * ratio + self.pinch_center.x * (1.0 - ratio);
            anchored.clamp(view.width - scaled.width, 0.0)
        };
        let y = if scaled.height < view.height {
            (view.height - scaled.height) / 2.0
        } else {
            let anchored = self.translate.y * ratio + self.pinch_center.y * (1.0 - ratio);
            anchored.clamp(view.height - scaled.height, 0.0)
        };

        self.translate = Vec2::new(x, y);
        self.scaled_size = scaled;
        self.step_ratio = 1.0;
    }

    /// Applies a pending pan delta; the delta was boundary-checked at
    /// classification time.
    fn apply_move(&mut self) {
        self.translate += self.move_delta;
        self.move_delta = Vec2::ZERO;
    }
}

/// Debug snapshot of an [`ImageViewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Current view size in device-independent pixels.
    pub view_size: Size,
    /// Intrinsic size of the bound image, if any.
    pub image_size: Option<Size>,
    /// Phase the next frame will render.
    pub phase: Phase,
    /// Fit-to-view ratio computed at initialization.
    pub init_ratio: f64,
    /// Cumulative scale factor relative to the intrinsic size.
    pub total_ratio: f64,
    /// Translation of the image's top-left corner in view coordinates.
    pub translate: Vec2,
    /// Image size under the current scale.
    pub scaled_size: Size,
}
