// Copyright 2026 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinchview Viewport: a headless, touch-driven image viewport.
//!
//! [`ImageViewport`] turns a stream of one- and two-finger pointer samples
//! into an affine transform (uniform scale plus translation) for displaying a
//! bitmap inside a rectangular view. It handles:
//! - Fit-to-view initialization, centering images smaller than the view.
//! - Pinch zoom anchored at the finger midpoint, bounded between the fit
//!   ratio and four times the fit ratio.
//! - One-finger panning with boundary checks that never let the image stop
//!   covering the view on an axis where it is larger than the view.
//!
//! It does **not** own a surface or draw anything. Callers are expected to:
//! - Decode and own the bitmap, binding only its intrinsic size (plus an
//!   opaque handle) via [`Image`].
//! - Feed already-decoded pointer samples (for example, translated from a
//!   windowing toolkit's touch events) into
//!   [`ImageViewport::handle_sample`].
//! - When a sample reports that a redraw is needed, call
//!   [`ImageViewport::render`] and composite the image through the returned
//!   [`Transform`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use pinchview_gesture::sample::{PointerPhase, PointerSample};
//! use pinchview_viewport::{Image, ImageViewport};
//!
//! let mut view = ImageViewport::new();
//! view.set_view_size(Size::new(1000.0, 1000.0));
//! view.bind_image(Image::sized(2000.0, 1000.0));
//!
//! // The first frame fits the image to the view.
//! let frame = view.render().unwrap();
//! assert_eq!(frame.transform.scale, 0.5);
//!
//! // A two-finger spread zooms in about the pinch midpoint.
//! view.handle_sample(PointerSample::new(
//!     PointerPhase::SecondaryDown,
//!     &[Point::new(400.0, 500.0), Point::new(600.0, 500.0)],
//! ));
//! let spread = [Point::new(300.0, 500.0), Point::new(700.0, 500.0)];
//! if view.handle_sample(PointerSample::new(PointerPhase::Moved, &spread)) {
//!     let frame = view.render().unwrap();
//!     assert!(frame.transform.scale > 0.5);
//! }
//! ```
//!
//! ## Design notes
//!
//! - The transform is axis-aligned with a **uniform** scale factor; rotation
//!   is deliberately out of scope.
//! - Classification and rendering are split: [`ImageViewport::handle_sample`]
//!   mutates gesture state and reports whether a redraw is needed, while
//!   [`ImageViewport::render`] is a function of that state with no input of
//!   its own. A render with no pending gesture reapplies the stored
//!   transform unchanged.
//! - Sampling is strictly sequential; there is no internal threading and no
//!   cancellation concept. Binding a new image simply discards in-flight
//!   gesture state.
//! - Out-of-bound pan deltas are rejected whole on the offending axis rather
//!   than truncated to the boundary, so a pan at the edge holds still
//!   instead of creeping.
//!
//! This crate is `no_std`.

#![no_std]

mod phase;
mod transform;
mod viewport;

pub use phase::Phase;
pub use transform::Transform;
pub use viewport::{Frame, Image, ImageViewport, MAX_ZOOM_MULTIPLE, ViewportDebugInfo};
