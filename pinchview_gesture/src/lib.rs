// Copyright 2026 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinchview Gesture: small state machines for one- and two-finger touch input.
//!
//! This crate provides the stateful building blocks an image viewport needs to
//! interpret a raw pointer-event stream. Each module handles one interaction
//! primitive:
//!
//! - [`sample`]: The pointer-sample model — an event kind plus the positions
//!   of the currently active pointers (one or two).
//! - [`pan`]: One-finger pan tracking with seeded movement deltas.
//! - [`pinch`]: Two-finger pinch tracking producing a midpoint and an
//!   incremental scale factor per move sample.
//!
//! ## Design
//!
//! The trackers here are deliberately minimal and framework-agnostic. They do
//! not recognize higher-level gestures (no fling, no rotation, no double-tap)
//! and they do not decide what a delta or a scale step *means* — that is the
//! viewport's job. They only turn position samples into well-defined
//! increments, guarding against the degenerate inputs a raw touch stream can
//! produce: a finger landing far from where the last one lifted, or two
//! coincident fingers whose distance would divide to infinity.
//!
//! ## Pan tracking
//!
//! ```rust
//! use kurbo::Point;
//! use pinchview_gesture::pan::PanState;
//!
//! let mut pan = PanState::default();
//!
//! // The first sample after a gap only seeds the tracked position.
//! assert_eq!(pan.update(Point::new(10.0, 20.0)), None);
//!
//! // Subsequent samples produce deltas.
//! let delta = pan.update(Point::new(15.0, 24.0)).unwrap();
//! assert_eq!(delta.x, 5.0);
//! assert_eq!(delta.y, 4.0);
//!
//! // After `end` the next sample seeds again instead of jumping.
//! pan.end();
//! assert_eq!(pan.update(Point::new(500.0, 500.0)), None);
//! ```
//!
//! ## Pinch tracking
//!
//! ```rust
//! use kurbo::Point;
//! use pinchview_gesture::pinch::PinchState;
//!
//! let mut pinch = PinchState::default();
//!
//! // Second finger down: record the baseline distance.
//! pinch.begin(Point::new(40.0, 50.0), Point::new(60.0, 50.0));
//!
//! // Fingers spread to twice the distance.
//! let sample = pinch
//!     .measure(Point::new(30.0, 50.0), Point::new(70.0, 50.0))
//!     .unwrap();
//! assert_eq!(sample.ratio, 2.0);
//! assert_eq!(sample.center, Point::new(50.0, 50.0));
//!
//! // Measuring does not advance the baseline; committing does.
//! pinch.commit(sample.distance);
//! ```
//!
//! Measuring and committing are separate steps so a caller enforcing zoom
//! limits can discard a measurement without moving the baseline.
//!
//! This crate is `no_std`.

#![no_std]

pub mod pan;
pub mod pinch;
pub mod sample;
