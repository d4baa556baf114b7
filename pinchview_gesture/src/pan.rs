// Copyright 2026 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan state helper: compute movement deltas from one-finger position samples.
//!
//! ## Usage
//!
//! 1) On each one-finger move sample, call [`PanState::update`] to get the
//!    movement delta since the previous sample.
//! 2) The first sample after a gap returns `None` and only seeds the tracked
//!    position, so a finger landing somewhere new never produces a jump.
//! 3) Call [`PanState::end`] when the gesture segment ends (for example when
//!    a second finger lifts) to force re-seeding on the next sample.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use pinchview_gesture::pan::PanState;
//!
//! let mut pan = PanState::default();
//!
//! // Seed at (10, 20); no delta yet.
//! assert_eq!(pan.update(Point::new(10.0, 20.0)), None);
//! assert!(pan.is_tracking());
//!
//! // Move to (15, 25) - delta is (5, 5).
//! let delta = pan.update(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(delta.x, 5.0);
//! assert_eq!(delta.y, 5.0);
//! ```

use kurbo::{Point, Vec2};

/// Tracks the last one-finger position between move samples.
///
/// There is no explicit start operation: a one-finger pan has no press phase
/// visible to this tracker, so tracking begins implicitly with the first
/// sample fed to [`PanState::update`].
#[derive(Debug, Clone, Default, Copy)]
pub struct PanState {
    last_pos: Option<Point>,
}

impl PanState {
    /// Feeds a one-finger move sample, returning the delta since the last one.
    ///
    /// Returns `None` for the first sample after a gap; that sample only
    /// seeds the tracked position. The raw sample position is always
    /// recorded, even when the caller goes on to reject the delta.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let delta = self.last_pos.map(|last| pos - last);
        self.last_pos = Some(pos);
        delta
    }

    /// Forgets the tracked position, ending the current pan segment.
    ///
    /// The next call to [`PanState::update`] re-seeds instead of measuring
    /// against stale coordinates.
    pub fn end(&mut self) {
        self.last_pos = None;
    }

    /// Returns `true` while a position is being tracked.
    pub fn is_tracking(&self) -> bool {
        self.last_pos.is_some()
    }

    /// The most recently recorded position, if any.
    pub fn last_pos(&self) -> Option<Point> {
        self.last_pos
    }
}
