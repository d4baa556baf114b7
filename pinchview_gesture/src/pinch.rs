// Copyright 2026 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch state helper: derive a midpoint and an incremental scale factor from
//! two-finger position samples.
//!
//! ## Usage
//!
//! 1) When the second finger touches down, call [`PinchState::begin`] with
//!    both positions to record the baseline inter-finger distance.
//! 2) On each two-finger move sample, call [`PinchState::measure`] to obtain
//!    a [`PinchSample`]: the finger midpoint, the current distance, and the
//!    scale ratio relative to the baseline.
//! 3) If the caller accepts the sample, call [`PinchState::commit`] with the
//!    measured distance to advance the baseline. Rejected samples (for
//!    example, a zoom already at its limit) leave the baseline untouched.
//! 4) Call [`PinchState::end`] when the gesture ends.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use pinchview_gesture::pinch::PinchState;
//!
//! let mut pinch = PinchState::default();
//! pinch.begin(Point::new(40.0, 50.0), Point::new(60.0, 50.0));
//!
//! let sample = pinch
//!     .measure(Point::new(30.0, 50.0), Point::new(70.0, 50.0))
//!     .unwrap();
//! assert_eq!(sample.ratio, 2.0);
//! assert!(sample.is_spreading());
//! pinch.commit(sample.distance);
//! ```

use kurbo::Point;

/// Inter-finger distances at or below this are treated as degenerate.
///
/// Guards the ratio division: two coincident fingers must not turn into an
/// infinite or zero scale factor.
const MIN_FINGER_DISTANCE: f64 = 1.0e-9;

/// Measurement taken from one two-finger move sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchSample {
    /// Midpoint of the two fingers, the anchor point for zoom transforms.
    pub center: Point,
    /// Euclidean distance between the two fingers.
    pub distance: f64,
    /// Scale factor of this sample relative to the committed baseline.
    pub ratio: f64,
}

impl PinchSample {
    /// Returns `true` when the fingers moved apart since the baseline.
    pub fn is_spreading(&self) -> bool {
        self.ratio > 1.0
    }
}

/// Tracks the committed inter-finger distance across a two-finger gesture.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinchState {
    last_distance: Option<f64>,
}

impl PinchState {
    /// Records the baseline distance when the second finger touches down.
    ///
    /// Coincident fingers leave the baseline unset; measuring then returns
    /// `None` until a usable baseline is recorded.
    pub fn begin(&mut self, a: Point, b: Point) {
        let distance = a.distance(b);
        self.last_distance = (distance > MIN_FINGER_DISTANCE).then_some(distance);
    }

    /// Measures a move sample against the baseline without advancing it.
    ///
    /// Returns `None` when no baseline is recorded or the current distance is
    /// degenerate; such samples are skipped entirely. Measuring and
    /// committing are split so the caller can discard a measurement (a zoom
    /// at its limit, say) without moving the baseline.
    pub fn measure(&self, a: Point, b: Point) -> Option<PinchSample> {
        let last = self.last_distance?;
        let distance = a.distance(b);
        if distance <= MIN_FINGER_DISTANCE {
            return None;
        }
        Some(PinchSample {
            center: a.midpoint(b),
            distance,
            ratio: distance / last,
        })
    }

    /// Advances the baseline to a measured distance.
    ///
    /// Degenerate distances are ignored; the previous baseline stays.
    pub fn commit(&mut self, distance: f64) {
        if distance > MIN_FINGER_DISTANCE {
            self.last_distance = Some(distance);
        }
    }

    /// Forgets the baseline, ending the pinch.
    pub fn end(&mut self) {
        self.last_distance = None;
    }

    /// Returns `true` while a baseline distance is recorded.
    pub fn is_pinching(&self) -> bool {
        self.last_distance.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    #[test]
    fn measure_without_begin_returns_none() {
        let pinch = PinchState::default();
        let sample = pinch.measure(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        assert!(sample.is_none());
        assert!(!pinch.is_pinching());
    }

    #[test]
    fn begin_records_baseline_distance() {
        let mut pinch = PinchState::default();
        pinch.begin(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!(pinch.is_pinching());

        // Same distance: ratio 1.
        let sample = pinch
            .measure(Point::new(0.0, 50.0), Point::new(100.0, 50.0))
            .unwrap();
        assert_eq!(sample.ratio, 1.0);
        assert!(!sample.is_spreading());
    }

    #[test]
    fn spreading_fingers_produce_ratio_above_one() {
        let mut pinch = PinchState::default();
        pinch.begin(Point::new(40.0, 50.0), Point::new(60.0, 50.0));

        let sample = pinch
            .measure(Point::new(30.0, 50.0), Point::new(70.0, 50.0))
            .unwrap();
        assert_eq!(sample.distance, 40.0);
        assert_eq!(sample.ratio, 2.0);
        assert_eq!(sample.center, Point::new(50.0, 50.0));
        assert!(sample.is_spreading());
    }

    #[test]
    fn closing_fingers_produce_ratio_below_one() {
        let mut pinch = PinchState::default();
        pinch.begin(Point::new(0.0, 0.0), Point::new(80.0, 0.0));

        let sample = pinch
            .measure(Point::new(20.0, 0.0), Point::new(60.0, 0.0))
            .unwrap();
        assert_eq!(sample.ratio, 0.5);
        assert!(!sample.is_spreading());
    }

    #[test]
    fn diagonal_distance_is_euclidean() {
        let mut pinch = PinchState::default();
        pinch.begin(Point::new(0.0, 0.0), Point::new(3.0, 4.0));

        let sample = pinch
            .measure(Point::new(0.0, 0.0), Point::new(6.0, 8.0))
            .unwrap();
        assert!(approx_eq(sample.distance, 10.0, 1e-12));
        assert!(approx_eq(sample.ratio, 2.0, 1e-12));
    }

    #[test]
    fn measure_does_not_advance_baseline() {
        let mut pinch = PinchState::default();
        pinch.begin(Point::new(0.0, 0.0), Point::new(100.0, 0.0));

        let wide = (Point::new(0.0, 0.0), Point::new(200.0, 0.0));
        let first = pinch.measure(wide.0, wide.1).unwrap();
        let second = pinch.measure(wide.0, wide.1).unwrap();

        // Without a commit both measurements compare against the same baseline.
        assert_eq!(first.ratio, 2.0);
        assert_eq!(second.ratio, 2.0);
    }

    #[test]
    fn commit_advances_baseline() {
        let mut pinch = PinchState::default();
        pinch.begin(Point::new(0.0, 0.0), Point::new(100.0, 0.0));

        let sample = pinch
            .measure(Point::new(0.0, 0.0), Point::new(200.0, 0.0))
            .unwrap();
        pinch.commit(sample.distance);

        let next = pinch
            .measure(Point::new(0.0, 0.0), Point::new(200.0, 0.0))
            .unwrap();
        assert_eq!(next.ratio, 1.0);
    }

    #[test]
    fn coincident_fingers_at_begin_leave_baseline_unset() {
        let mut pinch = PinchState::default();
        let p = Point::new(10.0, 10.0);
        pinch.begin(p, p);

        assert!(!pinch.is_pinching());
        assert!(pinch.measure(Point::new(0.0, 0.0), Point::new(10.0, 0.0)).is_none());
    }

    #[test]
    fn coincident_fingers_in_measure_are_skipped() {
        let mut pinch = PinchState::default();
        pinch.begin(Point::new(0.0, 0.0), Point::new(100.0, 0.0));

        let p = Point::new(10.0, 10.0);
        assert!(pinch.measure(p, p).is_none());
        // The baseline survives the degenerate sample.
        assert!(pinch.is_pinching());
    }

    #[test]
    fn commit_ignores_degenerate_distance() {
        let mut pinch = PinchState::default();
        pinch.begin(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        pinch.commit(0.0);

        let sample = pinch
            .measure(Point::new(0.0, 0.0), Point::new(100.0, 0.0))
            .unwrap();
        assert_eq!(sample.ratio, 1.0);
    }

    #[test]
    fn end_resets_pinch_state() {
        let mut pinch = PinchState::default();
        pinch.begin(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        pinch.end();

        assert!(!pinch.is_pinching());
        assert!(pinch.measure(Point::new(0.0, 0.0), Point::new(50.0, 0.0)).is_none());
    }
}
