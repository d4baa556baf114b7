// Copyright 2026 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer sample model: the event kinds and pointer positions the gesture
//! classifier consumes.
//!
//! A [`PointerSample`] is one already-decoded entry of the touch stream: an
//! event kind plus the positions of all currently active pointers. Samples
//! borrow their position list, so producers can hand over whatever storage
//! their event source uses.
//!
//! Nothing here validates that the point count matches the phase; malformed
//! combinations are representable and consumers are expected to skip them
//! rather than fail.

use kurbo::Point;

/// Kind of a pointer-event sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// A second finger touched down while one was already active.
    SecondaryDown,
    /// One or more active fingers moved.
    Moved,
    /// One of two active fingers lifted.
    SecondaryUp,
    /// Any other event kind; ignored by gesture processing.
    Other,
}

/// One entry of the pointer-event stream.
#[derive(Clone, Copy, Debug)]
pub struct PointerSample<'a> {
    /// Kind of this sample.
    pub phase: PointerPhase,
    /// Positions of the currently active pointers (one or two).
    pub points: &'a [Point],
}

impl<'a> PointerSample<'a> {
    /// Creates a sample from an event kind and the active pointer positions.
    pub fn new(phase: PointerPhase, points: &'a [Point]) -> Self {
        Self { phase, points }
    }

    /// The pointer position, if exactly one pointer is active.
    pub fn single(&self) -> Option<Point> {
        match self.points {
            [p] => Some(*p),
            _ => None,
        }
    }

    /// The two pointer positions, if exactly two pointers are active.
    pub fn pair(&self) -> Option<(Point, Point)> {
        match self.points {
            [a, b] => Some((*a, *b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_requires_exactly_one_point() {
        let one = [Point::new(1.0, 2.0)];
        let two = [Point::new(1.0, 2.0), Point::new(3.0, 4.0)];

        let sample = PointerSample::new(PointerPhase::Moved, &one);
        assert_eq!(sample.single(), Some(Point::new(1.0, 2.0)));
        assert_eq!(sample.pair(), None);

        let sample = PointerSample::new(PointerPhase::Moved, &two);
        assert_eq!(sample.single(), None);
    }

    #[test]
    fn pair_requires_exactly_two_points() {
        let two = [Point::new(1.0, 2.0), Point::new(3.0, 4.0)];
        let sample = PointerSample::new(PointerPhase::SecondaryDown, &two);

        assert_eq!(
            sample.pair(),
            Some((Point::new(1.0, 2.0), Point::new(3.0, 4.0)))
        );
        assert_eq!(sample.single(), None);
    }

    #[test]
    fn empty_point_list_matches_neither_accessor() {
        let sample = PointerSample::new(PointerPhase::Other, &[]);
        assert_eq!(sample.single(), None);
        assert_eq!(sample.pair(), None);
    }
}
