// Copyright 2026 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Which arm of the transform state machine the next frame renders.
///
/// The naming follows the gesture, not the apparent image size: a
/// [`Phase::ZoomOut`] frame is produced by fingers spreading apart (the image
/// growing on screen), [`Phase::ZoomIn`] by fingers closing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    /// An image is bound but not yet fitted; the next frame computes the
    /// fit-to-view ratio and centers the image.
    ///
    /// This is the start state. It is re-entered only by binding an image,
    /// never by a gesture.
    #[default]
    Init,
    /// A two-finger move with the fingers spreading apart is pending.
    ZoomOut,
    /// A two-finger move with the fingers closing is pending.
    ZoomIn,
    /// A one-finger pan delta is pending.
    Move,
    /// No gesture is pending; frames reapply the stored transform unchanged.
    Settled,
}

impl Phase {
    /// Returns `true` for the two zooming phases.
    pub fn is_zooming(self) -> bool {
        matches!(self, Self::ZoomOut | Self::ZoomIn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_phase_is_init() {
        assert_eq!(Phase::default(), Phase::Init);
    }

    #[test]
    fn only_zoom_phases_are_zooming() {
        assert!(Phase::ZoomOut.is_zooming());
        assert!(Phase::ZoomIn.is_zooming());
        assert!(!Phase::Init.is_zooming());
        assert!(!Phase::Move.is_zooming());
        assert!(!Phase::Settled.is_zooming());
    }
}
