// Copyright 2026 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Vec2};

/// Affine parameters handed to the external compositor.
///
/// The scale is always uniform; [`Transform::scale_x`] and
/// [`Transform::scale_y`] exist for callers whose drawing API wants the axes
/// spelled out separately.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Uniform scale factor applied to the image's intrinsic size.
    pub scale: f64,
    /// Translation of the image's top-left corner in view coordinates.
    pub translate: Vec2,
}

impl Transform {
    /// The identity transform: unit scale, zero translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate: Vec2::ZERO,
    };

    /// Creates a transform from a uniform scale and a translation.
    #[must_use]
    pub fn new(scale: f64, translate: Vec2) -> Self {
        Self { scale, translate }
    }

    /// The horizontal scale factor (identical to the vertical one).
    #[must_use]
    pub fn scale_x(&self) -> f64 {
        self.scale
    }

    /// The vertical scale factor (identical to the horizontal one).
    #[must_use]
    pub fn scale_y(&self) -> f64 {
        self.scale
    }

    /// Composes the equivalent affine map: scale about the origin, then
    /// translate.
    #[must_use]
    pub fn affine(&self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Transform> for Affine {
    fn from(transform: Transform) -> Self {
        transform.affine()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::*;

    #[test]
    fn identity_is_default() {
        assert_eq!(Transform::default(), Transform::IDENTITY);
        assert_eq!(Transform::IDENTITY.affine(), Affine::IDENTITY);
    }

    #[test]
    fn affine_scales_then_translates() {
        let transform = Transform::new(2.0, Vec2::new(10.0, -20.0));
        let mapped = transform.affine() * Point::new(3.0, 5.0);

        // Image-space (3, 5) lands at (3 * 2 + 10, 5 * 2 - 20).
        assert_eq!(mapped, Point::new(16.0, -10.0));
    }

    #[test]
    fn axis_scales_agree() {
        let transform = Transform::new(0.5, Vec2::ZERO);
        assert_eq!(transform.scale_x(), transform.scale_y());
    }

    #[test]
    fn into_affine_matches_affine_method() {
        let transform = Transform::new(3.0, Vec2::new(1.0, 2.0));
        assert_eq!(Affine::from(transform), transform.affine());
    }
}
