//! Blend functions for the value types that can be animated.
//!
//! Each implementation only decides how two endpoints are mixed; all
//! timing and settling rules live in [`AnimatedValue`](crate::AnimatedValue).

use glam::{Quat, Vec3};

/// A value type that supports a pairwise blend.
///
/// `interpolate(start, end, 0.0)` must give back `start` and
/// `interpolate(start, end, 1.0)` must give back `end`.
pub trait Interpolate: Copy + PartialEq {
    /// Blends `start` toward `end` by the normalized fraction `t`.
    fn interpolate(start: Self, end: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    #[inline]
    fn interpolate(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Interpolate for Vec3 {
    #[inline]
    fn interpolate(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

impl Interpolate for Quat {
    /// Shortest-arc spherical blend.
    ///
    /// The endpoints are returned untouched so a settled rotation is not
    /// perturbed by the slerp's trigonometry.
    #[inline]
    fn interpolate(start: Self, end: Self, t: f32) -> Self {
        if t <= 0.0 {
            start
        } else if t >= 1.0 {
            end
        } else {
            start.slerp(end, t).normalize()
        }
    }
}
