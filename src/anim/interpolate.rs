use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Values that can be blended between two endpoints.
///
/// `t` is eased progress: usually in `[0, 1]`, but overshooting curves may
/// push it slightly outside, so implementations must extrapolate sensibly.
pub trait Interpolate {
    fn interpolate(&self, end: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, end: &Self, t: f32) -> Self {
        lerp(*self, *end, t)
    }
}

impl Interpolate for Vec2 {
    fn interpolate(&self, end: &Self, t: f32) -> Self {
        *self + (*end - *self) * t
    }
}

impl Interpolate for Vec3 {
    fn interpolate(&self, end: &Self, t: f32) -> Self {
        *self + (*end - *self) * t
    }
}

impl Interpolate for Quat {
    /// Spherical interpolation along the shorter of the two arcs.
    fn interpolate(&self, end: &Self, t: f32) -> Self {
        // glam flips `end` when the dot product is negative, which keeps the
        // path on the short arc.
        self.normalize().slerp(end.normalize(), t).normalize()
    }
}

/// An angle in degrees that interpolates along the shortest arc.
///
/// Interpolated values are wrapped into `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Degrees(pub f32);

impl Degrees {
    /// Signed difference to `other` in `[-180, 180)`.
    pub fn delta_to(self, other: Degrees) -> f32 {
        (other.0 - self.0 + 180.0).rem_euclid(360.0) - 180.0
    }

    pub fn wrapped(self) -> Degrees {
        Degrees(self.0.rem_euclid(360.0))
    }

    pub fn to_radians(self) -> f32 {
        self.0.to_radians()
    }
}

impl Interpolate for Degrees {
    fn interpolate(&self, end: &Self, t: f32) -> Self {
        Degrees(self.0 + self.delta_to(*end) * t).wrapped()
    }
}
