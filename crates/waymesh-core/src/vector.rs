//! The [`Vector3`] geometric primitive.

use std::fmt;
use std::ops::{Add, Sub};

/// A point or displacement in the level's 3D coordinate space.
///
/// Stored as `f32` to match the precision of the source data. Value
/// semantics throughout: all operations return new vectors and nothing
/// here carries identity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    /// East-west axis.
    pub x: f32,
    /// North-south axis.
    pub y: f32,
    /// Height axis.
    pub z: f32,
}

impl Vector3 {
    /// Construct a vector from its components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Squared Euclidean length.
    ///
    /// Cheaper than the true length and order-preserving, so distance
    /// comparisons use this form.
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Squared Euclidean distance to another point.
    pub fn distance_squared(&self, other: Vector3) -> f32 {
        (*self - other).length_squared()
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Linear interpolation between two scalars.
///
/// `t` is clamped to `[0, 1]`, so callers interpolating across a surface
/// never extrapolate past its edges.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sub_is_componentwise() {
        let a = Vector3::new(5.0, 7.0, 9.0);
        let b = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(a - b, Vector3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn length_squared_of_axis_vectors() {
        assert_eq!(Vector3::new(3.0, 0.0, 0.0).length_squared(), 9.0);
        assert_eq!(Vector3::new(0.0, -4.0, 0.0).length_squared(), 16.0);
        assert_eq!(Vector3::new(1.0, 2.0, 2.0).length_squared(), 9.0);
    }

    #[test]
    fn lerp_endpoints_and_clamp() {
        assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(2.0, 10.0, 2.0), 10.0);
        assert_eq!(lerp(2.0, 10.0, -1.0), 2.0);
        assert_eq!(lerp(2.0, 10.0, 0.5), 6.0);
    }

    proptest! {
        #[test]
        fn distance_squared_is_symmetric(
            ax in -1e3f32..1e3, ay in -1e3f32..1e3, az in -1e3f32..1e3,
            bx in -1e3f32..1e3, by in -1e3f32..1e3, bz in -1e3f32..1e3,
        ) {
            let a = Vector3::new(ax, ay, az);
            let b = Vector3::new(bx, by, bz);
            prop_assert_eq!(a.distance_squared(b), b.distance_squared(a));
        }

        #[test]
        fn lerp_stays_within_endpoints(a in -1e3f32..1e3, b in -1e3f32..1e3, t in -2.0f32..2.0) {
            let lo = a.min(b);
            let hi = a.max(b);
            let v = lerp(a, b, t);
            prop_assert!(v >= lo && v <= hi);
        }
    }
}
