// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, Mul, Neg, Sub};

use bytemuck::{Pod, Zeroable};

use crate::scalar::{deg_to_rad, fast_rsqrt, fast_sqrt};

/// 2D vector used for screen-space offsets and planar directions.
///
/// * Points and directions share the type; unit length is a transient state
///   of a value, not a separate type.
/// * `normalize` on the zero vector is a precondition violation and yields
///   unspecified (possibly non-finite) components.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f32; 2]", into = "[f32; 2]")
)]
pub struct Vec2 {
    data: [f32; 2],
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { data: [x, y] }
    }

    /// X component.
    pub const fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f32 {
        self.data[1]
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 2] {
        self.data
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(self.x() * scalar, self.y() * scalar)
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.y() * other.y()
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Magnitude via [`fast_sqrt`].
    pub fn length(&self) -> f32 {
        fast_sqrt(self.length_squared())
    }

    /// Scales the vector to unit length via [`fast_rsqrt`].
    pub fn normalize(&self) -> Self {
        self.scale(fast_rsqrt(self.length_squared()))
    }

    /// Rotates counter-clockwise by `angle_deg` degrees.
    ///
    /// Both output components are computed from the original input.
    ///
    /// ```
    /// use lumen_math::Vec2;
    /// let r = Vec2::UNIT_X.rotate(90.0);
    /// assert!(r.x().abs() < 1e-6 && (r.y() - 1.0).abs() < 1e-6);
    /// ```
    pub fn rotate(&self, angle_deg: f32) -> Self {
        let (s, c) = deg_to_rad(angle_deg).sin_cos();
        let [x, y] = self.data;
        Self::new(x * c - y * s, x * s + y * c)
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Self { data: value }
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(value: Vec2) -> Self {
        value.data
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x() + rhs.x(), self.y() + rhs.y())
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x() - rhs.x(), self.y() - rhs.y())
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}
