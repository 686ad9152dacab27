// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Perspective projection parameters, validated before they reach
//! [`Mat4::perspective`].

use tracing::warn;

use crate::{Mat4, MathError};

/// Vertical field of view, aspect ratio, and clip distances for a
/// perspective camera.
///
/// Defaults match the tracer's window: 70° over a 16:9 viewport with clip
/// planes at `0.1` and `100.0`. With the `serde` feature, missing fields in a
/// config document fall back to these defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    /// Viewport width divided by height.
    pub aspect_ratio: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_deg: 70.0,
            aspect_ratio: 16.0 / 9.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Projection {
    /// Creates projection parameters without validation.
    pub const fn new(fov_deg: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        Self {
            fov_deg,
            aspect_ratio,
            near,
            far,
        }
    }

    /// Creates projection parameters, rejecting values that would produce a
    /// degenerate matrix.
    ///
    /// # Errors
    /// Returns the first failing check from [`Projection::validate`].
    pub fn try_new(fov_deg: f32, aspect_ratio: f32, near: f32, far: f32) -> Result<Self, MathError> {
        let projection = Self::new(fov_deg, aspect_ratio, near, far);
        projection.validate()?;
        Ok(projection)
    }

    /// Derives the aspect ratio from a viewport size in pixels.
    ///
    /// # Errors
    /// A zero-sized viewport yields a non-finite or zero aspect ratio and is
    /// rejected like any other invalid parameter.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_viewport(
        fov_deg: f32,
        width: u32,
        height: u32,
        near: f32,
        far: f32,
    ) -> Result<Self, MathError> {
        Self::try_new(fov_deg, width as f32 / height as f32, near, far)
    }

    /// Returns a copy with a new aspect ratio, e.g. after a window resize.
    pub fn with_aspect_ratio(self, aspect_ratio: f32) -> Self {
        Self {
            aspect_ratio,
            ..self
        }
    }

    /// Checks finiteness, `0 < fov < 180`, `aspect > 0`, and `0 < near < far`.
    ///
    /// # Errors
    /// [`MathError::NonFinite`], [`MathError::InvalidFieldOfView`],
    /// [`MathError::InvalidAspectRatio`] or [`MathError::InvalidDepthRange`],
    /// checked in that order. Rejections are logged at `warn`.
    pub fn validate(&self) -> Result<(), MathError> {
        let result = self.check();
        if let Err(err) = &result {
            warn!(projection = ?self, %err, "rejected projection parameters");
        }
        result
    }

    fn check(&self) -> Result<(), MathError> {
        for (name, value) in [
            ("fov_deg", self.fov_deg),
            ("aspect_ratio", self.aspect_ratio),
            ("near", self.near),
            ("far", self.far),
        ] {
            if !value.is_finite() {
                return Err(MathError::NonFinite(name));
            }
        }
        if self.fov_deg <= 0.0 || self.fov_deg >= 180.0 {
            return Err(MathError::InvalidFieldOfView(self.fov_deg));
        }
        if self.aspect_ratio <= 0.0 {
            return Err(MathError::InvalidAspectRatio(self.aspect_ratio));
        }
        if self.near <= 0.0 || self.near >= self.far {
            return Err(MathError::InvalidDepthRange {
                near: self.near,
                far: self.far,
            });
        }
        Ok(())
    }

    /// Builds the projection matrix without validation.
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::perspective(self.fov_deg, self.aspect_ratio, self.near, self.far)
    }

    /// Validates, then builds the projection matrix.
    ///
    /// # Errors
    /// Same as [`Projection::validate`].
    pub fn to_mat4_checked(&self) -> Result<Mat4, MathError> {
        self.validate()?;
        Ok(self.to_mat4())
    }
}
