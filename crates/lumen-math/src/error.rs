// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Validation failures for projection and camera configuration.
///
/// The numeric core never returns this; only the checked configuration paths
/// ([`crate::Projection::try_new`], [`crate::CameraSettings::validate`], ...)
/// do.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// Field of view must lie strictly between 0 and 180 degrees.
    #[error("field of view must be in (0, 180) degrees, got {0}")]
    InvalidFieldOfView(f32),
    /// Aspect ratio must be positive.
    #[error("aspect ratio must be positive, got {0}")]
    InvalidAspectRatio(f32),
    /// Depth range must satisfy `0 < near < far`.
    #[error("depth range must satisfy 0 < near < far, got near={near} far={far}")]
    InvalidDepthRange {
        /// Near clip distance.
        near: f32,
        /// Far clip distance.
        far: f32,
    },
    /// A parameter was NaN or infinite.
    #[error("{0} must be finite")]
    NonFinite(&'static str),
    /// A camera setting was out of range.
    #[error("invalid camera setting {name}: {value}")]
    InvalidSetting {
        /// Setting name.
        name: &'static str,
        /// Offending value.
        value: f32,
    },
}
