// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::trace;

use crate::scalar::{clamp, deg_to_rad};
use crate::{Mat4, MathError, Vec3};

const HOME_EYE: Vec3 = Vec3::new(0.0, 0.0, 1.0);
const HOME_FRONT: Vec3 = Vec3::new(0.0, 0.0, -1.0);
const HOME_YAW_DEG: f32 = -90.0;

/// Direction of a keyboard-style camera move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// Along the look direction.
    Forward,
    /// Against the look direction.
    Backward,
    /// Against the right vector `front × up`.
    Left,
    /// Along the right vector `front × up`.
    Right,
}

/// Tunables for [`FlyCamera`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CameraSettings {
    /// Movement speed in world units per second.
    pub speed: f32,
    /// Degrees of yaw/pitch per unit of pointer offset.
    pub sensitivity: f32,
    /// Pitch is clamped to `±pitch_limit_deg` to keep `front` off the up axis.
    pub pitch_limit_deg: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            speed: 5.0,
            sensitivity: 0.1,
            pitch_limit_deg: 89.0,
        }
    }
}

impl CameraSettings {
    /// Checks that every setting is finite and in range.
    ///
    /// # Errors
    /// [`MathError::InvalidSetting`] naming the first bad field.
    pub fn validate(&self) -> Result<(), MathError> {
        let bad = |name, value: f32| MathError::InvalidSetting { name, value };
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(bad("speed", self.speed));
        }
        if !self.sensitivity.is_finite() || self.sensitivity < 0.0 {
            return Err(bad("sensitivity", self.sensitivity));
        }
        // 90° would make front parallel to up and break look_at.
        if !(self.pitch_limit_deg > 0.0 && self.pitch_limit_deg < 90.0) {
            return Err(bad("pitch_limit_deg", self.pitch_limit_deg));
        }
        Ok(())
    }
}

/// First-person camera driven by movement keys and pointer deltas.
///
/// The camera is a plain value owned by the render loop; it carries no
/// global state. Each frame the loop applies input, then hands
/// [`FlyCamera::view_matrix`] to the renderer.
///
/// ```
/// use lumen_math::{FlyCamera, Movement};
/// let mut cam = FlyCamera::default();
/// cam.translate(Movement::Forward, 0.2);
/// assert!((cam.eye().z() - 0.0).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyCamera {
    eye: Vec3,
    front: Vec3,
    up: Vec3,
    yaw_deg: f32,
    pitch_deg: f32,
    settings: CameraSettings,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(CameraSettings::default())
    }
}

impl FlyCamera {
    /// Creates a camera at `(0, 0, 1)` looking down `-z` with `+y` up.
    ///
    /// `settings` are taken as-is; use [`FlyCamera::try_new`] for settings
    /// read from user configuration.
    pub fn new(settings: CameraSettings) -> Self {
        Self {
            eye: HOME_EYE,
            front: HOME_FRONT,
            up: Vec3::UNIT_Y,
            yaw_deg: HOME_YAW_DEG,
            pitch_deg: 0.0,
            settings,
        }
    }

    /// Creates a camera after checking `settings`.
    ///
    /// # Errors
    /// Whatever [`CameraSettings::validate`] rejects.
    pub fn try_new(settings: CameraSettings) -> Result<Self, MathError> {
        settings.validate()?;
        Ok(Self::new(settings))
    }

    /// Eye position.
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Unit look direction.
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Up vector passed to [`Mat4::look_at`].
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Yaw in degrees (`-90` looks down `-z`).
    pub fn yaw_deg(&self) -> f32 {
        self.yaw_deg
    }

    /// Pitch in degrees, within `±pitch_limit_deg`.
    pub fn pitch_deg(&self) -> f32 {
        self.pitch_deg
    }

    /// Current tunables.
    pub fn settings(&self) -> CameraSettings {
        self.settings
    }

    /// Replaces the tunables, e.g. from a speed slider. Not validated.
    pub fn set_settings(&mut self, settings: CameraSettings) {
        self.settings = settings;
    }

    /// Replaces the up vector.
    pub fn set_up(&mut self, up: Vec3) {
        self.up = up;
    }

    /// Moves the eye to an explicit position without changing orientation.
    pub fn set_eye(&mut self, eye: Vec3) {
        self.eye = eye;
    }

    /// Returns to the home pose; `up` and settings are kept.
    pub fn reset(&mut self) {
        self.eye = HOME_EYE;
        self.front = HOME_FRONT;
        self.yaw_deg = HOME_YAW_DEG;
        self.pitch_deg = 0.0;
        trace!("camera reset to home pose");
    }

    /// View matrix looking from `eye` along `front`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.eye, self.eye + self.front, self.up)
    }

    /// Moves `speed * dt` world units in the given direction.
    pub fn translate(&mut self, movement: Movement, dt: f32) {
        let distance = self.settings.speed * dt;
        let right = || self.front.cross(&self.up).normalize() * distance;
        self.eye = match movement {
            Movement::Forward => self.eye + self.front * distance,
            Movement::Backward => self.eye - self.front * distance,
            Movement::Left => self.eye - right(),
            Movement::Right => self.eye + right(),
        };
    }

    /// Turns the camera by a pointer offset.
    ///
    /// `dx` yaws right, `dy` pitches up (callers flip screen-space y). Both
    /// are scaled by `sensitivity`; pitch is clamped, then `front` is rebuilt
    /// from yaw and pitch.
    pub fn look(&mut self, dx: f32, dy: f32) {
        let limit = self.settings.pitch_limit_deg;
        self.yaw_deg += dx * self.settings.sensitivity;
        let pitch = self.pitch_deg + dy * self.settings.sensitivity;
        self.pitch_deg = clamp(pitch, -limit, limit);
        if pitch.abs() > limit {
            trace!(requested = pitch, clamped = self.pitch_deg, "pitch clamped");
        }

        let (sy, cy) = deg_to_rad(self.yaw_deg).sin_cos();
        let (sp, cp) = deg_to_rad(self.pitch_deg).sin_cos();
        self.front = Vec3::new(cy * cp, sp, sy * cp).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq3(a: Vec3, b: [f32; 3]) {
        let got = a.to_array();
        for i in 0..3 {
            assert!((got[i] - b[i]).abs() <= 1e-4, "{got:?} vs {b:?}");
        }
    }

    #[test]
    fn strafe_moves_along_right_vector() {
        let mut cam = FlyCamera::default();
        cam.translate(Movement::Right, 1.0);
        approx_eq3(cam.eye(), [5.0, 0.0, 1.0]);
        cam.translate(Movement::Left, 2.0);
        approx_eq3(cam.eye(), [-5.0, 0.0, 1.0]);
    }

    #[test]
    fn backward_undoes_forward() {
        let mut cam = FlyCamera::default();
        cam.translate(Movement::Forward, 0.5);
        cam.translate(Movement::Backward, 0.5);
        approx_eq3(cam.eye(), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn zero_look_delta_keeps_home_direction() {
        let mut cam = FlyCamera::default();
        cam.look(0.0, 0.0);
        approx_eq3(cam.front(), [0.0, 0.0, -1.0]);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut cam = FlyCamera::default();
        cam.look(0.0, 10_000.0);
        assert_eq!(cam.pitch_deg(), 89.0);
        cam.look(0.0, -100_000.0);
        assert_eq!(cam.pitch_deg(), -89.0);
    }

    #[test]
    fn yaw_by_ninety_degrees_faces_positive_x() {
        let mut cam = FlyCamera::default();
        // 900 * 0.1 = 90 degrees: yaw goes from -90 to 0.
        cam.look(900.0, 0.0);
        approx_eq3(cam.front(), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn reset_restores_home_pose() {
        let mut cam = FlyCamera::default();
        cam.look(123.0, 45.0);
        cam.translate(Movement::Forward, 3.0);
        cam.reset();
        assert_eq!(cam.eye(), HOME_EYE);
        assert_eq!(cam.front(), HOME_FRONT);
        assert_eq!(cam.yaw_deg(), -90.0);
        assert_eq!(cam.pitch_deg(), 0.0);
    }

    #[test]
    fn try_new_rejects_negative_pitch_limit() {
        let settings = CameraSettings {
            pitch_limit_deg: -10.0,
            ..CameraSettings::default()
        };
        assert_eq!(
            FlyCamera::try_new(settings),
            Err(MathError::InvalidSetting {
                name: "pitch_limit_deg",
                value: -10.0
            })
        );
        let cam = FlyCamera::try_new(CameraSettings::default()).expect("defaults are valid");
        assert_eq!(cam, FlyCamera::default());
    }

    #[test]
    fn pitch_inside_limit_is_untouched() {
        let mut cam = FlyCamera::default();
        cam.look(0.0, 300.0);
        assert!((cam.pitch_deg() - 30.0).abs() < 1e-4);
        cam.look(0.0, 1_000.0);
        assert_eq!(cam.pitch_deg(), 89.0);
    }

    #[test]
    fn settings_validation() {
        assert_eq!(CameraSettings::default().validate(), Ok(()));
        let bad = CameraSettings {
            pitch_limit_deg: 90.0,
            ..CameraSettings::default()
        };
        assert_eq!(
            bad.validate(),
            Err(MathError::InvalidSetting {
                name: "pitch_limit_deg",
                value: 90.0
            })
        );
        let negative = CameraSettings {
            speed: -1.0,
            ..CameraSettings::default()
        };
        assert!(negative.validate().is_err());
    }
}
