//! Camera pose and orientation helpers.
//!
//! Conventions: right-handed, +Y up, the camera looks along its local -Z.
//! Angles passed to the helpers are in degrees; positive yaw turns right
//! and positive pitch tilts the view down.

use glam::{EulerRot, Mat4, Quat, Vec3};

/// Position and orientation of a camera in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Camera position in world space.
    pub position: Vec3,
    /// Camera orientation.
    pub rotation: Quat,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl CameraPose {
    /// Builds a rotation from Euler degrees.
    ///
    /// `tilt` pitches the view down, `yaw` turns it right and `roll` spins it
    /// clockwise. Applied roll first, then tilt, then yaw.
    #[must_use]
    pub fn rotation_from_euler_degrees(tilt: f32, yaw: f32, roll: f32) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            -yaw.to_radians(),
            -tilt.to_radians(),
            -roll.to_radians(),
        )
    }

    /// Same as [`rotation_from_euler_degrees`](Self::rotation_from_euler_degrees)
    /// with the angles packed as `(tilt, yaw, roll)`.
    #[must_use]
    pub fn rotation_from_degrees(degrees: Vec3) -> Quat {
        Self::rotation_from_euler_degrees(degrees.x, degrees.y, degrees.z)
    }

    /// Returns the camera's forward direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Returns the camera's right direction.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Returns the camera's up direction.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Returns the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), self.up())
    }

    /// Returns how far the view points below the horizon, in degrees.
    #[must_use]
    pub fn tilt_degrees(&self) -> f32 {
        (-self.forward().y).clamp(-1.0, 1.0).asin().to_degrees()
    }

    /// Turns the camera around the world up axis.
    pub fn rotate_world_yaw(&mut self, degrees: f32) {
        self.rotation = (Quat::from_rotation_y(-degrees.to_radians()) * self.rotation).normalize();
    }

    /// Pitches the camera around its own right axis.
    pub fn rotate_local_pitch(&mut self, degrees: f32) {
        self.rotation = (self.rotation * Quat::from_rotation_x(-degrees.to_radians())).normalize();
    }

    /// Places the camera `distance` behind `pivot` along its view direction.
    pub fn orbit(&mut self, pivot: Vec3, distance: f32) {
        self.position = pivot + self.rotation * Vec3::new(0.0, 0.0, distance);
    }
}
