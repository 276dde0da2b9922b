//! Free-move camera driven directly by input.
//!
//! Unlike [`TopDownCamera`](crate::TopDownCamera) nothing here is animated:
//! every input is applied to the pivot and distance on the frame it arrives.

use animcam_core::{FreeMoveOptions, Result};
use glam::{Quat, Vec2, Vec3};

use crate::focus::{FocusTarget, FocusTracker};
use crate::input::{MoveActivation, RigInput};
use crate::pose::CameraPose;

/// Look-axis scale applied while panning.
const PAN_SCALE: f32 = 3.0;

/// Fly-around camera with a home target.
#[derive(Debug)]
pub struct FreeMoveCamera {
    options: FreeMoveOptions,
    default_rotation: Quat,
    pose: CameraPose,
    pivot: Vec3,
    distance: f32,
    home: Option<FocusTarget>,
    move_activation: MoveActivation,
    focus: FocusTracker,
}

impl FreeMoveCamera {
    /// Creates a camera focused on the world origin.
    pub fn new(options: FreeMoveOptions) -> Result<Self> {
        options.validate()?;

        let default_rotation = CameraPose::rotation_from_degrees(options.default_rotation);
        let mut camera = Self {
            default_rotation,
            pose: CameraPose {
                position: Vec3::ZERO,
                rotation: default_rotation,
            },
            pivot: Vec3::ZERO,
            distance: options.default_distance,
            home: None,
            move_activation: MoveActivation::default(),
            focus: FocusTracker::default(),
            options,
        };

        camera.set_home(None, true);
        Ok(camera)
    }

    /// Returns the options the camera was built with.
    pub fn options(&self) -> &FreeMoveOptions {
        &self.options
    }

    /// Returns the current camera pose.
    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    /// Returns the point the camera orbits and looks at.
    pub fn pivot(&self) -> Vec3 {
        self.pivot
    }

    /// Returns the distance between the camera and its pivot.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Returns the home target, `None` meaning the world origin.
    pub fn home(&self) -> Option<FocusTarget> {
        self.home
    }

    /// Sets whether movement needs the move button.
    pub fn set_move_activation(&mut self, activation: MoveActivation) {
        self.move_activation = activation;
    }

    /// Applies this frame's input.
    pub fn update(&mut self, dt: f32, input: &RigInput) {
        if input.zoom != 0.0 {
            self.zoom(input.zoom);
        }

        if input.pan_held {
            let v = input.look_axis * dt * PAN_SCALE;
            self.pivot += self.pose.right() * -v.x + self.pose.up() * -v.y;

            self.update_position();
            return;
        }

        if input.rotate_held {
            let r = input.look_axis * dt * self.options.rotate_speed;
            self.pose.rotate_world_yaw(r.x);
            self.pose.rotate_local_pitch(-r.y);

            self.update_position();
        }

        if input.move_active(self.move_activation) {
            // Steering while moving turns the camera in place.
            if input.look_axis != Vec2::ZERO {
                let r = input.look_axis * dt * self.options.rotate_speed;
                self.pose.rotate_world_yaw(r.x);
                self.pose.rotate_local_pitch(-r.y);
                self.pivot = self.pose.position + self.pose.forward() * self.distance;
            }

            let factor = if input.faster_held {
                self.options.move_faster_factor
            } else {
                1.0
            };
            let v = input.move_axis * dt * self.options.move_speed * factor;
            self.pivot += self.pose.right() * v.x + self.pose.forward() * v.y;

            self.update_position();
        }
    }

    /// Zooms in (`direction > 0`) or out (`direction < 0`) by one step.
    ///
    /// Once the camera sits on its pivot, zooming in pushes the pivot
    /// forward instead.
    pub fn zoom(&mut self, direction: f32) {
        let step = self.options.zoom_step;
        if direction > 0.0 {
            if self.distance > 0.0 {
                self.distance -= step;
            } else {
                self.pivot += self.pose.forward() * step;
            }
            self.update_position();
        } else if direction < 0.0 {
            self.distance += step;
            self.update_position();
        }
    }

    /// Sets the home target and optionally focuses it right away.
    pub fn set_home(&mut self, target: Option<FocusTarget>, focus_now: bool) {
        self.home = target;
        if focus_now {
            self.focus_on(target);
        }
    }

    /// Focuses the home target.
    pub fn focus_home(&mut self) {
        self.focus_on(self.home);
    }

    /// Resets the rotation and centers on `target`, or the world origin.
    ///
    /// Focusing the same target again toggles between the default and the
    /// far distance.
    pub fn focus_on(&mut self, target: Option<FocusTarget>) {
        self.pose.rotation = self.default_rotation;
        self.pivot = FocusTracker::position_of(target.as_ref());
        self.distance = self.focus.distance_for(
            target.as_ref(),
            self.distance,
            self.options.default_distance,
            self.options.far_focus_factor,
        );
        log::debug!(
            "free-move camera focus at {} distance {}",
            self.pivot,
            self.distance
        );

        self.update_position();
    }

    fn update_position(&mut self) {
        self.pose.orbit(self.pivot, self.distance);
    }
}
