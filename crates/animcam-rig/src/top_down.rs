//! Top-down camera orbiting a pivot on the ground.
//!
//! The pivot, the orbit distance and the focus rotation are animated values,
//! so focusing and zooming glide while direct input (pan, move, rotate)
//! takes effect immediately.

use std::cell::Cell;
use std::rc::Rc;

use animcam_core::{AnimFloat, AnimQuat, AnimVec3, Result, TopDownOptions};
use glam::{Quat, Vec3};

use crate::focus::{FocusTarget, FocusTracker};
use crate::input::{MoveActivation, RigInput};
use crate::pose::CameraPose;

/// Look-axis scale applied while panning.
const PAN_SCALE: f32 = 3.0;

/// Orbit camera with animated focus, zoom and follow.
#[derive(Debug)]
pub struct TopDownCamera {
    options: TopDownOptions,
    default_rotation: Quat,
    pose: CameraPose,

    pivot: AnimVec3,
    distance: AnimFloat,
    rotator: AnimQuat,
    rotation_dirty: Rc<Cell<bool>>,

    move_activation: MoveActivation,
    following: bool,
    can_unfollow: bool,
    focus: FocusTracker,
}

impl TopDownCamera {
    /// Creates a camera focused on the world origin at the default rotation.
    pub fn new(options: TopDownOptions) -> Result<Self> {
        options.validate()?;

        let default_rotation = CameraPose::rotation_from_degrees(options.default_rotation);
        let rotation_dirty = Rc::new(Cell::new(false));
        let flag = Rc::clone(&rotation_dirty);

        let mut camera = Self {
            pivot: AnimVec3::new(Vec3::ZERO, options.focus_smoothing),
            distance: AnimFloat::new(options.default_zoom, options.zoom_smoothing),
            rotator: AnimQuat::with_listener(default_rotation, options.focus_smoothing, move || {
                flag.set(true);
            }),
            rotation_dirty,
            default_rotation,
            pose: CameraPose {
                position: Vec3::ZERO,
                rotation: default_rotation,
            },
            move_activation: MoveActivation::default(),
            following: false,
            can_unfollow: false,
            focus: FocusTracker::default(),
            options,
        };

        camera.focus(None, true, true);
        Ok(camera)
    }

    /// Returns the options the camera was built with.
    pub fn options(&self) -> &TopDownOptions {
        &self.options
    }

    /// Returns the current camera pose.
    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    /// Returns the observable pivot position.
    pub fn pivot(&self) -> Vec3 {
        self.pivot.value()
    }

    /// Returns the pivot the camera is gliding toward.
    pub fn pivot_target(&self) -> Vec3 {
        self.pivot.target()
    }

    /// Returns the observable orbit distance.
    pub fn distance(&self) -> f32 {
        self.distance.value()
    }

    /// Returns the orbit distance the camera is gliding toward.
    pub fn distance_target(&self) -> f32 {
        self.distance.target()
    }

    /// Returns whether any of the pivot, distance or rotation is moving.
    pub fn is_animating(&self) -> bool {
        self.pivot.is_animating() || self.distance.is_animating() || self.rotator.is_animating()
    }

    /// Returns whether the camera tracks a followed object.
    pub fn is_following(&self) -> bool {
        self.following
    }

    /// Returns whether user input may break a follow.
    pub fn can_unfollow(&self) -> bool {
        self.can_unfollow
    }

    /// Sets whether movement needs the move button.
    pub fn set_move_activation(&mut self, activation: MoveActivation) {
        self.move_activation = activation;
    }

    /// Advances the animations and applies this frame's input.
    pub fn update(&mut self, dt: f32, input: &RigInput) {
        let mut changed = false;
        if self.pivot.update(dt) {
            changed = true;
        }
        if self.distance.update(dt) {
            changed = true;
        }
        if self.rotator.update(dt) {
            changed = true;
        }

        if self.rotation_dirty.replace(false) {
            self.pose.rotation = self.rotator.value();
        }
        if changed {
            self.update_position();
        }

        self.apply_input(dt, input);
    }

    /// Retargets the pivot onto the followed object's latest position.
    ///
    /// Call after the host has moved its objects for the frame.
    pub fn late_update(&mut self, follow_position: Vec3) {
        if self.following {
            self.pivot.set_target(follow_position);
        }
    }

    /// Steps the zoom target in (`direction > 0`) or out (`direction < 0`).
    pub fn zoom(&mut self, direction: f32, faster: bool) {
        let step = if faster {
            self.options.zoom_fast_step
        } else {
            self.options.zoom_step
        };
        let current = self.distance.target();

        if direction > 0.0 && current > self.options.min_zoom {
            self.distance
                .set_target((current - step).max(self.options.min_zoom));
        } else if direction < 0.0 && current < self.options.max_zoom {
            self.distance
                .set_target((current + step).min(self.options.max_zoom));
        }
    }

    /// Focuses `target` (if any) and keeps tracking it through
    /// [`late_update`](Self::late_update).
    pub fn follow(&mut self, target: Option<FocusTarget>, can_unfollow: bool) {
        if let Some(target) = target {
            self.focus(Some(target), false, false);
            log::debug!("top-down camera following object {}", target.id);
        }

        self.following = target.is_some();
        self.can_unfollow = can_unfollow;
    }

    /// Stops following and freezes every animation where it is.
    pub fn stop_follow(&mut self) {
        self.pivot.stop();
        self.distance.stop();
        self.rotator.stop();

        self.following = false;
        self.can_unfollow = true;
    }

    /// Centers the camera on `target`, or the world origin for `None`.
    ///
    /// Focusing the same target again toggles between the default and the
    /// far distance. With `instant` the camera jumps, otherwise it glides.
    pub fn focus(
        &mut self,
        target: Option<FocusTarget>,
        instant: bool,
        force_default_rotation: bool,
    ) {
        self.stop_follow();

        let position = FocusTracker::position_of(target.as_ref());
        let distance = self.focus.distance_for(
            target.as_ref(),
            self.distance.target(),
            self.options.default_zoom,
            self.options.far_focus_factor,
        );
        log::debug!("top-down camera focus at {position} distance {distance} (instant: {instant})");

        if instant {
            self.pivot.set_value(position);
            self.distance.set_value(distance);
            if force_default_rotation {
                self.pose.rotation = self.default_rotation;
            }
            self.update_position();
        } else {
            self.pivot.set_target(position);
            self.distance.set_target(distance);
            if force_default_rotation {
                self.rotator
                    .set_target_from(self.pose.rotation, self.default_rotation);
            }
        }
    }

    fn apply_input(&mut self, dt: f32, input: &RigInput) {
        if input.zoom != 0.0 {
            self.zoom(input.zoom, input.faster_held);
        }

        if input.pan_held && self.can_unfollow {
            self.stop_follow();

            let v = input.look_axis * dt * PAN_SCALE;
            let pivot = self.pivot.value() + self.pose.right() * -v.x + self.pose.up() * -v.y;
            self.pivot.set_value(pivot);

            self.update_position();
            return;
        }

        if input.rotate_held && (self.options.can_rotate || self.options.can_tilt) {
            self.rotator.stop();

            let v = input.look_axis;
            if self.options.can_rotate {
                self.pose.rotate_world_yaw(v.x * dt * self.options.rotate_speed);
            }
            if self.options.can_tilt {
                let tilt = self.pose.tilt_degrees();
                let tilting_down = v.y < 0.0 && tilt < self.options.max_tilt;
                let tilting_up = v.y > 0.0 && tilt > self.options.min_tilt;
                if tilting_down || tilting_up {
                    self.pose
                        .rotate_local_pitch(-v.y * dt * self.options.tilt_speed);
                }
            }

            self.update_position();
        }

        if input.move_active(self.move_activation) && self.can_unfollow {
            let axis = input.move_axis;
            if axis.x != 0.0 || axis.y != 0.0 {
                self.stop_follow();

                let factor = if input.faster_held {
                    self.options.move_faster_factor
                } else {
                    1.0
                };
                let v = axis * dt * self.options.move_speed * factor;

                let mut pivot = self.pivot.value();
                let height = pivot.y;
                pivot += self.pose.right() * v.x + self.pose.forward() * v.y;
                pivot.y = height;
                self.pivot.set_value(pivot);

                self.update_position();
            }
        }
    }

    fn update_position(&mut self) {
        self.pose.orbit(self.pivot.value(), self.distance.value());
    }
}
