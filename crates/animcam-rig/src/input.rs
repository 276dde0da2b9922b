//! Per-frame input snapshot consumed by the rigs.
//!
//! The host decodes its own devices and fills one [`RigInput`] per frame.
//! Axis values are expected in `[-1, 1]`, buttons are "held" states.

use glam::Vec2;

/// How the rig decides whether keyboard-style movement is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveActivation {
    /// Movement applies only while `move_held` is set.
    #[default]
    Button,
    /// No move button is bound; movement always applies.
    Always,
}

/// Input state for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RigInput {
    /// Planar movement: x = strafe right, y = forward.
    pub move_axis: Vec2,
    /// Look/drag delta: x = turn right, y = look up.
    pub look_axis: Vec2,
    /// Zoom event this frame: > 0 zooms in, < 0 zooms out, 0 = none.
    pub zoom: f32,
    /// Move button held.
    pub move_held: bool,
    /// Pan button held.
    pub pan_held: bool,
    /// Rotate button held.
    pub rotate_held: bool,
    /// Faster-movement modifier held.
    pub faster_held: bool,
}

impl RigInput {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the movement axis.
    #[must_use]
    pub fn with_move(mut self, axis: Vec2) -> Self {
        self.move_axis = axis;
        self
    }

    /// Sets the look axis.
    #[must_use]
    pub fn with_look(mut self, axis: Vec2) -> Self {
        self.look_axis = axis;
        self
    }

    /// Sets the zoom event.
    #[must_use]
    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    /// Marks the move button held.
    #[must_use]
    pub fn moving(mut self) -> Self {
        self.move_held = true;
        self
    }

    /// Marks the pan button held.
    #[must_use]
    pub fn panning(mut self) -> Self {
        self.pan_held = true;
        self
    }

    /// Marks the rotate button held.
    #[must_use]
    pub fn rotating(mut self) -> Self {
        self.rotate_held = true;
        self
    }

    /// Marks the faster modifier held.
    #[must_use]
    pub fn faster(mut self) -> Self {
        self.faster_held = true;
        self
    }

    /// Returns whether movement is active under the given activation mode.
    #[must_use]
    pub fn move_active(&self, activation: MoveActivation) -> bool {
        match activation {
            MoveActivation::Button => self.move_held,
            MoveActivation::Always => true,
        }
    }
}
