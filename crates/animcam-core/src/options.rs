//! Configuration options for the camera rigs.
//!
//! Options are plain serde structs so hosts can keep them in a JSON file
//! next to the rest of their settings. Missing fields fall back to the
//! defaults below.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{AnimcamError, Result};

/// Options for the top-down (orbit) camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopDownOptions {
    /// Default rotation as Euler degrees: x = tilt (down), y = yaw, z = roll.
    pub default_rotation: Vec3,

    /// Speed of pivot and rotation transitions.
    pub focus_smoothing: f32,
    /// Speed of distance transitions.
    pub zoom_smoothing: f32,

    /// Pivot movement in units per second.
    pub move_speed: f32,
    /// Movement multiplier while the faster button is held.
    pub move_faster_factor: f32,

    /// Whether the rotate button may yaw the camera.
    pub can_rotate: bool,
    /// Yaw speed in degrees per second.
    pub rotate_speed: f32,

    /// Whether the rotate button may tilt the camera.
    pub can_tilt: bool,
    /// Tilt speed in degrees per second.
    pub tilt_speed: f32,
    /// Lowest tilt in degrees.
    pub min_tilt: f32,
    /// Highest tilt in degrees.
    pub max_tilt: f32,

    /// Distance used when focusing a new target.
    pub default_zoom: f32,
    /// Multiplier on `default_zoom` used on a repeated focus.
    pub far_focus_factor: f32,
    /// Distance change per zoom input.
    pub zoom_step: f32,
    /// Distance change per zoom input while the faster button is held.
    pub zoom_fast_step: f32,
    /// Closest allowed distance.
    pub min_zoom: f32,
    /// Farthest allowed distance.
    pub max_zoom: f32,
}

impl Default for TopDownOptions {
    fn default() -> Self {
        Self {
            default_rotation: Vec3::new(45.0, -45.0, 0.0),
            focus_smoothing: 5.0,
            zoom_smoothing: 10.0,
            move_speed: 5.0,
            move_faster_factor: 5.0,
            can_rotate: true,
            rotate_speed: 100.0,
            can_tilt: true,
            tilt_speed: 50.0,
            min_tilt: 15.0,
            max_tilt: 75.0,
            default_zoom: 5.0,
            far_focus_factor: 2.0,
            zoom_step: 0.3,
            zoom_fast_step: 1.0,
            min_zoom: 3.0,
            max_zoom: 15.0,
        }
    }
}

impl TopDownOptions {
    /// Checks that ranges are ordered and numeric fields are usable.
    pub fn validate(&self) -> Result<()> {
        ensure_finite("focus_smoothing", self.focus_smoothing)?;
        ensure_finite("zoom_smoothing", self.zoom_smoothing)?;
        ensure_non_negative("move_speed", self.move_speed)?;
        ensure_non_negative("zoom_step", self.zoom_step)?;
        ensure_non_negative("zoom_fast_step", self.zoom_fast_step)?;
        ensure_ordered("tilt", self.min_tilt, self.max_tilt)?;
        ensure_ordered("zoom", self.min_zoom, self.max_zoom)?;
        if !self.default_rotation.is_finite() {
            return Err(AnimcamError::InvalidOption {
                name: "default_rotation",
                reason: "must be finite".to_string(),
            });
        }
        Ok(())
    }

    /// Parses options from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Loads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serializes the options as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Options for the free-move camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreeMoveOptions {
    /// Default rotation as Euler degrees: x = tilt (down), y = yaw, z = roll.
    pub default_rotation: Vec3,
    /// Distance used when focusing a new target.
    pub default_distance: f32,
    /// Multiplier on `default_distance` used on a repeated focus.
    pub far_focus_factor: f32,
    /// Movement in units per second.
    pub move_speed: f32,
    /// Movement multiplier while the faster button is held.
    pub move_faster_factor: f32,
    /// Look speed in degrees per second.
    pub rotate_speed: f32,
    /// Distance change per zoom input.
    pub zoom_step: f32,
}

impl Default for FreeMoveOptions {
    fn default() -> Self {
        Self {
            default_rotation: Vec3::new(45.0, 0.0, 0.0),
            default_distance: 5.0,
            far_focus_factor: 2.0,
            move_speed: 5.0,
            move_faster_factor: 2.0,
            rotate_speed: 100.0,
            zoom_step: 0.2,
        }
    }
}

impl FreeMoveOptions {
    /// Checks that numeric fields are usable.
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("default_distance", self.default_distance)?;
        ensure_non_negative("move_speed", self.move_speed)?;
        ensure_non_negative("zoom_step", self.zoom_step)?;
        ensure_finite("rotate_speed", self.rotate_speed)?;
        if !self.default_rotation.is_finite() {
            return Err(AnimcamError::InvalidOption {
                name: "default_rotation",
                reason: "must be finite".to_string(),
            });
        }
        Ok(())
    }

    /// Parses options from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Loads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serializes the options as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn ensure_finite(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AnimcamError::InvalidOption {
            name,
            reason: format!("must be finite, got {value}"),
        })
    }
}

fn ensure_non_negative(name: &'static str, value: f32) -> Result<()> {
    ensure_finite(name, value)?;
    if value < 0.0 {
        return Err(AnimcamError::InvalidOption {
            name,
            reason: format!("must not be negative, got {value}"),
        });
    }
    Ok(())
}

fn ensure_ordered(name: &'static str, min: f32, max: f32) -> Result<()> {
    if min > max {
        return Err(AnimcamError::InvalidRange { name, min, max });
    }
    Ok(())
}
