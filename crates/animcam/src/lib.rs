//! animcam: animated values and camera rigs for interactive 3D scenes.
//!
//! The heart of the crate is [`AnimatedValue`], a small state machine that
//! moves a typed value from a start to a target as the host feeds it frame
//! deltas. The camera rigs are built on top of it.
//!
//! # Quick Start
//!
//! ```
//! use animcam::*;
//!
//! let mut zoom = AnimFloat::new(0.0, 2.0);
//! zoom.set_target(10.0);
//!
//! assert!(zoom.update(0.25));
//! assert_eq!(zoom.value(), 5.0);
//! assert!(zoom.update(0.25));
//! assert_eq!(zoom.value(), 10.0);
//! assert!(!zoom.update(0.25));
//! ```
//!
//! # Rigs
//!
//! - [`TopDownCamera`] - orbits a ground pivot; focus, follow and zoom glide
//! - [`FreeMoveCamera`] - flies around a pivot under direct control
//!
//! Both consume a [`RigInput`] snapshot per frame and expose a
//! [`CameraPose`].

mod init;

pub use init::init_logging;

// Re-export core types
pub use animcam_core::{
    animated::{AnimFloat, AnimQuat, AnimVec3, AnimatedValue},
    error::{AnimcamError, Result},
    interpolate::Interpolate,
    notify::{ListenerId, Listeners},
    options::{FreeMoveOptions, TopDownOptions},
    Quat, Vec2, Vec3,
};

// Re-export rig types
pub use animcam_rig::{
    CameraPose, FocusTarget, FreeMoveCamera, MoveActivation, RigInput, TopDownCamera,
};
