//! Core abstractions for animcam.
//!
//! This crate provides the pieces the camera rigs are built from:
//! - [`AnimatedValue`], a step-driven start/target transition with change
//!   notification
//! - [`Interpolate`] blends for `f32`, [`Vec3`] and [`Quat`]
//! - [`Listeners`] for payload-free change callbacks
//! - Rig configuration options and the crate error type

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Options structs legitimately have many boolean flags
#![allow(clippy::struct_excessive_bools)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Progress is accumulated in f64 and read back as f32
#![allow(clippy::cast_possible_truncation)]

pub mod animated;
pub mod error;
pub mod interpolate;
pub mod notify;
pub mod options;

pub use animated::{AnimFloat, AnimQuat, AnimVec3, AnimatedValue};
pub use error::{AnimcamError, Result};
pub use interpolate::Interpolate;
pub use notify::{ListenerId, Listeners};
pub use options::{FreeMoveOptions, TopDownOptions};

// Re-export glam types for convenience
pub use glam::{Quat, Vec2, Vec3};
