//! Camera rigs for animcam.
//!
//! This crate turns a per-frame [`RigInput`] snapshot into a [`CameraPose`]:
//! - [`TopDownCamera`] orbits a ground pivot with animated focus and zoom
//! - [`FreeMoveCamera`] flies around a pivot with direct control
//!
//! Rendering is left to the host; the pose exposes a view matrix.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod focus;
pub mod free_move;
pub mod input;
pub mod pose;
pub mod top_down;

pub use focus::FocusTarget;
pub use free_move::FreeMoveCamera;
pub use input::{MoveActivation, RigInput};
pub use pose::CameraPose;
pub use top_down::TopDownCamera;
