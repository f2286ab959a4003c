//! Multicam2d library.
//!
//! Named 2-D cameras for a sprite scene. Each visual object is bound to one
//! camera; its position, direction and size are projected through that camera
//! before they reach the renderer. The crate exposes the ECS components,
//! resources, events and systems for use in integration tests and as a
//! reusable library.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
pub mod transform;
