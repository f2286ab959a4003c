//! Camera systems.
//!
//! This module groups the operations that act on the world: camera
//! mutators and queries, drawable interception, binding and persistence.
//!
//! Submodules overview
//! - [`binding`] – re-bind drawables without moving them, clone inheritance
//! - [`bubble`] – speech-bubble bounds and limits, drag preparation
//! - [`camera`] – camera lifecycle, mutators and queries
//! - [`camera_commands`] – apply [`crate::resources::commands::CameraCmd`] and evaluate reports
//! - [`interception`] – project drawable updates through the bound camera
//! - [`objects`] – host-side moves, turns and resizes of sprites
//! - [`persistence`] – save and restore the list of camera names
//! - [`script`] – run JSON command scripts
//! - [`targets`] – resolve target selectors and build menus

pub mod binding;
pub mod bubble;
pub mod camera;
pub mod camera_commands;
pub mod interception;
pub mod objects;
pub mod persistence;
pub mod script;
pub mod targets;
