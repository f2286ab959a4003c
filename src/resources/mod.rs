//! ECS resources made available to systems.
//!
//! Overview
//! - `cameraconfig` – stage size and storage key loaded from an INI file
//! - `cameraregistry` – named camera states, always including `"default"`
//! - `commands` – serde command/report enums for camera scripts
//! - `extensionstorage` – per-extension JSON saved with the project
//! - `mouse` – stage-space mouse position reported by the host
//! - `project` – saved project format (targets + extension storage)
//! - `renderstate` – dirty flag, redraw requests and background colour
pub mod cameraconfig;
pub mod cameraregistry;
pub mod commands;
pub mod extensionstorage;
pub mod mouse;
pub mod project;
pub mod renderstate;
