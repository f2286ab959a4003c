//! Event types and observers used by the camera core.
//!
//! Submodules:
//! - [`camerachanged`] – a camera's state changed; re-project its drawables
//! - [`projectloaded`] – a project finished loading; restore its cameras
pub mod camerachanged;
pub mod projectloaded;
