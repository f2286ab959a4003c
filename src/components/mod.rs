//! ECS components for scene entities.
//!
//! Submodules overview:
//! - [`camerabinding`] – camera a drawable is bound to, plus its transform snapshot
//! - [`drawable`] – rendered (camera-relative) transform of a visual object
//! - [`layer`] – markers for the stage, pen, video and custom layers
//! - [`persistent`] – marker for entities that survive scene teardown
//! - [`target`] – world-space state of sprites and the stage, and clone links

pub mod camerabinding;
pub mod drawable;
pub mod layer;
pub mod persistent;
pub mod target;
