//! Per-drawable camera state.
//!
//! Records which camera governs a drawable and the camera parameters that are
//! already baked into its rendered transform. The snapshot is what lets the
//! interception layer invert a rendered value back to world space before
//! projecting it through a camera that has since moved.

use bevy_ecs::prelude::Component;

use crate::resources::cameraregistry::DEFAULT_CAMERA;
use crate::transform::CameraState;

/// Camera binding and snapshot of a single drawable.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct CameraBinding {
    /// Name of the camera this drawable is projected through.
    pub camera: String,
    /// Camera state as of the last time each rendered channel was computed.
    ///
    /// `position` is written by position updates, `rotation` by direction
    /// updates and `zoom` by scale updates.
    pub snapshot: CameraState,
    /// Set while a camera-triggered refresh pass is re-projecting this
    /// drawable: incoming values are already camera-relative.
    pub refreshing: bool,
}

impl Default for CameraBinding {
    fn default() -> Self {
        Self::new(DEFAULT_CAMERA)
    }
}

impl CameraBinding {
    /// A fresh binding to `camera` with an identity snapshot.
    pub fn new(camera: impl Into<String>) -> Self {
        Self {
            camera: camera.into(),
            snapshot: CameraState::IDENTITY,
            refreshing: false,
        }
    }

    /// Returns `true` if this drawable is governed by `camera`.
    pub fn is_bound_to(&self, camera: &str) -> bool {
        self.camera == camera
    }
}
