//! Registry of named cameras.
//!
//! The [`CameraRegistry`] resource is the source of truth for every camera's
//! position, zoom and rotation. A camera named [`DEFAULT_CAMERA`] always
//! exists and cannot be removed.
//!
//! The mutators here only change the stored state. Use the world-level
//! operations in [`crate::systems::camera`] from engine code: they also
//! re-project every drawable bound to the camera and request a redraw.

use bevy_ecs::prelude::Resource;
use glam::DVec2;
use log::{debug, warn};
use rustc_hash::FxHashMap;

use crate::transform::{self, CameraState};

/// Name of the camera that always exists.
pub const DEFAULT_CAMERA: &str = "default";

/// Resource that maps camera names to their state.
#[derive(Resource, Debug, Clone)]
pub struct CameraRegistry {
    cameras: FxHashMap<String, CameraState>,
}

impl Default for CameraRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraRegistry {
    /// A registry holding only the identity `"default"` camera.
    pub fn new() -> Self {
        let mut cameras = FxHashMap::default();
        cameras.insert(DEFAULT_CAMERA.to_string(), CameraState::IDENTITY);
        Self { cameras }
    }

    /// Create a camera at identity. Returns `false` if the name is empty or
    /// already taken; an existing camera keeps its state.
    pub fn create(&mut self, name: &str) -> bool {
        if name.is_empty() || self.cameras.contains_key(name) {
            return false;
        }
        self.cameras.insert(name.to_string(), CameraState::IDENTITY);
        debug!("Camera '{}' created", name);
        true
    }

    /// Remove a camera. The default camera is never removed.
    pub fn remove(&mut self, name: &str) -> bool {
        if name == DEFAULT_CAMERA {
            warn!("Refusing to remove the '{}' camera", DEFAULT_CAMERA);
            return false;
        }
        self.cameras.remove(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&CameraState> {
        self.cameras.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut CameraState> {
        self.cameras.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.cameras.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }

    /// Camera names, `"default"` first and the rest in lexical order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .cameras
            .keys()
            .filter(|name| name.as_str() != DEFAULT_CAMERA)
            .cloned()
            .collect();
        names.sort();
        names.insert(0, DEFAULT_CAMERA.to_string());
        names
    }

    /// Drop every user camera and put `"default"` back at identity.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Set the stored (already negated) offset of a camera.
    pub fn set_position(&mut self, name: &str, position: DVec2) -> bool {
        self.with_camera(name, |camera| camera.position = position)
    }

    /// Add to the stored offset of a camera.
    pub fn add_position(&mut self, name: &str, delta: DVec2) -> bool {
        self.with_camera(name, |camera| {
            let moved = camera.position + delta;
            camera.position = DVec2::new(
                transform::apply_epsilon(moved.x),
                transform::apply_epsilon(moved.y),
            );
        })
    }

    pub fn set_zoom(&mut self, name: &str, zoom: f64) -> bool {
        self.with_camera(name, |camera| camera.zoom = zoom)
    }

    pub fn add_zoom(&mut self, name: &str, delta: f64) -> bool {
        self.with_camera(name, |camera| camera.zoom += delta)
    }

    pub fn set_rotation(&mut self, name: &str, rotation: f64) -> bool {
        self.with_camera(name, |camera| camera.rotation = rotation)
    }

    pub fn add_rotation(&mut self, name: &str, delta: f64) -> bool {
        self.with_camera(name, |camera| camera.rotation += delta)
    }

    /// Move the stored offset `steps` units along the camera's own rotation.
    pub fn move_along_facing(&mut self, name: &str, steps: f64) -> bool {
        self.with_camera(name, |camera| {
            camera.position =
                transform::translate_angled_movement(camera.position, steps, camera.rotation);
        })
    }

    fn with_camera(&mut self, name: &str, apply: impl FnOnce(&mut CameraState)) -> bool {
        match self.cameras.get_mut(name) {
            Some(camera) => {
                apply(camera);
                true
            }
            None => {
                debug!("Ignoring update of unknown camera '{}'", name);
                false
            }
        }
    }
}
