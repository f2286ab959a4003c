//! Per-extension storage carried inside saved projects.
//!
//! The host persists one JSON value per extension identifier. The camera
//! core stores a [`CameraRecord`] there: the names of the cameras that
//! existed when the project was saved. Camera positions, zooms, rotations and
//! drawable bindings are not part of the record.

use std::collections::BTreeMap;

use bevy_ecs::prelude::Resource;
use log::warn;
use serde::{Deserialize, Serialize};

/// Extension-keyed JSON values saved with the project.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtensionStorage {
    pub entries: BTreeMap<String, serde_json::Value>,
}

/// Persisted list of camera names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraRecord {
    pub cams: Vec<String>,
}

impl ExtensionStorage {
    /// Read the camera record stored under `key`.
    ///
    /// A missing entry yields `None`; a malformed one is logged and ignored.
    pub fn camera_record(&self, key: &str) -> Option<CameraRecord> {
        let value = self.entries.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Ignoring malformed camera storage under '{}': {}", key, e);
                None
            }
        }
    }

    /// Replace the camera record stored under `key`.
    pub fn set_camera_record(&mut self, key: &str, record: &CameraRecord) {
        match serde_json::to_value(record) {
            Ok(value) => {
                self.entries.insert(key.to_string(), value);
            }
            Err(e) => warn!("Could not serialize camera storage: {}", e),
        }
    }
}
