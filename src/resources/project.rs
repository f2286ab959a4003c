//! Saved project format.
//!
//! A project is the list of scene targets (sprites, the stage and special
//! layers) plus the per-extension storage. It is what survives a save/reload
//! cycle; see [`crate::game::load_project`] and [`crate::game::capture_project`].
//!
//! ```json
//! {
//!   "targets": [
//!     { "name": "Stage", "layer": "stage" },
//!     { "name": "Cat", "x": 10.0, "y": -5.0, "direction": 90.0, "size": 100.0 }
//!   ],
//!   "extension_storage": { "camera": { "cams": ["default", "top"] } }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ProjectError;
use crate::resources::extensionstorage::ExtensionStorage;

/// Kind of a saved target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LayerRecord {
    /// An ordinary sprite.
    #[default]
    Sprite,
    Stage,
    Pen,
    Video,
    Custom,
}

/// One saved target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetRecord {
    pub name: String,
    #[serde(default)]
    pub layer: LayerRecord,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default = "default_direction")]
    pub direction: f64,
    #[serde(default = "default_size")]
    pub size: f64,
}

fn default_direction() -> f64 {
    90.0
}

fn default_size() -> f64 {
    100.0
}

impl TargetRecord {
    pub fn sprite(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            layer: LayerRecord::Sprite,
            x,
            y,
            direction: default_direction(),
            size: default_size(),
        }
    }

    pub fn layer(name: impl Into<String>, layer: LayerRecord) -> Self {
        Self {
            layer,
            ..Self::sprite(name, 0.0, 0.0)
        }
    }
}

/// A saved scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectFile {
    #[serde(default)]
    pub targets: Vec<TargetRecord>,
    #[serde(default)]
    pub extension_storage: ExtensionStorage,
}

impl ProjectFile {
    pub fn from_json(json: &str) -> Result<Self, ProjectError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ProjectError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn read(path: &Path) -> Result<Self, ProjectError> {
        let json = std::fs::read_to_string(path).map_err(|source| ProjectError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn write(&self, path: &Path) -> Result<(), ProjectError> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|source| ProjectError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let project = ProjectFile::from_json(r#"{ "targets": [ { "name": "Cat" } ] }"#)
            .expect("valid project");
        let cat = &project.targets[0];
        assert_eq!(cat.layer, LayerRecord::Sprite);
        assert_eq!(cat.direction, 90.0);
        assert_eq!(cat.size, 100.0);
        assert!(project.extension_storage.entries.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            ProjectFile::from_json("{ targets: nope"),
            Err(ProjectError::Json(_))
        ));
    }

    #[test]
    fn reading_a_missing_file_reports_the_path() {
        let err = ProjectFile::read(Path::new("./no/such/project.json"))
            .expect_err("missing file");
        assert!(err.to_string().contains("project.json"));
    }
}
