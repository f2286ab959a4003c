//! Camera core configuration resource.
//!
//! Settings are loaded from an INI file; values missing from the file keep
//! their defaults.
//!
//! # Configuration File Format
//!
//! ```ini
//! [stage]
//! width = 480
//! height = 360
//!
//! [storage]
//! extension_id = camera
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::error::ConfigError;

/// Default safe values for startup
const DEFAULT_STAGE_WIDTH: u32 = 480;
const DEFAULT_STAGE_HEIGHT: u32 = 360;
const DEFAULT_EXTENSION_ID: &str = "camera";
const DEFAULT_CONFIG_PATH: &str = "./camera.ini";

/// Camera configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CameraConfig {
    /// Stage width in stage units.
    pub stage_width: u32,
    /// Stage height in stage units.
    pub stage_height: u32,
    /// Key of the camera record in [`ExtensionStorage`](crate::resources::extensionstorage::ExtensionStorage).
    pub extension_id: String,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            stage_width: DEFAULT_STAGE_WIDTH,
            stage_height: DEFAULT_STAGE_HEIGHT,
            extension_id: DEFAULT_EXTENSION_ID.to_string(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let mut config = Ini::new();
        config.load(&self.config_path).map_err(ConfigError::Load)?;

        // [stage] section
        if let Some(width) = config.getuint("stage", "width").ok().flatten() {
            self.stage_width = width as u32;
        }
        if let Some(height) = config.getuint("stage", "height").ok().flatten() {
            self.stage_height = height as u32;
        }

        // [storage] section
        if let Some(id) = config.get("storage", "extension_id") {
            if !id.is_empty() {
                self.extension_id = id;
            }
        }

        info!(
            "Loaded config: stage {}x{}, extension id '{}'",
            self.stage_width, self.stage_height, self.extension_id
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), ConfigError> {
        let mut config = Ini::new();

        config.set("stage", "width", Some(self.stage_width.to_string()));
        config.set("stage", "height", Some(self.stage_height.to_string()));
        config.set("storage", "extension_id", Some(self.extension_id.clone()));

        config
            .write(&self.config_path)
            .map_err(ConfigError::Save)?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Stage size as `(width, height)`.
    pub fn stage_size(&self) -> (u32, u32) {
        (self.stage_width, self.stage_height)
    }
}
