//! Camera name persistence.
//!
//! Only the *existence* of cameras is saved: the record under the configured
//! extension id lists camera names. Positions, zooms, rotations and drawable
//! bindings reset on every load.

use bevy_ecs::prelude::*;
use log::info;

use crate::resources::cameraconfig::CameraConfig;
use crate::resources::cameraregistry::{CameraRegistry, DEFAULT_CAMERA};
use crate::resources::extensionstorage::{CameraRecord, ExtensionStorage};

/// Create an identity camera for every stored name other than `"default"`.
///
/// Returns the number of cameras created.
pub fn restore_cameras(registry: &mut CameraRegistry, storage: &ExtensionStorage, key: &str) -> usize {
    let Some(record) = storage.camera_record(key) else {
        return 0;
    };
    let created = record
        .cams
        .iter()
        .filter(|name| name.as_str() != DEFAULT_CAMERA)
        .filter(|name| registry.create(name))
        .count();
    info!("Restored {} camera(s) from project storage", created);
    created
}

/// Rewrite the stored camera record from the registry.
pub fn store_camera_names(world: &mut World) {
    let names = world.resource::<CameraRegistry>().names();
    let key = world
        .get_resource::<CameraConfig>()
        .map(|config| config.extension_id.clone())
        .unwrap_or_else(|| CameraConfig::new().extension_id);
    let record = CameraRecord { cams: names };
    world
        .get_resource_or_insert_with(ExtensionStorage::default)
        .set_camera_record(&key, &record);
}
