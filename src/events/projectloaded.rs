//! Project load event and the camera restore observer.
//!
//! [`crate::game::load_project`] triggers a [`ProjectLoadedEvent`] once the
//! project's targets and extension storage are in place. The observer
//! re-creates the cameras listed in the stored camera record.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::resources::cameraconfig::CameraConfig;
use crate::resources::cameraregistry::CameraRegistry;
use crate::resources::extensionstorage::ExtensionStorage;
use crate::systems::persistence::restore_cameras;

/// Emitted after a project finished loading.
#[derive(Event, Debug, Clone, Copy)]
pub struct ProjectLoadedEvent {}

/// Observer that restores persisted camera names into the registry.
pub fn project_loaded_observer(
    _trigger: On<ProjectLoadedEvent>,
    storage: Res<ExtensionStorage>,
    config: Res<CameraConfig>,
    mut registry: ResMut<CameraRegistry>,
) {
    restore_cameras(&mut registry, &storage, &config.extension_id);
}
