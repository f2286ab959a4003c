//! World setup and scene lifecycle.
//!
//! - [`setup_world`] – create a world with all camera resources and observers
//! - [`teardown_scene`] – despawn the scene and reset the cameras
//! - [`load_project`] / [`capture_project`] / [`save_project`] – project I/O

use std::path::Path;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::drawable::Drawable;
use crate::components::layer::Layer;
use crate::components::persistent::Persistent;
use crate::components::target::Target;
use crate::error::ProjectError;
use crate::events::camerachanged::camera_changed_observer;
use crate::events::projectloaded::{ProjectLoadedEvent, project_loaded_observer};
use crate::resources::cameraconfig::CameraConfig;
use crate::resources::cameraregistry::CameraRegistry;
use crate::resources::extensionstorage::ExtensionStorage;
use crate::resources::mouse::MouseState;
use crate::resources::project::{LayerRecord, ProjectFile, TargetRecord};
use crate::resources::renderstate::RenderState;
use crate::systems::binding::push_target_state;

/// Build a world ready to run camera operations.
pub fn setup_world(config: CameraConfig) -> World {
    let mut world = World::new();
    world.insert_resource(CameraRegistry::new());
    world.insert_resource(RenderState::default());
    world.insert_resource(MouseState::default());
    world.insert_resource(ExtensionStorage::default());
    world.insert_resource(config);

    world.spawn((Observer::new(camera_changed_observer), Persistent));
    world.spawn((Observer::new(project_loaded_observer), Persistent));
    // Ensure the observers are registered before anything triggers events.
    world.flush();
    world
}

/// Despawn every non-[`Persistent`] scene object and reset the camera registry.
pub fn teardown_scene(world: &mut World) {
    let entities: Vec<Entity> = {
        let mut query = world.query_filtered::<Entity, (With<Drawable>, Without<Persistent>)>();
        query.iter(world).collect()
    };
    let count = entities.len();
    for entity in entities {
        world.despawn(entity);
    }
    world.resource_mut::<CameraRegistry>().reset();
    debug!("Scene teardown despawned {} entities", count);
}

fn spawn_target(world: &mut World, record: &TargetRecord) -> Entity {
    let target = Target::new(record.name.clone())
        .with_position(record.x, record.y)
        .with_direction(record.direction)
        .with_size(record.size);
    let entity = match record.layer {
        LayerRecord::Sprite => world.spawn(target).id(),
        LayerRecord::Stage => world.spawn((target, Layer::Stage)).id(),
        LayerRecord::Pen => world.spawn((Drawable::default(), Layer::Pen)).id(),
        LayerRecord::Video => world.spawn((Drawable::default(), Layer::Video)).id(),
        LayerRecord::Custom => world
            .spawn((Drawable::default(), Layer::Custom(record.name.clone())))
            .id(),
    };
    push_target_state(world, entity);
    entity
}

/// Replace the scene with `project`.
///
/// Cameras listed in the project's extension storage are re-created at
/// identity; every target starts out bound to `"default"`.
pub fn load_project(world: &mut World, project: ProjectFile) {
    teardown_scene(world);
    world.insert_resource(project.extension_storage);
    for record in &project.targets {
        spawn_target(world, record);
    }
    world.trigger(ProjectLoadedEvent {});
    info!(
        "Loaded project with {} target(s) and {} camera(s)",
        project.targets.len(),
        world.resource::<CameraRegistry>().len()
    );
}

/// Snapshot the scene as a project. Clones are not saved.
pub fn capture_project(world: &mut World) -> ProjectFile {
    let mut layers = Vec::new();
    let mut sprites = Vec::new();
    let mut query = world.query_filtered::<(Option<&Target>, Option<&Layer>), With<Drawable>>();
    for (target, layer) in query.iter(world) {
        match (target, layer) {
            (Some(target), None) if target.is_original => sprites.push(record_of(target)),
            (Some(target), Some(Layer::Stage)) => layers.push(TargetRecord {
                layer: LayerRecord::Stage,
                ..record_of(target)
            }),
            (None, Some(Layer::Pen)) => layers.push(TargetRecord::layer("pen", LayerRecord::Pen)),
            (None, Some(Layer::Video)) => {
                layers.push(TargetRecord::layer("video", LayerRecord::Video))
            }
            (None, Some(Layer::Custom(name))) => {
                layers.push(TargetRecord::layer(name.clone(), LayerRecord::Custom))
            }
            _ => {}
        }
    }
    sprites.sort_by(|a, b| a.name.cmp(&b.name));
    layers.extend(sprites);

    ProjectFile {
        targets: layers,
        extension_storage: world
            .get_resource::<ExtensionStorage>()
            .cloned()
            .unwrap_or_default(),
    }
}

fn record_of(target: &Target) -> TargetRecord {
    TargetRecord {
        x: target.x,
        y: target.y,
        direction: target.direction,
        size: target.size,
        ..TargetRecord::sprite(target.name.clone(), 0.0, 0.0)
    }
}

/// Write the current scene to `path`.
pub fn save_project(world: &mut World, path: &Path) -> Result<(), ProjectError> {
    let project = capture_project(world);
    project.write(path)?;
    info!(
        "Saved project with {} target(s) to {}",
        project.targets.len(),
        path.display()
    );
    Ok(())
}
