//! Camera binding protocol and clone inheritance.
//!
//! Re-binding a drawable must not make it jump in world space. The protocol:
//! 1. Recover the drawable's world position, direction and scale by inverting
//!    its rendered transform with the snapshot of its old camera.
//! 2. Replace the binding with a fresh one (identity snapshot) for the new
//!    camera.
//! 3. Push the recovered values through the normal interception path, which
//!    projects them through the new camera.
//!
//! A clone takes a one-time copy of the binding of the original sprite it
//! descends from, even when it was spawned from another clone.

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::camerabinding::CameraBinding;
use crate::components::drawable::Drawable;
use crate::components::layer::Layer;
use crate::components::target::{CloneOf, Target};
use crate::resources::cameraregistry::{CameraRegistry, DEFAULT_CAMERA};
use crate::systems::interception::{
    update_drawable_direction, update_drawable_position, update_drawable_scale,
};
use crate::systems::targets::{ResolvedTarget, all_drawables, find_sprite, resolve_target};
use crate::transform;

/// Bind a single drawable to `camera`. No-op if it is already bound there.
pub fn bind_drawable(world: &mut World, entity: Entity, camera: &str) {
    let (Some(binding), Some(drawable)) =
        (world.get::<CameraBinding>(entity), world.get::<Drawable>(entity))
    else {
        return;
    };
    if binding.is_bound_to(camera) {
        return;
    }

    let snapshot = binding.snapshot;
    let world_position = transform::inverse(drawable.position, &snapshot);
    let world_direction = drawable.direction + snapshot.rotation;
    let world_scale = drawable.scale / transform::safe_zoom(snapshot.zoom);
    debug!(
        "Binding {:?} from '{}' to '{}'",
        entity, binding.camera, camera
    );

    world
        .entity_mut(entity)
        .insert(CameraBinding::new(camera));

    update_drawable_position(world, entity, world_position);
    update_drawable_direction(world, entity, world_direction);
    update_drawable_scale(world, entity, world_scale);
}

/// Bind a drawable back to the `"default"` camera.
pub fn unbind_drawable(world: &mut World, entity: Entity) {
    bind_drawable(world, entity, DEFAULT_CAMERA);
}

/// Bind the target named by `selector` to `camera`.
///
/// Unknown cameras and unresolvable targets are ignored.
pub fn bind_target(world: &mut World, selector: &str, camera: &str, myself: Option<Entity>) {
    if !world.resource::<CameraRegistry>().contains(camera) {
        debug!("Ignoring bind to unknown camera '{}'", camera);
        return;
    }
    match resolve_target(world, selector, myself) {
        Some(ResolvedTarget::All) => {
            for entity in all_drawables(world) {
                bind_drawable(world, entity, camera);
            }
        }
        Some(ResolvedTarget::Entity(entity)) => bind_drawable(world, entity, camera),
        None => debug!("Ignoring bind of unknown target '{}'", selector),
    }
}

/// Bind the target named by `selector` back to `"default"`.
///
/// `camera` must name an existing camera, matching [`bind_target`]; the
/// target is unbound regardless of which camera it is currently bound to.
pub fn unbind_target(world: &mut World, selector: &str, camera: &str, myself: Option<Entity>) {
    if !world.resource::<CameraRegistry>().contains(camera) {
        debug!("Ignoring unbind from unknown camera '{}'", camera);
        return;
    }
    bind_target(world, selector, DEFAULT_CAMERA, myself);
}

/// Name of the camera the target named by `selector` is bound to.
///
/// Returns an empty string if the target cannot be resolved.
pub fn camera_of(world: &mut World, selector: &str, myself: Option<Entity>) -> String {
    let Some(ResolvedTarget::Entity(entity)) = resolve_target(world, selector, myself) else {
        return String::new();
    };
    world
        .get::<CameraBinding>(entity)
        .map(|binding| binding.camera.clone())
        .unwrap_or_else(|| DEFAULT_CAMERA.to_string())
}

/// Re-send a target's world-space state through the interception layer.
pub fn push_target_state(world: &mut World, entity: Entity) {
    let Some(target) = world.get::<Target>(entity).cloned() else {
        return;
    };
    update_drawable_position(world, entity, target.position());
    update_drawable_direction(world, entity, target.direction);
    update_drawable_scale(world, entity, target.scale());
}

/// Spawn a clone of `source` that inherits the current camera binding of the
/// original sprite. Without an original the clone starts on `"default"`.
///
/// Returns `None` if `source` is not a sprite (the stage and layers cannot
/// be cloned).
pub fn spawn_clone(world: &mut World, source: Entity) -> Option<Entity> {
    if world.get::<Layer>(source).is_some() {
        return None;
    }
    let target = world.get::<Target>(source)?.clone();
    let original = if target.is_original {
        Some(source)
    } else {
        find_sprite(world, &target.name)
    };
    let camera = original
        .and_then(|entity| world.get::<CameraBinding>(entity))
        .map(|binding| binding.camera.clone())
        .unwrap_or_else(|| DEFAULT_CAMERA.to_string());

    let clone = world
        .spawn((
            Target {
                is_original: false,
                ..target
            },
            CloneOf(source),
        ))
        .id();
    bind_drawable(world, clone, &camera);
    push_target_state(world, clone);
    info!("Spawned clone {:?} of {:?} on camera '{}'", clone, source, camera);
    Some(clone)
}
