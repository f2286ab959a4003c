//! Camera operations on the world.
//!
//! Every mutator follows the same coordination step: update the camera in the
//! [`CameraRegistry`], then trigger a [`CameraChangedEvent`] whose observer
//! re-projects the camera's drawables and requests a redraw. Unknown cameras
//! make mutators no-ops and queries return `0.0`.
//!
//! # Conventions
//!
//! - Positions are stored negated: `set_camera_xy(c, 10, 20)` stores
//!   `(-10, -20)` and [`camera_x`]/[`camera_y`] report `10`/`20` again.
//! - Zoom is exposed in percent: `100` means no scaling.
//! - Directions come in two conventions that are both kept:
//!   [`set_camera_direction`] stores `90 - value` and
//!   [`set_camera_direction_legacy`] stores `value - 90`.

use bevy_ecs::prelude::*;
use glam::DVec2;
use log::{debug, info, warn};

use crate::components::camerabinding::CameraBinding;
use crate::components::drawable::Drawable;
use crate::components::target::Target;
use crate::events::camerachanged::CameraChangedEvent;
use crate::resources::cameraregistry::{CameraRegistry, DEFAULT_CAMERA};
use crate::resources::mouse::MouseState;
use crate::resources::renderstate::RenderState;
use crate::systems::binding::bind_drawable;
use crate::systems::persistence::store_camera_names;
use crate::systems::targets::resolve_entity;
use crate::transform::{self, CameraState, cast_number};

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

/// Create a camera at identity and persist the camera list.
///
/// Returns `false` if the name is empty or already exists.
pub fn add_camera(world: &mut World, name: &str) -> bool {
    if !world.resource_mut::<CameraRegistry>().create(name) {
        debug!("Camera '{}' not created (empty or existing name)", name);
        return false;
    }
    store_camera_names(world);
    info!("Added camera '{}'", name);
    true
}

/// Remove a camera and persist the camera list.
///
/// Drawables bound to the removed camera are re-bound to `"default"` first.
/// The default camera is never removed.
pub fn remove_camera(world: &mut World, name: &str) -> bool {
    if name == DEFAULT_CAMERA {
        warn!("The '{}' camera cannot be removed", DEFAULT_CAMERA);
        return false;
    }
    if !world.resource::<CameraRegistry>().contains(name) {
        return false;
    }

    let bound: Vec<Entity> = {
        let mut query = world.query::<(Entity, &CameraBinding)>();
        query
            .iter(world)
            .filter(|(_, binding)| binding.is_bound_to(name))
            .map(|(entity, _)| entity)
            .collect()
    };
    for entity in bound {
        bind_drawable(world, entity, DEFAULT_CAMERA);
    }

    world.resource_mut::<CameraRegistry>().remove(name);
    store_camera_names(world);
    info!("Removed camera '{}'", name);
    true
}

// ---------------------------------------------------------------------------
// Mutators
// ---------------------------------------------------------------------------

fn commit(world: &mut World, camera: &str, apply: impl FnOnce(&mut CameraRegistry) -> bool) {
    let changed = {
        let mut registry = world.resource_mut::<CameraRegistry>();
        apply(&mut *registry)
    };
    if !changed {
        return;
    }
    world.trigger(CameraChangedEvent {
        camera: camera.to_string(),
    });
}

/// Move the camera so that `(x, y)` is at the center of its view.
pub fn set_camera_xy(world: &mut World, camera: &str, x: f64, y: f64) {
    let offset = -DVec2::new(cast_number(x), cast_number(y));
    commit(world, camera, |registry| registry.set_position(camera, offset));
}

/// Move the camera `steps` units along its facing direction.
pub fn move_camera_steps(world: &mut World, camera: &str, steps: f64) {
    let steps = -cast_number(steps);
    commit(world, camera, |registry| {
        registry.move_along_facing(camera, steps)
    });
}

pub fn set_camera_x(world: &mut World, camera: &str, x: f64) {
    let x = -cast_number(x);
    commit(world, camera, |registry| {
        let Some(y) = registry.get(camera).map(|state| state.position.y) else {
            return false;
        };
        registry.set_position(camera, DVec2::new(x, y))
    });
}

pub fn change_camera_x(world: &mut World, camera: &str, dx: f64) {
    let delta = DVec2::new(-cast_number(dx), 0.0);
    commit(world, camera, |registry| registry.add_position(camera, delta));
}

pub fn set_camera_y(world: &mut World, camera: &str, y: f64) {
    let y = -cast_number(y);
    commit(world, camera, |registry| {
        let Some(x) = registry.get(camera).map(|state| state.position.x) else {
            return false;
        };
        registry.set_position(camera, DVec2::new(x, y))
    });
}

pub fn change_camera_y(world: &mut World, camera: &str, dy: f64) {
    let delta = DVec2::new(0.0, -cast_number(dy));
    commit(world, camera, |registry| registry.add_position(camera, delta));
}

/// Center the camera on the target named by `selector`.
///
/// Targets without a world position (the pen or video layer) are ignored.
pub fn camera_go_to(world: &mut World, camera: &str, selector: &str, myself: Option<Entity>) {
    if !world.resource::<CameraRegistry>().contains(camera) {
        return;
    }
    let Some(position) = resolve_entity(world, selector, myself)
        .and_then(|entity| world.get::<Target>(entity))
        .map(Target::position)
    else {
        debug!("Camera '{}' cannot go to '{}'", camera, selector);
        return;
    };
    commit(world, camera, |registry| registry.set_position(camera, -position));
}

/// Set the direction the camera faces (`rotation = 90 - direction`).
pub fn set_camera_direction(world: &mut World, camera: &str, direction: f64) {
    let rotation = 90.0 - cast_number(direction);
    commit(world, camera, |registry| registry.set_rotation(camera, rotation));
}

/// Set the direction the camera faces, legacy convention (`rotation = direction - 90`).
pub fn set_camera_direction_legacy(world: &mut World, camera: &str, direction: f64) {
    let rotation = cast_number(direction) - 90.0;
    commit(world, camera, |registry| registry.set_rotation(camera, rotation));
}

/// Turn the camera clockwise by `degrees`.
pub fn turn_camera_right(world: &mut World, camera: &str, degrees: f64) {
    let delta = -cast_number(degrees);
    commit(world, camera, |registry| registry.add_rotation(camera, delta));
}

/// Turn the camera counter-clockwise by `degrees`.
pub fn turn_camera_left(world: &mut World, camera: &str, degrees: f64) {
    let delta = cast_number(degrees);
    commit(world, camera, |registry| registry.add_rotation(camera, delta));
}

/// Rotate the camera to the direction of the target named by `selector`.
pub fn point_camera_towards(
    world: &mut World,
    camera: &str,
    selector: &str,
    myself: Option<Entity>,
) {
    if !world.resource::<CameraRegistry>().contains(camera) {
        return;
    }
    let Some(direction) = resolve_entity(world, selector, myself)
        .and_then(|entity| world.get::<Target>(entity))
        .map(|target| target.direction)
    else {
        debug!("Camera '{}' cannot point towards '{}'", camera, selector);
        return;
    };
    commit(world, camera, |registry| {
        registry.set_rotation(camera, direction - 90.0)
    });
}

/// Set the zoom in percent (`100` = no scaling).
pub fn set_camera_zoom(world: &mut World, camera: &str, percent: f64) {
    let zoom = cast_number(percent) / 100.0;
    commit(world, camera, |registry| registry.set_zoom(camera, zoom));
}

/// Change the zoom by `percent` points.
pub fn change_camera_zoom(world: &mut World, camera: &str, percent: f64) {
    let delta = cast_number(percent) / 100.0;
    commit(world, camera, |registry| registry.add_zoom(camera, delta));
}

/// Set the stage background colour from `#rrggbb`. Malformed colours are ignored.
pub fn set_background_color(world: &mut World, hex: &str) {
    let mut render = world.resource_mut::<RenderState>();
    if render.set_background_hex(hex) {
        render.request_redraw();
    } else {
        debug!("Ignoring malformed background colour '{}'", hex);
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

fn camera_state(world: &World, camera: &str) -> Option<CameraState> {
    world.resource::<CameraRegistry>().get(camera).copied()
}

pub fn camera_x(world: &World, camera: &str) -> f64 {
    camera_state(world, camera).map_or(0.0, |state| -state.position.x)
}

pub fn camera_y(world: &World, camera: &str) -> f64 {
    camera_state(world, camera).map_or(0.0, |state| -state.position.y)
}

/// Camera direction in the current convention (`90 - rotation`).
pub fn camera_direction(world: &World, camera: &str) -> f64 {
    camera_state(world, camera).map_or(0.0, |state| 90.0 - state.rotation)
}

/// Camera direction in the legacy convention (`rotation + 90`).
pub fn camera_direction_legacy(world: &World, camera: &str) -> f64 {
    camera_state(world, camera).map_or(0.0, |state| state.rotation + 90.0)
}

/// Camera zoom in percent.
pub fn camera_zoom(world: &World, camera: &str) -> f64 {
    camera_state(world, camera).map_or(0.0, |state| state.zoom * 100.0)
}

fn mouse_in_camera(world: &World, camera: &str) -> Option<DVec2> {
    let state = camera_state(world, camera)?;
    let mouse = world
        .get_resource::<MouseState>()
        .copied()
        .unwrap_or_default();
    Some(transform::forward(mouse.position(), &state))
}

/// Mouse x projected through `camera`.
pub fn mouse_x_in_camera(world: &World, camera: &str) -> f64 {
    mouse_in_camera(world, camera).map_or(0.0, |p| p.x)
}

/// Mouse y projected through `camera`.
pub fn mouse_y_in_camera(world: &World, camera: &str) -> f64 {
    mouse_in_camera(world, camera).map_or(0.0, |p| p.y)
}

fn rendered_position(world: &mut World, selector: &str, myself: Option<Entity>) -> Option<DVec2> {
    let entity = resolve_entity(world, selector, myself)?;
    world
        .get::<Drawable>(entity)
        .map(|drawable| drawable.position)
}

/// Raw on-screen x of a target, without inverting its camera.
pub fn rendered_x(world: &mut World, selector: &str, myself: Option<Entity>) -> Option<f64> {
    rendered_position(world, selector, myself).map(|p| p.x)
}

/// Raw on-screen y of a target, without inverting its camera.
pub fn rendered_y(world: &mut World, selector: &str, myself: Option<Entity>) -> Option<f64> {
    rendered_position(world, selector, myself).map(|p| p.y)
}

pub fn background_color(world: &World) -> String {
    world.resource::<RenderState>().background_hex()
}
