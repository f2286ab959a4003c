//! Interception of drawable position, direction and scale updates.
//!
//! Every update that reaches a [`Drawable`] is treated as a world-space value
//! and projected through the drawable's bound camera before it is written.
//! During a camera refresh pass ([`CameraBinding::refreshing`] set) the
//! incoming value is the drawable's current rendered value instead; it is first
//! inverted with the drawable's snapshot, then projected through the camera's
//! new state. Re-projecting this way never accumulates drift.
//!
//! The channel functions must run in the order position, direction, scale:
//! inverting a position uses the snapshot's zoom and rotation, which the
//! later channels overwrite.
//!
//! # Related
//!
//! - [`crate::events::camerachanged`] – runs [`refresh_drawable`] for every bound drawable
//! - [`crate::systems::binding`] – pushes recovered world values through this layer

use bevy_ecs::prelude::*;
use glam::DVec2;
use log::{debug, warn};

use crate::components::camerabinding::CameraBinding;
use crate::components::drawable::Drawable;
use crate::resources::cameraregistry::CameraRegistry;
use crate::resources::renderstate::RenderState;
use crate::transform::{self, CameraState, MIN_SCALE};

/// Project a position update through `camera` and write it to `drawable`.
///
/// Returns `true` if the renderer must redraw.
pub fn intercept_position(
    drawable: &mut Drawable,
    binding: &mut CameraBinding,
    camera: &CameraState,
    position: DVec2,
) -> bool {
    let world = if binding.refreshing {
        transform::inverse(position, &binding.snapshot)
    } else {
        position
    };

    let camera_moved = binding.snapshot.position != camera.position;
    binding.snapshot.position = camera.position;
    let screen = transform::forward(world, camera);

    if binding.refreshing {
        drawable.position = screen;
        if camera_moved {
            drawable.set_transform_dirty();
        }
        camera_moved
    } else {
        drawable.update_position(screen)
    }
}

/// Project a direction update through `camera` and write it to `drawable`.
///
/// Returns `true` if the renderer must redraw.
pub fn intercept_direction(
    drawable: &mut Drawable,
    binding: &mut CameraBinding,
    camera: &CameraState,
    direction: f64,
) -> bool {
    let mut direction = direction;
    if binding.refreshing {
        direction += binding.snapshot.rotation;
    }
    binding.snapshot.rotation = camera.rotation;
    drawable.update_direction(direction - camera.rotation)
}

/// Project a scale update through `camera` and write it to `drawable`.
///
/// Neither a zero zoom nor a zero scale component ever reaches the renderer:
/// both are replaced with a signed [`MIN_SCALE`].
///
/// Returns `true` if the renderer must redraw.
pub fn intercept_scale(
    drawable: &mut Drawable,
    binding: &mut CameraBinding,
    camera: &CameraState,
    scale: DVec2,
) -> bool {
    let mut scale = scale;
    let mut zoom_changed = false;
    if binding.refreshing {
        let previous_zoom = transform::safe_zoom(binding.snapshot.zoom);
        scale /= previous_zoom;
        zoom_changed = previous_zoom != camera.zoom;
    }

    let zoom = transform::safe_zoom(camera.zoom);
    binding.snapshot.zoom = zoom;
    scale *= zoom;
    if scale.x == 0.0 {
        scale.x = MIN_SCALE * zoom.signum();
    }
    if scale.y == 0.0 {
        scale.y = MIN_SCALE * zoom.signum();
    }

    let changed = drawable.update_scale(scale);
    if zoom_changed {
        drawable.set_transform_dirty();
    }
    changed || zoom_changed
}

/// Re-project a drawable's rendered transform after its camera changed.
///
/// Returns `true` if the renderer must redraw.
pub fn refresh_drawable(
    drawable: &mut Drawable,
    binding: &mut CameraBinding,
    camera: &CameraState,
) -> bool {
    if binding.refreshing {
        warn!("Drawable is already being refreshed; skipping nested refresh");
        return false;
    }
    binding.refreshing = true;
    let position = drawable.position;
    let direction = drawable.direction;
    let scale = drawable.scale;
    let mut redraw = intercept_position(drawable, binding, camera, position);
    redraw |= intercept_direction(drawable, binding, camera, direction);
    redraw |= intercept_scale(drawable, binding, camera, scale);
    binding.refreshing = false;
    redraw
}

/// State of the camera governing `entity`.
///
/// Returns `None` if `entity` is not a drawable. A binding that names a camera
/// missing from the registry projects through the identity camera.
pub fn bound_camera_state(world: &World, entity: Entity) -> Option<CameraState> {
    let binding = world.get::<CameraBinding>(entity)?;
    let registry = world.get_resource::<CameraRegistry>()?;
    match registry.get(&binding.camera) {
        Some(camera) => Some(*camera),
        None => {
            warn!(
                "Drawable {:?} is bound to unknown camera '{}'",
                entity, binding.camera
            );
            Some(CameraState::IDENTITY)
        }
    }
}

fn with_drawable(
    world: &mut World,
    entity: Entity,
    apply: impl FnOnce(&mut Drawable, &mut CameraBinding, &CameraState) -> bool,
) {
    let Some(camera) = bound_camera_state(world, entity) else {
        debug!("Ignoring transform update for non-drawable {:?}", entity);
        return;
    };
    let redraw = {
        let mut query = world.query::<(&mut Drawable, &mut CameraBinding)>();
        let Ok((mut drawable, mut binding)) = query.get_mut(world, entity) else {
            return;
        };
        apply(&mut *drawable, &mut *binding, &camera)
    };
    if redraw {
        if let Some(mut render) = world.get_resource_mut::<RenderState>() {
            render.dirty = true;
        }
    }
}

/// Update a drawable's world-space position through its camera.
pub fn update_drawable_position(world: &mut World, entity: Entity, position: DVec2) {
    with_drawable(world, entity, |drawable, binding, camera| {
        intercept_position(drawable, binding, camera, position)
    });
}

/// Update a drawable's world-space direction through its camera.
pub fn update_drawable_direction(world: &mut World, entity: Entity, direction: f64) {
    with_drawable(world, entity, |drawable, binding, camera| {
        intercept_direction(drawable, binding, camera, direction)
    });
}

/// Update a drawable's world-space scale through its camera.
pub fn update_drawable_scale(world: &mut World, entity: Entity, scale: DVec2) {
    with_drawable(world, entity, |drawable, binding, camera| {
        intercept_scale(drawable, binding, camera, scale)
    });
}
