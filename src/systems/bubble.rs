//! Speech-bubble placement and drag cooperation.
//!
//! Bubble bounds come from the renderer in camera space; they are mapped back
//! to world space with the drawable's snapshot so bubble placement happens
//! where user logic thinks the sprite is.

use bevy_ecs::prelude::*;
use glam::DVec2;
use log::debug;

use crate::components::camerabinding::CameraBinding;
use crate::resources::cameraconfig::CameraConfig;
use crate::systems::interception::bound_camera_state;
use crate::transform;

/// Axis-aligned rectangle in stage coordinates (+y up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Map renderer-space bubble bounds of `entity` back to world space.
///
/// Bounds of entities without a binding are returned unchanged.
pub fn bubble_bounds(world: &World, entity: Entity, bounds: Bounds) -> Bounds {
    let Some(binding) = world.get::<CameraBinding>(entity) else {
        return bounds;
    };
    let snapshot = &binding.snapshot;
    let top_left = transform::inverse(DVec2::new(bounds.left, bounds.top), snapshot);
    let bottom_right = transform::inverse(DVec2::new(bounds.right, bounds.bottom), snapshot);
    Bounds {
        left: top_left.x,
        top: top_left.y,
        right: bottom_right.x,
        bottom: bottom_right.y,
    }
}

/// Size limit used while positioning a speech bubble for `entity`.
///
/// Unbounded while the entity's camera is offset further than the stage
/// width or height, so bubbles are never clamped onto the visible stage.
pub fn bubble_native_size(world: &World, entity: Entity) -> DVec2 {
    let (width, height) = world
        .get_resource::<CameraConfig>()
        .map(CameraConfig::stage_size)
        .unwrap_or_else(|| CameraConfig::new().stage_size());
    let stage = DVec2::new(f64::from(width), f64::from(height));

    let Some(camera) = bound_camera_state(world, entity) else {
        return stage;
    };
    if camera.position.x.abs() > stage.x || camera.position.y.abs() > stage.y {
        DVec2::INFINITY
    } else {
        stage
    }
}

/// Prepare a drawable for a host drag update.
///
/// The drag position is already in screen space, so the pending refresh and
/// the snapshot offset are cleared before the host writes it.
pub fn prepare_drag(world: &mut World, entity: Entity) {
    if let Some(mut binding) = world.get_mut::<CameraBinding>(entity) {
        binding.refreshing = false;
        binding.snapshot.position = DVec2::ZERO;
        debug!("Prepared {:?} for drag", entity);
    }
}
