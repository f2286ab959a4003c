//! Host-side updates of scene objects.
//!
//! These stand in for the host engine moving, turning or resizing a sprite:
//! the logical [`Target`] is updated first, then the world-space value is sent
//! through the interception layer so the rendered [`Drawable`] follows the
//! bound camera.
//!
//! [`Drawable`]: crate::components::drawable::Drawable

use bevy_ecs::prelude::*;
use glam::DVec2;

use crate::components::target::Target;
use crate::systems::interception::{
    update_drawable_direction, update_drawable_position, update_drawable_scale,
};
use crate::transform::cast_number;

/// Move a target to world position `(x, y)`.
pub fn set_target_xy(world: &mut World, entity: Entity, x: f64, y: f64) {
    let position = DVec2::new(cast_number(x), cast_number(y));
    let Some(mut target) = world.get_mut::<Target>(entity) else {
        return;
    };
    target.x = position.x;
    target.y = position.y;
    update_drawable_position(world, entity, position);
}

/// Point a target in `direction` degrees.
pub fn set_target_direction(world: &mut World, entity: Entity, direction: f64) {
    let direction = cast_number(direction);
    let Some(mut target) = world.get_mut::<Target>(entity) else {
        return;
    };
    target.direction = direction;
    update_drawable_direction(world, entity, direction);
}

/// Resize a target to `size` percent.
pub fn set_target_size(world: &mut World, entity: Entity, size: f64) {
    let size = cast_number(size);
    let Some(mut target) = world.get_mut::<Target>(entity) else {
        return;
    };
    target.size = size;
    let scale = target.scale();
    update_drawable_scale(world, entity, scale);
}
