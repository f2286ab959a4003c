//! Renderer-side representation of a visual object.
//!
//! A [`Drawable`] holds the transform the renderer actually draws: the
//! camera-relative (on-screen) position, direction and scale. Its raw
//! `update_*` methods are the renderer's normal update path; engine code
//! should go through [`crate::systems::interception`] instead so every value
//! is projected through the drawable's bound camera first.

use bevy_ecs::prelude::Component;
use glam::DVec2;

use crate::components::camerabinding::CameraBinding;

/// On-screen transform of a renderable object.
///
/// Inserting a `Drawable` also inserts a default [`CameraBinding`], so every
/// drawable starts out governed by the `"default"` camera.
#[derive(Component, Clone, Debug)]
#[require(CameraBinding)]
pub struct Drawable {
    /// Rendered position, camera-relative.
    pub position: DVec2,
    /// Rendered direction in degrees (90 = pointing right).
    pub direction: f64,
    /// Rendered scale in percent per axis.
    pub scale: DVec2,
    /// The renderer must rebuild this drawable's transform matrix.
    pub transform_dirty: bool,
    /// The renderer must recompute the skin's scaled size and rotation center.
    pub skin_scale_dirty: bool,
}

impl Default for Drawable {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            direction: 90.0,
            scale: DVec2::splat(100.0),
            transform_dirty: false,
            skin_scale_dirty: false,
        }
    }
}

impl Drawable {
    /// Set the rendered position. Returns `true` if the value changed.
    pub fn update_position(&mut self, position: DVec2) -> bool {
        if self.position == position {
            return false;
        }
        self.position = position;
        self.transform_dirty = true;
        true
    }

    /// Set the rendered direction. Returns `true` if the value changed.
    pub fn update_direction(&mut self, direction: f64) -> bool {
        if self.direction == direction {
            return false;
        }
        self.direction = direction;
        self.transform_dirty = true;
        true
    }

    /// Set the rendered scale. Returns `true` if the value changed.
    pub fn update_scale(&mut self, scale: DVec2) -> bool {
        if self.scale == scale {
            return false;
        }
        self.scale = scale;
        self.transform_dirty = true;
        self.skin_scale_dirty = true;
        true
    }

    /// Flag the transform and skin as stale without changing any value.
    pub fn set_transform_dirty(&mut self) {
        self.transform_dirty = true;
        self.skin_scale_dirty = true;
    }
}
