//! Logical state of scene objects (sprites and the stage).
//!
//! A [`Target`] is what user logic reads and writes: the object's world-space
//! position, direction and size. Its rendered counterpart lives in the
//! [`Drawable`] on the same entity and is derived through the bound camera.

use bevy_ecs::prelude::{Component, Entity};
use glam::DVec2;

use crate::components::drawable::Drawable;

/// A named scene object with world-space position, direction and size.
#[derive(Component, Clone, Debug, PartialEq)]
#[require(Drawable)]
pub struct Target {
    /// Sprite name, shared by an original and all of its clones.
    pub name: String,
    /// World-space x.
    pub x: f64,
    /// World-space y.
    pub y: f64,
    /// Direction in degrees (90 = pointing right).
    pub direction: f64,
    /// Size in percent.
    pub size: f64,
    /// `false` for clones.
    pub is_original: bool,
}

impl Target {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            x: 0.0,
            y: 0.0,
            direction: 90.0,
            size: 100.0,
            is_original: true,
        }
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_direction(mut self, direction: f64) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// World-space position as a vector.
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// World-space scale handed to the renderer.
    pub fn scale(&self) -> DVec2 {
        DVec2::splat(self.size)
    }
}

/// Marks a clone and the target it was copied from.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CloneOf(pub Entity);
