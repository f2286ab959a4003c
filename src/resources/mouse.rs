//! Mouse position as reported by the host input system.

use bevy_ecs::prelude::Resource;
use glam::DVec2;

/// Stage-space mouse coordinates (origin at the stage center, +y up).
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f64,
    pub y: f64,
}

impl MouseState {
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}
