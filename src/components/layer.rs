//! Special drawable layers that are not ordinary sprites.

use bevy_ecs::prelude::Component;

/// Identifies the stage and host-provided layers so target selectors can
/// find them.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub enum Layer {
    /// The background layer.
    Stage,
    /// The pen drawing layer.
    Pen,
    /// The video sensing layer.
    Video,
    /// A layer registered by another extension under a display name.
    Custom(String),
}
