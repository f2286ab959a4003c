//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component are not despawned by
//! [`crate::game::teardown_scene`]. Observers are spawned with it so they
//! survive project reloads.

use bevy_ecs::prelude::Component;

/// Tag component used to mark entities that should survive scene teardown.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
