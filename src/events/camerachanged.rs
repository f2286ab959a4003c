//! Camera change event and the refresh pass observer.
//!
//! Every camera mutator in [`crate::systems::camera`] updates the
//! [`CameraRegistry`] and then triggers a [`CameraChangedEvent`]. The observer
//! re-projects every drawable bound to that camera and requests a single
//! redraw. `World::trigger` runs the observer before returning, so no drawable
//! of the changed camera is drawn with its stale state. Cameras changed from
//! inside the observer (through deferred commands) are refreshed after the
//! current pass completes, never interleaved with it.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::camerabinding::CameraBinding;
use crate::components::drawable::Drawable;
use crate::resources::cameraregistry::CameraRegistry;
use crate::resources::renderstate::RenderState;
use crate::systems::interception::refresh_drawable;

/// Emitted after the state of `camera` changed.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct CameraChangedEvent {
    /// Name of the camera that changed.
    pub camera: String,
}

/// Observer that re-projects all drawables bound to the changed camera.
///
/// - Unknown cameras are ignored.
/// - Drawables bound to other cameras are left untouched.
/// - A redraw is requested once the whole pass has completed.
pub fn camera_changed_observer(
    trigger: On<CameraChangedEvent>,
    registry: Res<CameraRegistry>,
    mut render: ResMut<RenderState>,
    mut drawables: Query<(&mut Drawable, &mut CameraBinding)>,
) {
    let name = trigger.event().camera.as_str();
    let Some(camera) = registry.get(name).copied() else {
        debug!("CameraChangedEvent for unknown camera '{}'", name);
        return;
    };

    let mut refreshed = 0usize;
    for (mut drawable, mut binding) in drawables.iter_mut() {
        if !binding.is_bound_to(name) {
            continue;
        }
        if refresh_drawable(&mut drawable, &mut binding, &camera) {
            render.dirty = true;
        }
        refreshed += 1;
    }
    debug!("Camera '{}' refreshed {} drawable(s)", name, refreshed);
    render.request_redraw();
}
