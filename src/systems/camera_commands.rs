//! Command processing for script-driven camera operations.
//!
//! # Functions
//!
//! - [`process_camera_command`] – Apply a single [`CameraCmd`] to the world
//! - [`evaluate_report`] – Read the value named by a [`CameraReport`]

use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::commands::{CameraCmd, CameraReport, ReportValue};
use crate::systems::binding::{bind_target, camera_of, unbind_target};
use crate::systems::camera;

/// Apply `cmd` to the world. `myself` is the object `_myself_` resolves to.
pub fn process_camera_command(world: &mut World, cmd: CameraCmd, myself: Option<Entity>) {
    debug!("Camera command: {:?}", cmd);
    match cmd {
        CameraCmd::AddCamera { camera } => {
            camera::add_camera(world, &camera);
        }
        CameraCmd::RemoveCamera { camera } => {
            camera::remove_camera(world, &camera);
        }
        CameraCmd::Bind { target, camera } => bind_target(world, &target, &camera, myself),
        CameraCmd::Unbind { target, camera } => unbind_target(world, &target, &camera, myself),
        CameraCmd::SetPosition { camera, x, y } => camera::set_camera_xy(world, &camera, x, y),
        CameraCmd::Move { camera, steps } => camera::move_camera_steps(world, &camera, steps),
        CameraCmd::SetX { camera, x } => camera::set_camera_x(world, &camera, x),
        CameraCmd::ChangeX { camera, dx } => camera::change_camera_x(world, &camera, dx),
        CameraCmd::SetY { camera, y } => camera::set_camera_y(world, &camera, y),
        CameraCmd::ChangeY { camera, dy } => camera::change_camera_y(world, &camera, dy),
        CameraCmd::GoTo { camera, target } => camera::camera_go_to(world, &camera, &target, myself),
        CameraCmd::SetDirection { camera, direction } => {
            camera::set_camera_direction(world, &camera, direction)
        }
        CameraCmd::SetDirectionLegacy { camera, direction } => {
            camera::set_camera_direction_legacy(world, &camera, direction)
        }
        CameraCmd::TurnRight { camera, degrees } => {
            camera::turn_camera_right(world, &camera, degrees)
        }
        CameraCmd::TurnLeft { camera, degrees } => camera::turn_camera_left(world, &camera, degrees),
        CameraCmd::PointTowards { camera, target } => {
            camera::point_camera_towards(world, &camera, &target, myself)
        }
        CameraCmd::SetZoom { camera, percent } => camera::set_camera_zoom(world, &camera, percent),
        CameraCmd::ChangeZoom { camera, percent } => {
            camera::change_camera_zoom(world, &camera, percent)
        }
        CameraCmd::SetBackgroundColor { color } => camera::set_background_color(world, &color),
    }
}

/// Evaluate `report` against the world.
///
/// Rendered positions of unresolvable targets report an empty string.
pub fn evaluate_report(
    world: &mut World,
    report: &CameraReport,
    myself: Option<Entity>,
) -> ReportValue {
    let rendered = |value: Option<f64>| value.map_or(ReportValue::Text(String::new()), ReportValue::Number);
    match report {
        CameraReport::X { camera } => ReportValue::Number(camera::camera_x(world, camera)),
        CameraReport::Y { camera } => ReportValue::Number(camera::camera_y(world, camera)),
        CameraReport::Direction { camera } => {
            ReportValue::Number(camera::camera_direction(world, camera))
        }
        CameraReport::DirectionLegacy { camera } => {
            ReportValue::Number(camera::camera_direction_legacy(world, camera))
        }
        CameraReport::Zoom { camera } => ReportValue::Number(camera::camera_zoom(world, camera)),
        CameraReport::MouseX { camera } => {
            ReportValue::Number(camera::mouse_x_in_camera(world, camera))
        }
        CameraReport::MouseY { camera } => {
            ReportValue::Number(camera::mouse_y_in_camera(world, camera))
        }
        CameraReport::RenderedX { target } => rendered(camera::rendered_x(world, target, myself)),
        CameraReport::RenderedY { target } => rendered(camera::rendered_y(world, target, myself)),
        CameraReport::CameraOf { target } => ReportValue::Text(camera_of(world, target, myself)),
        CameraReport::BackgroundColor => ReportValue::Text(camera::background_color(world)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::cameraregistry::CameraRegistry;
    use crate::resources::renderstate::RenderState;

    fn world() -> World {
        let mut world = World::new();
        world.insert_resource(CameraRegistry::new());
        world.insert_resource(RenderState::default());
        world
    }

    #[test]
    fn commands_drive_reports() {
        let mut world = world();
        process_camera_command(
            &mut world,
            CameraCmd::SetPosition {
                camera: "default".into(),
                x: 10.0,
                y: 20.0,
            },
            None,
        );
        let x = evaluate_report(&mut world, &CameraReport::X { camera: "default".into() }, None);
        let y = evaluate_report(&mut world, &CameraReport::Y { camera: "default".into() }, None);
        assert_eq!(x, ReportValue::Number(10.0));
        assert_eq!(y, ReportValue::Number(20.0));
    }

    #[test]
    fn unknown_target_reports_empty_text() {
        let mut world = world();
        let value = evaluate_report(
            &mut world,
            &CameraReport::RenderedX {
                target: "Ghost".into(),
            },
            None,
        );
        assert_eq!(value, ReportValue::Text(String::new()));
    }

    #[test]
    fn background_colour_round_trips() {
        let mut world = world();
        process_camera_command(
            &mut world,
            CameraCmd::SetBackgroundColor {
                color: "#FF8000".into(),
            },
            None,
        );
        assert_eq!(
            evaluate_report(&mut world, &CameraReport::BackgroundColor, None),
            ReportValue::Text("#ff8000".into())
        );
    }
}
