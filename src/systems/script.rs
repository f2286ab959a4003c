//! JSON command scripts.
//!
//! A script is a JSON array of steps. Camera commands and reports are wrapped
//! under `cmd`/`report`; the remaining steps stand in for what the host would
//! do (moving the mouse, moving sprites, cloning, dragging):
//!
//! ```json
//! [
//!   { "cmd": { "op": "add_camera", "camera": "top" } },
//!   { "cmd": { "op": "bind", "target": "Cat", "camera": "top" } },
//!   { "move_target": { "target": "Cat", "x": 10, "y": 0 } },
//!   { "report": { "op": "rendered_x", "target": "Cat" } }
//! ]
//! ```
//!
//! Target fields accept selectors; `_myself_` is the acting object passed to
//! [`run_script`], which a `clone` step with `act_as` replaces by the clone.

use std::path::Path;

use bevy_ecs::prelude::*;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::ProjectError;
use crate::resources::commands::{CameraCmd, CameraReport, ReportValue};
use crate::resources::mouse::MouseState;
use crate::systems::binding::spawn_clone;
use crate::systems::bubble::prepare_drag;
use crate::systems::camera_commands::{evaluate_report, process_camera_command};
use crate::systems::objects::{set_target_direction, set_target_size, set_target_xy};
use crate::systems::targets::resolve_entity;

/// One step of a command script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptStep {
    Cmd(CameraCmd),
    Report(CameraReport),
    SetMouse { x: f64, y: f64 },
    MoveTarget { target: String, x: f64, y: f64 },
    TurnTarget { target: String, direction: f64 },
    ResizeTarget { target: String, size: f64 },
    /// Clone a sprite; with `act_as` the clone becomes the acting object.
    Clone {
        target: String,
        #[serde(default)]
        act_as: bool,
    },
    /// A user drag that drops the target at `(x, y)`.
    Drag { target: String, x: f64, y: f64 },
}

/// A report evaluated while running a script.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub report: CameraReport,
    pub value: ReportValue,
}

/// Parse a script from JSON.
pub fn parse_script(json: &str) -> Result<Vec<ScriptStep>, ProjectError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a script file.
pub fn load_script(path: &Path) -> Result<Vec<ScriptStep>, ProjectError> {
    let json = std::fs::read_to_string(path).map_err(|source| ProjectError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&json)
}

fn with_target(
    world: &mut World,
    selector: &str,
    myself: Option<Entity>,
    apply: impl FnOnce(&mut World, Entity),
) {
    match resolve_entity(world, selector, myself) {
        Some(entity) => apply(world, entity),
        None => debug!("Script step skipped: unknown target '{}'", selector),
    }
}

/// Run `steps` in order and collect the value of every report step.
///
/// `myself` is the initial acting object.
pub fn run_script(
    world: &mut World,
    steps: Vec<ScriptStep>,
    myself: Option<Entity>,
) -> Vec<ReportLine> {
    let mut myself = myself;
    let mut reports = Vec::new();
    for step in steps {
        match step {
            ScriptStep::Cmd(cmd) => process_camera_command(world, cmd, myself),
            ScriptStep::Report(report) => {
                let value = evaluate_report(world, &report, myself);
                reports.push(ReportLine { report, value });
            }
            ScriptStep::SetMouse { x, y } => {
                world.insert_resource(MouseState { x, y });
            }
            ScriptStep::MoveTarget { target, x, y } => {
                with_target(world, &target, myself, |world, entity| {
                    set_target_xy(world, entity, x, y)
                });
            }
            ScriptStep::TurnTarget { target, direction } => {
                with_target(world, &target, myself, |world, entity| {
                    set_target_direction(world, entity, direction)
                });
            }
            ScriptStep::ResizeTarget { target, size } => {
                with_target(world, &target, myself, |world, entity| {
                    set_target_size(world, entity, size)
                });
            }
            ScriptStep::Clone { target, act_as } => {
                let Some(source) = resolve_entity(world, &target, myself) else {
                    debug!("Script step skipped: unknown target '{}'", target);
                    continue;
                };
                match spawn_clone(world, source) {
                    Some(clone) if act_as => myself = Some(clone),
                    Some(_) => {}
                    None => warn!("Target '{}' cannot be cloned", target),
                }
            }
            ScriptStep::Drag { target, x, y } => {
                with_target(world, &target, myself, |world, entity| {
                    prepare_drag(world, entity);
                    set_target_xy(world, entity, x, y);
                });
            }
        }
    }
    reports
}
