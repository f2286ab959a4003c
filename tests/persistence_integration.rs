//! Integration tests for project save/reload, camera persistence and scripts.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test persistence_integration
//! ```

use bevy_ecs::prelude::*;

use multicam2d::components::camerabinding::CameraBinding;
use multicam2d::components::persistent::Persistent;
use multicam2d::game::{capture_project, load_project, save_project, setup_world, teardown_scene};
use multicam2d::resources::cameraconfig::CameraConfig;
use multicam2d::resources::cameraregistry::{CameraRegistry, DEFAULT_CAMERA};
use multicam2d::resources::commands::{CameraReport, ReportValue};
use multicam2d::resources::extensionstorage::{CameraRecord, ExtensionStorage};
use multicam2d::resources::project::{LayerRecord, ProjectFile, TargetRecord};
use multicam2d::systems::binding::bind_target;
use multicam2d::systems::camera::{add_camera, remove_camera, set_camera_xy, set_camera_zoom};
use multicam2d::systems::script::{load_script, parse_script, run_script};
use multicam2d::systems::targets::find_sprite;
use multicam2d::transform::CameraState;

fn project() -> ProjectFile {
    ProjectFile {
        targets: vec![
            TargetRecord::layer("Stage", LayerRecord::Stage),
            TargetRecord::sprite("Cat", 10.0, 5.0),
        ],
        ..Default::default()
    }
}

fn stored_names(world: &World) -> Vec<String> {
    world
        .resource::<ExtensionStorage>()
        .camera_record("camera")
        .map(|record| record.cams)
        .unwrap_or_default()
}

// =============================================================================
// Camera name record
// =============================================================================

#[test]
fn add_and_remove_rewrite_the_stored_record() {
    let mut world = setup_world(CameraConfig::new());
    load_project(&mut world, project());
    add_camera(&mut world, "top");
    add_camera(&mut world, "side");
    assert_eq!(stored_names(&world), vec!["default", "side", "top"]);

    remove_camera(&mut world, "side");
    assert_eq!(stored_names(&world), vec!["default", "top"]);
}

#[test]
fn record_uses_the_configured_extension_id() {
    let mut config = CameraConfig::new();
    config.extension_id = "SPcamera".to_string();
    let mut world = setup_world(config);
    add_camera(&mut world, "top");
    let storage = world.resource::<ExtensionStorage>();
    assert!(storage.camera_record("SPcamera").is_some());
    assert!(storage.camera_record("camera").is_none());
}

// =============================================================================
// Save / reload
// =============================================================================

#[test]
fn save_and_reload_restores_cameras_at_identity() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.json");

    let mut world = setup_world(CameraConfig::new());
    load_project(&mut world, project());
    add_camera(&mut world, "top");
    bind_target(&mut world, "Cat", "top", None);
    set_camera_xy(&mut world, "top", 40.0, -30.0);
    set_camera_zoom(&mut world, "top", 300.0);
    save_project(&mut world, &path).unwrap();

    let mut reloaded = setup_world(CameraConfig::new());
    load_project(&mut reloaded, ProjectFile::read(&path).unwrap());

    let registry = reloaded.resource::<CameraRegistry>();
    assert_eq!(registry.names(), vec!["default", "top"]);
    assert_eq!(registry.get("top"), Some(&CameraState::IDENTITY));

    let mut query = reloaded.query::<&CameraBinding>();
    assert!(query.iter(&reloaded).all(|b| b.is_bound_to(DEFAULT_CAMERA)));
    let cat = find_sprite(&mut reloaded, "Cat").unwrap();
    let target = reloaded.get::<multicam2d::components::target::Target>(cat).unwrap();
    assert_eq!((target.x, target.y), (10.0, 5.0));
}

#[test]
fn reload_in_the_same_world_resets_camera_state() {
    let mut world = setup_world(CameraConfig::new());
    load_project(&mut world, project());
    add_camera(&mut world, "top");
    set_camera_xy(&mut world, "top", 40.0, 0.0);

    let saved = capture_project(&mut world);
    load_project(&mut world, saved);
    let registry = world.resource::<CameraRegistry>();
    assert_eq!(registry.get("top"), Some(&CameraState::IDENTITY));
    assert_eq!(registry.get(DEFAULT_CAMERA), Some(&CameraState::IDENTITY));
}

#[test]
fn project_without_a_record_has_only_default() {
    let mut world = setup_world(CameraConfig::new());
    let mut storage = ExtensionStorage::default();
    storage.set_camera_record(
        "other",
        &CameraRecord {
            cams: vec!["x".into()],
        },
    );
    load_project(
        &mut world,
        ProjectFile {
            extension_storage: storage,
            ..project()
        },
    );
    assert_eq!(world.resource::<CameraRegistry>().names(), vec!["default"]);
}

#[test]
fn teardown_keeps_persistent_entities() {
    let mut world = setup_world(CameraConfig::new());
    load_project(&mut world, project());
    add_camera(&mut world, "top");
    let observers_before = world.query::<&Persistent>().iter(&world).count();

    teardown_scene(&mut world);
    assert_eq!(world.query::<&CameraBinding>().iter(&world).count(), 0);
    assert_eq!(world.query::<&Persistent>().iter(&world).count(), observers_before);
    assert_eq!(world.resource::<CameraRegistry>().names(), vec!["default"]);
}

#[test]
fn captured_project_skips_clones() {
    let mut world = setup_world(CameraConfig::new());
    load_project(&mut world, project());
    let cat = find_sprite(&mut world, "Cat").unwrap();
    multicam2d::systems::binding::spawn_clone(&mut world, cat).unwrap();

    let names: Vec<String> = capture_project(&mut world)
        .targets
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, vec!["Stage", "Cat"]);
}

// =============================================================================
// Config and scripts
// =============================================================================

#[test]
fn config_round_trips_through_ini() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("camera.ini");

    let mut config = CameraConfig::with_path(&path);
    config.stage_width = 640;
    config.extension_id = "SPcamera".into();
    config.save_to_file().unwrap();

    let mut loaded = CameraConfig::with_path(&path);
    loaded.load_from_file().unwrap();
    assert_eq!(loaded.stage_size(), (640, 360));
    assert_eq!(loaded.extension_id, "SPcamera");
}

#[test]
fn script_reports_follow_commands() {
    let mut world = setup_world(CameraConfig::new());
    load_project(&mut world, project());
    let cat = find_sprite(&mut world, "Cat");

    let steps = parse_script(
        r#"[
            { "cmd": { "op": "add_camera", "camera": "top" } },
            { "cmd": { "op": "bind", "target": "_myself_", "camera": "top" } },
            { "cmd": { "op": "set_zoom", "camera": "top", "percent": 200 } },
            { "report": { "op": "zoom", "camera": "top" } },
            { "report": { "op": "rendered_x", "target": "Cat" } },
            { "clone": { "target": "_myself_", "act_as": true } },
            { "report": { "op": "camera_of", "target": "_myself_" } },
            { "set_mouse": { "x": 10, "y": 0 } },
            { "report": { "op": "mouse_x", "camera": "top" } }
        ]"#,
    )
    .unwrap();
    let values: Vec<ReportValue> = run_script(&mut world, steps, cat)
        .into_iter()
        .map(|line| line.value)
        .collect();
    assert_eq!(
        values,
        vec![
            ReportValue::Number(200.0),
            ReportValue::Number(20.0),
            ReportValue::Text("top".into()),
            ReportValue::Number(20.0),
        ]
    );
}

#[test]
fn script_files_are_read_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("steps.json");
    std::fs::write(&path, r#"[{ "report": { "op": "background_color" } }]"#).unwrap();

    let steps = load_script(&path).unwrap();
    let mut world = setup_world(CameraConfig::new());
    let lines = run_script(&mut world, steps, None);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].report, CameraReport::BackgroundColor);
    assert_eq!(lines[0].value, ReportValue::Text("#ffffff".into()));

    assert!(load_script(&dir.path().join("missing.json")).is_err());
}
