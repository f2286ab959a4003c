//! Integration tests for camera binding, clone inheritance and camera removal.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test binding_integration
//! ```

use bevy_ecs::prelude::*;
use glam::DVec2;

use multicam2d::components::camerabinding::CameraBinding;
use multicam2d::components::drawable::Drawable;
use multicam2d::components::target::{CloneOf, Target};
use multicam2d::game::{load_project, setup_world};
use multicam2d::resources::cameraconfig::CameraConfig;
use multicam2d::resources::cameraregistry::{CameraRegistry, DEFAULT_CAMERA};
use multicam2d::resources::project::{LayerRecord, ProjectFile, TargetRecord};
use multicam2d::systems::binding::{bind_target, camera_of, spawn_clone, unbind_target};
use multicam2d::systems::bubble::{Bounds, bubble_bounds, bubble_native_size, prepare_drag};
use multicam2d::systems::camera::*;
use multicam2d::systems::objects::set_target_xy;
use multicam2d::systems::targets::{ALL, MYSELF, find_sprite};

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn approx_eq_vec(a: DVec2, b: DVec2) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn scene() -> (World, Entity) {
    let mut world = setup_world(CameraConfig::new());
    load_project(
        &mut world,
        ProjectFile {
            targets: vec![
                TargetRecord::layer("Stage", LayerRecord::Stage),
                TargetRecord::layer("pen", LayerRecord::Pen),
                TargetRecord::sprite("Cat", 10.0, 5.0),
                TargetRecord::sprite("Dog", -20.0, 0.0),
            ],
            ..Default::default()
        },
    );
    let cat = find_sprite(&mut world, "Cat").unwrap();
    (world, cat)
}

fn drawable(world: &World, entity: Entity) -> Drawable {
    world.get::<Drawable>(entity).unwrap().clone()
}

// =============================================================================
// Binding protocol
// =============================================================================

#[test]
fn rebind_recovers_the_world_transform() {
    let (mut world, cat) = scene();
    add_camera(&mut world, "A");
    bind_target(&mut world, MYSELF, "A", Some(cat));

    set_camera_xy(&mut world, "A", 30.0, 0.0);
    set_camera_zoom(&mut world, "A", 200.0);
    set_camera_direction(&mut world, "A", 45.0);
    let on_a = drawable(&world, cat);
    assert!(!approx_eq_vec(on_a.position, DVec2::new(10.0, 5.0)));

    unbind_target(&mut world, MYSELF, "A", Some(cat));
    let rendered = drawable(&world, cat);
    assert!(
        approx_eq_vec(rendered.position, DVec2::new(10.0, 5.0)),
        "got {:?}",
        rendered.position
    );
    assert!(approx_eq(rendered.direction, 90.0));
    assert!(approx_eq_vec(rendered.scale, DVec2::splat(100.0)));
    assert_eq!(camera_of(&mut world, MYSELF, Some(cat)), DEFAULT_CAMERA);
}

#[test]
fn binding_to_the_current_camera_is_a_no_op() {
    let (mut world, cat) = scene();
    add_camera(&mut world, "A");
    bind_target(&mut world, "Cat", "A", None);
    set_camera_xy(&mut world, "A", 5.0, 5.0);
    let before = world.get::<CameraBinding>(cat).unwrap().clone();

    bind_target(&mut world, "Cat", "A", None);
    assert_eq!(world.get::<CameraBinding>(cat).unwrap(), &before);
}

#[test]
fn binding_to_an_unknown_camera_is_ignored() {
    let (mut world, cat) = scene();
    bind_target(&mut world, "Cat", "missing", None);
    assert_eq!(camera_of(&mut world, "Cat", None), DEFAULT_CAMERA);
    assert!(world.get::<CameraBinding>(cat).unwrap().is_bound_to(DEFAULT_CAMERA));
}

#[test]
fn bind_all_objects_moves_every_drawable_and_layer() {
    let (mut world, _) = scene();
    add_camera(&mut world, "top");
    bind_target(&mut world, ALL, "top", None);

    let mut query = world.query::<&CameraBinding>();
    assert!(query.iter(&world).all(|binding| binding.is_bound_to("top")));
    assert_eq!(camera_of(&mut world, "_pen_", None), "top");
    assert_eq!(camera_of(&mut world, "_stage_", None), "top");
}

#[test]
fn unknown_targets_report_no_camera() {
    let (mut world, _) = scene();
    assert_eq!(camera_of(&mut world, "Ghost", None), "");
    assert_eq!(camera_of(&mut world, MYSELF, None), "");
}

#[test]
fn host_moves_are_projected_through_the_bound_camera() {
    let (mut world, cat) = scene();
    add_camera(&mut world, "A");
    bind_target(&mut world, "Cat", "A", None);
    set_camera_xy(&mut world, "A", 100.0, 0.0);

    set_target_xy(&mut world, cat, 150.0, 20.0);
    assert!(approx_eq_vec(drawable(&world, cat).position, DVec2::new(50.0, 20.0)));
    let target = world.get::<Target>(cat).unwrap();
    assert_eq!((target.x, target.y), (150.0, 20.0));
}

// =============================================================================
// Camera lifecycle
// =============================================================================

#[test]
fn default_camera_cannot_be_removed() {
    let (mut world, _) = scene();
    assert!(!remove_camera(&mut world, DEFAULT_CAMERA));
    assert!(world.resource::<CameraRegistry>().contains(DEFAULT_CAMERA));
}

#[test]
fn duplicate_and_empty_camera_names_are_rejected() {
    let (mut world, _) = scene();
    assert!(add_camera(&mut world, "top"));
    set_camera_xy(&mut world, "top", 7.0, 0.0);
    assert!(!add_camera(&mut world, "top"));
    assert!(!add_camera(&mut world, ""));
    assert_eq!(camera_x(&world, "top"), 7.0);
}

#[test]
fn removing_a_camera_rebinds_its_drawables_to_default() {
    let (mut world, cat) = scene();
    add_camera(&mut world, "top");
    bind_target(&mut world, "Cat", "top", None);
    set_camera_xy(&mut world, "top", 50.0, 0.0);
    assert!(approx_eq_vec(drawable(&world, cat).position, DVec2::new(-40.0, 5.0)));

    assert!(remove_camera(&mut world, "top"));
    assert!(!world.resource::<CameraRegistry>().contains("top"));
    assert_eq!(camera_of(&mut world, "Cat", None), DEFAULT_CAMERA);
    assert!(approx_eq_vec(drawable(&world, cat).position, DVec2::new(10.0, 5.0)));
}

// =============================================================================
// Clone inheritance
// =============================================================================

#[test]
fn clone_inherits_the_camera_of_its_source() {
    let (mut world, cat) = scene();
    add_camera(&mut world, "B");
    bind_target(&mut world, "Cat", "B", None);
    set_camera_xy(&mut world, "B", 50.0, 0.0);

    let clone = spawn_clone(&mut world, cat).unwrap();
    assert_eq!(camera_of(&mut world, MYSELF, Some(clone)), "B");
    assert_eq!(world.get::<CloneOf>(clone), Some(&CloneOf(cat)));
    assert!(!world.get::<Target>(clone).unwrap().is_original);
    assert!(approx_eq_vec(
        drawable(&world, clone).position,
        drawable(&world, cat).position
    ));

    // later changes to the source do not follow the clone
    unbind_target(&mut world, "Cat", "B", None);
    assert_eq!(camera_of(&mut world, MYSELF, Some(clone)), "B");
}

#[test]
fn clone_of_a_clone_inherits_from_the_original_sprite() {
    let (mut world, cat) = scene();
    add_camera(&mut world, "B");
    let first = spawn_clone(&mut world, cat).unwrap();
    bind_target(&mut world, MYSELF, "B", Some(first));

    let second = spawn_clone(&mut world, first).unwrap();
    assert_eq!(camera_of(&mut world, MYSELF, Some(second)), DEFAULT_CAMERA);
    assert_eq!(world.get::<CloneOf>(second), Some(&CloneOf(first)));

    bind_target(&mut world, "Cat", "B", None);
    let third = spawn_clone(&mut world, second).unwrap();
    assert_eq!(camera_of(&mut world, MYSELF, Some(third)), "B");
}

#[test]
fn layers_cannot_be_cloned() {
    let (mut world, _) = scene();
    let stage = multicam2d::systems::targets::resolve_entity(&mut world, "_stage_", None).unwrap();
    assert!(spawn_clone(&mut world, stage).is_none());
}

// =============================================================================
// Bubbles and dragging
// =============================================================================

#[test]
fn bubble_bounds_are_reported_in_world_space() {
    let (mut world, cat) = scene();
    set_camera_xy(&mut world, DEFAULT_CAMERA, 100.0, 0.0);
    let bounds = bubble_bounds(
        &world,
        cat,
        Bounds {
            left: -90.0,
            right: -70.0,
            top: 30.0,
            bottom: 10.0,
        },
    );
    assert!(approx_eq(bounds.left, 10.0));
    assert!(approx_eq(bounds.right, 30.0));
    assert!(approx_eq(bounds.top, 30.0));
    assert!(approx_eq(bounds.bottom, 10.0));
}

#[test]
fn bubble_limits_open_up_when_the_camera_leaves_the_stage() {
    let (mut world, cat) = scene();
    assert_eq!(bubble_native_size(&world, cat), DVec2::new(480.0, 360.0));
    set_camera_xy(&mut world, DEFAULT_CAMERA, 0.0, 400.0);
    assert_eq!(bubble_native_size(&world, cat), DVec2::INFINITY);
}

#[test]
fn drag_drops_the_target_where_the_host_says() {
    let (mut world, cat) = scene();
    set_camera_xy(&mut world, DEFAULT_CAMERA, 10.0, 0.0);
    prepare_drag(&mut world, cat);
    assert_eq!(
        world.get::<CameraBinding>(cat).unwrap().snapshot.position,
        DVec2::ZERO
    );

    set_target_xy(&mut world, cat, 40.0, 40.0);
    assert!(approx_eq_vec(drawable(&world, cat).position, DVec2::new(30.0, 40.0)));
}
