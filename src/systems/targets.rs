//! Target selectors and menus.
//!
//! Operations that act on "a target" accept a selector string:
//!
//! | selector              | resolves to                                  |
//! |-----------------------|----------------------------------------------|
//! | `_myself_`            | the object running the operation             |
//! | `_all_`               | every drawable in the scene                  |
//! | `_stage_`             | the background layer                         |
//! | `_pen_` / `_video_`   | the pen / video layer, if present            |
//! | `<name>=custom-layer` | a layer registered under `<name>`            |
//! | anything else         | the original sprite with that name           |
//!
//! Resolution failures yield `None`; callers skip silently.

use bevy_ecs::prelude::*;

use crate::components::drawable::Drawable;
use crate::components::layer::Layer;
use crate::components::target::Target;
use crate::resources::cameraregistry::CameraRegistry;

pub const MYSELF: &str = "_myself_";
pub const ALL: &str = "_all_";
pub const STAGE: &str = "_stage_";
pub const PEN: &str = "_pen_";
pub const VIDEO: &str = "_video_";
const CUSTOM_LAYER_SUFFIX: &str = "=custom-layer";

/// Parsed form of a selector string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSelector {
    Myself,
    All,
    Stage,
    Pen,
    Video,
    CustomLayer(String),
    Named(String),
}

impl TargetSelector {
    pub fn parse(selector: &str) -> Self {
        match selector {
            MYSELF => Self::Myself,
            ALL => Self::All,
            STAGE => Self::Stage,
            PEN => Self::Pen,
            VIDEO => Self::Video,
            other => match other.strip_suffix(CUSTOM_LAYER_SUFFIX) {
                Some(name) => Self::CustomLayer(name.to_string()),
                None => Self::Named(other.to_string()),
            },
        }
    }

    /// The selector string this parses from.
    pub fn value(&self) -> String {
        match self {
            Self::Myself => MYSELF.to_string(),
            Self::All => ALL.to_string(),
            Self::Stage => STAGE.to_string(),
            Self::Pen => PEN.to_string(),
            Self::Video => VIDEO.to_string(),
            Self::CustomLayer(name) => format!("{name}{CUSTOM_LAYER_SUFFIX}"),
            Self::Named(name) => name.clone(),
        }
    }
}

/// Result of resolving a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTarget {
    /// Every drawable in the scene.
    All,
    /// A single drawable entity.
    Entity(Entity),
}

/// Resolve `selector` against the scene. `myself` is the acting object.
pub fn resolve_target(
    world: &mut World,
    selector: &str,
    myself: Option<Entity>,
) -> Option<ResolvedTarget> {
    let entity = match TargetSelector::parse(selector) {
        TargetSelector::All => return Some(ResolvedTarget::All),
        TargetSelector::Myself => myself.filter(|e| world.get::<Drawable>(*e).is_some()),
        TargetSelector::Stage => find_layer(world, |layer| *layer == Layer::Stage),
        TargetSelector::Pen => find_layer(world, |layer| *layer == Layer::Pen),
        TargetSelector::Video => find_layer(world, |layer| *layer == Layer::Video),
        TargetSelector::CustomLayer(name) => {
            find_layer(world, |layer| matches!(layer, Layer::Custom(n) if *n == name))
        }
        TargetSelector::Named(name) => find_sprite(world, &name),
    };
    entity.map(ResolvedTarget::Entity)
}

/// Resolve `selector` to a single entity; `_all_` resolves to nothing.
pub fn resolve_entity(world: &mut World, selector: &str, myself: Option<Entity>) -> Option<Entity> {
    match resolve_target(world, selector, myself)? {
        ResolvedTarget::Entity(entity) => Some(entity),
        ResolvedTarget::All => None,
    }
}

fn find_layer(world: &mut World, matches: impl Fn(&Layer) -> bool) -> Option<Entity> {
    let mut query = world.query_filtered::<(Entity, &Layer), With<Drawable>>();
    query
        .iter(world)
        .find(|(_, layer)| matches(layer))
        .map(|(entity, _)| entity)
}

/// Original (non-clone) sprite named `name`. The stage is not a sprite.
pub fn find_sprite(world: &mut World, name: &str) -> Option<Entity> {
    let mut query = world.query_filtered::<(Entity, &Target), Without<Layer>>();
    query
        .iter(world)
        .find(|(_, target)| target.is_original && target.name == name)
        .map(|(entity, _)| entity)
}

/// All drawable entities in the scene.
pub fn all_drawables(world: &mut World) -> Vec<Entity> {
    let mut query = world.query_filtered::<Entity, With<Drawable>>();
    query.iter(world).collect()
}

/// Entry of a selector menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub text: String,
    pub value: String,
}

impl MenuItem {
    fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
        }
    }
}

fn sprite_names(world: &mut World) -> Vec<String> {
    let mut query = world.query_filtered::<&Target, Without<Layer>>();
    let mut names: Vec<String> = query
        .iter(world)
        .filter(|target| target.is_original)
        .map(|target| target.name.clone())
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Objects that can be bound to a camera or inspected.
///
/// `include_all` adds the "all objects" entry used by bind/unbind.
pub fn object_menu(world: &mut World, include_all: bool) -> Vec<MenuItem> {
    let mut items = vec![MenuItem::new("myself", MYSELF)];
    if include_all {
        items.push(MenuItem::new("all objects", ALL));
    }
    items.push(MenuItem::new("Stage", STAGE));

    let mut query = world.query::<&Layer>();
    let layers: Vec<Layer> = query.iter(world).cloned().collect();
    if layers.contains(&Layer::Video) {
        items.push(MenuItem::new("video layer", VIDEO));
    }
    if layers.contains(&Layer::Pen) {
        items.push(MenuItem::new("pen layer", PEN));
    }
    for layer in &layers {
        if let Layer::Custom(name) = layer {
            items.push(MenuItem::new(
                name.clone(),
                TargetSelector::CustomLayer(name.clone()).value(),
            ));
        }
    }

    items.extend(
        sprite_names(world)
            .into_iter()
            .map(|name| MenuItem::new(name.clone(), name)),
    );
    items
}

/// Targets a camera can move to or point towards.
pub fn target_menu(world: &mut World) -> Vec<MenuItem> {
    let mut items = vec![MenuItem::new("myself", MYSELF), MenuItem::new("Stage", STAGE)];
    items.extend(
        sprite_names(world)
            .into_iter()
            .map(|name| MenuItem::new(name.clone(), name)),
    );
    items
}

/// Cameras, `"default"` first.
pub fn camera_menu(registry: &CameraRegistry) -> Vec<MenuItem> {
    registry
        .names()
        .into_iter()
        .map(|name| MenuItem::new(name.clone(), name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> (World, Entity, Entity, Entity) {
        let mut world = World::new();
        let stage = world.spawn((Target::new("Stage"), Layer::Stage)).id();
        let cat = world.spawn(Target::new("Cat")).id();
        let pen = world.spawn((Drawable::default(), Layer::Pen)).id();
        world.spawn((Drawable::default(), Layer::Custom("3D".into())));
        (world, stage, cat, pen)
    }

    #[test]
    fn selectors_parse_and_round_trip() {
        for value in [MYSELF, ALL, STAGE, PEN, VIDEO, "3D=custom-layer", "Cat"] {
            assert_eq!(TargetSelector::parse(value).value(), value);
        }
        assert_eq!(
            TargetSelector::parse("3D=custom-layer"),
            TargetSelector::CustomLayer("3D".into())
        );
    }

    #[test]
    fn resolves_symbolic_and_named_targets() {
        let (mut world, stage, cat, pen) = scene();
        assert_eq!(resolve_entity(&mut world, STAGE, None), Some(stage));
        assert_eq!(resolve_entity(&mut world, "Cat", None), Some(cat));
        assert_eq!(resolve_entity(&mut world, MYSELF, Some(cat)), Some(cat));
        assert_eq!(resolve_entity(&mut world, PEN, None), Some(pen));
        assert_eq!(resolve_target(&mut world, ALL, None), Some(ResolvedTarget::All));
        assert!(resolve_entity(&mut world, "3D=custom-layer", None).is_some());
    }

    #[test]
    fn unknown_targets_resolve_to_nothing() {
        let (mut world, _, _, _) = scene();
        assert_eq!(resolve_target(&mut world, "Dog", None), None);
        assert_eq!(resolve_target(&mut world, VIDEO, None), None);
        assert_eq!(resolve_target(&mut world, MYSELF, None), None);
        assert_eq!(resolve_target(&mut world, "Stage", None), None);
    }

    #[test]
    fn clones_are_not_found_by_name() {
        let (mut world, _, cat, _) = scene();
        let mut clone = Target::new("Cat");
        clone.is_original = false;
        world.spawn(clone);
        assert_eq!(find_sprite(&mut world, "Cat"), Some(cat));
    }

    #[test]
    fn object_menu_lists_layers_and_sprites() {
        let (mut world, _, _, _) = scene();
        let values: Vec<String> = object_menu(&mut world, true)
            .into_iter()
            .map(|item| item.value)
            .collect();
        assert_eq!(
            values,
            vec![MYSELF, ALL, STAGE, PEN, "3D=custom-layer", "Cat"]
        );
        let without_all = object_menu(&mut world, false);
        assert!(without_all.iter().all(|item| item.value != ALL));
    }

    #[test]
    fn target_menu_omits_layers() {
        let (mut world, _, _, _) = scene();
        let values: Vec<String> = target_menu(&mut world)
            .into_iter()
            .map(|item| item.value)
            .collect();
        assert_eq!(values, vec![MYSELF, STAGE, "Cat"]);
    }

    #[test]
    fn camera_menu_starts_with_default() {
        let mut registry = CameraRegistry::new();
        registry.create("top");
        let names: Vec<String> = camera_menu(&registry).into_iter().map(|i| i.text).collect();
        assert_eq!(names, vec!["default", "top"]);
    }
}
