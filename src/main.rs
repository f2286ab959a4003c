//! Multicam2d command line entry point.
//!
//! Loads a project, runs a JSON command script against it and prints every
//! report value followed by the rendered state of each sprite.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --project scene.json --script steps.json --as Cat
//! ```
//!
//! Set `RUST_LOG=debug` to trace every camera operation.

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{info, warn};

use multicam2d::components::camerabinding::CameraBinding;
use multicam2d::components::drawable::Drawable;
use multicam2d::components::target::{CloneOf, Target};
use multicam2d::error::ProjectError;
use multicam2d::game;
use multicam2d::resources::cameraconfig::CameraConfig;
use multicam2d::resources::project::ProjectFile;
use multicam2d::resources::renderstate::RenderState;
use multicam2d::systems::script::{load_script, run_script};
use multicam2d::systems::targets::find_sprite;

/// Multiple named 2-D cameras for a sprite scene
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// INI configuration file (stage size, storage key).
    #[arg(long, value_name = "PATH", default_value = "./camera.ini")]
    config: PathBuf,

    /// Project to load before running the script.
    #[arg(long, value_name = "PATH")]
    project: Option<PathBuf>,

    /// JSON command script to run.
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Write the resulting project here.
    #[arg(long, value_name = "PATH")]
    save: Option<PathBuf>,

    /// Sprite that `_myself_` refers to.
    #[arg(long = "as", value_name = "SPRITE")]
    acting: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ProjectError> {
    let mut config = CameraConfig::with_path(cli.config.clone());
    if cli.config.exists() {
        if let Err(e) = config.load_from_file() {
            warn!("{e}; using default configuration");
        }
    }
    let mut world = game::setup_world(config);

    if let Some(path) = &cli.project {
        let project = ProjectFile::read(path)?;
        game::load_project(&mut world, project);
    }

    let myself = match &cli.acting {
        Some(name) => {
            let found = find_sprite(&mut world, name);
            if found.is_none() {
                warn!("Acting sprite '{}' not found", name);
            }
            found
        }
        None => None,
    };

    if let Some(path) = &cli.script {
        let steps = load_script(path)?;
        info!("Running {} script step(s) from {}", steps.len(), path.display());
        for line in run_script(&mut world, steps, myself) {
            println!("{:?} => {}", line.report, line.value);
        }
    }

    print_rendered_state(&mut world);

    if let Some(path) = &cli.save {
        game::save_project(&mut world, path)?;
    }
    Ok(())
}

fn print_rendered_state(world: &mut World) {
    if !world.resource_mut::<RenderState>().take_dirty() {
        info!("Scene unchanged since the last frame");
    }
    let mut query = world.query::<(&Target, &Drawable, &CameraBinding, Option<&CloneOf>)>();
    let mut rows: Vec<String> = query
        .iter(world)
        .map(|(target, drawable, binding, clone_of)| {
            format!(
                "{}{} [{}] x={} y={} direction={} scale=({}, {})",
                target.name,
                if clone_of.is_some() { " (clone)" } else { "" },
                binding.camera,
                drawable.position.x,
                drawable.position.y,
                drawable.direction,
                drawable.scale.x,
                drawable.scale.y
            )
        })
        .collect();
    rows.sort();
    for row in rows {
        println!("{row}");
    }
}
