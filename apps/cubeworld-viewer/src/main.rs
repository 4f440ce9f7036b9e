//! Cubeworld headless viewer
//!
//! Composes a scene from the built-in models, optionally replays scripted
//! camera input, and prints the camera, compass and a text preview of
//! every layer.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p cubeworld-viewer -- [OPTIONS]
//! ```
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level (e.g., info, debug, trace)

mod params;
mod script;

use anyhow::Context;
use cubeworld_core::constants::CUBE_SIZE;
use cubeworld_input::CameraController;
use cubeworld_render::{preview, Compass, LayerStack, SceneUniforms};
use cubeworld_world::{ModelRegistry, WorldComposer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::params::ViewerParams;
use crate::script::parse_script;

fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print_help();
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let params = ViewerParams::from_args()?;
    let registry = ModelRegistry::with_builtin_models()?;
    for model in registry.iter() {
        let model_info = model.info();
        info!(
            name = %model_info.name,
            size = %model_info.size,
            voxels = model_info.voxel_count,
            "Model"
        );
    }

    let composition = WorldComposer::new(&registry).compose_scene(&params.scene)?;
    for skipped in &composition.skipped {
        warn!(index = skipped.index, "Skipped placement: {}", skipped.error);
    }
    let world = &composition.world;
    info!(
        size = %world.dimensions(),
        voxels = world.count_non_empty(),
        "Composed world"
    );

    let mut controller = CameraController::new();
    if let Some(path) = &params.input {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input script {}", path.display()))?;
        let commands = parse_script(&text)
            .with_context(|| format!("failed to parse input script {}", path.display()))?;
        info!(count = commands.len(), "Replaying input");
        for command in commands {
            command.apply(&mut controller);
        }
    }

    let camera = controller.state();
    let stack = LayerStack::build(world, registry.palette());
    let uniforms = SceneUniforms::new(camera, &stack, CUBE_SIZE);

    println!(
        "camera: tilt {:.1}  spin {:.1}  roll {:.1}  zoom {:.2}",
        camera.tilt(),
        camera.normalized_spin(),
        camera.normalized_roll(),
        camera.zoom()
    );
    println!("cubes: {} in {} layers", stack.cube_count(), stack.layers().len());
    println!("transform: {:?}", uniforms.transform);
    for axis in Compass::from_camera(camera).axes() {
        println!(
            "axis {}: ({:+.2}, {:+.2}) depth {:+.2}",
            axis.label, axis.direction.x, axis.direction.y, axis.depth
        );
    }

    if params.show_layers {
        print!("{}", preview::render_ascii(world, true));
    }

    Ok(())
}

fn print_help() {
    eprintln!(
        "Cubeworld headless viewer

USAGE:
    cargo run -p cubeworld-viewer -- [OPTIONS]

SCENE OPTIONS:
    --grid-size <N>         Edge length of the cubic world (default: 16)
    --place <SPEC>          Place a model, repeatable; replaces the default scene
                            Format: <name>@<x>,<y>,<z>[x<scale>]
                            Examples: \"house@0,0,0\" \"tree@12,0,0x2\"

CAMERA OPTIONS:
    --input <SCRIPT>        Replay camera input from a script file
                            Commands: down X Y | move X Y | up | leave |
                                      wheel DY | key <KeyCode> [shift]

OUTPUT OPTIONS:
    --no-layers             Do not print the layer preview

OTHER:
    -h, --help              Print this help message

MODELS:
    house, tree

ENVIRONMENT VARIABLES:
    RUST_LOG                Set log level (e.g., info, debug, trace)"
    );
}
