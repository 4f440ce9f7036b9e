//! Command line parameters.

use std::path::PathBuf;

use anyhow::{bail, Context};
use cubeworld_world::{Placement, SceneConfig};
use glam::Vec3;

/// Viewer configuration parsed from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerParams {
    /// Scene to compose.
    pub scene: SceneConfig,
    /// Optional input script replayed into the camera controller.
    pub input: Option<PathBuf>,
    /// Print the text preview of every layer.
    pub show_layers: bool,
}

impl Default for ViewerParams {
    fn default() -> Self {
        Self {
            scene: SceneConfig::default(),
            input: None,
            show_layers: true,
        }
    }
}

impl ViewerParams {
    /// Parse from `std::env::args`.
    pub fn from_args() -> anyhow::Result<Self> {
        let args: Vec<String> = std::env::args().collect();
        Self::parse_args(&args)
    }

    /// Parse from a slice of arguments. The first entry is the program name.
    ///
    /// Any `--place` replaces the default placements.
    pub fn parse_args(args: &[String]) -> anyhow::Result<Self> {
        let mut params = Self::default();
        let mut placements = Vec::new();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--grid-size" => {
                    let value = value_of(args, i)?;
                    params.scene.grid_size = value
                        .parse()
                        .with_context(|| format!("invalid --grid-size '{value}'"))?;
                    i += 1;
                }
                "--place" => {
                    placements.push(parse_placement(value_of(args, i)?)?);
                    i += 1;
                }
                "--input" => {
                    params.input = Some(PathBuf::from(value_of(args, i)?));
                    i += 1;
                }
                "--no-layers" => params.show_layers = false,
                other => bail!("unknown argument '{other}' (see --help)"),
            }
            i += 1;
        }

        if !placements.is_empty() {
            params.scene.placements = placements;
        }
        Ok(params)
    }
}

fn value_of(args: &[String], i: usize) -> anyhow::Result<&str> {
    args.get(i + 1)
        .map(String::as_str)
        .with_context(|| format!("{} requires a value", args[i]))
}

/// Parse `<name>@<x>,<y>,<z>[x<scale>]`.
pub fn parse_placement(text: &str) -> anyhow::Result<Placement> {
    let (name, rest) = text
        .split_once('@')
        .with_context(|| format!("placement '{text}' is missing '@'"))?;
    if name.is_empty() {
        bail!("placement '{text}' has no model name");
    }

    let (coords, scale) = match rest.split_once('x') {
        Some((coords, scale)) => (
            coords,
            scale
                .parse::<f32>()
                .with_context(|| format!("invalid scale in '{text}'"))?,
        ),
        None => (rest, 1.0),
    };

    let parts = coords
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("invalid offset in '{text}'"))?;
    let [x, y, z] = parts[..] else {
        bail!("placement '{text}' needs three offset components");
    };

    Ok(Placement::new(name, Vec3::new(x, y, z)).with_scale(scale))
}
