//! meshpick - Mouse picking against triangle-mesh scenes
//!
//! Loads a viewer scene, aims a picking ray through a screen position and
//! reports which objects it hits.

mod config;

use anyhow::{Context, Result};
use config::ViewerConfig;
use glam::Vec2;
use meshpick_picking::{screen_to_ndc, Raycaster};
use meshpick_scene::SceneObject;
use meshpick_testkit::{JsonlSink, PickRecord};
use std::{env, path::PathBuf};
use tracing::info;

fn main() -> Result<()> {
    // Initialize tracing with WARN level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    info!("Starting meshpick v{}", env!("CARGO_PKG_VERSION"));

    let cli = CliOptions::parse(env::args().skip(1));
    let config = match &cli.config {
        Some(path) => ViewerConfig::load_from_path(path),
        None => ViewerConfig::load(),
    };

    if let Some(path) = &cli.write_config {
        config
            .save_to_path(path)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        info!(path = %path.display(), "wrote viewer config");
        return Ok(());
    }

    let scene = config.build_scene();
    let mut camera = config.camera();
    camera.set_aspect(cli.resolution.0, cli.resolution.1);

    let (query, coords) = cli.pick.resolve(cli.resolution);
    let mut raycaster =
        Raycaster::new(camera.position, camera.forward()).with_range(camera.near, camera.far);
    raycaster.set_from_camera(coords, &camera.view_matrix(), &camera.projection_matrix());

    let record = pick(&raycaster, scene.objects(), query, coords);
    info!(
        objects = scene.len(),
        hits = record.hits.len(),
        x = coords.x,
        y = coords.y,
        "pick complete"
    );

    if record.hits.is_empty() {
        println!("no hit at ({:.3}, {:.3})", coords.x, coords.y);
    } else {
        for name in &record.hits {
            println!("{name}");
        }
    }

    if let Some(path) = &cli.record {
        let mut sink = JsonlSink::create(path)
            .with_context(|| format!("failed to create record file {}", path.display()))?;
        sink.write(&record)?;
        info!(path = %path.display(), "recorded pick");
    }

    Ok(())
}

/// Cast `raycaster` into `objects` and describe the hits.
fn pick(
    raycaster: &Raycaster,
    objects: &[SceneObject],
    query: String,
    coords: Vec2,
) -> PickRecord {
    let indices = raycaster.intersects_indices(objects);
    let hits = indices
        .iter()
        .map(|&index| objects[index].name().to_string())
        .collect();
    PickRecord {
        query,
        coords: coords.to_array(),
        hits,
        indices,
    }
}

/// Where to cast the picking ray.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PickTarget {
    /// Normalized device coordinates.
    Ndc(f32, f32),
    /// Pixel coordinates, origin top-left.
    Pixel(f32, f32),
}

impl PickTarget {
    /// Query label and NDC for this target.
    fn resolve(self, resolution: (u32, u32)) -> (String, Vec2) {
        match self {
            PickTarget::Ndc(x, y) => (format!("ndc {x},{y}"), Vec2::new(x, y)),
            PickTarget::Pixel(x, y) => (format!("pixel {x},{y}"), screen_to_ndc((x, y), resolution)),
        }
    }
}

#[derive(Debug)]
struct CliOptions {
    config: Option<PathBuf>,
    write_config: Option<PathBuf>,
    pick: PickTarget,
    resolution: (u32, u32),
    record: Option<PathBuf>,
}

impl CliOptions {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Self {
        let mut opts = CliOptions {
            config: None,
            write_config: None,
            pick: PickTarget::Ndc(0.0, 0.0),
            resolution: (1280, 720),
            record: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    if let Some(path) = args.next() {
                        opts.config = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--config requires a file path");
                    }
                }
                "--write-config" => {
                    if let Some(path) = args.next() {
                        opts.write_config = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--write-config requires a file path");
                    }
                }
                "--ndc" => match args.next().as_deref().and_then(parse_pair) {
                    Some((x, y)) => opts.pick = PickTarget::Ndc(x, y),
                    None => tracing::error!("--ndc requires a value like 0.25,-0.5"),
                },
                "--pixel" => match args.next().as_deref().and_then(parse_pair) {
                    Some((x, y)) => opts.pick = PickTarget::Pixel(x, y),
                    None => tracing::error!("--pixel requires a value like 640,360"),
                },
                "--resolution" => {
                    if let Some(raw) = args.next() {
                        match raw.split_once('x') {
                            Some((w, h)) => match (w.parse::<u32>(), h.parse::<u32>()) {
                                (Ok(width), Ok(height)) if width > 0 && height > 0 => {
                                    opts.resolution = (width, height);
                                }
                                _ => {
                                    tracing::error!(value = %raw, "--resolution must be like 1280x720");
                                }
                            },
                            None => {
                                tracing::error!(value = %raw, "--resolution must be like 1280x720");
                            }
                        }
                    } else {
                        tracing::error!("--resolution requires a value like 1280x720");
                    }
                }
                "--record" => {
                    if let Some(path) = args.next() {
                        opts.record = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--record requires a file path");
                    }
                }
                other => {
                    tracing::warn!(arg = %other, "ignoring unknown argument");
                }
            }
        }

        opts
    }
}

fn parse_pair(raw: &str) -> Option<(f32, f32)> {
    let (x, y) = raw.split_once(',')?;
    let x = x.trim().parse::<f32>().ok()?;
    let y = y.trim().parse::<f32>().ok()?;
    (x.is_finite() && y.is_finite()).then_some((x, y))
}
