use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hitbox::{GeomCfg, GridSnap};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod scene;

use scene::{OutlineFile, SceneFile};

#[derive(Parser)]
#[command(name = "hitbox", version = hitbox::VERSION)]
#[command(about = "Triangulate polygon outlines and check scenes for overlap")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Snap {
    Auto,
    Always,
    Never,
}

impl From<Snap> for GridSnap {
    fn from(s: Snap) -> Self {
        match s {
            Snap::Auto => GridSnap::Auto,
            Snap::Always => GridSnap::Always,
            Snap::Never => GridSnap::Never,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Split one outline (`{"points": [[x,y],...]}`) into triangles
    Triangulate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Snap::Auto)]
        snap: Snap,
    },
    /// Report which shapes of a scene (`{"shapes": [...]}`) overlap
    Check {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Snap::Auto)]
        snap: Snap,
    },
    /// Write a random scene of star-shaped integer polygons
    Random {
        #[arg(long, default_value_t = 8)]
        count: usize,
        #[arg(long, default_value_t = 8)]
        vertices: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 40.0)]
        radius: f64,
        /// Shape centers are drawn from [-spread, spread]²
        #[arg(long, default_value_t = 150.0)]
        spread: f64,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Triangulate { input, out, snap } => triangulate(input, out, snap),
        Action::Check { input, out, snap } => check(input, out, snap),
        Action::Random {
            count,
            vertices,
            seed,
            radius,
            spread,
            out,
        } => random(count, vertices, seed, radius, spread, out),
    }
}

fn cfg_for(snap: Snap) -> GeomCfg {
    GeomCfg {
        grid_snap: snap.into(),
        ..GeomCfg::default()
    }
}

fn triangulate(input: PathBuf, out: Option<PathBuf>, snap: Snap) -> Result<()> {
    tracing::info!(input = %input.display(), ?snap, "triangulate");
    let outline: OutlineFile = scene::load_json(&input)?;
    let report = scene::triangulate_outline(&outline, &cfg_for(snap))
        .with_context(|| format!("triangulating {}", input.display()))?;
    tracing::info!(
        vertices = outline.points.len(),
        triangles = report.triangles.len(),
        "triangulated"
    );
    emit(&report, out.as_deref())
}

fn check(input: PathBuf, out: Option<PathBuf>, snap: Snap) -> Result<()> {
    tracing::info!(input = %input.display(), ?snap, "check");
    let scene: SceneFile = scene::load_json(&input)?;
    let report = scene::check_scene(&scene, &cfg_for(snap))
        .with_context(|| format!("checking {}", input.display()))?;
    tracing::info!(
        shapes = report.shapes.len(),
        pairs = report.pairs.len(),
        "checked"
    );
    emit(&report, out.as_deref())
}

fn random(
    count: usize,
    vertices: usize,
    seed: u64,
    radius: f64,
    spread: f64,
    out: PathBuf,
) -> Result<()> {
    tracing::info!(count, vertices, seed, radius, spread, "random");
    let scene = scene::random_scene(count, vertices, radius, spread, seed)?;
    emit(&scene, Some(out.as_path()))
}

/// Pretty JSON to stdout, or to `out` when given.
fn emit<T: Serialize>(value: &T, out: Option<&Path>) -> Result<()> {
    let Some(out) = out else {
        println!("{}", serde_json::to_string_pretty(value)?);
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(out = %out.display(), "wrote");
    Ok(())
}
