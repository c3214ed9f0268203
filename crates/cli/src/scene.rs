//! JSON exchange types for the CLI and the reports built from them.

use anyhow::{bail, Context, Result};
use hitbox::prelude::*;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub type Coord = [f64; 2];

/// A single outline: `{"points": [[x, y], ...]}`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct OutlineFile {
    pub points: Vec<Coord>,
}

/// A scene: `{"shapes": [[[x, y], ...], ...]}`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SceneFile {
    pub shapes: Vec<Vec<Coord>>,
}

#[derive(Debug, Serialize)]
pub struct TriangulationReport {
    pub triangles: Vec<[Coord; 3]>,
}

#[derive(Debug, Serialize)]
pub struct ShapeReport {
    pub index: usize,
    pub colliding: bool,
    pub triangles: usize,
    /// `[min, max]` corners.
    pub bounding_box: [Coord; 2],
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub shapes: Vec<ShapeReport>,
    pub pairs: Vec<(usize, usize)>,
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

fn coord(v: &Vec2) -> Coord {
    [v.x, v.y]
}

pub fn triangulate_outline(outline: &OutlineFile, cfg: &GeomCfg) -> Result<TriangulationReport> {
    let poly = Polygon::from_coords(&outline.points)?;
    let triangles = triangulate_with(&poly, cfg)?
        .into_iter()
        .map(|t| t.vertices.map(|v| coord(&v)))
        .collect();
    Ok(TriangulationReport { triangles })
}

pub fn build_registry(scene: &SceneFile, cfg: &GeomCfg) -> Result<ShapeRegistry> {
    let mut reg = ShapeRegistry::new();
    for (i, pts) in scene.shapes.iter().enumerate() {
        let shape = Polygon::from_coords(pts)
            .and_then(|p| CollisionShape::with_cfg(p, cfg))
            .with_context(|| format!("shape {i}"))?;
        reg.push(shape);
    }
    Ok(reg)
}

pub fn check_scene(scene: &SceneFile, cfg: &GeomCfg) -> Result<CheckReport> {
    let reg = build_registry(scene, cfg)?;
    let flags = reg.collision_flags();
    let shapes = reg
        .iter()
        .zip(flags)
        .enumerate()
        .map(|(index, (shape, colliding))| {
            let bb = shape.bounding_box();
            ShapeReport {
                index,
                colliding,
                triangles: shape.triangles().len(),
                bounding_box: [coord(&bb.min), coord(&bb.max)],
            }
        })
        .collect();
    Ok(CheckReport {
        shapes,
        pairs: reg.colliding_pairs(),
    })
}

/// Fails when the radius is too small to fit `vertices` grid points.
pub fn random_scene(
    count: usize,
    vertices: usize,
    radius: f64,
    spread: f64,
    seed: u64,
) -> Result<SceneFile> {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(vertices),
        base_radius: radius,
        ..RadialCfg::default()
    };
    let shapes: Vec<Vec<Coord>> = draw_scene(cfg, count, spread, seed)
        .into_iter()
        .map(|p| p.points().iter().map(coord).collect())
        .collect();
    if shapes.len() < count {
        bail!(
            "only {} of {count} shapes with {vertices} vertices fit radius {radius}",
            shapes.len()
        );
    }
    Ok(SceneFile { shapes })
}
