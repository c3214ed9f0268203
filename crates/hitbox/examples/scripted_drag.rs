//! Replay a short canvas session without a window: draw two outlines with
//! clicks, close them, then drag the second onto the first.
//!
//! Usage:
//!   cargo run -p hitbox --example scripted_drag

use hitbox::prelude::*;
use nalgebra::vector;

fn main() -> Result<(), GeomError> {
    let viewport = vector![500.0, 500.0];
    let mut camera = Camera::default();
    camera.zoom_by_wheel(-2.0);
    let mut shapes = ShapeRegistry::new();

    let clicks: [&[[f64; 2]]; 2] = [
        &[[150.0, 150.0], [300.0, 150.0], [300.0, 220.0], [220.0, 220.0], [220.0, 300.0], [150.0, 300.0]],
        &[[380.0, 380.0], [450.0, 380.0], [450.0, 450.0], [380.0, 450.0]],
    ];
    for outline in clicks {
        let mut draft = DraftPolygon::new();
        for c in outline {
            draft.push_point(camera.screen_to_world(vector![c[0], c[1]], viewport));
        }
        let preview = draft.preview()?;
        println!("draft bbox {:?}", preview.bounding_box());
        let idx = shapes.push(draft.finalize()?);
        println!(
            "shape {idx}: {} vertices, {} triangles",
            shapes.shapes()[idx].outline().len(),
            shapes.shapes()[idx].triangles().len()
        );
    }
    println!("flags before drag: {:?}", shapes.collision_flags());

    // Grab the square and drag it up-left in 10px steps.
    let grab = camera.screen_to_world(vector![400.0, 400.0], viewport);
    let picked = shapes.shape_at(grab);
    if let Some(idx) = picked {
        for _ in 0..12 {
            let d = camera.drag_delta(vector![-10.0, -10.0]);
            shapes.translate(idx, d.x, d.y)?;
            if shapes.collision_flags()[idx] {
                break;
            }
        }
    }
    println!("flags after drag:  {:?}", shapes.collision_flags());
    println!("pairs: {:?}", shapes.colliding_pairs());
    Ok(())
}
