//! Z-order and projection pipeline.
//!
//! The single source of truth for draw order, screen anchors, and the
//! depth-derived scale/opacity/brightness factors. Both renderers consume
//! [`project_scene`]; neither duplicates any of this math.

use crate::foundation::error::UinResult;
use crate::scene::model::{Scene, SceneObject};
use crate::transform::world_to_screen;

/// Scale factor at the far z bound; nearer objects blend up to 1.0.
const SCALE_FLOOR: f64 = 0.6;

/// Opacity at the far z bound (atmospheric perspective); nearer objects
/// blend up to 1.0.
const OPACITY_FLOOR: f64 = 0.7;

/// One object with its per-render projection state.
///
/// Created fresh per render call and discarded after the renderer consumes
/// it; never cached.
#[derive(Clone, Copy, Debug)]
pub struct ProjectedObject<'a> {
    /// The normalized scene object.
    pub object: &'a SceneObject,
    /// Screen anchor (the object's world position at ground contact).
    pub anchor: kurbo::Point,
    /// Depth fraction: 0 at the near z bound, 1 at the far bound. Positions
    /// outside the bounds fall outside `[0, 1]`, which is accepted.
    pub depth: f64,
    /// Size multiplier, monotonically increasing with proximity.
    pub scale: f64,
    /// Opacity in `[0, 1]`, monotonically increasing with proximity.
    pub opacity: f64,
}

/// Project every object and sort back-to-front (far first), so renderers can
/// paint in iteration order and nearer objects occlude farther ones.
///
/// The sort is stable: objects at equal z keep their document order, on
/// every call.
#[tracing::instrument(skip(scene))]
pub fn project_scene(scene: &Scene) -> UinResult<Vec<ProjectedObject<'_>>> {
    let bounds = &scene.canvas.bounds;
    let mut projected = Vec::with_capacity(scene.objects.len());

    for object in &scene.objects {
        let screen = world_to_screen(object.position, bounds, scene.viewport)?;
        let proximity = 1.0 - screen.depth;
        projected.push(ProjectedObject {
            object,
            anchor: screen.anchor(),
            depth: screen.depth,
            scale: (SCALE_FLOOR + (1.0 - SCALE_FLOOR) * proximity).max(0.0),
            opacity: (OPACITY_FLOOR + (1.0 - OPACITY_FLOOR) * proximity).clamp(0.0, 1.0),
        });
    }

    projected.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    Ok(projected)
}

/// Pixels per world unit: vertical pixel density of the scene. Object pixel
/// sizes are world heights times this, times the depth scale factor.
pub fn pixels_per_world_unit(scene: &Scene) -> UinResult<f64> {
    scene.canvas.bounds.ensure_nondegenerate()?;
    Ok(f64::from(scene.viewport.height) / scene.canvas.bounds.y.span())
}

/// Grayscale level encoding proximity: near = bright (255 at the near z
/// bound), far = dark (0 at the far bound), clamped for positions outside
/// the bounds. This is the depth-map brightness contract.
pub fn depth_level(depth: f64) -> u8 {
    ((1.0 - depth) * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../tests/unit/project.rs"]
mod tests;
