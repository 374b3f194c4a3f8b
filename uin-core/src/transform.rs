//! World-to-screen coordinate transform.
//!
//! Both renderers consume the exact floating-point composition of
//! [`world_to_normalized`] and [`normalized_to_screen`]; no intermediate
//! rounding happens anywhere on this path.

use crate::foundation::error::{UinError, UinResult};
use crate::foundation::geom::{Axis, AxisRange, Bounds, Viewport};
use crate::scene::model::Position;

/// A point rescaled to the unit cube of the world bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedPoint {
    /// Horizontal fraction, 0 at the left bound.
    pub x: f64,
    /// Vertical fraction, flipped: 0 at the top of the canvas.
    pub y: f64,
    /// Depth fraction, 0 at the near bound. Not flipped.
    pub z: f64,
}

/// A screen-space anchor with its depth fraction carried through.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    /// Pixel x.
    pub x: f64,
    /// Pixel y, growing downward.
    pub y: f64,
    /// Depth fraction, unchanged from normalized space.
    pub depth: f64,
}

impl ScreenPoint {
    /// The 2D anchor as a geometry point.
    pub fn anchor(self) -> kurbo::Point {
        kurbo::Point::new(self.x, self.y)
    }
}

fn norm_axis(range: AxisRange, axis: Axis, v: f64) -> UinResult<f64> {
    if range.is_degenerate() {
        return Err(UinError::DegenerateBounds { axis });
    }
    Ok(range.normalize(v))
}

/// Map a world position into the unit cube of `bounds`.
///
/// y is flipped (`1 - fraction`) because screen y grows downward while world
/// y grows upward. Positions outside the bounds map outside `[0, 1]` and are
/// accepted; a degenerate axis is an error, never a silent `inf`/`NaN`.
pub fn world_to_normalized(p: Position, bounds: &Bounds) -> UinResult<NormalizedPoint> {
    Ok(NormalizedPoint {
        x: norm_axis(bounds.x, Axis::X, p.x)?,
        y: 1.0 - norm_axis(bounds.y, Axis::Y, p.y)?,
        z: norm_axis(bounds.z, Axis::Z, p.z)?,
    })
}

/// Scale a normalized point to viewport pixels. The depth fraction passes
/// through unchanged; it is not a screen coordinate.
pub fn normalized_to_screen(n: NormalizedPoint, viewport: Viewport) -> ScreenPoint {
    ScreenPoint {
        x: n.x * f64::from(viewport.width),
        y: n.y * f64::from(viewport.height),
        depth: n.z,
    }
}

/// [`world_to_normalized`] then [`normalized_to_screen`], exactly.
pub fn world_to_screen(p: Position, bounds: &Bounds, viewport: Viewport) -> UinResult<ScreenPoint> {
    Ok(normalized_to_screen(
        world_to_normalized(p, bounds)?,
        viewport,
    ))
}

#[cfg(test)]
#[path = "../tests/unit/transform.rs"]
mod tests;
