use crate::foundation::error::{UinError, UinResult};

/// World-space axis identifier, used in error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical (height) axis.
    Y,
    /// Depth axis.
    Z,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        })
    }
}

/// Closed interval `[lo, hi]` over one world axis.
///
/// Serialized as the 2-element sequence `[lo, hi]` used by the document
/// format.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct AxisRange {
    /// Lower endpoint.
    pub lo: f64,
    /// Upper endpoint.
    pub hi: f64,
}

impl From<[f64; 2]> for AxisRange {
    fn from([lo, hi]: [f64; 2]) -> Self {
        Self { lo, hi }
    }
}

impl From<AxisRange> for [f64; 2] {
    fn from(r: AxisRange) -> Self {
        [r.lo, r.hi]
    }
}

impl AxisRange {
    /// Interval width `hi - lo`.
    pub fn span(self) -> f64 {
        self.hi - self.lo
    }

    /// True when the interval cannot be normalized over (zero or inverted
    /// span).
    pub fn is_degenerate(self) -> bool {
        !(self.hi > self.lo)
    }

    /// Rescale `v` to the fraction of the interval it occupies. Values
    /// outside the interval map outside `[0, 1]`; callers accept that.
    ///
    /// The interval must be non-degenerate; see
    /// [`crate::transform::world_to_normalized`] for the checked entry point.
    pub fn normalize(self, v: f64) -> f64 {
        (v - self.lo) / self.span()
    }
}

/// The world-space volume mapped onto the canvas.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Bounds {
    /// Horizontal interval.
    pub x: AxisRange,
    /// Vertical interval.
    pub y: AxisRange,
    /// Depth interval.
    pub z: AxisRange,
}

/// Default world volume applied when a document omits `canvas.bounds`.
pub const DEFAULT_BOUNDS: Bounds = Bounds {
    x: AxisRange { lo: -4.0, hi: 4.0 },
    y: AxisRange { lo: 0.0, hi: 4.5 },
    z: AxisRange { lo: -2.0, hi: 6.0 },
};

impl Default for Bounds {
    fn default() -> Self {
        DEFAULT_BOUNDS
    }
}

impl Bounds {
    /// The three intervals paired with their axis, in x, y, z order.
    pub fn axes(self) -> [(Axis, AxisRange); 3] {
        [(Axis::X, self.x), (Axis::Y, self.y), (Axis::Z, self.z)]
    }

    /// Reject any axis a renderer could not divide by.
    pub fn ensure_nondegenerate(self) -> UinResult<()> {
        for (axis, range) in self.axes() {
            if range.is_degenerate() {
                return Err(UinError::DegenerateBounds { axis });
            }
        }
        Ok(())
    }
}

/// Reference pixel height the viewport is derived at.
pub const REFERENCE_HEIGHT: u32 = 1000;

/// Pixel dimensions derived from the canvas aspect ratio.
///
/// Independent of world bounds; recomputed from the canvas, never stored in
/// the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels, always [`REFERENCE_HEIGHT`].
    pub height: u32,
}

impl Viewport {
    /// Derive the viewport from a `"W:H"` aspect-ratio string at the
    /// reference height. Both sides must parse as positive finite numbers.
    pub fn from_aspect_ratio(aspect_ratio: &str) -> UinResult<Viewport> {
        let invalid = || UinError::InvalidAspectRatio(aspect_ratio.to_string());

        let mut parts = aspect_ratio.split(':');
        let (Some(w), Some(h), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };
        let w: f64 = w.trim().parse().map_err(|_| invalid())?;
        let h: f64 = h.trim().parse().map_err(|_| invalid())?;
        if !w.is_finite() || !h.is_finite() || w <= 0.0 || h <= 0.0 {
            return Err(invalid());
        }

        let height = REFERENCE_HEIGHT;
        let width = ((w / h) * f64::from(height)).round() as u32;
        Ok(Viewport { width, height })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/geom.rs"]
mod tests;
