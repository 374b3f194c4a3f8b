//! Lighting style table for the SVG renderer.

/// Background colors keyed by the global lighting type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LightingStyle {
    /// Sky fill.
    pub sky: &'static str,
    /// Ground-plane fill.
    pub ground: &'static str,
}

const DEFAULT: LightingStyle = LightingStyle {
    sky: "#87CEEB",
    ground: "#228B22",
};

const GOLDEN_HOUR: LightingStyle = LightingStyle {
    sky: "#FFD8A8",
    ground: "#228B22",
};

const NIGHT: LightingStyle = LightingStyle {
    sky: "#1B263B",
    ground: "#1F3D24",
};

/// Style for a lighting type; unknown or missing types fall back to the
/// default sky.
pub fn lighting_style(lighting: Option<&str>) -> LightingStyle {
    match lighting {
        Some("golden_hour") => GOLDEN_HOUR,
        Some("night") => NIGHT,
        _ => DEFAULT,
    }
}
