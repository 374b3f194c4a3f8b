//! Depth-map renderer.
//!
//! Produces a grayscale raster where brightness encodes proximity: near
//! objects are bright, far objects are dark, and the background is the far
//! extreme (black). The silhouettes go through the same projection pipeline
//! and shape metrics as the SVG renderer, so the two outputs are
//! geometrically aligned by construction.

use anyhow::Context as _;
use base64::Engine as _;

use crate::foundation::error::UinResult;
use crate::project::{depth_level, pixels_per_world_unit, project_scene};
use crate::render::shape::{Shape, silhouette_shapes};
use crate::scene::model::Scene;

/// A rendered single-channel depth raster.
#[derive(Clone, Debug)]
pub struct DepthMap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl DepthMap {
    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major grayscale samples, one byte per pixel.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Grayscale level at a pixel, when inside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }

    /// Encode as a grayscale PNG.
    pub fn encode_png(&self) -> UinResult<Vec<u8>> {
        let img = image::GrayImage::from_raw(self.width, self.height, self.data.clone())
            .context("depth buffer does not match its dimensions")?;
        let mut png = Vec::new();
        image::DynamicImage::ImageLuma8(img)
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .context("encode depth png")?;
        Ok(png)
    }

    /// Encode as an embeddable `data:image/png;base64,...` URI.
    pub fn to_data_uri(&self) -> UinResult<String> {
        let png = self.encode_png()?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(&png);
        Ok(format!("data:image/png;base64,{encoded}"))
    }
}

/// Render a scene to a depth map sized to the viewport.
#[tracing::instrument(skip(scene))]
pub fn render_depth_map(scene: &Scene) -> UinResult<DepthMap> {
    let width = scene.viewport.width;
    let height = scene.viewport.height;

    let svg = silhouette_svg(scene)?;
    let opts = usvg::Options::default();
    let tree =
        usvg::Tree::from_data(svg.as_bytes(), &opts).context("parse depth silhouette svg")?;

    let mut pixmap =
        resvg::tiny_skia::Pixmap::new(width, height).context("allocate depth pixmap")?;
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap.as_mut());

    // Silhouettes are opaque grayscale, so the premultiplied red channel is
    // the luma value.
    let data = pixmap.data().chunks_exact(4).map(|px| px[0]).collect();

    Ok(DepthMap {
        width,
        height,
        data,
    })
}

fn silhouette_svg(scene: &Scene) -> UinResult<String> {
    let width = scene.viewport.width;
    let height = scene.viewport.height;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));
    svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"#000000\"/>");

    let px_per_unit = pixels_per_world_unit(scene)?;
    for projected in project_scene(scene)? {
        let level = depth_level(projected.depth);
        let fill = format!("#{level:02x}{level:02x}{level:02x}");
        for shape in silhouette_shapes(&projected, px_per_unit) {
            svg.push_str(&silhouette_markup(&shape, &fill));
        }
    }

    svg.push_str("</svg>");
    Ok(svg)
}

fn silhouette_markup(shape: &Shape, fill: &str) -> String {
    match *shape {
        Shape::Rect(r) | Shape::RoundedRect { rect: r, .. } => format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{fill}\"/>",
            r.x0,
            r.y0,
            r.width(),
            r.height(),
        ),
        Shape::Circle(c) => format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{fill}\"/>",
            c.center.x, c.center.y, c.radius,
        ),
        Shape::Ellipse { center, rx, ry } => format!(
            "<ellipse cx=\"{:.2}\" cy=\"{:.2}\" rx=\"{rx:.2}\" ry=\"{ry:.2}\" fill=\"{fill}\"/>",
            center.x, center.y,
        ),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/depth.rs"]
mod tests;
