//! SVG renderer.
//!
//! Emits a canvas-sized vector document: lighting-keyed sky, ground plane at
//! world `y = 0`, then one group per projected object painted back-to-front
//! so nearer objects occlude farther ones.

use crate::foundation::error::UinResult;
use crate::project::{pixels_per_world_unit, project_scene};
use crate::render::shape::{Shape, Styled, detail_shapes};
use crate::render::style::lighting_style;
use crate::scene::model::{Position, Scene};
use crate::transform::world_to_screen;

/// Render a scene to SVG markup.
#[tracing::instrument(skip(scene))]
pub fn render_svg(scene: &Scene) -> UinResult<String> {
    let width = scene.viewport.width;
    let height = scene.viewport.height;
    let style = lighting_style(scene.lighting.as_deref());

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        style.sky
    ));

    // Ground plane: everything below world y = 0. With bounds that start at
    // zero this degenerates to a zero-height strip at the bottom edge, which
    // is still emitted so the document shape is uniform.
    let ground_y = world_to_screen(
        Position {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        },
        &scene.canvas.bounds,
        scene.viewport,
    )?
    .y
    .clamp(0.0, f64::from(height));
    svg.push_str(&format!(
        "<rect x=\"0\" y=\"{ground_y:.2}\" width=\"{width}\" height=\"{:.2}\" fill=\"{}\"/>",
        f64::from(height) - ground_y,
        style.ground
    ));

    let px_per_unit = pixels_per_world_unit(scene)?;
    for projected in project_scene(scene)? {
        match &projected.object.id {
            Some(id) => svg.push_str(&format!(
                "<g id=\"{}\" opacity=\"{:.2}\">",
                escape_xml(id),
                projected.opacity
            )),
            None => svg.push_str(&format!("<g opacity=\"{:.2}\">", projected.opacity)),
        }
        for shape in detail_shapes(&projected, px_per_unit) {
            svg.push_str(&shape_markup(&shape));
        }
        svg.push_str("</g>");
    }

    svg.push_str("</svg>");
    Ok(svg)
}

fn shape_markup(styled: &Styled) -> String {
    let opacity = match styled.opacity {
        Some(o) => format!(" opacity=\"{o:.2}\""),
        None => String::new(),
    };
    // Fills can carry document-supplied hex strings; escape them like ids.
    let fill = escape_xml(&styled.fill);
    match styled.shape {
        Shape::Rect(r) => format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{fill}\"{opacity}/>",
            r.x0,
            r.y0,
            r.width(),
            r.height(),
        ),
        Shape::RoundedRect { rect: r, radius } => format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"{radius:.2}\" fill=\"{fill}\"{opacity}/>",
            r.x0,
            r.y0,
            r.width(),
            r.height(),
        ),
        Shape::Circle(c) => format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{fill}\"{opacity}/>",
            c.center.x, c.center.y, c.radius,
        ),
        Shape::Ellipse { center, rx, ry } => format!(
            "<ellipse cx=\"{:.2}\" cy=\"{:.2}\" rx=\"{rx:.2}\" ry=\"{ry:.2}\" fill=\"{fill}\"{opacity}/>",
            center.x, center.y,
        ),
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
