//! Public conversion entry points.
//!
//! Each entry point is a pure function of the parsed document and the
//! options record: no caching, no shared state, byte-identical output for
//! identical input.

use crate::foundation::error::UinResult;
use crate::prompt;
use crate::prompt::StructuredPrompt;
use crate::render::depth::{DepthMap, render_depth_map};
use crate::render::svg::render_svg;
use crate::scene::model::Scene;
use crate::scene::validate::validate_document;

/// Options recognized by every conversion entry point.
#[derive(Clone, Debug)]
pub struct ConvertOptions {
    /// Run the structural validator before converting. Default `true`.
    pub validate: bool,
    /// Style phrase appended to composed prompts.
    pub style: Option<String>,
    /// Append the default quality phrases to composed prompts. Default
    /// `true`.
    pub quality_tags: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            validate: true,
            style: None,
            quality_tags: true,
        }
    }
}

/// Parse a JSON string into a raw document value.
pub fn parse_document(json: &str) -> UinResult<serde_json::Value> {
    Ok(serde_json::from_str(json)?)
}

fn scene_for(doc: &serde_json::Value, opts: &ConvertOptions) -> UinResult<Scene> {
    if opts.validate {
        validate_document(doc)?;
    }
    Scene::from_value(doc)
}

/// Render a document to SVG markup.
pub fn to_svg(doc: &serde_json::Value, opts: &ConvertOptions) -> UinResult<String> {
    render_svg(&scene_for(doc, opts)?)
}

/// Render a document to a grayscale depth map for ControlNet conditioning.
pub fn to_depth_map(doc: &serde_json::Value, opts: &ConvertOptions) -> UinResult<DepthMap> {
    render_depth_map(&scene_for(doc, opts)?)
}

/// Compose a text-to-image prompt from a document.
pub fn to_prompt(doc: &serde_json::Value, opts: &ConvertOptions) -> UinResult<String> {
    let scene = scene_for(doc, opts)?;
    Ok(prompt::compose(
        &scene,
        opts.style.as_deref(),
        opts.quality_tags,
    ))
}

/// Compose a structured prompt (positive, negative, metadata) from a
/// document.
pub fn to_structured_prompt(
    doc: &serde_json::Value,
    opts: &ConvertOptions,
) -> UinResult<StructuredPrompt> {
    let scene = scene_for(doc, opts)?;
    Ok(prompt::compose_structured(
        &scene,
        opts.style.as_deref(),
        opts.quality_tags,
    ))
}

#[cfg(test)]
#[path = "../tests/unit/convert.rs"]
mod tests;
