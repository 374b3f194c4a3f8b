//! UIN turns JSON scene descriptions into image-generation conditioning
//! artifacts.
//!
//! A UIN document places typed objects (humans, trees, cars, buildings, ...)
//! at 3D positions inside a bounded world volume. This crate converts such a
//! document into three derived artifacts that stay geometrically consistent
//! with each other:
//!
//! - an SVG rendering (`to_svg`)
//! - a grayscale depth map for ControlNet-style conditioning
//!   (`to_depth_map`)
//! - a text-to-image prompt (`to_prompt` / `to_structured_prompt`)
//!
//! # Pipeline overview
//!
//! 1. **Parse**: raw JSON -> [`Scene`] (canvas defaults, derived viewport,
//!    registry-normalized objects)
//! 2. **Validate**: structural checks over the raw document
//!    ([`validate_document`]), optional but on by default
//! 3. **Project**: [`project_scene`] sorts by depth and computes each
//!    object's screen anchor, scale, and opacity, shared by both renderers
//! 4. **Render/Compose**: SVG, depth raster, or prompt string
//!
//! Key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: every conversion is a pure function of its input
//!   document and options; identical input yields byte-identical output.
//! - **No IO**: reading documents and writing artifacts belong to callers.
//! - **One projection**: both renderers consume the same z-order and
//!   projection pipeline, so their outputs are aligned by construction.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod convert;
mod foundation;
mod project;
mod prompt;
mod render;
mod scene;
mod transform;

pub use convert::{
    ConvertOptions, parse_document, to_depth_map, to_prompt, to_structured_prompt, to_svg,
};
pub use foundation::error::{UinError, UinResult, ValidationError};
pub use foundation::geom::{Axis, AxisRange, Bounds, DEFAULT_BOUNDS, REFERENCE_HEIGHT, Viewport};
pub use project::{ProjectedObject, depth_level, pixels_per_world_unit, project_scene};
pub use prompt::{Complexity, PromptMetadata, StructuredPrompt, negative_prompt};
pub use render::depth::{DepthMap, render_depth_map};
pub use render::shape::{Shape, Styled, detail_shapes, silhouette_shapes};
pub use render::style::{LightingStyle, lighting_style};
pub use render::svg::render_svg;
pub use scene::model::{Canvas, Measurement, Position, Scene, SceneObject};
pub use scene::registry::{ObjectKind, TypeDefaults};
pub use scene::validate::validate_document;
pub use transform::{
    NormalizedPoint, ScreenPoint, normalized_to_screen, world_to_normalized, world_to_screen,
};
