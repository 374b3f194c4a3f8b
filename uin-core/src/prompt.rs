//! Prompt composer.
//!
//! Emits a comma-joined phrase sequence: lighting, one phrase per object in
//! document order (never z-order), quality tags, then an optional style
//! phrase. Deterministic: identical scene and options produce a
//! byte-identical string.

use crate::scene::model::{Scene, SceneObject};
use crate::scene::registry::ObjectKind;

const QUALITY_TAGS: [&str; 4] = [
    "highly detailed",
    "photorealistic",
    "cinematic composition",
    "masterpiece",
];

const NEGATIVE_DEFAULTS: [&str; 8] = [
    "blurry",
    "deformed",
    "disfigured",
    "low quality",
    "worst quality",
    "ugly",
    "duplicate",
    "extra limbs",
];

/// Coarse scene complexity bucket derived from object and attribute counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    /// Score below 5.
    Simple,
    /// Score below 15.
    Medium,
    /// Everything above.
    Complex,
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Complexity::Simple => "simple",
            Complexity::Medium => "medium",
            Complexity::Complex => "complex",
        })
    }
}

/// Positive/negative prompt pair with scene metadata.
#[derive(Clone, Debug, serde::Serialize)]
pub struct StructuredPrompt {
    /// The composed prompt.
    pub positive: String,
    /// The default negative prompt.
    pub negative: String,
    /// Derived scene facts.
    pub metadata: PromptMetadata,
}

/// Scene facts attached to a structured prompt.
#[derive(Clone, Debug, serde::Serialize)]
pub struct PromptMetadata {
    /// Global lighting type, when the document set one.
    pub lighting: Option<String>,
    /// Number of objects in the scene.
    pub object_count: usize,
    /// Canvas aspect ratio.
    pub aspect_ratio: String,
    /// Complexity bucket.
    pub complexity: Complexity,
}

pub(crate) fn compose(scene: &Scene, style: Option<&str>, quality_tags: bool) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(lighting) = &scene.lighting {
        parts.push(format!("{lighting} lighting"));
    }

    for obj in &scene.objects {
        parts.push(describe_object(obj));
    }

    if quality_tags {
        parts.extend(QUALITY_TAGS.iter().map(|t| t.to_string()));
    }

    if let Some(style) = style {
        parts.push(style.to_string());
    }

    parts.join(", ")
}

pub(crate) fn compose_structured(
    scene: &Scene,
    style: Option<&str>,
    quality_tags: bool,
) -> StructuredPrompt {
    StructuredPrompt {
        positive: compose(scene, style, quality_tags),
        negative: negative_prompt(&[]),
        metadata: PromptMetadata {
            lighting: scene.lighting.clone(),
            object_count: scene.objects.len(),
            aspect_ratio: scene.canvas.aspect_ratio.clone(),
            complexity: complexity(scene),
        },
    }
}

/// The default negative prompt, with caller-supplied phrases appended.
pub fn negative_prompt(additional: &[&str]) -> String {
    NEGATIVE_DEFAULTS
        .iter()
        .copied()
        .chain(additional.iter().copied())
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_object(obj: &SceneObject) -> String {
    let mut parts: Vec<String> = Vec::new();

    match obj.kind {
        ObjectKind::Human => {
            parts.push(obj.description.clone().unwrap_or_else(|| "person".into()));
            if let Some(len) = obj.feature_field_str("hair", "length") {
                parts.push(format!("{len} hair"));
            }
            if obj.feature_hex("hair").is_some() {
                parts.push("distinctive hair color".into());
            }
            if let Some(style) = obj.feature_field_str("hair", "style") {
                parts.push(format!("{style} hairstyle"));
            }
            if let Some(color) = obj.feature_field_str("eyes", "color") {
                parts.push(format!("{color} eyes"));
            }
            if obj.feature_hex("clothing").is_some() {
                parts.push("wearing colorful clothing".into());
            }
            if let Some(expr) = obj.feature_field_str("face", "expression") {
                parts.push(expr.to_string());
            }
        }
        ObjectKind::Tree => {
            let height = obj.height_m();
            parts.push(
                if height > 10.0 {
                    "large tree"
                } else if height > 5.0 {
                    "medium tree"
                } else {
                    "small tree"
                }
                .into(),
            );
            if let Some(leaf) = obj.feature_str("leaf_type") {
                parts.push(format!("{leaf} leaves"));
            }
            if obj.position.z > 2.0 {
                parts.push("in background".into());
            }
        }
        ObjectKind::Car => {
            let kind = obj.feature_str("type").unwrap_or("modern");
            parts.push(format!("{kind} car"));
            if obj.position.z > 2.0 {
                parts.push("in distance".into());
            }
        }
        ObjectKind::Building => {
            let floors = obj.floors();
            parts.push(
                if floors > 10 {
                    "tall skyscraper"
                } else if floors > 5 {
                    "multi-story building"
                } else {
                    "building"
                }
                .into(),
            );
            if let Some(roof) = obj.feature_str("roof_type") {
                parts.push(format!("with {roof} roof"));
            }
            if obj.position.z > 3.0 {
                parts.push("in far background".into());
            }
        }
        ObjectKind::Bench => {
            parts.push("park bench".into());
        }
        ObjectKind::Dog => {
            match obj.feature_str("breed") {
                Some(breed) => parts.push(format!("{breed} dog")),
                None => parts.push("friendly dog".into()),
            }
            if obj.position.z > 2.0 {
                parts.push("in background".into());
            }
        }
    }

    parts.join(", ")
}

// Score: two points per object plus one per feature/measurement key.
fn complexity(scene: &Scene) -> Complexity {
    let mut score = scene.objects.len() * 2;
    for obj in &scene.objects {
        score += obj.features.len();
        score += obj.measurements.len();
    }
    if score < 5 {
        Complexity::Simple
    } else if score < 15 {
        Complexity::Medium
    } else {
        Complexity::Complex
    }
}

#[cfg(test)]
#[path = "../tests/unit/prompt.rs"]
mod tests;
