use std::collections::BTreeMap;

use serde::Deserialize as _;

use crate::foundation::error::{UinResult, ValidationError};
use crate::foundation::geom::{Bounds, Viewport};
use crate::scene::registry::ObjectKind;

/// A world-space position.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Position {
    /// Horizontal component.
    pub x: f64,
    /// Vertical (height) component.
    pub y: f64,
    /// Depth component.
    pub z: f64,
}

/// Canvas description with defaults applied.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Aspect ratio as `"W:H"`.
    pub aspect_ratio: String,
    /// World volume mapped onto the canvas.
    pub bounds: Bounds,
}

/// A named quantity attached to an object.
///
/// The document may spell a measurement either as a bare number or as a
/// `{value, unit}` record; both deserialize to this canonical form.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "RawMeasurement")]
pub struct Measurement {
    /// Numeric value in the unit below.
    pub value: f64,
    /// Unit name, when the document supplies one.
    pub unit: Option<String>,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawMeasurement {
    Bare(f64),
    Record {
        value: f64,
        #[serde(default)]
        unit: Option<String>,
    },
}

impl From<RawMeasurement> for Measurement {
    fn from(raw: RawMeasurement) -> Self {
        match raw {
            RawMeasurement::Bare(value) => Measurement { value, unit: None },
            RawMeasurement::Record { value, unit } => Measurement { value, unit },
        }
    }
}

/// One normalized scene entity: the registry defaults for its kind overlaid
/// by the instance's own fields (instance wins).
#[derive(Clone, Debug, serde::Serialize)]
pub struct SceneObject {
    /// Caller-supplied identifier; not required to be unique.
    pub id: Option<String>,
    /// Registry kind resolved from the document `type` key.
    #[serde(serialize_with = "serialize_kind")]
    pub kind: ObjectKind,
    /// World position.
    pub position: Position,
    /// Named quantities overriding registry defaults.
    pub measurements: BTreeMap<String, Measurement>,
    /// Type-specific nested attributes; replaces (not merges with) any
    /// defaults of the same key.
    pub features: serde_json::Map<String, serde_json::Value>,
    /// Free-text description used by the prompt composer.
    pub description: Option<String>,
}

fn serialize_kind<S: serde::Serializer>(kind: &ObjectKind, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(kind.key())
}

impl SceneObject {
    fn measurement(&self, name: &str) -> Option<f64> {
        self.measurements.get(name).map(|m| m.value)
    }

    /// Effective height in meters: the `height` measurement when present,
    /// otherwise the registry default (floor count times floor height for
    /// buildings).
    pub fn height_m(&self) -> f64 {
        if let Some(v) = self.measurement("height") {
            return v;
        }
        let defaults = self.kind.defaults();
        match self.kind {
            ObjectKind::Building => {
                f64::from(self.floors()) * defaults.floor_height_m.unwrap_or(3.0)
            }
            _ => defaults.height_m,
        }
    }

    /// Effective length in meters; falls back to height for kinds with no
    /// length default.
    pub fn length_m(&self) -> f64 {
        let defaults = self.kind.defaults();
        self.measurement("length")
            .or(defaults.length_m)
            .unwrap_or(defaults.height_m)
    }

    /// Effective floor count, at least 1.
    pub fn floors(&self) -> u32 {
        self.measurement("floors")
            .map(|v| (v.max(1.0)) as u32)
            .unwrap_or_else(|| self.kind.defaults().floors.unwrap_or(2))
    }

    /// Raw feature value for `key`.
    pub fn feature(&self, key: &str) -> Option<&serde_json::Value> {
        self.features.get(key)
    }

    /// A feature that is a plain string, e.g. `leaf_type` or `breed`.
    pub fn feature_str(&self, key: &str) -> Option<&str> {
        self.feature(key).and_then(serde_json::Value::as_str)
    }

    /// A string field inside a feature record, e.g. `hair.length`.
    pub fn feature_field_str(&self, key: &str, field: &str) -> Option<&str> {
        self.feature(key)
            .and_then(|v| v.get(field))
            .and_then(serde_json::Value::as_str)
    }

    /// The `color.hex` field inside a feature record, e.g.
    /// `clothing.color.hex`.
    pub fn feature_hex(&self, key: &str) -> Option<&str> {
        self.feature(key)
            .and_then(|v| v.get("color"))
            .and_then(|v| v.get("hex"))
            .and_then(serde_json::Value::as_str)
    }
}

/// A canonical in-memory scene.
///
/// Constructed once per conversion request from the parsed document and
/// immutable thereafter. Construction applies canvas defaults, derives the
/// viewport, rejects degenerate bounds, and normalizes every object against
/// the registry; unknown object types are rejected here even when the caller
/// opted out of validation.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Scene {
    /// Document format version.
    pub version: String,
    /// Canvas with defaults applied.
    pub canvas: Canvas,
    /// Pixel viewport derived from the canvas aspect ratio.
    pub viewport: Viewport,
    /// Global lighting type, e.g. `"golden_hour"`.
    pub lighting: Option<String>,
    /// Normalized objects in document order.
    pub objects: Vec<SceneObject>,
}

const DEFAULT_ASPECT_RATIO: &str = "16:9";

#[derive(serde::Deserialize)]
struct RawScene {
    version: Option<String>,
    canvas: Option<RawCanvas>,
    global: Option<RawGlobal>,
    #[serde(default)]
    objects: Vec<RawObject>,
}

#[derive(serde::Deserialize)]
struct RawCanvas {
    aspect_ratio: Option<String>,
    bounds: Option<Bounds>,
}

#[derive(serde::Deserialize)]
struct RawGlobal {
    lighting: Option<RawLighting>,
}

#[derive(serde::Deserialize)]
struct RawLighting {
    #[serde(rename = "type")]
    kind: Option<String>,
}

#[derive(serde::Deserialize)]
struct RawObject {
    id: Option<String>,
    #[serde(rename = "type")]
    kind: String,
    position: Option<Position>,
    #[serde(default)]
    measurements: BTreeMap<String, Measurement>,
    #[serde(default)]
    features: serde_json::Map<String, serde_json::Value>,
    description: Option<String>,
}

impl Scene {
    /// Parse a JSON string into a scene. Convenience over
    /// [`Scene::from_value`].
    pub fn parse(json: &str) -> UinResult<Scene> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Scene::from_value(&value)
    }

    /// Build a canonical scene from a parsed document.
    ///
    /// This does not run the structural validator (see
    /// [`crate::validate_document`]); it still fails on unknown object types,
    /// missing positions, degenerate bounds, and unparseable aspect ratios.
    pub fn from_value(doc: &serde_json::Value) -> UinResult<Scene> {
        let raw = RawScene::deserialize(doc)?;

        let (aspect_ratio, bounds) = match raw.canvas {
            Some(c) => (
                c.aspect_ratio
                    .unwrap_or_else(|| DEFAULT_ASPECT_RATIO.to_string()),
                c.bounds.unwrap_or_default(),
            ),
            None => (DEFAULT_ASPECT_RATIO.to_string(), Bounds::default()),
        };
        bounds.ensure_nondegenerate()?;
        let viewport = Viewport::from_aspect_ratio(&aspect_ratio)?;

        let lighting = raw.global.and_then(|g| g.lighting).and_then(|l| l.kind);

        let mut objects = Vec::with_capacity(raw.objects.len());
        for (index, obj) in raw.objects.into_iter().enumerate() {
            let kind = ObjectKind::from_key(&obj.kind).ok_or_else(|| {
                ValidationError::UnknownObjectType {
                    index,
                    kind: obj.kind.clone(),
                }
            })?;
            let position = obj
                .position
                .ok_or(ValidationError::InvalidPosition { index })?;
            objects.push(SceneObject {
                id: obj.id,
                kind,
                position,
                measurements: obj.measurements,
                features: obj.features,
                description: obj.description,
            });
        }

        Ok(Scene {
            version: raw.version.unwrap_or_default(),
            canvas: Canvas {
                aspect_ratio,
                bounds,
            },
            viewport,
            lighting,
            objects,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
