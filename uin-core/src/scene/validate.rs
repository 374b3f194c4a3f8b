use serde_json::Value;

use crate::foundation::error::ValidationError;
use crate::foundation::geom::Axis;
use crate::scene::registry::ObjectKind;

/// Structural checks over the raw, pre-normalization document.
///
/// Pure and read-only: the input is never mutated and repeated calls return
/// the same outcome. Fails fast on the first violation, in the order the
/// checks are listed here.
///
/// `features`, where present, must be a mapping; this deliberately replaces
/// the legacy sequence check, which no reader of the field ever agreed with.
pub fn validate_document(doc: &Value) -> Result<(), ValidationError> {
    match doc.get("version").and_then(Value::as_str) {
        Some(v) if !v.is_empty() => {}
        _ => return Err(ValidationError::MissingVersion),
    }

    let bounds = doc
        .get("canvas")
        .and_then(|c| c.get("bounds"))
        .ok_or(ValidationError::MissingBounds)?;

    for axis in [Axis::X, Axis::Y, Axis::Z] {
        let entry = bounds.get(axis.to_string());
        if !is_numeric_pair(entry) {
            return Err(ValidationError::InvalidAxisBounds(axis));
        }
    }

    let objects = doc
        .get("objects")
        .and_then(Value::as_array)
        .ok_or(ValidationError::ObjectsNotSequence)?;

    for (index, obj) in objects.iter().enumerate() {
        let kind = obj.get("type").and_then(Value::as_str).unwrap_or_default();
        if ObjectKind::from_key(kind).is_none() {
            return Err(ValidationError::UnknownObjectType {
                index,
                kind: kind.to_string(),
            });
        }

        let position = obj.get("position");
        let has_numeric_xyz = ["x", "y", "z"].iter().all(|k| {
            position
                .and_then(|p| p.get(k))
                .is_some_and(|v| v.as_f64().is_some())
        });
        if !has_numeric_xyz {
            return Err(ValidationError::InvalidPosition { index });
        }

        if let Some(m) = obj.get("measurements")
            && !m.is_object()
        {
            return Err(ValidationError::InvalidMeasurements { index });
        }

        if let Some(f) = obj.get("features")
            && !f.is_object()
        {
            return Err(ValidationError::InvalidFeatures { index });
        }
    }

    Ok(())
}

fn is_numeric_pair(v: Option<&Value>) -> bool {
    v.and_then(Value::as_array)
        .is_some_and(|a| a.len() == 2 && a.iter().all(|e| e.as_f64().is_some()))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/validate.rs"]
mod tests;
