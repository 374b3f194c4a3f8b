use crate::foundation::geom::Axis;

/// Convenience result type used across the crate.
pub type UinResult<T> = Result<T, UinError>;

/// Top-level error taxonomy for conversion APIs.
///
/// Validation and geometry errors are synchronous and non-recoverable for the
/// current conversion call: the caller receives the typed failure and no
/// partial artifact is produced.
#[derive(thiserror::Error, Debug)]
pub enum UinError {
    /// Malformed JSON input, surfaced from the parser.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Structural violation in the raw document.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An axis interval with zero or inverted span; rendering would divide
    /// by zero.
    #[error("degenerate bounds: {axis} axis has zero or inverted span")]
    DegenerateBounds {
        /// The offending axis.
        axis: Axis,
    },

    /// An `aspect_ratio` string that does not split into two positive
    /// numbers around `:`.
    #[error("invalid aspect ratio '{0}'")]
    InvalidAspectRatio(String),

    /// Wrapped lower-level error from dependencies (rasterization, image
    /// encoding).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Structural checks over the raw document, in the order the validator runs
/// them. Each variant carries the offending axis, index, or type key so a CLI
/// or UI layer can report precisely what is invalid.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `version` missing or not a non-empty string.
    #[error("version missing")]
    MissingVersion,

    /// `canvas.bounds` missing.
    #[error("canvas.bounds missing")]
    MissingBounds,

    /// A bounds entry that is not a 2-element numeric sequence.
    #[error("invalid bounds for {0} axis")]
    InvalidAxisBounds(Axis),

    /// `objects` missing or not a sequence.
    #[error("objects must be a sequence")]
    ObjectsNotSequence,

    /// An object whose `type` is not in the registry.
    #[error("unknown object type '{kind}' at index {index}")]
    UnknownObjectType {
        /// Position of the object in the `objects` sequence.
        index: usize,
        /// The unrecognized type key.
        kind: String,
    },

    /// An object without three numeric position components.
    #[error("object {index} has invalid position")]
    InvalidPosition {
        /// Position of the object in the `objects` sequence.
        index: usize,
    },

    /// A `measurements` field that is not a mapping.
    #[error("object {index} measurements must be a mapping")]
    InvalidMeasurements {
        /// Position of the object in the `objects` sequence.
        index: usize,
    },

    /// A `features` field that is not a mapping.
    #[error("object {index} features must be a mapping")]
    InvalidFeatures {
        /// Position of the object in the `objects` sequence.
        index: usize,
    },
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
