//! Static object-type registry.
//!
//! The registry is immutable constant data constructed at compile time; it is
//! never extended or mutated at runtime. Unknown type keys are rejected during
//! both validation and scene construction.

/// Known object kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// A standing person.
    Human,
    /// A tree with trunk and crown.
    Tree,
    /// A car seen side-on.
    Car,
    /// A multi-floor building.
    Building,
    /// A park bench.
    Bench,
    /// A dog.
    Dog,
}

/// Registry record for one object kind: default dimensions, proportion
/// ratios, and the feature keys the kind recognizes.
#[derive(Debug)]
pub struct TypeDefaults {
    /// Default overall height in world units (meters).
    pub height_m: f64,
    /// Default length in meters, for kinds wider than tall.
    pub length_m: Option<f64>,
    /// Default floor count (buildings).
    pub floors: Option<u32>,
    /// Height of one floor in meters (buildings).
    pub floor_height_m: Option<f64>,
    /// Named structural parts as fractions of total height.
    pub proportions: &'static [(&'static str, f64)],
    /// Feature keys the renderers and prompt composer recognize.
    pub features: &'static [&'static str],
}

static HUMAN: TypeDefaults = TypeDefaults {
    height_m: 1.68,
    length_m: None,
    floors: None,
    floor_height_m: None,
    proportions: &[("head", 0.08), ("torso", 0.40), ("legs", 0.52)],
    features: &["hair", "eyes", "face", "clothing"],
};

static TREE: TypeDefaults = TypeDefaults {
    height_m: 3.0,
    length_m: None,
    floors: None,
    floor_height_m: None,
    proportions: &[("trunk", 0.3), ("crown", 0.7)],
    features: &["leaf_type"],
};

static CAR: TypeDefaults = TypeDefaults {
    height_m: 1.5,
    length_m: Some(4.2),
    floors: None,
    floor_height_m: None,
    proportions: &[("cabin", 0.4), ("body", 0.6)],
    features: &["type"],
};

static BUILDING: TypeDefaults = TypeDefaults {
    height_m: 6.0,
    length_m: None,
    floors: Some(2),
    floor_height_m: Some(3.0),
    proportions: &[],
    features: &["roof_type", "windows"],
};

static BENCH: TypeDefaults = TypeDefaults {
    height_m: 0.45,
    length_m: Some(1.5),
    floors: None,
    floor_height_m: None,
    proportions: &[],
    features: &[],
};

static DOG: TypeDefaults = TypeDefaults {
    height_m: 0.6,
    length_m: None,
    floors: None,
    floor_height_m: None,
    proportions: &[],
    features: &["breed"],
};

impl ObjectKind {
    /// Every registered kind, in registry order.
    pub const ALL: [ObjectKind; 6] = [
        ObjectKind::Human,
        ObjectKind::Tree,
        ObjectKind::Car,
        ObjectKind::Building,
        ObjectKind::Bench,
        ObjectKind::Dog,
    ];

    /// Look up a document `type` key. `None` for anything unregistered.
    pub fn from_key(key: &str) -> Option<ObjectKind> {
        match key {
            "human" => Some(ObjectKind::Human),
            "tree" => Some(ObjectKind::Tree),
            "car" => Some(ObjectKind::Car),
            "building" => Some(ObjectKind::Building),
            "bench" => Some(ObjectKind::Bench),
            "dog" => Some(ObjectKind::Dog),
            _ => None,
        }
    }

    /// The document `type` key for this kind.
    pub fn key(self) -> &'static str {
        match self {
            ObjectKind::Human => "human",
            ObjectKind::Tree => "tree",
            ObjectKind::Car => "car",
            ObjectKind::Building => "building",
            ObjectKind::Bench => "bench",
            ObjectKind::Dog => "dog",
        }
    }

    /// The registry record for this kind.
    pub fn defaults(self) -> &'static TypeDefaults {
        match self {
            ObjectKind::Human => &HUMAN,
            ObjectKind::Tree => &TREE,
            ObjectKind::Car => &CAR,
            ObjectKind::Building => &BUILDING,
            ObjectKind::Bench => &BENCH,
            ObjectKind::Dog => &DOG,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/registry.rs"]
mod tests;
