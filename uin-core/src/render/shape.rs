//! Per-kind shape templates.
//!
//! Detail shapes (SVG) and silhouette shapes (depth map) are built from the
//! same metric helpers, so the two renderers cannot disagree on geometry.
//! Every template is parameterized only by the projected anchor/scale and the
//! object's own feature/measurement fields.

use kurbo::{Circle, Point, Rect};

use crate::project::ProjectedObject;
use crate::scene::registry::ObjectKind;

/// A filled primitive in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Axis-aligned rectangle.
    Rect(Rect),
    /// Rectangle with rounded corners.
    RoundedRect {
        /// Outer rectangle.
        rect: Rect,
        /// Corner radius in pixels.
        radius: f64,
    },
    /// Circle.
    Circle(Circle),
    /// Axis-aligned ellipse.
    Ellipse {
        /// Center point.
        center: Point,
        /// Horizontal radius.
        rx: f64,
        /// Vertical radius.
        ry: f64,
    },
}

/// A shape with its fill color and optional per-shape opacity.
#[derive(Clone, Debug, PartialEq)]
pub struct Styled {
    /// The primitive.
    pub shape: Shape,
    /// SVG fill color.
    pub fill: String,
    /// Extra opacity on top of the object's depth opacity.
    pub opacity: Option<f64>,
}

fn styled(shape: Shape, fill: &str) -> Styled {
    Styled {
        shape,
        fill: fill.to_string(),
        opacity: None,
    }
}

const SKIN: &str = "#FFD7B5";
const CLOTHING_DEFAULT: &str = "#4A90E2";
const TROUSERS: &str = "#3D3D3D";
const WOOD: &str = "#8B4513";
const FOLIAGE: &str = "#228B22";
const CAR_BODY: &str = "#333333";
const GLASS: &str = "#87CEEB";
const FACADE: &str = "#CCCCCC";
const DOG_COAT: &str = "#D2691E";

/// Full-detail shapes for the SVG renderer, in painter order.
pub fn detail_shapes(p: &ProjectedObject<'_>, px_per_unit: f64) -> Vec<Styled> {
    let obj = p.object;
    let a = p.anchor;
    let h = obj.height_m() * px_per_unit * p.scale;

    match obj.kind {
        ObjectKind::Human => {
            let m = human_metrics(a, h);
            let mut shapes = vec![
                styled(Shape::Circle(m.head), SKIN),
                styled(
                    Shape::Rect(m.torso),
                    obj.feature_hex("clothing").unwrap_or(CLOTHING_DEFAULT),
                ),
                styled(Shape::Rect(m.legs), TROUSERS),
            ];
            if let Some(hair) = obj.feature_hex("hair") {
                shapes.push(Styled {
                    shape: Shape::Circle(Circle::new(
                        (m.head.center.x, m.head.center.y - m.head.radius * 0.3),
                        m.head.radius * 1.2,
                    )),
                    fill: hair.to_string(),
                    opacity: Some(0.7),
                });
            }
            shapes
        }
        ObjectKind::Tree => {
            let m = tree_metrics(a, h);
            vec![
                styled(Shape::Rect(m.trunk), WOOD),
                styled(Shape::Circle(m.crown), FOLIAGE),
            ]
        }
        ObjectKind::Car => {
            let m = car_metrics(a, h, obj.length_m() * px_per_unit * p.scale);
            vec![
                styled(
                    Shape::RoundedRect {
                        rect: m.body,
                        radius: h * 0.1,
                    },
                    CAR_BODY,
                ),
                Styled {
                    shape: Shape::Rect(m.window),
                    fill: GLASS.to_string(),
                    opacity: Some(0.7),
                },
                styled(Shape::Circle(m.wheels[0]), "#000000"),
                styled(Shape::Circle(m.wheels[1]), "#000000"),
            ]
        }
        ObjectKind::Building => {
            let m = building_metrics(a, h, obj.floors());
            let mut shapes = vec![styled(Shape::Rect(m.facade), FACADE)];
            shapes.extend(m.windows.into_iter().map(|w| styled(Shape::Rect(w), GLASS)));
            shapes
        }
        ObjectKind::Bench => bench_metrics(a, h)
            .into_iter()
            .map(|r| styled(Shape::Rect(r), WOOD))
            .collect(),
        ObjectKind::Dog => {
            let m = dog_metrics(a, h);
            let mut shapes = vec![
                styled(
                    Shape::Ellipse {
                        center: m.body_center,
                        rx: m.body_rx,
                        ry: m.body_ry,
                    },
                    DOG_COAT,
                ),
                styled(Shape::Circle(m.head), DOG_COAT),
            ];
            shapes.extend(m.legs.into_iter().map(|r| styled(Shape::Rect(r), WOOD)));
            shapes
        }
    }
}

/// Solid silhouettes for the depth-map renderer: the same primary body
/// geometry as [`detail_shapes`] with windows/wheels/hair detail dropped.
pub fn silhouette_shapes(p: &ProjectedObject<'_>, px_per_unit: f64) -> Vec<Shape> {
    let obj = p.object;
    let a = p.anchor;
    let h = obj.height_m() * px_per_unit * p.scale;

    match obj.kind {
        ObjectKind::Human => {
            let m = human_metrics(a, h);
            vec![Shape::Rect(m.column), Shape::Circle(m.head)]
        }
        ObjectKind::Tree => {
            let m = tree_metrics(a, h);
            vec![Shape::Rect(m.trunk), Shape::Circle(m.crown)]
        }
        ObjectKind::Car => {
            let m = car_metrics(a, h, obj.length_m() * px_per_unit * p.scale);
            vec![Shape::Rect(m.body)]
        }
        ObjectKind::Building => {
            let m = building_metrics(a, h, obj.floors());
            vec![Shape::Rect(m.facade)]
        }
        ObjectKind::Bench => bench_metrics(a, h).into_iter().map(Shape::Rect).collect(),
        ObjectKind::Dog => {
            let m = dog_metrics(a, h);
            vec![
                Shape::Ellipse {
                    center: m.body_center,
                    rx: m.body_rx,
                    ry: m.body_ry,
                },
                Shape::Circle(m.head),
            ]
        }
    }
}

fn proportion(kind: ObjectKind, part: &str, fallback: f64) -> f64 {
    kind.defaults()
        .proportions
        .iter()
        .find(|(name, _)| *name == part)
        .map(|(_, frac)| *frac)
        .unwrap_or(fallback)
}

struct HumanMetrics {
    head: Circle,
    torso: Rect,
    legs: Rect,
    column: Rect,
}

// The head proportion is the head radius; its center sits one radius below
// the top of the figure. The torso proportion spans from there; legs fill
// the rest down to the anchor.
fn human_metrics(a: Point, h: f64) -> HumanMetrics {
    let head_frac = proportion(ObjectKind::Human, "head", 0.08);
    let torso_frac = proportion(ObjectKind::Human, "torso", 0.40);

    let head = Circle::new((a.x, a.y - (1.0 - head_frac) * h), head_frac * h);
    let torso_top = a.y - (1.0 - 2.0 * head_frac) * h;
    let torso = Rect::new(
        a.x - 0.075 * h,
        torso_top,
        a.x + 0.075 * h,
        torso_top + torso_frac * h,
    );
    let legs = Rect::new(a.x - 0.06 * h, torso.y1, a.x + 0.06 * h, a.y);
    let column = Rect::new(torso.x0, torso.y0, torso.x1, a.y);
    HumanMetrics {
        head,
        torso,
        legs,
        column,
    }
}

struct TreeMetrics {
    trunk: Rect,
    crown: Circle,
}

// Trunk and crown split height by the registry proportions.
fn tree_metrics(a: Point, h: f64) -> TreeMetrics {
    let trunk_frac = proportion(ObjectKind::Tree, "trunk", 0.3);
    let crown_frac = proportion(ObjectKind::Tree, "crown", 0.7);

    let trunk = Rect::new(a.x - 0.03 * h, a.y - trunk_frac * h, a.x + 0.03 * h, a.y);
    let crown_r = crown_frac * h / 2.0;
    let crown = Circle::new((a.x, a.y - trunk_frac * h - crown_r), crown_r);
    TreeMetrics { trunk, crown }
}

struct CarMetrics {
    body: Rect,
    window: Rect,
    wheels: [Circle; 2],
}

fn car_metrics(a: Point, h: f64, l: f64) -> CarMetrics {
    let body = Rect::new(a.x - l / 2.0, a.y - h, a.x + l / 2.0, a.y);
    let window = Rect::new(a.x - 0.3 * l, a.y - 0.8 * h, a.x + 0.3 * l, a.y - 0.4 * h);
    let wheels = [
        Circle::new((a.x - 0.3 * l, a.y), 0.15 * h),
        Circle::new((a.x + 0.3 * l, a.y), 0.15 * h),
    ];
    CarMetrics {
        body,
        window,
        wheels,
    }
}

struct BuildingMetrics {
    facade: Rect,
    windows: Vec<Rect>,
}

// One window row per floor (capped), three columns across the facade.
fn building_metrics(a: Point, h: f64, floors: u32) -> BuildingMetrics {
    let w = 0.8 * h;
    let facade = Rect::new(a.x - w / 2.0, a.y - h, a.x + w / 2.0, a.y);

    let rows = floors.clamp(1, 12);
    let row_h = h / f64::from(rows);
    let win_w = 0.15 * w;
    let win_h = 0.5 * row_h;
    let mut windows = Vec::with_capacity(rows as usize * 3);
    for row in 0..rows {
        let y0 = a.y - h + (f64::from(row) + 0.25) * row_h;
        for col in 0..3i32 {
            let cx = a.x + f64::from(col - 1) * (w / 3.0);
            windows.push(Rect::new(
                cx - win_w / 2.0,
                y0,
                cx + win_w / 2.0,
                y0 + win_h,
            ));
        }
    }
    BuildingMetrics { facade, windows }
}

// Seat slab plus two legs.
fn bench_metrics(a: Point, h: f64) -> Vec<Rect> {
    let half_w = 1.5 * h;
    let seat = Rect::new(a.x - half_w, a.y - h, a.x + half_w, a.y - 0.8 * h);
    let left = Rect::new(a.x - 1.36 * h, a.y - 0.8 * h, a.x - 1.06 * h, a.y);
    let right = Rect::new(a.x + 1.06 * h, a.y - 0.8 * h, a.x + 1.36 * h, a.y);
    vec![seat, left, right]
}

struct DogMetrics {
    body_center: Point,
    body_rx: f64,
    body_ry: f64,
    head: Circle,
    legs: Vec<Rect>,
}

fn dog_metrics(a: Point, h: f64) -> DogMetrics {
    let s = 0.35 * h;
    let body_center = Point::new(a.x, a.y - s);
    let head = Circle::new((a.x + 0.8 * s, a.y - 1.2 * s), 0.5 * s);
    let legs = (0..4)
        .map(|i| {
            let x0 = a.x - s + f64::from(i) * 0.6 * s;
            Rect::new(x0, a.y - 0.5 * s, x0 + 0.2 * s, a.y + 0.1 * s)
        })
        .collect();
    DogMetrics {
        body_center,
        body_rx: 1.5 * s,
        body_ry: s,
        head,
        legs,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/shape.rs"]
mod tests;
