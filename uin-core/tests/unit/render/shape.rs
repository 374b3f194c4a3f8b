use super::*;
use crate::project::{pixels_per_world_unit, project_scene};
use crate::scene::model::Scene;
use serde_json::json;

fn single_object_scene(obj: serde_json::Value) -> Scene {
    Scene::from_value(&json!({ "version": "1.0", "objects": [obj] })).unwrap()
}

fn shapes_for(obj: serde_json::Value) -> (Vec<Styled>, Vec<Shape>) {
    let scene = single_object_scene(obj);
    let ppu = pixels_per_world_unit(&scene).unwrap();
    let projected = project_scene(&scene).unwrap();
    (
        detail_shapes(&projected[0], ppu),
        silhouette_shapes(&projected[0], ppu),
    )
}

#[test]
fn human_silhouette_shares_the_detail_head_geometry() {
    let (detail, silhouette) = shapes_for(json!({
        "type": "human", "position": { "x": 0, "y": 0, "z": 0 }
    }));
    // Detail: head, torso, legs. Silhouette: body column, head.
    assert_eq!(detail.len(), 3);
    assert_eq!(silhouette.len(), 2);
    assert_eq!(silhouette[1], detail[0].shape);

    // The body column spans exactly torso top to anchor.
    let (Shape::Rect(torso), Shape::Rect(legs), Shape::Rect(column)) =
        (detail[1].shape, detail[2].shape, silhouette[0])
    else {
        panic!("unexpected primitive kinds");
    };
    assert_eq!(column.y0, torso.y0);
    assert_eq!(column.y1, legs.y1);
    assert_eq!(column.x0, torso.x0);
}

#[test]
fn human_hair_overlay_only_appears_with_a_hair_color() {
    let (plain, _) = shapes_for(json!({
        "type": "human", "position": { "x": 0, "y": 0, "z": 0 }
    }));
    let (with_hair, silhouette) = shapes_for(json!({
        "type": "human", "position": { "x": 0, "y": 0, "z": 0 },
        "features": { "hair": { "color": { "hex": "#331100" } } }
    }));
    assert_eq!(with_hair.len(), plain.len() + 1);
    assert_eq!(with_hair.last().unwrap().fill, "#331100");
    assert_eq!(with_hair.last().unwrap().opacity, Some(0.7));
    // Hair never reaches the silhouette.
    assert_eq!(silhouette.len(), 2);
}

#[test]
fn clothing_color_overrides_the_torso_fill() {
    let (detail, _) = shapes_for(json!({
        "type": "human", "position": { "x": 0, "y": 0, "z": 0 },
        "features": { "clothing": { "color": { "hex": "#FF0000" } } }
    }));
    assert_eq!(detail[1].fill, "#FF0000");
}

#[test]
fn car_silhouette_drops_window_and_wheels() {
    let (detail, silhouette) = shapes_for(json!({
        "type": "car", "position": { "x": 0, "y": 0, "z": 0 }
    }));
    assert_eq!(detail.len(), 4); // body, window, two wheels
    assert_eq!(silhouette.len(), 1);

    let (Shape::RoundedRect { rect: body, .. }, Shape::Rect(sil_body)) =
        (detail[0].shape, silhouette[0])
    else {
        panic!("unexpected primitive kinds");
    };
    assert_eq!(body, sil_body);
}

#[test]
fn building_windows_grid_follows_floor_count() {
    let (two_floors, silhouette) = shapes_for(json!({
        "type": "building", "position": { "x": 0, "y": 0, "z": 0 }
    }));
    assert_eq!(two_floors.len(), 1 + 2 * 3);
    assert_eq!(silhouette.len(), 1);

    let (four_floors, _) = shapes_for(json!({
        "type": "building", "position": { "x": 0, "y": 0, "z": 0 },
        "measurements": { "floors": 4 }
    }));
    assert_eq!(four_floors.len(), 1 + 4 * 3);
}

#[test]
fn templates_scale_with_depth() {
    let near = single_object_scene(json!({
        "type": "tree", "position": { "x": 0, "y": 0, "z": -2 }
    }));
    let far = single_object_scene(json!({
        "type": "tree", "position": { "x": 0, "y": 0, "z": 6 }
    }));
    let ppu = pixels_per_world_unit(&near).unwrap();

    let near_p = project_scene(&near).unwrap();
    let far_p = project_scene(&far).unwrap();
    let near_shapes = silhouette_shapes(&near_p[0], ppu);
    let far_shapes = silhouette_shapes(&far_p[0], ppu);

    let (Shape::Rect(near_trunk), Shape::Rect(far_trunk)) = (near_shapes[0], far_shapes[0]) else {
        panic!("unexpected primitive kinds");
    };
    assert!(near_trunk.height() > far_trunk.height());
    // Far scale floor: 0.6 of the near size.
    assert!((far_trunk.height() / near_trunk.height() - 0.6).abs() < 1e-9);
}

#[test]
fn dog_and_bench_templates_emit_their_primitives() {
    let (dog_detail, dog_sil) = shapes_for(json!({
        "type": "dog", "position": { "x": 0, "y": 0, "z": 0 }
    }));
    assert_eq!(dog_detail.len(), 2 + 4); // body, head, four legs
    assert_eq!(dog_sil.len(), 2);
    assert!(matches!(dog_sil[0], Shape::Ellipse { .. }));

    let (bench_detail, bench_sil) = shapes_for(json!({
        "type": "bench", "position": { "x": 0, "y": 0, "z": 0 }
    }));
    assert_eq!(bench_detail.len(), 3); // seat and two legs
    assert_eq!(bench_sil.len(), 3);
}
