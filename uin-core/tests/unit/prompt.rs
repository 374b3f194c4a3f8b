use super::*;
use crate::scene::model::Scene;
use serde_json::json;

fn scene(doc: serde_json::Value) -> Scene {
    Scene::from_value(&doc).unwrap()
}

#[test]
fn prompt_is_deterministic() {
    let doc = json!({
        "version": "1.0",
        "global": { "lighting": { "type": "golden_hour" } },
        "objects": [
            { "type": "human", "position": { "x": 0, "y": 0, "z": 0 } },
            { "type": "tree", "position": { "x": 2, "y": 0, "z": 3 } }
        ]
    });
    let s = scene(doc);
    let a = compose(&s, Some("oil painting"), true);
    let b = compose(&s, Some("oil painting"), true);
    assert_eq!(a, b);
}

#[test]
fn phrases_follow_document_order_not_depth_order() {
    let s = scene(json!({
        "version": "1.0",
        "objects": [
            { "type": "tree", "position": { "x": 0, "y": 0, "z": 5 },
              "measurements": { "height": 12 } },
            { "type": "human", "position": { "x": 1, "y": 0, "z": -1 } }
        ]
    }));
    let prompt = compose(&s, None, false);
    // The far tree is listed first because the document lists it first.
    assert_eq!(prompt, "large tree, in background, person");
}

#[test]
fn lighting_quality_and_style_wrap_the_object_phrases() {
    let s = scene(json!({
        "version": "1.0",
        "global": { "lighting": { "type": "golden_hour" } },
        "objects": [
            { "type": "dog", "position": { "x": 0, "y": 0, "z": 0 } }
        ]
    }));
    let prompt = compose(&s, Some("watercolor"), true);
    assert_eq!(
        prompt,
        "golden_hour lighting, friendly dog, highly detailed, photorealistic, \
         cinematic composition, masterpiece, watercolor"
    );

    let bare = compose(&s, None, false);
    assert_eq!(bare, "golden_hour lighting, friendly dog");
}

#[test]
fn human_phrases_use_description_and_features() {
    let s = scene(json!({
        "version": "1.0",
        "objects": [
            { "type": "human", "position": { "x": 0, "y": 0, "z": 0 },
              "description": "woman in red coat",
              "features": {
                  "hair": { "length": "long", "style": "braided",
                            "color": { "hex": "#803300" } },
                  "eyes": { "color": "green" },
                  "face": { "expression": "smiling" }
              } }
        ]
    }));
    assert_eq!(
        compose(&s, None, false),
        "woman in red coat, long hair, distinctive hair color, braided hairstyle, \
         green eyes, smiling"
    );
}

#[test]
fn tree_height_buckets_are_monotonic() {
    for (height, phrase) in [(12.0, "large tree"), (7.0, "medium tree"), (2.0, "small tree")] {
        let s = scene(json!({
            "version": "1.0",
            "objects": [
                { "type": "tree", "position": { "x": 0, "y": 0, "z": 0 },
                  "measurements": { "height": height } }
            ]
        }));
        assert_eq!(compose(&s, None, false), phrase);
    }
    // Default tree height (3 m) buckets as small.
    let s = scene(json!({
        "version": "1.0",
        "objects": [{ "type": "tree", "position": { "x": 0, "y": 0, "z": 0 } }]
    }));
    assert_eq!(compose(&s, None, false), "small tree");
}

#[test]
fn car_and_building_phrases_track_features_and_depth() {
    let s = scene(json!({
        "version": "1.0",
        "objects": [
            { "type": "car", "position": { "x": 0, "y": 0, "z": 4 },
              "features": { "type": "vintage" } },
            { "type": "building", "position": { "x": 1, "y": 0, "z": 5 },
              "measurements": { "floors": 14 },
              "features": { "roof_type": "flat" } }
        ]
    }));
    assert_eq!(
        compose(&s, None, false),
        "vintage car, in distance, tall skyscraper, with flat roof, in far background"
    );
}

#[test]
fn negative_prompt_appends_additional_phrases() {
    let neg = negative_prompt(&[]);
    assert!(neg.starts_with("blurry, deformed"));
    assert!(neg.contains("extra limbs"));

    let neg = negative_prompt(&["text", "watermark"]);
    assert!(neg.ends_with("extra limbs, text, watermark"));
}

#[test]
fn structured_prompt_carries_scene_metadata() {
    let s = scene(json!({
        "version": "1.0",
        "global": { "lighting": { "type": "night" } },
        "objects": [
            { "type": "bench", "position": { "x": 0, "y": 0, "z": 0 } }
        ]
    }));
    let structured = compose_structured(&s, None, true);
    assert!(structured.positive.contains("park bench"));
    assert!(structured.negative.contains("low quality"));
    assert_eq!(structured.metadata.lighting.as_deref(), Some("night"));
    assert_eq!(structured.metadata.object_count, 1);
    assert_eq!(structured.metadata.aspect_ratio, "16:9");
    assert_eq!(structured.metadata.complexity, Complexity::Simple);

    let v = serde_json::to_value(&structured).unwrap();
    assert_eq!(v["metadata"]["complexity"], "simple");
}

#[test]
fn complexity_thresholds_are_monotonic() {
    // Two plain objects: score 4 -> simple.
    let simple = scene(json!({
        "version": "1.0",
        "objects": [
            { "type": "dog", "position": { "x": 0, "y": 0, "z": 0 } },
            { "type": "bench", "position": { "x": 1, "y": 0, "z": 0 } }
        ]
    }));
    assert_eq!(complexity(&simple), Complexity::Simple);

    // One object with three features -> score 5 -> medium.
    let medium = scene(json!({
        "version": "1.0",
        "objects": [
            { "type": "human", "position": { "x": 0, "y": 0, "z": 0 },
              "features": { "hair": {}, "eyes": {}, "face": {} } }
        ]
    }));
    assert_eq!(complexity(&medium), Complexity::Medium);

    // Eight plain objects: score 16 -> complex.
    let objects: Vec<_> = (0..8)
        .map(|i| json!({ "type": "tree", "position": { "x": i, "y": 0, "z": 0 } }))
        .collect();
    let complex = scene(json!({ "version": "1.0", "objects": objects }));
    assert_eq!(complexity(&complex), Complexity::Complex);
}
