use super::*;
use crate::foundation::error::{UinError, ValidationError};
use serde_json::json;

#[test]
fn defaults_validate_and_keep_quality_tags() {
    let opts = ConvertOptions::default();
    assert!(opts.validate);
    assert!(opts.quality_tags);
    assert!(opts.style.is_none());
}

#[test]
fn parse_document_surfaces_parse_errors() {
    assert!(parse_document("{\"version\": \"1.0\"}").is_ok());
    assert!(matches!(
        parse_document("{not json"),
        Err(UinError::Parse(_))
    ));
}

#[test]
fn validation_runs_before_conversion_by_default() {
    // Valid JSON, structurally invalid document: no bounds.
    let doc = json!({ "version": "1.0", "objects": [] });
    let err = to_svg(&doc, &ConvertOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        UinError::Validation(ValidationError::MissingBounds)
    ));
}

#[test]
fn callers_may_opt_out_of_validation() {
    let doc = json!({ "version": "1.0", "objects": [] });
    let opts = ConvertOptions {
        validate: false,
        ..ConvertOptions::default()
    };
    // Defaults fill in the missing canvas.
    assert!(to_svg(&doc, &opts).is_ok());
    assert!(to_prompt(&doc, &opts).is_ok());
}

#[test]
fn unknown_types_fail_even_with_validation_off() {
    let doc = json!({
        "version": "1.0",
        "objects": [
            { "type": "spaceship", "position": { "x": 0, "y": 0, "z": 0 } }
        ]
    });
    let opts = ConvertOptions {
        validate: false,
        ..ConvertOptions::default()
    };
    assert!(matches!(
        to_svg(&doc, &opts).unwrap_err(),
        UinError::Validation(ValidationError::UnknownObjectType { index: 0, .. })
    ));
}

#[test]
fn no_partial_artifact_on_failure() {
    let doc = json!({ "version": "1.0" }); // missing bounds fails validation
    assert!(to_depth_map(&doc, &ConvertOptions::default()).is_err());
    assert!(to_structured_prompt(&doc, &ConvertOptions::default()).is_err());
}

#[test]
fn zero_object_scene_produces_all_three_artifacts() {
    let doc = json!({
        "version": "1.0",
        "canvas": {
            "aspect_ratio": "16:9",
            "bounds": { "x": [-4, 4], "y": [0, 4.5], "z": [-2, 6] }
        },
        "global": { "lighting": { "type": "golden_hour" } },
        "objects": []
    });
    let opts = ConvertOptions::default();

    let svg = to_svg(&doc, &opts).unwrap();
    assert!(!svg.contains("<g"));

    let dm = to_depth_map(&doc, &opts).unwrap();
    assert!(dm.data().iter().all(|&px| px == 0));

    let prompt = to_prompt(&doc, &opts).unwrap();
    assert_eq!(
        prompt,
        "golden_hour lighting, highly detailed, photorealistic, \
         cinematic composition, masterpiece"
    );
}

#[test]
fn prompt_options_flow_through() {
    let doc = json!({
        "version": "1.0",
        "canvas": { "bounds": { "x": [-4, 4], "y": [0, 4.5], "z": [-2, 6] } },
        "objects": [
            { "type": "car", "position": { "x": 0, "y": 0, "z": 0 } }
        ]
    });
    let opts = ConvertOptions {
        validate: true,
        style: Some("film grain".into()),
        quality_tags: false,
    };
    assert_eq!(to_prompt(&doc, &opts).unwrap(), "modern car, film grain");

    let structured = to_structured_prompt(&doc, &opts).unwrap();
    assert_eq!(structured.positive, "modern car, film grain");
}
