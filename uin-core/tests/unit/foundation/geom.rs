use super::*;

#[test]
fn axis_range_deserializes_from_pair() {
    let r: AxisRange = serde_json::from_value(serde_json::json!([-4.0, 4.0])).unwrap();
    assert_eq!(r, AxisRange { lo: -4.0, hi: 4.0 });
    assert_eq!(r.span(), 8.0);
    assert_eq!(serde_json::to_value(r).unwrap(), serde_json::json!([-4.0, 4.0]));
}

#[test]
fn normalize_maps_endpoints_and_beyond() {
    let r = AxisRange { lo: -2.0, hi: 6.0 };
    assert_eq!(r.normalize(-2.0), 0.0);
    assert_eq!(r.normalize(6.0), 1.0);
    assert_eq!(r.normalize(0.0), 0.25);
    // Values outside the interval are not clamped.
    assert!(r.normalize(10.0) > 1.0);
}

#[test]
fn degenerate_ranges_are_detected() {
    assert!(AxisRange { lo: 2.0, hi: 2.0 }.is_degenerate());
    assert!(AxisRange { lo: 3.0, hi: 1.0 }.is_degenerate());
    assert!(!AxisRange { lo: 0.0, hi: 4.5 }.is_degenerate());
}

#[test]
fn default_bounds_match_the_documented_volume() {
    assert_eq!(DEFAULT_BOUNDS.x, AxisRange { lo: -4.0, hi: 4.0 });
    assert_eq!(DEFAULT_BOUNDS.y, AxisRange { lo: 0.0, hi: 4.5 });
    assert_eq!(DEFAULT_BOUNDS.z, AxisRange { lo: -2.0, hi: 6.0 });
    assert!(DEFAULT_BOUNDS.ensure_nondegenerate().is_ok());
}

#[test]
fn bounds_reject_zero_span_axis() {
    let mut bounds = Bounds::default();
    bounds.y = AxisRange { lo: 1.0, hi: 1.0 };
    assert!(matches!(
        bounds.ensure_nondegenerate(),
        Err(UinError::DegenerateBounds { axis: Axis::Y })
    ));
}

#[test]
fn viewport_is_derived_at_the_reference_height() {
    let v = Viewport::from_aspect_ratio("16:9").unwrap();
    assert_eq!(v, Viewport { width: 1778, height: 1000 });

    let v = Viewport::from_aspect_ratio("1:1").unwrap();
    assert_eq!(v.width, REFERENCE_HEIGHT);

    let v = Viewport::from_aspect_ratio("4:3").unwrap();
    assert_eq!(v.width, 1333);
}

#[test]
fn malformed_aspect_ratios_are_rejected() {
    for bad in ["16", "16:9:2", "a:b", "16:0", "-16:9", ""] {
        assert!(
            matches!(
                Viewport::from_aspect_ratio(bad),
                Err(UinError::InvalidAspectRatio(s)) if s == bad
            ),
            "expected rejection for {bad:?}"
        );
    }
}
