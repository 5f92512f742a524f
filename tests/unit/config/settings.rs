use super::*;

#[test]
fn defaults_validate() {
    let cfg = OverlayConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.kind, RouteKind::Signature);
    assert_eq!(cfg.spline.tension, 0.15);
    assert_eq!(cfg.watch.debounce(), Duration::from_millis(160));
}

#[test]
fn partial_json_fills_defaults() {
    let cfg = OverlayConfig::from_json_str(
        r#"{ "kind": "meander", "spline": { "tension": 0.2 }, "style": { "glow": 3.0 } }"#,
    )
    .unwrap();
    assert_eq!(cfg.kind, RouteKind::Meander);
    assert_eq!(cfg.spline.tension, 0.2);
    assert_eq!(cfg.spline.samples_per_segment, 16);
    assert_eq!(cfg.route.wall_offset, 42.0);
    assert_eq!(cfg.style.glow, Some(3.0));
}

#[test]
fn crossed_gutters_are_rejected() {
    let mut cfg = OverlayConfig::default();
    cfg.route.gutter_min = 300.0;
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("gutter_min"));
}

#[test]
fn out_of_range_tension_is_rejected() {
    let err = OverlayConfig::from_json_str(r#"{ "spline": { "tension": 1.5 } }"#).unwrap_err();
    assert!(err.to_string().contains("spline.tension"));
}

#[test]
fn zero_samples_are_rejected() {
    let mut cfg = OverlayConfig::default();
    cfg.spline.samples_per_segment = 0;
    assert!(cfg.validate().is_err());
}

#[test]
fn inverted_draw_window_is_rejected() {
    let mut cfg = OverlayConfig::default();
    cfg.draw = ProgressWindow::new(0.8, 0.2);
    assert!(cfg.validate().is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = OverlayConfig::from_json_str("{ nope").unwrap_err();
    assert!(matches!(err, SigflowError::Serde(_)));
}

#[test]
fn missing_file_reports_path() {
    let err = OverlayConfig::from_json_file(Path::new("does/not/exist.json")).unwrap_err();
    assert!(err.to_string().contains("exist.json"));
}
