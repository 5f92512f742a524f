use super::*;
use crate::curve::spline::SplineBuilder;
use crate::foundation::core::Point;

fn presented(style: OverlayStyle) -> SvgOverlay {
    let curve = SplineBuilder::default().build(&[
        Point::new(10.0, 0.0),
        Point::new(60.0, 50.0),
        Point::new(20.0, 99.0),
    ]);
    let mut overlay = SvgOverlay::new(style);
    overlay.present_curve(&curve, &ViewportMetrics::new(100.0, 80.0, 50.0));
    overlay
}

#[test]
fn document_carries_dash_state() {
    let mut overlay = presented(OverlayStyle::default());
    let total = overlay.state().total_length;
    overlay.present_progress(DrawState {
        total_length: total,
        visible_length: total * 0.25,
    });

    let doc = overlay.to_svg_document();
    assert!(doc.starts_with("<svg"));
    assert!(doc.contains(r#"viewBox="0 0 80 100""#));
    assert!(doc.contains(&format!(r#"stroke-dasharray="{total}""#)));
    assert!(doc.contains(&format!(r#"stroke-dashoffset="{}""#, total - total * 0.25)));
    assert!(doc.contains(r#"stroke-linecap="round""#));
    assert!(!doc.contains("filter"));
}

#[test]
fn fresh_curve_starts_hidden() {
    let overlay = presented(OverlayStyle::default());
    let s = overlay.state();
    assert_eq!(s.visible_length, 0.0);
    assert_eq!(s.dash_offset(), s.total_length);
    assert_eq!(overlay.size(), (80.0, 100.0));
    assert!(overlay.path_data().starts_with('M'));
}

#[test]
fn glow_adds_filter() {
    let overlay = presented(OverlayStyle {
        glow: Some(3.0),
        ..OverlayStyle::default()
    });
    let doc = overlay.to_svg_document();
    assert!(doc.contains(r#"<feGaussianBlur stdDeviation="3""#));
    assert!(doc.contains(r#"filter="url(#glow)""#));
}

#[test]
fn stroke_value_is_escaped() {
    let overlay = presented(OverlayStyle {
        stroke: r#"red" onload="x"#.to_string(),
        ..OverlayStyle::default()
    });
    let doc = overlay.to_svg_document();
    assert!(doc.contains("red&quot; onload=&quot;x"));
}

#[test]
fn empty_overlay_has_no_path() {
    let doc = SvgOverlay::default().to_svg_document();
    assert!(!doc.contains("<path"));
    assert!(doc.ends_with("</svg>"));
}
