use super::*;

fn page() -> StaticPage {
    StaticPage::new(ViewportMetrics::new(3000.0, 1200.0, 800.0))
        .with_region(Region::new(500.0, 100.0, 400.0, 200.0))
}

#[test]
fn anchors_are_reported_viewport_relative() {
    let mut p = page();
    p.scroll_to(300.0);
    let rects = p.anchor_rects();
    assert_eq!(rects, vec![Rect::new(100.0, 200.0, 500.0, 400.0)]);
}

#[test]
fn scroll_is_clamped_to_scrollable_range() {
    let mut p = page();
    p.scroll_to(10_000.0);
    assert_eq!(p.scroll_offset(), 2200.0);
    p.scroll_to(-5.0);
    assert_eq!(p.scroll_offset(), 0.0);
}

#[test]
fn subscriptions_are_tracked_per_id() {
    let mut p = page();
    let a = p.subscribe(Signal::Resize);
    let b = p.subscribe(Signal::Scroll);
    assert_ne!(a, b);
    assert_eq!(p.active_subscriptions(), 2);
    assert!(p.is_subscribed(Signal::Scroll));

    p.unsubscribe(b);
    p.unsubscribe(b);
    assert_eq!(p.active_subscriptions(), 1);
    assert!(!p.is_subscribed(Signal::Scroll));
}

#[test]
fn json_page_parses_and_validates() {
    let s = r#"{
        "metrics": { "page_height": 2000, "viewport_width": 1200, "viewport_height": 800 },
        "regions": [ { "top": 500, "left": 100, "width": 400, "height": 200 } ]
    }"#;
    let p = StaticPage::from_json_str(s).unwrap();
    assert_eq!(p.regions.len(), 1);
    assert_eq!(p.scroll_offset, 0.0);
    assert_eq!(p.active_subscriptions(), 0);
}

#[test]
fn negative_region_size_is_rejected() {
    let mut p = page();
    p.regions.push(Region::new(0.0, 0.0, -1.0, 10.0));
    let err = p.validate().unwrap_err();
    assert!(err.to_string().contains("region 1"));
}

#[test]
fn negative_metrics_are_rejected() {
    let p = StaticPage::new(ViewportMetrics::new(-1.0, 1200.0, 800.0));
    assert!(p.validate().is_err());
}
