use super::*;

fn vp(page_height: f64, viewport_width: f64) -> ViewportMetrics {
    ViewportMetrics::new(page_height, viewport_width, 800.0)
}

fn motifs(route: &Route) -> Vec<Motif> {
    route.spans().iter().map(|s| s.motif).collect()
}

#[test]
fn zero_regions_is_flourish_bowl_tail() {
    let route = RouteComposer::default().compose(&[], &vp(2000.0, 1200.0));
    assert_eq!(route.points().len(), 9);
    assert_eq!(motifs(&route), vec![Motif::Flourish, Motif::Bowl, Motif::Tail]);
    assert_eq!(route.points()[0], Point::new(240.0, 0.0));
    assert_eq!(*route.points().last().unwrap(), Point::new(240.0, 1999.0));
}

#[test]
fn endpoints_are_fixed_regardless_of_regions() {
    let composer = RouteComposer::default();
    let viewport = vp(6000.0, 1440.0);
    let regions: Vec<Region> = (0..7)
        .map(|i| Region::new(400.0 + 700.0 * i as f64, 200.0 + 40.0 * i as f64, 600.0, 300.0))
        .collect();

    for n in 0..=regions.len() {
        let route = composer.compose(&regions[..n], &viewport);
        let pts = route.points();
        assert!(pts.len() >= 2);
        assert_eq!(pts[0], Point::new(288.0, 0.0));
        assert_eq!(pts[pts.len() - 1], Point::new(288.0, 5999.0));
    }
}

#[test]
fn roomier_side_wins() {
    let composer = RouteComposer::default();
    let region = Region::new(500.0, 100.0, 400.0, 200.0);
    assert_eq!(composer.decide_side(&region, 0, 1200.0), Side::Right);
    assert_eq!(composer.decide_side(&region, 1, 1200.0), Side::Right);

    let region = Region::new(500.0, 700.0, 400.0, 200.0);
    assert_eq!(composer.decide_side(&region, 0, 1200.0), Side::Left);
}

#[test]
fn near_ties_alternate_by_index() {
    let composer = RouteComposer::default();
    let region = Region::new(500.0, 380.0, 400.0, 200.0);
    assert_eq!(composer.decide_side(&region, 0, 1200.0), Side::Left);
    assert_eq!(composer.decide_side(&region, 1, 1200.0), Side::Right);
    assert_eq!(composer.decide_side(&region, 2, 1200.0), Side::Left);

    let regions = [
        Region::new(500.0, 400.0, 400.0, 200.0),
        Region::new(1200.0, 400.0, 400.0, 200.0),
    ];
    let route = composer.compose(&regions, &vp(3000.0, 1200.0));
    let sides: Vec<Side> = route
        .spans()
        .iter()
        .filter(|s| s.motif == Motif::Avoid)
        .filter_map(|s| s.side)
        .collect();
    assert_eq!(sides, vec![Side::Left, Side::Right]);
}

#[test]
fn single_region_hugs_right_edge_and_loops_left() {
    let composer = RouteComposer::default();
    let region = Region::new(500.0, 100.0, 400.0, 200.0);
    let route = composer.compose(&[region], &vp(3000.0, 1200.0));
    assert_eq!(
        motifs(&route),
        vec![
            Motif::Flourish,
            Motif::Avoid,
            Motif::Loop,
            Motif::Bowl,
            Motif::Tail
        ]
    );

    let avoid = &route.spans()[1];
    assert_eq!(avoid.side, Some(Side::Right));
    let pts = &route.points()[avoid.range.clone()];
    assert_eq!(pts.len(), 5);
    let gutter = composer.gutter(1200.0);
    assert_eq!(gutter, 96.0);
    for p in &pts[1..4] {
        assert_eq!(p.x, 542.0);
        assert!(p.x >= gutter && p.x <= 1200.0 - gutter);
    }
    assert_eq!(pts[0].y, 320.0);
    assert_eq!(pts[1].y, 494.0);
    assert_eq!(pts[2].y, 600.0);
    assert_eq!(pts[3].y, 706.0);
    assert_eq!(pts[4].y, 920.0);

    let lp = &route.spans()[2];
    assert_eq!(lp.side, Some(Side::Left));
    assert_eq!(lp.range.len(), 4);
    let loop_pts = &route.points()[lp.range.clone()];
    assert_eq!(loop_pts[1].x, gutter);
    assert_eq!(loop_pts[2].x, gutter);
}

#[test]
fn exactly_one_loop_at_expected_index() {
    let composer = RouteComposer::default();
    let regions: Vec<Region> = (0..5)
        .map(|i| Region::new(600.0 + 900.0 * i as f64, 300.0, 500.0, 300.0))
        .collect();
    let route = composer.compose(&regions, &vp(6000.0, 1200.0));

    let loops: Vec<usize> = route
        .spans()
        .iter()
        .enumerate()
        .filter(|(_, s)| s.motif == Motif::Loop)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(loops.len(), 1);
    // flourish + three avoid spans precede it: floor(5 * 0.45) = 2
    assert_eq!(route.spans()[loops[0] - 1].motif, Motif::Avoid);
    assert_eq!(loops[0], 4);
    assert_eq!(composer.loop_index(5), Some(2));
    assert_eq!(composer.loop_index(0), None);
}

#[test]
fn spans_cover_all_points_in_order() {
    let regions = [
        Region::new(500.0, 100.0, 400.0, 200.0),
        Region::new(1300.0, 600.0, 500.0, 400.0),
    ];
    let route = RouteComposer::default().compose(&regions, &vp(4000.0, 1280.0));
    let mut next = 0;
    for span in route.spans() {
        assert_eq!(span.range.start, next);
        next = span.range.end;
    }
    assert_eq!(next, route.points().len());
    assert_eq!(route.points().len(), 4 + 5 * 2 + 4 + 3 + 2);
}

#[test]
fn compose_is_deterministic() {
    let composer = RouteComposer::default();
    let regions = [
        Region::new(500.0, 380.0, 400.0, 200.0),
        Region::new(1300.0, 390.0, 400.0, 300.0),
    ];
    let viewport = vp(4000.0, 1200.0);
    assert_eq!(
        composer.compose(&regions, &viewport),
        composer.compose(&regions, &viewport)
    );
}

#[test]
fn narrow_viewport_does_not_panic() {
    let composer = RouteComposer::default();
    let route = composer.compose(
        &[Region::new(100.0, 10.0, 80.0, 50.0)],
        &vp(400.0, 100.0),
    );
    assert!(route.points().iter().all(|p| p.x.is_finite() && p.y.is_finite()));
}

#[test]
fn degenerate_viewport_still_produces_route() {
    let route = RouteComposer::default().compose(&[], &ViewportMetrics::new(f64::NAN, 0.0, 0.0));
    assert_eq!(route.points().len(), 9);
    assert!(route.points().iter().all(|p| p.x.is_finite() && p.y.is_finite()));
}

#[test]
fn bowl_sits_in_lower_page() {
    let route = RouteComposer::default().compose(&[], &vp(2000.0, 1200.0));
    let bowl = &route.spans()[1];
    let pts = &route.points()[bowl.range.clone()];
    // min(h - 260, max(0.68h, h - 900)) = min(1740, 1360)
    let bowl_w = (1200.0f64 * 0.55).min(860.0);
    assert!((pts[0].x - (240.0 - bowl_w * 0.40)).abs() < 1e-9);
    assert!((pts[0].y - 1360.0).abs() < 1e-9);
    assert!((pts[1].y - 1540.0).abs() < 1e-9);
    assert!((pts[2].y - 1680.0).abs() < 1e-9);
}
