use std::ops::Range;

use crate::foundation::core::{Point, Region, Side, ViewportMetrics};
use crate::foundation::math::{clamp, mix};

/// Tunables for route synthesis. All lengths are in page pixels.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RouteStyle {
    /// Smallest allowed side margin.
    pub gutter_min: f64,
    /// Largest allowed side margin.
    pub gutter_max: f64,
    /// Side margin as a fraction of viewport width, before clamping.
    pub gutter_ratio: f64,
    /// Horizontal anchor of the stroke as a fraction of viewport width.
    pub start_x_ratio: f64,
    /// How far above a region the approach point sits.
    pub approach_offset: f64,
    /// How far below a region the departure point sits.
    pub depart_offset: f64,
    /// Gap between a region's side and the stroke hugging it.
    pub wall_offset: f64,
    /// Overshoot of the hug points past the region's top/bottom edges.
    pub hug_inset: f64,
    /// Space difference below which sides alternate by index.
    pub side_threshold: f64,
    /// Position of the loop region as a fraction of the region count.
    pub loop_index_ratio: f64,
    /// Loop radius as a fraction of viewport width, before clamping.
    pub loop_radius_ratio: f64,
    /// Smallest loop radius.
    pub loop_radius_min: f64,
    /// Largest loop radius.
    pub loop_radius_max: f64,
    /// Distance of the final point above the page bottom.
    pub exit_inset: f64,
}

impl Default for RouteStyle {
    fn default() -> Self {
        Self {
            gutter_min: 80.0,
            gutter_max: 220.0,
            gutter_ratio: 0.08,
            start_x_ratio: 0.20,
            approach_offset: 180.0,
            depart_offset: 220.0,
            wall_offset: 42.0,
            hug_inset: 6.0,
            side_threshold: 80.0,
            loop_index_ratio: 0.45,
            loop_radius_ratio: 0.04,
            loop_radius_min: 34.0,
            loop_radius_max: 48.0,
            exit_inset: 1.0,
        }
    }
}

/// Named stylistic sub-sequence of control points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Motif {
    /// Arch-and-hook near the top of the page.
    Flourish,
    /// Wrap around one region on the chosen side.
    Avoid,
    /// Decorative loop on the side opposite the avoidance.
    Loop,
    /// Wide wobble near the bottom of the page.
    Bowl,
    /// Ease back to the start column and finish at the page bottom.
    Tail,
}

/// Contiguous run of route points produced by one motif.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MotifSpan {
    /// Which motif emitted the points.
    pub motif: Motif,
    /// Index range into [`Route::points`].
    pub range: Range<usize>,
    /// Chosen side, for avoidance and loop spans.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
}

/// Ordered control points plus the motif each run came from.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Route {
    points: Vec<Point>,
    spans: Vec<MotifSpan>,
}

impl Route {
    /// Control points in drawing order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Motif spans in drawing order.
    pub fn spans(&self) -> &[MotifSpan] {
        &self.spans
    }

    /// Take ownership of the control points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    fn emit(&mut self, motif: Motif, side: Option<Side>, pts: &[Point]) {
        let start = self.points.len();
        self.points.extend_from_slice(pts);
        self.spans.push(MotifSpan {
            motif,
            range: start..self.points.len(),
            side,
        });
    }
}

/// Turns measured regions into the control points of the signature stroke.
///
/// Pure and deterministic: identical inputs give identical routes.
#[derive(Clone, Debug, Default)]
pub struct RouteComposer {
    style: RouteStyle,
}

impl RouteComposer {
    /// Create a composer with the given style.
    pub fn new(style: RouteStyle) -> Self {
        Self { style }
    }

    /// Style in use.
    pub fn style(&self) -> &RouteStyle {
        &self.style
    }

    /// Side margin for a viewport width.
    pub fn gutter(&self, viewport_width: f64) -> f64 {
        let s = &self.style;
        clamp(
            (viewport_width * s.gutter_ratio).round(),
            s.gutter_min,
            s.gutter_max,
        )
    }

    /// Column the stroke starts and ends in.
    pub fn start_x(&self, viewport_width: f64) -> f64 {
        (viewport_width * self.style.start_x_ratio).round()
    }

    /// Pick the side with more room; near-ties alternate by index.
    pub fn decide_side(&self, region: &Region, index: usize, viewport_width: f64) -> Side {
        let left_space = region.left.max(0.0);
        let right_space = (viewport_width - region.right()).max(0.0);
        if (left_space - right_space).abs() < self.style.side_threshold {
            return if index % 2 == 0 { Side::Left } else { Side::Right };
        }
        if left_space > right_space {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Index of the region that receives the loop motif, if any.
    pub fn loop_index(&self, region_count: usize) -> Option<usize> {
        if region_count == 0 {
            return None;
        }
        let idx = (region_count as f64 * self.style.loop_index_ratio).floor() as usize;
        Some(idx.min(region_count - 1))
    }

    /// Compose the route for one build pass.
    ///
    /// Always starts at `(start_x, 0)` and ends at
    /// `(start_x, page_height - exit_inset)`, whatever the region count.
    #[tracing::instrument(skip(self, regions), fields(regions = regions.len()))]
    pub fn compose(&self, regions: &[Region], viewport: &ViewportMetrics) -> Route {
        let vp = viewport.sanitized();
        let w = vp.viewport_width;
        let h = vp.page_height;
        let s = &self.style;

        let gutter = self.gutter(w);
        let x_start = self.start_x(w);
        let edge_x = |region: &Region, side: Side, extra: f64| match side {
            Side::Left => clamp(region.left - s.wall_offset - extra, gutter, w - gutter),
            Side::Right => clamp(region.right() + s.wall_offset + extra, gutter, w - gutter),
        };

        let mut route = Route::default();

        let top_y = (h * 0.06).min(420.0);
        route.emit(
            Motif::Flourish,
            None,
            &[
                Point::new(x_start, 0.0),
                Point::new(x_start + (w * 0.12).min(120.0), top_y * 0.45),
                Point::new(x_start - 28.0, top_y * 0.75),
                Point::new(x_start + 8.0, top_y),
            ],
        );

        let loop_at = self.loop_index(regions.len());
        for (i, r) in regions.iter().enumerate() {
            let side = self.decide_side(r, i, w);
            let x_edge = edge_x(r, side, 0.0);
            let y_in = (r.top - s.approach_offset).max(0.0);
            let y_out = (r.bottom() + s.depart_offset).min(h);

            route.emit(
                Motif::Avoid,
                Some(side),
                &[
                    Point::new(mix(x_start, x_edge, 0.45), y_in),
                    Point::new(x_edge, r.top - s.hug_inset),
                    Point::new(x_edge, r.center_y()),
                    Point::new(x_edge, r.bottom() + s.hug_inset),
                    Point::new(mix(x_edge, x_start, 0.58), y_out),
                ],
            );

            if loop_at == Some(i) {
                let radius = clamp(w * s.loop_radius_ratio, s.loop_radius_min, s.loop_radius_max);
                let loop_side = side.opposite();
                let lx = edge_x(r, loop_side, radius);
                let ly = r.center_y() + (r.height * 0.25).min(36.0);
                route.emit(
                    Motif::Loop,
                    Some(loop_side),
                    &[
                        Point::new(mix(x_start, lx, 0.55), ly - radius * 0.9),
                        Point::new(lx, ly - radius * 0.2),
                        Point::new(lx, ly + radius * 0.2),
                        Point::new(mix(lx, x_start, 0.6), ly + radius * 0.9),
                    ],
                );
            }
        }

        let bowl_y = (h - 260.0).min((h * 0.68).max(h - 900.0));
        let bowl_w = (w * 0.55).min(860.0);
        route.emit(
            Motif::Bowl,
            None,
            &[
                Point::new(x_start - bowl_w * 0.40, bowl_y),
                Point::new(x_start + bowl_w * 0.55, bowl_y + 180.0),
                Point::new(x_start - bowl_w * 0.20, bowl_y + 320.0),
            ],
        );

        route.emit(
            Motif::Tail,
            None,
            &[
                Point::new(x_start + (w * 0.16).min(160.0), h - 140.0),
                Point::new(x_start, h - s.exit_inset),
            ],
        );

        tracing::debug!(points = route.points.len(), "composed route");
        route
    }
}

#[cfg(test)]
#[path = "../../tests/unit/route/composer.rs"]
mod tests;
