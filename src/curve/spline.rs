use kurbo::ParamCurve;

use crate::foundation::core::{BezPath, CubicBez, Point};

/// Smoothing parameters for the Catmull-Rom to Bezier conversion.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SplineStyle {
    /// Handle length as a fraction of the neighbor chord. Lower is softer.
    pub tension: f64,
    /// Polyline samples per segment used for arc length.
    pub samples_per_segment: u32,
}

impl Default for SplineStyle {
    fn default() -> Self {
        Self {
            tension: 0.15,
            samples_per_segment: 16,
        }
    }
}

/// A smooth stroke: cubic segments sharing endpoints, with its arc length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Curve {
    segments: Vec<CubicBez>,
    total_length: f64,
}

impl Curve {
    /// Build a curve from segments and measure it once.
    ///
    /// Callers must pass segments whose endpoints chain
    /// (`segments[i].p3 == segments[i + 1].p0`).
    pub fn from_segments(segments: Vec<CubicBez>, samples_per_segment: u32) -> Self {
        let total_length = segments
            .iter()
            .map(|seg| polyline_length(seg, samples_per_segment))
            .sum::<f64>();
        Self {
            segments,
            total_length,
        }
    }

    /// Cubic segments in drawing order.
    pub fn segments(&self) -> &[CubicBez] {
        &self.segments
    }

    /// Approximate arc length, never negative.
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Return `true` when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// First point of the stroke.
    pub fn start(&self) -> Option<Point> {
        self.segments.first().map(|s| s.p0)
    }

    /// Last point of the stroke.
    pub fn end(&self) -> Option<Point> {
        self.segments.last().map(|s| s.p3)
    }

    /// Convert to a kurbo path (`M` followed by one `C` per segment).
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        if let Some(first) = self.segments.first() {
            path.move_to(first.p0);
        }
        for seg in &self.segments {
            path.curve_to(seg.p1, seg.p2, seg.p3);
        }
        path
    }

    /// SVG path data for the rendering surface.
    pub fn path_data(&self) -> String {
        self.to_bez_path().to_svg()
    }
}

/// Arc length of one segment approximated by `samples` chords.
pub fn polyline_length(seg: &CubicBez, samples: u32) -> f64 {
    let n = samples.max(1);
    let mut prev = seg.p0;
    let mut len = 0.0;
    for i in 1..=n {
        let p = seg.eval(f64::from(i) / f64::from(n));
        len += prev.distance(p);
        prev = p;
    }
    if len.is_finite() { len } else { 0.0 }
}

/// Interpolating spline through an ordered list of control points.
#[derive(Clone, Debug, Default)]
pub struct SplineBuilder {
    style: SplineStyle,
}

impl SplineBuilder {
    /// Create a builder.
    pub fn new(style: SplineStyle) -> Self {
        Self { style }
    }

    /// Style in use.
    pub fn style(&self) -> &SplineStyle {
        &self.style
    }

    /// Build one cubic per consecutive pair of points.
    ///
    /// Boundary windows reuse the first/last point as the missing neighbor.
    /// Fewer than two points yield an empty curve.
    #[tracing::instrument(skip(self, points), fields(points = points.len()))]
    pub fn build(&self, points: &[Point]) -> Curve {
        let t = self.style.tension;
        let n = points.len();
        let mut segments = Vec::with_capacity(n.saturating_sub(1));

        for i in 0..n.saturating_sub(1) {
            let p0 = points[i.saturating_sub(1)];
            let p1 = points[i];
            let p2 = points[i + 1];
            let p3 = points[(i + 2).min(n - 1)];

            let c1 = p1 + (p2 - p0) * t;
            let c2 = p2 - (p3 - p1) * t;
            segments.push(CubicBez::new(p1, c1, c2, p2));
        }

        let curve = Curve::from_segments(segments, self.style.samples_per_segment);
        tracing::debug!(
            segments = curve.segments.len(),
            total_length = curve.total_length,
            "built curve"
        );
        curve
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/spline.rs"]
mod tests;
