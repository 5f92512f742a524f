//! Fixed down-the-page meander that ignores page content.
//!
//! Coordinates are authored in a 1200-wide frame with `y` as a fraction of
//! page height, then scaled to the viewport width.

use crate::curve::spline::Curve;
use crate::foundation::core::{CubicBez, Point};

const FRAME_WIDTH: f64 = 1200.0;

#[derive(Clone, Copy)]
enum Step {
    /// Explicit cubic: both handles and the endpoint.
    Cubic([(f64, f64); 3]),
    /// Smooth cubic: first handle mirrors the previous second handle.
    Smooth([(f64, f64); 2]),
}

const STEPS: [Step; 8] = [
    Step::Cubic([(820.0, 0.08), (980.0, 0.12), (780.0, 0.16)]),
    Step::Smooth([(360.0, 0.24), (520.0, 0.28)]),
    Step::Cubic([(740.0, 0.34), (940.0, 0.38), (700.0, 0.42)]),
    Step::Smooth([(260.0, 0.50), (420.0, 0.54)]),
    Step::Cubic([(660.0, 0.60), (980.0, 0.64), (860.0, 0.68)]),
    Step::Smooth([(300.0, 0.76), (440.0, 0.80)]),
    Step::Cubic([(680.0, 0.86), (960.0, 0.90), (720.0, 0.94)]),
    Step::Smooth([(520.0, 0.98), (600.0, 1.02)]),
];

/// Build the meander for a page, measured with `samples_per_segment` chords.
///
/// The last segment overshoots the page bottom slightly so the stroke leaves
/// the page instead of stopping short of it.
pub fn meander_curve(page_height: f64, viewport_width: f64, samples_per_segment: u32) -> Curve {
    let h = if page_height.is_finite() { page_height.max(0.0) } else { 0.0 };
    let sx = if viewport_width.is_finite() && viewport_width > 0.0 {
        viewport_width / FRAME_WIDTH
    } else {
        0.0
    };
    let at = |(x, fy): (f64, f64)| Point::new(x * sx, fy * h);

    let mut cur = Point::new(600.0 * sx, (h * 0.02).max(120.0));
    let mut prev_handle = cur;
    let mut segments = Vec::with_capacity(STEPS.len());

    for step in STEPS {
        let (c1, c2, end) = match step {
            Step::Cubic([a, b, e]) => (at(a), at(b), at(e)),
            Step::Smooth([b, e]) => (cur + (cur - prev_handle), at(b), at(e)),
        };
        segments.push(CubicBez::new(cur, c1, c2, end));
        prev_handle = c2;
        cur = end;
    }

    Curve::from_segments(segments, samples_per_segment)
}

#[cfg(test)]
#[path = "../../tests/unit/route/meander.rs"]
mod tests;
