use std::fmt::Write as _;

use crate::curve::spline::Curve;
use crate::draw::progress::DrawState;
use crate::foundation::core::ViewportMetrics;
use crate::render::surface::StrokeSurface;

/// Stroke cap style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    /// Flat cap at the endpoint.
    Butt,
    /// Rounded cap.
    #[default]
    Round,
    /// Square cap extending past the endpoint.
    Square,
}

impl LineCap {
    fn as_svg(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// Paint settings for the overlay stroke.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    /// Stroke colour as an SVG paint value.
    pub stroke: String,
    /// Stroke width in pixels.
    pub stroke_width: f64,
    /// Stroke opacity in `[0, 1]`.
    pub opacity: f64,
    /// Endpoint cap style.
    pub line_cap: LineCap,
    /// Gaussian glow standard deviation; `None` disables the glow.
    pub glow: Option<f64>,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            stroke: "#000".to_string(),
            stroke_width: 1.8,
            opacity: 0.96,
            line_cap: LineCap::Round,
            glow: None,
        }
    }
}

/// Surface that keeps the latest stroke and serializes it as an SVG document.
///
/// Reveal is expressed the usual way: a dash as long as the curve, offset by
/// the hidden length.
#[derive(Clone, Debug, Default)]
pub struct SvgOverlay {
    style: OverlayStyle,
    path_data: String,
    width: f64,
    height: f64,
    state: DrawState,
}

impl SvgOverlay {
    /// Create an empty overlay.
    pub fn new(style: OverlayStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Path data of the last presented curve.
    pub fn path_data(&self) -> &str {
        &self.path_data
    }

    /// Last presented draw state.
    pub fn state(&self) -> DrawState {
        self.state
    }

    /// Overlay size as `(width, height)`.
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Serialize the overlay as a standalone SVG document.
    pub fn to_svg_document(&self) -> String {
        let w = self.width.max(1.0);
        let h = self.height.max(1.0);
        let s = &self.style;

        let mut out = String::new();
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );

        if let Some(dev) = s.glow {
            let _ = write!(
                out,
                concat!(
                    r#"<defs><filter id="glow" x="-50%" y="-50%" width="200%" height="200%">"#,
                    r#"<feGaussianBlur stdDeviation="{}" result="b"/>"#,
                    r#"<feMerge><feMergeNode in="b"/><feMergeNode in="SourceGraphic"/></feMerge>"#,
                    r#"</filter></defs>"#
                ),
                dev
            );
        }

        if !self.path_data.is_empty() {
            let _ = write!(
                out,
                r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="{}" opacity="{}""#,
                self.path_data,
                escape_attr(&s.stroke),
                s.stroke_width,
                s.line_cap.as_svg(),
                s.opacity,
            );
            if self.state.total_length > 0.0 {
                let _ = write!(
                    out,
                    r#" stroke-dasharray="{}" stroke-dashoffset="{}""#,
                    self.state.total_length,
                    self.state.dash_offset()
                );
            }
            if s.glow.is_some() {
                out.push_str(r#" filter="url(#glow)""#);
            }
            out.push_str("/>");
        }

        out.push_str("</svg>");
        out
    }
}

impl StrokeSurface for SvgOverlay {
    fn present_curve(&mut self, curve: &Curve, metrics: &ViewportMetrics) {
        self.path_data = curve.path_data();
        self.width = metrics.viewport_width;
        self.height = metrics.page_height;
        self.state = DrawState {
            total_length: curve.total_length(),
            visible_length: 0.0,
        };
    }

    fn present_progress(&mut self, state: DrawState) {
        self.state = state;
    }
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
