use std::path::Path;
use std::time::Duration;

use anyhow::Context as _;

use crate::curve::spline::SplineStyle;
use crate::draw::progress::ProgressWindow;
use crate::foundation::error::{SigflowError, SigflowResult};
use crate::render::svg::OverlayStyle;
use crate::route::composer::RouteStyle;

/// Which route generator feeds the spline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    /// Region-aware signature stroke with flourish, loop, bowl and tail.
    #[default]
    Signature,
    /// Fixed meander that ignores page content.
    Meander,
}

/// Rebuild scheduling.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Coalescing window for layout-driven rebuilds, in milliseconds.
    pub debounce_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self { debounce_ms: 160 }
    }
}

impl WatchConfig {
    /// Coalescing window as a [`Duration`].
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Complete overlay configuration. Every field has a default.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Route generator.
    pub kind: RouteKind,
    /// Route synthesis tunables.
    pub route: RouteStyle,
    /// Spline smoothing and measurement.
    pub spline: SplineStyle,
    /// Page-progress window over which the stroke is drawn.
    pub draw: ProgressWindow,
    /// Rebuild scheduling.
    pub watch: WatchConfig,
    /// Stroke paint.
    pub style: OverlayStyle,
}

impl OverlayConfig {
    /// Parse a JSON config and validate it.
    pub fn from_json_str(s: &str) -> SigflowResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_json_file(path: &Path) -> SigflowResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Reject values that would produce a meaningless stroke.
    pub fn validate(&self) -> SigflowResult<()> {
        let r = &self.route;
        for (name, value) in [
            ("route.gutter_min", r.gutter_min),
            ("route.gutter_max", r.gutter_max),
            ("route.gutter_ratio", r.gutter_ratio),
            ("route.start_x_ratio", r.start_x_ratio),
            ("route.approach_offset", r.approach_offset),
            ("route.depart_offset", r.depart_offset),
            ("route.wall_offset", r.wall_offset),
            ("route.hug_inset", r.hug_inset),
            ("route.side_threshold", r.side_threshold),
            ("route.loop_radius_ratio", r.loop_radius_ratio),
            ("route.loop_radius_min", r.loop_radius_min),
            ("route.loop_radius_max", r.loop_radius_max),
            ("route.exit_inset", r.exit_inset),
            ("style.stroke_width", self.style.stroke_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SigflowError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if r.gutter_min > r.gutter_max {
            return Err(SigflowError::validation(
                "route.gutter_min must be <= route.gutter_max",
            ));
        }
        if r.loop_radius_min > r.loop_radius_max {
            return Err(SigflowError::validation(
                "route.loop_radius_min must be <= route.loop_radius_max",
            ));
        }
        for (name, value) in [
            ("route.start_x_ratio", r.start_x_ratio),
            ("route.loop_index_ratio", r.loop_index_ratio),
            ("spline.tension", self.spline.tension),
            ("style.opacity", self.style.opacity),
            ("draw.start", self.draw.start),
            ("draw.end", self.draw.end),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SigflowError::validation(format!("{name} must be in [0, 1]")));
            }
        }
        if self.spline.samples_per_segment == 0 {
            return Err(SigflowError::validation(
                "spline.samples_per_segment must be > 0",
            ));
        }
        if self.draw.start > self.draw.end {
            return Err(SigflowError::validation("draw.start must be <= draw.end"));
        }
        if let Some(dev) = self.style.glow
            && (!dev.is_finite() || dev <= 0.0)
        {
            return Err(SigflowError::validation(
                "style.glow must be finite and > 0 when set",
            ));
        }
        if self.style.stroke.trim().is_empty() {
            return Err(SigflowError::validation("style.stroke must be non-empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
