//! sigflow draws one continuous, hand-drawn-looking stroke down a long page,
//! routed around the page's content blocks and revealed as the visitor scrolls.
//!
//! # Pipeline overview
//!
//! 1. **Measure**: [`RegionTracker`] reads routing anchors from a [`PageHost`]
//!    into page-space [`Region`]s, sorted top to bottom.
//! 2. **Compose**: [`RouteComposer`] threads control points around the regions
//!    with a few motifs (entry flourish, side avoidance, one loop, a bowl, a tail).
//! 3. **Smooth**: [`SplineBuilder`] turns the points into a [`Curve`] of cubic
//!    segments (Catmull-Rom to Bezier) and measures its length once.
//! 4. **Reveal**: [`DrawProgressController`] maps scroll position to a visible
//!    length of that curve.
//!
//! [`LayoutWatcher`] ties the steps to host signals: debounced rebuilds for
//! layout changes, immediate progress updates for scroll. Results are pushed to
//! a [`StrokeSurface`]; [`SvgOverlay`] is the built-in one.
//!
//! The geometric core is pure and infallible. Only configuration, page
//! descriptions and rasterization return [`SigflowResult`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod curve;
mod draw;
mod foundation;
mod layout;
mod render;
mod route;
mod watch;

pub use config::settings::{OverlayConfig, RouteKind, WatchConfig};
pub use curve::spline::{Curve, SplineBuilder, SplineStyle, polyline_length};
pub use draw::progress::{
    DrawPhase, DrawProgressController, DrawState, ProgressWindow, scroll_progress,
};
pub use foundation::core::{BezPath, CubicBez, Point, Rect, Region, Side, Vec2, ViewportMetrics};
pub use foundation::error::{SigflowError, SigflowResult};
pub use foundation::math::{clamp, mix};
pub use layout::host::{PageHost, Signal, StaticPage, SubscriptionId};
pub use layout::tracker::RegionTracker;
pub use render::raster::{OverlayFrame, rasterize_svg};
pub use render::surface::StrokeSurface;
pub use render::svg::{LineCap, OverlayStyle, SvgOverlay};
pub use route::composer::{Motif, MotifSpan, Route, RouteComposer, RouteStyle};
pub use route::meander::meander_curve;
pub use watch::debounce::Debouncer;
pub use watch::watcher::LayoutWatcher;
