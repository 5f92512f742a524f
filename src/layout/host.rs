use std::collections::BTreeMap;

use crate::foundation::core::{Rect, Region, ViewportMetrics};
use crate::foundation::error::{SigflowError, SigflowResult};

/// Notification categories a host page can deliver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Signal {
    /// Document or viewport size changed.
    Resize,
    /// Content changed in a way that may affect layout (e.g. a font load).
    Mutation,
    /// Scroll position changed.
    Scroll,
}

/// Handle returned by [`PageHost::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

/// The page the overlay is drawn over.
///
/// Implementations read live layout; everything downstream of
/// [`crate::RegionTracker`] only sees plain data.
pub trait PageHost {
    /// Rectangles of every routing anchor, relative to the viewport
    /// (the way a browser reports bounding client rects).
    fn anchor_rects(&self) -> Vec<Rect>;

    /// Current document and viewport dimensions.
    fn metrics(&self) -> ViewportMetrics;

    /// Current vertical scroll offset.
    fn scroll_offset(&self) -> f64;

    /// Start delivering `signal` notifications.
    fn subscribe(&mut self, signal: Signal) -> SubscriptionId;

    /// Stop delivering notifications for `id`. Unknown ids are ignored.
    fn unsubscribe(&mut self, id: SubscriptionId);
}

impl<T: PageHost + ?Sized> PageHost for &mut T {
    fn anchor_rects(&self) -> Vec<Rect> {
        (**self).anchor_rects()
    }

    fn metrics(&self) -> ViewportMetrics {
        (**self).metrics()
    }

    fn scroll_offset(&self) -> f64 {
        (**self).scroll_offset()
    }

    fn subscribe(&mut self, signal: Signal) -> SubscriptionId {
        (**self).subscribe(signal)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        (**self).unsubscribe(id)
    }
}

/// In-memory page used by the CLI and tests.
///
/// Regions are stored in page coordinates and reported back viewport-relative,
/// so measurement goes through the same scroll correction as a live page.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct StaticPage {
    /// Document and viewport dimensions.
    pub metrics: ViewportMetrics,
    /// Vertical scroll offset.
    #[serde(default)]
    pub scroll_offset: f64,
    /// Routing anchors in page coordinates.
    #[serde(default)]
    pub regions: Vec<Region>,
    #[serde(skip)]
    subscriptions: BTreeMap<SubscriptionId, Signal>,
    #[serde(skip)]
    next_subscription: u64,
}

impl StaticPage {
    /// Create a page with no anchors, scrolled to the top.
    pub fn new(metrics: ViewportMetrics) -> Self {
        Self {
            metrics,
            ..Self::default()
        }
    }

    /// Builder-style anchor insertion.
    pub fn with_region(mut self, region: Region) -> Self {
        self.regions.push(region);
        self
    }

    /// Parse a page description and validate it.
    pub fn from_json_str(s: &str) -> SigflowResult<Self> {
        let page: Self = serde_json::from_str(s)?;
        page.validate()?;
        Ok(page)
    }

    /// Check that dimensions and anchors are finite and non-negative.
    pub fn validate(&self) -> SigflowResult<()> {
        let m = &self.metrics;
        for (name, value) in [
            ("page_height", m.page_height),
            ("viewport_width", m.viewport_width),
            ("viewport_height", m.viewport_height),
            ("scroll_offset", self.scroll_offset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SigflowError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        for (idx, r) in self.regions.iter().enumerate() {
            if ![r.top, r.left, r.width, r.height]
                .iter()
                .all(|v| v.is_finite())
            {
                return Err(SigflowError::validation(format!(
                    "region {idx} has non-finite geometry"
                )));
            }
            if r.width < 0.0 || r.height < 0.0 {
                return Err(SigflowError::validation(format!(
                    "region {idx} width/height must be >= 0"
                )));
            }
        }
        Ok(())
    }

    /// Move the scroll position, clamped to the scrollable range.
    pub fn scroll_to(&mut self, offset: f64) {
        self.scroll_offset = offset.clamp(0.0, self.metrics.scrollable_range());
    }

    /// Number of live subscriptions.
    pub fn active_subscriptions(&self) -> usize {
        self.subscriptions.len()
    }

    /// Return `true` when someone listens for `signal`.
    pub fn is_subscribed(&self, signal: Signal) -> bool {
        self.subscriptions.values().any(|s| *s == signal)
    }
}

impl PageHost for StaticPage {
    fn anchor_rects(&self) -> Vec<Rect> {
        self.regions
            .iter()
            .map(|r| r.to_rect() - kurbo::Vec2::new(0.0, self.scroll_offset))
            .collect()
    }

    fn metrics(&self) -> ViewportMetrics {
        self.metrics
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn subscribe(&mut self, signal: Signal) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscriptions.insert(id, signal);
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscriptions.remove(&id);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/host.rs"]
mod tests;
