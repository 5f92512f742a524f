use crate::foundation::core::Region;
use crate::layout::host::PageHost;

/// Measures routing anchors into a page-space snapshot.
#[derive(Clone, Copy, Debug, Default)]
pub struct RegionTracker;

impl RegionTracker {
    /// Create a tracker.
    pub fn new() -> Self {
        Self
    }

    /// Read every anchor rectangle and return them sorted by `top`.
    ///
    /// Non-finite rectangles (measured mid-reflow or before first paint) are
    /// dropped; an empty result is valid input for route composition.
    #[tracing::instrument(skip(self, host))]
    pub fn measure<H: PageHost + ?Sized>(&self, host: &H) -> Vec<Region> {
        let scroll = host.scroll_offset();
        let scroll = if scroll.is_finite() { scroll } else { 0.0 };

        let mut regions: Vec<Region> = host
            .anchor_rects()
            .into_iter()
            .filter(|r| r.is_finite())
            .map(|r| Region::from_rect(r + kurbo::Vec2::new(0.0, scroll)))
            .collect();
        regions.sort_by(|a, b| a.top.total_cmp(&b.top));

        tracing::debug!(count = regions.len(), "measured regions");
        regions
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/tracker.rs"]
mod tests;
