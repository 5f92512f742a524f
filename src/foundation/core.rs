pub use kurbo::{BezPath, CubicBez, Point, Rect, Vec2};

/// Rectangle of a content block the stroke routes around, in page coordinates.
///
/// Origin is the document's top-left corner and `y` grows downward. Regions
/// are snapshots: they are replaced wholesale on re-measurement, never edited.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Region {
    /// Distance from the document top.
    pub top: f64,
    /// Distance from the document left edge.
    pub left: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Region {
    /// Create a region from its top-left corner and size.
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Convert a page-space rectangle, normalizing negative extents.
    pub fn from_rect(rect: Rect) -> Self {
        let r = rect.abs();
        Self::new(r.y0, r.x0, r.width(), r.height())
    }

    /// Bottom edge (`top + height`).
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Right edge (`left + width`).
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Vertical center (`top + height / 2`).
    pub fn center_y(&self) -> f64 {
        self.top + self.height * 0.5
    }

    /// Page-space rectangle covering this region.
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right(), self.bottom())
    }
}

/// Page and viewport dimensions captured for one build pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewportMetrics {
    /// Full scrollable document height.
    pub page_height: f64,
    /// Visible viewport width (also the overlay width).
    pub viewport_width: f64,
    /// Visible viewport height.
    pub viewport_height: f64,
}

impl ViewportMetrics {
    /// Create metrics from raw host values.
    pub fn new(page_height: f64, viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            page_height,
            viewport_width,
            viewport_height,
        }
    }

    /// Replace non-finite or negative dimensions with zero.
    ///
    /// Hosts can report garbage before the first layout settles.
    pub fn sanitized(self) -> Self {
        fn dim(v: f64) -> f64 {
            if v.is_finite() { v.max(0.0) } else { 0.0 }
        }
        Self {
            page_height: dim(self.page_height),
            viewport_width: dim(self.viewport_width),
            viewport_height: dim(self.viewport_height),
        }
    }

    /// Scroll distance available to the visitor, never negative.
    pub fn scrollable_range(&self) -> f64 {
        (self.page_height - self.viewport_height).max(0.0)
    }

    /// Return `true` when a change from `prev` requires rebuilding the route.
    ///
    /// Only page height and viewport width feed route synthesis; viewport
    /// height only affects draw progress.
    pub fn needs_rebuild_from(&self, prev: &Self) -> bool {
        self.page_height != prev.page_height || self.viewport_width != prev.viewport_width
    }
}

/// Side of a region the stroke passes on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Pass between the left viewport edge and the region.
    Left,
    /// Pass between the region and the right viewport edge.
    Right,
}

impl Side {
    /// The other side.
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
