/// Fraction of the scrollable range the visitor has scrolled through.
///
/// A page that cannot scroll counts as fully scrolled, so the stroke is
/// shown complete instead of dividing by zero.
pub fn scroll_progress(scroll_offset: f64, page_height: f64, viewport_height: f64) -> f64 {
    let range = page_height - viewport_height;
    if !range.is_finite() || range <= 0.0 {
        return 1.0;
    }
    let p = scroll_offset / range;
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}

/// Sub-range of page progress over which a stroke is revealed.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ProgressWindow {
    /// Page progress at which drawing starts.
    pub start: f64,
    /// Page progress at which drawing completes.
    pub end: f64,
}

impl Default for ProgressWindow {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 1.0,
        }
    }
}

impl ProgressWindow {
    /// Create a window over `[start, end]`.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Map page progress into local progress in `[0, 1]`.
    ///
    /// An empty or inverted window is a step at `start`.
    pub fn apply(&self, p: f64) -> f64 {
        let span = self.end - self.start;
        if span.is_nan() || span <= 0.0 {
            return if p >= self.start { 1.0 } else { 0.0 };
        }
        ((p - self.start) / span).clamp(0.0, 1.0)
    }
}

/// How much of the current curve is visible.
///
/// `0 <= visible_length <= total_length` always holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct DrawState {
    /// Arc length of the curve this state belongs to.
    pub total_length: f64,
    /// Length revealed from the start of the curve.
    pub visible_length: f64,
}

impl DrawState {
    /// Revealed fraction in `[0, 1]`; an empty curve counts as complete.
    pub fn progress(&self) -> f64 {
        if self.total_length > 0.0 {
            self.visible_length / self.total_length
        } else {
            1.0
        }
    }

    /// Stroke-dash offset hiding the unrevealed tail.
    pub fn dash_offset(&self) -> f64 {
        (self.total_length - self.visible_length).max(0.0)
    }
}

/// Lifecycle of the controller relative to the current curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawPhase {
    /// No curve measured yet, or the previous one was superseded.
    Unmeasured,
    /// Total length fixed; visible length tracks scroll.
    Ready,
}

/// Maps scroll position to visible stroke length.
#[derive(Clone, Debug, Default)]
pub struct DrawProgressController {
    window: ProgressWindow,
    state: Option<DrawState>,
}

impl DrawProgressController {
    /// Create an unmeasured controller.
    pub fn new(window: ProgressWindow) -> Self {
        Self {
            window,
            state: None,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> DrawPhase {
        if self.state.is_some() {
            DrawPhase::Ready
        } else {
            DrawPhase::Unmeasured
        }
    }

    /// Current state, once a curve has been attached.
    pub fn state(&self) -> Option<DrawState> {
        self.state
    }

    /// Drop the state of a superseded curve.
    pub fn invalidate(&mut self) {
        self.state = None;
    }

    /// Attach a freshly built curve's length, replacing any prior state.
    ///
    /// The new state starts undrawn; follow with
    /// [`Self::on_scroll_or_resize`] so it catches up with the scroll position.
    pub fn reset(&mut self, total_length: f64) {
        let total_length = if total_length.is_finite() {
            total_length.max(0.0)
        } else {
            0.0
        };
        self.state = Some(DrawState {
            total_length,
            visible_length: 0.0,
        });
    }

    /// Recompute the visible length for a scroll position and return it.
    ///
    /// Idempotent and allocation-free. Returns `0` while unmeasured.
    pub fn on_scroll_or_resize(
        &mut self,
        scroll_offset: f64,
        page_height: f64,
        viewport_height: f64,
    ) -> f64 {
        let Some(state) = self.state.as_mut() else {
            return 0.0;
        };
        let p = self
            .window
            .apply(scroll_progress(scroll_offset, page_height, viewport_height));
        state.visible_length = (state.total_length * p).clamp(0.0, state.total_length);
        state.visible_length
    }
}

#[cfg(test)]
#[path = "../../tests/unit/draw/progress.rs"]
mod tests;
