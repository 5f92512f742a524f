use std::time::Instant;

use crate::config::settings::{OverlayConfig, RouteKind};
use crate::curve::spline::{Curve, SplineBuilder};
use crate::draw::progress::{DrawPhase, DrawProgressController, DrawState};
use crate::foundation::core::{Region, ViewportMetrics};
use crate::layout::host::{PageHost, Signal, SubscriptionId};
use crate::layout::tracker::RegionTracker;
use crate::render::surface::StrokeSurface;
use crate::route::composer::RouteComposer;
use crate::route::meander::meander_curve;
use crate::watch::debounce::Debouncer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lifecycle {
    Idle,
    Mounted,
    TornDown,
}

/// Owns the overlay's lifecycle on one page.
///
/// Two independent paths:
///
/// - **rebuild** (expensive): measure regions, compose the route, build the
///   curve, reset draw progress. Layout and mutation signals schedule it
///   through a debouncer; [`Self::poll`] runs it once the burst settles.
/// - **progress** (cheap): recompute the visible length from the current
///   scroll position. Runs immediately on every scroll, never measures and
///   never allocates.
///
/// The watcher owns every subscription it makes on the host and releases all
/// of them in [`Self::teardown`], which also runs on drop. Signals delivered
/// after teardown are ignored.
pub struct LayoutWatcher<H: PageHost, S: StrokeSurface> {
    host: H,
    surface: S,
    tracker: RegionTracker,
    composer: RouteComposer,
    builder: SplineBuilder,
    kind: RouteKind,
    progress: DrawProgressController,
    debounce: Debouncer,
    subscriptions: Vec<SubscriptionId>,
    lifecycle: Lifecycle,
    built_metrics: Option<ViewportMetrics>,
    regions: Vec<Region>,
    curve: Curve,
    rebuilds: u64,
}

impl<H: PageHost, S: StrokeSurface> LayoutWatcher<H, S> {
    /// Create an unmounted watcher. Nothing is measured or subscribed yet.
    pub fn new(host: H, surface: S, config: &OverlayConfig) -> Self {
        Self {
            host,
            surface,
            tracker: RegionTracker::new(),
            composer: RouteComposer::new(config.route.clone()),
            builder: SplineBuilder::new(config.spline.clone()),
            kind: config.kind,
            progress: DrawProgressController::new(config.draw),
            debounce: Debouncer::new(config.watch.debounce()),
            subscriptions: Vec::with_capacity(3),
            lifecycle: Lifecycle::Idle,
            built_metrics: None,
            regions: Vec::new(),
            curve: Curve::default(),
            rebuilds: 0,
        }
    }

    /// Subscribe to host signals and build synchronously.
    ///
    /// The first progress update always sees a real curve. Mounting twice,
    /// or after teardown, does nothing.
    pub fn mount(&mut self) {
        if self.lifecycle != Lifecycle::Idle {
            return;
        }
        for signal in [Signal::Resize, Signal::Mutation, Signal::Scroll] {
            let id = self.host.subscribe(signal);
            self.subscriptions.push(id);
        }
        self.lifecycle = Lifecycle::Mounted;
        tracing::debug!("overlay mounted");
        self.rebuild();
    }

    /// Handle a size-change notification.
    ///
    /// Page height or viewport width changes schedule a rebuild; any resize
    /// refreshes progress right away since the scrollable range may differ.
    pub fn on_resize(&mut self, now: Instant) {
        if !self.is_active() {
            return;
        }
        let metrics = self.host.metrics().sanitized();
        let stale = self
            .built_metrics
            .is_none_or(|prev| metrics.needs_rebuild_from(&prev));
        if stale {
            tracing::debug!(?metrics, "resize scheduled rebuild");
            self.debounce.trigger(now);
        }
        self.update_progress();
    }

    /// Handle a content-mutation notification (fonts, late content, ...).
    pub fn on_mutation(&mut self, now: Instant) {
        if !self.is_active() {
            return;
        }
        tracing::debug!("mutation scheduled rebuild");
        self.debounce.trigger(now);
    }

    /// Handle a scroll notification and return the new visible length.
    pub fn on_scroll(&mut self) -> f64 {
        if !self.is_active() {
            return self.progress.state().map_or(0.0, |s| s.visible_length);
        }
        self.update_progress()
    }

    /// Run a pending rebuild whose debounce window has elapsed.
    ///
    /// Returns `true` when a rebuild ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.is_active() || !self.debounce.fire(now) {
            return false;
        }
        self.rebuild();
        true
    }

    /// When the host should call [`Self::poll`] next, if a rebuild is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    /// Re-measure, recompose and rebuild the curve now.
    ///
    /// Supersedes any pending debounced rebuild. Draw progress is recomputed
    /// against the new length at the current scroll position.
    #[tracing::instrument(skip(self))]
    pub fn rebuild(&mut self) {
        if !self.is_active() {
            return;
        }
        self.debounce.cancel();
        self.progress.invalidate();

        let metrics = self.host.metrics().sanitized();
        let curve = match self.kind {
            RouteKind::Signature => {
                self.regions = self.tracker.measure(&self.host);
                let route = self.composer.compose(&self.regions, &metrics);
                self.builder.build(route.points())
            }
            RouteKind::Meander => {
                self.regions.clear();
                meander_curve(
                    metrics.page_height,
                    metrics.viewport_width,
                    self.builder.style().samples_per_segment,
                )
            }
        };

        self.surface.present_curve(&curve, &metrics);
        self.progress.reset(curve.total_length());
        self.curve = curve;
        self.built_metrics = Some(metrics);
        self.rebuilds += 1;

        let visible = self.update_progress();
        tracing::debug!(
            rebuilds = self.rebuilds,
            total_length = self.curve.total_length(),
            visible,
            "overlay rebuilt"
        );
    }

    /// Release every subscription and stop reacting to signals.
    ///
    /// Safe to call repeatedly; also runs on drop.
    pub fn teardown(&mut self) {
        if self.lifecycle == Lifecycle::TornDown {
            return;
        }
        for id in self.subscriptions.drain(..) {
            self.host.unsubscribe(id);
        }
        self.debounce.cancel();
        self.lifecycle = Lifecycle::TornDown;
        tracing::debug!("overlay torn down");
    }

    /// Return `true` between mount and teardown.
    pub fn is_active(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    /// Return `true` once torn down.
    pub fn is_torn_down(&self) -> bool {
        self.lifecycle == Lifecycle::TornDown
    }

    /// Return `true` while a debounced rebuild is waiting.
    pub fn rebuild_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    /// Number of completed rebuilds.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    /// Current curve (empty before mount).
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Region snapshot used by the last rebuild.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Current draw state, once a curve is measured.
    pub fn draw_state(&self) -> Option<DrawState> {
        self.progress.state()
    }

    /// Draw progress phase.
    pub fn phase(&self) -> DrawPhase {
        self.progress.phase()
    }

    /// The host page.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host page (e.g. to move its scroll position).
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The rendering surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn update_progress(&mut self) -> f64 {
        let metrics = self.host.metrics().sanitized();
        let visible = self.progress.on_scroll_or_resize(
            self.host.scroll_offset(),
            metrics.page_height,
            metrics.viewport_height,
        );
        if let Some(state) = self.progress.state() {
            self.surface.present_progress(state);
        }
        visible
    }
}

impl<H: PageHost, S: StrokeSurface> Drop for LayoutWatcher<H, S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/watch/watcher.rs"]
mod tests;
