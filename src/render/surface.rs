use crate::curve::spline::Curve;
use crate::draw::progress::DrawState;
use crate::foundation::core::ViewportMetrics;

/// Whatever paints the stroke.
///
/// Receives read-only snapshots; it never mutates the curve or draw state.
pub trait StrokeSurface {
    /// A new curve replaced the previous one. `metrics` size the overlay.
    fn present_curve(&mut self, curve: &Curve, metrics: &ViewportMetrics);

    /// The revealed length changed.
    fn present_progress(&mut self, state: DrawState);
}

impl<T: StrokeSurface + ?Sized> StrokeSurface for &mut T {
    fn present_curve(&mut self, curve: &Curve, metrics: &ViewportMetrics) {
        (**self).present_curve(curve, metrics)
    }

    fn present_progress(&mut self, state: DrawState) {
        (**self).present_progress(state)
    }
}
