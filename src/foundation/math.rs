/// Clamp `v` into `[lo, hi]`, preferring `lo` when the bounds cross.
///
/// Unlike [`f64::clamp`] this never panics: a viewport narrower than two
/// gutters produces `lo > hi`, and the stroke then hugs the left gutter.
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    lo.max(hi.min(v))
}

/// Linear interpolation from `a` to `b`.
pub fn mix(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
