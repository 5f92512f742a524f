pub(crate) mod spline;
