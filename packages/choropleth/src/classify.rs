//! Quantile breakpoint computation and color-class assignment.

/// Number of color classes on the map.
pub const BUCKET_COUNT: usize = 10;

/// Sequential color ramp, lightest to darkest. One entry per class, fixed
/// for the lifetime of the process.
pub const COLOR_RAMP: [&str; BUCKET_COUNT] = [
    "#FFEDA0", "#FFED80", "#FED976", "#FEB24C", "#FD8D3C", "#FC4E2A", "#E31A1C", "#BD0026",
    "#800026", "#4d0000",
];

/// Ordered thresholds separating the color classes.
///
/// Index 0 holds the minimum metric value and index `BUCKET_COUNT` the
/// topmost bound. The sequence is non-decreasing for any input.
pub type Breakpoints = [f64; BUCKET_COUNT + 1];

/// Computes quantile breakpoints over the metric values of all features.
///
/// This is the intentionally simple index-based quantile approximation, not
/// exact quantile interpolation: values are sorted ascending and the `i`-th
/// breakpoint reads the element at `floor((i / BUCKET_COUNT) * len)`,
/// clamped to the last index. Empty input yields all zeros rather than a
/// panic.
#[must_use]
pub fn compute_breakpoints(values: &[f64]) -> Breakpoints {
    let mut breakpoints = [0.0; BUCKET_COUNT + 1];
    if values.is_empty() {
        return breakpoints;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    breakpoints[0] = sorted[0];
    let len = sorted.len();
    for (i, slot) in breakpoints.iter_mut().enumerate().skip(1) {
        let index = ((i * len) / BUCKET_COUNT).min(len - 1);
        *slot = sorted[index];
    }
    breakpoints
}

/// Maps a metric value to its color class in `0..BUCKET_COUNT`.
///
/// Returns the highest class `k` whose breakpoint the value exceeds; values
/// at or below `breakpoints[1]` land in class 0. NaN compares false against
/// every threshold and therefore also lands in class 0.
#[must_use]
pub fn classify(value: f64, breakpoints: &Breakpoints) -> usize {
    for k in (1..BUCKET_COUNT).rev() {
        if value > breakpoints[k] {
            return k;
        }
    }
    0
}

/// Returns the fill color for a metric value.
#[must_use]
pub fn color_for(value: f64, breakpoints: &Breakpoints) -> &'static str {
    COLOR_RAMP[classify(value, breakpoints)]
}
