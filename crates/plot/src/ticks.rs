//! Axis tick placement.

const TOLERANCE: f64 = 1e-9;

/// Returns round tick values covering `[start, end]`.
///
/// The step is the smallest of 1, 2, 2.5, 5, or 10 times a power of ten that
/// yields at most about `max_count` ticks. Ticks are multiples of the step.
pub(crate) fn nice_ticks(start: f64, end: f64, max_count: usize) -> Vec<f64> {
    let Some(step) = nice_step(start, end, max_count) else {
        return Vec::new();
    };

    let first = (start / step - TOLERANCE).ceil();
    let last = (end / step + TOLERANCE).floor();
    let count = (last - first) as i64;

    (0..=count).map(|i| (first + i as f64) * step).collect()
}

/// Returns the step used by [`nice_ticks`], or `None` for an empty range.
pub(crate) fn nice_step(start: f64, end: f64, max_count: usize) -> Option<f64> {
    let span = end - start;
    if !span.is_finite() || span <= 0.0 || max_count == 0 {
        return None;
    }

    let raw = span / max_count as f64;
    let magnitude = 10_f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;

    let factor = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|&f| f >= normalized - TOLERANCE)
        .unwrap_or(10.0);

    Some(factor * magnitude)
}

/// Formats `value` with as many decimals as `step` needs.
pub(crate) fn format_tick(value: f64, step: f64) -> String {
    let decimals = (0..=3)
        .find(|&d| {
            let scaled = step * 10_f64.powi(d);
            (scaled - scaled.round()).abs() < TOLERANCE
        })
        .unwrap_or(3) as usize;

    format!("{value:.decimals$}")
}
