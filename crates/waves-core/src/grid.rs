// File: crates/waves-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

/// Multiples of `step` from `start` up to and including `end`.
pub fn stepped(start: f64, end: f64, step: f64) -> Vec<f64> {
    if step.is_nan() || step <= 0.0 || end < start { return vec![start]; }
    let n = ((end - start) / step + 1e-9).floor() as usize;
    (0..=n).map(|i| start + step * i as f64).collect()
}

/// At most `max_count` whole-number ticks covering [start, end].
pub fn ticks_limited(start: f64, end: f64, max_count: usize) -> Vec<f64> {
    let max_count = max_count.max(2);
    let span = (end - start).max(1.0);
    // smallest 1/2/5 x 10^k step that keeps the count under the limit
    let raw = span / (max_count as f64 - 1.0);
    let mag = 10f64.powf(raw.log10().floor()).max(1.0);
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * mag)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * mag);
    stepped(start, end, step)
}
