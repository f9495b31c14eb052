// File: crates/waves-core/src/tooltip.rs
// Summary: Hover text for a point as an ordered list of display lines.

use crate::point::Point;

/// Shown where a value is unavailable.
pub const MISSING: &str = "-";

/// Build the tooltip lines for `point`.
///
/// Order is fixed: symbol, name (only when non-empty), oscillator, oscillator change
/// (always a placeholder), price change, price, capture time (only when the label is
/// non-empty). The result therefore has 5, 6 or 7 lines.
pub fn format_tooltip(point: &Point, captured_at: &str) -> Vec<String> {
    let mut lines = Vec::with_capacity(7);
    lines.push(format!("Symbol: {}", point.symbol));
    if let Some(name) = point.name.as_deref().filter(|n| !n.is_empty()) {
        lines.push(format!("Name: {name}"));
    }
    // mapped points always carry a finite value; hand-built ones may not
    lines.push(if point.y.is_finite() {
        format!("Oscillator: {:.2}", point.y)
    } else {
        format!("Oscillator: {MISSING}")
    });
    // no prior snapshot is kept, so there is nothing to diff against
    lines.push(format!("Oscillator change: {MISSING}"));
    lines.push(match point.price_change_pct {
        Some(pct) => {
            // -0.0 would otherwise print as "+-0.00"
            let pct = if pct == 0.0 { 0.0 } else { pct };
            format!("Price change: {}{:.2}%", if pct >= 0.0 { "+" } else { "" }, pct)
        }
        None => format!("Price change: {MISSING}"),
    });
    lines.push(match point.price {
        Some(price) => format!("Price: {price:.4}"),
        None => format!("Price: {MISSING}"),
    });
    if !captured_at.is_empty() {
        lines.push(format!("Captured: {captured_at}"));
    }
    lines
}
