// File: crates/waves-core/src/axis.rs
// Summary: Axis model with titles, ranges and tick layout.

use crate::grid::{stepped, ticks_limited};
use crate::types::{DEFAULT_RANK_MAX, VALUE_MAX, VALUE_MIN};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickSpec {
    /// Fixed logical distance between ticks.
    Step(f64),
    /// At most this many ticks, spaced on whole numbers.
    MaxCount(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub title: String,
    pub min: f64,
    pub max: f64,
    pub ticks: TickSpec,
}

impl Axis {
    pub fn new(title: impl Into<String>, min: f64, max: f64, ticks: TickSpec) -> Self {
        Self { title: title.into(), min, max, ticks }
    }

    /// Horizontal rank axis: 0..30 until a snapshot says otherwise.
    pub fn rank() -> Self {
        Self::new("Rank", 0.0, DEFAULT_RANK_MAX, TickSpec::MaxCount(10))
    }

    /// Vertical oscillator axis with fixed 0..100 bounds.
    pub fn value(title: impl Into<String>) -> Self {
        Self::new(title, VALUE_MIN, VALUE_MAX, TickSpec::Step(10.0))
    }

    /// Tick positions inside [min, max].
    pub fn tick_values(&self) -> Vec<f64> {
        match self.ticks {
            TickSpec::Step(step) => stepped(self.min, self.max, step),
            TickSpec::MaxCount(n) => ticks_limited(self.min, self.max, n),
        }
    }
}

/// Value-axis title: `"{oscillator} ({interval})"`, interval defaulting to 4h.
pub fn value_axis_title(oscillator: &str, interval_label: &str) -> String {
    let interval = if interval_label.trim().is_empty() { "4h" } else { interval_label };
    format!("{oscillator} ({interval})")
}
