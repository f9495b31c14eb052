// File: crates/waves-core/src/point.rs
// Summary: Typed scatter point and the mapper that builds it from a raw record.

use serde::Serialize;
use serde_json::Value;

use crate::geometry::clamp;
use crate::record::{Field, RawRecord};
use crate::types::{VALUE_MAX, VALUE_MIN};

/// Oscillator value assumed when a record carries none.
pub const DEFAULT_OSCILLATOR: f64 = 50.0;
/// Zone tag assumed when a record carries none.
pub const DEFAULT_ZONE: &str = "neutral";

/// One renderable instrument.
/// Contract: `y` is always within [0, 100]; `x` is not clamped.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Point {
    pub x: i64,
    pub y: f64,
    pub symbol: String,
    pub name: Option<String>,
    pub zone_tag: String,
    /// Oscillator value before clamping; the midpoint when the record has none.
    pub raw_value: f64,
    pub price: Option<f64>,
    pub price_change_pct: Option<f64>,
    /// Hover text, built once per snapshot and shown verbatim.
    pub tooltip_lines: Vec<String>,
}

/// Converts raw snapshot records into points. Pure; never fails loudly.
pub struct PointMapper;

impl PointMapper {
    /// Map one JSON value. Null, non-object and empty-object values yield `None`.
    pub fn map(value: &Value) -> Option<Point> {
        RawRecord::from_value(value).and_then(|r| Self::map_record(&r))
    }

    /// Map one decoded record; an empty record yields `None`.
    pub fn map_record(record: &RawRecord) -> Option<Point> {
        if record.is_empty() {
            return None;
        }
        let raw_value = record.number(Field::Oscillator).unwrap_or(DEFAULT_OSCILLATOR);
        let x = record.number(Field::Rank).map(|r| r.trunc() as i64).unwrap_or(0);
        Some(Point {
            x,
            y: clamp(raw_value, VALUE_MIN, VALUE_MAX),
            symbol: record.text(Field::Symbol).unwrap_or_default(),
            name: record.text(Field::Name),
            zone_tag: record.text(Field::Zone).unwrap_or_else(|| DEFAULT_ZONE.to_string()),
            raw_value,
            price: record.number(Field::Price),
            price_change_pct: record.number(Field::PriceChangePct),
            tooltip_lines: Vec::new(),
        })
    }
}
