// File: crates/waves-core/src/record.rs
// Summary: Untyped snapshot records and alias-tolerant field access.
// Notes:
// - Hosts hand over loosely shaped JSON objects; each logical field may be spelled
//   camelCase (`rsi`) or PascalCase (`Rsi`). All tolerance lives here so the
//   rest of the pipeline works on `Point` only.

use serde::Serialize;
use serde_json::{Map, Value};

/// Logical fields of a snapshot record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Rank,
    Oscillator,
    Zone,
    Symbol,
    Name,
    Price,
    PriceChangePct,
}

impl Field {
    /// Accepted key spellings, in lookup order.
    pub const fn keys(self) -> [&'static str; 2] {
        match self {
            Field::Rank => ["rank", "Rank"],
            Field::Oscillator => ["rsi", "Rsi"],
            Field::Zone => ["zone", "Zone"],
            Field::Symbol => ["symbol", "Symbol"],
            Field::Name => ["name", "Name"],
            Field::Price => ["price", "Price"],
            Field::PriceChangePct => ["priceChangePct", "PriceChangePct"],
        }
    }
}

/// One raw snapshot record: an arbitrary string-keyed mapping.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RawRecord {
    fields: Map<String, Value>,
}

impl RawRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Borrow a JSON value as a record; anything but an object yields `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_object().map(|m| Self::new(m.clone()))
    }

    /// Build from string pairs (e.g. a CSV row); values stay strings.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let fields = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), Value::String(v.into())))
            .collect();
        Self { fields }
    }

    pub fn is_empty(&self) -> bool { self.fields.is_empty() }

    /// First non-null value among the field's spellings.
    pub fn get(&self, field: Field) -> Option<&Value> {
        field
            .keys()
            .iter()
            .filter_map(|k| self.fields.get(*k))
            .find(|v| !v.is_null())
    }

    /// Finite number, accepting numeric strings. Non-numeric values count as absent.
    pub fn number(&self, field: Field) -> Option<f64> {
        let v = match self.get(field)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }?;
        v.is_finite().then_some(v)
    }

    /// String value; numbers and booleans are rendered as text.
    pub fn text(&self, field: Field) -> Option<String> {
        match self.get(field)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

impl From<Map<String, Value>> for RawRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}
