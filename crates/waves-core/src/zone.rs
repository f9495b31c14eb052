// File: crates/waves-core/src/zone.rs
// Summary: Zone classification and the three render groups (overbought/oversold/neutral).

use serde::Serialize;

use crate::point::Point;
use crate::types::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Overbought,
    Oversold,
    Neutral,
}

impl Zone {
    /// Render order of the groups.
    pub const ALL: [Zone; 3] = [Zone::Overbought, Zone::Oversold, Zone::Neutral];

    /// Fixed marker style for points of this zone.
    pub fn marker(self) -> MarkerStyle {
        let fill = match self {
            Zone::Overbought => Rgba::with_alpha(220, 80, 80, 0.9),
            Zone::Oversold => Rgba::with_alpha(80, 180, 100, 0.9),
            Zone::Neutral => Rgba::with_alpha(140, 130, 120, 0.85),
        };
        MarkerStyle { fill, radius: 5.0, hover_radius: 7.0 }
    }
}

/// Bucket a zone tag. Only the exact lowercase tags select a non-neutral zone.
pub fn classify(zone_tag: &str) -> Zone {
    match zone_tag {
        "overbought" => Zone::Overbought,
        "oversold" => Zone::Oversold,
        _ => Zone::Neutral,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerStyle {
    pub fill: Rgba,
    pub radius: f32,
    pub hover_radius: f32,
}

/// Points sharing one zone and marker style. Never empty when produced by `RenderSet`.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderGroup {
    pub zone: Zone,
    pub style: MarkerStyle,
    pub points: Vec<Point>,
}

/// Per-zone accumulation of one snapshot, in ingestion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderSet {
    pub overbought: Vec<Point>,
    pub oversold: Vec<Point>,
    pub neutral: Vec<Point>,
}

impl RenderSet {
    pub fn push(&mut self, zone: Zone, point: Point) {
        self.bucket_mut(zone).push(point);
    }

    pub fn bucket(&self, zone: Zone) -> &[Point] {
        match zone {
            Zone::Overbought => &self.overbought,
            Zone::Oversold => &self.oversold,
            Zone::Neutral => &self.neutral,
        }
    }

    fn bucket_mut(&mut self, zone: Zone) -> &mut Vec<Point> {
        match zone {
            Zone::Overbought => &mut self.overbought,
            Zone::Oversold => &mut self.oversold,
            Zone::Neutral => &mut self.neutral,
        }
    }

    pub fn len(&self) -> usize {
        self.overbought.len() + self.oversold.len() + self.neutral.len()
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Flatten into render groups, dropping empty buckets.
    pub fn into_groups(mut self) -> Vec<RenderGroup> {
        Zone::ALL
            .into_iter()
            .filter_map(|zone| {
                let points = std::mem::take(self.bucket_mut(zone));
                (!points.is_empty()).then(|| RenderGroup { zone, style: zone.marker(), points })
            })
            .collect()
    }
}
