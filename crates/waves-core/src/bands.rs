// File: crates/waves-core/src/bands.rs
// Summary: Fixed background zone bands painted behind the data layer.
// Notes:
// - Band geometry is recomputed from the live pixel mapping on every redraw; the
//   vertical axis bounds move whenever the surface is resized.
// - Adjacent bands share the pixel of their common threshold, so the five rects
//   tile the axis span with no gap or overlap.

use crate::geometry::RectF32;
use crate::scale::PixelMapping;
use crate::types::{Rgba, VALUE_MAX, VALUE_MIN};

/// One horizontal band covering the logical value range [lo, hi].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneBand {
    pub lo: f64,
    pub hi: f64,
    pub fill: Rgba,
}

/// The five bands, bottom to top.
pub fn zone_bands() -> [ZoneBand; 5] {
    [
        ZoneBand { lo: VALUE_MIN, hi: 30.0, fill: Rgba::with_alpha(34, 85, 51, 0.35) },
        ZoneBand { lo: 30.0, hi: 40.0, fill: Rgba::with_alpha(50, 100, 70, 0.25) },
        ZoneBand { lo: 40.0, hi: 60.0, fill: Rgba::with_alpha(90, 75, 55, 0.2) },
        ZoneBand { lo: 60.0, hi: 70.0, fill: Rgba::with_alpha(100, 80, 60, 0.2) },
        ZoneBand { lo: 70.0, hi: VALUE_MAX, fill: Rgba::with_alpha(120, 40, 40, 0.4) },
    ]
}

/// Anything that can fill a pixel rectangle with a translucent color.
pub trait Painter {
    fn fill_rect(&mut self, rect: RectF32, color: Rgba);
}

/// A filled rectangle, as recorded by the `Vec` painter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilledRect {
    pub rect: RectF32,
    pub color: Rgba,
}

impl Painter for Vec<FilledRect> {
    fn fill_rect(&mut self, rect: RectF32, color: Rgba) {
        self.push(FilledRect { rect, color });
    }
}

/// Pixel rectangle of each band, bottom to top, spanning x in [0, width].
pub fn band_rects(y: &dyn PixelMapping, width: f32) -> [(ZoneBand, RectF32); 5] {
    zone_bands().map(|band| {
        let top = y.to_px(band.hi);
        let bottom = y.to_px(band.lo);
        (band, RectF32::from_ltrb(0.0, top.min(bottom), width, top.max(bottom)))
    })
}

/// Pre-draw hook: paint all five bands in bottom-to-top order.
pub fn paint_zone_bands(y: &dyn PixelMapping, width: f32, painter: &mut dyn Painter) {
    for (band, rect) in band_rects(y, width) {
        painter.fill_rect(rect, band.fill);
    }
}
