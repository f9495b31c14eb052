// File: crates/waves-core/src/view.rs
// Plot view for one frame: plot rect plus the rank/value pixel mappings derived from it.

use crate::chart::{ChartConfig, RenderOptions};
use crate::geometry::{plot_rect, RectF32};
use crate::point::Point;
use crate::scale::{PixelMapping, RankScale, ValueScale};
use crate::zone::RenderGroup;

#[derive(Clone, Copy, Debug)]
pub struct PlotView {
    pub plot: RectF32,
    pub x: RankScale,
    pub y: ValueScale,
}

impl PlotView {
    /// Build the mappings for the current surface size. Call once per redraw.
    pub fn new(opts: &RenderOptions, config: &ChartConfig) -> Self {
        let plot = plot_rect(opts.width, opts.height, &opts.insets);
        let x = RankScale::new(plot.left, plot.right, config.x_axis.min, config.x_axis.max);
        let y = ValueScale::new_linear(plot.top, plot.bottom, config.y_axis.min, config.y_axis.max);
        Self { plot, x, y }
    }

    /// Pixel center of a point's marker.
    pub fn point_px(&self, p: &Point) -> (f32, f32) {
        (self.x.to_px(p.x as f64), self.y.to_px(p.y))
    }

    /// Nearest point whose marker lies within its group's hover radius of `cursor`.
    pub fn hit_test<'a>(&self, groups: &'a [RenderGroup], cursor: (f32, f32)) -> Option<&'a Point> {
        let (cx, cy) = cursor;
        let mut best: Option<(f32, &Point)> = None;
        for g in groups {
            let r2 = g.style.hover_radius * g.style.hover_radius;
            for p in &g.points {
                let (px, py) = self.point_px(p);
                let d2 = (px - cx) * (px - cx) + (py - cy) * (py - cy);
                if d2 <= r2 && best.map_or(true, |(b, _)| d2 < b) {
                    best = Some((d2, p));
                }
            }
        }
        best.map(|(_, p)| p)
    }
}
