// File: crates/waves-render-skia/src/painter.rs
// Summary: Adapter letting renderer-agnostic pre-draw hooks fill rects on a Skia canvas.

use skia_safe as skia;
use waves_core::geometry::RectF32;
use waves_core::{Painter, Rgba};

use crate::sk_color;

pub struct CanvasPainter<'a> {
    canvas: &'a skia::Canvas,
    paint: skia::Paint,
}

impl<'a> CanvasPainter<'a> {
    pub fn new(canvas: &'a skia::Canvas) -> Self {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(false);
        paint.set_style(skia::paint::Style::Fill);
        Self { canvas, paint }
    }
}

impl Painter for CanvasPainter<'_> {
    fn fill_rect(&mut self, rect: RectF32, color: Rgba) {
        self.paint.set_color(sk_color(color));
        let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
        self.canvas.draw_rect(r, &self.paint);
    }
}
