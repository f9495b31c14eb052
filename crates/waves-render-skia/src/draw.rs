// File: crates/waves-render-skia/src/draw.rs
// Summary: Frame drawing helpers: grid, axes, point markers, inline labels and the tooltip box.

use skia_safe as skia;
use waves_core::scale::PixelMapping;
use waves_core::{ChartConfig, PlotView, Point, RenderGroup, RenderOptions};

use crate::sk_color;

fn font(size: f32) -> skia::Font {
    let mut font = skia::Font::default();
    font.set_size(size);
    font
}

fn fill(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint
}

/// Grid lines at every tick plus tick labels along both axes.
pub fn draw_grid_and_ticks(canvas: &skia::Canvas, view: &PlotView, cfg: &ChartConfig) {
    let plot = view.plot;
    let mut grid = skia::Paint::default();
    grid.set_color(sk_color(cfg.theme.grid));
    grid.set_anti_alias(true);
    grid.set_stroke_width(1.0);

    let tick_paint = fill(sk_color(cfg.theme.tick));
    let tick_font = font(cfg.tick_size);

    // verticals (rank)
    for v in cfg.x_axis.tick_values() {
        let x = view.x.to_px(v);
        canvas.draw_line((x, plot.top), (x, plot.bottom), &grid);
        let text = format!("{v:.0}");
        let (w, _) = tick_font.measure_str(&text, None);
        canvas.draw_str(&text, (x - w * 0.5, plot.bottom + cfg.tick_size + 4.0), &tick_font, &tick_paint);
    }
    // horizontals (value)
    for v in cfg.y_axis.tick_values() {
        let y = view.y.to_px(v);
        canvas.draw_line((plot.left, y), (plot.right, y), &grid);
        let text = format!("{v:.0}");
        let (w, _) = tick_font.measure_str(&text, None);
        canvas.draw_str(&text, (plot.left - w - 6.0, y + cfg.tick_size * 0.35), &tick_font, &tick_paint);
    }
}

/// Axis titles: rank below the plot, oscillator rotated along the left edge.
pub fn draw_axis_titles(canvas: &skia::Canvas, view: &PlotView, opts: &RenderOptions, cfg: &ChartConfig) {
    let plot = view.plot;
    let paint = fill(sk_color(cfg.theme.axis_title));
    let title_font = font(cfg.axis_title_size);

    let (xw, _) = title_font.measure_str(&cfg.x_axis.title, None);
    let x_center = (plot.left + plot.right) * 0.5;
    let x_base = (opts.height as f32 - 8.0).max(plot.bottom + cfg.axis_title_size);
    canvas.draw_str(&cfg.x_axis.title, (x_center - xw * 0.5, x_base), &title_font, &paint);

    let (yw, _) = title_font.measure_str(&cfg.y_axis.title, None);
    let y_center = (plot.top + plot.bottom) * 0.5;
    canvas.save();
    canvas.translate((cfg.axis_title_size + 4.0, y_center));
    canvas.rotate(-90.0, None);
    canvas.draw_str(&cfg.y_axis.title, (-yw * 0.5, 0.0), &title_font, &paint);
    canvas.restore();
}

/// Markers for every group; the hovered point is drawn at its hover radius.
pub fn draw_points(canvas: &skia::Canvas, view: &PlotView, groups: &[RenderGroup], hovered: Option<&Point>) {
    for g in groups {
        let paint = fill(sk_color(g.style.fill));
        for p in &g.points {
            let r = match hovered {
                Some(h) if std::ptr::eq(h, p) => g.style.hover_radius,
                _ => g.style.radius,
            };
            canvas.draw_circle(view.point_px(p), r, &paint);
        }
    }
}

/// Inline labels centered above each marker. Empty labels draw nothing.
pub fn draw_point_labels(canvas: &skia::Canvas, view: &PlotView, groups: &[RenderGroup], cfg: &ChartConfig) {
    if !cfg.labels.display {
        return;
    }
    let paint = fill(sk_color(cfg.theme.point_label));
    let label_font = font(cfg.labels.font_size);
    for g in groups {
        for p in &g.points {
            let text = (cfg.hooks.point_label)(p);
            if text.is_empty() {
                continue;
            }
            let (x, y) = view.point_px(p);
            let (w, _) = label_font.measure_str(text, None);
            let baseline = y - g.style.radius - cfg.labels.offset;
            canvas.draw_str(text, (x - w * 0.5, baseline), &label_font, &paint);
        }
    }
}

/// Tooltip box next to `anchor`, kept inside the surface bounds.
pub fn draw_tooltip(canvas: &skia::Canvas, anchor: (f32, f32), lines: &[String], opts: &RenderOptions, cfg: &ChartConfig) {
    if lines.is_empty() {
        return;
    }
    let tip = &cfg.tooltip;
    let text_font = font(tip.font_size);
    let line_h = tip.font_size + tip.line_spacing;
    let text_w = lines
        .iter()
        .map(|l| text_font.measure_str(l, None).0)
        .fold(0.0f32, f32::max);
    let box_w = text_w + tip.padding * 2.0;
    let box_h = line_h * lines.len() as f32 - tip.line_spacing + tip.padding * 2.0;

    let (ax, ay) = anchor;
    let surface_w = opts.width as f32;
    let surface_h = opts.height as f32;
    let mut left = ax + 10.0;
    if left + box_w > surface_w {
        left = (ax - 10.0 - box_w).max(0.0);
    }
    let top = (ay - box_h * 0.5).clamp(0.0, (surface_h - box_h).max(0.0));
    let rect = skia::Rect::from_xywh(left, top, box_w, box_h);

    canvas.draw_round_rect(rect, 6.0, 6.0, &fill(sk_color(cfg.theme.tooltip_background)));
    let mut border = skia::Paint::default();
    border.set_color(sk_color(cfg.theme.tooltip_border));
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(tip.border_width);
    canvas.draw_round_rect(rect, 6.0, 6.0, &border);

    let title = fill(sk_color(cfg.theme.tooltip_title));
    let body = fill(sk_color(cfg.theme.tooltip_body));
    for (i, line) in lines.iter().enumerate() {
        let baseline = top + tip.padding + tip.font_size + line_h * i as f32;
        let paint = if i == 0 { &title } else { &body };
        canvas.draw_str(line, (left + tip.padding, baseline), &text_font, paint);
    }
}
