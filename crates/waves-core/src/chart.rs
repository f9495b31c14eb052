// File: crates/waves-core/src/chart.rs
// Summary: Static chart configuration (axes, theme, plugins) and the hook table handed to engines.

use crate::axis::{value_axis_title, Axis};
use crate::bands::{paint_zone_bands, Painter};
use crate::point::Point;
use crate::scale::PixelMapping;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

/// Called before the data layer with the value-axis mapping and surface pixel width.
pub type PreDrawHook = fn(&dyn PixelMapping, f32, &mut dyn Painter);
/// Hover text for a point, one entry per line.
pub type HoverTextHook = fn(&Point) -> &[String];
/// Inline label drawn next to a point.
pub type PointLabelHook = fn(&Point) -> &str;

#[derive(Clone, Copy)]
pub struct Hooks {
    pub pre_draw: PreDrawHook,
    pub hover_text: HoverTextHook,
    pub point_label: PointLabelHook,
}

fn tooltip_lines(p: &Point) -> &[String] { &p.tooltip_lines }

fn symbol_label(p: &Point) -> &str { &p.symbol }

impl std::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks").finish_non_exhaustive()
    }
}

impl Default for Hooks {
    fn default() -> Self {
        Self { pre_draw: paint_zone_bands, hover_text: tooltip_lines, point_label: symbol_label }
    }
}

/// Inline point labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelOptions {
    pub display: bool,
    pub font_size: f32,
    /// Gap between the marker's top edge and the label baseline.
    pub offset: f32,
}

impl Default for LabelOptions {
    fn default() -> Self { Self { display: true, font_size: 10.0, offset: 2.0 } }
}

/// Hover tooltip box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipOptions {
    pub font_size: f32,
    pub padding: f32,
    pub border_width: f32,
    pub line_spacing: f32,
}

impl Default for TooltipOptions {
    fn default() -> Self { Self { font_size: 12.0, padding: 12.0, border_width: 1.0, line_spacing: 4.0 } }
}

/// Everything an engine needs to draw the chart besides the data.
#[derive(Clone, Debug)]
pub struct ChartConfig {
    /// Oscillator name used in the value-axis title.
    pub oscillator: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub theme: Theme,
    pub axis_title_size: f32,
    pub tick_size: f32,
    pub labels: LabelOptions,
    pub tooltip: TooltipOptions,
    pub hooks: Hooks,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            oscillator: "RSI".to_string(),
            x_axis: Axis::rank(),
            y_axis: Axis::value(value_axis_title("RSI", "")),
            theme: Theme::dark(),
            axis_title_size: 12.0,
            tick_size: 11.0,
            labels: LabelOptions::default(),
            tooltip: TooltipOptions::default(),
            hooks: Hooks::default(),
        }
    }
}

impl ChartConfig {
    /// Copy of this template with the value-axis title built from `interval_label`.
    pub fn for_interval(&self, interval_label: &str) -> Self {
        let mut cfg = self.clone();
        cfg.y_axis.title = value_axis_title(&self.oscillator, interval_label);
        cfg
    }
}

/// Pixel size and plot insets of a drawing target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, insets: Insets::default() }
    }
}
