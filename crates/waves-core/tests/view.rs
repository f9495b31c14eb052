// File: crates/waves-core/tests/view.rs
// Purpose: Plot view mappings, hover hit testing and tick layout.

use serde_json::json;
use waves_core::{build_snapshot, Axis, ChartConfig, PlotView, RenderOptions, TickSpec};
use waves_core::types::Insets;

fn opts() -> RenderOptions {
    RenderOptions { width: 400, height: 300, insets: Insets::new(40, 10, 10, 30) }
}

#[test]
fn maps_value_axis_bottom_up() {
    let view = PlotView::new(&opts(), &ChartConfig::default());
    assert_eq!(view.plot.top, 10.0);
    assert_eq!(view.plot.bottom, 270.0);
    let p = build_snapshot(&[json!({"rank": 0, "rsi": 0})], "").set.neutral.remove(0);
    let (px, py) = view.point_px(&p);
    assert_eq!(px, 40.0);
    assert_eq!(py, 270.0);
}

#[test]
fn hit_test_finds_nearest_point_within_hover_radius() {
    let snap = build_snapshot(
        &[
            json!({"rank": 10, "rsi": 50, "symbol": "NEAR"}),
            json!({"rank": 11, "rsi": 50, "symbol": "NEXT"}),
        ],
        "",
    );
    let groups = snap.set.into_groups();
    let view = PlotView::new(&opts(), &ChartConfig::default());

    let (px, py) = view.point_px(&groups[0].points[0]);
    let hit = view.hit_test(&groups, (px + 2.0, py - 1.0)).expect("hit");
    assert_eq!(hit.symbol, "NEAR");

    assert!(view.hit_test(&groups, (px, py + 40.0)).is_none());
}

#[test]
fn value_ticks_every_ten() {
    let ticks = Axis::value("RSI (4h)").tick_values();
    assert_eq!(ticks.len(), 11);
    assert_eq!(ticks[0], 0.0);
    assert_eq!(ticks[10], 100.0);
}

#[test]
fn rank_ticks_respect_limit() {
    let mut axis = Axis::rank();
    assert_eq!(axis.ticks, TickSpec::MaxCount(10));
    axis.max = 250.0;
    let ticks = axis.tick_values();
    assert!(ticks.len() <= 10, "{ticks:?}");
    assert_eq!(ticks[0], 0.0);
}

#[test]
fn value_axis_title_defaults_interval() {
    let cfg = ChartConfig::default();
    assert_eq!(cfg.for_interval("").y_axis.title, "RSI (4h)");
    assert_eq!(cfg.for_interval("1d").y_axis.title, "RSI (1d)");
    assert_eq!(cfg.x_axis.title, "Rank");
    assert_eq!((cfg.y_axis.min, cfg.y_axis.max), (0.0, 100.0));
    assert_eq!(cfg.x_axis.max, 30.0);
}
