// File: crates/waves-core/tests/bands.rs
// Purpose: Zone band geometry: partition of the value axis, paint order, resize.

use waves_core::{band_rects, paint_zone_bands, zone_bands, FilledRect, PixelMapping, ValueScale};

#[test]
fn thresholds_are_fixed_and_contiguous() {
    let bands = zone_bands();
    let edges: Vec<(f64, f64)> = bands.iter().map(|b| (b.lo, b.hi)).collect();
    assert_eq!(edges, vec![(0.0, 30.0), (30.0, 40.0), (40.0, 60.0), (60.0, 70.0), (70.0, 100.0)]);
    for pair in bands.windows(2) {
        assert_eq!(pair[0].hi, pair[1].lo);
    }
}

#[test]
fn band_heights_sum_to_axis_span() {
    let y = ValueScale::new_linear(24.0, 584.0, 0.0, 100.0);
    let rects = band_rects(&y, 1024.0);
    let total: f32 = rects.iter().map(|(_, r)| r.height()).sum();
    assert!((total - y.pixel_span()).abs() < 1e-3, "total {total} vs span {}", y.pixel_span());
}

#[test]
fn adjacent_bands_share_their_edge() {
    let y = ValueScale::new_linear(13.0, 407.0, 0.0, 100.0);
    let rects = band_rects(&y, 300.0);
    // bottom-to-top: each band's top is the next band's bottom
    for pair in rects.windows(2) {
        assert_eq!(pair[0].1.top, pair[1].1.bottom);
    }
    assert_eq!(rects[0].1.bottom, y.to_px(0.0));
    assert_eq!(rects[4].1.top, y.to_px(100.0));
}

#[test]
fn bands_span_full_surface_width() {
    let y = ValueScale::new_linear(0.0, 100.0, 0.0, 100.0);
    for (_, r) in band_rects(&y, 640.0) {
        assert_eq!(r.left, 0.0);
        assert_eq!(r.right, 640.0);
    }
}

#[test]
fn paints_bottom_to_top_with_band_colors() {
    let y = ValueScale::new_linear(20.0, 220.0, 0.0, 100.0);
    let mut painted: Vec<FilledRect> = Vec::new();
    paint_zone_bands(&y, 400.0, &mut painted);

    assert_eq!(painted.len(), 5);
    let bands = zone_bands();
    for (fill, band) in painted.iter().zip(bands.iter()) {
        assert_eq!(fill.color, band.fill);
    }
    for pair in painted.windows(2) {
        assert!(pair[0].rect.top > pair[1].rect.top, "later bands sit higher on screen");
    }
    // oversold band: 0..30 -> 220..160
    assert!((painted[0].rect.bottom - 220.0).abs() < 1e-4);
    assert!((painted[0].rect.top - 160.0).abs() < 1e-4);
}

#[test]
fn geometry_follows_axis_resize() {
    let small = ValueScale::new_linear(10.0, 110.0, 0.0, 100.0);
    let large = ValueScale::new_linear(10.0, 510.0, 0.0, 100.0);
    let a = band_rects(&small, 100.0);
    let b = band_rects(&large, 100.0);
    assert!((a[2].1.height() - 20.0).abs() < 1e-4);
    assert!((b[2].1.height() - 100.0).abs() < 1e-4);
}
