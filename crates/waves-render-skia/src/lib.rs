// File: crates/waves-render-skia/src/lib.rs
// Summary: Skia engine entry point; named raster canvases that implement the waves-core surface contract.

use skia_safe as skia;
use waves_core::Rgba;

pub mod draw;
pub mod painter;
pub mod provider;
pub mod surface;

pub use painter::CanvasPainter;
pub use provider::SkiaProvider;
pub use surface::SkiaSurface;

/// Convert a core color into Skia's ARGB color.
#[inline]
pub fn sk_color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}
