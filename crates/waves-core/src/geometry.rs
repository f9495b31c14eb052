// File: crates/waves-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::Insets;

/// Axis-aligned pixel rectangle; `top <= bottom` for well-formed rects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF32 {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF32 {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}

/// Plot area left after removing `insets` from a `width` x `height` surface.
/// Degenerate sizes collapse to a 1px area instead of inverting.
pub fn plot_rect(width: i32, height: i32, insets: &Insets) -> RectF32 {
    let left = insets.left as f32;
    let top = insets.top as f32;
    let right = (width as f32 - insets.right as f32).max(left + 1.0);
    let bottom = (height as f32 - insets.bottom as f32).max(top + 1.0);
    RectF32::from_ltrb(left, top, right, bottom)
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
