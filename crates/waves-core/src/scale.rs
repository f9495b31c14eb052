// File: crates/waves-core/src/scale.rs
// Summary: Rank (X) and Value (Y) linear scale transforms used for pixel mapping.

/// Logical rank coordinate (display position on X).
pub type Rank = f64;
/// Oscillator value coordinate (Y).
pub type Value = f64;

/// Pixel-mapping capability for one axis: logical value to pixel.
/// Mappings depend on the current surface geometry and must be rebuilt after a resize.
pub trait PixelMapping {
    fn to_px(&self, v: f64) -> f32;
}

/// Horizontal rank scale mapping [min, max] onto [left, right] pixels.
#[derive(Clone, Copy, Debug)]
pub struct RankScale {
    pub left_px: f32,
    pub right_px: f32,
    pub min: Rank,
    pub max: Rank,
}

impl RankScale {
    pub fn new(left_px: f32, right_px: f32, min: Rank, mut max: Rank) -> Self {
        if (max - min).abs() < 1e-12 { max = min + 1.0; }
        Self { left_px, right_px, min, max }
    }
}

impl PixelMapping for RankScale {
    #[inline]
    fn to_px(&self, x: Rank) -> f32 {
        let span = (self.max - self.min).max(1e-12);
        self.left_px + ((x - self.min) / span) as f32 * (self.right_px - self.left_px)
    }
}

/// Vertical value scale mapping data range to [top, bottom] pixels (min at the bottom).
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    /// Pixel height of the full logical range.
    pub fn pixel_span(&self) -> f32 { self.bottom_px - self.top_px }
}

impl PixelMapping for ValueScale {
    #[inline]
    fn to_px(&self, y: Value) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}
