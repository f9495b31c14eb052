// File: crates/waves-core/src/surface.rs
// Summary: Rendering-engine contract consumed by `ChartSession` (renderer-agnostic).

use crate::chart::ChartConfig;
use crate::error::Result;
use crate::zone::RenderGroup;

/// A live drawing surface bound to one 2-D drawing target.
pub trait Surface {
    /// Static configuration the surface was created with.
    fn config(&self) -> &ChartConfig;
    /// Set the rank axis upper bound used by the next redraw.
    fn set_rank_max(&mut self, max: f64);
    /// Replace every dataset at once; no incremental patching.
    fn replace_groups(&mut self, groups: Vec<RenderGroup>);
    fn groups(&self) -> &[RenderGroup];
    /// Cursor position in surface pixels, `None` when the pointer left the surface.
    fn set_cursor(&mut self, cursor: Option<(f32, f32)>);
    /// Tooltip lines currently shown for the hovered point, if any.
    fn hovered_lines(&self) -> Option<Vec<String>>;
    /// Repaint synchronously, without transition animation.
    fn redraw(&mut self) -> Result<()>;
    /// Release engine resources. Called exactly once before the surface is dropped.
    fn destroy(&mut self);
}

/// Creates surfaces for named drawing targets.
pub trait SurfaceProvider {
    type Surface: Surface;

    /// Whether a drawing target is registered under `canvas_id`.
    fn has_target(&self, canvas_id: &str) -> bool;

    /// `Ok(None)` when no target exists under `canvas_id`.
    fn create(&mut self, canvas_id: &str, config: ChartConfig) -> Result<Option<Self::Surface>>;
}
