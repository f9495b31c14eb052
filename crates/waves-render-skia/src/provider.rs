// File: crates/waves-render-skia/src/provider.rs
// Summary: Registry of named drawing targets; creates Skia raster surfaces for them.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use waves_core::{ChartConfig, RenderOptions, Result, SurfaceProvider};

use crate::surface::SkiaSurface;

/// Named canvases (id -> pixel size and insets) a session can bind to.
#[derive(Default)]
pub struct SkiaProvider {
    targets: HashMap<String, RenderOptions>,
    live: Rc<Cell<usize>>,
}

impl SkiaProvider {
    pub fn new() -> Self { Self::default() }

    /// Register (or resize) a drawing target.
    pub fn register_canvas(&mut self, canvas_id: impl Into<String>, opts: RenderOptions) {
        self.targets.insert(canvas_id.into(), opts);
    }

    /// Remove a drawing target. Surfaces already bound to it keep drawing until
    /// destroyed; later `init` calls for the id fail.
    pub fn unregister_canvas(&mut self, canvas_id: &str) -> Option<RenderOptions> {
        self.targets.remove(canvas_id)
    }

    /// Surfaces created by this provider and not yet destroyed.
    pub fn live_surfaces(&self) -> usize { self.live.get() }
}

impl SurfaceProvider for SkiaProvider {
    type Surface = SkiaSurface;

    fn has_target(&self, canvas_id: &str) -> bool {
        self.targets.contains_key(canvas_id)
    }

    fn create(&mut self, canvas_id: &str, config: ChartConfig) -> Result<Option<SkiaSurface>> {
        let Some(opts) = self.targets.get(canvas_id).copied() else {
            return Ok(None);
        };
        let surface = SkiaSurface::new(canvas_id, opts, config, self.live.clone())?;
        tracing::debug!(canvas_id, width = opts.width, height = opts.height, "skia surface created");
        Ok(Some(surface))
    }
}
