// File: crates/waves-render-skia/src/surface.rs
// Summary: Skia CPU raster surface implementing the waves-core `Surface` contract.

use std::cell::Cell;
use std::rc::Rc;

use skia_safe as skia;
use waves_core::{ChartConfig, ChartError, PlotView, RenderGroup, RenderOptions, Result, Surface};

use crate::draw::{draw_axis_titles, draw_grid_and_ticks, draw_point_labels, draw_points, draw_tooltip};
use crate::painter::CanvasPainter;
use crate::sk_color;

pub struct SkiaSurface {
    canvas_id: String,
    opts: RenderOptions,
    config: ChartConfig,
    raster: Option<skia::Surface>,
    groups: Vec<RenderGroup>,
    cursor: Option<(f32, f32)>,
    hovered: Option<Vec<String>>,
    frames: u64,
    live: Rc<Cell<usize>>,
}

fn raster(opts: &RenderOptions) -> Result<skia::Surface> {
    skia::surfaces::raster_n32_premul((opts.width.max(1), opts.height.max(1)))
        .ok_or(ChartError::Surface { width: opts.width, height: opts.height })
}

impl SkiaSurface {
    pub(crate) fn new(canvas_id: &str, opts: RenderOptions, config: ChartConfig, live: Rc<Cell<usize>>) -> Result<Self> {
        let raster = raster(&opts)?;
        live.set(live.get() + 1);
        Ok(Self {
            canvas_id: canvas_id.to_string(),
            opts,
            config,
            raster: Some(raster),
            groups: Vec::new(),
            cursor: None,
            hovered: None,
            frames: 0,
            live,
        })
    }

    pub fn options(&self) -> &RenderOptions { &self.opts }

    /// Frames painted since creation.
    pub fn frames(&self) -> u64 { self.frames }

    pub fn is_destroyed(&self) -> bool { self.raster.is_none() }

    /// Reallocate the raster at a new size and repaint.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<()> {
        if self.raster.is_none() {
            return Err(ChartError::Render("surface destroyed".into()));
        }
        self.opts.width = width;
        self.opts.height = height;
        self.raster = Some(raster(&self.opts)?);
        self.redraw()
    }

    /// Current frame as tightly packed, unpremultiplied RGBA8 rows.
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32)> {
        let raster = self.raster.as_mut().ok_or_else(|| ChartError::Export("surface destroyed".into()))?;
        let (w, h) = (raster.width(), raster.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !raster.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(ChartError::Export("read_pixels failed".into()));
        }
        Ok((pixels, w as u32, h as u32))
    }

    /// Current frame encoded as PNG.
    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>> {
        let (pixels, w, h) = self.to_rgba8()?;
        let img = image::RgbaImage::from_raw(w, h, pixels)
            .ok_or_else(|| ChartError::Export("pixel buffer size mismatch".into()))?;
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)
            .map_err(|e| ChartError::Export(e.to_string()))?;
        Ok(out.into_inner())
    }

    /// Write the current frame as a PNG file, creating parent directories.
    pub fn save_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.to_png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl Surface for SkiaSurface {
    fn config(&self) -> &ChartConfig { &self.config }

    fn set_rank_max(&mut self, max: f64) {
        self.config.x_axis.max = max;
    }

    fn replace_groups(&mut self, groups: Vec<RenderGroup>) {
        self.groups = groups;
    }

    fn groups(&self) -> &[RenderGroup] { &self.groups }

    fn set_cursor(&mut self, cursor: Option<(f32, f32)>) {
        self.cursor = cursor;
    }

    fn hovered_lines(&self) -> Option<Vec<String>> { self.hovered.clone() }

    fn redraw(&mut self) -> Result<()> {
        let raster = self.raster.as_mut().ok_or_else(|| ChartError::Render("surface destroyed".into()))?;
        let canvas = raster.canvas();
        let cfg = &self.config;
        let view = PlotView::new(&self.opts, cfg);

        let hovered = self.cursor.and_then(|c| view.hit_test(&self.groups, c));

        canvas.clear(sk_color(cfg.theme.background));
        (cfg.hooks.pre_draw)(&view.y, self.opts.width as f32, &mut CanvasPainter::new(canvas));
        draw_grid_and_ticks(canvas, &view, cfg);
        draw_axis_titles(canvas, &view, &self.opts, cfg);
        draw_points(canvas, &view, &self.groups, hovered);
        draw_point_labels(canvas, &view, &self.groups, cfg);

        self.hovered = match hovered {
            Some(p) => {
                let lines = (cfg.hooks.hover_text)(p).to_vec();
                draw_tooltip(canvas, view.point_px(p), &lines, &self.opts, cfg);
                Some(lines)
            }
            None => None,
        };
        self.frames += 1;
        Ok(())
    }

    fn destroy(&mut self) {
        if self.raster.take().is_some() {
            self.groups.clear();
            self.hovered = None;
            self.live.set(self.live.get().saturating_sub(1));
            tracing::debug!(canvas_id = %self.canvas_id, frames = self.frames, "skia surface released");
        }
    }
}

impl Drop for SkiaSurface {
    fn drop(&mut self) {
        self.destroy();
    }
}
