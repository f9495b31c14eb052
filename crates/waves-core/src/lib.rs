// File: crates/waves-core/src/lib.rs
// Summary: Core library entry point; snapshot-to-scatter pipeline, zone bands and session lifecycle.

pub mod axis;
pub mod bands;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod point;
pub mod record;
pub mod scale;
pub mod session;
pub mod surface;
pub mod theme;
pub mod tooltip;
pub mod types;
pub mod view;
pub mod zone;

pub use axis::{Axis, TickSpec};
pub use bands::{band_rects, paint_zone_bands, zone_bands, FilledRect, Painter, ZoneBand};
pub use chart::{ChartConfig, Hooks, RenderOptions};
pub use error::{ChartError, Result};
pub use point::{Point, PointMapper};
pub use record::{Field, RawRecord};
pub use scale::{PixelMapping, RankScale, ValueScale};
pub use session::{build_snapshot, ChartSession, SessionState, Snapshot};
pub use surface::{Surface, SurfaceProvider};
pub use theme::Theme;
pub use tooltip::format_tooltip;
pub use types::Rgba;
pub use view::PlotView;
pub use zone::{classify, RenderGroup, RenderSet, Zone};
