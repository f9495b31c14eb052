// File: crates/waves-core/src/session.rs
// Summary: Chart session lifecycle (init/update/destroy) and the snapshot ingestion pipeline.
// Notes:
// - A session owns at most one surface. Re-initialising tears the old one down first.
// - Nothing here reports errors to the host: bad input degrades to defaults and
//   engine failures are logged.

use serde_json::Value;

use crate::chart::ChartConfig;
use crate::point::PointMapper;
use crate::surface::{Surface, SurfaceProvider};
use crate::tooltip::format_tooltip;
use crate::types::DEFAULT_RANK_MAX;
use crate::zone::{classify, RenderSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Ready,
    Destroyed,
}

/// Result of running one snapshot through mapping, classification and formatting.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    pub set: RenderSet,
    /// Records dropped because they were null, not objects, or empty.
    pub skipped: usize,
}

/// Map, classify and format every record of a snapshot, preserving input order per zone.
pub fn build_snapshot(records: &[Value], captured_at: &str) -> Snapshot {
    let mut snap = Snapshot::default();
    for record in records {
        let Some(mut point) = PointMapper::map(record) else {
            snap.skipped += 1;
            continue;
        };
        let zone = classify(&point.zone_tag);
        point.tooltip_lines = format_tooltip(&point, captured_at);
        snap.set.push(zone, point);
    }
    snap
}

/// Rank axis upper bound for a host-supplied hint.
pub fn rank_bound(hint: f64) -> f64 {
    if hint.is_finite() && hint > 0.0 { hint } else { DEFAULT_RANK_MAX }
}

pub struct ChartSession<P: SurfaceProvider> {
    provider: P,
    template: ChartConfig,
    surface: Option<P::Surface>,
    state: SessionState,
}

impl<P: SurfaceProvider> ChartSession<P> {
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, ChartConfig::default())
    }

    /// Session whose surfaces start from `template` (theme, oscillator name, plugin options).
    pub fn with_config(provider: P, template: ChartConfig) -> Self {
        Self { provider, template, surface: None, state: SessionState::Uninitialized }
    }

    pub fn state(&self) -> SessionState { self.state }

    pub fn surface(&self) -> Option<&P::Surface> { self.surface.as_ref() }

    /// Engine-specific access (export, resize) to the live surface.
    pub fn surface_mut(&mut self) -> Option<&mut P::Surface> { self.surface.as_mut() }

    pub fn provider(&self) -> &P { &self.provider }

    pub fn provider_mut(&mut self) -> &mut P { &mut self.provider }

    /// Create the surface for `canvas_id`. Returns false, leaving any current surface
    /// in place, when the target does not exist or the engine cannot create a surface.
    pub fn init(&mut self, canvas_id: &str, axis_label: &str) -> bool {
        if !self.provider.has_target(canvas_id) {
            tracing::warn!(canvas_id, "canvas target not found; chart not created");
            return false;
        }
        if self.release() {
            self.state = SessionState::Destroyed;
        }

        let config = self.template.for_interval(axis_label);
        match self.provider.create(canvas_id, config) {
            Ok(Some(surface)) => {
                self.surface = Some(surface);
                self.state = SessionState::Ready;
                tracing::debug!(canvas_id, axis_label, "chart session ready");
                true
            }
            Ok(None) => {
                tracing::warn!(canvas_id, "canvas target vanished before surface creation");
                false
            }
            Err(err) => {
                tracing::warn!(canvas_id, error = %err, "surface creation failed");
                false
            }
        }
    }

    /// Replace all datasets with `records` and redraw immediately. Ignored unless ready.
    pub fn update(&mut self, records: &[Value], max_rank_hint: f64, captured_at: &str) {
        let Some(surface) = self.surface.as_mut() else {
            tracing::debug!(state = ?self.state, "update ignored; no surface");
            return;
        };

        let snap = build_snapshot(records, captured_at);
        let rank_max = rank_bound(max_rank_hint);
        tracing::debug!(
            records = records.len(),
            points = snap.set.len(),
            skipped = snap.skipped,
            overbought = snap.set.overbought.len(),
            oversold = snap.set.oversold.len(),
            neutral = snap.set.neutral.len(),
            rank_max,
            "snapshot ingested"
        );

        surface.set_rank_max(rank_max);
        surface.replace_groups(snap.set.into_groups());
        if let Err(err) = surface.redraw() {
            tracing::warn!(error = %err, "redraw failed");
        }
    }

    /// Move the hover cursor and redraw; returns the tooltip lines now shown.
    pub fn hover(&mut self, cursor: Option<(f32, f32)>) -> Option<Vec<String>> {
        let surface = self.surface.as_mut()?;
        surface.set_cursor(cursor);
        if let Err(err) = surface.redraw() {
            tracing::warn!(error = %err, "hover redraw failed");
        }
        surface.hovered_lines()
    }

    /// Release the surface if there is one. Safe to call repeatedly.
    pub fn destroy(&mut self) {
        if self.release() {
            self.state = SessionState::Destroyed;
        }
    }

    fn release(&mut self) -> bool {
        match self.surface.take() {
            Some(mut surface) => {
                surface.destroy();
                tracing::debug!("chart surface destroyed");
                true
            }
            None => false,
        }
    }
}

impl<P: SurfaceProvider> Drop for ChartSession<P> {
    fn drop(&mut self) {
        self.release();
    }
}
