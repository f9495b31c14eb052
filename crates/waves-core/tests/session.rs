// File: crates/waves-core/tests/session.rs
// Purpose: Session lifecycle against a recording surface provider.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use serde_json::{json, Value};
use waves_core::{
    build_snapshot, ChartConfig, ChartSession, RenderGroup, Result, SessionState, Surface,
    SurfaceProvider, Zone,
};

#[derive(Default)]
struct Log {
    created: usize,
    destroyed: Vec<usize>,
    redraws: usize,
}

struct RecordingSurface {
    id: usize,
    config: ChartConfig,
    groups: Vec<RenderGroup>,
    cursor: Option<(f32, f32)>,
    log: Rc<RefCell<Log>>,
}

impl Surface for RecordingSurface {
    fn config(&self) -> &ChartConfig { &self.config }
    fn set_rank_max(&mut self, max: f64) { self.config.x_axis.max = max; }
    fn replace_groups(&mut self, groups: Vec<RenderGroup>) { self.groups = groups; }
    fn groups(&self) -> &[RenderGroup] { &self.groups }
    fn set_cursor(&mut self, cursor: Option<(f32, f32)>) { self.cursor = cursor; }
    fn hovered_lines(&self) -> Option<Vec<String>> {
        self.cursor?;
        self.groups.first().map(|g| (self.config.hooks.hover_text)(&g.points[0]).to_vec())
    }
    fn redraw(&mut self) -> Result<()> {
        self.log.borrow_mut().redraws += 1;
        Ok(())
    }
    fn destroy(&mut self) { self.log.borrow_mut().destroyed.push(self.id); }
}

struct RecordingProvider {
    targets: HashSet<String>,
    log: Rc<RefCell<Log>>,
}

impl RecordingProvider {
    fn with_target(id: &str) -> (Self, Rc<RefCell<Log>>) {
        let log = Rc::new(RefCell::new(Log::default()));
        let provider = Self { targets: HashSet::from([id.to_string()]), log: log.clone() };
        (provider, log)
    }
}

impl SurfaceProvider for RecordingProvider {
    type Surface = RecordingSurface;

    fn has_target(&self, canvas_id: &str) -> bool { self.targets.contains(canvas_id) }

    fn create(&mut self, canvas_id: &str, config: ChartConfig) -> Result<Option<RecordingSurface>> {
        if !self.has_target(canvas_id) {
            return Ok(None);
        }
        let mut log = self.log.borrow_mut();
        log.created += 1;
        Ok(Some(RecordingSurface {
            id: log.created,
            config,
            groups: Vec::new(),
            cursor: None,
            log: self.log.clone(),
        }))
    }
}

fn scenario() -> Vec<Value> {
    vec![
        json!({"rank": 1, "rsi": 75, "zone": "overbought", "symbol": "AAA"}),
        json!({"rank": 2, "rsi": 25, "zone": "oversold", "symbol": "BBB"}),
        json!({"rank": 3, "rsi": 50, "zone": "neutral", "symbol": "CCC"}),
    ]
}

#[test]
fn init_builds_static_config() {
    let (provider, log) = RecordingProvider::with_target("chart");
    let mut session = ChartSession::new(provider);
    assert_eq!(session.state(), SessionState::Uninitialized);

    assert!(session.init("chart", "1h"));
    assert_eq!(session.state(), SessionState::Ready);
    assert_eq!(log.borrow().created, 1);

    let cfg = session.surface().expect("surface").config();
    assert_eq!(cfg.y_axis.title, "RSI (1h)");
    assert_eq!((cfg.y_axis.min, cfg.y_axis.max), (0.0, 100.0));
    assert_eq!(cfg.x_axis.max, 30.0);
}

#[test]
fn init_without_target_returns_false() {
    let (provider, log) = RecordingProvider::with_target("chart");
    let mut session = ChartSession::new(provider);
    assert!(!session.init("missing", "4h"));
    assert!(session.surface().is_none());
    assert_eq!(session.state(), SessionState::Uninitialized);
    assert_eq!(log.borrow().created, 0);
}

#[test]
fn reinit_destroys_previous_surface_once() {
    let (provider, log) = RecordingProvider::with_target("chart");
    let mut session = ChartSession::new(provider);
    assert!(session.init("chart", "4h"));
    assert!(session.init("chart", "4h"));

    let log = log.borrow();
    assert_eq!(log.created, 2);
    assert_eq!(log.destroyed, vec![1], "first surface destroyed exactly once");
}

#[test]
fn update_scenario_builds_three_groups() {
    let (provider, log) = RecordingProvider::with_target("chart");
    let mut session = ChartSession::new(provider);
    assert!(session.init("chart", "4h"));
    session.update(&scenario(), 30.0, "2024-05-01");

    let surface = session.surface().unwrap();
    let groups = surface.groups();
    assert_eq!(groups.len(), 3);
    assert!(groups.iter().all(|g| g.points.len() == 1));
    assert_eq!(surface.config().x_axis.max, 30.0);

    let aaa = &groups.iter().find(|g| g.zone == Zone::Overbought).unwrap().points[0];
    assert!(aaa.tooltip_lines.contains(&"Symbol: AAA".to_string()));
    assert!(aaa.tooltip_lines.contains(&"Oscillator: 75.00".to_string()));
    assert_eq!(log.borrow().redraws, 1);
}

#[test]
fn update_replaces_rank_bound_from_hint() {
    let (provider, _log) = RecordingProvider::with_target("chart");
    let mut session = ChartSession::new(provider);
    session.init("chart", "4h");

    session.update(&scenario(), 120.0, "");
    assert_eq!(session.surface().unwrap().config().x_axis.max, 120.0);

    for bad in [0.0, -5.0, f64::NAN] {
        session.update(&scenario(), bad, "");
        assert_eq!(session.surface().unwrap().config().x_axis.max, 30.0);
    }
}

#[test]
fn update_is_full_replacement_and_idempotent() {
    let (provider, _log) = RecordingProvider::with_target("chart");
    let mut session = ChartSession::new(provider);
    session.init("chart", "4h");

    session.update(&scenario(), 30.0, "t");
    let first = session.surface().unwrap().groups().to_vec();
    session.update(&scenario(), 30.0, "t");
    assert_eq!(session.surface().unwrap().groups(), first.as_slice());

    session.update(&[json!({"rank": 9, "zone": "oversold"})], 30.0, "t");
    let groups = session.surface().unwrap().groups();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].zone, Zone::Oversold);
}

#[test]
fn null_records_are_skipped() {
    let snap = build_snapshot(&[Value::Null, json!({}), json!({"rank": 1})], "");
    assert_eq!(snap.skipped, 2);
    assert_eq!(snap.set.len(), 1);
}

#[test]
fn update_before_init_is_a_no_op() {
    let (provider, log) = RecordingProvider::with_target("chart");
    let mut session = ChartSession::new(provider);
    session.update(&scenario(), 30.0, "");
    assert_eq!(session.state(), SessionState::Uninitialized);
    assert!(session.surface().is_none());
    assert_eq!(log.borrow().redraws, 0);
}

#[test]
fn destroy_is_idempotent_and_blocks_updates() {
    let (provider, log) = RecordingProvider::with_target("chart");
    let mut session = ChartSession::new(provider);
    session.init("chart", "4h");
    session.destroy();
    session.destroy();
    assert_eq!(session.state(), SessionState::Destroyed);
    assert_eq!(log.borrow().destroyed, vec![1]);

    session.update(&scenario(), 30.0, "");
    assert_eq!(log.borrow().redraws, 0);

    assert!(session.init("chart", "4h"), "a destroyed session can be re-initialised");
    assert_eq!(session.state(), SessionState::Ready);
}

#[test]
fn dropping_session_releases_surface() {
    let (provider, log) = RecordingProvider::with_target("chart");
    {
        let mut session = ChartSession::new(provider);
        session.init("chart", "4h");
    }
    assert_eq!(log.borrow().destroyed, vec![1]);
}

#[test]
fn hover_returns_lines_from_hook() {
    let (provider, _log) = RecordingProvider::with_target("chart");
    let mut session = ChartSession::new(provider);
    assert!(session.hover(Some((1.0, 1.0))).is_none(), "no surface yet");

    session.init("chart", "4h");
    session.update(&scenario(), 30.0, "");
    let lines = session.hover(Some((1.0, 1.0))).expect("lines");
    assert_eq!(lines[0], "Symbol: AAA");
    assert!(session.hover(None).is_none());
}
