// Host-side tests for the play/pause state machine and frame loop, driven
// through a simulated page.

use autoscroll_core::effects::progress::progress_percent;
use autoscroll_core::*;

#[derive(Default)]
struct FakePage {
    position: f64,
    document_height: f64,
    viewport_width: f64,
    viewport_height: f64,

    next_frame: u32,
    refuse_frames: bool,
    fired: usize,
    requested: Vec<u32>,
    cancelled: Vec<u32>,
    renders: Vec<PlayState>,
    activations: u32,
    started: Vec<FrameTick>,
    frames: Vec<FrameTick>,
    stops: u32,
}

impl FakePage {
    fn new(document_height: f64, viewport_height: f64) -> Self {
        Self {
            document_height,
            viewport_width: 800.0,
            viewport_height,
            ..Default::default()
        }
    }

    fn outstanding(&self) -> usize {
        self.requested.len() - self.cancelled.len() - self.fired
    }
}

impl ViewportSignals for FakePage {
    fn scroll_position(&self) -> f64 {
        self.position
    }
    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }
    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }
    fn document_height(&self) -> f64 {
        self.document_height
    }
}

impl PlayHost for FakePage {
    type Frame = u32;

    fn request_frame(&mut self) -> Option<u32> {
        if self.refuse_frames {
            return None;
        }
        self.next_frame += 1;
        self.requested.push(self.next_frame);
        Some(self.next_frame)
    }

    fn cancel_frame(&mut self, frame: u32) {
        self.cancelled.push(frame);
    }

    fn scroll_to(&mut self, position: f64) {
        self.position = position;
    }

    fn render_control(&mut self, state: PlayState) {
        self.renders.push(state);
    }

    fn activate_effects(&mut self) {
        self.activations += 1;
    }

    fn effects_started(&mut self, tick: &FrameTick) {
        self.started.push(*tick);
    }

    fn effects_frame(&mut self, tick: &FrameTick) {
        self.frames.push(*tick);
    }

    fn effects_stopped(&mut self) {
        self.stops += 1;
    }
}

fn config(speed: f64) -> ScrollConfig {
    ScrollConfig {
        scroll_speed: speed,
        ..ScrollConfig::default()
    }
}

fn orchestrator(speed: f64, document: f64, viewport: f64) -> Orchestrator<FakePage> {
    Orchestrator::new(FakePage::new(document, viewport), &config(speed))
}

/// Deliver the outstanding animation frame, as the browser would.
fn fire(o: &mut Orchestrator<FakePage>) {
    if o.has_pending_frame() {
        o.host_mut().fired += 1;
    }
    o.on_frame();
}

/// Run frames until the loop stops or `limit` frames have run.
fn run_frames(o: &mut Orchestrator<FakePage>, limit: usize) -> usize {
    let mut n = 0;
    while o.has_pending_frame() && n < limit {
        fire(o);
        n += 1;
    }
    n
}

#[test]
fn starts_stopped_and_renders_control() {
    let o = orchestrator(50.0, 2000.0, 1000.0);
    assert_eq!(o.state(), PlayState::Stopped);
    assert_eq!(o.host().renders, vec![PlayState::Stopped]);
    assert!(!o.has_pending_frame());
    assert_eq!(o.host().activations, 0);
}

#[test]
fn toggle_starts_clock_and_activates_effects() {
    let mut o = orchestrator(50.0, 2000.0, 1000.0);
    assert!(o.toggle());
    assert_eq!(o.state(), PlayState::Playing);
    assert_eq!(o.host().renders.last(), Some(&PlayState::Playing));
    assert_eq!(o.host().activations, 1);
    assert_eq!(o.host().started.len(), 1);
    assert!(o.has_pending_frame());
    assert_eq!(o.host().outstanding(), 1);
}

#[test]
fn play_then_pause_leaves_position_untouched() {
    let mut o = orchestrator(50.0, 2000.0, 1000.0);
    o.host_mut().position = 240.0;
    o.toggle();
    o.toggle();
    assert_eq!(o.state(), PlayState::Stopped);
    assert_eq!(o.host().position, 240.0);
    assert!(!o.has_pending_frame());
    assert_eq!(o.host().outstanding(), 0, "pause must cancel the scheduled frame");
    assert_eq!(o.host().stops, 1);
}

#[test]
fn stale_frame_after_pause_does_nothing() {
    let mut o = orchestrator(50.0, 2000.0, 1000.0);
    o.toggle();
    o.toggle();
    let requested = o.host().requested.len();
    o.on_frame();
    assert_eq!(o.host().position, 0.0);
    assert!(o.host().frames.is_empty());
    assert_eq!(o.host().requested.len(), requested);
}

#[test]
fn at_most_one_frame_outstanding() {
    let mut o = orchestrator(50.0, 5000.0, 1000.0);
    o.toggle();
    for _ in 0..20 {
        fire(&mut o);
        assert_eq!(o.host().outstanding(), 1);
    }
    // Toggling play while already playing goes through pause, not a second loop.
    o.toggle();
    o.toggle();
    assert_eq!(o.host().outstanding(), 1);
}

#[test]
fn frames_advance_monotonically_then_stop_once_at_bottom() {
    let mut o = orchestrator(300.0, 1600.0, 1000.0);
    o.toggle();
    let mut last = o.host().position;
    let mut frames = 0;
    while o.has_pending_frame() {
        fire(&mut o);
        let now = o.host().position;
        assert!(now > last, "position must grow every frame");
        last = now;
        frames += 1;
        assert!(frames < 10_000, "loop never terminated");
    }
    assert_eq!(o.state(), PlayState::Stopped);
    assert_eq!(o.host().position, 600.0);
    assert_eq!(o.host().stops, 1);

    let renders = o.host().renders.len();
    assert!(!o.dispatch(PlayEvent::BottomReached));
    fire(&mut o);
    assert_eq!(o.host().renders.len(), renders);
    assert_eq!(o.host().stops, 1);
}

#[test]
fn nominal_scenario_speed_100() {
    let mut o = orchestrator(100.0, 2000.0, 1000.0);
    assert_eq!(o.host().max_scroll_position(), 1000.0);
    o.toggle();
    fire(&mut o);
    let first = o.host().position;
    assert!((first - 1.667).abs() < 1e-3, "first tick moved {first}");

    let frames = run_frames(&mut o, 10_000);
    assert_eq!(o.host().position, 1000.0);
    assert_eq!(o.state(), PlayState::Stopped);
    // ~1000px at 1.667px per frame
    assert!((590..=610).contains(&frames), "took {frames} frames");
}

#[test]
fn tab_hidden_pauses_and_never_resumes() {
    let mut o = orchestrator(50.0, 2000.0, 1000.0);
    o.toggle();
    fire(&mut o);
    assert!(o.tab_hidden());
    assert_eq!(o.state(), PlayState::Stopped);
    assert!(!o.has_pending_frame());

    // Nothing short of an explicit toggle restarts it.
    fire(&mut o);
    assert!(!o.tab_hidden());
    assert_eq!(o.state(), PlayState::Stopped);

    assert!(o.toggle());
    assert_eq!(o.state(), PlayState::Playing);
}

#[test]
fn effects_activate_once_across_play_cycles() {
    let mut o = orchestrator(50.0, 4000.0, 1000.0);
    for _ in 0..3 {
        o.toggle();
        fire(&mut o);
        o.toggle();
    }
    assert_eq!(o.host().activations, 1);
    assert_eq!(o.host().started.len(), 3);
    assert_eq!(o.host().stops, 3);
}

#[test]
fn play_start_tick_reflects_current_position() {
    let mut o = orchestrator(50.0, 3000.0, 1000.0);
    o.host_mut().position = 500.0;
    o.toggle();
    let tick = o.host().started[0];
    assert_eq!(tick.position, 500.0);
    assert_eq!(tick.max_position, 2000.0);
    assert_eq!(progress_percent(tick.position, tick.max_position), 25);
    assert!(o.host().frames.is_empty(), "sync happens before any frame");
}

#[test]
fn every_frame_tick_carries_progress() {
    let mut o = orchestrator(120.0, 3000.0, 1000.0);
    o.toggle();
    run_frames(&mut o, 50);
    for tick in &o.host().frames {
        let expected = (tick.position / tick.max_position * 100.0).round() as u32;
        assert_eq!(progress_percent(tick.position, tick.max_position), expected);
    }
}

#[test]
fn growing_document_extends_the_run() {
    let mut o = orchestrator(600.0, 1100.0, 1000.0);
    o.toggle();
    for _ in 0..5 {
        fire(&mut o);
    }
    // Content revealed mid-run: max scroll is re-read on the next frame.
    o.host_mut().document_height = 3000.0;
    run_frames(&mut o, 10_000);
    assert_eq!(o.host().position, 2000.0);
}

#[test]
fn short_page_stops_on_first_frame() {
    let mut o = orchestrator(50.0, 800.0, 1000.0);
    o.toggle();
    fire(&mut o);
    assert_eq!(o.state(), PlayState::Stopped);
    assert_eq!(o.host().position, 0.0);
}

#[test]
fn view_tracks_orchestrator_state() {
    let mut o = orchestrator(50.0, 2000.0, 1000.0);
    let view = o.view();
    assert!(!view.is_playing());
    o.toggle();
    assert!(view.is_playing());
    o.tab_hidden();
    assert_eq!(view.get(), PlayState::Stopped);
}

#[test]
fn teardown_cancels_and_freezes() {
    let mut o = orchestrator(50.0, 2000.0, 1000.0);
    o.toggle();
    o.teardown();
    assert!(o.is_torn_down());
    assert_eq!(o.state(), PlayState::Stopped);
    assert_eq!(o.host().outstanding(), 0);
    assert!(!o.toggle());
    assert_eq!(o.state(), PlayState::Stopped);
    o.teardown();
}

#[test]
fn shared_state_cell_is_seen_by_early_views() {
    let cell = PlayStateCell::new();
    let early = cell.view();
    let mut o = Orchestrator::with_state(FakePage::new(2000.0, 1000.0), &config(50.0), cell);
    o.toggle();
    assert!(early.is_playing());
}

#[test]
fn transition_table() {
    use PlayEvent::*;
    use PlayState::*;
    assert_eq!(Stopped.next(Toggle), Some(Playing));
    assert_eq!(Playing.next(Toggle), Some(Stopped));
    assert_eq!(Playing.next(TabHidden), Some(Stopped));
    assert_eq!(Playing.next(BottomReached), Some(Stopped));
    assert_eq!(Playing.next(PageLeaving), Some(Stopped));
    assert_eq!(Stopped.next(TabHidden), None);
    assert_eq!(Stopped.next(BottomReached), None);
    assert_eq!(Stopped.next(PageLeaving), None);
}

#[test]
fn leaving_page_pauses_but_keeps_control_live() {
    let mut o = orchestrator(50.0, 2000.0, 1000.0);
    o.toggle();
    fire(&mut o);
    assert!(o.page_leaving());
    assert_eq!(o.state(), PlayState::Stopped);
    assert_eq!(o.host().outstanding(), 0);
    assert!(!o.is_torn_down());

    // Navigation cancelled: the control must still start playback.
    assert!(o.toggle());
    assert_eq!(o.state(), PlayState::Playing);
    assert!(o.has_pending_frame());
    assert_eq!(o.host().activations, 1);
}

#[test]
fn leaving_page_while_stopped_is_a_no_op() {
    let mut o = orchestrator(50.0, 2000.0, 1000.0);
    assert!(!o.page_leaving());
    assert_eq!(o.host().renders, vec![PlayState::Stopped]);
}

#[test]
fn refused_frame_request_stops_playback() {
    let mut o = orchestrator(50.0, 2000.0, 1000.0);
    o.host_mut().refuse_frames = true;
    assert!(o.toggle());
    assert_eq!(o.state(), PlayState::Stopped);
    assert!(!o.has_pending_frame());
    assert_eq!(
        o.host().renders,
        vec![PlayState::Stopped, PlayState::Playing, PlayState::Stopped]
    );
    assert_eq!(o.host().stops, 1);

    // Frames available again: a later toggle plays normally.
    o.host_mut().refuse_frames = false;
    assert!(o.toggle());
    assert_eq!(o.state(), PlayState::Playing);
    assert!(o.has_pending_frame());
}

#[test]
fn refused_frame_mid_run_stops_playback() {
    let mut o = orchestrator(50.0, 5000.0, 1000.0);
    o.toggle();
    fire(&mut o);
    o.host_mut().refuse_frames = true;
    fire(&mut o);
    assert_eq!(o.state(), PlayState::Stopped);
    assert_eq!(o.host().renders.last(), Some(&PlayState::Stopped));
}
