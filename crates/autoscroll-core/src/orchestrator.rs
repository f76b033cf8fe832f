//! Per-container play/pause state machine and effect lifecycle.
//!
//! The orchestrator is generic over [`PlayHost`], the seam behind which the
//! browser binding schedules animation frames, writes the scroll position
//! and drives the DOM. Everything here is synchronous: a pause cancels the
//! outstanding frame before it returns.

use crate::clock::{FrameStep, ScrollDriver};
use crate::config::ScrollConfig;
use crate::state::{PlayEvent, PlayState, PlayStateCell, PlayStateView};
use crate::viewport::{FrameTick, ViewportSignals};

pub trait PlayHost: ViewportSignals {
    /// Handle of one scheduled animation frame.
    type Frame;

    fn request_frame(&mut self) -> Option<Self::Frame>;
    fn cancel_frame(&mut self, frame: Self::Frame);
    fn scroll_to(&mut self, position: f64);

    /// Reflect `state` on the control surface (pressed state, icons, classes).
    fn render_control(&mut self, state: PlayState);

    /// Called once per container, on its first transition to Playing.
    fn activate_effects(&mut self);

    fn effects_started(&mut self, tick: &FrameTick);
    fn effects_frame(&mut self, tick: &FrameTick);
    fn effects_stopped(&mut self);
}

pub struct Orchestrator<H: PlayHost> {
    host: H,
    state: PlayStateCell,
    driver: ScrollDriver,
    pending: Option<H::Frame>,
    activated: bool,
    torn_down: bool,
}

impl<H: PlayHost> Orchestrator<H> {
    pub fn new(host: H, config: &ScrollConfig) -> Self {
        Self::with_state(host, config, PlayStateCell::new())
    }

    /// Build around an existing state cell, so effects created before the
    /// orchestrator can already hold a view onto it.
    pub fn with_state(mut host: H, config: &ScrollConfig, state: PlayStateCell) -> Self {
        host.render_control(state.get());
        Self {
            host,
            state,
            driver: ScrollDriver::new(config.scroll_speed),
            pending: None,
            activated: false,
            torn_down: false,
        }
    }

    pub fn state(&self) -> PlayState {
        self.state.get()
    }

    pub fn view(&self) -> PlayStateView {
        self.state.view()
    }

    pub fn driver(&self) -> &ScrollDriver {
        &self.driver
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Apply one event. Returns whether the state changed.
    pub fn dispatch(&mut self, event: PlayEvent) -> bool {
        if self.torn_down {
            return false;
        }
        let current = self.state.get();
        let Some(next) = current.next(event) else {
            return false;
        };
        log::info!("[autoscroll] {current} -> {next} ({event:?})");
        match next {
            PlayState::Playing => self.start(),
            PlayState::Stopped => self.stop(),
        }
        true
    }

    pub fn toggle(&mut self) -> bool {
        self.dispatch(PlayEvent::Toggle)
    }

    pub fn tab_hidden(&mut self) -> bool {
        self.dispatch(PlayEvent::TabHidden)
    }

    /// Pause ahead of a possible unload. Listeners and effects stay wired,
    /// so the control still works if the navigation is cancelled.
    pub fn page_leaving(&mut self) -> bool {
        self.dispatch(PlayEvent::PageLeaving)
    }

    /// Body of one animation frame.
    pub fn on_frame(&mut self) {
        // A frame that was cancelled, or one that outlived a pause, is stale.
        if self.pending.take().is_none() || !self.state.get().is_playing() {
            return;
        }
        let step = self.driver.step(&self.host);
        self.host.scroll_to(step.target());
        match step {
            FrameStep::BottomReached { position } => {
                log::info!("[clock] bottom reached at {position:.1}px");
                self.dispatch(PlayEvent::BottomReached);
            }
            FrameStep::Advance(tick) => {
                self.host.effects_frame(&tick);
                self.schedule();
            }
        }
    }

    /// Cancel any outstanding frame and stop for good.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        if self.state.get().is_playing() {
            self.stop();
        } else {
            self.cancel_pending();
        }
        self.torn_down = true;
    }

    fn start(&mut self) {
        self.state.set(PlayState::Playing);
        self.host.render_control(PlayState::Playing);
        if !self.activated {
            self.activated = true;
            self.host.activate_effects();
        }
        let tick = FrameTick::capture(&self.host);
        self.host.effects_started(&tick);
        self.schedule();
    }

    fn stop(&mut self) {
        self.cancel_pending();
        self.state.set(PlayState::Stopped);
        self.host.render_control(PlayState::Stopped);
        self.host.effects_stopped();
    }

    fn schedule(&mut self) {
        if self.pending.is_some() {
            return;
        }
        self.pending = self.host.request_frame();
        if self.pending.is_none() {
            // Playing requires a frame in flight.
            log::warn!("[clock] no animation frame available; stopping");
            self.stop();
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(frame) = self.pending.take() {
            self.host.cancel_frame(frame);
        }
    }
}
