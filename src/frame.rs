//! Browser side of the orchestrator: `requestAnimationFrame` scheduling,
//! scroll writes, control rendering and the effect fan-out.

use crate::control::ControlSurface;
use crate::effects::{self, AmbientEffects, EffectContext};
use crate::page::PageRegistry;
use crate::viewport::{DomViewport, VisibilityWatch};
use autoscroll_core::{
    Capabilities, FrameTick, GatedEffects, Orchestrator, PlayHost, PlayState, PlayStateView, ScrollConfig,
    ViewportSignals,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedOrchestrator = Rc<RefCell<Orchestrator<DomHost>>>;

pub struct DomHost {
    window: web::Window,
    document: web::Document,
    config: ScrollConfig,
    viewport: DomViewport,
    control: ControlSurface,
    registry: PageRegistry,
    play: PlayStateView,
    frame_callback: Option<Closure<dyn FnMut()>>,
    gated: GatedEffects,
    ambient: AmbientEffects,
    playing_since: Option<Instant>,
}

impl DomHost {
    pub fn new(
        window: web::Window,
        document: web::Document,
        config: ScrollConfig,
        control: ControlSurface,
        registry: PageRegistry,
        play: PlayStateView,
    ) -> Self {
        let viewport = DomViewport::new(window.clone(), document.clone());
        Self {
            window,
            document,
            config,
            viewport,
            control,
            registry,
            play,
            frame_callback: None,
            gated: GatedEffects::new(),
            ambient: AmbientEffects::default(),
            playing_since: None,
        }
    }

    pub fn control(&self) -> &ControlSurface {
        &self.control
    }
}

impl ViewportSignals for DomHost {
    fn scroll_position(&self) -> f64 {
        self.viewport.scroll_position()
    }

    fn viewport_width(&self) -> f64 {
        self.viewport.viewport_width()
    }

    fn viewport_height(&self) -> f64 {
        self.viewport.viewport_height()
    }

    fn document_height(&self) -> f64 {
        self.viewport.document_height()
    }
}

impl PlayHost for DomHost {
    type Frame = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let callback = self.frame_callback.as_ref()?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel_frame(&mut self, frame: i32) {
        _ = self.window.cancel_animation_frame(frame);
    }

    fn scroll_to(&mut self, position: f64) {
        self.viewport.scroll_to(position);
    }

    fn render_control(&mut self, state: PlayState) {
        self.control.render(state);
    }

    fn activate_effects(&mut self) {
        if let Some(body) = self.document.body() {
            _ = body.class_list().add_1(crate::constants::ACTIVE_CLASS);
        }
        let caps = Capabilities {
            intersection_observer: VisibilityWatch::supported(),
        };
        let config = self.config.restricted_to(caps);
        if config != self.config {
            log::warn!("[effects] IntersectionObserver unavailable; visibility effects disabled");
        }
        let ctx = EffectContext {
            document: &self.document,
            config: &config,
            viewport: &self.viewport,
            registry: &self.registry,
            play: &self.play,
        };
        self.ambient = effects::activate(&ctx, &mut self.gated);
        log::debug!(
            "[effects] activated: gated=[{}] ambient={}",
            self.gated.names().collect::<Vec<_>>().join(", "),
            !self.ambient.is_empty()
        );
    }

    fn effects_started(&mut self, tick: &FrameTick) {
        self.playing_since = Some(Instant::now());
        self.gated.play(tick);
    }

    fn effects_frame(&mut self, tick: &FrameTick) {
        self.gated.frame(tick);
    }

    fn effects_stopped(&mut self) {
        self.gated.stop();
        if let Some(since) = self.playing_since.take() {
            log::info!(
                "[autoscroll] stopped after {:.1}s at {:.0}px",
                since.elapsed().as_secs_f32(),
                self.viewport.scroll_position()
            );
        }
    }
}

/// Install the animation-frame callback. It only holds a weak reference, so
/// dropping the orchestrator drops the loop with it.
pub fn wire_frame_loop(orchestrator: &SharedOrchestrator) {
    let weak = Rc::downgrade(orchestrator);
    let callback = Closure::wrap(Box::new(move || {
        let Some(orchestrator) = weak.upgrade() else {
            return;
        };
        match orchestrator.try_borrow_mut() {
            Ok(mut o) => o.on_frame(),
            Err(_) => log::warn!("[clock] frame skipped: orchestrator busy"),
        };
    }) as Box<dyn FnMut()>);
    orchestrator.borrow_mut().host_mut().frame_callback = Some(callback);
}
