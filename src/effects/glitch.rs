//! Random glitch flashes while playing.
//!
//! One trial runs as play starts, then one per tick. The tick chain is
//! cancelled synchronously on stop; a flash already shown always gets its
//! removal.

use super::{body_class, EffectContext};
use crate::constants::{GLITCH_ACTIVE_CLASS, GLITCH_BODY_CLASS};
use crate::dom;
use autoscroll_core::constants::{GLITCH_FLASH_MS, GLITCH_TICK_MS};
use autoscroll_core::effects::glitch::GlitchRoll;
use autoscroll_core::{FrameTick, GatedEffect, PlayStateView};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

struct Chain {
    body: web::HtmlElement,
    roll: GlitchRoll,
    play: PlayStateView,
    rng: RefCell<StdRng>,
    pending: Cell<Option<i32>>,
}

pub struct Glitch {
    chain: Rc<Chain>,
}

impl Glitch {
    pub fn activate(ctx: &EffectContext<'_>) -> anyhow::Result<Self> {
        body_class(ctx, GLITCH_BODY_CLASS)?;
        Ok(Self {
            chain: Rc::new(Chain {
                body: dom::body(ctx.document)?,
                roll: GlitchRoll::new(ctx.config.glitch_frequency),
                play: ctx.play.clone(),
                rng: RefCell::new(StdRng::from_entropy()),
                pending: Cell::new(None),
            }),
        })
    }

    fn cancel(&self) {
        if let Some(id) = self.chain.pending.take() {
            dom::clear_timeout(id);
        }
    }
}

fn tick(chain: Rc<Chain>) {
    chain.pending.set(None);
    if !chain.play.is_playing() {
        return;
    }
    if chain.roll.roll(&mut *chain.rng.borrow_mut()) {
        flash(&chain.body);
    }
    let next = chain.clone();
    let id = dom::set_timeout(GLITCH_TICK_MS, move || tick(next));
    chain.pending.set(id);
}

fn flash(body: &web::HtmlElement) {
    _ = body.class_list().add_1(GLITCH_ACTIVE_CLASS);
    let body = body.clone();
    _ = dom::set_timeout(GLITCH_FLASH_MS, move || {
        _ = body.class_list().remove_1(GLITCH_ACTIVE_CLASS);
    });
}

impl GatedEffect for Glitch {
    fn name(&self) -> &'static str {
        "glitch"
    }

    fn on_play(&mut self, _tick: &FrameTick) -> anyhow::Result<()> {
        self.cancel();
        tick(self.chain.clone());
        Ok(())
    }

    fn on_stop(&mut self) -> anyhow::Result<()> {
        self.cancel();
        Ok(())
    }
}

impl Drop for Glitch {
    fn drop(&mut self) {
        self.cancel();
    }
}
