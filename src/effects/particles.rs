//! Ambient particles. They ignore the play state: once activated they keep
//! topping up until the container is torn down.

use super::{singleton, EffectContext};
use crate::constants::*;
use crate::dom;
use crate::page::PageRegistry;
use crate::viewport::DomViewport;
use autoscroll_core::constants::{PARTICLE_STAGGER_MS, PARTICLE_TOP_UP_MS};
use autoscroll_core::effects::particles::ParticleSpec;
use autoscroll_core::{Singleton, ViewportSignals};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

struct Emitter {
    document: web::Document,
    layer: web::HtmlElement,
    viewport: DomViewport,
    page: PageRegistry,
    density: u32,
    rng: RefCell<StdRng>,
    trails: bool,
    alive: Cell<bool>,
}

pub struct ParticleEmitter {
    emitter: Rc<Emitter>,
    _top_up: dom::Interval,
}

impl ParticleEmitter {
    pub fn activate(ctx: &EffectContext<'_>) -> anyhow::Result<Self> {
        let (layer, _) = singleton(ctx, Singleton::ParticleLayer, PARTICLE_LAYER_CLASS)?;
        let density = ctx.config.particle_density;
        let emitter = Rc::new(Emitter {
            document: ctx.document.clone(),
            layer,
            viewport: ctx.viewport.clone(),
            page: ctx.registry.clone(),
            density,
            rng: RefCell::new(StdRng::from_entropy()),
            trails: ctx.config.particle_trails,
            alive: Cell::new(true),
        });

        // Seed staggered rather than all at once.
        for i in 0..density {
            let emitter = emitter.clone();
            _ = dom::set_timeout(i * PARTICLE_STAGGER_MS, move || spawn(&emitter));
        }

        let top_up = {
            let emitter = emitter.clone();
            dom::Interval::new(PARTICLE_TOP_UP_MS, move || {
                if emitter.page.particles.borrow().has_room(emitter.density) {
                    spawn(&emitter);
                }
            })?
        };
        log::debug!("[particles] density={density} trails={}", ctx.config.particle_trails);
        Ok(Self {
            emitter,
            _top_up: top_up,
        })
    }
}

impl Drop for ParticleEmitter {
    fn drop(&mut self) {
        // Particles in flight finish their lifetime; queued seeds do not spawn.
        self.emitter.alive.set(false);
    }
}

fn spawn(emitter: &Rc<Emitter>) {
    if !emitter.alive.get() {
        return;
    }
    // The layer is shared: count every container's particles, not just ours.
    if !emitter.page.particles.borrow_mut().try_reserve(emitter.density) {
        return;
    }
    let viewport = Vec2::new(
        emitter.viewport.viewport_width() as f32,
        emitter.viewport.viewport_height() as f32,
    );
    let spec = ParticleSpec::random(&mut *emitter.rng.borrow_mut(), viewport, emitter.trails);
    match build(emitter, &spec) {
        Ok(particle) => {
            let owner = emitter.clone();
            let removed = dom::set_timeout(spec.lifetime_ms(), move || {
                particle.remove();
                owner.page.particles.borrow_mut().release();
            });
            if removed.is_none() {
                emitter.page.particles.borrow_mut().release();
            }
        }
        Err(e) => {
            emitter.page.particles.borrow_mut().release();
            log::warn!("[particles] spawn failed: {e:#}");
        }
    }
}

fn build(emitter: &Emitter, spec: &ParticleSpec) -> anyhow::Result<web::HtmlElement> {
    let particle = dom::create_div(&emitter.document, PARTICLE_CLASS)?;
    let size = format!("{}px", spec.size_px);
    dom::set_style(&particle, "width", &size)?;
    dom::set_style(&particle, "height", &size)?;
    dom::set_style(&particle, "left", &format!("{}px", spec.origin.x))?;
    dom::set_style(&particle, "top", &format!("{}px", spec.origin.y))?;
    dom::set_style(&particle, "background", spec.color)?;
    dom::set_style(&particle, "box-shadow", &spec.box_shadow())?;
    dom::set_style(&particle, "animation", &spec.animation())?;
    dom::set_style(&particle, PARTICLE_X_OFFSET_VAR, &spec.drift_px.to_string())?;
    if spec.trail {
        dom::add_class(&particle, PARTICLE_TRAIL_CLASS)?;
    }
    emitter
        .layer
        .append_child(&particle)
        .map_err(dom::js_err)?;
    Ok(particle)
}
