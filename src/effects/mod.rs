//! DOM side of the visual effects.
//!
//! Effects split into two groups. Gated effects follow the play state and
//! are driven through [`GatedEffects`]. Ambient effects are activated once
//! and then live on their own (observers, timers), whatever the play state.

mod background;
mod blur;
mod glitch;
mod gradient;
mod light_rays;
mod parallax;
mod particles;
mod progress;
mod reveal;
mod ripples;
mod scale;
pub mod typing;

use crate::dom;
use crate::page::PageRegistry;
use crate::viewport::{DomViewport, VisibilityWatch};
use autoscroll_core::{GatedEffects, PlayStateView, ScrollConfig, Singleton};
use wasm_bindgen::JsCast;
use web_sys as web;

pub use reveal::observe_manual_animations;

/// Everything an effect may need while activating.
pub struct EffectContext<'a> {
    pub document: &'a web::Document,
    pub config: &'a ScrollConfig,
    pub viewport: &'a DomViewport,
    pub registry: &'a PageRegistry,
    pub play: &'a PlayStateView,
}

/// Handles that keep ambient effects alive for the container's lifetime.
#[derive(Default)]
pub struct AmbientEffects {
    reveal: Option<VisibilityWatch>,
    typing: Option<VisibilityWatch>,
    blur: Option<VisibilityWatch>,
    scale: Option<VisibilityWatch>,
    particles: Option<particles::ParticleEmitter>,
}

impl AmbientEffects {
    pub fn is_empty(&self) -> bool {
        self.reveal.is_none()
            && self.typing.is_none()
            && self.blur.is_none()
            && self.scale.is_none()
            && self.particles.is_none()
    }
}

/// Activate every enabled effect. Each activation is isolated: one that
/// fails is logged and the rest still run.
pub fn activate(ctx: &EffectContext<'_>, gated: &mut GatedEffects) -> AmbientEffects {
    let cfg = ctx.config;
    let mut ambient = AmbientEffects::default();

    if cfg.content_animations {
        ambient.reveal = absorb("reveal", reveal::activate(ctx)).flatten();
    }
    if cfg.typing_effect {
        ambient.typing = absorb("typing", typing::activate(ctx)).flatten();
    }
    if cfg.blur_transitions {
        ambient.blur = absorb("blur", blur::activate(ctx)).flatten();
    }
    if cfg.scale_effects {
        ambient.scale = absorb("scale", scale::activate(ctx)).flatten();
    }
    if cfg.particles {
        ambient.particles = absorb("particles", particles::ParticleEmitter::activate(ctx));
    }
    if cfg.light_rays {
        absorb("light-rays", light_rays::activate(ctx));
    }
    if cfg.animated_bg {
        absorb("animated-bg", background::activate(ctx));
    }

    // Gated effects, in per-frame order.
    if cfg.parallax {
        if let Some(e) = absorb("parallax", parallax::ParallaxLayers::activate(ctx)) {
            gated.push(Box::new(e));
        }
    }
    if cfg.gradient_shift {
        if let Some(e) = absorb("gradient-shift", gradient::GradientShift::activate(ctx)) {
            gated.push(Box::new(e));
        }
    }
    if cfg.progress_bar {
        if let Some(e) = absorb("progress-bar", progress::ProgressBar::activate(ctx)) {
            gated.push(Box::new(e));
        }
    }
    if cfg.ripples {
        if let Some(e) = absorb("ripples", ripples::Ripples::activate(ctx)) {
            gated.push(Box::new(e));
        }
    }
    if cfg.glitch {
        if let Some(e) = absorb("glitch", glitch::Glitch::activate(ctx)) {
            gated.push(Box::new(e));
        }
    }

    ambient
}

fn absorb<T>(effect: &str, result: anyhow::Result<T>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("[effects] `{effect}` failed to activate: {e:#}");
            None
        }
    }
}

fn body_class(ctx: &EffectContext<'_>, class: &str) -> anyhow::Result<()> {
    let body = dom::body(ctx.document)?;
    dom::add_class(&body, class)
}

/// Fetch a page-wide singleton element, creating it under `<body>` with
/// `class` when neither the registry nor the document has one. The flag is
/// true when this call created the element.
fn singleton(
    ctx: &EffectContext<'_>,
    key: Singleton,
    class: &str,
) -> anyhow::Result<(web::HtmlElement, bool)> {
    let mut fresh = false;
    let mut registry = ctx.registry.elements.borrow_mut();
    let (el, _) = registry.get_or_try_insert_with(key, || {
        let existing = ctx
            .document
            .query_selector(&format!(".{class}"))
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        if let Some(existing) = existing {
            return Ok::<_, anyhow::Error>(existing);
        }
        let el = dom::create_div(ctx.document, class)?;
        dom::body(ctx.document)?
            .append_child(&el)
            .map_err(dom::js_err)?;
        fresh = true;
        Ok(el)
    })?;
    Ok((el.clone(), fresh))
}
