use super::{body_class, EffectContext};
use crate::constants::*;
use crate::dom;
use autoscroll_core::effects::parallax::parallax_offset;
use autoscroll_core::{FrameTick, GatedEffect};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct ParallaxLayers {
    layers: Vec<web::HtmlElement>,
    intensity: f64,
}

impl ParallaxLayers {
    pub fn activate(ctx: &EffectContext<'_>) -> anyhow::Result<Self> {
        body_class(ctx, PARALLAX_BODY_CLASS)?;
        let mut layers = Vec::new();
        for el in dom::query_all(ctx.document, PARALLAX_SELECTOR)? {
            dom::add_class(&el, PARALLAX_LAYER_CLASS)?;
            if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
                layers.push(el);
            }
        }
        Ok(Self {
            layers,
            intensity: ctx.config.parallax_intensity,
        })
    }
}

impl GatedEffect for ParallaxLayers {
    fn name(&self) -> &'static str {
        "parallax"
    }

    fn on_frame(&mut self, tick: &FrameTick) -> anyhow::Result<()> {
        let transform = format!(
            "translateY({}px)",
            parallax_offset(tick.position, self.intensity)
        );
        for layer in &self.layers {
            dom::set_style(layer, "transform", &transform)?;
        }
        Ok(())
    }
}
