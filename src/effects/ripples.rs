use super::EffectContext;
use crate::constants::RIPPLE_CLASS;
use crate::dom;
use autoscroll_core::constants::RIPPLE_LIFETIME_MS;
use autoscroll_core::effects::ripple::ripple_due;
use autoscroll_core::{FrameTick, GatedEffect};
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys as web;

pub struct Ripples {
    document: web::Document,
    rng: StdRng,
}

impl Ripples {
    pub fn activate(ctx: &EffectContext<'_>) -> anyhow::Result<Self> {
        Ok(Self {
            document: ctx.document.clone(),
            rng: StdRng::from_entropy(),
        })
    }
}

impl GatedEffect for Ripples {
    fn name(&self) -> &'static str {
        "ripples"
    }

    fn on_frame(&mut self, tick: &FrameTick) -> anyhow::Result<()> {
        if !ripple_due(&mut self.rng) {
            return Ok(());
        }
        let center = tick.viewport_center();
        let ripple = dom::create_div(&self.document, RIPPLE_CLASS)?;
        dom::set_style(&ripple, "left", &format!("{}px", center.x))?;
        dom::set_style(&ripple, "top", &format!("{}px", center.y))?;
        dom::body(&self.document)?
            .append_child(&ripple)
            .map_err(dom::js_err)?;
        // Lives out its lifetime even if play stops first.
        dom::remove_after(ripple.into(), RIPPLE_LIFETIME_MS);
        Ok(())
    }
}
