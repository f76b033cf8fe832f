use super::{body_class, EffectContext};
use crate::constants::*;
use crate::dom;
use autoscroll_core::effects::gradient::{gradient_pair, scroll_progress};
use autoscroll_core::{FrameTick, GatedEffect, GradientColors};
use web_sys as web;

pub struct GradientShift {
    root: web::HtmlElement,
    colors: GradientColors,
}

impl GradientShift {
    pub fn activate(ctx: &EffectContext<'_>) -> anyhow::Result<Self> {
        body_class(ctx, GRADIENT_BODY_CLASS)?;
        let shift = Self {
            root: dom::root_element(ctx.document)?,
            colors: ctx.config.gradient_colors.clone(),
        };
        shift.write(0.0)?;
        Ok(shift)
    }

    fn write(&self, progress: f64) -> anyhow::Result<()> {
        if let Some((first, second)) = gradient_pair(self.colors.as_slice(), progress) {
            dom::set_style(&self.root, GRADIENT_COLOR_1_VAR, first)?;
            dom::set_style(&self.root, GRADIENT_COLOR_2_VAR, second)?;
        }
        Ok(())
    }
}

impl GatedEffect for GradientShift {
    fn name(&self) -> &'static str {
        "gradient-shift"
    }

    fn on_frame(&mut self, tick: &FrameTick) -> anyhow::Result<()> {
        self.write(scroll_progress(tick.position, tick.document_height))
    }
}
