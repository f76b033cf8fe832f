use super::{singleton, EffectContext};
use crate::constants::PROGRESS_BAR_CLASS;
use crate::dom;
use autoscroll_core::effects::progress::progress_percent;
use autoscroll_core::{FrameTick, GatedEffect, Singleton};
use web_sys as web;

/// Page-wide scroll progress bar. Synced once when play starts, then on
/// every frame.
pub struct ProgressBar {
    bar: web::HtmlElement,
}

impl ProgressBar {
    pub fn activate(ctx: &EffectContext<'_>) -> anyhow::Result<Self> {
        let (bar, _) = singleton(ctx, Singleton::ProgressBar, PROGRESS_BAR_CLASS)?;
        Ok(Self { bar })
    }

    fn sync(&self, tick: &FrameTick) -> anyhow::Result<()> {
        let percent = progress_percent(tick.position, tick.max_position);
        dom::set_style(&self.bar, "width", &format!("{percent}%"))
    }
}

impl GatedEffect for ProgressBar {
    fn name(&self) -> &'static str {
        "progress-bar"
    }

    fn on_play(&mut self, tick: &FrameTick) -> anyhow::Result<()> {
        self.sync(tick)
    }

    fn on_frame(&mut self, tick: &FrameTick) -> anyhow::Result<()> {
        self.sync(tick)
    }
}
