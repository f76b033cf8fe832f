//! Per-effect state and math, plus the fan-out that isolates effects from
//! each other's failures.

pub mod glitch;
pub mod gradient;
pub mod intersect;
pub mod light_rays;
pub mod parallax;
pub mod particles;
pub mod progress;
pub mod reveal;
pub mod ripple;
pub mod typing;

use crate::viewport::FrameTick;

/// Run `prepare` on every item and keep the ones it succeeded on. A
/// failure is logged for that item only; the rest are still prepared.
pub fn prepare_each<T, E, I, F>(effect: &str, items: I, mut prepare: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> Result<(), E>,
    E: std::fmt::Display,
{
    items
        .into_iter()
        .filter(|item| match prepare(item) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("[effects] `{effect}` skipped an element: {e}");
                false
            }
        })
        .collect()
}

/// An effect whose behaviour follows the play state.
///
/// Every hook defaults to a no-op, so an effect only implements the ones it
/// reacts to.
pub trait GatedEffect {
    fn name(&self) -> &'static str;

    /// Play started; runs once per Stopped -> Playing transition, before the
    /// first frame.
    fn on_play(&mut self, _tick: &FrameTick) -> anyhow::Result<()> {
        Ok(())
    }

    fn on_frame(&mut self, _tick: &FrameTick) -> anyhow::Result<()> {
        Ok(())
    }

    fn on_stop(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Ordered set of gated effects. A failing hook is logged and skipped; it
/// never stops the hooks after it.
#[derive(Default)]
pub struct GatedEffects {
    effects: Vec<Box<dyn GatedEffect>>,
}

impl GatedEffects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, effect: Box<dyn GatedEffect>) {
        log::debug!("[effects] gated effect `{}` registered", effect.name());
        self.effects.push(effect);
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.effects.iter().map(|e| e.name())
    }

    /// Returns the number of hooks that failed.
    pub fn play(&mut self, tick: &FrameTick) -> usize {
        self.each("play", |e| e.on_play(tick))
    }

    pub fn frame(&mut self, tick: &FrameTick) -> usize {
        self.each("frame", |e| e.on_frame(tick))
    }

    pub fn stop(&mut self) -> usize {
        self.each("stop", |e| e.on_stop())
    }

    fn each(
        &mut self,
        hook: &str,
        mut f: impl FnMut(&mut dyn GatedEffect) -> anyhow::Result<()>,
    ) -> usize {
        let mut failures = 0;
        for effect in self.effects.iter_mut() {
            if let Err(e) = f(effect.as_mut()) {
                failures += 1;
                log::warn!("[effects] `{}` {hook} failed: {e:#}", effect.name());
            }
        }
        failures
    }
}
