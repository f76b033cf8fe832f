use super::{body_class, EffectContext};
use crate::constants::ANIMATED_BG_CLASS;

/// Marker class only; the pattern itself is pure CSS.
pub fn activate(ctx: &EffectContext<'_>) -> anyhow::Result<()> {
    body_class(ctx, ANIMATED_BG_CLASS)
}
