use crate::constants::RIPPLE_PROBABILITY;
use rand::Rng;

/// Per-frame ripple trial.
#[inline]
pub fn ripple_due(rng: &mut impl Rng) -> bool {
    rng.gen_bool(RIPPLE_PROBABILITY)
}
