use crate::constants::{
    LIGHT_RAY_COUNT, LIGHT_RAY_DELAY_STEP_SEC, LIGHT_RAY_DURATION_MIN_SEC,
    LIGHT_RAY_DURATION_SPAN_SEC,
};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightRaySpec {
    pub delay_sec: f32,
    pub duration_sec: f32,
}

impl LightRaySpec {
    /// The fixed set of rays, staggered by index with random durations.
    pub fn batch(rng: &mut impl Rng) -> Vec<LightRaySpec> {
        (0..LIGHT_RAY_COUNT)
            .map(|i| LightRaySpec {
                delay_sec: i as f32 * LIGHT_RAY_DELAY_STEP_SEC,
                duration_sec: LIGHT_RAY_DURATION_MIN_SEC
                    + rng.gen::<f32>() * LIGHT_RAY_DURATION_SPAN_SEC,
            })
            .collect()
    }
}
