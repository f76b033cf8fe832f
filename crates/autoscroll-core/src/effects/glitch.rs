use rand::Rng;

/// Bernoulli trial run once per glitch tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlitchRoll {
    probability: f64,
}

impl GlitchRoll {
    pub fn new(frequency: f64) -> Self {
        let probability = if frequency.is_finite() {
            frequency.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self { probability }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn roll(&self, rng: &mut impl Rng) -> bool {
        rng.gen_bool(self.probability)
    }
}
