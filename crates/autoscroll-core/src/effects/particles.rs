//! Ambient particles: population accounting and per-particle geometry.
//!
//! The population cap is enforced when a particle is created, never by
//! removing extras afterwards.

use crate::constants::*;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSpec {
    pub size_px: f32,
    /// Spawn point: random x across the viewport, just below its bottom edge.
    pub origin: Vec2,
    pub drift_px: f32,
    pub delay_sec: f32,
    pub duration_sec: f32,
    pub color: &'static str,
    pub trail: bool,
}

impl ParticleSpec {
    pub fn random(rng: &mut impl Rng, viewport: Vec2, trail: bool) -> Self {
        let size_px = rng.gen::<f32>() * PARTICLE_SIZE_SPAN_PX + PARTICLE_SIZE_MIN_PX;
        let x = rng.gen::<f32>() * viewport.x.max(0.0);
        let delay_sec = rng.gen::<f32>() * PARTICLE_DELAY_MAX_SEC;
        let duration_sec =
            rng.gen::<f32>() * PARTICLE_DURATION_SPAN_SEC + PARTICLE_DURATION_MIN_SEC;
        let drift_px = (rng.gen::<f32>() - 0.5) * PARTICLE_DRIFT_SPAN_PX;
        let color = PARTICLE_PALETTE[rng.gen_range(0..PARTICLE_PALETTE.len())];
        Self {
            size_px,
            origin: Vec2::new(x, viewport.y.max(0.0)),
            drift_px,
            delay_sec,
            duration_sec,
            color,
            trail,
        }
    }

    /// Milliseconds after creation at which the particle is removed.
    pub fn lifetime_ms(&self) -> u32 {
        ((self.delay_sec + self.duration_sec) * 1000.0).ceil() as u32 + PARTICLE_REMOVAL_SLACK_MS
    }

    pub fn box_shadow(&self) -> String {
        format!(
            "0 0 {}px {}, 0 0 {}px rgba(255, 255, 255, 0.8)",
            self.size_px * 2.0,
            self.color,
            self.size_px * 1.5
        )
    }

    pub fn animation(&self) -> String {
        format!(
            "particleFloat {}s {}s ease-in-out forwards",
            self.duration_sec, self.delay_sec
        )
    }
}

/// Live particle count for the whole page.
///
/// Every emitter shares one field and reserves against its own density, so
/// the shared layer never holds more than the largest configured density.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParticleField {
    live: u32,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live(&self) -> u32 {
        self.live
    }

    pub fn has_room(&self, cap: u32) -> bool {
        self.live < cap
    }

    /// Claim a slot for a new particle. False once `cap` are live.
    pub fn try_reserve(&mut self, cap: u32) -> bool {
        if !self.has_room(cap) {
            return false;
        }
        self.live += 1;
        true
    }

    /// A particle was removed.
    pub fn release(&mut self) {
        self.live = self.live.saturating_sub(1);
    }
}
