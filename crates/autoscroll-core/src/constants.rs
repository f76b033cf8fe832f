//! Timing and tuning constants shared by the scroll driver and the effects.
//!
//! Durations are in milliseconds unless the name says otherwise.

// Frame clock
pub const NOMINAL_FRAME_MS: f64 = 16.67; // fixed per-frame step, ~60fps
pub const BOTTOM_EPSILON_PX: f64 = 1.0; // within this of max scroll counts as bottom

// Reveal / intersection
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
pub const TYPING_THRESHOLD: f64 = 0.3;
pub const INTERSECTION_STEPS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];
pub const RATIO_EPSILON: f64 = 1e-3; // observers report ratios slightly under the crossed threshold

// Glitch
pub const GLITCH_TICK_MS: u32 = 1_000;
pub const GLITCH_FLASH_MS: u32 = 300;

// Ripples
pub const RIPPLE_PROBABILITY: f64 = 0.02;
pub const RIPPLE_LIFETIME_MS: u32 = 2_000;

// Particles
pub const PARTICLE_TOP_UP_MS: u32 = 2_000;
pub const PARTICLE_STAGGER_MS: u32 = 100;
pub const PARTICLE_REMOVAL_SLACK_MS: u32 = 100;
pub const PARTICLE_DENSITY_MAX: u32 = 500;
pub const PARTICLE_SIZE_MIN_PX: f32 = 4.0;
pub const PARTICLE_SIZE_SPAN_PX: f32 = 8.0;
pub const PARTICLE_DELAY_MAX_SEC: f32 = 2.0;
pub const PARTICLE_DURATION_MIN_SEC: f32 = 5.0;
pub const PARTICLE_DURATION_SPAN_SEC: f32 = 5.0;
pub const PARTICLE_DRIFT_SPAN_PX: f32 = 40.0; // centred, so +-20px

pub const PARTICLE_PALETTE: [&str; 5] = [
    "rgba(255, 255, 255, 1)",
    "rgba(173, 216, 230, 1)", // light blue
    "rgba(255, 182, 193, 1)", // light pink
    "rgba(255, 255, 224, 1)", // light yellow
    "rgba(221, 160, 221, 1)", // plum
];

// Light rays
pub const LIGHT_RAY_COUNT: usize = 5;
pub const LIGHT_RAY_DELAY_STEP_SEC: f32 = 0.5;
pub const LIGHT_RAY_DURATION_MIN_SEC: f32 = 4.0;
pub const LIGHT_RAY_DURATION_SPAN_SEC: f32 = 3.0;

// Gradient
pub const GRADIENT_SPLIT: f64 = 0.5;
pub const GRADIENT_MAX_COLORS: usize = 3;
