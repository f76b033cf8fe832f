//! Platform-free core of the autoscroll runtime.
//!
//! Nothing here touches the DOM. The browser binding implements
//! [`PlayHost`] and [`ViewportSignals`] and hands DOM work to the effect
//! types defined under [`effects`].

pub mod clock;
pub mod config;
pub mod constants;
pub mod effects;
pub mod orchestrator;
pub mod registry;
pub mod state;
pub mod viewport;

pub use clock::*;
pub use config::{AnimationStyle, Capabilities, ConfigError, GradientColors, ScrollConfig};
pub use effects::{GatedEffect, GatedEffects};
pub use orchestrator::*;
pub use registry::*;
pub use state::*;
pub use viewport::*;
