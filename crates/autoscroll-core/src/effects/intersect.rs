//! Blur and scale magnitudes driven by intersection ratio.
//!
//! Both interpolate linearly between their configured maximum (element out
//! of view) and zero effect (element fully in view).

use crate::viewport::VisibilitySample;

/// Blur radius in px for one observation.
pub fn blur_radius(max_px: f64, sample: VisibilitySample) -> f64 {
    let max_px = max_px.max(0.0);
    if sample.intersecting {
        max_px * (1.0 - sample.ratio)
    } else {
        max_px
    }
}

/// Scale factor for one observation, within `[1 - intensity, 1]`.
pub fn scale_factor(intensity: f64, sample: VisibilitySample) -> f64 {
    let intensity = intensity.clamp(0.0, 1.0);
    let floor = 1.0 - intensity;
    if sample.intersecting {
        (floor + intensity * sample.ratio).clamp(floor, 1.0)
    } else {
        floor
    }
}
