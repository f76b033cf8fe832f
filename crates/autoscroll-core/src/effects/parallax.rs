/// Vertical offset in px applied to parallax layers at `scroll_position`.
#[inline]
pub fn parallax_offset(scroll_position: f64, intensity: f64) -> f64 {
    scroll_position.max(0.0) * intensity
}
