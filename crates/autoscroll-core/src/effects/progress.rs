/// Progress bar width as a whole percentage of the scrollable range.
/// A page with nothing to scroll reports 0.
pub fn progress_percent(position: f64, max_position: f64) -> u32 {
    if max_position <= 0.0 {
        return 0;
    }
    ((position / max_position).clamp(0.0, 1.0) * 100.0).round() as u32
}
