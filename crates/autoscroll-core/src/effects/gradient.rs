use crate::constants::GRADIENT_SPLIT;

/// Scroll progress through the whole document, in `[0, 1]`.
pub fn scroll_progress(position: f64, document_height: f64) -> f64 {
    if document_height <= 0.0 {
        return 0.0;
    }
    (position / document_height).clamp(0.0, 1.0)
}

/// The two colours to show at `progress`.
///
/// Below the split the first two colours are used; at or above it the
/// second and third. Without a third colour the second one stands in.
/// Fewer than two colours yields nothing to write.
pub fn gradient_pair<S: AsRef<str>>(colors: &[S], progress: f64) -> Option<(&str, &str)> {
    let [c1, c2, rest @ ..] = colors else {
        return None;
    };
    let (c1, c2) = (c1.as_ref(), c2.as_ref());
    let c3 = rest.first().map(|c| c.as_ref()).unwrap_or(c2);
    if progress < GRADIENT_SPLIT {
        Some((c1, c2))
    } else {
        Some((c2, c3))
    }
}
