//! One-shot reveal on first visibility.

use crate::viewport::VisibilitySample;

/// Tracks whether an element has been revealed. Once set it stays set, so
/// later visibility loss never hides the element again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch that already fired, for elements carrying the visible marker.
    pub fn revealed() -> Self {
        Self { revealed: true }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed one observation; true only on the call that first crosses
    /// `threshold`.
    pub fn observe(&mut self, sample: VisibilitySample, threshold: f64) -> bool {
        if self.revealed || !sample.meets(threshold) {
            return false;
        }
        self.revealed = true;
        true
    }
}
