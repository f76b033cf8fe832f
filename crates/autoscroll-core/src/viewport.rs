//! Effect-agnostic viewport queries.

use crate::constants::RATIO_EPSILON;
use glam::Vec2;

/// Read-only view of the page's scroll geometry.
///
/// Implementations must not cache `document_height`: content revealed by
/// animations can grow the page between frames.
pub trait ViewportSignals {
    fn scroll_position(&self) -> f64;
    fn viewport_width(&self) -> f64;
    fn viewport_height(&self) -> f64;
    fn document_height(&self) -> f64;

    fn max_scroll_position(&self) -> f64 {
        max_scroll(self.document_height(), self.viewport_height())
    }
}

#[inline]
pub fn max_scroll(document_height: f64, viewport_height: f64) -> f64 {
    (document_height - viewport_height).max(0.0)
}

/// One intersection observation for one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilitySample {
    pub intersecting: bool,
    pub ratio: f64,
}

impl VisibilitySample {
    pub fn new(intersecting: bool, ratio: f64) -> Self {
        Self {
            intersecting,
            ratio: if ratio.is_finite() {
                ratio.clamp(0.0, 1.0)
            } else {
                0.0
            },
        }
    }

    pub fn hidden() -> Self {
        Self::new(false, 0.0)
    }

    /// Visible at or above `threshold`.
    pub fn meets(&self, threshold: f64) -> bool {
        self.intersecting && self.ratio + RATIO_EPSILON >= threshold
    }
}

/// Snapshot of the page handed to per-frame subscribers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTick {
    pub position: f64,
    pub max_position: f64,
    pub document_height: f64,
    pub viewport: Vec2,
}

impl FrameTick {
    pub fn capture(signals: &(impl ViewportSignals + ?Sized)) -> Self {
        Self::at(signals.scroll_position(), signals)
    }

    pub fn at(position: f64, signals: &(impl ViewportSignals + ?Sized)) -> Self {
        let document_height = signals.document_height();
        let viewport = Vec2::new(
            signals.viewport_width() as f32,
            signals.viewport_height() as f32,
        );
        Self {
            position,
            max_position: max_scroll(document_height, viewport.y as f64),
            document_height,
            viewport,
        }
    }

    pub fn viewport_center(&self) -> Vec2 {
        self.viewport * 0.5
    }
}
