//! Scroll driver: the per-frame step of continuous auto-scroll.
//!
//! The step uses a fixed nominal frame duration instead of measured elapsed
//! time, so uneven frame pacing never shows up as scroll jitter.

use crate::constants::{BOTTOM_EPSILON_PX, NOMINAL_FRAME_MS};
use crate::viewport::{FrameTick, ViewportSignals};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameStep {
    /// Scroll to `tick.position` and fan the tick out.
    Advance(FrameTick),
    /// Snap to the bottom (`position` is the max scroll), then stop.
    BottomReached { position: f64 },
}

impl FrameStep {
    pub fn target(&self) -> f64 {
        match self {
            FrameStep::Advance(tick) => tick.position,
            FrameStep::BottomReached { position } => *position,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollDriver {
    speed_px_per_sec: f64,
    frame_ms: f64,
}

impl ScrollDriver {
    pub fn new(speed_px_per_sec: f64) -> Self {
        Self::with_frame(speed_px_per_sec, NOMINAL_FRAME_MS)
    }

    pub fn with_frame(speed_px_per_sec: f64, frame_ms: f64) -> Self {
        Self {
            speed_px_per_sec: speed_px_per_sec.max(0.0),
            frame_ms: frame_ms.max(0.0),
        }
    }

    pub fn speed(&self) -> f64 {
        self.speed_px_per_sec
    }

    /// Pixels advanced per frame.
    pub fn delta(&self) -> f64 {
        self.speed_px_per_sec * self.frame_ms / 1000.0
    }

    /// Compute this frame's target position. Max scroll is re-read every
    /// call because the page may have grown.
    pub fn step(&self, signals: &(impl ViewportSignals + ?Sized)) -> FrameStep {
        let max = signals.max_scroll_position();
        let current = signals.scroll_position().max(0.0);
        let target = (current + self.delta()).min(max);
        if target >= max - BOTTOM_EPSILON_PX {
            FrameStep::BottomReached { position: max }
        } else {
            FrameStep::Advance(FrameTick::at(target, signals))
        }
    }
}
