// Host-side tests for the per-frame scroll step.

use autoscroll_core::constants::NOMINAL_FRAME_MS;
use autoscroll_core::{max_scroll, FrameStep, ScrollDriver, ViewportSignals};

struct Page {
    position: f64,
    document_height: f64,
    viewport_height: f64,
}

impl ViewportSignals for Page {
    fn scroll_position(&self) -> f64 {
        self.position
    }
    fn viewport_width(&self) -> f64 {
        1280.0
    }
    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }
    fn document_height(&self) -> f64 {
        self.document_height
    }
}

fn page(position: f64) -> Page {
    Page {
        position,
        document_height: 2000.0,
        viewport_height: 1000.0,
    }
}

#[test]
fn delta_uses_nominal_frame() {
    let d = ScrollDriver::new(100.0);
    assert!((d.delta() - 1.667).abs() < 1e-9);
    assert_eq!(ScrollDriver::new(60.0).delta(), 60.0 * NOMINAL_FRAME_MS / 1000.0);
    assert_eq!(ScrollDriver::with_frame(100.0, 10.0).delta(), 1.0);
}

#[test]
fn negative_speed_never_scrolls_backwards() {
    let d = ScrollDriver::new(-50.0);
    assert_eq!(d.speed(), 0.0);
    assert_eq!(d.delta(), 0.0);
}

#[test]
fn advance_moves_by_delta() {
    let d = ScrollDriver::new(100.0);
    match d.step(&page(200.0)) {
        FrameStep::Advance(tick) => {
            assert!((tick.position - 201.667).abs() < 1e-9);
            assert_eq!(tick.max_position, 1000.0);
            assert_eq!(tick.document_height, 2000.0);
            assert_eq!(tick.viewport.y, 1000.0);
        }
        other => panic!("expected advance, got {other:?}"),
    }
}

#[test]
fn near_bottom_snaps_to_max() {
    let d = ScrollDriver::new(100.0);
    let step = d.step(&page(998.0));
    assert_eq!(step, FrameStep::BottomReached { position: 1000.0 });
    assert_eq!(step.target(), 1000.0);
}

#[test]
fn target_never_exceeds_max() {
    let d = ScrollDriver::new(100_000.0);
    assert_eq!(d.step(&page(10.0)).target(), 1000.0);
}

#[test]
fn max_scroll_is_reread_each_step() {
    let d = ScrollDriver::new(100.0);
    let mut p = page(999.5);
    assert!(matches!(d.step(&p), FrameStep::BottomReached { .. }));
    p.document_height = 4000.0;
    assert!(matches!(d.step(&p), FrameStep::Advance(_)));
}

#[test]
fn document_shorter_than_viewport_has_no_range() {
    assert_eq!(max_scroll(500.0, 800.0), 0.0);
    let p = Page {
        position: 0.0,
        document_height: 500.0,
        viewport_height: 800.0,
    };
    assert_eq!(p.max_scroll_position(), 0.0);
    assert_eq!(
        ScrollDriver::new(50.0).step(&p),
        FrameStep::BottomReached { position: 0.0 }
    );
}

#[test]
fn simulated_run_is_monotonic_and_saturates() {
    let d = ScrollDriver::new(100.0);
    let mut p = page(0.0);
    let mut frames = 0;
    loop {
        let step = d.step(&p);
        assert!(step.target() >= p.position);
        p.position = step.target();
        frames += 1;
        if let FrameStep::BottomReached { .. } = step {
            break;
        }
    }
    assert_eq!(p.position, 1000.0);
    assert!((595..=605).contains(&frames), "{frames} frames");
}
