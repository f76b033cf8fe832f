// Host-side tests for the markup contract and the tuning constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use autoscroll_core::constants::*;
use autoscroll_core::AnimationStyle;
use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Frame step should be one 60fps frame
    assert!((NOMINAL_FRAME_MS - 1000.0 / 60.0).abs() < 0.01);
    assert!(BOTTOM_EPSILON_PX > 0.0 && BOTTOM_EPSILON_PX <= 2.0);

    // Thresholds and probabilities live in [0, 1]
    for v in [DEFAULT_REVEAL_THRESHOLD, TYPING_THRESHOLD, RIPPLE_PROBABILITY, GRADIENT_SPLIT] {
        assert!((0.0..=1.0).contains(&v), "{v} out of range");
    }
    assert!(RATIO_EPSILON < 0.01);

    // The glitch flash must end before the next tick
    assert!(GLITCH_FLASH_MS < GLITCH_TICK_MS);

    assert!(PARTICLE_SIZE_MIN_PX > 0.0);
    assert!(PARTICLE_DURATION_MIN_SEC > 0.0);
    assert!(PARTICLE_DENSITY_MAX > 0);
    assert_eq!(GRADIENT_MAX_COLORS, 3);
    assert_eq!(LIGHT_RAY_COUNT, 5);
}

#[test]
fn intersection_steps_are_sorted_and_cover_unit_range() {
    assert_eq!(INTERSECTION_STEPS.first(), Some(&0.0));
    assert_eq!(INTERSECTION_STEPS.last(), Some(&1.0));
    assert!(INTERSECTION_STEPS.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn particle_palette_entries_are_rgba() {
    for color in PARTICLE_PALETTE {
        assert!(color.starts_with("rgba(") && color.ends_with(')'), "{color}");
    }
}

#[test]
fn manual_selector_covers_every_animation_style() {
    let listed: Vec<&str> = MANUAL_ANIMATION_SELECTOR
        .split(',')
        .map(|s| s.trim().trim_start_matches('.'))
        .collect();
    assert_eq!(listed.len(), AnimationStyle::ALL.len());
    for style in AnimationStyle::ALL {
        assert!(listed.contains(&style.class_name()), "{style} missing");
    }
}

#[test]
fn animation_classes_follow_style_names() {
    for style in AnimationStyle::ALL {
        assert_eq!(style.class_name(), format!("autoscroll-animate-{}", style.as_str()));
    }
}

#[test]
fn css_custom_properties_are_dashed() {
    for var in [
        ANIMATION_DURATION_VAR,
        GRADIENT_COLOR_1_VAR,
        GRADIENT_COLOR_2_VAR,
        PARTICLE_X_OFFSET_VAR,
        RAY_DELAY_VAR,
        RAY_DURATION_VAR,
    ] {
        assert!(var.starts_with("--"), "{var}");
    }
}

#[test]
fn data_attributes_carry_prefix() {
    for attr in [INITIALIZED_ATTR, ORIGINAL_TEXT_ATTR, TYPING_STARTED_ATTR] {
        assert!(attr.starts_with(DATA_PREFIX), "{attr}");
    }
}

#[test]
fn selectors_are_non_empty() {
    assert_eq!(CONTENT_SELECTORS.len(), 15);
    for sel in CONTENT_SELECTORS.iter().chain(&[
        CONTAINER_SELECTOR,
        CONTROL_SELECTOR,
        CONTROL_TREE_SELECTOR,
        HEADING_SELECTOR,
        PARALLAX_SELECTOR,
        BLUR_SELECTOR,
        SCALE_SELECTOR,
    ]) {
        assert!(!sel.trim().is_empty());
    }
    assert!(CONTROL_TREE_SELECTOR.contains(CONTROL_SELECTOR));
}

#[test]
fn ready_state_matches_dom_value() {
    // `document.readyState` is a plain string in the DOM.
    assert_eq!(READY_STATE_LOADING, "loading");
    assert!(REINIT_EVENT.starts_with("autoscroll-"));
}
