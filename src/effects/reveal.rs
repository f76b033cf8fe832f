//! Scroll-triggered reveal: tag content with the configured animation
//! class and mark it visible the first time it crosses the threshold.

use super::EffectContext;
use crate::constants::*;
use crate::dom;
use crate::viewport::VisibilityWatch;
use autoscroll_core::constants::DEFAULT_REVEAL_THRESHOLD;
use autoscroll_core::effects::reveal::RevealLatch;
use autoscroll_core::AnimationStyle;
use web_sys as web;

pub fn activate(ctx: &EffectContext<'_>) -> anyhow::Result<Option<VisibilityWatch>> {
    let cfg = ctx.config;
    let style_classes = AnimationStyle::ALL.map(AnimationStyle::class_name);

    // Hand-tagged elements are collected before tagging, so the two sets
    // stay disjoint.
    let mut elements = dom::query_all(ctx.document, MANUAL_ANIMATION_SELECTOR)?;
    let manual = elements.len();

    let class = cfg.animation_style.class_name();
    for el in dom::query_all(ctx.document, &CONTENT_SELECTORS.join(", "))? {
        let inside_container = el.closest(CONTAINER_SELECTOR).ok().flatten().is_some();
        let is_control = el.matches(CONTROL_TREE_SELECTOR).unwrap_or(false);
        if inside_container || is_control || dom::has_any_class(&el, &style_classes) {
            continue;
        }
        dom::add_class(&el, class)?;
        elements.push(el);
    }
    if elements.is_empty() {
        return Ok(None);
    }

    let root = dom::root_element(ctx.document)?;
    dom::set_style(
        &root,
        ANIMATION_DURATION_VAR,
        &format!("{}s", cfg.animation_duration),
    )?;

    log::debug!(
        "[reveal] observing {} elements ({} hand-tagged), style={}",
        elements.len(),
        manual,
        cfg.animation_style
    );
    watch(&elements, cfg.animation_threshold)
}

/// Page-level pass over elements authors tagged by hand, independent of
/// any container.
pub fn observe_manual_animations(
    document: &web::Document,
) -> anyhow::Result<Option<VisibilityWatch>> {
    if !VisibilityWatch::supported() {
        return Ok(None);
    }
    let elements = dom::query_all(document, MANUAL_ANIMATION_SELECTOR)?;
    if elements.is_empty() {
        return Ok(None);
    }
    let body = dom::body(document)?;
    dom::add_class(&body, ACTIVE_CLASS)?;
    watch(&elements, DEFAULT_REVEAL_THRESHOLD)
}

fn watch(elements: &[web::Element], threshold: f64) -> anyhow::Result<Option<VisibilityWatch>> {
    VisibilityWatch::observe(elements, &[threshold], move |el, sample, observer| {
        // The visible class is the latch: it survives across observers and
        // is never removed.
        let mut latch = if el.class_list().contains(IS_VISIBLE_CLASS) {
            RevealLatch::revealed()
        } else {
            RevealLatch::new()
        };
        if latch.observe(sample, threshold) {
            _ = el.class_list().add_1(IS_VISIBLE_CLASS);
        }
        if latch.is_revealed() {
            observer.unobserve(el);
        }
    })
}
