//! Heading typing animation.

use super::EffectContext;
use crate::constants::*;
use crate::dom;
use crate::viewport::VisibilityWatch;
use autoscroll_core::constants::TYPING_THRESHOLD;
use autoscroll_core::effects::prepare_each;
use autoscroll_core::effects::typing::{TypingChain, TypingStep};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Record every heading's original text, once. Headings already captured
/// keep their first capture.
pub fn capture_headings(document: &web::Document) -> anyhow::Result<usize> {
    let mut captured = 0;
    for heading in dom::query_all(document, HEADING_SELECTOR)? {
        if capture(&heading)? {
            captured += 1;
        }
    }
    Ok(captured)
}

fn capture(heading: &web::Element) -> anyhow::Result<bool> {
    if heading.has_attribute(ORIGINAL_TEXT_ATTR) {
        return Ok(false);
    }
    let text = heading.text_content().unwrap_or_default();
    heading
        .set_attribute(ORIGINAL_TEXT_ATTR, text.trim())
        .map_err(dom::js_err)?;
    Ok(true)
}

pub fn activate(ctx: &EffectContext<'_>) -> anyhow::Result<Option<VisibilityWatch>> {
    // Another container may already have typed some of these.
    let candidates = dom::query_all(ctx.document, HEADING_SELECTOR)?
        .into_iter()
        .filter(|el| !el.has_attribute(TYPING_STARTED_ATTR))
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok());
    let prepared = prepare_each("typing", candidates, |heading| -> anyhow::Result<()> {
        // Capture first: a heading whose text could not be saved is never blanked.
        capture(heading)?;
        heading.set_text_content(Some(""));
        dom::set_style(heading, "opacity", "0")?;
        dom::set_style(heading, "visibility", "hidden")
    });
    let headings: Vec<web::Element> = prepared.into_iter().map(web::Element::from).collect();

    let speed_ms = ctx.config.typing_speed;
    log::debug!("[typing] {} headings, {speed_ms}ms per character", headings.len());
    VisibilityWatch::observe(&headings, &[TYPING_THRESHOLD], move |el, sample, observer| {
        if !sample.meets(TYPING_THRESHOLD) || el.has_attribute(TYPING_STARTED_ATTR) {
            return;
        }
        _ = el.set_attribute(TYPING_STARTED_ATTR, "true");
        observer.unobserve(el);
        let text = el.get_attribute(ORIGINAL_TEXT_ATTR).unwrap_or_default();
        if let Ok(heading) = el.clone().dyn_into::<web::HtmlElement>() {
            start_chain(heading, text, speed_ms);
        }
    })
}

fn start_chain(heading: web::HtmlElement, text: String, speed_ms: u32) {
    if text.is_empty() {
        return;
    }
    _ = dom::set_style(&heading, "visibility", "visible");
    _ = dom::set_style(&heading, "opacity", "0");
    heading.set_text_content(Some(""));
    type_next(heading, TypingChain::new(text), speed_ms);
}

fn type_next(heading: web::HtmlElement, mut chain: TypingChain, speed_ms: u32) {
    let finished = match chain.advance() {
        Some(TypingStep::Reveal(prefix)) => {
            heading.set_text_content(Some(prefix));
            false
        }
        Some(TypingStep::Finished) => true,
        None => return,
    };
    if finished {
        _ = dom::set_style(&heading, "opacity", "1");
        _ = dom::set_style(&heading, "transition", TYPING_FADE_IN);
    } else {
        _ = dom::set_timeout(speed_ms, move || type_next(heading, chain, speed_ms));
    }
}
