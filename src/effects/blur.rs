use super::{body_class, EffectContext};
use crate::constants::*;
use crate::dom;
use crate::viewport::VisibilityWatch;
use autoscroll_core::constants::INTERSECTION_STEPS;
use autoscroll_core::effects::intersect::blur_radius;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn activate(ctx: &EffectContext<'_>) -> anyhow::Result<Option<VisibilityWatch>> {
    body_class(ctx, BLUR_BODY_CLASS)?;
    let elements = dom::query_all(ctx.document, BLUR_SELECTOR)?;
    for el in &elements {
        dom::add_class(el, BLUR_ELEMENT_CLASS)?;
    }
    let max_px = ctx.config.blur_intensity;
    VisibilityWatch::observe(&elements, &INTERSECTION_STEPS, move |el, sample, _| {
        if let Some(el) = el.dyn_ref::<web::HtmlElement>() {
            let radius = blur_radius(max_px, sample);
            _ = dom::set_style(el, "filter", &format!("blur({radius}px)"));
        }
    })
}
