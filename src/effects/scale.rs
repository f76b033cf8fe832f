use super::{body_class, EffectContext};
use crate::constants::*;
use crate::dom;
use crate::viewport::VisibilityWatch;
use autoscroll_core::constants::INTERSECTION_STEPS;
use autoscroll_core::effects::intersect::scale_factor;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn activate(ctx: &EffectContext<'_>) -> anyhow::Result<Option<VisibilityWatch>> {
    body_class(ctx, SCALE_BODY_CLASS)?;
    let elements = dom::query_all(ctx.document, SCALE_SELECTOR)?;
    for el in &elements {
        dom::add_class(el, SCALE_ELEMENT_CLASS)?;
    }
    let intensity = ctx.config.scale_intensity;
    VisibilityWatch::observe(&elements, &INTERSECTION_STEPS, move |el, sample, _| {
        if let Some(el) = el.dyn_ref::<web::HtmlElement>() {
            let factor = scale_factor(intensity, sample);
            _ = dom::set_style(el, "transform", &format!("scale({factor})"));
        }
    })
}
