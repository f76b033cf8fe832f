//! Browser implementation of the viewport signals, plus a thin
//! `IntersectionObserver` wrapper shared by every visibility-driven effect.

use crate::dom::js_err;
use autoscroll_core::{ViewportSignals, VisibilitySample};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[derive(Clone)]
pub struct DomViewport {
    window: web::Window,
    document: web::Document,
}

impl DomViewport {
    pub fn new(window: web::Window, document: web::Document) -> Self {
        Self { window, document }
    }

    pub fn scroll_to(&self, position: f64) {
        self.window.scroll_to_with_x_and_y(0.0, position);
    }
}

impl ViewportSignals for DomViewport {
    fn scroll_position(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0).max(0.0)
    }

    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    fn document_height(&self) -> f64 {
        let mut heights = Vec::with_capacity(5);
        if let Some(body) = self.document.body() {
            heights.push(body.scroll_height());
            heights.push(body.offset_height());
        }
        if let Some(root) = self.document.document_element() {
            heights.push(root.client_height());
            heights.push(root.scroll_height());
            if let Some(root) = root.dyn_ref::<web::HtmlElement>() {
                heights.push(root.offset_height());
            }
        }
        heights.into_iter().max().unwrap_or(0).max(0) as f64
    }
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Live intersection observation over a set of elements. Disconnects on drop.
pub struct VisibilityWatch {
    observer: web::IntersectionObserver,
    _callback: ObserverCallback,
}

impl VisibilityWatch {
    pub fn supported() -> bool {
        web::window()
            .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
            .unwrap_or(false)
    }

    /// Observe `elements` at `thresholds`. Returns `Ok(None)` when there is
    /// nothing to observe or the browser lacks intersection observation.
    pub fn observe<F>(
        elements: &[web::Element],
        thresholds: &[f64],
        mut on_sample: F,
    ) -> anyhow::Result<Option<Self>>
    where
        F: FnMut(&web::Element, VisibilitySample, &web::IntersectionObserver) + 'static,
    {
        if elements.is_empty() {
            return Ok(None);
        }
        if !Self::supported() {
            log::warn!("[viewport] IntersectionObserver unavailable; visibility effects disabled");
            return Ok(None);
        }

        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let sample =
                        VisibilitySample::new(entry.is_intersecting(), entry.intersection_ratio());
                    on_sample(&entry.target(), sample, &observer);
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let options = web::IntersectionObserverInit::new();
        options.set_root_margin("0px");
        let thresholds: js_sys::Array = thresholds.iter().map(|t| JsValue::from_f64(*t)).collect();
        options.set_threshold(&thresholds);

        let observer = web::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(js_err)?;
        for el in elements {
            observer.observe(el);
        }
        Ok(Some(Self {
            observer,
            _callback: callback,
        }))
    }
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
