use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

pub fn body(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    document.body().ok_or_else(|| anyhow!("document has no body"))
}

pub fn root_element(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .ok_or_else(|| anyhow!("document has no root element"))
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> anyhow::Result<Vec<web::Element>> {
    let list = document.query_selector_all(selector).map_err(js_err)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect())
}

pub fn create_div(document: &web::Document, class: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(js_err)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("{:?}", e))?;
    el.set_class_name(class);
    Ok(el)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) -> anyhow::Result<()> {
    el.style().set_property(property, value).map_err(js_err)
}

#[inline]
pub fn add_class(el: &web::Element, class: &str) -> anyhow::Result<()> {
    el.class_list().add_1(class).map_err(js_err)
}

pub fn has_any_class(el: &web::Element, classes: &[&str]) -> bool {
    let list = el.class_list();
    classes.iter().any(|c| list.contains(c))
}

/// Run `f` once after `ms`. Returns the timer id, or `None` when no window
/// is available.
pub fn set_timeout(ms: u32, f: impl FnOnce() + 'static) -> Option<i32> {
    let window = web::window()?;
    let callback = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            ms.min(i32::MAX as u32) as i32,
        )
        .ok()
}

pub fn clear_timeout(id: i32) {
    if let Some(window) = web::window() {
        window.clear_timeout_with_handle(id);
    }
}

/// Remove `el` from the document after `ms`.
pub fn remove_after(el: web::Element, ms: u32) {
    _ = set_timeout(ms, move || el.remove());
}

/// Repeating timer, cleared on drop.
pub struct Interval {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(ms: u32, f: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                ms.min(i32::MAX as u32) as i32,
            )
            .map_err(js_err)?;
        Ok(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(window) = web::window() {
            window.clear_interval_with_handle(self.id);
        }
    }
}

/// Event listener registration, removed on drop.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        f: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(js_err)?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
