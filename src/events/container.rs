use crate::dom::Listener;
use crate::frame::SharedOrchestrator;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Click on the control toggles play; the document turning hidden pauses.
/// Becoming visible again never resumes.
pub fn wire_container(
    orchestrator: &SharedOrchestrator,
    document: &web::Document,
) -> anyhow::Result<Vec<Listener>> {
    let button: web::EventTarget = orchestrator
        .borrow()
        .host()
        .control()
        .button()
        .clone()
        .unchecked_into();

    let on_click = {
        let orchestrator = orchestrator.clone();
        Listener::new(&button, "click", move |_| {
            if let Ok(mut o) = orchestrator.try_borrow_mut() {
                o.toggle();
            }
        })?
    };

    let on_visibility = {
        let orchestrator = orchestrator.clone();
        let doc = document.clone();
        Listener::new(document, "visibilitychange", move |_| {
            if !doc.hidden() {
                return;
            }
            if let Ok(mut o) = orchestrator.try_borrow_mut() {
                o.tab_hidden();
            }
        })?
    };

    Ok(vec![on_click, on_visibility])
}
