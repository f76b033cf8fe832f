use crate::dom::Listener;
use crate::page;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Page-wide hooks: host-raised re-scan requests and page lifecycle.
pub fn wire_page(window: &web::Window, document: &web::Document) -> anyhow::Result<Vec<Listener>> {
    let reinit = Listener::new(document, crate::constants::REINIT_EVENT, |_| {
        page::rescan();
    })?;
    // Navigation can still be cancelled here: pause only.
    let unload = Listener::new(window, "beforeunload", |_| page::suspend_all())?;
    // Going into the back/forward cache keeps bindings for the restore;
    // anything else is final.
    let hide = Listener::new(window, "pagehide", |event| {
        let persisted = event
            .dyn_ref::<web::PageTransitionEvent>()
            .is_some_and(|e| e.persisted());
        if persisted {
            page::suspend_all();
        } else {
            page::teardown_all();
        }
    })?;
    // Coming back: rebind anything a final pagehide tore down.
    let show = Listener::new(window, "pageshow", |_| page::rescan())?;
    Ok(vec![reinit, unload, hide, show])
}
