//! Page-level state: the bound containers, the shared singleton registry,
//! and the passes that run once per page.

use crate::constants::*;
use crate::control::ControlSurface;
use crate::dom::{self, Listener};
use crate::effects::{self, typing};
use crate::events;
use crate::frame::{self, DomHost, SharedOrchestrator};
use crate::viewport::VisibilityWatch;
use anyhow::anyhow;
use autoscroll_core::effects::particles::ParticleField;
use autoscroll_core::{Orchestrator, PlayStateCell, ScrollConfig, SingletonRegistry};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// State shared by every container on the page.
#[derive(Default)]
pub struct PageShared {
    pub elements: RefCell<SingletonRegistry<web::HtmlElement>>,
    /// Population of the shared particle layer.
    pub particles: RefCell<ParticleField>,
}

pub type PageRegistry = Rc<PageShared>;

struct ContainerBinding {
    container: web::Element,
    orchestrator: SharedOrchestrator,
    _listeners: Vec<Listener>,
}

impl Drop for ContainerBinding {
    fn drop(&mut self) {
        if let Ok(mut o) = self.orchestrator.try_borrow_mut() {
            o.teardown();
        }
        _ = self.container.remove_attribute(INITIALIZED_ATTR);
    }
}

#[derive(Default)]
struct Page {
    bindings: Vec<ContainerBinding>,
    registry: PageRegistry,
    manual_reveal: Option<VisibilityWatch>,
    listeners: Vec<Listener>,
    booted: bool,
}

thread_local! {
    static PAGE: RefCell<Page> = RefCell::new(Page::default());
}

/// Run the page passes now, or once the DOM has finished parsing.
pub fn start() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    if document.ready_state() == READY_STATE_LOADING {
        let ready = Listener::new(&document, "DOMContentLoaded", |_| boot())?;
        PAGE.with(|page| page.borrow_mut().listeners.push(ready));
        return Ok(());
    }
    boot();
    Ok(())
}

fn boot() {
    let (Some(window), Some(document)) = (web::window(), dom::window_document()) else {
        return;
    };
    PAGE.with(|page| {
        let mut page = page.borrow_mut();
        if page.booted {
            return;
        }
        page.booted = true;

        match events::wire_page(&window, &document) {
            Ok(listeners) => page.listeners.extend(listeners),
            Err(e) => log::warn!("[page] lifecycle hooks unavailable: {e:#}"),
        }
        match effects::observe_manual_animations(&document) {
            Ok(watch) => page.manual_reveal = watch,
            Err(e) => log::warn!("[page] hand-tagged animations skipped: {e:#}"),
        }
        if page.manual_reveal.is_some() {
            log::debug!("[page] observing hand-tagged animations");
        }
        match scan(&mut page, &window, &document) {
            Ok(n) => log::info!("[page] {n} autoscroll container(s) bound"),
            Err(e) => log::error!("[page] scan failed: {e:#}"),
        }
    });
}

/// Bind containers added since the last scan. Already-bound containers are
/// skipped; bindings whose container has left the document are torn down.
pub fn rescan() {
    let (Some(window), Some(document)) = (web::window(), dom::window_document()) else {
        return;
    };
    PAGE.with(|page| {
        let Ok(mut page) = page.try_borrow_mut() else {
            log::warn!("[page] rescan skipped: page busy");
            return;
        };
        match scan(&mut page, &window, &document) {
            Ok(0) => {}
            Ok(n) => log::info!("[page] rescan bound {n} new container(s)"),
            Err(e) => log::warn!("[page] rescan failed: {e:#}"),
        }
    });
}

/// Pause every container ahead of a possible unload. Bindings stay intact,
/// so a cancelled navigation leaves every control working.
pub fn suspend_all() {
    let orchestrators: Vec<SharedOrchestrator> = PAGE.with(|page| {
        page.borrow()
            .bindings
            .iter()
            .map(|b| b.orchestrator.clone())
            .collect()
    });
    for orchestrator in orchestrators {
        if let Ok(mut o) = orchestrator.try_borrow_mut() {
            o.page_leaving();
        }
    }
}

/// Tear down every binding. Dropped outside the page borrow.
pub fn teardown_all() {
    let bindings = PAGE.with(|page| std::mem::take(&mut page.borrow_mut().bindings));
    if !bindings.is_empty() {
        log::info!("[page] tearing down {} container(s)", bindings.len());
    }
    drop(bindings);
}

fn scan(page: &mut Page, window: &web::Window, document: &web::Document) -> anyhow::Result<usize> {
    page.bindings.retain(|b| b.container.is_connected());

    let mut bound = 0;
    let mut capture_headings = false;
    for container in dom::query_all(document, CONTAINER_SELECTOR)? {
        if container.get_attribute(INITIALIZED_ATTR).as_deref() == Some("true") {
            continue;
        }
        match bind(window, document, container, &page.registry) {
            Ok(Some((binding, config))) => {
                capture_headings |= config.wants_heading_capture();
                page.bindings.push(binding);
                bound += 1;
            }
            Ok(None) => {}
            Err(e) => log::warn!("[page] container skipped: {e:#}"),
        }
    }
    if capture_headings {
        match typing::capture_headings(document) {
            Ok(n) => log::debug!("[typing] captured {n} heading(s)"),
            Err(e) => log::warn!("[typing] heading capture failed: {e:#}"),
        }
    }
    Ok(bound)
}

fn bind(
    window: &web::Window,
    document: &web::Document,
    container: web::Element,
    registry: &PageRegistry,
) -> anyhow::Result<Option<(ContainerBinding, ScrollConfig)>> {
    let Some(control) = ControlSurface::find(&container) else {
        log::warn!("[page] container has no control element; skipped");
        return Ok(None);
    };
    let config = ScrollConfig::from_fields(|field| {
        container.get_attribute(&format!("{DATA_PREFIX}{field}"))
    });

    let state = PlayStateCell::new();
    let host = DomHost::new(
        window.clone(),
        document.clone(),
        config.clone(),
        control,
        registry.clone(),
        state.view(),
    );
    let orchestrator = Rc::new(RefCell::new(Orchestrator::with_state(host, &config, state)));
    frame::wire_frame_loop(&orchestrator);
    let listeners = events::wire_container(&orchestrator, document)?;

    container
        .set_attribute(INITIALIZED_ATTR, "true")
        .map_err(dom::js_err)?;
    log::info!(
        "[page] container bound: {}px/s, style={}",
        config.scroll_speed,
        config.animation_style
    );
    Ok(Some((
        ContainerBinding {
            container,
            orchestrator,
            _listeners: listeners,
        },
        config,
    )))
}
