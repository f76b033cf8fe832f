#![cfg(target_arch = "wasm32")]
//! Browser runtime for the autoscroll block.
//!
//! On start the page is scanned for `.autoscroll-block` containers. Each
//! container with a control element gets its own orchestrator from
//! `autoscroll-core`, driven here by `requestAnimationFrame`, timers and
//! intersection observers.

use wasm_bindgen::prelude::*;

mod constants;
mod control;
mod dom;
mod effects;
mod events;
mod frame;
mod page;
mod viewport;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("autoscroll-web starting");

    if let Err(e) = page::start() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Re-scan the document for containers added since the last scan. Safe to
/// call any number of times.
#[wasm_bindgen]
pub fn reinit() {
    page::rescan();
}
