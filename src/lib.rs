#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub mod action;
pub mod animation;
pub mod config;
pub mod constants;
pub mod coordinator;
pub mod demo;
mod dom;
pub mod error;
mod events;
#[cfg(test)]
pub mod headless;
pub mod session;
pub mod status;
pub mod surface;
mod timers;

use action::BUTTON_BINDINGS;
use config::UiConfig;
use coordinator::Coordinator;
use dom::DomPage;
use timers::DomScheduler;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::LOG_LEVEL).ok();
    log::info!("ui-coordinator starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    dom::dom_ready(&document).await?;

    let coordinator = Rc::new(RefCell::new(Coordinator::new(
        DomPage::new(document.clone()),
        DomScheduler::new(window),
        UiConfig::default(),
    )));

    let wired = events::wire_buttons(&document, &coordinator);
    log::info!("[init] wired {}/{} buttons", wired, BUTTON_BINDINGS.len());
    events::wire_global_keydown(&document, coordinator.clone());

    coordinator.borrow_mut().on_page_load();
    Ok(())
}
