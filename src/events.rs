use crate::action::{UiAction, BUTTON_BINDINGS};
use crate::coordinator::Coordinator;
use crate::dom;
use crate::surface::{Page, Scheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn run<P: Page, S: Scheduler>(coordinator: &Rc<RefCell<Coordinator<P, S>>>, action: UiAction) {
    match coordinator.try_borrow_mut() {
        Ok(mut c) => c.dispatch(action),
        Err(_) => log::warn!("[events] {:?} dropped: coordinator busy", action),
    }
}

/// Attach a click listener for every bound button present on the page.
/// Returns how many were found.
pub fn wire_buttons<P: Page, S: Scheduler + 'static>(
    document: &web::Document,
    coordinator: &Rc<RefCell<Coordinator<P, S>>>,
) -> usize {
    let mut wired = 0;
    for &(button_id, action) in BUTTON_BINDINGS {
        let c = coordinator.clone();
        if dom::add_click_listener(document, button_id, move || run(&c, action)) {
            wired += 1;
        } else {
            log::warn!("[events] #{} not on page", button_id);
        }
    }
    wired
}

pub fn handle_global_keydown<P: Page, S: Scheduler>(
    ev: &web::KeyboardEvent,
    coordinator: &Rc<RefCell<Coordinator<P, S>>>,
) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let target = ev
        .target()
        .and_then(|t| t.dyn_into::<web::HtmlElement>().ok());
    let tag = target.as_ref().map(|el| el.tag_name());
    let editable = target.as_ref().is_some_and(|el| el.is_content_editable());
    if let Some(action) = UiAction::for_key_from(&ev.key(), tag.as_deref(), editable) {
        run(coordinator, action);
        ev.prevent_default();
    }
}

pub fn wire_global_keydown<P: Page, S: Scheduler + 'static>(
    document: &web::Document,
    coordinator: Rc<RefCell<Coordinator<P, S>>>,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &coordinator);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
