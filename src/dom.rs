use crate::surface::{ElementHandle, Page};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> bool {
    let Some(el) = document.get_element_by_id(element_id) else {
        return false;
    };
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
    true
}

/// Live element in the browser document.
#[derive(Clone)]
pub struct DomElement {
    el: web::HtmlElement,
}

impl ElementHandle for DomElement {
    fn add_class(&self, tag: &str) {
        _ = self.el.class_list().add_1(tag);
    }

    fn remove_class(&self, tag: &str) {
        _ = self.el.class_list().remove_1(tag);
    }

    fn has_class(&self, tag: &str) -> bool {
        self.el.class_list().contains(tag)
    }

    fn set_style_property(&self, name: &str, value: &str) {
        if let Err(e) = self.el.style().set_property(name, value) {
            log::warn!("[dom] style {}={} rejected: {:?}", name, value, e);
        }
    }

    fn set_text(&self, text: &str) {
        self.el.set_text_content(Some(text));
    }

    fn reflow(&self) {
        // Reading offsetWidth forces a synchronous layout.
        _ = self.el.offset_width();
    }
}

/// [`Page`] over the browser `Document`.
#[derive(Clone)]
pub struct DomPage {
    document: web::Document,
}

impl DomPage {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

impl Page for DomPage {
    type Element = DomElement;

    fn find_element(&self, id: &str) -> Option<DomElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
            .map(|el| DomElement { el })
    }

    fn elements_by_class(&self, class: &str) -> Vec<DomElement> {
        let list = self.document.get_elements_by_class_name(class);
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|e| e.dyn_into::<web::HtmlElement>().ok())
            .map(|el| DomElement { el })
            .collect()
    }
}

/// Resolve once the document has finished parsing.
pub async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve: js_sys::Function, _reject| {
        let on_ready = Closure::once_into_js(move || {
            _ = resolve.call0(&wasm_bindgen::JsValue::NULL);
        });
        _ = doc.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref());
    });
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("DOMContentLoaded: {:?}", e))?;
    Ok(())
}
