//! Hooks into the Bootstrap widgets on the page (modals, tabs, tooltips,
//! popovers) plus the footer year stamp. Bootstrap itself is loaded by
//! `index.html`; when it is missing the widget constructors are skipped.

use chrono::Datelike;
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::js_sys::Reflect;
use web_sys::{Document, Element};

use super::{select_all, set_style, Enhancements};
use crate::config::TAB_FADE_DELAY_MS;

pub const REGISTER_HASH: &str = "#register";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Tab;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Tab")]
    fn new(element: &Element) -> Result<Tab, JsValue>;

    #[wasm_bindgen(method)]
    fn show(this: &Tab);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Tooltip;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Tooltip")]
    fn new(element: &Element) -> Result<Tooltip, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Popover;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Popover")]
    fn new(element: &Element) -> Result<Popover, JsValue>;
}

fn bootstrap_loaded() -> bool {
    web_sys::window()
        .map(|window| Reflect::has(&window, &"bootstrap".into()).unwrap_or(false))
        .unwrap_or(false)
}

pub fn wire(document: &Document, page: &mut Enhancements) {
    wire_modals(document, page);
    wire_tabs(document, page);
    stamp_current_year(document);

    if bootstrap_loaded() {
        open_register_tab(document);
        init_tooltips_and_popovers(document);
    } else {
        log::debug!("bootstrap not loaded, skipping widget setup");
    }
}

fn wire_modals(document: &Document, page: &mut Enhancements) {
    for modal in select_all(document, ".modal") {
        let Ok(Some(content)) = modal.query_selector(".modal-content") else {
            continue;
        };

        let showing = content.clone();
        page.listen(EventListener::new(&modal, "show.bs.modal", move |_| {
            set_style(&showing, "transform", "scale(0.8)");
            set_style(&showing, "opacity", "0");
        }));

        page.listen(EventListener::new(&modal, "shown.bs.modal", move |_| {
            set_style(&content, "transition", "all 0.3s cubic-bezier(0.4, 0, 0.2, 1)");
            set_style(&content, "transform", "scale(1)");
            set_style(&content, "opacity", "1");
        }));
    }
}

fn wire_tabs(document: &Document, page: &mut Enhancements) {
    for button in select_all(document, "[data-bs-toggle=\"tab\"]") {
        let document = document.clone();
        let source = button.clone();
        page.listen(EventListener::new(&button, "shown.bs.tab", move |_| {
            let Some(selector) = source.get_attribute("data-bs-target") else {
                return;
            };
            let Ok(Some(pane)) = document.query_selector(&selector) else {
                return;
            };
            set_style(&pane, "opacity", "0");
            set_style(&pane, "transform", "translateY(20px)");
            Timeout::new(TAB_FADE_DELAY_MS, move || {
                set_style(&pane, "transition", "all 0.3s ease-out");
                set_style(&pane, "opacity", "1");
                set_style(&pane, "transform", "translateY(0)");
            })
            .forget();
        }));
    }
}

fn open_register_tab(document: &Document) {
    let hash = web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default();
    if hash != REGISTER_HASH {
        return;
    }
    if let Ok(Some(register_tab)) = document.query_selector("#register-tab") {
        match Tab::new(&register_tab) {
            Ok(tab) => tab.show(),
            Err(err) => log::warn!("could not open register tab: {:?}", err),
        }
    }
}

fn init_tooltips_and_popovers(document: &Document) {
    for trigger in select_all(document, "[data-bs-toggle=\"tooltip\"]") {
        if let Err(err) = Tooltip::new(&trigger) {
            log::warn!("tooltip init failed: {:?}", err);
        }
    }
    for trigger in select_all(document, "[data-bs-toggle=\"popover\"]") {
        if let Err(err) = Popover::new(&trigger) {
            log::warn!("popover init failed: {:?}", err);
        }
    }
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

fn stamp_current_year(document: &Document) {
    let year = current_year().to_string();
    for element in select_all(document, ".current-year") {
        element.set_text_content(Some(&year));
    }
}
