//! Markup-driven page behaviors. Each submodule looks elements up by class
//! or attribute and hangs listeners/observers on them; everything it creates
//! is owned by an [`Enhancements`] value, and dropping that value detaches it.

pub mod counter;
pub mod forms;
pub mod hover;
pub mod reveal;
pub mod ripple;
pub mod scroll;
pub mod widgets;

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList,
};
use yew::prelude::*;

use self::counter::CounterAnimations;

/// An `IntersectionObserver` together with the callback it calls into.
/// Disconnects on drop.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    pub fn new<F>(init: &IntersectionObserverInit, mut on_entry: F) -> Result<Self, JsValue>
    where
        F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_entry(&entry, &observer);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), init)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Everything wired onto one rendered page.
#[derive(Default)]
pub struct Enhancements {
    listeners: Vec<EventListener>,
    observers: Vec<ViewportObserver>,
    counters: CounterAnimations,
}

impl Enhancements {
    pub fn attach(document: &Document) -> Self {
        let mut page = Self::default();
        reveal::wire(document, &mut page);
        scroll::wire(document, &mut page);
        hover::wire(document, &mut page);
        forms::wire(document, &mut page);
        widgets::wire(document, &mut page);
        ripple::wire(document, &mut page);
        counter::wire(document, &mut page);
        log::debug!(
            "page enhanced: {} listeners, {} observers",
            page.listeners.len(),
            page.observers.len()
        );
        page
    }

    pub fn listen(&mut self, listener: EventListener) {
        self.listeners.push(listener);
    }

    pub fn observe(&mut self, observer: ViewportObserver) {
        self.observers.push(observer);
    }

    pub fn counters(&self) -> &CounterAnimations {
        &self.counters
    }
}

/// Wires the page's markup once it is mounted and unwires it on unmount.
#[hook]
pub fn use_enhancements() {
    use_effect_with_deps(
        move |_| {
            let enhancements = web_sys::window()
                .and_then(|window| window.document())
                .map(|document| Enhancements::attach(&document));
            move || drop(enhancements)
        },
        (),
    );
}

pub fn select_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => collect_elements(&list),
        Err(err) => {
            log::warn!("bad selector {}: {:?}", selector, err);
            Vec::new()
        }
    }
}

pub fn select_within(parent: &Element, selector: &str) -> Vec<Element> {
    parent
        .query_selector_all(selector)
        .map(|list| collect_elements(&list))
        .unwrap_or_default()
}

fn collect_elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Inline style write. An empty value removes the property.
pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}
