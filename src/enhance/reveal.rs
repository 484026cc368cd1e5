use wasm_bindgen::JsValue;
use web_sys::{Document, Element, IntersectionObserverInit};

use super::{select_all, Enhancements, ViewportObserver};
use crate::config::{FADE_IN_ROOT_MARGIN, FADE_IN_THRESHOLD};

pub const FADE_IN_SELECTOR: &str = ".fade-in";
pub const VISIBLE_CLASS: &str = "visible";
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const STAGED_SOURCE_ATTR: &str = "data-src";

/// An image whose real source is parked in an attribute until it scrolls
/// into view.
pub trait StagedImage {
    fn staged_source(&self) -> Option<String>;
    fn clear_staged_source(&self);
    fn set_live_source(&self, src: &str);
}

impl StagedImage for Element {
    fn staged_source(&self) -> Option<String> {
        self.get_attribute(STAGED_SOURCE_ATTR)
    }

    fn clear_staged_source(&self) {
        let _ = self.remove_attribute(STAGED_SOURCE_ATTR);
    }

    fn set_live_source(&self, src: &str) {
        let _ = self.set_attribute("src", src);
    }
}

/// Moves the staged source into `src`. Returns whether the image was
/// loaded, i.e. whether it can stop being observed.
pub fn load_staged<I: StagedImage>(image: &I) -> bool {
    match image.staged_source().filter(|src| !src.is_empty()) {
        Some(src) => {
            image.set_live_source(&src);
            image.clear_staged_source();
            true
        }
        None => false,
    }
}

pub fn wire(document: &Document, page: &mut Enhancements) {
    wire_fade_ins(document, page);
    wire_lazy_images(document, page);
}

fn wire_fade_ins(document: &Document, page: &mut Enhancements) {
    let elements = select_all(document, FADE_IN_SELECTOR);
    if elements.is_empty() {
        return;
    }

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(FADE_IN_THRESHOLD));
    init.set_root_margin(FADE_IN_ROOT_MARGIN);

    // Reveal is one-way: leaving the viewport never removes the class.
    let observer = ViewportObserver::new(&init, |entry, _| {
        if entry.is_intersecting() {
            let _ = entry.target().class_list().add_1(VISIBLE_CLASS);
        }
    });

    match observer {
        Ok(observer) => {
            for element in &elements {
                observer.observe(element);
            }
            page.observe(observer);
        }
        Err(err) => {
            // No IntersectionObserver: show everything up front.
            log::warn!("fade-in observer unavailable: {:?}", err);
            for element in &elements {
                let _ = element.class_list().add_1(VISIBLE_CLASS);
            }
        }
    }
}

fn wire_lazy_images(document: &Document, page: &mut Enhancements) {
    let images = select_all(document, LAZY_IMAGE_SELECTOR);
    if images.is_empty() {
        return;
    }

    let observer = ViewportObserver::new(&IntersectionObserverInit::new(), |entry, observer| {
        if !entry.is_intersecting() {
            return;
        }
        let image = entry.target();
        if load_staged(&image) {
            observer.unobserve(&image);
        }
    });

    match observer {
        Ok(observer) => {
            for image in &images {
                observer.observe(image);
            }
            page.observe(observer);
        }
        Err(err) => log::warn!("lazy image observer unavailable: {:?}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeImage {
        staged: RefCell<Option<String>>,
        src: RefCell<Option<String>>,
    }

    impl StagedImage for FakeImage {
        fn staged_source(&self) -> Option<String> {
            self.staged.borrow().clone()
        }

        fn clear_staged_source(&self) {
            self.staged.borrow_mut().take();
        }

        fn set_live_source(&self, src: &str) {
            *self.src.borrow_mut() = Some(src.to_string());
        }
    }

    #[test]
    fn staged_source_becomes_live_once() {
        let image = FakeImage::default();
        *image.staged.borrow_mut() = Some("/img/leo.webp".to_string());

        assert!(load_staged(&image));
        assert_eq!(image.src.borrow().as_deref(), Some("/img/leo.webp"));
        assert!(image.staged.borrow().is_none());

        // A second intersection finds nothing staged and changes nothing.
        assert!(!load_staged(&image));
        assert_eq!(image.src.borrow().as_deref(), Some("/img/leo.webp"));
    }

    #[test]
    fn image_without_staged_source_is_left_alone() {
        let image = FakeImage::default();
        assert!(!load_staged(&image));
        assert!(image.src.borrow().is_none());
    }
}
