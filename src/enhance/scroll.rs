use gloo_events::{EventListener, EventListenerOptions};
use web_sys::{
    Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
};

use super::{select_all, Enhancements};
use crate::config::{BACK_TO_TOP_AFTER, NAVBAR_SOLID_AFTER, PARALLAX_FACTOR};

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub backdrop_filter: &'static str,
}

impl NavbarStyle {
    pub fn for_scroll(scroll_y: f64) -> Self {
        if scroll_y > NAVBAR_SOLID_AFTER {
            Self {
                background: "rgba(15, 15, 15, 0.95)",
                backdrop_filter: "blur(20px)",
            }
        } else {
            Self {
                background: "rgba(255, 255, 255, 0.1)",
                backdrop_filter: "blur(10px)",
            }
        }
    }

    pub fn css(&self) -> String {
        format!(
            "background: {}; backdrop-filter: {};",
            self.background, self.backdrop_filter
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    pub translate_y: f64,
    pub opacity: f64,
}

impl Parallax {
    /// `None` once the hero has scrolled fully out, leaving the last frame in
    /// place.
    pub fn for_scroll(scroll_y: f64, hero_height: f64) -> Option<Self> {
        if hero_height <= 0.0 || scroll_y >= hero_height {
            return None;
        }
        Some(Self {
            translate_y: scroll_y * PARALLAX_FACTOR,
            opacity: 1.0 - scroll_y / hero_height,
        })
    }

    pub fn transform(&self) -> String {
        format!("translateY({}px)", self.translate_y)
    }
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_AFTER
}

/// In-page anchors worth smooth scrolling: anything but a bare `#`.
pub fn in_page_target(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn wire(document: &Document, page: &mut Enhancements) {
    for anchor in select_all(document, ANCHOR_SELECTOR) {
        let document = document.clone();
        let href_source = anchor.clone();
        let listener = EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(href) = href_source.get_attribute("href") else {
                    return;
                };
                let Some(selector) = in_page_target(&href) else {
                    return;
                };
                if let Ok(Some(target)) = document.query_selector(selector) {
                    event.prevent_default();
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    target.scroll_into_view_with_scroll_into_view_options(&options);
                }
            },
        );
        page.listen(listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_turns_solid_past_threshold() {
        assert_eq!(NavbarStyle::for_scroll(0.0).background, "rgba(255, 255, 255, 0.1)");
        assert_eq!(NavbarStyle::for_scroll(100.0).backdrop_filter, "blur(10px)");
        let solid = NavbarStyle::for_scroll(101.0);
        assert_eq!(solid.background, "rgba(15, 15, 15, 0.95)");
        assert_eq!(solid.backdrop_filter, "blur(20px)");
        assert_eq!(
            solid.css(),
            "background: rgba(15, 15, 15, 0.95); backdrop-filter: blur(20px);"
        );
    }

    #[test]
    fn parallax_tracks_scroll_inside_hero() {
        let frame = Parallax::for_scroll(200.0, 800.0).unwrap();
        assert_eq!(frame.translate_y, 100.0);
        assert_eq!(frame.opacity, 0.75);
        assert_eq!(frame.transform(), "translateY(100px)");

        assert_eq!(Parallax::for_scroll(0.0, 800.0).unwrap().opacity, 1.0);
        assert_eq!(Parallax::for_scroll(800.0, 800.0), None);
        assert_eq!(Parallax::for_scroll(10.0, 0.0), None);
    }

    #[test]
    fn back_to_top_threshold() {
        assert!(!back_to_top_visible(300.0));
        assert!(back_to_top_visible(300.5));
    }

    #[test]
    fn bare_hash_is_not_an_in_page_target() {
        assert_eq!(in_page_target("#"), None);
        assert_eq!(in_page_target("#signs"), Some("#signs"));
        assert_eq!(in_page_target("/horoscopes"), None);
    }
}
