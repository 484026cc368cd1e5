use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use super::reveal::{FADE_IN_SELECTOR, VISIBLE_CLASS};
use super::{select_all, select_within, set_style, Enhancements};
use crate::config::{ACCENT_BORDER, SELECT_FLASH_MS};

pub const FOCUSED_CLASS: &str = "focused";
pub const SEARCH_INPUT_SELECTOR: &str = "[type=\"search\"]";
pub const SEARCHABLE_SELECTOR: &str = "[data-search]";

/// Case-insensitive substring match. An empty term matches everything.
pub fn matches_search(text: &str, term: &str) -> bool {
    text.to_lowercase().contains(&term.to_lowercase())
}

fn field_value(field: &Element) -> String {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

pub fn wire(document: &Document, page: &mut Enhancements) {
    wire_focus_markers(document, page);
    wire_select_flash(document, page);
    wire_search(document, page);
}

fn wire_focus_markers(document: &Document, page: &mut Enhancements) {
    for form in select_all(document, "form") {
        for field in select_within(&form, "input, textarea, select") {
            let Some(parent) = field.parent_element() else {
                continue;
            };

            let focus_parent = parent.clone();
            page.listen(EventListener::new(&field, "focus", move |_| {
                let _ = focus_parent.class_list().add_1(FOCUSED_CLASS);
            }));

            let blurred = field.clone();
            page.listen(EventListener::new(&field, "blur", move |_| {
                if field_value(&blurred).is_empty() {
                    let _ = parent.class_list().remove_1(FOCUSED_CLASS);
                }
            }));
        }
    }
}

fn wire_select_flash(document: &Document, page: &mut Enhancements) {
    for select in select_all(document, ".form-select") {
        let changed = select.clone();
        page.listen(EventListener::new(&select, "change", move |_| {
            if field_value(&changed).is_empty() {
                return;
            }
            set_style(&changed, "border-color", ACCENT_BORDER);
            let flashed = changed.clone();
            Timeout::new(SELECT_FLASH_MS, move || {
                set_style(&flashed, "border-color", "");
            })
            .forget();
        }));
    }
}

fn wire_search(document: &Document, page: &mut Enhancements) {
    for input in select_all(document, SEARCH_INPUT_SELECTOR) {
        let document = document.clone();
        let source = input.clone();
        page.listen(EventListener::new(&input, "input", move |_| {
            let term = field_value(&source);
            apply_search(&document, &term);
        }));
    }
}

/// An element the search box can show or hide.
pub trait SearchCard {
    fn search_text(&self) -> String;
    fn set_display(&self, value: &str);
    fn add_class(&self, class: &str);
}

impl SearchCard for Element {
    fn search_text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn set_display(&self, value: &str) {
        set_style(self, "display", value);
    }

    fn add_class(&self, class: &str) {
        let _ = self.class_list().add_1(class);
    }
}

/// Shows the card when its text contains `term`, hides it otherwise.
/// A shown card is tagged `fade-in` and already revealed, since the
/// viewport observer only tracks what was tagged at mount. Returns whether
/// the card is shown.
pub fn filter_card<C: SearchCard>(card: &C, term: &str) -> bool {
    if matches_search(&card.search_text(), term) {
        card.set_display("");
        card.add_class(FADE_IN_SELECTOR.trim_start_matches('.'));
        card.add_class(VISIBLE_CLASS);
        true
    } else {
        card.set_display("none");
        false
    }
}

/// Shows `[data-search]` elements whose text contains `term`, hides the rest.
pub fn apply_search(document: &Document, term: &str) {
    for element in select_all(document, SEARCHABLE_SELECTOR) {
        filter_card(&element, term);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeCard {
        text: &'static str,
        display: RefCell<Option<String>>,
        classes: RefCell<Vec<String>>,
    }

    impl FakeCard {
        fn new(text: &'static str) -> Self {
            Self {
                text,
                display: RefCell::new(None),
                classes: RefCell::new(Vec::new()),
            }
        }

        fn has_class(&self, class: &str) -> bool {
            self.classes.borrow().iter().any(|c| c == class)
        }
    }

    impl SearchCard for FakeCard {
        fn search_text(&self) -> String {
            self.text.to_string()
        }

        fn set_display(&self, value: &str) {
            *self.display.borrow_mut() = Some(value.to_string());
        }

        fn add_class(&self, class: &str) {
            self.classes.borrow_mut().push(class.to_string());
        }
    }

    #[test]
    fn search_hides_misses_and_reveals_matches() {
        let aries = FakeCard::new("Aries Horoscope");
        let leo = FakeCard::new("Leo Horoscope");

        assert!(!filter_card(&aries, "leo"));
        assert!(filter_card(&leo, "leo"));

        assert_eq!(aries.display.borrow().as_deref(), Some("none"));
        assert!(!aries.has_class(VISIBLE_CLASS));

        assert_eq!(leo.display.borrow().as_deref(), Some(""));
        assert!(leo.has_class("fade-in"));
        assert!(leo.has_class(VISIBLE_CLASS));
    }

    #[test]
    fn clearing_the_term_shows_hidden_cards_again() {
        let aries = FakeCard::new("Aries Horoscope");
        filter_card(&aries, "leo");
        assert!(filter_card(&aries, ""));
        assert_eq!(aries.display.borrow().as_deref(), Some(""));
        assert!(aries.has_class(VISIBLE_CLASS));
    }

    #[test]
    fn filters_by_case_insensitive_substring() {
        let cards = ["Aries Horoscope", "Leo Horoscope"];
        let visible: Vec<_> = cards
            .iter()
            .filter(|text| matches_search(text, "leo"))
            .collect();
        assert_eq!(visible, vec![&"Leo Horoscope"]);
    }

    #[test]
    fn empty_term_shows_everything() {
        assert!(matches_search("Aries Horoscope", ""));
        assert!(matches_search("", ""));
    }

    #[test]
    fn term_case_does_not_matter() {
        assert!(matches_search("Sagittarius weekly", "SAGIT"));
        assert!(!matches_search("Sagittarius weekly", "monthly"));
    }
}
