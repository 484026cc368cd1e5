use gloo_events::EventListener;
use web_sys::{Document, Element};

use super::{select_all, set_style, Enhancements};
use crate::config::ACCENT_SHADOW;

/// Inline styles applied on pointer enter and restored on leave.
struct HoverStyle {
    selector: &'static str,
    enter: &'static [(&'static str, &'static str)],
    leave: &'static [(&'static str, &'static str)],
}

const ZODIAC_CARD: HoverStyle = HoverStyle {
    selector: ".zodiac-card",
    enter: &[("transform", "translateY(-10px) scale(1.05)")],
    leave: &[("transform", "translateY(0) scale(1)")],
};

const GLASS_CARD: HoverStyle = HoverStyle {
    selector: ".glass-card",
    enter: &[("transform", "translateY(-5px)"), ("box-shadow", ACCENT_SHADOW)],
    leave: &[("transform", "translateY(0)"), ("box-shadow", "")],
};

pub fn wire(document: &Document, page: &mut Enhancements) {
    for style in [&ZODIAC_CARD, &GLASS_CARD] {
        for card in select_all(document, style.selector) {
            page.listen(apply_on(&card, "mouseenter", style.enter));
            page.listen(apply_on(&card, "mouseleave", style.leave));
        }
    }
}

fn apply_on(
    card: &Element,
    event: &'static str,
    styles: &'static [(&'static str, &'static str)],
) -> EventListener {
    let target = card.clone();
    EventListener::new(card, event, move |_| {
        for (property, value) in styles {
            set_style(&target, property, value);
        }
    })
}
