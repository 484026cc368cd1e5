use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent};

use super::{select_all, set_style, Enhancements};
use crate::config::RIPPLE_LIFETIME_MS;

pub const RIPPLE_CLASS: &str = "ripple";

/// Square ripple centred on the click point, in button-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    pub fn new(rect: (f64, f64, f64, f64), client_x: f64, client_y: f64) -> Self {
        let (rect_left, rect_top, width, height) = rect;
        let size = width.max(height);
        Self {
            size,
            left: client_x - rect_left - size / 2.0,
            top: client_y - rect_top - size / 2.0,
        }
    }
}

pub fn wire(document: &Document, page: &mut Enhancements) {
    for button in select_all(document, ".btn") {
        let document = document.clone();
        let clicked = button.clone();
        page.listen(EventListener::new(&button, "click", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                spawn_ripple(&document, &clicked, event);
            }
        }));
    }
}

fn spawn_ripple(document: &Document, button: &Element, event: &MouseEvent) {
    let rect = button.get_bounding_client_rect();
    let geometry = RippleGeometry::new(
        (rect.left(), rect.top(), rect.width(), rect.height()),
        event.client_x() as f64,
        event.client_y() as f64,
    );

    let Ok(ripple) = document.create_element("span") else {
        return;
    };
    let size = format!("{}px", geometry.size);
    set_style(&ripple, "width", &size);
    set_style(&ripple, "height", &size);
    set_style(&ripple, "left", &format!("{}px", geometry.left));
    set_style(&ripple, "top", &format!("{}px", geometry.top));
    let _ = ripple.class_list().add_1(RIPPLE_CLASS);

    if button.append_child(&ripple).is_err() {
        return;
    }
    Timeout::new(RIPPLE_LIFETIME_MS, move || ripple.remove()).forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_is_centred_on_the_click() {
        let geometry = RippleGeometry::new((100.0, 50.0, 120.0, 40.0), 160.0, 70.0);
        assert_eq!(geometry.size, 120.0);
        assert_eq!(geometry.left, 0.0);
        assert_eq!(geometry.top, -40.0);
    }

    #[test]
    fn tall_buttons_use_their_height() {
        let geometry = RippleGeometry::new((0.0, 0.0, 30.0, 90.0), 15.0, 45.0);
        assert_eq!(geometry.size, 90.0);
        assert_eq!(geometry.left, -30.0);
        assert_eq!(geometry.top, 0.0);
    }
}
