use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::enhance::scroll::{back_to_top_visible, scroll_to_top};

const BASE_STYLE: &str = "position: fixed; bottom: 30px; right: 30px; width: 50px; height: 50px; \
    background: linear-gradient(135deg, var(--violet-blue), var(--violet-blue-dark)); \
    border: none; border-radius: 50%; color: white; font-size: 1.2rem; cursor: pointer; \
    transition: all 0.3s ease; z-index: 1000; box-shadow: 0 4px 15px rgba(108, 92, 231, 0.3);";

/// Floating round button that appears once the page is scrolled down.
#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let (_, scroll_y) = use_window_scroll();

    let visibility = if back_to_top_visible(scroll_y) {
        "opacity: 1; visibility: visible;"
    } else {
        "opacity: 0; visibility: hidden;"
    };

    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <button class="back-to-top" style={format!("{} {}", BASE_STYLE, visibility)} {onclick}
            aria-label="Back to top">
            <i class="bi bi-arrow-up"></i>
        </button>
    }
}
