use web_sys::{Element, HtmlElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::enhance::scroll::Parallax;
use crate::enhance::set_style;

#[function_component(Hero)]
pub fn hero() -> Html {
    let section = use_node_ref();
    let content = use_node_ref();
    let (_, scroll_y) = use_window_scroll();

    // Parallax: the inner container drifts down and fades while the hero
    // is still on screen. Past the hero the last frame stays put.
    {
        let section = section.clone();
        let content = content.clone();
        use_effect_with_deps(
            move |scroll_y| {
                if let (Some(section), Some(content)) =
                    (section.cast::<HtmlElement>(), content.cast::<Element>())
                {
                    let height = section.offset_height() as f64;
                    if let Some(frame) = Parallax::for_scroll(*scroll_y, height) {
                        set_style(&content, "transform", &frame.transform());
                        set_style(&content, "opacity", &frame.opacity.to_string());
                    }
                }
                || ()
            },
            scroll_y,
        );
    }

    html! {
        <section class="hero-section" ref={section}>
            <div class="container" ref={content}>
                <h1 class="hero-title">{"Discover Your Cosmic Destiny"}</h1>
                <p class="hero-subtitle">
                    {"Personal horoscopes, birth charts and daily guidance written in the stars."}
                </p>
                <div class="hero-actions">
                    <a href="#signs" class="btn btn-primary btn-lg">{"Find Your Sign"}</a>
                    <a href="#readings" class="btn btn-outline-light btn-lg">{"Our Readings"}</a>
                </div>
            </div>
            <style>
                {r#"
                .hero-section {
                    min-height: 90vh;
                    display: flex;
                    align-items: center;
                    text-align: center;
                    background: radial-gradient(circle at top, #2d1b69 0%, #0f0f0f 70%);
                    color: #ffffff;
                    overflow: hidden;
                }
                .hero-title {
                    font-size: 3.5rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    color: rgba(255, 255, 255, 0.75);
                    margin-bottom: 2rem;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                @media (max-width: 768px) {
                    .hero-title {
                        font-size: 2.4rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
