use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod utils;
mod zodiac;
mod enhance;
mod components {
    pub mod back_to_top;
    pub mod footer;
    pub mod hero;
    pub mod site_styles;
    pub mod zodiac_card;
}
mod pages {
    pub mod account;
    pub mod home;
    pub mod horoscopes;
}

use components::{back_to_top::BackToTop, site_styles::SiteStyles};
use enhance::scroll::NavbarStyle;
use pages::{account::Account, home::Home, horoscopes::Horoscopes};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/horoscopes")]
    Horoscopes,
    #[at("/account")]
    Account,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Horoscopes => {
            info!("Rendering Horoscopes page");
            html! { <Horoscopes /> }
        },
        Route::Account => {
            info!("Rendering Account page");
            html! { <Account /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found container">
                    <h1>{"Lost among the stars"}</h1>
                    <Link<Route> to={Route::Home} classes="btn btn-primary">
                        {"Back home"}
                    </Link<Route>>
                </div>
            }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let scroll_y = use_state(|| 0.0_f64);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    if let Some(y) = window.as_ref().and_then(|w| w.scroll_y().ok()) {
                        scroll_y.set(y);
                    }
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                );
            }

            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class="navbar top-nav" style={NavbarStyle::for_scroll(*scroll_y).css()}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"✨ "}{config::SITE_NAME}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"Home"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Horoscopes} classes="nav-link">
                            {"Horoscopes"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Account} classes="nav-login-button">
                            {"Account"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 900;
                    padding: 1rem 2rem;
                    transition: background 0.3s ease, backdrop-filter 0.3s ease;
                }
                .nav-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .nav-logo {
                    color: #ffffff;
                    font-size: 1.4rem;
                    font-weight: 700;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    gap: 1.5rem;
                    align-items: center;
                }
                .nav-link, .nav-login-button {
                    color: rgba(255, 255, 255, 0.85);
                    text-decoration: none;
                }
                .nav-login-button {
                    padding: 0.5rem 1.2rem;
                    border-radius: 999px;
                    background: var(--violet-blue);
                    color: #ffffff;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #ffffff;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        padding: 1.5rem;
                        background: rgba(15, 15, 15, 0.95);
                    }
                }
                "#}
            </style>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <SiteStyles />
            <Nav />
            <Switch<Route> render={switch} />
            <BackToTop />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    if let Err(err) = utils::install_global_api() {
        log::error!("failed to install window.{}: {:?}", utils::GLOBAL_NAMESPACE, err);
    }

    gloo_console::log!(
        "%c✨ Cosmic Destiny - Premium Astrology Website ✨",
        "color: #6C5CE7; font-size: 20px; font-weight: bold;"
    );
    gloo_console::log!("%cDiscover your cosmic destiny!", "color: #FFC857; font-size: 14px;");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
