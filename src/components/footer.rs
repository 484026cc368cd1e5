use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::SITE_NAME;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-links">
                <Link<Route> to={Route::Home} classes="footer-link">{"Home"}</Link<Route>>
                <Link<Route> to={Route::Horoscopes} classes="footer-link">{"Horoscopes"}</Link<Route>>
                <Link<Route> to={Route::Account} classes="footer-link">{"Account"}</Link<Route>>
            </div>
            <p class="footer-copy">
                {"© "}<span class="current-year"></span>{" "}{SITE_NAME}{". All rights reserved."}
            </p>
            <style>
                {r#"
                .site-footer {
                    padding: 3rem 1rem;
                    text-align: center;
                    color: rgba(255, 255, 255, 0.6);
                    border-top: 1px solid rgba(108, 92, 231, 0.2);
                }
                .footer-links {
                    display: flex;
                    gap: 1.5rem;
                    justify-content: center;
                    margin-bottom: 1rem;
                }
                .footer-link {
                    color: rgba(255, 255, 255, 0.8);
                    text-decoration: none;
                }
                .footer-link:hover {
                    color: #FFC857;
                }
                "#}
            </style>
        </footer>
    }
}
