use yew::prelude::*;

/// Site-wide rules for the classes the page enhancements toggle.
#[function_component(SiteStyles)]
pub fn site_styles() -> Html {
    html! {
        <style>
            {r#"
            :root {
                --violet-blue: #6C5CE7;
                --violet-blue-dark: #4b3bc4;
                --gold: #FFC857;
                --night: #0f0f0f;
            }
            body {
                background: var(--night);
                color: #ffffff;
                font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
            }
            .fade-in {
                opacity: 0;
                transform: translateY(30px);
                transition: opacity 0.8s ease-out, transform 0.8s ease-out;
            }
            .fade-in.visible {
                opacity: 1;
                transform: translateY(0);
            }
            .btn {
                position: relative;
                overflow: hidden;
            }
            .ripple {
                position: absolute;
                border-radius: 50%;
                background: rgba(255, 255, 255, 0.4);
                transform: scale(0);
                animation: ripple-grow 0.6s linear;
                pointer-events: none;
            }
            @keyframes ripple-grow {
                to {
                    transform: scale(4);
                    opacity: 0;
                }
            }
            .glass-card {
                background: rgba(255, 255, 255, 0.05);
                border: 1px solid rgba(255, 255, 255, 0.1);
                border-radius: 20px;
                backdrop-filter: blur(10px);
                padding: 2rem;
                transition: transform 0.3s ease, box-shadow 0.3s ease;
            }
            .zodiac-card {
                background: rgba(108, 92, 231, 0.08);
                border: 1px solid rgba(108, 92, 231, 0.25);
                border-radius: 16px;
                padding: 1.5rem 1rem;
                text-align: center;
                transition: transform 0.3s ease;
            }
            .zodiac-symbol {
                font-size: 2.5rem;
                color: var(--gold);
            }
            .zodiac-dates {
                color: rgba(255, 255, 255, 0.6);
                font-size: 0.9rem;
                margin: 0;
            }
            .focused label {
                color: var(--violet-blue);
            }
            .section-title {
                text-align: center;
                margin: 4rem 0 2rem;
            }
            "#}
        </style>
    }
}
