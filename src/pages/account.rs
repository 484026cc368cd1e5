use chrono::{Datelike, NaiveDate};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::enhance::use_enhancements;
use crate::utils::format_date_str;
use crate::zodiac::ZodiacSign;

/// "Leo, born July 23, 2001" for a `YYYY-MM-DD` birth date.
fn birth_summary(raw: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let sign = ZodiacSign::for_date(date.month(), date.day())?;
    Some(format!("{} {}, born {}", sign.symbol(), sign.name(), format_date_str(raw)?))
}

#[function_component(Account)]
pub fn account() -> Html {
    use_enhancements();

    let birth_date = use_state(String::new);
    let notice = use_state(|| None::<String>);

    let on_birth_date = {
        let birth_date = birth_date.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            birth_date.set(input.value());
        })
    };

    // Nothing leaves the browser; the forms only acknowledge.
    let on_login = {
        let notice = notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log::info!("login form submitted");
            notice.set(Some("Welcome back. Your chart is ready.".to_string()));
        })
    };

    let on_register = {
        let notice = notice.clone();
        let birth_date = birth_date.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log::info!("register form submitted");
            let message = match birth_summary(&birth_date) {
                Some(summary) => format!("Account created for {}.", summary),
                None => "Account created.".to_string(),
            };
            notice.set(Some(message));
        })
    };

    let summary = birth_summary(&birth_date);

    html! {
        <div class="account-page container">
            <div class="account-panel glass-card fade-in">
                <ul class="nav nav-tabs" role="tablist">
                    <li class="nav-item" role="presentation">
                        <button class="nav-link active" id="login-tab" type="button" role="tab"
                            data-bs-toggle="tab" data-bs-target="#login-pane">{"Login"}</button>
                    </li>
                    <li class="nav-item" role="presentation">
                        <button class="nav-link" id="register-tab" type="button" role="tab"
                            data-bs-toggle="tab" data-bs-target="#register-pane">{"Register"}</button>
                    </li>
                </ul>

                <div class="tab-content">
                    <div class="tab-pane fade show active" id="login-pane" role="tabpanel">
                        <form class="account-form" onsubmit={on_login}>
                            <div class="form-group">
                                <label for="login-email">{"Email"}</label>
                                <input id="login-email" class="form-control" type="email" required={true} />
                            </div>
                            <div class="form-group">
                                <label for="login-password">{"Password"}</label>
                                <input id="login-password" class="form-control" type="password" required={true} />
                            </div>
                            <button type="submit" class="btn btn-primary">{"Login"}</button>
                        </form>
                    </div>

                    <div class="tab-pane fade" id="register-pane" role="tabpanel">
                        <form class="account-form" onsubmit={on_register}>
                            <div class="form-group">
                                <label for="register-name">{"Name"}</label>
                                <input id="register-name" class="form-control" type="text" required={true} />
                            </div>
                            <div class="form-group">
                                <label for="register-email">{"Email"}</label>
                                <input id="register-email" class="form-control" type="email" required={true} />
                            </div>
                            <div class="form-group">
                                <label for="register-birth">{"Birth date"}</label>
                                <input id="register-birth" class="form-control" type="date"
                                    oninput={on_birth_date} />
                                {
                                    if let Some(summary) = summary {
                                        html! { <small class="birth-sign">{summary}</small> }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                            <div class="form-group">
                                <label for="register-plan">{"Plan"}</label>
                                <select id="register-plan" class="form-select">
                                    <option value="">{"Choose a plan"}</option>
                                    <option value="stargazer">{"Stargazer"}</option>
                                    <option value="astronomer">{"Astronomer"}</option>
                                </select>
                            </div>
                            <p class="terms-line">
                                {"By registering you accept our "}
                                <a href="#" data-bs-toggle="modal" data-bs-target="#terms-modal">{"terms"}</a>
                                <i class="bi bi-info-circle" data-bs-toggle="popover" data-bs-trigger="hover"
                                    data-bs-content="Readings are for entertainment."></i>
                            </p>
                            <button type="submit" class="btn btn-primary">{"Create account"}</button>
                        </form>
                    </div>
                </div>

                {
                    if let Some(message) = (*notice).clone() {
                        html! { <div class="account-notice">{message}</div> }
                    } else {
                        html! {}
                    }
                }
            </div>

            <div class="modal fade" id="terms-modal" tabindex="-1" aria-hidden="true">
                <div class="modal-dialog modal-dialog-centered">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">{"Terms"}</h5>
                            <button type="button" class="btn-close" data-bs-dismiss="modal" aria-label="Close"></button>
                        </div>
                        <div class="modal-body">
                            <p>{"Horoscopes and readings are provided for entertainment. We keep no personal data beyond this page."}</p>
                        </div>
                    </div>
                </div>
            </div>

            <Footer />

            <style>
                {r#"
                .account-page {
                    padding-top: 110px;
                }
                .account-panel {
                    max-width: 480px;
                    margin: 0 auto 4rem;
                }
                .account-form {
                    padding-top: 1.5rem;
                }
                .form-group {
                    margin-bottom: 1rem;
                }
                .birth-sign {
                    display: block;
                    margin-top: 0.4rem;
                    color: var(--gold);
                }
                .account-notice {
                    margin-top: 1.5rem;
                    padding: 0.8rem 1rem;
                    border-radius: 10px;
                    background: rgba(108, 92, 231, 0.2);
                }
                .modal-content {
                    background: #1a1a2e;
                    color: #ffffff;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarises_birth_dates() {
        assert_eq!(
            birth_summary("2001-07-23").as_deref(),
            Some("♌ Leo, born July 23, 2001")
        );
        assert_eq!(birth_summary("1999-01-05").as_deref(), Some("♑ Capricorn, born January 5, 1999"));
        assert_eq!(birth_summary(""), None);
    }
}
