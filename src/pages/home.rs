use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::zodiac_card::ZodiacCard;
use crate::enhance::use_enhancements;
use crate::zodiac::{ZodiacSign, UNKNOWN_SIGN};

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const STATS: [(&str, &str); 3] = [
    ("12500", "Readings delivered"),
    ("98", "Percent happy clients"),
    ("12", "Signs covered"),
];

const READINGS: [(&str, &str, &str); 3] = [
    ("Birth Chart", "A full map of the sky at the moment you were born.", "/assets/birth-chart.webp"),
    ("Love Compatibility", "How your sign lines up with the people you care about.", "/assets/compatibility.webp"),
    ("Yearly Forecast", "Twelve months of transits, read for your sign.", "/assets/forecast.webp"),
];

#[function_component(SignFinder)]
fn sign_finder() -> Html {
    let month = use_state(|| None::<u32>);
    let day = use_state(|| None::<u32>);

    let on_month = {
        let month = month.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            month.set(select.value().parse().ok());
        })
    };

    let on_day = {
        let day = day.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            day.set(input.value().parse().ok());
        })
    };

    let onsubmit = Callback::from(|e: SubmitEvent| e.prevent_default());

    let result = match (*month, *day) {
        (Some(month), Some(day)) => Some(
            ZodiacSign::for_date(month, day)
                .map(|sign| format!("{} {}", sign.symbol(), sign.name()))
                .unwrap_or_else(|| UNKNOWN_SIGN.to_string()),
        ),
        _ => None,
    };

    html! {
        <form class="sign-finder glass-card fade-in" {onsubmit}>
            <h3>{"What's my sign?"}</h3>
            <div class="finder-fields">
                <div class="finder-field">
                    <label for="finder-month">{"Birth month"}</label>
                    <select id="finder-month" class="form-select" onchange={on_month}>
                        <option value="" selected={true}>{"Month"}</option>
                        { for MONTHS.iter().enumerate().map(|(i, name)| html! {
                            <option value={(i + 1).to_string()}>{*name}</option>
                        }) }
                    </select>
                </div>
                <div class="finder-field">
                    <label for="finder-day">{"Birth day"}</label>
                    <input id="finder-day" class="form-control" type="number" min="1" max="31"
                        placeholder="Day" oninput={on_day} />
                </div>
            </div>
            {
                if let Some(result) = result {
                    html! { <p class="finder-result">{"Your sign: "}<strong>{result}</strong></p> }
                } else {
                    html! {}
                }
            }
        </form>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_enhancements();

    html! {
        <div class="home-page">
            <Hero />

            <section class="stats-section container">
                { for STATS.iter().map(|(target, label)| html! {
                    <div class="stat fade-in">
                        <span class="stat-value" data-target={*target}>{"0"}</span>
                        <span class="stat-label">{*label}</span>
                    </div>
                }) }
            </section>

            <section id="signs" class="signs-section container">
                <h2 class="section-title fade-in">{"The Twelve Signs"}</h2>
                <div class="zodiac-grid">
                    { for ZodiacSign::ALL.iter().map(|sign| html! {
                        <ZodiacCard sign={*sign} />
                    }) }
                </div>
                <SignFinder />
            </section>

            <section id="readings" class="readings-section container">
                <h2 class="section-title fade-in">{"Readings"}</h2>
                <div class="readings-grid">
                    { for READINGS.iter().map(|(title, blurb, image)| html! {
                        <div class="glass-card fade-in">
                            <img class="reading-image" data-src={*image} alt={*title} />
                            <h3>{*title}</h3>
                            <p>{*blurb}</p>
                            <button class="btn btn-primary">{"Book a reading"}</button>
                        </div>
                    }) }
                </div>
            </section>

            <Footer />

            <style>
                {r#"
                .stats-section {
                    display: flex;
                    justify-content: space-around;
                    padding: 4rem 0;
                    text-align: center;
                }
                .stat-value {
                    display: block;
                    font-size: 2.8rem;
                    font-weight: 700;
                    color: var(--gold);
                }
                .stat-label {
                    color: rgba(255, 255, 255, 0.7);
                }
                .zodiac-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(160px, 1fr));
                    gap: 1.5rem;
                    margin-bottom: 3rem;
                }
                .sign-finder {
                    max-width: 520px;
                    margin: 0 auto;
                }
                .finder-fields {
                    display: flex;
                    gap: 1rem;
                }
                .finder-field {
                    flex: 1;
                }
                .finder-result {
                    margin-top: 1.5rem;
                    font-size: 1.2rem;
                }
                .readings-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 2rem;
                    padding-bottom: 4rem;
                }
                .reading-image {
                    width: 100%;
                    min-height: 160px;
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    background: rgba(108, 92, 231, 0.15);
                    object-fit: cover;
                }
                @media (max-width: 768px) {
                    .stats-section {
                        flex-direction: column;
                        gap: 2rem;
                    }
                    .finder-fields {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </div>
    }
}
