use yew::prelude::*;

use crate::components::footer::Footer;
use crate::enhance::use_enhancements;
use crate::utils::format_date;
use crate::zodiac::ZodiacSign;

fn forecast(sign: ZodiacSign) -> &'static str {
    match sign {
        ZodiacSign::Aries => "Bold moves pay off. Start the thing you keep postponing.",
        ZodiacSign::Taurus => "Slow and steady. A practical choice brings lasting comfort.",
        ZodiacSign::Gemini => "Conversations open doors. Say yes to the unexpected invite.",
        ZodiacSign::Cancer => "Home is where your energy returns. Rest before you give.",
        ZodiacSign::Leo => "The spotlight finds you. Share it and it grows brighter.",
        ZodiacSign::Virgo => "Small fixes add up. Tidy one corner and clarity follows.",
        ZodiacSign::Libra => "Balance returns once you name what you actually want.",
        ZodiacSign::Scorpio => "Trust your read on people. A secret works in your favor.",
        ZodiacSign::Sagittarius => "Wanderlust is a signal. Plan the trip, even a short one.",
        ZodiacSign::Capricorn => "Your patience is noticed. Ask for the recognition you earned.",
        ZodiacSign::Aquarius => "An odd idea is the right idea. Build the prototype.",
        ZodiacSign::Pisces => "Dreams are vivid this week. Write them down.",
    }
}

#[function_component(Horoscopes)]
pub fn horoscopes() -> Html {
    use_enhancements();

    let today = format_date(chrono::Local::now().date_naive());

    html! {
        <div class="horoscopes-page container">
            <section class="horoscopes-header fade-in">
                <h1>{"Daily Horoscopes"}</h1>
                <p class="horoscopes-date">{today}</p>
                <input type="search" class="form-control horoscope-search"
                    placeholder="Search your sign..." aria-label="Search horoscopes" />
            </section>

            <div class="horoscope-list">
                { for ZodiacSign::ALL.iter().map(|sign| html! {
                    <article class="glass-card horoscope-card fade-in" data-search="true">
                        <header class="horoscope-card-header">
                            <span class="zodiac-symbol">{sign.symbol()}</span>
                            <h3>{format!("{} Horoscope", sign.name())}</h3>
                            <i class="bi bi-calendar3" data-bs-toggle="tooltip"
                                title={sign.date_range_label()}></i>
                        </header>
                        <p>{forecast(*sign)}</p>
                    </article>
                }) }
            </div>

            <Footer />

            <style>
                {r#"
                .horoscopes-page {
                    padding-top: 100px;
                }
                .horoscopes-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .horoscopes-date {
                    color: rgba(255, 255, 255, 0.6);
                }
                .horoscope-search {
                    max-width: 420px;
                    margin: 1.5rem auto 0;
                }
                .horoscope-list {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                    gap: 1.5rem;
                    margin-bottom: 4rem;
                }
                .horoscope-card-header {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .horoscope-card-header h3 {
                    flex: 1;
                    margin: 0;
                    font-size: 1.3rem;
                }
                "#}
            </style>
        </div>
    }
}
