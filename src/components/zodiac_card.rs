use yew::prelude::*;

use crate::zodiac::ZodiacSign;

#[derive(Properties, PartialEq)]
pub struct ZodiacCardProps {
    pub sign: ZodiacSign,
}

#[function_component(ZodiacCard)]
pub fn zodiac_card(props: &ZodiacCardProps) -> Html {
    let sign = props.sign;
    html! {
        <div class="zodiac-card fade-in">
            <div class="zodiac-symbol">{sign.symbol()}</div>
            <h3 class="zodiac-name">{sign.name()}</h3>
            <p class="zodiac-dates">{sign.date_range_label()}</p>
        </div>
    }
}
