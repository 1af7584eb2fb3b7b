use std::rc::Rc;
use yew::prelude::*;

use crate::models::{analytics::level_at, prices::DailyPrices};
use crate::utils::format::{format_price, hour_range};

#[derive(Properties, PartialEq)]
pub struct PriceIndicatorProps {
    pub prices: Rc<DailyPrices>,
    pub current_hour: u32,
}

/// Price in effect right now, coloured by its level in today's range
#[function_component(PriceIndicator)]
pub fn price_indicator(props: &PriceIndicatorProps) -> Html {
    let Some((entry, level)) = level_at(&props.prices, props.current_hour) else {
        return html! {};
    };

    html! {
        <div class="card price-indicator">
            <h3>{"Precio actual"}</h3>
            <p class={classes!("indicator-value", level.css_class())}>
                {format_price(entry.price)}
            </p>
            <p class="muted">{hour_range(entry.hour)}</p>
        </div>
    }
}
