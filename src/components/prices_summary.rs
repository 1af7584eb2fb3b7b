use crate::models::{price_level::PriceLevel, prices::DailyPrices};
use crate::utils::format::{format_price, hour_label};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PricesSummaryProps {
    pub prices: Rc<DailyPrices>,
}

#[function_component(PricesSummary)]
pub fn prices_summary(props: &PricesSummaryProps) -> Html {
    let cheapest = props.prices.cheapest_hour();
    let expensive = props.prices.expensive_hour();

    html! {
        <div class="card prices-summary">
            <h3>{"Resumen del día"}</h3>
            <dl>
                <div class="summary-row">
                    <dt>{"Precio medio:"}</dt>
                    <dd>{format_price(props.prices.average_price())}</dd>
                </div>
                <div class="summary-row">
                    <dt>{"Precio más bajo:"}</dt>
                    <dd class={PriceLevel::Cheap.css_class()}>
                        {format_price(cheapest.price)}
                        <span class="muted">{format!(" ({})", hour_label(cheapest.hour))}</span>
                    </dd>
                </div>
                <div class="summary-row">
                    <dt>{"Precio más alto:"}</dt>
                    <dd class={PriceLevel::Expensive.css_class()}>
                        {format_price(expensive.price)}
                        <span class="muted">{format!(" ({})", hour_label(expensive.hour))}</span>
                    </dd>
                </div>
            </dl>
        </div>
    }
}
