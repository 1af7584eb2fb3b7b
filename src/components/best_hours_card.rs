use std::rc::Rc;
use yew::prelude::*;

use crate::config::Config;
use crate::models::{analytics::best_hours, prices::DailyPrices};
use crate::utils::format::{format_price, hour_range};

#[derive(Properties, PartialEq)]
pub struct BestHoursCardProps {
    pub prices: Rc<DailyPrices>,
    pub title: String,
}

/// Cheapest hours of the day, cheapest first
#[function_component(BestHoursCard)]
pub fn best_hours_card(props: &BestHoursCardProps) -> Html {
    let hours = use_memo(props.prices.clone(), |prices| {
        best_hours(prices, Config::BEST_HOURS_COUNT)
    });

    html! {
        <div class="card best-hours">
            <h3>{&props.title}</h3>
            <ul>
                {
                    hours.iter().map(|entry| {
                        let level = props.prices.level_of(entry.price);
                        html! {
                            <li key={entry.hour}>
                                <span class="hour">{hour_range(entry.hour)}</span>
                                <span class={classes!("price", level.css_class())}>
                                    {format_price(entry.price)}
                                </span>
                            </li>
                        }
                    }).collect::<Html>()
                }
            </ul>
        </div>
    }
}
