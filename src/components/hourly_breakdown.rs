use std::rc::Rc;
use yew::prelude::*;

use crate::models::{analytics::hourly_levels, prices::DailyPrices};
use crate::utils::format::{format_price, hour_label};

#[derive(Properties, PartialEq)]
pub struct HourlyBreakdownProps {
    pub prices: Rc<DailyPrices>,
    #[prop_or_default]
    pub current_hour: Option<u32>,
}

/// One row per hour with its price and level
#[function_component(HourlyBreakdown)]
pub fn hourly_breakdown(props: &HourlyBreakdownProps) -> Html {
    let rows = use_memo(props.prices.clone(), |prices| hourly_levels(prices));

    html! {
        <div class="card hourly-breakdown">
            <h3>{"Desglose de precios por hora"}</h3>
            <div class="breakdown-list">
                {
                    rows.iter().map(|(entry, level)| {
                        let is_current = props.current_hour == Some(entry.hour);
                        html! {
                            <div
                                key={entry.hour}
                                class={classes!("breakdown-row", is_current.then_some("current"))}
                            >
                                <span class={classes!("hour", level.css_class())}>
                                    {hour_label(entry.hour)}
                                </span>
                                <span class="muted">
                                    if is_current {
                                        <strong class="now">{"Ahora "}</strong>
                                    }
                                    {level.label()}
                                </span>
                                <span class={classes!("price", level.css_class())}>
                                    {format_price(entry.price)}
                                </span>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}
