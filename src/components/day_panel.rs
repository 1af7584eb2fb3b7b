use std::rc::Rc;
use yew::prelude::*;

use super::{
    best_hours_card::BestHoursCard, hourly_breakdown::HourlyBreakdown, price_chart::PriceChart,
    prices_summary::PricesSummary,
};
use crate::models::prices::DailyPrices;
use crate::utils::format::long_date;

#[derive(Properties, PartialEq)]
pub struct DayPanelProps {
    pub prices: Rc<DailyPrices>,
    pub subtitle: String,
    pub best_hours_title: String,
    pub show_breakdown: bool,
    pub dark_mode: bool,
    /// Only set for today
    #[prop_or_default]
    pub current_hour: Option<u32>,
}

/// Everything shown under one day's tab
#[function_component(DayPanel)]
pub fn day_panel(props: &DayPanelProps) -> Html {
    html! {
        <section class="day-panel">
            <div class="day-heading">
                <h2>{long_date(props.prices.date())}</h2>
                <p class="muted">{&props.subtitle}</p>
            </div>

            if props.show_breakdown {
                <HourlyBreakdown prices={props.prices.clone()} current_hour={props.current_hour} />
            } else {
                <PriceChart
                    prices={props.prices.clone()}
                    dark_mode={props.dark_mode}
                    current_hour={props.current_hour}
                />
            }

            <div class="card-grid">
                <BestHoursCard prices={props.prices.clone()} title={props.best_hours_title.clone()} />
                <PricesSummary prices={props.prices.clone()} />
            </div>
        </section>
    }
}
