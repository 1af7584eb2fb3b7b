use yew::prelude::*;

use crate::models::day_period::DayPeriod;

#[derive(Properties, PartialEq)]
pub struct NowCardProps {
    pub current_hour: u32,
}

#[function_component(NowCard)]
pub fn now_card(props: &NowCardProps) -> Html {
    let advice = DayPeriod::from_hour(props.current_hour).map_or("", |p| p.advice());

    html! {
        <div class="card now-card">
            <h3>{"Ahora mismo"}</h3>
            <p>{advice}</p>
        </div>
    }
}
