use yew::prelude::*;

use crate::models::prices::Day;

#[derive(Properties, PartialEq)]
pub struct DayTabsProps {
    pub active: Day,
    pub tomorrow_available: bool,
    pub show_breakdown: bool,
    pub loading: bool,
    pub on_select: Callback<Day>,
    pub on_toggle_breakdown: Callback<()>,
    pub on_refresh: Callback<()>,
}

/// Today/tomorrow switch plus the chart/breakdown toggle and manual refresh
#[function_component(DayTabs)]
pub fn day_tabs(props: &DayTabsProps) -> Html {
    let tab = |day: Day, label: &'static str, disabled: bool| {
        let on_select = props.on_select.clone();
        let class = classes!("tab", (props.active == day).then_some("active"));
        html! {
            <button {class} {disabled} onclick={Callback::from(move |_| on_select.emit(day))}>
                {label}
            </button>
        }
    };

    let on_toggle = {
        let cb = props.on_toggle_breakdown.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let on_refresh = {
        let cb = props.on_refresh.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let toggle_label = if props.show_breakdown {
        "Ver gráfico"
    } else {
        "Ver desglose por horas"
    };

    html! {
        <div class="tab-bar">
            <div class="tabs" role="tablist">
                {tab(Day::Today, "Hoy", false)}
                {tab(Day::Tomorrow, "Mañana", !props.tomorrow_available)}
            </div>
            <div class="tab-actions">
                <button
                    class={classes!("button", props.show_breakdown.then_some("active"))}
                    onclick={on_toggle}
                >
                    {toggle_label}
                </button>
                <button class="button outline" onclick={on_refresh} disabled={props.loading}>
                    {"Actualizar"}
                </button>
            </div>
        </div>
    }
}
