use yew::prelude::*;

use pvpc_dashboard::components::{
    DayPanel, DayTabs, NowCard, PriceIndicator, Status, ThemeToggle, TomorrowPending,
};
use pvpc_dashboard::hooks::{use_prices::use_prices, use_theme::use_theme};
use pvpc_dashboard::models::prices::Day;

#[function_component(App)]
fn app() -> Html {
    let prices = use_prices();
    let theme = use_theme();
    let active_day = use_state(Day::default);
    let show_breakdown = use_state(|| false);

    let dark_mode = theme.effective_theme.is_dark();
    let tomorrow = prices.tomorrow.data().cloned();

    let on_select = {
        let active_day = active_day.clone();
        Callback::from(move |day: Day| active_day.set(day))
    };

    let on_toggle_breakdown = {
        let show_breakdown = show_breakdown.clone();
        Callback::from(move |()| show_breakdown.set(!*show_breakdown))
    };

    html! {
        <div class="app-container">
            <header class="app-header">
                <div>
                    <h1>{"⚡ Precio de la Luz"}</h1>
                    <p class="muted">{"Precios del mercado eléctrico en España"}</p>
                </div>
                <ThemeToggle effective_theme={theme.effective_theme} on_toggle={theme.toggle.clone()} />
            </header>

            <main class="app-main">
                <Status
                    loading={prices.loading}
                    has_data={prices.today.is_some()}
                    error={prices.error.clone()}
                    on_retry={prices.refresh.clone()}
                />

                if let Some(today) = prices.today.clone() {
                    <div class="overview-grid">
                        <PriceIndicator prices={today.clone()} current_hour={prices.current_hour} />
                        <NowCard current_hour={prices.current_hour} />
                    </div>

                    <DayTabs
                        active={*active_day}
                        tomorrow_available={tomorrow.is_some()}
                        show_breakdown={*show_breakdown}
                        loading={prices.loading}
                        {on_select}
                        {on_toggle_breakdown}
                        on_refresh={prices.refresh.clone()}
                    />

                    if *active_day == Day::Today {
                        <DayPanel
                            prices={today}
                            subtitle={format!("Datos actualizados a las {}", chrono::Local::now().format("%H:%M"))}
                            best_hours_title="Mejores horas para consumir hoy"
                            show_breakdown={*show_breakdown}
                            {dark_mode}
                            current_hour={Some(prices.current_hour)}
                        />
                    } else if let Some(tomorrow) = tomorrow {
                        <DayPanel
                            prices={tomorrow}
                            subtitle="Previsión para mañana"
                            best_hours_title="Mejores horas para consumir mañana"
                            show_breakdown={*show_breakdown}
                            {dark_mode}
                        />
                    } else {
                        <TomorrowPending />
                    }

                    <footer class="card info">
                        <h3>{"Información sobre precios de la luz"}</h3>
                        <p class="muted">
                            {"Los precios mostrados corresponden al precio voluntario para el pequeño \
                              consumidor (PVPC). Se actualizan diariamente y varían cada hora según la \
                              demanda y producción de energía."}
                        </p>
                        <p class="muted">
                            <strong>{"Consejo: "}</strong>
                            {"programa los electrodomésticos de mayor consumo (lavadora, secadora, \
                              lavavajillas) durante las horas más baratas."}
                        </p>
                    </footer>
                }
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
