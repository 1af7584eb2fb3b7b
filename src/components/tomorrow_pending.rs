use yew::prelude::*;

/// Placeholder for the tomorrow tab while its prices are not available
#[function_component(TomorrowPending)]
pub fn tomorrow_pending() -> Html {
    html! {
        <div class="card tomorrow-pending">
            <p>{"Los precios para mañana aún no están disponibles."}</p>
            <p class="muted">{"Normalmente se publican a partir de las 20:00h."}</p>
        </div>
    }
}
