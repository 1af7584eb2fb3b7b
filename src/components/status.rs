use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub loading: bool,
    /// Whether a snapshot is already on screen
    pub has_data: bool,
    pub error: Option<String>,
    pub on_retry: Callback<()>,
}

/// Loading placeholder before the first snapshot, error card with retry after a failure
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    let onclick = {
        let on_retry = props.on_retry.clone();
        Callback::from(move |_| on_retry.emit(()))
    };

    html! {
        <>
            if props.loading && !props.has_data {
                <div class="status loading">
                    <div class="spinner"></div>
                    <p>{"Cargando precios..."}</p>
                </div>
            }
            if let Some(message) = &props.error {
                <div class="card status error">
                    <p>{message}</p>
                    <button class="button" {onclick}>{"Reintentar"}</button>
                </div>
            }
        </>
    }
}
