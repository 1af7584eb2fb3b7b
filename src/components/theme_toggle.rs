use yew::prelude::*;

use crate::hooks::use_theme::Theme;

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub effective_theme: Theme,
    pub on_toggle: Callback<()>,
}

/// Theme toggle button component
#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let (icon, label) = if props.effective_theme.is_dark() {
        ("☀️", "Cambiar a modo claro")
    } else {
        ("🌙", "Cambiar a modo oscuro")
    };

    let onclick = {
        let toggle = props.on_toggle.clone();
        Callback::from(move |_| toggle.emit(()))
    };

    html! {
        <button
            class="theme-toggle"
            {onclick}
            aria-label={label}
            title={label}
        >
            {icon}
        </button>
    }
}
