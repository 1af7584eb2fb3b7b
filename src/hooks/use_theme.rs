use gloo::events::EventListener;
use gloo_storage::Storage;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use yew::prelude::*;

const STORAGE_KEY: &str = "pvpc-theme";
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// User's colour scheme preference
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
    /// Follow the system preference
    #[default]
    Auto,
}

impl Theme {
    /// Resolves `Auto` against the system preference.
    pub const fn resolve(self, system_dark: bool) -> Self {
        match self {
            Self::Auto if system_dark => Self::Dark,
            Self::Auto => Self::Light,
            other => other,
        }
    }

    /// The explicit theme a toggle switches to from this effective theme
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            _ => Self::Dark,
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    const fn attribute(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light | Self::Auto => "light",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub theme: Theme,
    /// Never `Auto`
    pub effective_theme: Theme,
    pub toggle: Callback<()>,
}

#[hook]
pub fn use_theme() -> ThemeHandle {
    let theme = use_state(|| load_theme_preference().unwrap_or_default());
    let system_dark = use_state(system_prefers_dark);

    let effective_theme = theme.resolve(*system_dark);

    use_effect_with(effective_theme, move |theme| {
        apply_theme_to_dom(*theme);
        || ()
    });

    {
        let setter = system_dark.setter();
        use_effect_with((), move |_| {
            let listener = watch_system_preference(setter);
            move || drop(listener)
        });
    }

    use_effect_with(*theme, move |theme| {
        save_theme_preference(*theme);
        || ()
    });

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |()| theme.set(effective_theme.toggled()))
    };

    ThemeHandle {
        theme: *theme,
        effective_theme,
        toggle,
    }
}

fn dark_media_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window().and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
}

fn system_prefers_dark() -> bool {
    dark_media_query().is_some_and(|mq| mq.matches())
}

/// Sets `data-theme` on `<html>`
fn apply_theme_to_dom(theme: Theme) {
    let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    if let Err(e) = html.set_attribute("data-theme", theme.attribute()) {
        gloo::console::warn!(&format!("Failed to apply theme: {e:?}"));
    }
}

fn load_theme_preference() -> Option<Theme> {
    gloo_storage::LocalStorage::get(STORAGE_KEY).ok()
}

fn save_theme_preference(theme: Theme) {
    if let Err(e) = gloo_storage::LocalStorage::set(STORAGE_KEY, theme) {
        gloo::console::warn!(&format!("Failed to save theme: {e:?}"));
    }
}

fn watch_system_preference(setter: UseStateSetter<bool>) -> Option<EventListener> {
    let target = dark_media_query()?.dyn_into::<web_sys::EventTarget>().ok()?;
    Some(EventListener::new(&target, "change", move |_event| {
        setter.set(system_prefers_dark());
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_follows_system() {
        assert_eq!(Theme::Auto.resolve(true), Theme::Dark);
        assert_eq!(Theme::Auto.resolve(false), Theme::Light);
        assert_eq!(Theme::Light.resolve(true), Theme::Light);
    }

    #[test]
    fn test_toggle_flips_effective_theme() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
