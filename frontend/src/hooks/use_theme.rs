use shared::Theme;
use yew::prelude::*;

use crate::services::dom;
use crate::services::logging::Logger;
use crate::services::storage::PreferenceStore;

pub struct UseThemeResult {
    pub theme: Theme,
    pub actions: UseThemeActions,
}

#[derive(Clone, PartialEq)]
pub struct UseThemeActions {
    pub toggle: Callback<MouseEvent>,
    pub set_theme: Callback<Theme>,
}

/// Persisted light/dark preference, mirrored onto the `<html>` element
#[hook]
pub fn use_theme(store: &PreferenceStore) -> UseThemeResult {
    let theme = {
        let store = store.clone();
        use_state(move || store.load_theme())
    };

    // Keep the document attributes in step with the state
    use_effect_with(*theme, |theme| {
        dom::apply_theme(*theme);
        || ()
    });

    let set_theme = {
        let theme = theme.clone();
        let store = store.clone();
        Callback::from(move |next: Theme| {
            // Applied ahead of the re-render; dialogs read the theme from the document
            dom::apply_theme(next);
            store.save_theme(next);
            Logger::info_with_component("theme", &format!("Switched to {} theme", next));
            theme.set(next);
        })
    };

    let toggle = {
        let theme = theme.clone();
        let set_theme = set_theme.clone();
        Callback::from(move |_: MouseEvent| {
            set_theme.emit((*theme).toggled());
        })
    };

    UseThemeResult {
        theme: *theme,
        actions: UseThemeActions { toggle, set_theme },
    }
}
