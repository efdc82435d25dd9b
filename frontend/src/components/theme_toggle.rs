use shared::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub on_toggle: Callback<MouseEvent>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    html! {
        <button
            class="btn btn-outline theme-toggle"
            title="Switch between light and dark theme"
            aria-pressed={(props.theme == Theme::Dark).to_string()}
            onclick={props.on_toggle.clone()}
        >
            {props.theme.toggle_label()}
        </button>
    }
}
