use shared::LayoutWidth;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FullWidthToggleProps {
    pub width: LayoutWidth,
    pub on_toggle: Callback<MouseEvent>,
}

#[function_component(FullWidthToggle)]
pub fn full_width_toggle(props: &FullWidthToggleProps) -> Html {
    html! {
        <button
            class={classes!("btn", "btn-outline", "full-width-toggle", props.width.is_full().then_some("active"))}
            title="Expand the calendar to the full window width"
            aria-pressed={props.width.is_full().to_string()}
            onclick={props.on_toggle.clone()}
        >
            {props.width.toggle_label()}
        </button>
    }
}
