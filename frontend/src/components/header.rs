use shared::{CalendarView, LayoutWidth, Theme};
use yew::prelude::*;

use super::full_width_toggle::FullWidthToggle;
use super::theme_toggle::ThemeToggle;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub year: i32,
    pub loading: bool,
    pub view: CalendarView,
    pub theme: Theme,
    pub width: LayoutWidth,
    pub on_prev_year: Callback<MouseEvent>,
    pub on_next_year: Callback<MouseEvent>,
    pub on_this_year: Callback<MouseEvent>,
    pub on_reload: Callback<MouseEvent>,
    pub on_view_change: Callback<CalendarView>,
    pub on_toggle_theme: Callback<MouseEvent>,
    pub on_toggle_width: Callback<MouseEvent>,
    pub on_reset: Callback<MouseEvent>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class={props.width.container_class()}>
                <h1>
                    {if props.loading {
                        format!("Leave Calendar {} (loading...)", props.year)
                    } else {
                        format!("Leave Calendar {}", props.year)
                    }}
                </h1>
                <div class="header-right">
                    <div class="year-nav">
                        <button class="btn nav-button" title="Previous year" onclick={props.on_prev_year.clone()}>{"‹"}</button>
                        <button class="btn nav-button" title="Current year" onclick={props.on_this_year.clone()}>{"Today"}</button>
                        <button class="btn nav-button" title="Next year" onclick={props.on_next_year.clone()}>{"›"}</button>
                        <button class="btn nav-button" title="Reload holidays and leaves" onclick={props.on_reload.clone()}>{"↻"}</button>
                    </div>
                    <div class="view-switch" role="tablist">
                        {for CalendarView::all().into_iter().map(|view| {
                            let on_view_change = props.on_view_change.clone();
                            html! {
                                <button
                                    class={classes!("btn", "view-button", (view == props.view).then_some("active"))}
                                    role="tab"
                                    aria-selected={(view == props.view).to_string()}
                                    onclick={Callback::from(move |_: MouseEvent| on_view_change.emit(view))}
                                >
                                    {view.label()}
                                </button>
                            }
                        })}
                    </div>
                    <div class="header-menus">
                        <ThemeToggle theme={props.theme} on_toggle={props.on_toggle_theme.clone()} />
                        <FullWidthToggle width={props.width} on_toggle={props.on_toggle_width.clone()} />
                        <button class="btn btn-outline" title="Reset display preferences" onclick={props.on_reset.clone()}>
                            {"Reset"}
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}
