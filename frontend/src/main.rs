use std::rc::Rc;

use shared::dates::format_date_long;
use shared::{CalendarLookup, CalendarView, DayCell, DialogIcon, LayoutWidth, Theme, YearCalendar};
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod services;

use components::{DialogProvider, Header, Legend, SemesterView, TimelineView};
use config::AppConfig;
use hooks::{use_dialogs, use_full_width, use_theme, use_year_data};
use services::api::ApiClient;
use services::date_utils::today;
use services::logging::Logger;
use services::storage::PreferenceStore;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: AppConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <DialogProvider toast_timer_ms={props.config.toast_timer_ms}>
            <CalendarPage config={props.config.clone()} />
        </DialogProvider>
    }
}

#[function_component(CalendarPage)]
fn calendar_page(props: &AppProps) -> Html {
    let store = PreferenceStore::new(&props.config);
    let api_client = ApiClient::with_base_url(props.config.api_base_url.clone());
    let dialogs = use_dialogs();

    let theme = use_theme(&store);
    let full_width = use_full_width(&store);
    let view = {
        let store = store.clone();
        use_state(move || store.load_view())
    };
    let year_data = use_year_data(&api_client, &dialogs);

    let data = year_data.state.data_or_empty();
    let leave_types = data.effective_leave_types();

    let calendar = use_memo((data, today()), |(data, today)| {
        let lookup = CalendarLookup::new(&data.holidays, &data.leaves, &data.effective_leave_types());
        match YearCalendar::build(data.year, *today, &lookup) {
            Ok(calendar) => Some(Rc::new(calendar)),
            Err(e) => {
                Logger::error_with_component("calendar", &format!("Cannot build {}: {}", data.year, e));
                None
            }
        }
    });

    let on_view_change = {
        let view = view.clone();
        let store = store.clone();
        Callback::from(move |next: CalendarView| {
            store.save_view(next);
            view.set(next);
        })
    };

    let on_day_click = {
        let dialogs = dialogs.clone();
        Callback::from(move |cell: DayCell| {
            dialogs.alert(&format_date_long(cell.date), &cell.details(), DialogIcon::Info);
        })
    };

    let on_reset = {
        let dialogs = dialogs.clone();
        let store = store.clone();
        let set_theme = theme.actions.set_theme.clone();
        let set_width = full_width.actions.set_width.clone();
        let on_view_change = on_view_change.clone();
        Callback::from(move |_: MouseEvent| {
            let on_result = {
                let dialogs = dialogs.clone();
                let store = store.clone();
                let set_theme = set_theme.clone();
                let set_width = set_width.clone();
                let on_view_change = on_view_change.clone();
                Callback::from(move |confirmed: bool| {
                    if !confirmed {
                        return;
                    }
                    store.clear();
                    set_theme.emit(Theme::default());
                    set_width.emit(LayoutWidth::default());
                    on_view_change.emit(CalendarView::default());
                    dialogs.success("Theme, layout width and calendar view are back to their defaults.");
                })
            };

            dialogs.confirm(
                "Reset display preferences?",
                "Theme, layout width and calendar view go back to their defaults.",
                on_result,
            );
        })
    };

    let body = match ((*calendar).clone(), *view) {
        (Some(calendar), CalendarView::Semester) => html! {
            <SemesterView calendar={calendar} on_day_click={on_day_click} />
        },
        (Some(calendar), CalendarView::Timeline) => html! {
            <TimelineView
                calendar={calendar}
                on_day_click={on_day_click}
                scroll_check_interval_ms={props.config.scroll_check_interval_ms}
            />
        },
        (None, _) => html! {
            <div class="calendar-error">{format!("No calendar available for {}", year_data.state.year)}</div>
        },
    };

    let totals = (*calendar)
        .as_ref()
        .map(|c| c.leave_totals(&leave_types))
        .unwrap_or_default();

    html! {
        <>
            <Header
                year={year_data.state.year}
                loading={year_data.state.loading}
                view={*view}
                theme={theme.theme}
                width={full_width.width}
                on_prev_year={year_data.actions.prev_year.clone()}
                on_next_year={year_data.actions.next_year.clone()}
                on_this_year={year_data.actions.this_year.clone()}
                on_reload={year_data.actions.reload.reform(|_: MouseEvent| ())}
                on_view_change={on_view_change}
                on_toggle_theme={theme.actions.toggle.clone()}
                on_toggle_width={full_width.actions.toggle.clone()}
                on_reset={on_reset}
            />
            <main class={classes!(full_width.width.container_class(), "calendar-page")}>
                <Legend leave_types={leave_types} totals={totals} />
                {body}
            </main>
        </>
    }
}

fn main() {
    let config = AppConfig::from_document();
    Logger::init(config.log_level);
    Logger::info_with_component("app", &format!("Starting leave calendar against {}", config.api_base_url));

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
