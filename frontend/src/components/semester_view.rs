use std::rc::Rc;

use shared::dates::weekday_initial;
use shared::{DayCell, MonthColumn, YearCalendar};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SemesterViewProps {
    pub calendar: Rc<YearCalendar>,
    pub on_day_click: Callback<DayCell>,
}

/// Whole year as two blocks of six month columns, days running downward
#[function_component(SemesterView)]
pub fn semester_view(props: &SemesterViewProps) -> Html {
    let [first, second] = props.calendar.semesters();

    html! {
        <div class="semester-view">
            {for [first, second].into_iter().enumerate().map(|(index, months)| html! {
                <section class="semester" key={index}>
                    <h2 class="semester-title">{format!("Semester {}", index + 1)}</h2>
                    <div class="semester-columns">
                        {for months.iter().map(|column| month_column(column, &props.on_day_click))}
                    </div>
                </section>
            })}
        </div>
    }
}

fn month_column(column: &MonthColumn, on_day_click: &Callback<DayCell>) -> Html {
    html! {
        <div class="month-column" key={column.month}>
            <div class="month-header">{column.name()}</div>
            {for column.days.iter().map(|cell| {
                let onclick = {
                    let on_day_click = on_day_click.clone();
                    let cell = cell.clone();
                    Callback::from(move |_: MouseEvent| on_day_click.emit(cell.clone()))
                };

                html! {
                    <div
                        class={cell.css_class()}
                        style={cell.style()}
                        title={cell.tooltip()}
                        data-date={cell.key.clone()}
                        {onclick}
                    >
                        <span class="weekday">{weekday_initial(cell.weekday)}</span>
                        <span class="day-number">{cell.day}</span>
                        {if let Some(holiday) = &cell.holiday {
                            html! { <span class="holiday-name">{holiday}</span> }
                        } else if let Some(label) = cell.leave_label() {
                            html! { <span class="leave-label">{label}</span> }
                        } else {
                            html! {}
                        }}
                    </div>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use gloo::timers::future::TimeoutFuture;
    use shared::{default_leave_types, CalendarLookup, LeaveEntry};
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_root() -> web_sys::Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        root
    }

    fn count(root: &web_sys::Element, selector: &str) -> u32 {
        root.query_selector_all(selector).unwrap().length()
    }

    #[wasm_bindgen_test]
    async fn test_leap_year_renders_every_day_once() {
        let leaves = vec![
            LeaveEntry { date: "2024-02-29".to_string(), leave_type: "paid".to_string(), half_day: true, note: None },
            LeaveEntry { date: "2024-02-29".to_string(), leave_type: "sick".to_string(), half_day: true, note: None },
        ];
        let lookup = CalendarLookup::new(&[], &leaves, &default_leave_types());
        let calendar = Rc::new(YearCalendar::build(2024, None, &lookup).unwrap());

        let root = mount_root();
        yew::Renderer::<SemesterView>::with_root_and_props(
            root.clone(),
            SemesterViewProps {
                calendar,
                on_day_click: Callback::noop(),
            },
        )
        .render();
        TimeoutFuture::new(0).await;

        assert_eq!(count(&root, ".semester"), 2);
        assert_eq!(count(&root, ".month-column"), 12);
        assert_eq!(count(&root, ".day-cell[data-date]"), 366);
        assert_eq!(count(&root, ".semester:first-child .day-cell[data-date]"), 182);
        assert_eq!(count(&root, "[data-date='2024-02-29']"), 1);

        let leap_day = root.query_selector("[data-date='2024-02-29']").unwrap().unwrap();
        assert_eq!(leap_day.class_name(), "day-cell leave");
        let label = leap_day.query_selector(".leave-label").unwrap().unwrap();
        assert_eq!(label.text_content().as_deref(), Some("Paid leave / Sick leave"));
    }

    #[wasm_bindgen_test]
    async fn test_common_year_february_has_28_days() {
        let calendar = Rc::new(YearCalendar::build(2023, None, &CalendarLookup::default()).unwrap());

        let root = mount_root();
        yew::Renderer::<SemesterView>::with_root_and_props(
            root.clone(),
            SemesterViewProps {
                calendar,
                on_day_click: Callback::noop(),
            },
        )
        .render();
        TimeoutFuture::new(0).await;

        assert_eq!(count(&root, ".day-cell[data-date]"), 365);
        assert_eq!(count(&root, "[data-date^='2023-02-']"), 28);
        assert_eq!(count(&root, "[data-date='2023-02-29']"), 0);
    }
}
