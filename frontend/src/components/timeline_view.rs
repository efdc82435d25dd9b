use std::rc::Rc;

use shared::calendar::TIMELINE_COLUMNS;
use shared::dates::{month_short, weekday_initial};
use shared::{DayCell, TimelineCell, YearCalendar};
use yew::prelude::*;

use crate::hooks::use_scrollbar_check;

#[derive(Properties, PartialEq)]
pub struct TimelineViewProps {
    pub calendar: Rc<YearCalendar>,
    pub on_day_click: Callback<DayCell>,
    pub scroll_check_interval_ms: u32,
}

/// One row per month, one column per day of month, horizontally scrollable
#[function_component(TimelineView)]
pub fn timeline_view(props: &TimelineViewProps) -> Html {
    let scroll_ref = use_node_ref();
    let has_scrollbar = use_scrollbar_check(scroll_ref.clone(), props.scroll_check_interval_ms);
    let rows = props.calendar.timeline_rows();

    html! {
        <div
            class={classes!("timeline-scroll", has_scrollbar.then_some("has-scrollbar"))}
            ref={scroll_ref}
        >
            <table class="timeline">
                <thead>
                    <tr>
                        <th class="timeline-corner"></th>
                        {for (1..=TIMELINE_COLUMNS).map(|day| html! {
                            <th class="timeline-day-header" key={day}>{day}</th>
                        })}
                    </tr>
                </thead>
                <tbody>
                    {for rows.iter().map(|row| html! {
                        <tr class="timeline-row" key={row.month}>
                            <th class="timeline-month" scope="row">{month_short(row.month)}</th>
                            {for row.cells.iter().enumerate().map(|(index, cell)| match cell {
                                TimelineCell::Day(day) => timeline_day(day, &props.on_day_click),
                                TimelineCell::Padding => html! {
                                    <td class="day-cell padding" key={format!("pad-{}", index)}></td>
                                },
                            })}
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}

fn timeline_day(cell: &DayCell, on_day_click: &Callback<DayCell>) -> Html {
    let onclick = {
        let on_day_click = on_day_click.clone();
        let cell = cell.clone();
        Callback::from(move |_: MouseEvent| on_day_click.emit(cell.clone()))
    };

    html! {
        <td
            class={cell.css_class()}
            key={cell.key.clone()}
            style={cell.style()}
            title={cell.tooltip()}
            data-date={cell.key.clone()}
            {onclick}
        >
            <span class="weekday">{weekday_initial(cell.weekday)}</span>
        </td>
    }
}
