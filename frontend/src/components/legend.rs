use shared::dates::format_day_count;
use shared::LeaveType;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LegendProps {
    pub leave_types: Vec<LeaveType>,
    /// Days per leave type id, as computed by `YearCalendar::leave_totals`
    pub totals: Vec<(String, f64)>,
}

#[function_component(Legend)]
pub fn legend(props: &LegendProps) -> Html {
    let total_for = |id: &str| {
        props
            .totals
            .iter()
            .find(|(type_id, _)| type_id == id)
            .map(|(_, days)| *days)
            .unwrap_or(0.0)
    };

    // Leaves whose type the provider did not describe
    let unknown: Vec<&(String, f64)> = props
        .totals
        .iter()
        .filter(|(id, days)| *days > 0.0 && !props.leave_types.iter().any(|t| &t.id == id))
        .collect();

    html! {
        <div class="legend">
            {for props.leave_types.iter().map(|leave_type| html! {
                <div class="legend-item" key={leave_type.id.clone()}>
                    <span class="legend-swatch" style={format!("background-color: {};", leave_type.color)}></span>
                    <span class="legend-label">{&leave_type.label}</span>
                    <span class="legend-total">{format_day_count(total_for(&leave_type.id))}</span>
                </div>
            })}
            {for unknown.into_iter().map(|(id, days)| html! {
                <div class="legend-item unknown" key={id.clone()}>
                    <span class="legend-swatch"></span>
                    <span class="legend-label">{id}</span>
                    <span class="legend-total">{format_day_count(*days)}</span>
                </div>
            })}
            <div class="legend-item">
                <span class="legend-swatch holiday"></span>
                <span class="legend-label">{"Public holiday"}</span>
            </div>
        </div>
    }
}
