//! Calendar: a single-month picker with external navigation controls.

use chrono::{Local, NaiveDate};
use dioxus::prelude::*;
use viz_daygrid::{next_month, prev_month, DayPicker, GridClassNames, GridClassOverrides};

use crate::style::cn;

/// Props for Calendar
#[derive(Props, Clone, PartialEq)]
pub struct CalendarProps {
    /// The selected day, passed through to the grid unmodified
    #[props(default, !optional)]
    pub selected: Option<NaiveDate>,
    /// Fired once per grid click with the clicked date
    #[props(default)]
    pub on_select: Option<EventHandler<NaiveDate>>,
    #[props(default = true)]
    pub show_outside_days: bool,
    #[props(default, !optional)]
    pub disabled_before: Option<NaiveDate>,
    #[props(default, !optional)]
    pub disabled_after: Option<NaiveDate>,
    #[props(default = String::new())]
    pub class: String,
    /// Per-element grid class overrides; a supplied value wins per key
    #[props(default, !optional)]
    pub class_names: Option<GridClassOverrides>,
}

/// A date picker showing one month at a time.
///
/// Owns exactly one piece of state, the displayed month, initialized to
/// today's date at mount. The previous/next buttons and the grid's own
/// navigation requests all move the same state, so the two stay in sync.
#[component]
pub fn Calendar(props: CalendarProps) -> Element {
    let mut month = use_signal(|| Local::now().date_naive());

    let class = cn(&[
        Some("viz-calendar"),
        (!props.class.is_empty()).then_some(props.class.as_str()),
    ]);
    let overrides = props.class_names.clone().unwrap_or_default();
    let class_names = calendar_class_names().merged(&overrides);
    let on_select = props.on_select;

    rsx! {
        div {
            class: "{class}",
            style: "display: inline-block; padding: 12px;",
            div {
                style: "display: flex; justify-content: space-between; margin-bottom: 8px;",
                button {
                    r#type: "button",
                    class: "viz-calendar-nav",
                    style: "padding: 4px; opacity: 0.5; background: none; border: none; cursor: pointer;",
                    onclick: move |_| {
                        let shown = month();
                        month.set(prev_month(shown));
                    },
                    {chevron_left()}
                }
                button {
                    r#type: "button",
                    class: "viz-calendar-nav",
                    style: "padding: 4px; opacity: 0.5; background: none; border: none; cursor: pointer;",
                    onclick: move |_| {
                        let shown = month();
                        month.set(next_month(shown));
                    },
                    {chevron_right()}
                }
            }
            DayPicker {
                month: month(),
                selected: props.selected,
                show_outside_days: props.show_outside_days,
                disabled_before: props.disabled_before,
                disabled_after: props.disabled_after,
                class_names: class_names,
                on_select: move |date: NaiveDate| {
                    if let Some(handler) = on_select {
                        handler.call(date);
                    }
                },
                on_month_change: move |requested: NaiveDate| {
                    month.set(requested);
                },
            }
        }
    }
}

/// The calendar's fixed per-element grid classes.
fn calendar_class_names() -> GridClassNames {
    GridClassNames {
        months: "viz-cal-months".into(),
        month: "viz-cal-month".into(),
        caption: "viz-cal-caption".into(),
        table: "viz-cal-table".into(),
        head_row: "viz-cal-head-row".into(),
        head_cell: "viz-cal-head-cell".into(),
        row: "viz-cal-row".into(),
        cell: "viz-cal-cell".into(),
        day: "viz-cal-day".into(),
        day_selected: "viz-cal-day-selected".into(),
        day_today: "viz-cal-day-today".into(),
        day_outside: "viz-cal-day-outside".into(),
        day_disabled: "viz-cal-day-disabled".into(),
    }
}

fn chevron_left() -> Element {
    rsx! {
        svg {
            width: "16",
            height: "16",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M15 18l-6-6 6-6" }
        }
    }
}

fn chevron_right() -> Element {
    rsx! {
        svg {
            width: "16",
            height: "16",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M9 18l6-6-6-6" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::calendar_class_names;
    use viz_daygrid::GridClassOverrides;

    #[test]
    fn test_caller_override_wins_per_key() {
        let overrides = GridClassOverrides {
            day: Some("compact-day".to_string()),
            ..Default::default()
        };
        let merged = calendar_class_names().merged(&overrides);
        assert_eq!(merged.day, "compact-day");
        assert_eq!(merged.day_selected, "viz-cal-day-selected");
    }
}
