//! The `DayPicker` component: one month of selectable days.

use chrono::{Datelike, Local, NaiveDate};
use dioxus::prelude::*;

use crate::class_names::GridClassNames;
use crate::grid::{month_caption, month_grid, month_start};

const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Props for DayPicker
#[derive(Props, Clone, PartialEq)]
pub struct DayPickerProps {
    /// Any date inside the month to display
    pub month: NaiveDate,
    /// The currently selected day, if any
    #[props(default, !optional)]
    pub selected: Option<NaiveDate>,
    /// Fired with the clicked day, unmodified
    #[props(default)]
    pub on_select: Option<EventHandler<NaiveDate>>,
    /// Fired when the grid itself asks to display a different month
    #[props(default)]
    pub on_month_change: Option<EventHandler<NaiveDate>>,
    /// Render days belonging to the adjacent months in the padding cells
    #[props(default = true)]
    pub show_outside_days: bool,
    /// Days before this date cannot be selected
    #[props(default, !optional)]
    pub disabled_before: Option<NaiveDate>,
    /// Days after this date cannot be selected
    #[props(default, !optional)]
    pub disabled_after: Option<NaiveDate>,
    /// Per-element style classes
    #[props(default)]
    pub class_names: GridClassNames,
}

/// A single-month date grid with weekday header and caption.
///
/// Clicking a day fires `on_select` with that date. Clicking a day that
/// belongs to an adjacent month also fires `on_month_change` with the first
/// day of that month, so the embedder can keep its own navigation in sync.
#[component]
pub fn DayPicker(props: DayPickerProps) -> Element {
    let today = Local::now().date_naive();
    let month = month_start(props.month);
    let weeks = month_grid(month);
    let caption = month_caption(month);
    let names = props.class_names.clone();

    rsx! {
        div {
            class: "{names.months}",
            div {
                class: "{names.month}",
                div {
                    class: "{names.caption}",
                    style: "text-align: center; font-weight: 500; margin-bottom: 8px;",
                    "{caption}"
                }
                table {
                    class: "{names.table}",
                    style: "border-collapse: collapse;",
                    thead {
                        tr {
                            class: "{names.head_row}",
                            for label in WEEKDAY_LABELS {
                                th {
                                    class: "{names.head_cell}",
                                    scope: "col",
                                    style: "width: 32px; font-weight: normal;",
                                    "{label}"
                                }
                            }
                        }
                    }
                    tbody {
                        for week in weeks {
                            tr {
                                class: "{names.row}",
                                for day in week {
                                    {day_cell(&props, today, month, day)}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn day_cell(props: &DayPickerProps, today: NaiveDate, month: NaiveDate, day: NaiveDate) -> Element {
    let names = &props.class_names;
    let outside = month_start(day) != month;

    if outside && !props.show_outside_days {
        return rsx! {
            td { class: "{names.cell}" }
        };
    }

    let disabled = props.disabled_before.is_some_and(|min| day < min)
        || props.disabled_after.is_some_and(|max| day > max);
    let selected = props.selected == Some(day);

    let mut day_class = names.day.clone();
    if selected {
        append_class(&mut day_class, &names.day_selected);
    }
    if day == today {
        append_class(&mut day_class, &names.day_today);
    }
    if outside {
        append_class(&mut day_class, &names.day_outside);
    }
    if disabled {
        append_class(&mut day_class, &names.day_disabled);
    }

    let on_select = props.on_select;
    let on_month_change = props.on_month_change;
    let day_number = day.day();

    rsx! {
        td {
            class: "{names.cell}",
            style: "padding: 0; text-align: center;",
            button {
                r#type: "button",
                class: "{day_class}",
                disabled: disabled,
                onclick: move |_| {
                    if disabled {
                        return;
                    }
                    if let Some(handler) = on_select {
                        handler.call(day);
                    }
                    if outside {
                        if let Some(handler) = on_month_change {
                            handler.call(month_start(day));
                        }
                    }
                },
                "{day_number}"
            }
        }
    }
}

fn append_class(classes: &mut String, class: &str) {
    if class.is_empty() {
        return;
    }
    if !classes.is_empty() {
        classes.push(' ');
    }
    classes.push_str(class);
}

#[cfg(test)]
mod tests {
    use super::append_class;

    #[test]
    fn test_append_class() {
        let mut classes = String::from("day");
        append_class(&mut classes, "day-selected");
        append_class(&mut classes, "");
        append_class(&mut classes, "day-today");
        assert_eq!(classes, "day day-selected day-today");
    }

    #[test]
    fn test_append_class_to_empty() {
        let mut classes = String::new();
        append_class(&mut classes, "day");
        assert_eq!(classes, "day");
    }
}
