//! Horizontal legend strip.

use dioxus::prelude::*;

use crate::components::container::use_chart;
use crate::config::{LegendEntry, resolve_series};
use crate::style::cn;

/// Where the chart places the legend, controlling which side gets spacing.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum VerticalAlign {
    Top,
    #[default]
    Bottom,
    Middle,
}

/// Props for ChartLegendContent
#[derive(Props, Clone, PartialEq)]
pub struct ChartLegendContentProps {
    /// Legend entries in render order
    #[props(default)]
    pub payload: Vec<LegendEntry>,
    #[props(default = false)]
    pub hide_icon: bool,
    #[props(default)]
    pub vertical_align: VerticalAlign,
    /// Overrides the per-entry config lookup key; empty when absent
    #[props(default = String::new())]
    pub name_key: String,
    #[props(default = String::new())]
    pub class: String,
}

/// One row per entry: configured icon (or color swatch) plus label.
#[component]
pub fn ChartLegendContent(props: ChartLegendContentProps) -> Element {
    let chart = use_chart();
    let config = (chart.config)();

    if props.payload.is_empty() {
        return rsx! {};
    }

    let pad = match props.vertical_align {
        VerticalAlign::Top => "padding-bottom: 12px;",
        _ => "padding-top: 12px;",
    };
    let class = cn(&[
        Some("viz-legend"),
        (!props.class.is_empty()).then_some(props.class.as_str()),
    ]);

    let items: Vec<Element> = props
        .payload
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let key = legend_candidate_key(&props.name_key, entry, index);
            let series = resolve_series(&config, entry, &key);

            let lead: Element = match series.and_then(|series| series.icon) {
                Some(icon) if !props.hide_icon => icon(),
                _ => {
                    let swatch = entry
                        .color
                        .as_deref()
                        .map(|color| format!(" background: {color};"))
                        .unwrap_or_default();
                    rsx! {
                        div {
                            class: "viz-legend-swatch",
                            style: "flex-shrink: 0; width: 8px; height: 8px; border-radius: 2px;{swatch}",
                        }
                    }
                }
            };
            let label = series.and_then(|series| series.label.clone());

            rsx! {
                div {
                    class: "viz-legend-item",
                    style: "display: flex; align-items: center; gap: 6px;",
                    {lead}
                    {label}
                }
            }
        })
        .collect();

    rsx! {
        div {
            class: "{class}",
            style: "display: flex; align-items: center; justify-content: center; gap: 16px; {pad}",
            {items.into_iter()}
        }
    }
}

/// Config lookup key for a legend entry, by position when nothing names it.
pub(crate) fn legend_candidate_key(name_key: &str, entry: &LegendEntry, index: usize) -> String {
    if !name_key.is_empty() {
        return name_key.to_string();
    }
    entry
        .data_key
        .clone()
        .or_else(|| entry.value.clone())
        .unwrap_or_else(|| index.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legend_candidate_key_chain() {
        let entry = LegendEntry {
            value: Some("desktop".to_string()),
            data_key: Some("d".to_string()),
            ..Default::default()
        };
        assert_eq!(legend_candidate_key("override", &entry, 0), "override");
        assert_eq!(legend_candidate_key("", &entry, 0), "d");

        let value_only = LegendEntry {
            value: Some("desktop".to_string()),
            ..Default::default()
        };
        assert_eq!(legend_candidate_key("", &value_only, 0), "desktop");
        assert_eq!(legend_candidate_key("", &LegendEntry::default(), 3), "3");
    }
}
