//! Tooltip content for hovered chart points.

use dioxus::prelude::*;

use crate::components::container::use_chart;
use crate::config::{ChartConfig, ConfigLookup, PayloadEntry, PayloadValue, resolve_series};
use crate::style::cn;

/// Shape of the per-row series marker.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Indicator {
    #[default]
    Dot,
    Line,
    Dashed,
}

/// Arguments handed to a custom per-row formatter.
#[derive(Clone, PartialEq)]
pub struct TooltipFormatterArgs {
    pub value: PayloadValue,
    pub name: String,
    pub entry: PayloadEntry,
    pub index: usize,
}

/// Arguments handed to a custom label formatter.
#[derive(Clone, PartialEq)]
pub struct LabelFormatterArgs {
    /// The label the default rules would have shown, if any
    pub label: Option<String>,
    pub payload: Vec<PayloadEntry>,
}

/// Props for ChartTooltipContent
#[derive(Props, Clone, PartialEq)]
pub struct ChartTooltipContentProps {
    /// Whether the tooltip is currently shown
    #[props(default = false)]
    pub active: bool,
    /// Hovered entries, one per series, in render order
    #[props(default)]
    pub payload: Vec<PayloadEntry>,
    /// Axis label of the hovered position; empty when absent
    #[props(default = String::new())]
    pub label: String,
    /// Full custom rendering per row
    #[props(default)]
    pub formatter: Option<Callback<TooltipFormatterArgs, Element>>,
    /// Custom rendering of the label block
    #[props(default)]
    pub label_formatter: Option<Callback<LabelFormatterArgs, Element>>,
    #[props(default)]
    pub indicator: Indicator,
    #[props(default = false)]
    pub hide_label: bool,
    #[props(default = false)]
    pub hide_indicator: bool,
    /// Overrides every row's indicator color; empty when absent
    #[props(default = String::new())]
    pub color: String,
    /// Overrides the per-row config lookup key; empty when absent
    #[props(default = String::new())]
    pub name_key: String,
    /// Overrides the label's config lookup key; empty when absent
    #[props(default = String::new())]
    pub label_key: String,
    #[props(default = String::new())]
    pub class: String,
    #[props(default = String::new())]
    pub label_class: String,
}

/// Tooltip body listing each hovered series with indicator, name, and value.
#[component]
pub fn ChartTooltipContent(props: ChartTooltipContentProps) -> Element {
    let chart = use_chart();
    let config = (chart.config)();

    if !props.active || props.payload.is_empty() {
        return rsx! {};
    }

    // With a single entry the label moves into that entry's row, except for
    // dot indicators which keep the stacked layout.
    let nest = nests_label(props.payload.len(), props.indicator);
    let label_block = tooltip_label_block(&props, &config);
    let class = cn(&[
        Some("viz-tooltip"),
        (!props.class.is_empty()).then_some(props.class.as_str()),
    ]);

    let rows: Vec<Element> = props
        .payload
        .iter()
        .enumerate()
        .map(|(index, entry)| tooltip_row(&props, &config, label_block.clone(), nest, index, entry))
        .collect();

    rsx! {
        div {
            class: "{class}",
            style: "display: grid; align-items: start; gap: 6px; min-width: 128px; padding: 6px 10px; border: 1px solid rgba(0,0,0,0.12); border-radius: 8px; background: var(--viz-tooltip-bg, #fff); box-shadow: 0 4px 12px rgba(0,0,0,0.15);",
            if !nest {
                {label_block.clone()}
            }
            div {
                style: "display: grid; gap: 6px;",
                {rows.into_iter()}
            }
        }
    }
}

/// The label block shown once above the rows (or nested into a lone row).
fn tooltip_label_block(props: &ChartTooltipContentProps, config: &ChartConfig) -> Option<Element> {
    if props.hide_label || props.payload.is_empty() {
        return None;
    }

    let entry = &props.payload[0];
    let key = label_candidate_key(&props.label_key, entry);
    let series = resolve_series(config, entry, &key);

    // Without an explicit label key, a plain-string axis label is itself
    // looked up in the config, falling back to the raw axis text.
    let label_text = if props.label_key.is_empty() && !props.label.is_empty() {
        Some(
            config
                .get(&props.label)
                .and_then(|series| series.label.clone())
                .unwrap_or_else(|| props.label.clone()),
        )
    } else {
        series.and_then(|series| series.label.clone())
    };

    let class = cn(&[
        Some("viz-tooltip-label"),
        (!props.label_class.is_empty()).then_some(props.label_class.as_str()),
    ]);

    if let Some(formatter) = &props.label_formatter {
        let formatted = formatter.call(LabelFormatterArgs {
            label: label_text,
            payload: props.payload.clone(),
        });
        return Some(rsx! {
            div { class: "{class}", style: "font-weight: 500;", {formatted} }
        });
    }

    let label_text = label_text?;
    Some(rsx! {
        div { class: "{class}", style: "font-weight: 500;", "{label_text}" }
    })
}

fn tooltip_row(
    props: &ChartTooltipContentProps,
    config: &ChartConfig,
    label_block: Option<Element>,
    nest: bool,
    index: usize,
    entry: &PayloadEntry,
) -> Element {
    // A custom formatter owns the whole row when the entry has both a value
    // and a name.
    if let (Some(formatter), Some(value), Some(name)) = (&props.formatter, &entry.value, &entry.name)
    {
        return formatter.call(TooltipFormatterArgs {
            value: value.clone(),
            name: name.clone(),
            entry: entry.clone(),
            index,
        });
    }

    let key = row_candidate_key(&props.name_key, entry);
    let series = resolve_series(config, entry, &key);
    let swatch_color = indicator_color(
        (!props.color.is_empty()).then_some(props.color.as_str()),
        entry,
    );

    let lead: Option<Element> = if let Some(icon) = series.and_then(|series| series.icon) {
        Some(icon())
    } else if !props.hide_indicator {
        Some(indicator_swatch(props.indicator, swatch_color.as_deref(), nest))
    } else {
        None
    };

    let name_text = series
        .and_then(|series| series.label.clone())
        .or_else(|| entry.name.clone());
    let value_text = entry.value.as_ref().map(|value| value.to_string());

    let row_align = if props.indicator == Indicator::Dot {
        "align-items: center;"
    } else {
        "align-items: stretch;"
    };
    let body_align = if nest {
        "align-items: end;"
    } else {
        "align-items: center;"
    };
    let name_node = name_text.map(|name| {
        rsx! {
            span {
                class: "viz-tooltip-name",
                style: "color: var(--viz-muted, #6b7280);",
                "{name}"
            }
        }
    });
    let value_node = value_text.map(|value| {
        rsx! {
            span {
                class: "viz-tooltip-value",
                style: "font-family: ui-monospace, SFMono-Regular, monospace; font-weight: 500; font-variant-numeric: tabular-nums;",
                "{value}"
            }
        }
    });

    rsx! {
        div {
            class: "viz-tooltip-row",
            style: "display: flex; flex-wrap: wrap; width: 100%; gap: 8px; {row_align}",
            {lead}
            div {
                style: "display: flex; flex: 1; justify-content: space-between; line-height: 1; {body_align}",
                div {
                    style: "display: grid; gap: 6px;",
                    if nest {
                        {label_block}
                    }
                    {name_node}
                }
                {value_node}
            }
        }
    }
}

fn indicator_swatch(indicator: Indicator, color: Option<&str>, nest: bool) -> Element {
    let color = color.unwrap_or("currentColor");
    let style = match indicator {
        Indicator::Dot => format!(
            "flex-shrink: 0; width: 10px; height: 10px; border-radius: 2px; background: {color};"
        ),
        Indicator::Line => format!(
            "flex-shrink: 0; width: 4px; border-radius: 2px; background: {color};"
        ),
        Indicator::Dashed => {
            let margin = if nest { " margin: 2px 0;" } else { "" };
            format!(
                "flex-shrink: 0; width: 0; background: transparent; border: 1.5px dashed {color}; border-radius: 2px;{margin}"
            )
        }
    };
    rsx! {
        div { class: "viz-tooltip-indicator", style: "{style}" }
    }
}

/// Config lookup key for a tooltip row.
pub(crate) fn row_candidate_key(name_key: &str, entry: &PayloadEntry) -> String {
    if !name_key.is_empty() {
        return name_key.to_string();
    }
    entry
        .name
        .clone()
        .or_else(|| entry.data_key.clone())
        .unwrap_or_else(|| "value".to_string())
}

/// Config lookup key for the label block, resolved on the first entry.
pub(crate) fn label_candidate_key(label_key: &str, entry: &PayloadEntry) -> String {
    if !label_key.is_empty() {
        return label_key.to_string();
    }
    entry
        .data_key
        .clone()
        .or_else(|| entry.name.clone())
        .unwrap_or_else(|| "value".to_string())
}

/// Swatch color: explicit override, else the datum's own "fill", else the
/// entry color. The legend deliberately uses a shorter chain.
pub(crate) fn indicator_color(override_color: Option<&str>, entry: &PayloadEntry) -> Option<String> {
    if let Some(color) = override_color {
        return Some(color.to_string());
    }
    entry
        .nested_field("fill")
        .map(str::to_string)
        .or_else(|| entry.color.clone())
}

/// The label nests into the row only for a lone entry with a non-dot marker.
pub(crate) fn nests_label(payload_len: usize, indicator: Indicator) -> bool {
    payload_len == 1 && indicator != Indicator::Dot
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    #[test]
    fn test_nests_label() {
        assert!(nests_label(1, Indicator::Line));
        assert!(nests_label(1, Indicator::Dashed));
        assert!(!nests_label(1, Indicator::Dot));
        assert!(!nests_label(2, Indicator::Line));
        assert!(!nests_label(0, Indicator::Dashed));
    }

    #[test]
    fn test_indicator_color_precedence() {
        let mut datum = Map::new();
        datum.insert("fill".to_string(), json!("#from-datum"));
        let entry = PayloadEntry {
            color: Some("#from-entry".to_string()),
            payload: Some(datum),
            ..Default::default()
        };

        assert_eq!(
            indicator_color(Some("#override"), &entry).as_deref(),
            Some("#override")
        );
        assert_eq!(indicator_color(None, &entry).as_deref(), Some("#from-datum"));

        let plain = PayloadEntry {
            color: Some("#from-entry".to_string()),
            ..Default::default()
        };
        assert_eq!(indicator_color(None, &plain).as_deref(), Some("#from-entry"));
        assert_eq!(indicator_color(None, &PayloadEntry::default()), None);
    }

    #[test]
    fn test_row_candidate_key_chain() {
        let entry = PayloadEntry {
            name: Some("desktop".to_string()),
            data_key: Some("d".to_string()),
            ..Default::default()
        };
        assert_eq!(row_candidate_key("override", &entry), "override");
        assert_eq!(row_candidate_key("", &entry), "desktop");

        let keyed = PayloadEntry {
            data_key: Some("d".to_string()),
            ..Default::default()
        };
        assert_eq!(row_candidate_key("", &keyed), "d");
        assert_eq!(row_candidate_key("", &PayloadEntry::default()), "value");
    }

    #[test]
    fn test_label_candidate_key_prefers_data_key() {
        let entry = PayloadEntry {
            name: Some("desktop".to_string()),
            data_key: Some("d".to_string()),
            ..Default::default()
        };
        assert_eq!(label_candidate_key("", &entry), "d");
        assert_eq!(label_candidate_key("month", &entry), "month");
        assert_eq!(label_candidate_key("", &PayloadEntry::default()), "value");
    }
}
