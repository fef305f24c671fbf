//! Site traffic dashboard.
//!
//! Exercises the viz component kit end to end:
//! 1. `include_str!` embeds a small monthly traffic CSV into the WASM binary.
//! 2. On mount: parse the CSV and boot the D3 chart engine.
//! 3. The engine draws into the `ChartContainer` surface and reports hover
//!    frames as DOM CustomEvents.
//! 4. A wasm-bindgen listener feeds those frames to `ChartTooltipContent`;
//!    the legend and a report-date calendar sit alongside.

use chrono::NaiveDate;
use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

mod components;
mod data;
mod state;

use components::{monitor_icon, smartphone_icon, ErrorDisplay, LoadingSpinner};
use data::{parse_monthly_csv, TrafficRow};
use state::{DashboardState, HoverFrame};
use viz_chart_ui::components::{
    Calendar, ChartContainer, ChartLegendContent, ChartTooltipContent, Indicator, VerticalAlign,
};
use viz_chart_ui::config::{ChartConfig, LegendEntry, SeriesConfig};
use viz_chart_ui::js_bridge;

// Embed the monthly traffic CSV (month,desktop,mobile) at compile time.
const MONTHLY_CSV: &str = include_str!("../assets/monthly.csv");

/// DOM id for the D3 chart surface.
const CHART_CONTAINER_ID: &str = "traffic-chart";

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("starting traffic dashboard");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("dashboard-root"))
        .launch(App);
}

/// Display metadata for the plotted series.
fn traffic_config() -> ChartConfig {
    ChartConfig::new()
        .with(
            "desktop",
            SeriesConfig::new()
                .label("Desktop")
                .icon(monitor_icon)
                .themed("#2563eb", "#60a5fa"),
        )
        .with(
            "mobile",
            SeriesConfig::new()
                .label("Mobile")
                .icon(smartphone_icon)
                .themed("#0d9488", "#2dd4bf"),
        )
}

fn legend_entries() -> Vec<LegendEntry> {
    ["desktop", "mobile"]
        .iter()
        .map(|key| LegendEntry {
            value: Some((*key).to_string()),
            data_key: Some((*key).to_string()),
            color: Some(format!("var(--color-{key})")),
        })
        .collect()
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(DashboardState::new);
    let mut all_data: Signal<Vec<TrafficRow>> = use_signal(Vec::new);

    // ─── Effect 1: Parse CSV once on mount ───
    use_effect(move || {
        match parse_monthly_csv(MONTHLY_CSV) {
            Ok(rows) if rows.is_empty() => {
                state
                    .error_msg
                    .set(Some("No traffic data available.".to_string()));
                state.loading.set(false);
            }
            Ok(rows) => {
                info!("loaded {} months of traffic data", rows.len());
                all_data.set(rows);
                state.loading.set(false);

                // Initialize the D3 chart engine (one-time)
                js_bridge::init_charts();
            }
            Err(e) => {
                state
                    .error_msg
                    .set(Some(format!("Failed to parse traffic data: {}", e)));
                state.loading.set(false);
            }
        }
    });

    // ─── Effect 2: Render the chart once data is ready ───
    use_effect(move || {
        let loading = (state.loading)();
        // Clone data out of the signal immediately so the read borrow
        // doesn't interfere with Dioxus signal tracking.
        let rows: Vec<TrafficRow> = all_data.read().clone();
        if loading || rows.is_empty() {
            return;
        }

        let chart_rows: Vec<serde_json::Value> = rows
            .iter()
            .map(|row| {
                serde_json::json!({
                    "month": row.month,
                    "desktop": row.desktop,
                    "mobile": row.mobile,
                })
            })
            .collect();
        let data_json = serde_json::to_string(&chart_rows).unwrap_or_default();
        let config_json = serde_json::json!({
            "xKey": "month",
            "series": [
                { "key": "desktop", "color": "var(--color-desktop)" },
                { "key": "mobile", "color": "var(--color-mobile)" },
            ],
        })
        .to_string();

        js_bridge::render_series_chart(CHART_CONTAINER_ID, &data_json, &config_json);
    });

    // ─── Effect 3: Subscribe to engine hover reports ───
    use_effect(move || {
        let mut hover = state.hover;
        let on_hover = Closure::<dyn FnMut(web_sys::CustomEvent)>::new(
            move |event: web_sys::CustomEvent| {
                let Some(detail) = event.detail().as_string() else {
                    return;
                };
                match serde_json::from_str::<HoverFrame>(&detail) {
                    Ok(frame) => hover.set(Some(frame)),
                    Err(e) => log::warn!("undecodable hover frame: {}", e),
                }
            },
        );
        let mut hover_out = state.hover;
        let on_leave = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            hover_out.set(None);
        });

        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            let _ = document
                .add_event_listener_with_callback("viz-chart-hover", on_hover.as_ref().unchecked_ref());
            let _ = document
                .add_event_listener_with_callback("viz-chart-leave", on_leave.as_ref().unchecked_ref());
        }
        // The listeners live for the page's lifetime.
        on_hover.forget();
        on_leave.forget();
    });

    let hover = (state.hover)();
    let hover_label = hover
        .as_ref()
        .and_then(|frame| frame.label.clone())
        .unwrap_or_default();
    let hover_payload = hover
        .as_ref()
        .map(|frame| frame.payload.clone())
        .unwrap_or_default();
    let selected = (state.selected_date)();
    let report_line = selected.map(|date| date.format("%B %d, %Y").to_string());

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 16px; font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                style: "margin: 0 0 4px 0;",
                "Site Traffic"
            }
            p {
                style: "margin: 0 0 16px 0; color: #666;",
                "Desktop and mobile visitors, last six months"
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                ChartContainer {
                    id: "traffic".to_string(),
                    config: traffic_config(),
                    div {
                        id: CHART_CONTAINER_ID,
                        style: "position: absolute; inset: 0;",
                    }
                    div {
                        style: "position: absolute; top: 12px; right: 12px; pointer-events: none;",
                        ChartTooltipContent {
                            active: hover.is_some(),
                            payload: hover_payload,
                            label: hover_label,
                            indicator: Indicator::Line,
                        }
                    }
                    div {
                        style: "position: absolute; bottom: 0; left: 0; right: 0;",
                        ChartLegendContent {
                            payload: legend_entries(),
                            vertical_align: VerticalAlign::Bottom,
                        }
                    }
                }

                div {
                    style: "margin-top: 32px; display: flex; gap: 24px; align-items: flex-start;",
                    Calendar {
                        selected: selected,
                        on_select: move |date: NaiveDate| {
                            state.selected_date.set(Some(date));
                        },
                    }
                    if let Some(report) = report_line {
                        p { "Report date: {report}" }
                    }
                }
            }
        }
    }
}
