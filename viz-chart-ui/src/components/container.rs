//! Chart container: provides the series config to descendants and hosts the
//! engine's drawing surface.

use dioxus::prelude::*;

use crate::config::ChartConfig;
use crate::style::{chart_element_id, chart_style_css, cn};

/// Ambient chart state available to tooltip/legend renderers.
#[derive(Clone, Copy)]
pub struct ChartContext {
    pub config: Signal<ChartConfig>,
}

/// Read the enclosing chart's context.
///
/// Panics when called outside a `ChartContainer` subtree; tooltip and legend
/// content only make sense inside one.
pub fn use_chart() -> ChartContext {
    match try_consume_context::<ChartContext>() {
        Some(context) => context,
        None => panic!("use_chart must be used within a ChartContainer"),
    }
}

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// Explicit chart id; a unique one is generated when empty
    #[props(default = String::new())]
    pub id: String,
    #[props(default = String::new())]
    pub class: String,
    /// Series display configuration published to descendants
    pub config: ChartConfig,
    pub children: Element,
}

/// Wraps a chart: publishes `config` into context, injects the per-theme
/// color-variable stylesheet, and renders the `data-chart`-tagged surface
/// the external engine draws into.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let chart_id = use_hook(|| chart_element_id(&props.id));
    let context = use_context_provider(|| ChartContext {
        config: Signal::new(props.config.clone()),
    });

    // Keep the published config in sync when the prop changes. `peek` avoids
    // subscribing this component to its own signal.
    let mut config_signal = context.config;
    if *config_signal.peek() != props.config {
        config_signal.set(props.config.clone());
    }

    let css = chart_style_css(&chart_id, &props.config);
    let class = cn(&[
        Some("viz-chart"),
        (!props.class.is_empty()).then_some(props.class.as_str()),
    ]);

    rsx! {
        div {
            class: "{class}",
            "data-chart": "{chart_id}",
            style: "position: relative; display: flex; justify-content: center; width: 100%; aspect-ratio: 16 / 9; font-size: 12px;",
            if let Some(css) = css {
                style { "{css}" }
            }
            {props.children}
        }
    }
}
