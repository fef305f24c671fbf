//! Application state managed via Dioxus context.
//!
//! `DashboardState` bundles all reactive signals into a single struct
//! provided via `use_context_provider`. Child components retrieve it with
//! `use_context::<DashboardState>()`.

use chrono::NaiveDate;
use dioxus::prelude::*;
use serde::Deserialize;
use viz_chart_ui::config::PayloadEntry;

/// One hover report from the chart engine.
#[derive(Clone, PartialEq, Debug, Default, Deserialize)]
#[serde(default)]
pub struct HoverFrame {
    /// X-axis label of the hovered position
    pub label: Option<String>,
    /// One entry per plotted series at that position
    pub payload: Vec<PayloadEntry>,
}

/// Shared state for the dashboard app.
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Latest hover report; None while the pointer is off the chart
    pub hover: Signal<Option<HoverFrame>>,
    /// Date picked in the calendar panel
    pub selected_date: Signal<Option<NaiveDate>>,
}

impl DashboardState {
    /// Create a new DashboardState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            hover: Signal::new(None),
            selected_date: Signal::new(None),
        }
    }
}
