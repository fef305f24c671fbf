//! Shared Dioxus chart and calendar components.
//!
//! This crate provides:
//! - `config`: per-series display configuration and payload resolution
//! - `style`: class merging and per-chart CSS variable stylesheets
//! - `js_bridge`: Rust wrappers for the D3.js chart engine
//! - `components`: reusable RSX components (container, tooltip, legend, calendar)

pub mod components;
pub mod config;
pub mod js_bridge;
pub mod style;

pub use viz_daygrid::{GridClassNames, GridClassOverrides};
