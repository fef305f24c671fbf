//! App-local components and icons.

use dioxus::prelude::*;

/// Displays an error message in a styled box.
#[component]
pub fn ErrorDisplay(message: String) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #fef2f2; color: #b91c1c; border: 1px solid #fecaca; border-radius: 6px;",
            strong { "Error: " }
            "{message}"
        }
    }
}

/// Simple loading indicator.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "Loading dashboard..."
        }
    }
}

/// Monitor glyph used as the desktop series icon.
pub fn monitor_icon() -> Element {
    rsx! {
        svg {
            width: "12",
            height: "12",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            rect { x: "2", y: "3", width: "20", height: "14", rx: "2" }
            path { d: "M8 21h8" }
            path { d: "M12 17v4" }
        }
    }
}

/// Smartphone glyph used as the mobile series icon.
pub fn smartphone_icon() -> Element {
    rsx! {
        svg {
            width: "12",
            height: "12",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            rect { x: "5", y: "2", width: "14", height: "20", rx: "2" }
            path { d: "M12 18h.01" }
        }
    }
}
