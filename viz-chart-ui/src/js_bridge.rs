//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js chart engine lives in `assets/js/line-chart.js` and is loaded
//! at runtime as globals (no ES modules), exposed via `window.*`. This
//! module provides safe Rust wrappers that serialize data and call those
//! globals.
//!
//! Hover reporting: the engine dispatches `viz-chart-hover` CustomEvents on
//! `document` (string detail: JSON `{label, payload: [...]}`) as the pointer
//! crosses data points, and `viz-chart-leave` when it exits the plot. Apps
//! deserialize the detail into `config::PayloadEntry` values and feed them
//! to the tooltip component.

// Embed the chart engine JS at compile time
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('viz JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the chart engine with a wait-for-D3 polling loop.
///
/// The engine defines `renderSeriesChart(...)` via `function` declarations.
/// To ensure they become globally accessible (not block-scoped inside the
/// setInterval callback), we evaluate them at global scope via a separate
/// `eval()` call once D3 is ready, and then explicitly promote each function
/// to `window.*`.
pub fn init_charts() {
    // Store the script on window so the polling callback can eval it at
    // global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__vizChartScripts = {};",
        serde_json::to_string(LINE_CHART_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__vizChartScripts);
                    delete window.__vizChartScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderSeriesChart !== 'undefined') window.renderSeriesChart = renderSeriesChart;
                    if (typeof destroySeriesChart !== 'undefined') window.destroySeriesChart = destroySeriesChart;
                    window.__vizChartsReady = true;
                    console.log('viz charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);

    log::info!("chart engine bootstrap scheduled");
}

/// Render a multi-series line chart into the given container.
///
/// Uses a polling loop to wait for D3.js to load, the engine to initialize,
/// and the container DOM element to exist before rendering.
pub fn render_series_chart(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__vizChartsReady &&
                    typeof window.renderSeriesChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderSeriesChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[viz] renderSeriesChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}
