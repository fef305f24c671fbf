//! Class merging and per-chart stylesheet generation.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::{ChartConfig, Theme};

/// Merge class-name fragments into one attribute value.
///
/// `None` and empty fragments are skipped; the rest join with single spaces.
pub fn cn(parts: &[Option<&str>]) -> String {
    let mut merged = String::new();
    for part in parts.iter().flatten() {
        if part.is_empty() {
            continue;
        }
        if !merged.is_empty() {
            merged.push(' ');
        }
        merged.push_str(part);
    }
    merged
}

static NEXT_CHART_ID: AtomicUsize = AtomicUsize::new(0);

/// The `data-chart` attribute value for one container instance.
///
/// Uses the explicit id when given, otherwise a fresh token from a
/// process-local counter. Colons are stripped: the id is matched with a CSS
/// attribute selector, where a colon would terminate the value.
pub fn chart_element_id(explicit: &str) -> String {
    if explicit.is_empty() {
        format!("chart-v{}", NEXT_CHART_ID.fetch_add(1, Ordering::Relaxed))
    } else {
        format!("chart-{}", explicit.replace(':', ""))
    }
}

/// The per-theme CSS custom-property stylesheet for one chart instance.
///
/// Each config entry with a color contributes one `--color-{key}`
/// declaration per theme, scoped to the chart's `data-chart` attribute and
/// the theme's ancestor selector. Returns `None` when no entry has a color,
/// so no `<style>` element is emitted at all.
pub fn chart_style_css(chart_id: &str, config: &ChartConfig) -> Option<String> {
    if !config.iter().any(|(_, series)| series.color.is_some()) {
        return None;
    }

    let mut css = String::new();
    for theme in Theme::ALL {
        css.push_str(&format!(
            "{} [data-chart={}] {{\n",
            theme.scope_prefix(),
            chart_id
        ));
        for (key, series) in config.iter() {
            if let Some(color) = series.color.as_ref() {
                css.push_str(&format!("  --color-{}: {};\n", key, color.for_theme(theme)));
            }
        }
        css.push_str("}\n");
    }
    Some(css)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeriesConfig;

    #[test]
    fn test_cn_merges_and_skips_empties() {
        assert_eq!(
            cn(&[Some("p-3"), None, Some(""), Some("calendar")]),
            "p-3 calendar"
        );
        assert_eq!(cn(&[None, None]), "");
    }

    #[test]
    fn test_chart_element_id_strips_colons() {
        assert_eq!(chart_element_id(":r1:"), "chart-r1");
        assert_eq!(chart_element_id("traffic"), "chart-traffic");
    }

    #[test]
    fn test_chart_element_id_generated_unique() {
        assert_ne!(chart_element_id(""), chart_element_id(""));
    }

    #[test]
    fn test_no_stylesheet_without_colors() {
        let config = ChartConfig::new()
            .with("a", SeriesConfig::new().label("A"))
            .with("b", SeriesConfig::new());
        assert_eq!(chart_style_css("chart-x", &config), None);
        assert_eq!(chart_style_css("chart-x", &ChartConfig::new()), None);
    }

    #[test]
    fn test_stylesheet_per_theme_declarations() {
        let config = ChartConfig::new()
            .with("a", SeriesConfig::new().color("#fff"))
            .with("b", SeriesConfig::new().themed("#111", "#eee"));
        let css = chart_style_css("chart-x", &config).unwrap();

        let (light, dark) = css.split_once(".dark").unwrap();
        assert!(light.contains("[data-chart=chart-x]"));
        assert!(light.contains("--color-a: #fff;"));
        assert!(light.contains("--color-b: #111;"));
        assert!(dark.contains("[data-chart=chart-x]"));
        assert!(dark.contains("--color-a: #fff;"));
        assert!(dark.contains("--color-b: #eee;"));
    }

    #[test]
    fn test_stylesheet_skips_colorless_entries() {
        let config = ChartConfig::new()
            .with("a", SeriesConfig::new().color("#fff"))
            .with("plain", SeriesConfig::new().label("No color"));
        let css = chart_style_css("chart-x", &config).unwrap();
        assert!(!css.contains("--color-plain"));
    }
}
