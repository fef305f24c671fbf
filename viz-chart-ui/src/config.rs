//! Per-series display configuration and payload resolution.
//!
//! A `ChartConfig` maps series keys ("desktop", "mobile", ...) to the label,
//! icon, and color to use when rendering that series in tooltips and legends.
//! The chart engine hands back transient `PayloadEntry` records per hovered
//! point; `resolve_series` decides which config entry applies to each one.

use std::fmt;

use dioxus::prelude::Element;
use serde::Deserialize;
use serde_json::{Map, Value};

/// The two fixed stylesheet themes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// CSS selector prefix scoping a theme's rules. Light rules apply at the
    /// page root; dark rules only under a `.dark` ancestor.
    pub fn scope_prefix(self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => ".dark",
        }
    }
}

/// A series color: one value for every theme, or one per theme.
#[derive(Clone, PartialEq, Debug)]
pub enum SeriesColor {
    Single(String),
    Themed { light: String, dark: String },
}

impl SeriesColor {
    pub fn for_theme(&self, theme: Theme) -> &str {
        match self {
            SeriesColor::Single(color) => color,
            SeriesColor::Themed { light, dark } => match theme {
                Theme::Light => light,
                Theme::Dark => dark,
            },
        }
    }
}

/// Renders an inline icon for a series.
pub type IconFn = fn() -> Element;

/// Display metadata for one series key.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SeriesConfig {
    pub label: Option<String>,
    pub icon: Option<IconFn>,
    pub color: Option<SeriesColor>,
}

impl SeriesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn icon(mut self, icon: IconFn) -> Self {
        self.icon = Some(icon);
        self
    }

    /// One color used under every theme.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(SeriesColor::Single(color.into()));
        self
    }

    /// Separate light- and dark-theme colors.
    pub fn themed(mut self, light: impl Into<String>, dark: impl Into<String>) -> Self {
        self.color = Some(SeriesColor::Themed {
            light: light.into(),
            dark: dark.into(),
        });
        self
    }
}

/// Ordered mapping from series key to display metadata.
///
/// Declaration order is preserved; the generated stylesheet and legend
/// iteration follow it. Lookup is linear, configs hold a handful of series.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ChartConfig {
    entries: Vec<(String, SeriesConfig)>,
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, series: SeriesConfig) -> Self {
        self.entries.push((key.into(), series));
        self
    }

    pub fn get(&self, key: &str) -> Option<&SeriesConfig> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, series)| series)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SeriesConfig)> {
        self.entries.iter().map(|(k, s)| (k.as_str(), s))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, SeriesConfig)> for ChartConfig {
    fn from_iter<I: IntoIterator<Item = (String, SeriesConfig)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A rendered data value: the engine reports numbers or preformatted text.
#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(untagged)]
pub enum PayloadValue {
    Number(f64),
    Text(String),
}

impl PayloadValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PayloadValue::Text(text) => Some(text),
            PayloadValue::Number(_) => None,
        }
    }
}

impl fmt::Display for PayloadValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadValue::Number(n) => f.write_str(&group_thousands(*n)),
            PayloadValue::Text(text) => f.write_str(text),
        }
    }
}

/// One hovered data point as reported by the chart engine.
///
/// Created per hover frame, consumed immediately, never stored.
#[derive(Clone, PartialEq, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PayloadEntry {
    pub value: Option<PayloadValue>,
    pub name: Option<String>,
    #[serde(rename = "dataKey")]
    pub data_key: Option<String>,
    /// The raw datum the point was plotted from.
    pub payload: Option<Map<String, Value>>,
    pub color: Option<String>,
}

/// One legend strip entry as reported by the chart engine.
#[derive(Clone, PartialEq, Debug, Default, Deserialize)]
#[serde(default)]
pub struct LegendEntry {
    pub value: Option<String>,
    #[serde(rename = "dataKey")]
    pub data_key: Option<String>,
    pub color: Option<String>,
}

/// String-keyed access to an entry's own fields and its nested raw datum.
///
/// Both tooltip payload entries and legend entries resolve against the
/// config through this seam, so the lookup rules live in exactly one place.
pub trait ConfigLookup {
    /// A string-valued property of the entry itself under `key`.
    fn string_field(&self, key: &str) -> Option<&str>;

    /// A string-valued property of the entry's raw datum under `key`.
    fn nested_field(&self, _key: &str) -> Option<&str> {
        None
    }
}

impl ConfigLookup for PayloadEntry {
    fn string_field(&self, key: &str) -> Option<&str> {
        match key {
            "value" => self.value.as_ref().and_then(PayloadValue::as_str),
            "name" => self.name.as_deref(),
            "dataKey" => self.data_key.as_deref(),
            "color" => self.color.as_deref(),
            _ => None,
        }
    }

    fn nested_field(&self, key: &str) -> Option<&str> {
        self.payload
            .as_ref()
            .and_then(|datum| datum.get(key))
            .and_then(Value::as_str)
    }
}

impl ConfigLookup for LegendEntry {
    fn string_field(&self, key: &str) -> Option<&str> {
        match key {
            "value" => self.value.as_deref(),
            "dataKey" => self.data_key.as_deref(),
            "color" => self.color.as_deref(),
            _ => None,
        }
    }
}

/// Find the config entry for one rendered point.
///
/// The entry may redirect the lookup: a string-valued field of the entry
/// under the candidate key name, or failing that of its raw datum, names the
/// config key to use instead of the candidate itself. When the redirected
/// key has no config entry, the candidate key's entry is the fallback.
///
/// Total: absent entries yield `None`, callers degrade gracefully.
pub fn resolve_series<'a>(
    config: &'a ChartConfig,
    entry: &impl ConfigLookup,
    key: &str,
) -> Option<&'a SeriesConfig> {
    let resolved = entry
        .string_field(key)
        .or_else(|| entry.nested_field(key))
        .unwrap_or(key);
    config.get(resolved).or_else(|| config.get(key))
}

/// Group an integer part in threes: `1234567.5` becomes `"1,234,567.5"`.
pub fn group_thousands(n: f64) -> String {
    if !n.is_finite() {
        return n.to_string();
    }
    let raw = if n == n.trunc() && n.abs() < 9.0e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    };
    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(raw.len() + int_part.len() / 3);
    grouped.push_str(sign);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> ChartConfig {
        ChartConfig::new()
            .with("desktop", SeriesConfig::new().label("Desktop").color("#2563eb"))
            .with("mobile", SeriesConfig::new().label("Mobile").themed("#111", "#eee"))
            .with("chrome", SeriesConfig::new().label("Chrome"))
    }

    #[test]
    fn test_resolve_by_data_key() {
        let entry = PayloadEntry {
            data_key: Some("desktop".to_string()),
            ..Default::default()
        };
        let config = config();
        let series = resolve_series(&config, &entry, "desktop").unwrap();
        assert_eq!(series.label.as_deref(), Some("Desktop"));
    }

    #[test]
    fn test_resolve_unknown_key_is_none() {
        let entry = PayloadEntry::default();
        assert!(resolve_series(&config(), &entry, "sessions").is_none());
    }

    #[test]
    fn test_entry_field_redirect_wins_over_raw_key() {
        // The entry's own "name" field is a string, so its *value* becomes
        // the lookup key even though "name" is the candidate.
        let entry = PayloadEntry {
            name: Some("mobile".to_string()),
            ..Default::default()
        };
        let config = config();
        let series = resolve_series(&config, &entry, "name").unwrap();
        assert_eq!(series.label.as_deref(), Some("Mobile"));
    }

    #[test]
    fn test_redirect_wins_even_when_candidate_key_has_entry() {
        let config = ChartConfig::new()
            .with("name", SeriesConfig::new().label("Literal Name"))
            .with("mobile", SeriesConfig::new().label("Mobile"));
        let entry = PayloadEntry {
            name: Some("mobile".to_string()),
            ..Default::default()
        };
        let series = resolve_series(&config, &entry, "name").unwrap();
        assert_eq!(series.label.as_deref(), Some("Mobile"));
    }

    #[test]
    fn test_nested_datum_redirect() {
        let mut datum = Map::new();
        datum.insert("browser".to_string(), json!("chrome"));
        let entry = PayloadEntry {
            payload: Some(datum),
            ..Default::default()
        };
        let config = config();
        let series = resolve_series(&config, &entry, "browser").unwrap();
        assert_eq!(series.label.as_deref(), Some("Chrome"));
    }

    #[test]
    fn test_redirect_to_absent_key_falls_back_to_candidate() {
        // "desktop" redirects to "unknown-series"; that key has no config
        // entry, so the candidate key's entry still applies.
        let mut datum = Map::new();
        datum.insert("desktop".to_string(), json!("unknown-series"));
        let entry = PayloadEntry {
            payload: Some(datum),
            ..Default::default()
        };
        let config = config();
        let series = resolve_series(&config, &entry, "desktop").unwrap();
        assert_eq!(series.label.as_deref(), Some("Desktop"));
    }

    #[test]
    fn test_numeric_value_does_not_redirect() {
        let entry = PayloadEntry {
            value: Some(PayloadValue::Number(42.0)),
            ..Default::default()
        };
        // A numeric "value" field is not a string, so the candidate key is
        // used as-is.
        assert!(resolve_series(&config(), &entry, "value").is_none());
    }

    #[test]
    fn test_legend_entry_redirect() {
        let entry = LegendEntry {
            value: Some("chrome".to_string()),
            ..Default::default()
        };
        let config = config();
        let series = resolve_series(&config, &entry, "value").unwrap();
        assert_eq!(series.label.as_deref(), Some("Chrome"));
    }

    #[test]
    fn test_series_color_for_theme() {
        let single = SeriesColor::Single("#abc".to_string());
        assert_eq!(single.for_theme(Theme::Light), "#abc");
        assert_eq!(single.for_theme(Theme::Dark), "#abc");

        let themed = SeriesColor::Themed {
            light: "#111".to_string(),
            dark: "#eee".to_string(),
        };
        assert_eq!(themed.for_theme(Theme::Light), "#111");
        assert_eq!(themed.for_theme(Theme::Dark), "#eee");
    }

    #[test]
    fn test_config_preserves_order() {
        let config = config();
        let keys: Vec<&str> = config.keys().collect();
        assert_eq!(keys, ["desktop", "mobile", "chrome"]);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(186.0), "186");
        assert_eq!(group_thousands(1234.0), "1,234");
        assert_eq!(group_thousands(1234567.5), "1,234,567.5");
        assert_eq!(group_thousands(-9876.0), "-9,876");
    }

    #[test]
    fn test_payload_value_display() {
        assert_eq!(PayloadValue::Number(12500.0).to_string(), "12,500");
        assert_eq!(PayloadValue::Text("n/a".to_string()).to_string(), "n/a");
    }

    #[test]
    fn test_payload_entry_from_hover_json() {
        let frame = json!({
            "value": 186,
            "name": "desktop",
            "dataKey": "desktop",
            "color": "#2563eb",
            "payload": { "month": "January", "desktop": 186, "mobile": 80 }
        });
        let entry: PayloadEntry = serde_json::from_value(frame).unwrap();
        assert_eq!(entry.value, Some(PayloadValue::Number(186.0)));
        assert_eq!(entry.data_key.as_deref(), Some("desktop"));
        assert_eq!(entry.nested_field("month"), Some("January"));
        assert_eq!(entry.nested_field("desktop"), None);
    }
}
