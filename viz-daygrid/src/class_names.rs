//! Style-class table for the grid's elements.
//!
//! The engine ships neutral defaults; embedders replace them per element via
//! `GridClassOverrides`, where a supplied value wins over the base key.

/// One style-class string per rendered grid element.
#[derive(Clone, PartialEq, Debug)]
pub struct GridClassNames {
    pub months: String,
    pub month: String,
    pub caption: String,
    pub table: String,
    pub head_row: String,
    pub head_cell: String,
    pub row: String,
    pub cell: String,
    pub day: String,
    pub day_selected: String,
    pub day_today: String,
    pub day_outside: String,
    pub day_disabled: String,
}

impl Default for GridClassNames {
    fn default() -> Self {
        Self {
            months: "daygrid-months".into(),
            month: "daygrid-month".into(),
            caption: "daygrid-caption".into(),
            table: "daygrid-table".into(),
            head_row: "daygrid-head-row".into(),
            head_cell: "daygrid-head-cell".into(),
            row: "daygrid-row".into(),
            cell: "daygrid-cell".into(),
            day: "daygrid-day".into(),
            day_selected: "daygrid-day-selected".into(),
            day_today: "daygrid-day-today".into(),
            day_outside: "daygrid-day-outside".into(),
            day_disabled: "daygrid-day-disabled".into(),
        }
    }
}

/// Partial class-name table; `None` keeps the base value for that element.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct GridClassOverrides {
    pub months: Option<String>,
    pub month: Option<String>,
    pub caption: Option<String>,
    pub table: Option<String>,
    pub head_row: Option<String>,
    pub head_cell: Option<String>,
    pub row: Option<String>,
    pub cell: Option<String>,
    pub day: Option<String>,
    pub day_selected: Option<String>,
    pub day_today: Option<String>,
    pub day_outside: Option<String>,
    pub day_disabled: Option<String>,
}

impl GridClassNames {
    /// Apply `overrides` on top of `self`, key by key.
    pub fn merged(&self, overrides: &GridClassOverrides) -> GridClassNames {
        GridClassNames {
            months: overrides.months.clone().unwrap_or_else(|| self.months.clone()),
            month: overrides.month.clone().unwrap_or_else(|| self.month.clone()),
            caption: overrides.caption.clone().unwrap_or_else(|| self.caption.clone()),
            table: overrides.table.clone().unwrap_or_else(|| self.table.clone()),
            head_row: overrides.head_row.clone().unwrap_or_else(|| self.head_row.clone()),
            head_cell: overrides.head_cell.clone().unwrap_or_else(|| self.head_cell.clone()),
            row: overrides.row.clone().unwrap_or_else(|| self.row.clone()),
            cell: overrides.cell.clone().unwrap_or_else(|| self.cell.clone()),
            day: overrides.day.clone().unwrap_or_else(|| self.day.clone()),
            day_selected: overrides
                .day_selected
                .clone()
                .unwrap_or_else(|| self.day_selected.clone()),
            day_today: overrides
                .day_today
                .clone()
                .unwrap_or_else(|| self.day_today.clone()),
            day_outside: overrides
                .day_outside
                .clone()
                .unwrap_or_else(|| self.day_outside.clone()),
            day_disabled: overrides
                .day_disabled
                .clone()
                .unwrap_or_else(|| self.day_disabled.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merged_override_wins() {
        let base = GridClassNames::default();
        let overrides = GridClassOverrides {
            day_selected: Some("cal-selected".to_string()),
            ..Default::default()
        };
        let merged = base.merged(&overrides);
        assert_eq!(merged.day_selected, "cal-selected");
        // Untouched keys keep the base value
        assert_eq!(merged.day, base.day);
        assert_eq!(merged.caption, base.caption);
    }

    #[test]
    fn test_merged_empty_overrides_is_identity() {
        let base = GridClassNames::default();
        assert_eq!(base.merged(&GridClassOverrides::default()), base);
    }
}
