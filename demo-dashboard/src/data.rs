//! Embedded traffic data.

use anyhow::{anyhow, Context};

/// One month of visitor counts.
#[derive(Clone, Debug, PartialEq)]
pub struct TrafficRow {
    pub month: String,
    pub desktop: f64,
    pub mobile: f64,
}

/// Parse the embedded monthly.csv (month,desktop,mobile with header row).
pub fn parse_monthly_csv(csv_data: &str) -> anyhow::Result<Vec<TrafficRow>> {
    let mut rows = Vec::new();

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_data.as_bytes());

    for (line, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("traffic row {}", line + 1))?;
        let month = record
            .get(0)
            .ok_or_else(|| anyhow!("traffic row {}: missing month", line + 1))?
            .trim();
        if month.is_empty() {
            continue;
        }
        let desktop: f64 = record
            .get(1)
            .unwrap_or("")
            .trim()
            .parse()
            .with_context(|| format!("traffic row {}: bad desktop count", line + 1))?;
        let mobile: f64 = record
            .get(2)
            .unwrap_or("")
            .trim()
            .parse()
            .with_context(|| format!("traffic row {}: bad mobile count", line + 1))?;

        rows.push(TrafficRow {
            month: month.to_string(),
            desktop,
            mobile,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_monthly_csv() {
        let rows = parse_monthly_csv("month,desktop,mobile\nJanuary,186,80\nFebruary,305,200\n")
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].month, "January");
        assert_eq!(rows[0].desktop, 186.0);
        assert_eq!(rows[1].mobile, 200.0);
    }

    #[test]
    fn test_parse_skips_blank_months() {
        let rows = parse_monthly_csv("month,desktop,mobile\n,1,2\nMarch,237,120\n").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].month, "March");
    }

    #[test]
    fn test_parse_rejects_bad_counts() {
        let err = parse_monthly_csv("month,desktop,mobile\nJanuary,not-a-number,80\n")
            .unwrap_err();
        assert!(err.to_string().contains("bad desktop count"));
    }
}
