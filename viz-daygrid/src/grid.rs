//! Month arithmetic and week-grid generation.

use chrono::{Datelike, NaiveDate, TimeDelta};

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap()
}

/// First day of the month before the one containing `date`.
pub fn prev_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 1 {
        (date.year() - 1, 12)
    } else {
        (date.year(), date.month() - 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

/// First day of the month after the one containing `date`.
pub fn next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

/// Caption label for a displayed month, e.g. "March 2026".
pub fn month_caption(month: NaiveDate) -> String {
    month.format("%B %Y").to_string()
}

/// The weeks covering the month of `month`, Sunday-first.
///
/// Each week holds exactly seven consecutive days; the first and last weeks
/// are padded with days from the adjacent months so every row is full.
pub fn month_grid(month: NaiveDate) -> Vec<[NaiveDate; 7]> {
    let first = month_start(month);
    let last = next_month(first) - TimeDelta::try_days(1).unwrap();
    let offset = first.weekday().num_days_from_sunday() as i64;
    let mut cursor = first - TimeDelta::try_days(offset).unwrap();

    let mut weeks = Vec::new();
    while cursor <= last {
        let mut week = [cursor; 7];
        for slot in week.iter_mut() {
            *slot = cursor;
            cursor += TimeDelta::try_days(1).unwrap();
        }
        weeks.push(week);
    }
    weeks
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate, Weekday};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_month_start() {
        assert_eq!(month_start(d(2026, 3, 17)), d(2026, 3, 1));
        assert_eq!(month_start(d(2026, 3, 1)), d(2026, 3, 1));
    }

    #[test]
    fn test_prev_next_round_trip() {
        let shown = d(2026, 6, 1);
        assert_eq!(prev_month(next_month(shown)), shown);
        assert_eq!(next_month(prev_month(shown)), shown);
    }

    #[test]
    fn test_month_transitions_cross_year() {
        assert_eq!(next_month(d(2025, 12, 9)), d(2026, 1, 1));
        assert_eq!(prev_month(d(2026, 1, 9)), d(2025, 12, 1));
    }

    #[test]
    fn test_month_caption() {
        assert_eq!(month_caption(d(2026, 3, 1)), "March 2026");
    }

    #[test]
    fn test_grid_rows_start_on_sunday() {
        for month in [d(2026, 2, 1), d(2026, 8, 1), d(2024, 2, 1)] {
            let weeks = month_grid(month);
            for week in &weeks {
                assert_eq!(week[0].weekday(), Weekday::Sun);
                assert_eq!(week[6].weekday(), Weekday::Sat);
            }
        }
    }

    #[test]
    fn test_grid_covers_whole_month() {
        let weeks = month_grid(d(2026, 8, 1));
        let days: Vec<NaiveDate> = weeks.iter().flatten().copied().collect();
        assert!(days.contains(&d(2026, 8, 1)));
        assert!(days.contains(&d(2026, 8, 31)));
        // Consecutive days with no gaps
        for pair in days.windows(2) {
            assert_eq!(pair[1] - pair[0], chrono::TimeDelta::try_days(1).unwrap());
        }
    }

    #[test]
    fn test_grid_february() {
        // Feb 2026 starts on a Sunday and has 28 days: exactly 4 rows
        assert_eq!(month_grid(d(2026, 2, 1)).len(), 4);
        // Feb 2024 is a leap month starting on a Thursday: 5 rows
        assert_eq!(month_grid(d(2024, 2, 1)).len(), 5);
    }
}
