use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, LedgerResult};

/// Inclusive date range used to narrow transaction history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> LedgerResult<Self> {
        if end < start {
            return Err(LedgerError::InvalidInput(
                "window end must not be before start".into(),
            ));
        }
        Ok(Self { start, end })
    }

    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn from_preset(preset: RangePreset, reference: NaiveDate) -> LedgerResult<Self> {
        match preset {
            RangePreset::Today => Ok(Self::single_day(reference)),
            RangePreset::ThisWeek => {
                let offset = reference.weekday().num_days_from_monday() as i64;
                let start = reference - Duration::days(offset);
                Self::new(start, start + Duration::days(6))
            }
            RangePreset::ThisMonth => {
                let start = first_of_month(reference.year(), reference.month())?;
                let (next_year, next_month) = if reference.month() == 12 {
                    (reference.year() + 1, 1)
                } else {
                    (reference.year(), reference.month() + 1)
                };
                let end = first_of_month(next_year, next_month)? - Duration::days(1);
                Self::new(start, end)
            }
            RangePreset::ThisYear => {
                let start = first_of_month(reference.year(), 1)?;
                let end = first_of_month(reference.year() + 1, 1)? - Duration::days(1);
                Self::new(start, end)
            }
            RangePreset::LastDays(0) => Err(LedgerError::InvalidInput(
                "day count must be at least 1".into(),
            )),
            RangePreset::LastDays(count) => {
                let start = reference
                    .checked_sub_signed(Duration::days(count as i64 - 1))
                    .ok_or_else(|| {
                        LedgerError::InvalidInput(format!("{} days reaches past the calendar", count))
                    })?;
                Self::new(start, reference)
            }
        }
    }
}

fn first_of_month(year: i32, month: u32) -> LedgerResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        LedgerError::InvalidInput(format!("invalid month {}-{:02}", year, month))
    })
}

/// Quick picks offered by the history screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RangePreset {
    Today,
    ThisWeek,
    ThisMonth,
    ThisYear,
    LastDays(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn window_is_inclusive() {
        let window = DateWindow::new(day(2026, 1, 1), day(2026, 1, 31)).unwrap();
        assert!(window.contains(day(2026, 1, 1)));
        assert!(window.contains(day(2026, 1, 31)));
        assert!(!window.contains(day(2026, 2, 1)));
        assert_eq!(window.days(), 31);
    }

    #[test]
    fn rejects_inverted_window() {
        assert!(DateWindow::new(day(2026, 2, 1), day(2026, 1, 1)).is_err());
    }

    #[test]
    fn this_week_starts_on_monday() {
        // 2026-01-07 is a Wednesday.
        let window = DateWindow::from_preset(RangePreset::ThisWeek, day(2026, 1, 7)).unwrap();
        assert_eq!(window.start, day(2026, 1, 5));
        assert_eq!(window.end, day(2026, 1, 11));
    }

    #[test]
    fn this_month_handles_december_and_leap_february() {
        let december = DateWindow::from_preset(RangePreset::ThisMonth, day(2025, 12, 9)).unwrap();
        assert_eq!(december.end, day(2025, 12, 31));
        let february = DateWindow::from_preset(RangePreset::ThisMonth, day(2028, 2, 3)).unwrap();
        assert_eq!(february.end, day(2028, 2, 29));
    }

    #[test]
    fn last_days_ends_on_reference() {
        let window = DateWindow::from_preset(RangePreset::LastDays(7), day(2026, 1, 10)).unwrap();
        assert_eq!(window.start, day(2026, 1, 4));
        assert_eq!(window.days(), 7);
        assert!(DateWindow::from_preset(RangePreset::LastDays(0), day(2026, 1, 10)).is_err());
    }
}
