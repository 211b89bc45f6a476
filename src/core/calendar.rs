//! Month grid arithmetic and per-day markers for the calendar screen.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{DailyAggregate, DailyAggregates, DATE_KEY_FORMAT};
use crate::errors::{LedgerError, LedgerResult};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Column headers in display order.
    pub fn headers(self) -> [&'static str; 7] {
        match self {
            WeekStart::Sunday => ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
            WeekStart::Monday => ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
        }
    }
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_in_month(year: i32, month: u32) -> LedgerResult<u32> {
    match month {
        2 if is_leap_year(year) => Ok(29),
        2 => Ok(28),
        4 | 6 | 9 | 11 => Ok(30),
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        _ => Err(invalid_month(month)),
    }
}

/// Number of empty cells before day 1 in a grid starting on `week_start`.
pub fn first_weekday_offset(year: i32, month: u32, week_start: WeekStart) -> LedgerResult<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| invalid_month(month))?;
    let offset = match week_start {
        WeekStart::Sunday => first.weekday().num_days_from_sunday(),
        WeekStart::Monday => first.weekday().num_days_from_monday(),
    };
    Ok(offset)
}

fn invalid_month(month: u32) -> LedgerError {
    LedgerError::InvalidInput(format!("month must be between 1 and 12, got {}", month))
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DayMarker {
    None,
    Income,
    Expense,
    Both,
}

impl DayMarker {
    pub fn from_aggregate(aggregate: Option<&DailyAggregate>) -> Self {
        match aggregate.map(|day| (day.has_income(), day.has_expense())) {
            Some((true, true)) => DayMarker::Both,
            Some((true, false)) => DayMarker::Income,
            Some((false, true)) => DayMarker::Expense,
            _ => DayMarker::None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            DayMarker::None => " ",
            DayMarker::Income => "+",
            DayMarker::Expense => "-",
            DayMarker::Both => "±",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CalendarCell {
    Padding,
    Day {
        day: u32,
        date_key: String,
        marker: DayMarker,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub week_start: WeekStart,
    pub cells: Vec<CalendarCell>,
}

impl CalendarMonth {
    pub fn build(
        year: i32,
        month: u32,
        week_start: WeekStart,
        aggregates: &DailyAggregates,
    ) -> LedgerResult<Self> {
        let total_days = days_in_month(year, month)?;
        let padding = first_weekday_offset(year, month, week_start)?;

        let mut cells = Vec::with_capacity((padding + total_days) as usize);
        cells.extend((0..padding).map(|_| CalendarCell::Padding));
        for day in 1..=total_days {
            let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
                LedgerError::InvalidInput(format!("invalid date {}-{:02}-{:02}", year, month, day))
            })?;
            let date_key = date.format(DATE_KEY_FORMAT).to_string();
            let marker = DayMarker::from_aggregate(aggregates.get(&date_key));
            cells.push(CalendarCell::Day {
                day,
                date_key,
                marker,
            });
        }

        tracing::debug!(year, month, padding, days = total_days, "built calendar month");
        Ok(Self {
            year,
            month,
            week_start,
            cells,
        })
    }

    pub fn day_cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.cells
            .iter()
            .filter(|cell| matches!(cell, CalendarCell::Day { .. }))
    }

    /// `(year, month)` of the previous page.
    pub fn previous(&self) -> (i32, u32) {
        if self.month == 1 {
            (self.year - 1, 12)
        } else {
            (self.year, self.month - 1)
        }
    }

    /// `(year, month)` of the next page.
    pub fn next(&self) -> (i32, u32) {
        if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        }
    }

    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:^28}", self.title())?;
        for header in self.week_start.headers() {
            write!(f, " {} ", header)?;
        }
        for (idx, cell) in self.cells.iter().enumerate() {
            if idx % 7 == 0 {
                writeln!(f)?;
            }
            match cell {
                CalendarCell::Padding => write!(f, "    ")?,
                CalendarCell::Day { day, marker, .. } => {
                    write!(f, "{:>2}{} ", day, marker.symbol())?
                }
            }
        }
        writeln!(f)
    }
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Invalid Month",
    }
}

/// Readout for the selected day; `None` when there is nothing to show.
pub fn selected_day_summary(aggregates: &DailyAggregates, date: NaiveDate) -> Option<DailyAggregate> {
    let key = date.format(DATE_KEY_FORMAT).to_string();
    aggregates
        .get(&key)
        .filter(|day| !day.is_empty())
        .copied()
}
