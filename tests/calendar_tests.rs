mod common;

use chrono::NaiveDate;
use family_ledger::{
    aggregate,
    core::{
        calendar::{days_in_month, selected_day_summary},
        services::SummaryService,
        CalendarCell, CalendarMonth, DayMarker, WeekStart,
    },
    domain::{DailyAggregate, DailyAggregates},
    LedgerError,
};

fn marker_for(month: &CalendarMonth, key: &str) -> Option<DayMarker> {
    month.cells.iter().find_map(|cell| match cell {
        CalendarCell::Day {
            date_key, marker, ..
        } if date_key == key => Some(*marker),
        _ => None,
    })
}

#[test]
fn february_2026_starts_on_sunday() {
    let month = CalendarMonth::build(2026, 2, WeekStart::Sunday, &DailyAggregates::new())
        .expect("valid month");
    assert_eq!(month.cells.len(), 28);
    assert!(matches!(month.cells[0], CalendarCell::Day { day: 1, .. }));

    let monday = CalendarMonth::build(2026, 2, WeekStart::Monday, &DailyAggregates::new())
        .expect("valid month");
    assert_eq!(monday.cells.len(), 34);
    assert_eq!(monday.day_cells().count(), 28);
}

#[test]
fn markers_reflect_daily_totals() {
    let month = SummaryService::calendar_month(
        &common::january_household(),
        2026,
        1,
        WeekStart::Sunday,
    )
    .expect("calendar builds");
    assert_eq!(month.day_cells().count(), days_in_month(2026, 1).unwrap() as usize);
    assert_eq!(marker_for(&month, "2026-01-02"), Some(DayMarker::Both));
    assert_eq!(marker_for(&month, "2026-01-06"), Some(DayMarker::Expense));
    assert_eq!(marker_for(&month, "2026-01-03"), Some(DayMarker::None));
    assert_eq!(month.title(), "January 2026");
}

#[test]
fn invalid_month_is_rejected() {
    let err = CalendarMonth::build(2026, 13, WeekStart::Sunday, &DailyAggregates::new())
        .expect_err("month 13 must fail");
    assert!(matches!(err, LedgerError::InvalidInput(_)));
}

#[test]
fn selected_day_treats_zero_entry_as_nothing() {
    let mut days = aggregate(&common::january_household());
    days.insert("2026-01-15".into(), DailyAggregate::default());

    let date = |d| NaiveDate::from_ymd_opt(2026, 1, d).unwrap();
    assert!(selected_day_summary(&days, date(15)).is_none());
    assert!(selected_day_summary(&days, date(16)).is_none());
    let summary = selected_day_summary(&days, date(5)).expect("activity on the 5th");
    assert_eq!(summary.balance, 8.0);
}

#[test]
fn grid_renders_markers() {
    let days = aggregate(&common::january_household());
    let month = CalendarMonth::build(2026, 1, WeekStart::Sunday, &days).unwrap();
    let rendered = month.to_string();
    assert!(rendered.contains("January 2026"));
    assert!(rendered.contains(" 2±"));
    assert!(rendered.contains(" 6-"));
    assert!(rendered.contains(" 5±"));
}
