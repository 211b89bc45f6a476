use chrono::NaiveDate;

use crate::core::calendar::{self, CalendarMonth, WeekStart};
use crate::core::daily;
use crate::core::filter::TransactionFilter;
use crate::domain::{DailyAggregate, DailyAggregates, TransactionRecord};
use crate::errors::LedgerResult;

pub struct SummaryService;

impl SummaryService {
    pub fn daily_totals(transactions: &[TransactionRecord]) -> DailyAggregates {
        daily::aggregate(transactions)
    }

    pub fn filtered_daily_totals(
        transactions: &[TransactionRecord],
        filter: &TransactionFilter,
    ) -> DailyAggregates {
        daily::aggregate(&filter.apply(transactions))
    }

    /// Sums every day in `aggregates` into a single total.
    pub fn period_totals(aggregates: &DailyAggregates) -> DailyAggregate {
        aggregates
            .values()
            .fold(DailyAggregate::default(), |mut acc, day| {
                acc.income += day.income;
                acc.expense += day.expense;
                acc.balance += day.balance;
                acc
            })
    }

    pub fn calendar_month(
        transactions: &[TransactionRecord],
        year: i32,
        month: u32,
        week_start: WeekStart,
    ) -> LedgerResult<CalendarMonth> {
        CalendarMonth::build(year, month, week_start, &daily::aggregate(transactions))
    }

    pub fn selected_day(aggregates: &DailyAggregates, date: NaiveDate) -> Option<DailyAggregate> {
        calendar::selected_day_summary(aggregates, date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DateWindow, TransactionKind};

    fn sample() -> Vec<TransactionRecord> {
        vec![
            TransactionRecord::new("2026-01-05", 100.0).with_kind(TransactionKind::Income),
            TransactionRecord::new("2026-01-05", 30.0).with_category("Food"),
            TransactionRecord::new("2026-02-01", 20.0).with_category("Food"),
        ]
    }

    #[test]
    fn period_totals_sum_all_days() {
        let days = SummaryService::daily_totals(&sample());
        let total = SummaryService::period_totals(&days);
        assert_eq!(total.income, 100.0);
        assert_eq!(total.expense, 50.0);
        assert_eq!(total.balance, 50.0);
    }

    #[test]
    fn filtered_totals_respect_window() {
        let window = DateWindow::new(
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
        )
        .expect("valid window");
        let filter = TransactionFilter::new().with_window(window);
        let days = SummaryService::filtered_daily_totals(&sample(), &filter);
        assert_eq!(days.len(), 1);
        assert!(days.contains_key("2026-01-05"));
    }
}
