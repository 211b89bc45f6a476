//! Daily income/expense aggregation.

use std::sync::Arc;

use crate::core::classify::{classify, Classification};
use crate::domain::{DailyAggregate, DailyAggregates, TransactionRecord};

/// Folds `transactions` into per-date totals keyed by the record's date string.
///
/// Dates are grouped by exact string equality, so `"2026-01-05"` and
/// `"2026-1-5"` land in different entries. A NaN amount poisons its day.
pub fn aggregate(transactions: &[TransactionRecord]) -> DailyAggregates {
    let mut days = DailyAggregates::new();
    for record in transactions {
        let day = days.entry(record.date.clone()).or_default();
        match classify(record) {
            Classification::Income => day.add_income(record.amount),
            Classification::Expense => day.add_expense(record.amount),
        }
    }
    tracing::debug!(
        records = transactions.len(),
        days = days.len(),
        "aggregated daily totals"
    );
    days
}

/// Looks up one day. A missing key means no transactions that day.
pub fn day<'a>(aggregates: &'a DailyAggregates, date: &str) -> Option<&'a DailyAggregate> {
    aggregates.get(date)
}

/// Memoizes [`aggregate`] against the identity of the input collection.
///
/// A new `Arc` with equal contents still triggers a rebuild; only handing back
/// the same allocation reuses the previous result.
#[derive(Debug, Default)]
pub struct DailyAggregateCache {
    source: Option<Arc<[TransactionRecord]>>,
    aggregates: DailyAggregates,
    rebuilds: usize,
}

impl DailyAggregateCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, transactions: &Arc<[TransactionRecord]>) -> &DailyAggregates {
        let fresh = self
            .source
            .as_ref()
            .is_some_and(|seen| Arc::ptr_eq(seen, transactions));
        if fresh {
            tracing::trace!("daily aggregate cache hit");
        } else {
            tracing::trace!("daily aggregate cache miss");
            self.aggregates = aggregate(transactions);
            self.source = Some(Arc::clone(transactions));
            self.rebuilds += 1;
        }
        &self.aggregates
    }

    pub fn invalidate(&mut self) {
        self.source = None;
        self.aggregates.clear();
    }

    /// Number of times the aggregate has been recomputed.
    pub fn rebuilds(&self) -> usize {
        self.rebuilds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionKind;

    #[test]
    fn folds_same_day_into_one_entry() {
        let txns = vec![
            TransactionRecord::new("2026-01-05", 100.0).with_kind(TransactionKind::Income),
            TransactionRecord::new("2026-01-05", 30.0).with_kind(TransactionKind::Expense),
        ];
        let days = aggregate(&txns);
        assert_eq!(days.len(), 1);
        let totals = day(&days, "2026-01-05").unwrap();
        assert_eq!(totals.income, 100.0);
        assert_eq!(totals.expense, 30.0);
        assert_eq!(totals.balance, 70.0);
    }

    #[test]
    fn nan_amount_propagates_without_failing() {
        let txns = vec![
            TransactionRecord::new("2026-01-05", 10.0),
            TransactionRecord::new("2026-01-05", f64::NAN),
        ];
        let days = aggregate(&txns);
        let totals = day(&days, "2026-01-05").unwrap();
        assert!(totals.expense.is_nan());
        assert!(totals.balance.is_nan());
    }

    #[test]
    fn cache_rebuilds_only_on_identity_change() {
        let txns: Arc<[TransactionRecord]> =
            Arc::from(vec![TransactionRecord::new("2026-01-05", 4.0)]);
        let mut cache = DailyAggregateCache::new();
        assert_eq!(cache.get(&txns).len(), 1);
        cache.get(&txns);
        assert_eq!(cache.rebuilds(), 1);

        let copy: Arc<[TransactionRecord]> = Arc::from(txns.to_vec());
        cache.get(&copy);
        assert_eq!(cache.rebuilds(), 2);

        cache.invalidate();
        cache.get(&copy);
        assert_eq!(cache.rebuilds(), 3);
    }
}
