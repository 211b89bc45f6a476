use std::collections::BTreeSet;

use crate::core::classify::{self, ClassificationReason};
use crate::core::filter::TransactionFilter;
use crate::domain::TransactionRecord;

pub struct TransactionService;

impl TransactionService {
    pub fn filter(
        transactions: &[TransactionRecord],
        filter: &TransactionFilter,
    ) -> Vec<TransactionRecord> {
        filter.apply(transactions)
    }

    /// Distinct categories present in `transactions`, for the multi-select picker.
    pub fn categories(transactions: &[TransactionRecord]) -> Vec<String> {
        transactions
            .iter()
            .filter_map(|record| record.category.as_deref())
            .filter(|category| !category.trim().is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Pairs each record with the rule that classified it, in input order.
    pub fn explain<'a>(
        transactions: &'a [TransactionRecord],
    ) -> Vec<(&'a TransactionRecord, ClassificationReason)> {
        transactions
            .iter()
            .map(|record| (record, classify::explain(record)))
            .collect()
    }

    /// Newest first; records with equal dates keep their relative order.
    pub fn sorted_newest_first(transactions: &[TransactionRecord]) -> Vec<TransactionRecord> {
        let mut sorted = transactions.to_vec();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }
}
