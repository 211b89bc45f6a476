//! Date-range and multi-select category filtering for transaction history.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::{DateWindow, TransactionRecord};

/// Multi-select category picker. An empty selection matches everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryFilter {
    selected: BTreeSet<String>,
}

impl CategoryFilter {
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected: categories.into_iter().map(Into::into).collect(),
        }
    }

    /// Adds the category if absent, removes it otherwise. Returns whether it is now selected.
    pub fn toggle(&mut self, category: &str) -> bool {
        if self.selected.remove(category) {
            false
        } else {
            self.selected.insert(category.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, category: &str) -> bool {
        self.selected.contains(category)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn selected(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    pub fn matches(&self, record: &TransactionRecord) -> bool {
        if self.selected.is_empty() {
            return true;
        }
        record
            .category
            .as_deref()
            .is_some_and(|category| self.selected.contains(category))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<DateWindow>,
    #[serde(default)]
    pub categories: CategoryFilter,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window(mut self, window: DateWindow) -> Self {
        self.window = Some(window);
        self
    }

    pub fn with_categories(mut self, categories: CategoryFilter) -> Self {
        self.categories = categories;
        self
    }

    /// Records with an unparseable date only pass when no window is set.
    pub fn matches(&self, record: &TransactionRecord) -> bool {
        let in_window = match &self.window {
            None => true,
            Some(window) => record
                .parsed_date()
                .is_some_and(|date| window.contains(date)),
        };
        in_window && self.categories.matches(record)
    }

    /// Keeps matching records in their original order.
    pub fn apply(&self, transactions: &[TransactionRecord]) -> Vec<TransactionRecord> {
        let kept: Vec<TransactionRecord> = transactions
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect();
        tracing::debug!(
            total = transactions.len(),
            kept = kept.len(),
            "filtered transactions"
        );
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut filter = CategoryFilter::default();
        assert!(filter.toggle("Food"));
        assert!(filter.is_selected("Food"));
        assert!(!filter.toggle("Food"));
        assert!(filter.is_empty());
    }

    #[test]
    fn uncategorized_records_fail_non_empty_selection() {
        let filter = CategoryFilter::new(["Food"]);
        assert!(!filter.matches(&TransactionRecord::new("2026-01-05", 1.0)));
        assert!(CategoryFilter::default().matches(&TransactionRecord::new("2026-01-05", 1.0)));
    }
}
