//! Per-day income/expense totals derived from transaction records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Date key (`YYYY-MM-DD`) to that day's totals, ordered chronologically.
pub type DailyAggregates = BTreeMap<String, DailyAggregate>;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct DailyAggregate {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

impl DailyAggregate {
    pub fn add_income(&mut self, amount: f64) {
        self.income += amount;
        self.balance += amount;
    }

    pub fn add_expense(&mut self, amount: f64) {
        self.expense += amount;
        self.balance -= amount;
    }

    pub fn has_income(&self) -> bool {
        self.income > 0.0
    }

    pub fn has_expense(&self) -> bool {
        self.expense > 0.0
    }

    /// True when neither side carries anything worth showing.
    pub fn is_empty(&self) -> bool {
        !self.has_income() && !self.has_expense()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_tracks_both_sides() {
        let mut day = DailyAggregate::default();
        day.add_income(100.0);
        day.add_expense(30.0);
        assert_eq!(
            day,
            DailyAggregate {
                income: 100.0,
                expense: 30.0,
                balance: 70.0
            }
        );
        assert!(!day.is_empty());
    }
}
