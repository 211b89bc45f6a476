//! Savings goals and their progress arithmetic.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;
use crate::errors::{LedgerError, LedgerResult};

pub const MAX_GOAL_NAME_LEN: usize = 256;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingsGoal {
    pub id: Uuid,
    pub name: String,
    pub target_amount: f64,
    pub saved_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    pub created_on: NaiveDate,
}

impl SavingsGoal {
    pub fn new(
        name: impl Into<String>,
        target_amount: f64,
        created_on: NaiveDate,
        deadline: Option<NaiveDate>,
    ) -> LedgerResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(LedgerError::InvalidInput(
                "goal name cannot be empty".into(),
            ));
        }
        if name.chars().count() > MAX_GOAL_NAME_LEN {
            return Err(LedgerError::InvalidInput(format!(
                "goal name cannot exceed {} characters",
                MAX_GOAL_NAME_LEN
            )));
        }
        ensure_positive(target_amount, "goal target")?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            target_amount,
            saved_amount: 0.0,
            deadline,
            created_on,
        })
    }

    pub fn contribute(&mut self, amount: f64) -> LedgerResult<()> {
        ensure_positive(amount, "contribution")?;
        self.saved_amount += amount;
        Ok(())
    }

    pub fn withdraw(&mut self, amount: f64) -> LedgerResult<()> {
        ensure_positive(amount, "withdrawal")?;
        if amount > self.saved_amount {
            return Err(LedgerError::InvalidInput(format!(
                "cannot withdraw {:.2} from goal `{}` holding {:.2}",
                amount, self.name, self.saved_amount
            )));
        }
        self.saved_amount -= amount;
        Ok(())
    }

    /// Fraction saved, clamped to `[0, 1]`.
    pub fn progress(&self) -> f64 {
        (self.saved_amount / self.target_amount).clamp(0.0, 1.0)
    }

    pub fn percent(&self) -> u8 {
        (self.progress() * 100.0).floor() as u8
    }

    pub fn remaining(&self) -> f64 {
        (self.target_amount - self.saved_amount).max(0.0)
    }

    pub fn is_complete(&self) -> bool {
        self.saved_amount >= self.target_amount
    }

    pub fn status(&self, reference: NaiveDate) -> GoalStatus {
        if self.is_complete() {
            GoalStatus::Completed
        } else if self.deadline.is_some_and(|deadline| deadline < reference) {
            GoalStatus::Overdue
        } else {
            GoalStatus::OnTrack
        }
    }
}

fn ensure_positive(amount: f64, what: &str) -> LedgerResult<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(LedgerError::InvalidInput(format!(
            "{} must be a positive amount",
            what
        )));
    }
    Ok(())
}

impl Identifiable for SavingsGoal {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for SavingsGoal {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for SavingsGoal {
    fn display_label(&self) -> String {
        format!(
            "{} ({:.2}/{:.2}, {}%)",
            self.name,
            self.saved_amount,
            self.target_amount,
            self.percent()
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GoalStatus {
    OnTrack,
    Overdue,
    Completed,
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GoalStatus::OnTrack => "On track",
            GoalStatus::Overdue => "Overdue",
            GoalStatus::Completed => "Completed",
        };
        f.write_str(label)
    }
}
