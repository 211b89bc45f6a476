use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{GoalStatus, SavingsGoal};
use crate::errors::{LedgerError, LedgerResult};

/// In-memory book of savings goals.
#[derive(Debug, Clone, Default)]
pub struct GoalService {
    goals: Vec<SavingsGoal>,
}

impl GoalService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_goals(goals: Vec<SavingsGoal>) -> Self {
        Self { goals }
    }

    pub fn add(&mut self, goal: SavingsGoal) -> Uuid {
        let id = goal.id;
        tracing::info!(goal = %goal.name, target = goal.target_amount, "added savings goal");
        self.goals.push(goal);
        id
    }

    pub fn get(&self, id: Uuid) -> Option<&SavingsGoal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    pub fn contribute(&mut self, id: Uuid, amount: f64) -> LedgerResult<&SavingsGoal> {
        let goal = self.find_mut(id)?;
        goal.contribute(amount)?;
        if goal.is_complete() {
            tracing::info!(goal = %goal.name, "savings goal reached");
        }
        Ok(goal)
    }

    pub fn withdraw(&mut self, id: Uuid, amount: f64) -> LedgerResult<&SavingsGoal> {
        let goal = self.find_mut(id)?;
        goal.withdraw(amount)?;
        Ok(goal)
    }

    pub fn remove(&mut self, id: Uuid) -> LedgerResult<SavingsGoal> {
        let idx = self
            .goals
            .iter()
            .position(|goal| goal.id == id)
            .ok_or_else(|| not_found(id))?;
        Ok(self.goals.remove(idx))
    }

    /// Open goals first, each group ordered by deadline with undated goals last.
    pub fn list(&self) -> Vec<&SavingsGoal> {
        let mut goals: Vec<&SavingsGoal> = self.goals.iter().collect();
        goals.sort_by(|a, b| {
            a.is_complete()
                .cmp(&b.is_complete())
                .then_with(|| match (a.deadline, b.deadline) {
                    (Some(x), Some(y)) => x.cmp(&y),
                    (Some(_), None) => std::cmp::Ordering::Less,
                    (None, Some(_)) => std::cmp::Ordering::Greater,
                    (None, None) => std::cmp::Ordering::Equal,
                })
        });
        goals
    }

    pub fn overdue(&self, reference: NaiveDate) -> Vec<&SavingsGoal> {
        self.goals
            .iter()
            .filter(|goal| goal.status(reference) == GoalStatus::Overdue)
            .collect()
    }

    pub fn total_saved(&self) -> f64 {
        self.goals.iter().map(|goal| goal.saved_amount).sum()
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    fn find_mut(&mut self, id: Uuid) -> LedgerResult<&mut SavingsGoal> {
        self.goals
            .iter_mut()
            .find(|goal| goal.id == id)
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: Uuid) -> LedgerError {
    LedgerError::NotFound(format!("savings goal {}", id))
}
