pub mod aggregate;
pub mod common;
pub mod goal;
pub mod transaction;
pub mod window;

pub use aggregate::{DailyAggregate, DailyAggregates};
pub use common::{Displayable, Identifiable, NamedEntity};
pub use goal::{GoalStatus, SavingsGoal};
pub use transaction::{TransactionKind, TransactionRecord, DATE_KEY_FORMAT};
pub use window::{DateWindow, RangePreset};
