pub mod goal_service;
pub mod summary_service;
pub mod transaction_service;

pub use goal_service::GoalService;
pub use summary_service::SummaryService;
pub use transaction_service::TransactionService;
