pub mod calendar;
pub mod classify;
pub mod daily;
pub mod filter;
pub mod services;

pub use calendar::{CalendarCell, CalendarMonth, DayMarker, WeekStart};
pub use classify::{classify, explain, Classification, ClassificationReason, TransferSignals};
pub use daily::{aggregate, DailyAggregateCache};
pub use filter::{CategoryFilter, TransactionFilter};
