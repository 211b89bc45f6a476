pub mod json_source;

use crate::{domain::TransactionRecord, errors::LedgerResult};

pub use json_source::{load_transactions_from_path, save_transactions_to_path, JsonFileSource};

/// Supplies the transaction list for a screen. The app backs this with a
/// remote document store; the CLI reads JSON files.
pub trait TransactionSource {
    fn fetch(&self) -> LedgerResult<Vec<TransactionRecord>>;
}

impl TransactionSource for Vec<TransactionRecord> {
    fn fetch(&self) -> LedgerResult<Vec<TransactionRecord>> {
        Ok(self.clone())
    }
}
