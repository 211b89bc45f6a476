use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{domain::TransactionRecord, errors::LedgerResult, utils::fs::write_atomic};

use super::TransactionSource;

/// Reads a JSON array of transaction records from disk on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TransactionSource for JsonFileSource {
    fn fetch(&self) -> LedgerResult<Vec<TransactionRecord>> {
        load_transactions_from_path(&self.path)
    }
}

pub fn load_transactions_from_path(path: &Path) -> LedgerResult<Vec<TransactionRecord>> {
    let data = fs::read_to_string(path)?;
    let transactions: Vec<TransactionRecord> = serde_json::from_str(&data)?;
    tracing::debug!(path = %path.display(), count = transactions.len(), "loaded transactions");
    Ok(transactions)
}

pub fn save_transactions_to_path(transactions: &[TransactionRecord], path: &Path) -> LedgerResult<()> {
    let json = serde_json::to_string_pretty(transactions)?;
    write_atomic(path, &json)?;
    Ok(())
}
