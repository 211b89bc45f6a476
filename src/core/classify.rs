//! Income/expense classification for loosely tagged transaction records.
//!
//! Historical records do not tag family transfers reliably, so the direction
//! of money is recovered from note phrasing, category labels and icons. The
//! literals below encode existing data conventions and must match exactly:
//! `contains` checks are substring matches, `starts_with` checks are prefix
//! matches, and every comparison is case-sensitive.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{TransactionKind, TransactionRecord};

pub const GRANTED_CATEGORY: &str = "Granted";
pub const PRESENT_CATEGORY: &str = "Present";
pub const TRANSFER_OUT_CATEGORY: &str = "Transfer Out";
pub const ALLOWANCE_CATEGORY: &str = "Allowance";
pub const GRANTED_NOTE_MARKER: &str = "(Granted)";

pub const OUTBOUND_TRANSFER_ICON: &str = "💸";
pub const INBOUND_TRANSFER_ICON: &str = "💰";

const GIVEN_NOTE_PHRASE: &str = "Transfer to";
const GIVEN_NOTE_PREFIX: &str = "To ";
const RECEIVED_NOTE_PHRASE: &str = "Received from";
const RECEIVED_NOTE_PREFIX: &str = "From ";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Classification {
    Income,
    Expense,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Classification::Income => "income",
            Classification::Expense => "expense",
        };
        f.write_str(label)
    }
}

/// The rule that decided a record's classification, in priority order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ClassificationReason {
    Received,
    Given,
    IncomeType,
    ExpenseType,
    InternalTransfer,
    /// Only reachable for a `type` outside income/expense/transfer.
    Fallback,
}

impl ClassificationReason {
    pub fn classification(self) -> Classification {
        match self {
            ClassificationReason::Received | ClassificationReason::IncomeType => {
                Classification::Income
            }
            ClassificationReason::Given
            | ClassificationReason::ExpenseType
            | ClassificationReason::InternalTransfer
            | ClassificationReason::Fallback => Classification::Expense,
        }
    }
}

impl fmt::Display for ClassificationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ClassificationReason::Received => "received transfer",
            ClassificationReason::Given => "given transfer",
            ClassificationReason::IncomeType => "income type",
            ClassificationReason::ExpenseType => "expense type",
            ClassificationReason::InternalTransfer => "internal transfer",
            ClassificationReason::Fallback => "unrecognized type",
        };
        f.write_str(label)
    }
}

/// Transfer hints extracted from a single record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransferSignals {
    pub internal: bool,
    pub given: bool,
    pub received: bool,
}

impl TransferSignals {
    pub fn detect(record: &TransactionRecord) -> Self {
        let note = record.note_str();
        let category = record.category.as_deref();
        let icon = record.category_icon.as_deref();

        let internal = record.is_transfer == Some(true)
            || record.kind == Some(TransactionKind::Transfer)
            || matches!(category, Some(GRANTED_CATEGORY) | Some(PRESENT_CATEGORY))
            || note.contains(GRANTED_NOTE_MARKER);

        let given = note.contains(GIVEN_NOTE_PHRASE)
            || note.starts_with(GIVEN_NOTE_PREFIX)
            || category == Some(TRANSFER_OUT_CATEGORY)
            || icon == Some(OUTBOUND_TRANSFER_ICON);

        let received = note.contains(RECEIVED_NOTE_PHRASE)
            || note.starts_with(RECEIVED_NOTE_PREFIX)
            || category == Some(ALLOWANCE_CATEGORY)
            || icon == Some(INBOUND_TRANSFER_ICON);

        Self {
            internal,
            given,
            received,
        }
    }
}

/// Resolves which rule classifies `record`. Earlier rules win.
pub fn explain(record: &TransactionRecord) -> ClassificationReason {
    let signals = TransferSignals::detect(record);
    let kind = record.kind.as_ref();

    if signals.received {
        ClassificationReason::Received
    } else if signals.given {
        ClassificationReason::Given
    } else if kind == Some(&TransactionKind::Income) {
        ClassificationReason::IncomeType
    } else if matches!(kind, None | Some(TransactionKind::Expense)) && !signals.internal {
        ClassificationReason::ExpenseType
    } else if signals.internal {
        ClassificationReason::InternalTransfer
    } else {
        tracing::debug!(
            date = %record.date,
            kind = %record.kind.as_ref().map(|k| k.as_tag()).unwrap_or(""),
            "unrecognized transaction type, defaulting to expense"
        );
        ClassificationReason::Fallback
    }
}

pub fn classify(record: &TransactionRecord) -> Classification {
    explain(record).classification()
}
