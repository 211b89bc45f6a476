//! Transaction records as delivered by the remote document store.
//!
//! Records are loosely typed: every field except `date` and `amount` may be
//! absent, and even those are tolerated when missing. Nothing here validates;
//! classification degrades to expense when the data is incomplete.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    #[serde(default)]
    pub date: String,
    #[serde(default = "nan_amount", deserialize_with = "amount_or_nan")]
    pub amount: f64,
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<TransactionKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_transfer: Option<bool>,
}

impl TransactionRecord {
    pub fn new(date: impl Into<String>, amount: f64) -> Self {
        Self {
            date: date.into(),
            amount,
            kind: None,
            category: None,
            category_icon: None,
            note: None,
            is_transfer: None,
        }
    }

    pub fn with_kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_category_icon(mut self, icon: impl Into<String>) -> Self {
        self.category_icon = Some(icon.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_transfer_flag(mut self, is_transfer: bool) -> Self {
        self.is_transfer = Some(is_transfer);
        self
    }

    /// Parses the date key; `None` for anything that is not `YYYY-MM-DD`.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_KEY_FORMAT).ok()
    }

    pub fn note_str(&self) -> &str {
        self.note.as_deref().unwrap_or("")
    }
}

fn nan_amount() -> f64 {
    f64::NAN
}

fn amount_or_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// The optional `type` tag. An empty tag reads as expense; other unknown
/// strings are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Income,
    Expense,
    Transfer,
    Other(String),
}

impl TransactionKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "income" => TransactionKind::Income,
            "" | "expense" => TransactionKind::Expense,
            "transfer" => TransactionKind::Transfer,
            other => TransactionKind::Other(other.to_string()),
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
            TransactionKind::Transfer => "transfer",
            TransactionKind::Other(tag) => tag,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl Serialize for TransactionKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for TransactionKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(TransactionKind::from_tag(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_sparse_record() {
        let record: TransactionRecord =
            serde_json::from_str(r#"{"date":"2026-01-05","amount":12.5}"#).unwrap();
        assert_eq!(record.date, "2026-01-05");
        assert_eq!(record.amount, 12.5);
        assert!(record.kind.is_none());
        assert!(record.note.is_none());
    }

    #[test]
    fn deserializes_camel_case_fields_and_unknown_type() {
        let raw = r#"{
            "date": "2026-01-06",
            "amount": 5,
            "type": "refund",
            "categoryIcon": "💰",
            "isTransfer": null
        }"#;
        let record: TransactionRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.kind, Some(TransactionKind::Other("refund".into())));
        assert_eq!(record.category_icon.as_deref(), Some("💰"));
        assert_eq!(record.is_transfer, None);
    }

    #[test]
    fn missing_amount_becomes_nan() {
        let record: TransactionRecord = serde_json::from_str(r#"{"date":"2026-01-05"}"#).unwrap();
        assert!(record.amount.is_nan());
        let record: TransactionRecord =
            serde_json::from_str(r#"{"date":"2026-01-05","amount":null}"#).unwrap();
        assert!(record.amount.is_nan());
    }

    #[test]
    fn serializes_type_tag_under_original_name() {
        let record = TransactionRecord::new("2026-01-05", 1.0).with_kind(TransactionKind::Income);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""type":"income""#), "{json}");
        assert!(!json.contains("categoryIcon"));
    }

    #[test]
    fn empty_type_tag_reads_as_expense() {
        let record: TransactionRecord =
            serde_json::from_str(r#"{"date":"2026-01-05","amount":3,"type":""}"#).unwrap();
        assert_eq!(record.kind, Some(TransactionKind::Expense));
    }

    #[test]
    fn parsed_date_rejects_non_iso_strings() {
        assert!(TransactionRecord::new("05/01/2026", 1.0).parsed_date().is_none());
        assert_eq!(
            TransactionRecord::new("2026-01-05", 1.0).parsed_date(),
            NaiveDate::from_ymd_opt(2026, 1, 5)
        );
    }
}
