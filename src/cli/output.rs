use colored::Colorize;

use crate::core::{ClassificationReason, Classification};
use crate::domain::{DailyAggregate, TransactionRecord};

pub fn section(title: &str) {
    println!("{}", format!("=== {} ===", title.trim()).bold());
}

pub fn info(message: &str) {
    println!("INFO: [i] {message}");
}

pub fn signed_amount(value: f64) -> String {
    let text = format!("{:+.2}", value);
    if value > 0.0 {
        text.green().to_string()
    } else if value < 0.0 {
        text.red().to_string()
    } else {
        text
    }
}

pub fn day_line(date: &str, day: &DailyAggregate) -> String {
    format!(
        "{date}  income {:>10.2}  expense {:>10.2}  balance {}",
        day.income,
        day.expense,
        signed_amount(day.balance)
    )
}

pub fn explain_line(record: &TransactionRecord, reason: ClassificationReason) -> String {
    let label = match reason.classification() {
        Classification::Income => "income".green(),
        Classification::Expense => "expense".red(),
    };
    let detail = record
        .note
        .as_deref()
        .or(record.category.as_deref())
        .unwrap_or("-");
    format!(
        "{}  {:>10.2}  {:<7}  ({})  {}",
        record.date, record.amount, label, reason, detail
    )
}
