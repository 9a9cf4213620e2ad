//! Transaction display formatting
//!
//! Provides utilities for formatting transactions and balances for terminal
//! display. The ledger core never prints; everything user-facing goes through
//! here.

use crate::models::{Money, Transaction, TransactionKind};

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction) -> String {
    format!(
        "{} {:20} {:>12} {:>8}",
        txn.date.format("%Y-%m-%d"),
        truncate(&txn.category, 20),
        txn.amount.to_string(),
        txn.kind.to_string()
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[&Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:20} {:>12} {:>8}\n",
        "Date", "Category", "Amount", "Type"
    ));
    output.push_str(&"-".repeat(54));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn));
        output.push('\n');
    }

    output
}

/// Format the "no matching transactions" message for a kind-filtered query
pub fn format_no_transactions(kind: TransactionKind) -> String {
    format!("No {} transactions found.\n", kind.to_string().to_lowercase())
}

/// Format the net balance line
pub fn format_balance(balance: Money) -> String {
    format!("Your balance is {}\n", balance)
}

/// Truncate a string to a maximum length, padding short values
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            "Groceries",
            Money::from_cents(1235),
            TransactionKind::Expense,
        )
    }

    #[test]
    fn test_format_transaction_row() {
        let formatted = format_transaction_row(&sample());
        assert!(formatted.contains("2024-01-15"));
        assert!(formatted.contains("Groceries"));
        assert!(formatted.contains("$12.35"));
        assert!(formatted.contains("Expense"));
    }

    #[test]
    fn test_format_empty_register() {
        let formatted = format_transaction_register(&[]);
        assert!(formatted.contains("No transactions found"));
    }

    #[test]
    fn test_format_register_has_header() {
        let txn = sample();
        let formatted = format_transaction_register(&[&txn]);
        assert!(formatted.starts_with("Date"));
        assert!(formatted.contains("Category"));
    }

    #[test]
    fn test_format_no_transactions() {
        assert_eq!(
            format_no_transactions(TransactionKind::Expense),
            "No expense transactions found.\n"
        );
    }

    #[test]
    fn test_format_balance() {
        assert_eq!(
            format_balance(Money::from_cents(-525)),
            "Your balance is -$5.25\n"
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short", 10).trim(), "Short");
        let result = truncate("A very long category name", 10);
        assert!(result.len() <= 10);
        assert!(result.ends_with("..."));
    }
}
