//! CSV file I/O for the ledger's backing file
//!
//! The file format is UTF-8 comma-separated with a fixed header
//! `Date,Category,Amount,Type`: ISO-8601 dates, plain decimal amounts with at
//! most 2 fractional digits, and `Income`/`Expense` kind labels. Records are
//! only ever appended; the header is written once, when the file is created.

use std::fs::OpenOptions;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{TallyError, TallyResult};
use crate::models::{Money, Transaction, TransactionKind};

/// Expected header row, in column order
pub const HEADERS: [&str; 4] = ["Date", "Category", "Amount", "Type"];

/// One CSV row in backing-file form
#[derive(Debug, Serialize, Deserialize)]
struct Record {
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Type")]
    kind: TransactionKind,
}

impl From<&Transaction> for Record {
    fn from(txn: &Transaction) -> Self {
        Self {
            date: txn.date,
            category: txn.category.clone(),
            amount: txn.amount.to_decimal_string(),
            kind: txn.kind,
        }
    }
}

/// Read every transaction from an existing backing file
///
/// Fails with `TallyError::Load` on a wrong column set or any row with an
/// unparsable date, amount, or kind.
pub fn read_transactions(path: &Path) -> TallyResult<Vec<Transaction>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| TallyError::load(path, e))?;

    let headers = reader.headers().map_err(|e| TallyError::load(path, e))?;
    let columns: Vec<&str> = headers.iter().collect();
    if columns != HEADERS {
        return Err(TallyError::load(
            path,
            format!(
                "expected header '{}', found '{}'",
                HEADERS.join(","),
                columns.join(",")
            ),
        ));
    }

    let mut transactions = Vec::new();
    for result in reader.deserialize::<Record>() {
        let record = result.map_err(|e| TallyError::load(path, e))?;
        let amount = Money::parse(&record.amount).map_err(|e| TallyError::load(path, e))?;
        if !amount.is_positive() {
            return Err(TallyError::load(
                path,
                format!("non-positive amount '{}'", record.amount),
            ));
        }
        transactions.push(Transaction::new(
            record.date,
            record.category,
            amount,
            record.kind,
        ));
    }

    Ok(transactions)
}

/// Append exactly one record to the backing file, durably
///
/// Writes the header first only if the file did not previously exist. The
/// record is flushed and fsynced before this returns, so a successful return
/// means the row survives process exit.
pub fn append_transaction(path: &Path, txn: &Transaction) -> TallyResult<()> {
    let write_header = !path.exists();

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(write_header)
        .from_writer(file);

    writer.serialize(Record::from(txn))?;
    writer.flush()?;

    let file = writer
        .into_inner()
        .map_err(|e| TallyError::Io(e.to_string()))?;
    file.sync_all()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sample(date: (i32, u32, u32), category: &str, cents: i64, kind: TransactionKind) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            category,
            Money::from_cents(cents),
            kind,
        )
    }

    #[test]
    fn test_append_writes_header_once() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");

        append_transaction(&path, &sample((2024, 1, 5), "Food", 1050, TransactionKind::Expense))
            .unwrap();
        append_transaction(&path, &sample((2024, 1, 6), "Salary", 200000, TransactionKind::Income))
            .unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Date,Category,Amount,Type");
        assert_eq!(lines[1], "2024-01-05,Food,10.50,Expense");
        assert_eq!(lines[2], "2024-01-06,Salary,2000.00,Income");
    }

    #[test]
    fn test_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");

        let txns = vec![
            sample((2024, 1, 5), "Food", 1235, TransactionKind::Expense),
            sample((2024, 1, 20), "Salary", 500000, TransactionKind::Income),
            sample((2024, 2, 1), "Rent, utilities", 80000, TransactionKind::Expense),
        ];
        for txn in &txns {
            append_transaction(&path, txn).unwrap();
        }

        let loaded = read_transactions(&path).unwrap();
        assert_eq!(loaded, txns);
    }

    #[test]
    fn test_read_rejects_wrong_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");
        fs::write(&path, "When,What,HowMuch,Kind\n2024-01-05,Food,10.50,Expense\n").unwrap();

        let err = read_transactions(&path).unwrap_err();
        assert!(matches!(err, TallyError::Load(_)));
        assert!(err.to_string().contains("expected header"));
    }

    #[test]
    fn test_read_rejects_bad_date() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");
        fs::write(&path, "Date,Category,Amount,Type\nyesterday,Food,10.50,Expense\n").unwrap();

        assert!(matches!(
            read_transactions(&path),
            Err(TallyError::Load(_))
        ));
    }

    #[test]
    fn test_read_rejects_bad_amount() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");
        fs::write(&path, "Date,Category,Amount,Type\n2024-01-05,Food,ten,Expense\n").unwrap();

        assert!(matches!(
            read_transactions(&path),
            Err(TallyError::Load(_))
        ));
    }

    #[test]
    fn test_read_rejects_non_positive_amount() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");
        fs::write(&path, "Date,Category,Amount,Type\n2024-01-05,Food,-10.50,Expense\n").unwrap();

        let err = read_transactions(&path).unwrap_err();
        assert!(err.to_string().contains("non-positive amount"));
    }

    #[test]
    fn test_read_rejects_bad_kind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");
        fs::write(&path, "Date,Category,Amount,Type\n2024-01-05,Food,10.50,Transfer\n").unwrap();

        assert!(matches!(
            read_transactions(&path),
            Err(TallyError::Load(_))
        ));
    }

    #[test]
    fn test_category_with_comma_survives_quoting() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");
        let txn = sample((2024, 3, 1), "Books, music", 999, TransactionKind::Expense);

        append_transaction(&path, &txn).unwrap();
        let loaded = read_transactions(&path).unwrap();
        assert_eq!(loaded, vec![txn]);
    }
}
