//! The transaction ledger
//!
//! `Ledger` owns the in-memory table of transactions and its CSV backing
//! file. Mutation happens only through [`Ledger::add`], which validates input,
//! durably appends to disk, and only then updates memory, so the in-memory
//! table never runs ahead of the file. All queries are read-only over the
//! current in-memory table and are recomputed fresh on every call.

use std::path::{Path, PathBuf};

use chrono::{Datelike, Local};

use crate::error::{TallyResult, ValidationError};
use crate::models::{Money, Transaction, TransactionKind};
use crate::storage;

/// File suffix for ledger backing files
const LEDGER_SUFFIX: &str = "csv";

/// A named, file-backed collection of income and expense transactions
#[derive(Debug)]
pub struct Ledger {
    path: PathBuf,
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Open the ledger named `name`, backed by `<name>.csv`
    ///
    /// Loads every existing record into memory, or starts empty if the file
    /// does not exist yet. Fails with `TallyError::Load` if the file exists
    /// but is malformed.
    pub fn open(name: &str) -> TallyResult<Self> {
        Self::open_path(PathBuf::from(format!("{}.{}", name, LEDGER_SUFFIX)))
    }

    /// Open a ledger backed by an explicit file path
    pub fn open_path(path: impl Into<PathBuf>) -> TallyResult<Self> {
        let path = path.into();
        let transactions = if path.exists() {
            storage::read_transactions(&path)?
        } else {
            Vec::new()
        };
        Ok(Self { path, transactions })
    }

    /// Re-read the backing file, replacing the in-memory table
    pub fn reload(&mut self) -> TallyResult<()> {
        self.transactions = if self.path.exists() {
            storage::read_transactions(&self.path)?
        } else {
            Vec::new()
        };
        Ok(())
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All transactions, in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of recorded transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Check if the ledger holds no transactions
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Record a new transaction dated today
    ///
    /// Validates the category, amount, and kind, rounds the amount to cents,
    /// and stamps the current local calendar date. The record is durably
    /// appended to the backing file before the in-memory table is touched; if
    /// the file write fails the ledger is unchanged.
    ///
    /// Returns the stored transaction.
    pub fn add(&mut self, category: &str, amount: f64, kind: &str) -> TallyResult<Transaction> {
        let category = category.trim();
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory.into());
        }

        let amount = Money::from_f64(amount).ok_or(ValidationError::NonNumericAmount)?;
        if !amount.is_positive() {
            return Err(ValidationError::NonPositiveAmount.into());
        }

        let kind = TransactionKind::parse(kind)?;

        let txn = Transaction::new(Local::now().date_naive(), category, amount, kind);

        // Disk first: memory is only updated once the append is durable.
        storage::append_transaction(&self.path, &txn)?;
        self.transactions.push(txn.clone());

        Ok(txn)
    }

    /// Net balance: total income minus total expenses
    pub fn balance(&self) -> Money {
        self.transactions.iter().map(Transaction::signed_amount).sum()
    }

    /// The transaction(s) of `kind` with the largest amount
    ///
    /// With `month` given (1-12), only transactions falling in that calendar
    /// month, in any year, are considered. Ties at the maximum are all
    /// returned. An empty result means no matching transactions, which is not
    /// an error.
    pub fn highest_transactions(
        &self,
        kind: TransactionKind,
        month: Option<u32>,
    ) -> Vec<&Transaction> {
        let matching = |txn: &&Transaction| {
            txn.kind == kind && month.is_none_or(|m| txn.date.month() == m)
        };

        let Some(max) = self
            .transactions
            .iter()
            .filter(matching)
            .map(|txn| txn.amount)
            .max()
        else {
            return Vec::new();
        };

        self.transactions
            .iter()
            .filter(matching)
            .filter(|txn| txn.amount == max)
            .collect()
    }

    /// All transactions whose category exactly equals `category`
    ///
    /// With `kind` given, it is validated under the same rules as [`add`] and
    /// the result is narrowed to transactions matching both category and kind.
    ///
    /// [`add`]: Ledger::add
    pub fn filter_by_category(
        &self,
        category: &str,
        kind: Option<&str>,
    ) -> TallyResult<Vec<&Transaction>> {
        let kind = kind.map(TransactionKind::parse).transpose()?;

        Ok(self
            .transactions
            .iter()
            .filter(|txn| txn.category == category)
            .filter(|txn| kind.is_none_or(|k| txn.kind == k))
            .collect())
    }
}
