//! Transaction model
//!
//! A transaction is one dated income or expense record. The kind label is
//! normalized from free-form user input, with a "did you mean" suggestion on
//! the rejection path for near-miss spellings.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

use super::money::Money;

/// Whether a transaction adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Normalize and validate a user-supplied kind label
    ///
    /// Acceptance is case-insensitive: the input is title-cased and must then
    /// match `Income` or `Expense` exactly. Rejected input whose letters
    /// appear in order within one of the accepted literals earns a suggestion
    /// (`"Exp"` and `"pens"` suggest `Expense`, `"Incm"` suggests `Income`);
    /// anything else, including empty input, is plain invalid.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        match title_case(raw).as_str() {
            "Income" => Ok(Self::Income),
            "Expense" => Ok(Self::Expense),
            _ if raw.is_empty() => Err(ValidationError::InvalidKind),
            _ if is_subsequence(raw, "Expense") => Err(ValidationError::AmbiguousKind {
                suggestion: Self::Expense,
            }),
            _ if is_subsequence(raw, "Income") => Err(ValidationError::AmbiguousKind {
                suggestion: Self::Income,
            }),
            _ => Err(ValidationError::InvalidKind),
        }
    }

    /// The canonical label stored in the backing file
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Title-case a label: first letter uppercased, the rest lowercased
fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Check whether the characters of `needle` appear in order within `haystack`
fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut hay = haystack.chars();
    needle.chars().all(|c| hay.by_ref().any(|h| h == c))
}

/// A single dated income or expense record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Calendar date, day granularity, stamped at creation time
    pub date: NaiveDate,

    /// Free-form category label, stored verbatim
    pub category: String,

    /// Amount, always strictly positive
    pub amount: Money,

    /// Income or Expense
    pub kind: TransactionKind,
}

impl Transaction {
    /// Create a transaction dated to a specific day
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        amount: Money,
        kind: TransactionKind,
    ) -> Self {
        Self {
            date,
            category: category.into(),
            amount,
            kind,
        }
    }

    /// Signed contribution to the running balance
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount,
            self.kind
        )
    }
}
