//! Core data models
//!
//! Contains the money, transaction, and frequency types shared by the ledger
//! store, reports, and CLI layers.

pub mod frequency;
pub mod money;
pub mod transaction;

pub use frequency::Frequency;
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind};
