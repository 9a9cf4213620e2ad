//! Derived views over the ledger
//!
//! Reports are pure read-only aggregations of the ledger's current in-memory
//! table; rendering them is left to the display layer.

pub mod summary;

pub use summary::{SummaryPoint, TransactionSummary};
