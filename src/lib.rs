//! tally-cli - File-backed personal income/expense ledger
//!
//! This library provides the core functionality for the tally ledger: dated
//! income/expense transactions persisted to a flat CSV file, with derived
//! aggregates (running balance, period summaries, extrema) for display.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution for the default ledger location
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, frequencies)
//! - `storage`: CSV file storage layer
//! - `ledger`: The ledger store and its read-only queries
//! - `reports`: Periodic summary aggregation
//! - `display`: Terminal formatting
//! - `cli`: clap subcommand handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use tally_cli::ledger::Ledger;
//!
//! # fn main() -> tally_cli::error::TallyResult<()> {
//! let mut ledger = Ledger::open("household")?;
//! ledger.add("Groceries", 42.50, "expense")?;
//! println!("{}", ledger.balance());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{TallyError, TallyResult, ValidationError};
pub use ledger::Ledger;
