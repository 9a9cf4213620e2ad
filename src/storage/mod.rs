//! Flat-file storage layer
//!
//! The backing file is the sole persistent source of truth: it is fully read
//! on startup and appended to on every successful add.

pub mod csv_file;

pub use csv_file::{append_transaction, read_transactions, HEADERS};
