//! Terminal display formatting
//!
//! Pure string-building helpers; nothing in here touches the ledger or does
//! I/O beyond returning text for the CLI to print.

pub mod report;
pub mod transaction;

pub use report::{format_summary_chart, format_summary_table};
pub use transaction::{
    format_balance, format_no_transactions, format_transaction_register, format_transaction_row,
};
