//! Configuration and path management

pub mod paths;

pub use paths::{TallyPaths, DEFAULT_LEDGER_NAME};
