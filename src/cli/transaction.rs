//! Transaction subcommands

use clap::Subcommand;

use crate::display;
use crate::error::TallyResult;
use crate::ledger::Ledger;
use crate::models::Transaction;

#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction dated today
    Add {
        /// Category label, stored verbatim
        category: String,
        /// Amount (positive, rounded to 2 decimal places)
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Transaction type: Income or Expense
        #[arg(value_name = "TYPE")]
        kind: String,
    },
    /// List recorded transactions
    List {
        /// Number of most recent transactions to show
        #[arg(long, default_value = "20")]
        limit: usize,
    },
}

/// Execute a transaction subcommand against the ledger
pub fn handle_transaction_command(
    ledger: &mut Ledger,
    command: TransactionCommands,
) -> TallyResult<()> {
    match command {
        TransactionCommands::Add {
            category,
            amount,
            kind,
        } => {
            let txn = ledger.add(&category, amount, &kind)?;
            println!("Transaction saved!");
            print!("{}", display::format_transaction_register(&[&txn]));
        }
        TransactionCommands::List { limit } => {
            let skip = ledger.len().saturating_sub(limit);
            let recent: Vec<&Transaction> = ledger.transactions().iter().skip(skip).collect();
            print!("{}", display::format_transaction_register(&recent));
        }
    }

    Ok(())
}
