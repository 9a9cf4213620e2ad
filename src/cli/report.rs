//! Report subcommands

use clap::Subcommand;

use crate::display;
use crate::error::TallyResult;
use crate::ledger::Ledger;
use crate::models::{Frequency, TransactionKind};
use crate::reports::TransactionSummary;

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Show the net balance (income minus expenses)
    Balance,
    /// Show the highest-amount transaction(s) of a type
    Highest {
        /// Transaction type: Income or Expense
        #[arg(value_name = "TYPE")]
        kind: String,
        /// Restrict to one calendar month (1-12, any year)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },
    /// List transactions in a category
    Filter {
        /// Category label to match exactly
        category: String,
        /// Narrow to one transaction type
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
    },
    /// Sum one transaction type per calendar period
    Summary {
        /// Transaction type: Income or Expense
        #[arg(value_name = "TYPE")]
        kind: String,
        /// Bucket length: daily, weekly, monthly, or yearly
        #[arg(short, long, default_value = "monthly")]
        frequency: Frequency,
        /// Render as a bar chart instead of a table
        #[arg(long)]
        chart: bool,
    },
}

/// Execute a report subcommand against the ledger
pub fn handle_report_command(ledger: &Ledger, command: ReportCommands) -> TallyResult<()> {
    match command {
        ReportCommands::Balance => {
            print!("{}", display::format_balance(ledger.balance()));
        }
        ReportCommands::Highest { kind, month } => {
            let kind = TransactionKind::parse(&kind)?;
            let highest = ledger.highest_transactions(kind, month);
            if highest.is_empty() {
                print!("{}", display::format_no_transactions(kind));
            } else {
                print!("{}", display::format_transaction_register(&highest));
            }
        }
        ReportCommands::Filter { category, kind } => {
            let matches = ledger.filter_by_category(&category, kind.as_deref())?;
            print!("{}", display::format_transaction_register(&matches));
        }
        ReportCommands::Summary {
            kind,
            frequency,
            chart,
        } => {
            let kind = TransactionKind::parse(&kind)?;
            let summary = TransactionSummary::generate(ledger, kind, frequency);
            if chart {
                print!("{}", display::format_summary_chart(&summary));
            } else {
                print!("{}", display::format_summary_table(&summary));
            }
        }
    }

    Ok(())
}
