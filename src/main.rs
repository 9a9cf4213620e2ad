use anyhow::Result;
use clap::{Parser, Subcommand};

use tally_cli::cli::{
    handle_report_command, handle_transaction_command, ReportCommands, TransactionCommands,
};
use tally_cli::config::{TallyPaths, DEFAULT_LEDGER_NAME};
use tally_cli::ledger::Ledger;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "File-backed personal income/expense ledger",
    long_about = "tally records dated income and expense transactions in a plain \
                  CSV file and derives balances, extrema, and periodic summaries \
                  from them."
)]
struct Cli {
    /// Ledger name or path (the .csv suffix is added automatically)
    #[arg(short, long, env = "TALLY_LEDGER", global = true)]
    ledger: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Report commands
    #[command(subcommand, alias = "rep")]
    Report(ReportCommands),

    /// Show the ledger file location
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut ledger = match &cli.ledger {
        Some(name) => Ledger::open(name)?,
        None => {
            let paths = TallyPaths::new()?;
            paths.ensure_directories()?;
            Ledger::open_path(paths.ledger_file(DEFAULT_LEDGER_NAME))?
        }
    };

    match cli.command {
        Commands::Transaction(cmd) => handle_transaction_command(&mut ledger, cmd)?,
        Commands::Report(cmd) => handle_report_command(&ledger, cmd)?,
        Commands::Config => {
            println!("Ledger file: {}", ledger.path().display());
            println!("Transactions: {}", ledger.len());
        }
    }

    Ok(())
}
