use anyhow::Result;
use clap::Parser;

use expense_ledger::cli::{handle_command, Commands};
use expense_ledger::config::{ExpensePaths, Settings};
use expense_ledger::logging::init_tracing;
use expense_ledger::services::ExpenseManager;
use expense_ledger::storage::FileStore;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Personal expense ledger",
    long_about = "Record expenses, check monthly totals against a budget, \
                  and export everything to CSV. Data lives in the current \
                  directory unless EXPENSES_DATA_DIR is set."
)]
struct Cli {
    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        println!("expenses - personal expense ledger");
        println!();
        println!("Run 'expenses --help' for usage information.");
        return Ok(());
    };

    let paths = ExpensePaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_default(&paths)?;

    let store = FileStore::new(paths, settings.load_policy);
    let mut manager = ExpenseManager::new(store);
    manager.load();

    handle_command(&mut manager, &settings, command)?;
    Ok(())
}
