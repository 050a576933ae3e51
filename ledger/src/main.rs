use budget_ledger::backend::domain::report_service::format_amount;
use budget_ledger::backend::domain::validation::parse_transaction_matcher;
use budget_ledger::{Backend, LedgerResult};
use clap::{Args, Parser, Subcommand};
use log::{error, info};
use shared::TransactionForm;
use std::process::ExitCode;

/// Personal budget ledger. Without a command, shows the dashboard.
///
/// Data lives in $BUDGET_LEDGER_DIR, or "Budget Ledger" in the documents folder.
#[derive(Parser, Debug)]
#[command(name = "budget-ledger", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Totals and transactions for one month
    Report {
        /// Month as YYYY-MM
        month: String,
    },
    /// Record a transaction
    Add(FormArgs),
    /// Delete every transaction matching all fields
    Delete(FormArgs),
    /// Export all transactions as CSV
    Export {
        /// Target file or directory; defaults to the documents folder
        path: Option<String>,
    },
}

#[derive(Args, Debug)]
struct FormArgs {
    /// YYYY-MM-DD
    date: String,
    category: String,
    /// Income or Expense
    #[arg(value_name = "TYPE")]
    kind: String,
    #[arg(allow_hyphen_values = true)]
    amount: String,
    description: Option<String>,
}

impl From<FormArgs> for TransactionForm {
    fn from(args: FormArgs) -> Self {
        TransactionForm {
            date: args.date,
            category: args.category,
            transaction_type: args.kind,
            amount: args.amount,
            description: args.description.unwrap_or_default(),
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Command failed: {:#}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Option<Command>) -> LedgerResult<()> {
    let mut backend = Backend::from_environment()?;
    info!("Ledger holds {} transactions", backend.transaction_service.len());

    match command {
        None => print_dashboard(&backend),
        Some(Command::Report { month }) => {
            let outcome = backend.monthly_report(&month);
            print!("{}", backend.report_service.render_report(&outcome));
            if outcome.is_no_data() {
                println!();
            }
        }
        Some(Command::Add(args)) => {
            let transaction = backend.transaction_service.add(&args.into())?;
            println!(
                "Added {} {} in {} on {}",
                transaction.transaction_type,
                format_amount(transaction.amount),
                transaction.category,
                transaction.date
            );
        }
        Some(Command::Delete(args)) => {
            let matcher = parse_transaction_matcher(&args.into())?;
            let removed = backend.transaction_service.remove(&matcher)?;
            println!("Deleted {} transaction(s)", removed);
        }
        Some(Command::Export { path }) => {
            let summary = backend.export(path.as_deref())?;
            println!(
                "Exported {} transactions to {}",
                summary.transaction_count, summary.file_path
            );
        }
    }
    Ok(())
}

fn print_dashboard(backend: &Backend) {
    print!("{}", backend.report_service.render_summary(&backend.summary()));

    let categories = backend.expenses_by_category();
    if !categories.is_empty() {
        println!("\nExpenses by category:");
        for entry in categories.iter() {
            println!("  {}: {:.2}", entry.category, entry.amount);
        }
    }

    let months = backend.totals_by_month();
    if !months.is_empty() {
        println!("\nIncome and expenses by month:");
        for bucket in months.iter() {
            println!(
                "  {}: income {:.2}, expenses {:.2}",
                bucket.month, bucket.totals.income, bucket.totals.expense
            );
        }
    }

    println!("\nTransactions:");
    for t in backend.transaction_service.all() {
        println!(
            "  {} | {} | {} | {:.2} | {}",
            t.date, t.category, t.transaction_type, t.amount, t.description
        );
    }
}
