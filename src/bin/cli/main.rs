mod config;
use config::AppConfig;

use monthly_savings::{Ledger, Month, ExpenseForm, Savings,
    backend::{LedgerStore, JsonFileStore},
    savings::{month_savings, month_expenses, total_savings}};

use std::path::PathBuf;
use anyhow::{self, Context};
use colored::Colorize;
use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(version, about, propagate_version = true)]
struct Cli {
    /// Path to a TOML config file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Path to the storage file, overrides the config
    #[clap(short, long, value_parser)]
    store: Option<PathBuf>,

    /// Raise log verbosity, repeat for more
    #[clap(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Action to perform
    #[clap(subcommand)]
    action: Subcommands,
}

#[derive(Debug, Subcommand)]
enum Subcommands {
    /// Add a new expense, optionally setting the month's salary
    Add(AddExpense),
    /// Delete an expense by its position within a month
    Delete(DeleteExpense),
    /// List all expenses grouped by month
    List,
    /// Show savings per month and in total
    Savings,
    /// Remove every stored month
    Clear
}

#[derive(Args, Debug)]
struct AddExpense {
    #[clap(short, long, value_parser)]
    month: String,

    /// Date in YYYY-MM-DD form
    #[clap(short, long, value_parser)]
    date: String,

    #[clap(short, long, value_parser)]
    amount: String,

    #[clap(short, long, value_parser)]
    category: String,

    #[clap(short='D', long, value_parser)]
    description: String,

    /// Salary for the month; keeps the stored one when omitted
    #[clap(short, long, value_parser)]
    salary: Option<String>
}

impl AddExpense {
    fn add_expense(self, ledger: &Ledger) -> anyhow::Result<Ledger> {
        let mut form = ExpenseForm::default();
        if let Ok(month) = self.month.parse::<Month>() {
            form.select_month(ledger, month);
        } else {
            form.month = self.month;
        }
        form.date = self.date;
        form.amount = self.amount;
        form.category = self.category;
        form.description = self.description;
        if let Some(salary) = self.salary {
            form.salary = salary;
        }

        let updated = form.submit(ledger)
            .with_context(|| "expense rejected")?;
        return Ok(updated);
    }
}

#[derive(Args, Debug)]
struct DeleteExpense {
    #[clap(short, long, value_parser)]
    month: String,

    /// Zero-based position within the month, as shown by `list`
    #[clap(short, long, value_parser)]
    index: usize
}

impl DeleteExpense {
    fn delete_expense(&self, ledger: &Ledger) -> anyhow::Result<Ledger> {
        let month: Month = self.month.parse()?;
        let updated = ledger.delete_entry(month, self.index)?;
        return Ok(updated);
    }
}

fn colored_savings(savings: &Savings) -> colored::ColoredString {
    let text = savings.to_string();
    match savings.amount() {
        Some(amt) if amt.is_sign_negative() && !amt.is_zero() => text.bright_red(),
        Some(amt) if !amt.is_zero() => text.green(),
        _ => text.normal()
    }
}

fn print_ledger(ledger: &Ledger) {
    if ledger.is_empty() {
        println!("No expenses recorded");
        return;
    }
    for (month, record) in ledger.months() {
        let salary = record.salary
            .map(|salary| format!("{:.2}", salary))
            .unwrap_or_else(|| "-".to_string());
        println!("{}", month.to_string().bold());
        println!("Salary: {}", salary);
        for (index, entry) in record.entries.iter().enumerate() {
            println!("  [{}] {}", index, entry);
        }
        let savings = month_savings(&record.entries, record.salary);
        println!("Savings: {}", colored_savings(&savings));
    }
}

fn print_savings(ledger: &Ledger) {
    for (month, record) in ledger.months() {
        let savings = month_savings(&record.entries, record.salary);
        let spent = month_expenses(&record.entries)
            .map(|spent| format!("{:.2}", spent))
            .unwrap_or_else(|| "-".to_string());
        println!("{}: spent {}, saved {}", month, spent, colored_savings(&savings));
    }
    let total = Savings::Amount(total_savings(ledger));
    println!("{}: {}", "Total savings".bold(), colored_savings(&total));
}

fn init_logging(config: &AppConfig, verbose: u8) {
    let level = match verbose {
        0 => config.logging.level,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let config = AppConfig::read_or_default(args.config.as_deref())?;
    init_logging(&config, args.verbose);

    let path = args.store.unwrap_or(config.storage.path);
    log::info!("using store {}", path.display());
    let store = LedgerStore::new(JsonFileStore::new(&path));
    let ledger = store.load();

    let updated = match args.action {
        Subcommands::List => {
            print_ledger(&ledger);
            None
        },
        Subcommands::Savings => {
            print_savings(&ledger);
            None
        },
        Subcommands::Add(add_expense) => Some(add_expense.add_expense(&ledger)?),
        Subcommands::Delete(delete_expense) => Some(delete_expense.delete_expense(&ledger)?),
        Subcommands::Clear => {
            store.clear().with_context(|| "failed to clear store")?;
            println!("Cleared {}", path.display());
            None
        }
    };

    if let Some(ledger) = updated {
        store.save(&ledger).with_context(|| "failed to save ledger")?;
        print_savings(&ledger);
    }
    return Ok(());
}
