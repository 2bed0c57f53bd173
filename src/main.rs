use anyhow::Result;
use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};

use expensex::cli::{
    handle_alerts, handle_analytics, handle_budget_command, handle_categories, handle_dashboard,
    handle_expense_command, handle_history, BudgetCommands, ExpenseCommands,
};
use expensex::config::{paths::ExpensePaths, settings::Settings};
use expensex::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "expensex",
    version,
    about = "Personal expense tracker with budget alerts",
    long_about = "ExpenseX records your expenses against a monthly budget and tells \
                  you where the money goes: budget usage, spending by category, \
                  and alerts when you are about to overspend."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show budget cards, usage, category chart and alerts
    Dashboard {
        #[command(flatten)]
        report: ReportArgs,
    },

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show budget alerts
    Alerts {
        #[command(flatten)]
        report: ReportArgs,
    },

    /// Show spending per category
    Categories,

    /// Show spending analytics and the month-end projection
    Analytics {
        #[command(flatten)]
        report: ReportArgs,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// Initialize the data directory
    Init {
        /// Seed the demo profile and sample expenses
        #[arg(long)]
        demo: bool,
    },

    /// Show current configuration and paths
    Config,
}

#[derive(clap::Args)]
struct ReportArgs {
    /// Day of the month to project from (defaults to today)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=31))]
    day: Option<u32>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl ReportArgs {
    fn day_of_month(&self) -> u32 {
        self.day.unwrap_or_else(|| Local::now().day())
    }
}

fn main() -> Result<()> {
    expensex::init_tracing();

    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Mutations need a profile to attach to
    if matches!(cli.command, Some(Commands::Expense(_)) | Some(Commands::Budget(_)))
        && !paths.is_initialized()
    {
        initialize_storage(&paths, false)?;
    }

    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Some(Commands::Dashboard { report }) => {
            handle_dashboard(&storage, &settings, report.day_of_month(), report.json)?;
        }
        None => {
            handle_dashboard(&storage, &settings, Local::now().day(), false)?;
        }
        Some(Commands::Expense(cmd)) => {
            storage.load_all()?;
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            storage.load_all()?;
            handle_budget_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Alerts { report }) => {
            handle_alerts(&storage, &settings, report.day_of_month(), report.json)?;
        }
        Some(Commands::Categories) => {
            handle_categories(&storage, &settings)?;
        }
        Some(Commands::Analytics { report }) => {
            handle_analytics(&storage, &settings, report.day_of_month(), report.json)?;
        }
        Some(Commands::History { count }) => {
            handle_history(&storage, count)?;
        }
        Some(Commands::Init { demo }) => {
            println!("Initializing ExpenseX at: {}", paths.base_dir().display());
            let outcome = initialize_storage(&paths, demo)?;
            settings.save(&paths)?;

            if outcome.profile_created {
                println!("Created user profile.");
            } else {
                println!("Existing user profile kept.");
            }
            if outcome.demo_expenses_seeded > 0 {
                println!("Added {} demo expenses.", outcome.demo_expenses_seeded);
            }
            println!();
            println!("Run 'expensex expense add <name> <amount>' to record an expense.");
        }
        Some(Commands::Config) => {
            println!("ExpenseX Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Demo fallback:   {}", settings.demo_fallback);
            println!("  List limit:      {}", settings.default_list_limit);
        }
    }

    Ok(())
}
