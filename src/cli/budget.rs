//! Budget CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Money;
use crate::services::UserService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show the monthly budget and savings goal
    Show,

    /// Set the monthly budget
    Set {
        /// Monthly budget amount
        amount: String,
        /// Savings goal (unchanged if omitted)
        #[arg(short, long)]
        savings_goal: Option<String>,
    },
}

fn parse_money(label: &str, s: &str) -> ExpenseResult<Money> {
    Money::parse(s).map_err(|e| ExpenseError::Validation(format!("Invalid {}: {}", label, e)))
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> ExpenseResult<()> {
    let service = UserService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Show => {
            let profile = service.profile()?;
            println!("User:           {}", profile.name);
            println!("Monthly budget: {}", profile.budget.format_with_symbol(symbol));
            println!("Savings goal:   {}", profile.savings_goal.format_with_symbol(symbol));
        }

        BudgetCommands::Set {
            amount,
            savings_goal,
        } => {
            let budget = parse_money("budget", &amount)?;
            let savings_goal = match savings_goal {
                Some(goal) => parse_money("savings goal", &goal)?,
                None => service.profile()?.savings_goal,
            };

            let profile = service.set_budget(budget, savings_goal)?;
            println!(
                "Budget set to {} (savings goal {})",
                profile.budget.format_with_symbol(symbol),
                profile.savings_goal.format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}
