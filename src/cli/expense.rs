//! Expense CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseCategory, Money};
use crate::services::{CreateExpenseInput, ExpenseFilter, ExpenseService};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        name: String,
        /// Amount (e.g., "150" or "149.50")
        amount: String,
        /// Category key (food, transport, education, entertainment, shopping, health, utilities, other)
        #[arg(short, long, default_value = "other")]
        category: String,
        /// Date of the expense (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Optional notes
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// List expenses, newest first
    #[command(alias = "ls")]
    List {
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,
        /// Case-insensitive search over name and notes
        #[arg(short, long)]
        search: Option<String>,
        /// Maximum number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Delete an expense by ID
    #[command(alias = "rm")]
    Delete {
        /// Expense ID (full UUID or exp-xxxxxxxx)
        id: String,
    },
}

fn parse_category(key: &str) -> ExpenseResult<ExpenseCategory> {
    key.parse::<ExpenseCategory>()
        .map_err(|e| ExpenseError::Validation(e.to_string()))
}

fn parse_amount(amount: &str) -> ExpenseResult<Money> {
    Money::parse(amount).map_err(|e| ExpenseError::Validation(format!("Invalid amount: {}", e)))
}

fn parse_date(date: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| {
        ExpenseError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", date))
    })
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            category,
            date,
            notes,
        } => {
            let input = CreateExpenseInput {
                date: date.as_deref().map(parse_date).transpose()?,
                notes,
                ..CreateExpenseInput::new(name, parse_amount(&amount)?, parse_category(&category)?)
            };

            let expense = service.create(input)?;
            println!("Added expense:");
            print!("{}", format_expense_details(&expense, symbol, &settings.date_format));
        }

        ExpenseCommands::List {
            category,
            search,
            limit,
        } => {
            let mut filter = ExpenseFilter::new().limit(limit.unwrap_or(settings.default_list_limit));
            if let Some(category) = category {
                filter = filter.category(parse_category(&category)?);
            }
            if let Some(search) = search {
                filter = filter.search(search);
            }

            let expenses = service.list(&filter)?;
            println!("{}", format_expense_table(&expenses, symbol, &settings.date_format));
        }

        ExpenseCommands::Delete { id } => {
            let expense = service.delete(&id)?;
            println!(
                "Deleted expense {} ({}, {})",
                expense.id,
                expense.name,
                expense.amount.format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("Food").unwrap(), ExpenseCategory::Food);
        assert!(parse_category("groceries").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("149.50").unwrap(), Money::from_paise(14950));
        assert!(parse_amount("abc").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-01-28").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 28).unwrap()
        );
        assert!(parse_date("28/01/2024").unwrap_err().is_validation());
    }
}
