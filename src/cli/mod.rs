//! CLI command handlers
//!
//! Bridges the clap argument parsing with the service layer.

pub mod budget;
pub mod expense;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use report::{handle_alerts, handle_analytics, handle_categories, handle_dashboard, handle_history};
