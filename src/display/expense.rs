//! Expense display formatting
//!
//! The expense list is rendered with `tabled`.

use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::settings::is_valid_date_format;
use crate::models::{Expense, Money};

use super::report::truncate;

const NAME_WIDTH: usize = 30;
const NOTES_WIDTH: usize = 30;

/// Format `date`, using ISO dates when `date_format` has a bad specifier
fn format_date(date: NaiveDate, date_format: &str) -> String {
    if is_valid_date_format(date_format) {
        date.format(date_format).to_string()
    } else {
        date.format("%Y-%m-%d").to_string()
    }
}

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Notes")]
    notes: String,
}

impl ExpenseRow {
    fn new(expense: &Expense, symbol: &str, date_format: &str) -> Self {
        Self {
            id: expense.id.to_string(),
            date: format_date(expense.date, date_format),
            name: truncate(&expense.name, NAME_WIDTH),
            category: format!("{} {}", expense.category.icon(), expense.category.display_name()),
            amount: expense.amount.format_with_symbol(symbol),
            notes: expense
                .notes
                .as_deref()
                .map(|n| truncate(n, NOTES_WIDTH))
                .unwrap_or_default(),
        }
    }
}

/// Format expenses as a table with a total line
pub fn format_expense_table(expenses: &[Expense], symbol: &str, date_format: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let rows: Vec<_> = expenses
        .iter()
        .map(|e| ExpenseRow::new(e, symbol, date_format))
        .collect();
    let total: Money = expenses.iter().map(|e| e.amount).sum();

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    format!(
        "{}\n{} expense(s), total {}",
        table,
        expenses.len(),
        total.format_with_symbol(symbol)
    )
}

/// Format a single expense's details
pub fn format_expense_details(expense: &Expense, symbol: &str, date_format: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense:  {}\n", expense.name));
    output.push_str(&format!("ID:       {}\n", expense.id));
    output.push_str(&format!("Amount:   {}\n", expense.amount.format_with_symbol(symbol)));
    output.push_str(&format!(
        "Category: {} {}\n",
        expense.category.icon(),
        expense.category.display_name()
    ));
    output.push_str(&format!("Date:     {}\n", format_date(expense.date, date_format)));
    if let Some(notes) = &expense.notes {
        output.push_str(&format!("Notes:    {}\n", notes));
    }
    output
}
