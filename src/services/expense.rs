//! Expense service
//!
//! Intake validation and persistence for expenses. Every create and delete is
//! written to the audit log.

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::audit::EntityType;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseCategory, Money};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

/// Options for filtering expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Exact category match
    pub category: Option<ExpenseCategory>,
    /// Case-insensitive substring of name or notes
    pub search: Option<String>,
    /// Maximum number of expenses to return
    pub limit: Option<usize>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: ExpenseCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Blank terms are ignored
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        let term = term.trim();
        self.search = (!term.is_empty()).then(|| term.to_string());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, expense: &Expense) -> bool {
        self.category.map_or(true, |c| expense.category == c)
            && self
                .search
                .as_deref()
                .map_or(true, |term| expense.matches_search(term))
    }
}

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub name: String,
    pub amount: Money,
    pub category: ExpenseCategory,
    /// Defaults to today
    pub date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl CreateExpenseInput {
    pub fn new(name: impl Into<String>, amount: Money, category: ExpenseCategory) -> Self {
        Self {
            name: name.into(),
            amount,
            category,
            date: None,
            notes: None,
        }
    }
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and store a new expense for the current user
    pub fn create(&self, input: CreateExpenseInput) -> ExpenseResult<Expense> {
        let profile = self
            .storage
            .user
            .get()?
            .ok_or_else(|| ExpenseError::user_not_found("profile"))?;

        let date = input.date.unwrap_or_else(|| Local::now().date_naive());
        let mut expense = Expense::new(
            profile.id,
            input.name.trim(),
            input.amount,
            input.category,
            date,
        );
        if let Some(notes) = input.notes {
            expense = expense.with_notes(notes);
        }

        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        self.storage.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.name.clone()),
            &expense,
        )?;

        info!(id = %expense.id, amount = %expense.amount, category = expense.category.key(), "expense created");
        Ok(expense)
    }

    /// Find an expense by full UUID or short display id
    pub fn find(&self, identifier: &str) -> ExpenseResult<Option<Expense>> {
        self.storage.expenses.find(identifier.trim())
    }

    /// Delete an expense, returning the removed record
    pub fn delete(&self, identifier: &str) -> ExpenseResult<Expense> {
        let expense = self
            .find(identifier)?
            .ok_or_else(|| ExpenseError::expense_not_found(identifier))?;

        self.storage.expenses.delete(expense.id)?;
        self.storage.expenses.save()?;

        self.storage.log_delete(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.name.clone()),
            &expense,
        )?;

        info!(id = %expense.id, "expense deleted");
        Ok(expense)
    }

    /// List expenses, newest first
    pub fn list(&self, filter: &ExpenseFilter) -> ExpenseResult<Vec<Expense>> {
        let matching = self
            .storage
            .expenses
            .get_all()?
            .into_iter()
            .filter(|e| filter.matches(e));

        Ok(match filter.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        })
    }

    /// Count stored expenses
    pub fn count(&self) -> ExpenseResult<usize> {
        self.storage.expenses.count()
    }
}
