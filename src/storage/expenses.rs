//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ExpenseError;
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable expense data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk
    pub fn load(&self) -> Result<(), ExpenseError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for expense in file_data.expenses {
            data.insert(expense.id, expense);
        }

        Ok(())
    }

    /// Save expenses to disk, newest first
    pub fn save(&self) -> Result<(), ExpenseError> {
        let file_data = ExpenseData {
            expenses: self.get_all()?,
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Find an expense by full UUID or short `exp-xxxxxxxx` form
    pub fn find(&self, identifier: &str) -> Result<Option<Expense>, ExpenseError> {
        if let Ok(id) = ExpenseId::parse(identifier) {
            return self.get(id);
        }

        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut matches = data.values().filter(|e| e.id.matches_short(identifier));
        match (matches.next(), matches.next()) {
            (Some(expense), None) => Ok(Some(expense.clone())),
            (Some(_), Some(_)) => Err(ExpenseError::Validation(format!(
                "'{}' matches more than one expense, use the full ID",
                identifier
            ))),
            _ => Ok(None),
        }
    }

    /// Get all expenses, newest date first, then newest created first
    pub fn get_all(&self) -> Result<Vec<Expense>, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut expenses: Vec<_> = data.values().cloned().collect();
        expenses.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(expenses)
    }

    /// Insert or update an expense
    pub fn upsert(&self, expense: Expense) -> Result<(), ExpenseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(expense.id, expense);
        Ok(())
    }

    /// Delete an expense
    pub fn delete(&self, id: ExpenseId) -> Result<bool, ExpenseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, Money, UserId};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let repo = ExpenseRepository::new(path);
        (temp_dir, repo)
    }

    fn expense_on(name: &str, day: u32) -> Expense {
        Expense::new(
            UserId::new(),
            name,
            Money::from_rupees(100),
            ExpenseCategory::Food,
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let expense = expense_on("Lunch", 5);
        let id = expense.id;
        repo.upsert(expense).unwrap();

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.name, "Lunch");
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();

        let expense = expense_on("Bus Pass", 3).with_notes("Monthly pass");
        let id = expense.id;
        repo.upsert(expense).unwrap();
        repo.save().unwrap();

        let repo2 = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        repo2.load().unwrap();

        let retrieved = repo2.get(id).unwrap().unwrap();
        assert_eq!(retrieved.notes.as_deref(), Some("Monthly pass"));
        assert_eq!(retrieved.amount, Money::from_rupees(100));
    }

    #[test]
    fn test_get_all_sorted_newest_first() {
        let (_temp_dir, repo) = create_test_repo();

        repo.upsert(expense_on("Old", 1)).unwrap();
        repo.upsert(expense_on("New", 20)).unwrap();
        repo.upsert(expense_on("Middle", 10)).unwrap();

        let names: Vec<_> = repo.get_all().unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["New", "Middle", "Old"]);
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();

        let expense = expense_on("Movie", 7);
        let id = expense.id;
        repo.upsert(expense).unwrap();

        assert!(repo.delete(id).unwrap());
        assert!(!repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_find_by_short_id() {
        let (_temp_dir, repo) = create_test_repo();

        let expense = expense_on("Books", 12);
        let id = expense.id;
        repo.upsert(expense).unwrap();

        let short = id.to_string();
        assert_eq!(repo.find(&short).unwrap().unwrap().id, id);
        assert_eq!(repo.find(&id.as_uuid().to_string()).unwrap().unwrap().id, id);
        assert_eq!(repo.find(&short.to_uppercase()).unwrap().unwrap().id, id);
    }

    #[test]
    fn test_find_too_short_is_none() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(expense_on("Snack", 2)).unwrap();

        assert!(repo.find("exp-").unwrap().is_none());
    }

    #[test]
    fn test_corrupt_file_fails_load() {
        let (temp_dir, repo) = create_test_repo();
        std::fs::write(temp_dir.path().join("expenses.json"), "[1, 2").unwrap();

        assert!(repo.load().is_err());
    }
}
