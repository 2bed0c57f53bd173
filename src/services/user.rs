//! User profile service

use tracing::info;

use crate::audit::{generate_diff, EntityType};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Money, UserProfile};
use crate::storage::Storage;

/// Service for the user profile and budget
pub struct UserService<'a> {
    storage: &'a Storage,
}

impl<'a> UserService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// The stored profile
    pub fn profile(&self) -> ExpenseResult<UserProfile> {
        self.storage
            .user
            .get()?
            .ok_or_else(|| ExpenseError::user_not_found("profile"))
    }

    /// Update the monthly budget and savings goal
    ///
    /// The budget must be positive and the savings goal non-negative.
    pub fn set_budget(&self, budget: Money, savings_goal: Money) -> ExpenseResult<UserProfile> {
        UserProfile::validate_budget(budget, savings_goal)
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let before = self.profile()?;
        let after = before.clone().with_budget(budget, savings_goal);

        self.storage.user.set(after.clone())?;
        self.storage.user.save()?;

        let diff = generate_diff(&serde_json::to_value(&before)?, &serde_json::to_value(&after)?);
        self.storage.log_update(
            EntityType::User,
            after.id.to_string(),
            Some(after.name.clone()),
            &before,
            &after,
            diff,
        )?;

        info!(budget = %budget, savings_goal = %savings_goal, "budget updated");
        Ok(after)
    }
}
