//! Storage initialization
//!
//! First-run setup: directories, a default profile and optionally the demo
//! expenses.

use tracing::info;

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::UserProfile;

use super::demo::{demo_expenses, demo_profile};
use super::{ExpenseRepository, UserRepository};

/// What `initialize_storage` actually wrote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InitOutcome {
    pub profile_created: bool,
    pub demo_expenses_seeded: usize,
}

/// Initialize storage for a fresh installation
///
/// Existing profile or expense data is never overwritten.
pub fn initialize_storage(paths: &ExpensePaths, seed_demo: bool) -> Result<InitOutcome, ExpenseError> {
    paths.ensure_directories()?;

    let mut outcome = InitOutcome::default();

    let users = UserRepository::new(paths.user_file());
    users.load()?;
    let profile = match users.get()? {
        Some(profile) => profile,
        None => {
            let profile = if seed_demo {
                demo_profile()
            } else {
                default_profile()
            };
            users.set(profile.clone())?;
            users.save()?;
            outcome.profile_created = true;
            info!(user = %profile.id, "created user profile");
            profile
        }
    };

    if seed_demo && !paths.expenses_file().exists() {
        let expenses = ExpenseRepository::new(paths.expenses_file());
        for expense in demo_expenses(profile.id) {
            expenses.upsert(expense)?;
        }
        expenses.save()?;
        outcome.demo_expenses_seeded = expenses.count()?;
        info!(count = outcome.demo_expenses_seeded, "seeded demo expenses");
    }

    Ok(outcome)
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &ExpensePaths) -> bool {
    !paths.is_initialized()
}

fn default_profile() -> UserProfile {
    let demo = demo_profile();
    UserProfile::new("Student").with_budget(demo.budget, demo.savings_goal)
}
