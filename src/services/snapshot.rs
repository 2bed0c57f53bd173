//! Snapshot loading
//!
//! Reads a consistent copy of the profile and its expenses for analysis. When
//! the stores can't be read and the demo fallback is enabled, the demo dataset
//! stands in and a warning is logged.

use serde::Serialize;
use tracing::{debug, warn};

use crate::analysis::{Analysis, BudgetAnalytics};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, UserProfile};
use crate::storage::demo::{demo_expenses, demo_profile};
use crate::storage::Storage;

/// Where a snapshot came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotSource {
    Store,
    Demo,
}

/// A profile and its expenses, copied out of the stores
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub profile: UserProfile,
    pub expenses: Vec<Expense>,
    pub source: SnapshotSource,
}

impl Snapshot {
    /// The demo dataset
    pub fn demo() -> Self {
        let profile = demo_profile();
        let expenses = demo_expenses(profile.id);
        Self {
            profile,
            expenses,
            source: SnapshotSource::Demo,
        }
    }

    pub fn is_demo(&self) -> bool {
        self.source == SnapshotSource::Demo
    }

    /// Run the budget analyzer over this snapshot
    pub fn analyze(&self, day_of_month: u32) -> Analysis {
        let analysis = Analysis::generate(&self.profile, &self.expenses, day_of_month);
        debug!(
            expenses = self.expenses.len(),
            day_of_month,
            usage = %analysis.usage,
            alerts = analysis.alerts.len(),
            "analysis run"
        );
        analysis
    }

    /// Spending analytics for this snapshot
    pub fn analytics(&self, day_of_month: u32) -> BudgetAnalytics {
        debug!(expenses = self.expenses.len(), day_of_month, "analytics run");
        BudgetAnalytics::generate(&self.profile, &self.expenses, day_of_month)
    }
}

/// Loads snapshots from storage
pub struct SnapshotService<'a> {
    storage: &'a Storage,
    demo_fallback: bool,
}

impl<'a> SnapshotService<'a> {
    pub fn new(storage: &'a Storage, demo_fallback: bool) -> Self {
        Self {
            storage,
            demo_fallback,
        }
    }

    /// Load the profile and its expenses
    pub fn load(&self) -> ExpenseResult<Snapshot> {
        match self.load_from_store() {
            Ok(snapshot) => Ok(snapshot),
            Err(e) if self.demo_fallback => {
                warn!(error = %e, "stores unavailable, showing demo data");
                Ok(Snapshot::demo())
            }
            Err(e) => Err(e),
        }
    }

    fn load_from_store(&self) -> ExpenseResult<Snapshot> {
        self.storage.load_all()?;

        let profile = self
            .storage
            .user
            .get()?
            .ok_or_else(|| ExpenseError::user_not_found("profile"))?;

        let all = self.storage.expenses.get_all()?;
        let total = all.len();
        let expenses: Vec<_> = all
            .into_iter()
            .filter(|e| e.user_id == profile.id)
            .collect();

        if expenses.len() < total {
            warn!(
                skipped = total - expenses.len(),
                "ignoring expenses that belong to another profile"
            );
        }

        Ok(Snapshot {
            profile,
            expenses,
            source: SnapshotSource::Store,
        })
    }
}
