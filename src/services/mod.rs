//! Service layer for ExpenseX
//!
//! Business logic on top of the storage layer: intake validation, audit
//! logging and snapshot loading for the analyzer.

pub mod expense;
pub mod snapshot;
pub mod user;

pub use expense::{CreateExpenseInput, ExpenseFilter, ExpenseService};
pub use snapshot::{Snapshot, SnapshotService, SnapshotSource};
pub use user::UserService;
