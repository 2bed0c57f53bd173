//! Audit log for ExpenseX
//!
//! Every expense create/delete and every budget change is appended to
//! `audit.log` as one JSON object per line, with the entity state before and
//! after the change.
//!
//! # Example
//!
//! ```rust,ignore
//! use expensex::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(
//!     EntityType::Expense,
//!     expense.id.to_string(),
//!     Some(expense.name.clone()),
//!     &expense,
//! ))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
