//! Core data models for ExpenseX
//!
//! The user profile with its budget, the expenses recorded against it, and
//! the small value types they are built from.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod user;

pub use category::ExpenseCategory;
pub use expense::Expense;
pub use ids::{ExpenseId, UserId};
pub use money::Money;
pub use user::UserProfile;
