//! Display formatting for terminal output
//!
//! Turns analyzer output and stored expenses into text.

pub mod alerts;
pub mod analytics;
pub mod dashboard;
pub mod expense;
pub mod report;

pub use alerts::format_alerts;
pub use analytics::{format_analytics, format_category_breakdown};
pub use dashboard::format_dashboard;
pub use expense::{format_expense_details, format_expense_table};
