//! ExpenseX - personal expense tracker with a budget analyzer
//!
//! Records expenses against a monthly budget and derives totals, usage
//! tiers, per-category spending and prioritized alerts from them.
//!
//! # Architecture
//!
//! - `analysis`: the budget analyzer (pure, no I/O)
//! - `config`: configuration and path management
//! - `error`: custom error types
//! - `models`: expenses, user profile, money, categories
//! - `storage`: JSON file stores and the demo dataset
//! - `services`: validation, audit logging and snapshot loading
//! - `audit`: append-only audit log
//! - `display` and `cli`: terminal front end
//!
//! # Example
//!
//! ```rust,ignore
//! use expensex::config::{paths::ExpensePaths, settings::Settings};
//! use expensex::services::SnapshotService;
//! use expensex::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! let snapshot = SnapshotService::new(&storage, settings.demo_fallback).load()?;
//! let analysis = snapshot.analyze(15);
//! ```

pub mod analysis;
pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber, writing to stderr
///
/// `RUST_LOG` is honored; without it only warnings from this crate show.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "expensex=warn".parse() {
            filter = filter.add_directive(directive);
        }

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
