//! Report CLI commands: dashboard, alerts, categories, analytics, history

use serde::Serialize;

use crate::analysis::Analysis;
use crate::config::settings::Settings;
use crate::display::{format_alerts, format_analytics, format_category_breakdown, format_dashboard};
use crate::error::ExpenseResult;
use crate::models::UserProfile;
use crate::services::{Snapshot, SnapshotService, SnapshotSource};
use crate::storage::Storage;

#[derive(Serialize)]
struct DashboardJson<'a> {
    source: SnapshotSource,
    profile: &'a UserProfile,
    #[serde(flatten)]
    analysis: &'a Analysis,
}

fn load_snapshot(storage: &Storage, settings: &Settings) -> ExpenseResult<Snapshot> {
    SnapshotService::new(storage, settings.demo_fallback).load()
}

fn print_json<T: Serialize>(value: &T) -> ExpenseResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Show the dashboard
pub fn handle_dashboard(
    storage: &Storage,
    settings: &Settings,
    day_of_month: u32,
    json: bool,
) -> ExpenseResult<()> {
    let snapshot = load_snapshot(storage, settings)?;
    let analysis = snapshot.analyze(day_of_month);

    if json {
        return print_json(&DashboardJson {
            source: snapshot.source,
            profile: &snapshot.profile,
            analysis: &analysis,
        });
    }

    print!(
        "{}",
        format_dashboard(
            &snapshot.profile,
            &analysis,
            &settings.currency_symbol,
            snapshot.is_demo()
        )
    );
    Ok(())
}

/// Show budget alerts
pub fn handle_alerts(
    storage: &Storage,
    settings: &Settings,
    day_of_month: u32,
    json: bool,
) -> ExpenseResult<()> {
    let analysis = load_snapshot(storage, settings)?.analyze(day_of_month);

    if json {
        return print_json(&analysis.alerts);
    }

    print!("{}", format_alerts(&analysis.alerts, &settings.currency_symbol));
    Ok(())
}

/// Show spending per category
pub fn handle_categories(storage: &Storage, settings: &Settings) -> ExpenseResult<()> {
    let snapshot = load_snapshot(storage, settings)?;
    let totals = crate::analysis::compute_category_totals(&snapshot.expenses);

    println!(
        "{}",
        format_category_breakdown(&totals, &settings.currency_symbol).trim_end()
    );
    Ok(())
}

/// Show spending analytics
pub fn handle_analytics(
    storage: &Storage,
    settings: &Settings,
    day_of_month: u32,
    json: bool,
) -> ExpenseResult<()> {
    let snapshot = load_snapshot(storage, settings)?;
    let analytics = snapshot.analytics(day_of_month);

    if json {
        return print_json(&analytics);
    }

    print!(
        "{}",
        format_analytics(&analytics, snapshot.profile.budget, &settings.currency_symbol)
    );
    Ok(())
}

/// Show the most recent audit entries
pub fn handle_history(storage: &Storage, count: usize) -> ExpenseResult<()> {
    let entries = storage.audit().read_recent(count)?;

    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry);
    }
    Ok(())
}
