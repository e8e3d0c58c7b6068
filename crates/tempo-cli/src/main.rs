//! Tempo CLI - Student budget and punctuality tracker
//!
//! Usage:
//!   tempo init --sample          Create a snapshot seeded with demo data
//!   tempo dashboard              Combined overview
//!   tempo budget summary         Spending against limits plus insights
//!   tempo attendance log ...     Record a class attendance
//!   tempo insights               All advisory insights

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Init { sample, force } => commands::cmd_init(&cli.data, sample, force),
        Commands::Dashboard { json } => {
            let store = commands::open_store(&cli.data)?;
            commands::cmd_dashboard(&store, &config, json)
        }
        Commands::Budget { action } => {
            let mut store = commands::open_store(&cli.data)?;
            match action {
                None | Some(BudgetAction::Summary { json: false }) => {
                    commands::cmd_budget_summary(&store, &config, false)
                }
                Some(BudgetAction::Summary { json }) => {
                    commands::cmd_budget_summary(&store, &config, json)
                }
                Some(BudgetAction::List { limit }) => commands::cmd_budget_list(&store, limit),
                Some(BudgetAction::Add {
                    kind,
                    amount,
                    category,
                    description,
                    date,
                }) => commands::cmd_budget_add(
                    &mut store,
                    &cli.data,
                    &kind,
                    amount,
                    &category,
                    &description,
                    date.as_deref(),
                ),
                Some(BudgetAction::Edit {
                    id,
                    kind,
                    amount,
                    category,
                    description,
                    date,
                }) => commands::cmd_budget_edit(
                    &mut store,
                    &cli.data,
                    &id,
                    kind.as_deref(),
                    amount,
                    category.as_deref(),
                    description.as_deref(),
                    date.as_deref(),
                ),
                Some(BudgetAction::Remove { id }) => {
                    commands::cmd_budget_remove(&mut store, &cli.data, &id)
                }
            }
        }
        Commands::Attendance { action } => {
            let mut store = commands::open_store(&cli.data)?;
            match action {
                None | Some(AttendanceAction::Summary { json: false }) => {
                    commands::cmd_attendance_summary(&store, &config, false)
                }
                Some(AttendanceAction::Summary { json }) => {
                    commands::cmd_attendance_summary(&store, &config, json)
                }
                Some(AttendanceAction::List { limit }) => {
                    commands::cmd_attendance_list(&store, limit)
                }
                Some(AttendanceAction::Log {
                    subject,
                    scheduled,
                    actual,
                    status,
                    date,
                    notes,
                }) => commands::cmd_attendance_log(
                    &mut store,
                    &cli.data,
                    &subject,
                    &scheduled,
                    actual.as_deref(),
                    &status,
                    date.as_deref(),
                    notes,
                ),
                Some(AttendanceAction::Edit {
                    id,
                    subject,
                    scheduled,
                    actual,
                    status,
                    date,
                    notes,
                }) => commands::cmd_attendance_edit(
                    &mut store,
                    &cli.data,
                    &id,
                    subject.as_deref(),
                    scheduled.as_deref(),
                    actual.as_deref(),
                    status.as_deref(),
                    date.as_deref(),
                    notes,
                ),
                Some(AttendanceAction::Remove { id }) => {
                    commands::cmd_attendance_remove(&mut store, &cli.data, &id)
                }
                Some(AttendanceAction::Weekly { json }) => {
                    commands::cmd_attendance_weekly(&store, json)
                }
                Some(AttendanceAction::Subjects { json }) => {
                    commands::cmd_attendance_subjects(&store, &config, json)
                }
            }
        }
        Commands::Insights { json } => {
            let store = commands::open_store(&cli.data)?;
            commands::cmd_insights(&store, &config, json)
        }
    }
}
