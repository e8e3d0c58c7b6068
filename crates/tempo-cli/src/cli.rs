//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tempo - Track your budget and punctuality as a student
#[derive(Parser)]
#[command(name = "tempo")]
#[command(about = "Student budget and punctuality tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Snapshot file holding the record sequences
    #[arg(long, default_value = "tempo.json", global = true)]
    pub data: PathBuf,

    /// Optional TOML config (budget limits, subjects, goals)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the snapshot file
    Init {
        /// Seed with the bundled sample month of data
        #[arg(long)]
        sample: bool,

        /// Overwrite an existing snapshot file
        #[arg(long)]
        force: bool,
    },

    /// Show the combined overview (balance, attendance, top insights)
    Dashboard {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Budget tracking (summary, list, add, edit, remove)
    Budget {
        #[command(subcommand)]
        action: Option<BudgetAction>,
    },

    /// Attendance logging (summary, list, log, edit, remove, weekly, subjects)
    Attendance {
        #[command(subcommand)]
        action: Option<AttendanceAction>,
    },

    /// Show all advisory insights
    Insights {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum BudgetAction {
    /// Totals, per-category progress against limits, and budget insights
    Summary {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List transactions, most recent first
    List {
        /// Maximum number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Add a transaction
    Add {
        /// income or expense
        #[arg(short, long, default_value = "expense")]
        kind: String,

        /// Amount in whole currency units (non-negative)
        #[arg(short, long)]
        amount: f64,

        /// Category, e.g. Food or Scholarship
        #[arg(short, long)]
        category: String,

        /// Free-text description
        #[arg(short, long)]
        description: String,

        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Edit a transaction (unset fields keep their current values)
    Edit {
        /// Transaction id
        id: String,

        /// income or expense
        #[arg(short, long)]
        kind: Option<String>,

        #[arg(short, long)]
        amount: Option<f64>,

        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// Transaction date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Remove a transaction
    Remove {
        /// Transaction id
        id: String,
    },
}

#[derive(Subcommand)]
pub enum AttendanceAction {
    /// Counters, overall rate and punctuality insights
    Summary {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List attendance records, most recent first
    List {
        /// Maximum number of records to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Log attendance for a class
    Log {
        /// Subject name from the configured roster
        #[arg(short, long)]
        subject: String,

        /// Scheduled class time (HH:MM)
        #[arg(long)]
        scheduled: String,

        /// Actual arrival time (HH:MM); omit when absent
        #[arg(long)]
        actual: Option<String>,

        /// on-time, late or absent
        #[arg(long, default_value = "on-time")]
        status: String,

        /// Class date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Optional note, e.g. reason for delay
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Edit an attendance record (unset fields keep their current values)
    Edit {
        /// Record id
        id: String,

        /// Subject name from the configured roster
        #[arg(short, long)]
        subject: Option<String>,

        /// Scheduled class time (HH:MM)
        #[arg(long)]
        scheduled: Option<String>,

        /// Actual arrival time (HH:MM)
        #[arg(long)]
        actual: Option<String>,

        /// on-time, late or absent
        #[arg(long)]
        status: Option<String>,

        /// Class date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Optional note, e.g. reason for delay
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Remove an attendance record
    Remove {
        /// Record id
        id: String,
    },

    /// Punctuality rate per week of the month
    Weekly {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Punctuality rate per subject
    Subjects {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}
