//! Tempo Core Library
//!
//! Shared functionality for the Tempo student budget and punctuality tracker:
//! - In-memory record store for transactions and attendance
//! - Pure aggregation engine (totals, balance, category spend, budget
//!   progress, punctuality rates, week buckets, lateness)
//! - Insight rules engine producing advisory messages
//! - TOML configuration with the shipped defaults
//! - JSON snapshot adapter for external storage

pub mod aggregate;
pub mod config;
pub mod error;
pub mod insights;
pub mod models;
pub mod sample;
pub mod snapshot;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use insights::{Insight, InsightEngine, InsightKind, RuleContext, Severity};
pub use models::{
    AttendanceRecord, AttendanceStatus, AttendanceSummary, BudgetLimit, CategorySpending,
    CategorySummary, PeriodPunctuality, SubjectPunctuality, Transaction, TransactionKind,
};
pub use snapshot::Snapshot;
pub use store::RecordStore;
