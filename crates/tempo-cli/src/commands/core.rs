//! Init command and shared helpers

use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, NaiveTime, Utc};

use tempo_core::{sample, Config, RecordStore, Snapshot};

/// Load the tracker config, falling back to the shipped defaults
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Config::default()),
    }
}

/// Load the record store from the snapshot file
pub fn open_store(data: &Path) -> Result<RecordStore> {
    if !data.exists() {
        bail!(
            "No data file at {}. Run `tempo init` first.",
            data.display()
        );
    }
    let snapshot = Snapshot::load(data)
        .with_context(|| format!("Failed to read snapshot {}", data.display()))?;
    let store = RecordStore::from_snapshot(snapshot)?;
    tracing::debug!(
        transactions = store.transactions().len(),
        attendance = store.attendance().len(),
        "Loaded snapshot"
    );
    Ok(store)
}

/// Persist the record store back to the snapshot file
pub fn save_store(store: &RecordStore, data: &Path) -> Result<()> {
    store
        .snapshot()
        .save(data)
        .with_context(|| format!("Failed to write snapshot {}", data.display()))
}

/// Parse a YYYY-MM-DD date, defaulting to today when not given
pub fn resolve_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .context("Invalid date format (use YYYY-MM-DD)"),
        None => Ok(Utc::now().date_naive()),
    }
}

/// Parse an HH:MM time of day
pub fn parse_time(raw: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M").context("Invalid time format (use HH:MM)")
}

pub fn cmd_init(data: &Path, sample: bool, force: bool) -> Result<()> {
    if data.exists() && !force {
        bail!(
            "{} already exists. Pass --force to overwrite it.",
            data.display()
        );
    }

    let store = if sample {
        sample::store()
    } else {
        RecordStore::new()
    };
    save_store(&store, data)?;

    println!(
        "✅ Created {} ({} transactions, {} attendance records)",
        data.display(),
        store.transactions().len(),
        store.attendance().len()
    );
    Ok(())
}
