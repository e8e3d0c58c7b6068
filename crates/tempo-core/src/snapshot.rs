//! Snapshot storage adapter
//!
//! The core keeps everything in memory; whoever owns the UI decides where
//! the two record sequences live between sessions. This adapter is the
//! default: a single JSON file holding both sequences verbatim.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{AttendanceRecord, Transaction};

/// The two record sequences, exactly as stored
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
}

impl Snapshot {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let snapshot = serde_json::from_str(&raw)?;
        Ok(snapshot)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)?;
        tracing::debug!(
            path = %path.display(),
            transactions = self.transactions.len(),
            attendance = self.attendance.len(),
            "Snapshot saved"
        );
        Ok(())
    }
}
