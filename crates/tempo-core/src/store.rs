//! In-memory record store
//!
//! Owns the two insertion-ordered record sequences (transactions and
//! attendance) and is the only place that mutates them. All derived
//! summaries are recomputed from these sequences on every read, so there
//! is no cached state to invalidate. Single-writer, synchronous.

use crate::error::{Error, Result};
use crate::models::{AttendanceRecord, AttendanceStatus, Transaction};
use crate::snapshot::Snapshot;

/// A record that can live in a [`Sequence`]
trait Record {
    /// Record kind name for error messages ("transaction", "attendance record")
    const KIND: &'static str;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
    fn validate(&self) -> Result<()>;
}

impl Record for Transaction {
    const KIND: &'static str = "transaction";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn validate(&self) -> Result<()> {
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(Error::Validation(format!(
                "transaction amount must be a non-negative number, got {}",
                self.amount
            )));
        }
        if self.category.trim().is_empty() {
            return Err(Error::Validation(
                "transaction category is required".to_string(),
            ));
        }
        if self.description.trim().is_empty() {
            return Err(Error::Validation(
                "transaction description is required".to_string(),
            ));
        }
        Ok(())
    }
}

impl Record for AttendanceRecord {
    const KIND: &'static str = "attendance record";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn validate(&self) -> Result<()> {
        if self.subject.trim().is_empty() {
            return Err(Error::Validation(
                "attendance subject is required".to_string(),
            ));
        }
        match self.status {
            AttendanceStatus::Absent => {
                if self.actual_time.is_some() {
                    return Err(Error::Validation(
                        "absent records must not carry an actual arrival time".to_string(),
                    ));
                }
            }
            AttendanceStatus::OnTime | AttendanceStatus::Late => {
                if self.actual_time.is_none() {
                    return Err(Error::Validation(format!(
                        "{} records require an actual arrival time",
                        self.status
                    )));
                }
            }
        }
        Ok(())
    }
}

/// One insertion-ordered record sequence with store-owned id assignment
struct Sequence<T: Record> {
    records: Vec<T>,
    next_id: u64,
}

impl<T: Record> Sequence<T> {
    fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    /// Append a record, assigning a fresh id when the incoming one is empty
    fn add(&mut self, mut record: T) -> Result<&T> {
        record.validate()?;
        if record.id().is_empty() {
            record.set_id(self.next_id.to_string());
            self.next_id += 1;
        } else {
            if self.position(record.id()).is_some() {
                return Err(Error::Validation(format!(
                    "duplicate {} id: {}",
                    T::KIND,
                    record.id()
                )));
            }
            // Keep the counter ahead of any numeric id loaded from a snapshot
            if let Ok(n) = record.id().parse::<u64>() {
                self.next_id = self.next_id.max(n + 1);
            }
        }
        self.records.push(record);
        let idx = self.records.len() - 1;
        Ok(&self.records[idx])
    }

    /// Replace the record with `id` in place; position and id are preserved
    fn update(&mut self, id: &str, mut record: T) -> Result<&T> {
        record.validate()?;
        let pos = self
            .position(id)
            .ok_or_else(|| Error::NotFound(format!("{} {}", T::KIND, id)))?;
        record.set_id(id.to_string());
        self.records[pos] = record;
        Ok(&self.records[pos])
    }

    fn remove(&mut self, id: &str) -> Result<T> {
        let pos = self
            .position(id)
            .ok_or_else(|| Error::NotFound(format!("{} {}", T::KIND, id)))?;
        Ok(self.records.remove(pos))
    }

    fn as_slice(&self) -> &[T] {
        &self.records
    }

    /// Most-recent-first view for display
    fn list(&self) -> Vec<&T> {
        self.records.iter().rev().collect()
    }
}

/// The record store: exclusive owner of both record sequences
pub struct RecordStore {
    transactions: Sequence<Transaction>,
    attendance: Sequence<AttendanceRecord>,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            transactions: Sequence::new(),
            attendance: Sequence::new(),
        }
    }

    /// Rebuild a store from a snapshot, re-validating every record
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self> {
        let mut store = Self::new();
        for tx in snapshot.transactions {
            store.transactions.add(tx)?;
        }
        for record in snapshot.attendance {
            store.attendance.add(record)?;
        }
        Ok(store)
    }

    /// Capture both sequences for the external storage adapter
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            transactions: self.transactions.as_slice().to_vec(),
            attendance: self.attendance.as_slice().to_vec(),
        }
    }

    // ---- transactions ----

    pub fn add_transaction(&mut self, tx: Transaction) -> Result<&Transaction> {
        let added = self.transactions.add(tx)?;
        tracing::debug!(id = added.id, kind = added.kind.as_str(), "Transaction added");
        Ok(added)
    }

    pub fn update_transaction(&mut self, id: &str, tx: Transaction) -> Result<&Transaction> {
        let updated = self.transactions.update(id, tx)?;
        tracing::debug!(id = updated.id, "Transaction updated");
        Ok(updated)
    }

    pub fn remove_transaction(&mut self, id: &str) -> Result<Transaction> {
        let removed = self.transactions.remove(id)?;
        tracing::debug!(id = removed.id, "Transaction removed");
        Ok(removed)
    }

    /// Insertion-order slice (aggregation input)
    pub fn transactions(&self) -> &[Transaction] {
        self.transactions.as_slice()
    }

    /// Most-recent-first view for display
    pub fn list_transactions(&self) -> Vec<&Transaction> {
        self.transactions.list()
    }

    // ---- attendance ----

    pub fn add_attendance(&mut self, record: AttendanceRecord) -> Result<&AttendanceRecord> {
        let added = self.attendance.add(record)?;
        tracing::debug!(
            id = added.id,
            status = added.status.as_str(),
            "Attendance record added"
        );
        Ok(added)
    }

    pub fn update_attendance(
        &mut self,
        id: &str,
        record: AttendanceRecord,
    ) -> Result<&AttendanceRecord> {
        let updated = self.attendance.update(id, record)?;
        tracing::debug!(id = updated.id, "Attendance record updated");
        Ok(updated)
    }

    pub fn remove_attendance(&mut self, id: &str) -> Result<AttendanceRecord> {
        let removed = self.attendance.remove(id)?;
        tracing::debug!(id = removed.id, "Attendance record removed");
        Ok(removed)
    }

    /// Insertion-order slice (aggregation input)
    pub fn attendance(&self) -> &[AttendanceRecord] {
        self.attendance.as_slice()
    }

    /// Most-recent-first view for display
    pub fn list_attendance(&self) -> Vec<&AttendanceRecord> {
        self.attendance.list()
    }
}
