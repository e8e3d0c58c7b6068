//! Domain models for Tempo

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Direction of a financial transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction kind: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A financial transaction
///
/// Ids are assigned by the record store on insert; a freshly constructed
/// transaction carries an empty id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionKind,
    /// Always non-negative; direction comes from `kind`
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

impl Transaction {
    /// Create a transaction with no id (the store assigns one on add)
    pub fn new(
        kind: TransactionKind,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: String::new(),
            kind,
            amount,
            category: category.into(),
            description: description.into(),
            date,
        }
    }
}

/// Attendance outcome for a scheduled class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceStatus {
    OnTime,
    Late,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnTime => "on-time",
            Self::Late => "late",
            Self::Absent => "absent",
        }
    }
}

impl std::str::FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "on-time" | "ontime" => Ok(Self::OnTime),
            "late" => Ok(Self::Late),
            "absent" => Ok(Self::Absent),
            _ => Err(format!("Unknown attendance status: {}", s)),
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An attendance record for one scheduled class
///
/// Invariant: `status == Absent` implies `actual_time` is `None`;
/// `OnTime`/`Late` imply it is `Some`. The store enforces this on add/update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,
    pub date: NaiveDate,
    pub subject: String,
    pub scheduled_time: NaiveTime,
    /// None when the class was missed entirely
    pub actual_time: Option<NaiveTime>,
    pub status: AttendanceStatus,
    pub notes: Option<String>,
}

impl AttendanceRecord {
    /// Create a record with no id (the store assigns one on add)
    pub fn new(
        date: NaiveDate,
        subject: impl Into<String>,
        scheduled_time: NaiveTime,
        actual_time: Option<NaiveTime>,
        status: AttendanceStatus,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: String::new(),
            date,
            subject: subject.into(),
            scheduled_time,
            actual_time,
            status,
            notes,
        }
    }
}

/// A configured spending ceiling for one expense category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetLimit {
    pub category: String,
    pub limit: f64,
}

/// Total expense spend in one category (derived, first-occurrence order)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySpending {
    pub category: String,
    pub amount: f64,
}

/// Spend measured against a configured limit (derived, never stored)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub spent: f64,
    pub limit: f64,
    /// round(spent / limit * 100); can exceed 100 when over budget
    pub percentage: i64,
}

/// Punctuality counters for one period bucket (derived)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodPunctuality {
    /// Bucket label, e.g. "W1"
    pub period: String,
    pub on_time: usize,
    pub late: usize,
    pub absent: usize,
    /// None when the bucket is empty (rate is undefined, not zero)
    pub rate: Option<i64>,
}

/// Punctuality rate for one subject (derived; subjects with no records
/// are excluded from the result)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectPunctuality {
    pub subject: String,
    pub rate: i64,
    pub total: usize,
}

/// Overall attendance counters (derived)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub total: usize,
    pub on_time: usize,
    pub late: usize,
    pub absent: usize,
    /// None when there are no records at all
    pub rate: Option<i64>,
}
