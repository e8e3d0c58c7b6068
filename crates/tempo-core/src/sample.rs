//! Seed data for demos and tests
//!
//! The record set the original application ships with: one month of a
//! student's transactions and class attendance.

use chrono::{NaiveDate, NaiveTime};

use crate::models::{AttendanceRecord, AttendanceStatus, Transaction, TransactionKind};
use crate::store::RecordStore;

fn date(day: u32) -> NaiveDate {
    // Sample data lives in October 2024
    NaiveDate::from_ymd_opt(2024, 10, day).expect("valid sample date")
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid sample time")
}

/// Sample transactions: one scholarship payment and four expenses
pub fn transactions() -> Vec<Transaction> {
    vec![
        Transaction::new(
            TransactionKind::Income,
            1500.0,
            "Scholarship",
            "Monthly scholarship",
            date(1),
        ),
        Transaction::new(
            TransactionKind::Expense,
            450.0,
            "Food",
            "Grocery shopping",
            date(2),
        ),
        Transaction::new(
            TransactionKind::Expense,
            120.0,
            "Transport",
            "Bus pass",
            date(3),
        ),
        Transaction::new(
            TransactionKind::Expense,
            80.0,
            "Entertainment",
            "Movie tickets",
            date(4),
        ),
        Transaction::new(
            TransactionKind::Expense,
            35.0,
            "Supplies",
            "Notebooks",
            date(5),
        ),
    ]
}

/// Sample attendance: a week of classes with two late arrivals and one absence
pub fn attendance() -> Vec<AttendanceRecord> {
    vec![
        AttendanceRecord::new(
            date(1),
            "Mathematics",
            time(9, 0),
            Some(time(9, 0)),
            AttendanceStatus::OnTime,
            None,
        ),
        AttendanceRecord::new(
            date(1),
            "Chemistry",
            time(11, 0),
            Some(time(11, 5)),
            AttendanceStatus::Late,
            Some("Bus delay".to_string()),
        ),
        AttendanceRecord::new(
            date(2),
            "History",
            time(10, 0),
            Some(time(9, 58)),
            AttendanceStatus::OnTime,
            None,
        ),
        AttendanceRecord::new(
            date(2),
            "Physics",
            time(14, 0),
            None,
            AttendanceStatus::Absent,
            Some("Sick".to_string()),
        ),
        AttendanceRecord::new(
            date(3),
            "Mathematics",
            time(9, 0),
            Some(time(9, 0)),
            AttendanceStatus::OnTime,
            None,
        ),
        AttendanceRecord::new(
            date(3),
            "English",
            time(13, 0),
            Some(time(13, 0)),
            AttendanceStatus::OnTime,
            None,
        ),
        AttendanceRecord::new(
            date(4),
            "Chemistry",
            time(11, 0),
            Some(time(11, 15)),
            AttendanceStatus::Late,
            Some("Overslept".to_string()),
        ),
    ]
}

/// A record store seeded with the full sample set
pub fn store() -> RecordStore {
    let mut store = RecordStore::new();
    for tx in transactions() {
        store
            .add_transaction(tx)
            .expect("sample transactions are valid");
    }
    for record in attendance() {
        store
            .add_attendance(record)
            .expect("sample attendance records are valid");
    }
    store
}
