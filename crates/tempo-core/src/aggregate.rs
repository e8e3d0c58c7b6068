//! Aggregation engine
//!
//! Pure, deterministic folds from the record store's sequences into derived
//! summaries. Nothing here mutates or caches; every function recomputes from
//! scratch on each call. Category and week orderings follow first-occurrence
//! order in the underlying sequence, never an alphabetical sort.

use chrono::{Datelike, NaiveTime};

use crate::error::{Error, Result};
use crate::models::{
    AttendanceRecord, AttendanceStatus, AttendanceSummary, BudgetLimit, CategorySpending,
    CategorySummary, PeriodPunctuality, SubjectPunctuality, Transaction, TransactionKind,
};

/// Round a ratio to a whole percentage
fn percent(part: f64, whole: f64) -> i64 {
    (part / whole * 100.0).round() as i64
}

/// Sum of amounts over transactions of the given kind; 0 for empty input
pub fn total_by_kind(transactions: &[Transaction], kind: TransactionKind) -> f64 {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// Income minus expenses
pub fn balance(transactions: &[Transaction]) -> f64 {
    total_by_kind(transactions, TransactionKind::Income)
        - total_by_kind(transactions, TransactionKind::Expense)
}

/// Expense totals per category, in first-occurrence order
///
/// Categories with no expense transactions are absent from the result,
/// not present with a zero amount.
pub fn expenses_by_category(transactions: &[Transaction]) -> Vec<CategorySpending> {
    let mut spending: Vec<CategorySpending> = Vec::new();
    for tx in transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
    {
        match spending.iter_mut().find(|s| s.category == tx.category) {
            Some(entry) => entry.amount += tx.amount,
            None => spending.push(CategorySpending {
                category: tx.category.clone(),
                amount: tx.amount,
            }),
        }
    }
    spending
}

/// The highest-spending category, ties broken by first occurrence
pub fn highest_spending(transactions: &[Transaction]) -> Option<CategorySpending> {
    let mut spending = expenses_by_category(transactions);
    // Stable sort so equal amounts keep sequence order
    spending.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    spending.into_iter().next()
}

/// Spend measured against every configured limit, in config order
///
/// Every configured category gets exactly one entry, with `spent`
/// defaulting to 0 when nothing was charged against it. A non-positive
/// limit is a configuration error, not a divide-by-zero.
pub fn budget_progress(
    transactions: &[Transaction],
    limits: &[BudgetLimit],
) -> Result<Vec<CategorySummary>> {
    let spending = expenses_by_category(transactions);
    limits
        .iter()
        .map(|limit| {
            if limit.limit <= 0.0 {
                return Err(Error::Config(format!(
                    "budget limit for {} must be positive, got {}",
                    limit.category, limit.limit
                )));
            }
            let spent = spending
                .iter()
                .find(|s| s.category == limit.category)
                .map(|s| s.amount)
                .unwrap_or(0.0);
            Ok(CategorySummary {
                category: limit.category.clone(),
                spent,
                limit: limit.limit,
                percentage: percent(spent, limit.limit),
            })
        })
        .collect()
}

/// Overall punctuality rate; None when there are no records
///
/// An empty log has no rate. Neither 0 nor 100 describes it.
pub fn punctuality_rate(records: &[AttendanceRecord]) -> Option<i64> {
    if records.is_empty() {
        return None;
    }
    let on_time = records
        .iter()
        .filter(|r| r.status == AttendanceStatus::OnTime)
        .count();
    Some(percent(on_time as f64, records.len() as f64))
}

/// Status counters plus the overall rate
pub fn attendance_summary(records: &[AttendanceRecord]) -> AttendanceSummary {
    let mut summary = AttendanceSummary {
        total: records.len(),
        on_time: 0,
        late: 0,
        absent: 0,
        rate: punctuality_rate(records),
    };
    for record in records {
        match record.status {
            AttendanceStatus::OnTime => summary.on_time += 1,
            AttendanceStatus::Late => summary.late += 1,
            AttendanceStatus::Absent => summary.absent += 1,
        }
    }
    summary
}

/// Punctuality per week-of-month bucket, in first-encountered order
///
/// The week key is `ceil(day_of_month / 7)`, labelled "W1".."W5".
pub fn weekly_punctuality(records: &[AttendanceRecord]) -> Vec<PeriodPunctuality> {
    let mut weeks: Vec<PeriodPunctuality> = Vec::new();
    for record in records {
        let label = format!("W{}", record.date.day().div_ceil(7));
        let idx = match weeks.iter().position(|w| w.period == label) {
            Some(idx) => idx,
            None => {
                weeks.push(PeriodPunctuality {
                    period: label,
                    on_time: 0,
                    late: 0,
                    absent: 0,
                    rate: None,
                });
                weeks.len() - 1
            }
        };
        let bucket = &mut weeks[idx];
        match record.status {
            AttendanceStatus::OnTime => bucket.on_time += 1,
            AttendanceStatus::Late => bucket.late += 1,
            AttendanceStatus::Absent => bucket.absent += 1,
        }
    }
    for bucket in &mut weeks {
        let total = bucket.on_time + bucket.late + bucket.absent;
        if total > 0 {
            bucket.rate = Some(percent(bucket.on_time as f64, total as f64));
        }
    }
    weeks
}

/// Punctuality per subject, for subjects with at least one record
///
/// Unlike [`budget_progress`], subjects with no records are excluded
/// rather than reported at zero.
pub fn subject_punctuality(
    records: &[AttendanceRecord],
    subjects: &[String],
) -> Vec<SubjectPunctuality> {
    subjects
        .iter()
        .filter_map(|subject| {
            let subject_records: Vec<&AttendanceRecord> =
                records.iter().filter(|r| &r.subject == subject).collect();
            if subject_records.is_empty() {
                return None;
            }
            let on_time = subject_records
                .iter()
                .filter(|r| r.status == AttendanceStatus::OnTime)
                .count();
            Some(SubjectPunctuality {
                subject: subject.clone(),
                rate: percent(on_time as f64, subject_records.len() as f64),
                total: subject_records.len(),
            })
        })
        .collect()
}

/// Signed minute offset between scheduled and actual arrival
///
/// Positive means late, negative early. None when the student was absent.
pub fn lateness(scheduled: NaiveTime, actual: Option<NaiveTime>) -> Option<i64> {
    actual.map(|a| (a - scheduled).num_minutes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn tx(kind: TransactionKind, amount: f64, category: &str) -> Transaction {
        Transaction::new(kind, amount, category, "test", date(1))
    }

    fn record(day: u32, subject: &str, status: AttendanceStatus) -> AttendanceRecord {
        let actual = match status {
            AttendanceStatus::Absent => None,
            _ => Some(time(9, 0)),
        };
        AttendanceRecord::new(date(day), subject, time(9, 0), actual, status, None)
    }

    fn scenario_transactions() -> Vec<Transaction> {
        vec![
            tx(TransactionKind::Income, 1500.0, "Scholarship"),
            tx(TransactionKind::Expense, 450.0, "Food"),
            tx(TransactionKind::Expense, 120.0, "Transport"),
        ]
    }

    #[test]
    fn test_totals_and_balance_scenario() {
        let txs = scenario_transactions();
        assert_eq!(total_by_kind(&txs, TransactionKind::Income), 1500.0);
        assert_eq!(total_by_kind(&txs, TransactionKind::Expense), 570.0);
        assert_eq!(balance(&txs), 930.0);
    }

    #[test]
    fn test_totals_empty_input() {
        assert_eq!(total_by_kind(&[], TransactionKind::Income), 0.0);
        assert_eq!(balance(&[]), 0.0);
    }

    #[test]
    fn test_expenses_by_category_scenario() {
        let by_cat = expenses_by_category(&scenario_transactions());
        assert_eq!(by_cat.len(), 2);
        assert_eq!(by_cat[0].category, "Food");
        assert_eq!(by_cat[0].amount, 450.0);
        assert_eq!(by_cat[1].category, "Transport");
        assert_eq!(by_cat[1].amount, 120.0);
    }

    #[test]
    fn test_expenses_by_category_sums_match_expense_total() {
        let txs = vec![
            tx(TransactionKind::Expense, 450.0, "Food"),
            tx(TransactionKind::Expense, 30.0, "Food"),
            tx(TransactionKind::Expense, 120.0, "Transport"),
            tx(TransactionKind::Income, 500.0, "Scholarship"),
        ];
        let sum: f64 = expenses_by_category(&txs).iter().map(|s| s.amount).sum();
        assert_eq!(sum, total_by_kind(&txs, TransactionKind::Expense));
    }

    #[test]
    fn test_highest_spending_tie_breaks_by_first_occurrence() {
        let txs = vec![
            tx(TransactionKind::Expense, 100.0, "Transport"),
            tx(TransactionKind::Expense, 100.0, "Food"),
        ];
        let top = highest_spending(&txs).unwrap();
        assert_eq!(top.category, "Transport");
    }

    #[test]
    fn test_budget_progress_scenario() {
        let txs = scenario_transactions();
        let limits = vec![BudgetLimit {
            category: "Food".to_string(),
            limit: 600.0,
        }];
        let progress = budget_progress(&txs, &limits).unwrap();
        assert_eq!(progress.len(), 1);
        assert_eq!(progress[0].category, "Food");
        assert_eq!(progress[0].spent, 450.0);
        assert_eq!(progress[0].limit, 600.0);
        assert_eq!(progress[0].percentage, 75);
    }

    #[test]
    fn test_budget_progress_includes_unspent_categories() {
        let limits = vec![
            BudgetLimit {
                category: "Food".to_string(),
                limit: 600.0,
            },
            BudgetLimit {
                category: "Clothing".to_string(),
                limit: 200.0,
            },
        ];
        let progress = budget_progress(&scenario_transactions(), &limits).unwrap();
        assert_eq!(progress.len(), 2);
        assert_eq!(progress[1].category, "Clothing");
        assert_eq!(progress[1].spent, 0.0);
        assert_eq!(progress[1].percentage, 0);
    }

    #[test]
    fn test_budget_progress_rejects_non_positive_limit() {
        let limits = vec![BudgetLimit {
            category: "Food".to_string(),
            limit: 0.0,
        }];
        assert!(matches!(
            budget_progress(&[], &limits),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_punctuality_rate_scenario() {
        let records = vec![
            record(1, "Math", AttendanceStatus::OnTime),
            record(1, "Chemistry", AttendanceStatus::Late),
            record(2, "History", AttendanceStatus::OnTime),
            record(2, "Physics", AttendanceStatus::Absent),
        ];
        assert_eq!(punctuality_rate(&records), Some(50));
    }

    #[test]
    fn test_punctuality_rate_empty_is_none() {
        assert_eq!(punctuality_rate(&[]), None);
    }

    #[test]
    fn test_attendance_summary_counts() {
        let records = vec![
            record(1, "Math", AttendanceStatus::OnTime),
            record(2, "Math", AttendanceStatus::Late),
            record(3, "Math", AttendanceStatus::Absent),
            record(4, "Math", AttendanceStatus::OnTime),
        ];
        let summary = attendance_summary(&records);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.on_time, 2);
        assert_eq!(summary.late, 1);
        assert_eq!(summary.absent, 1);
        assert_eq!(summary.rate, Some(50));
    }

    #[test]
    fn test_weekly_punctuality_buckets_by_day_of_month() {
        let records = vec![
            record(1, "Math", AttendanceStatus::OnTime), // W1
            record(7, "Math", AttendanceStatus::Late),   // W1
            record(8, "Math", AttendanceStatus::OnTime), // W2
        ];
        let weeks = weekly_punctuality(&records);
        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].period, "W1");
        assert_eq!(weeks[0].on_time, 1);
        assert_eq!(weeks[0].late, 1);
        assert_eq!(weeks[0].rate, Some(50));
        assert_eq!(weeks[1].period, "W2");
        assert_eq!(weeks[1].rate, Some(100));
    }

    #[test]
    fn test_weekly_punctuality_keeps_first_encounter_order() {
        let records = vec![
            record(15, "Math", AttendanceStatus::OnTime), // W3
            record(2, "Math", AttendanceStatus::OnTime),  // W1
        ];
        let weeks = weekly_punctuality(&records);
        let labels: Vec<&str> = weeks.iter().map(|w| w.period.as_str()).collect();
        assert_eq!(labels, ["W3", "W1"]);
    }

    #[test]
    fn test_subject_punctuality_excludes_empty_subjects() {
        let subjects = vec!["Math".to_string(), "Biology".to_string()];
        let records = vec![
            record(1, "Math", AttendanceStatus::OnTime),
            record(2, "Math", AttendanceStatus::Late),
        ];
        let by_subject = subject_punctuality(&records, &subjects);
        assert_eq!(by_subject.len(), 1);
        assert_eq!(by_subject[0].subject, "Math");
        assert_eq!(by_subject[0].rate, 50);
        assert_eq!(by_subject[0].total, 2);
    }

    #[test]
    fn test_lateness_signed_minutes() {
        assert_eq!(lateness(time(9, 0), Some(time(9, 5))), Some(5));
        assert_eq!(lateness(time(10, 0), Some(time(9, 58))), Some(-2));
        assert_eq!(lateness(time(9, 0), Some(time(9, 0))), Some(0));
        assert_eq!(lateness(time(9, 0), None), None);
    }
}
