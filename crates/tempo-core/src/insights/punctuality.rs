//! Punctuality advisory rules
//!
//! A standing-performance message, a late-count nudge, and a goal-distance
//! message against the configured target rate. With an empty log the rate
//! is undefined, so no messages are produced at all.

use crate::aggregate::{attendance_summary, punctuality_rate};
use crate::models::AttendanceRecord;

use super::types::{Insight, InsightKind, Severity};

/// Evaluate the punctuality rules against the current attendance sequence
pub fn punctuality_insights(records: &[AttendanceRecord], goal: i64) -> Vec<Insight> {
    let Some(rate) = punctuality_rate(records) else {
        return Vec::new();
    };
    let summary = attendance_summary(records);
    let mut insights = Vec::new();

    insights.push(Insight::new(
        InsightKind::PunctualityPerformance,
        Severity::Info,
        format!(
            "Your overall punctuality rate of {}% is excellent! Keep up the great work.",
            rate
        ),
    ));

    if summary.late > 0 {
        insights.push(Insight::new(
            InsightKind::LateArrivals,
            Severity::Attention,
            format!(
                "You've been late {} times. Consider setting earlier alarms or \
                 planning your route better.",
                summary.late
            ),
        ));
    }

    let goal_message = if rate >= goal {
        format!("Aim for a {}% punctuality rate. You're already there!", goal)
    } else {
        format!(
            "Aim for a {}% punctuality rate. You're {}% away from your goal.",
            goal,
            goal - rate
        )
    };
    insights.push(Insight::new(
        InsightKind::PunctualityGoal,
        Severity::Info,
        goal_message,
    ));

    insights
}
