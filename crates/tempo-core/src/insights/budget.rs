//! Budget advisory rules
//!
//! Three independent rules over the spending aggregates, each emitted when
//! it matches, plus a positive fallback when none fired. Rule order is
//! fixed; rules never short-circuit each other.

use crate::aggregate::{balance, budget_progress, highest_spending};
use crate::error::Result;
use crate::models::{BudgetLimit, Transaction};

use super::types::{Insight, InsightKind, Severity};

/// Evaluate the budget rules against the current transaction sequence
pub fn budget_insights(
    transactions: &[Transaction],
    limits: &[BudgetLimit],
    high_spend_threshold: f64,
) -> Result<Vec<Insight>> {
    let mut insights = Vec::new();

    // Rule 1: spending outpaces income
    if balance(transactions) < 0.0 {
        insights.push(Insight::new(
            InsightKind::BudgetPressure,
            Severity::Warning,
            "Your expenses exceed your income. Consider reducing spending in \
             entertainment or food categories.",
        ));
    }

    // Rule 2: one category dominates (ties go to the earliest category seen)
    if let Some(top) = highest_spending(transactions) {
        if top.amount > high_spend_threshold {
            insights.push(Insight::new(
                InsightKind::CategoryOptimization,
                Severity::Attention,
                format!(
                    "You're spending the most on {} (₱{}). Look for ways to \
                     optimize this category.",
                    top.category, top.amount
                ),
            ));
        }
    }

    // Rule 3: one combined warning naming every over-limit category,
    // comma-joined in budget-progress order
    let over: Vec<String> = budget_progress(transactions, limits)?
        .into_iter()
        .filter(|p| p.percentage > 100)
        .map(|p| p.category)
        .collect();
    if !over.is_empty() {
        insights.push(Insight::new(
            InsightKind::OverBudget,
            Severity::Warning,
            format!("You're over budget in: {}", over.join(", ")),
        ));
    }

    // Fallback: only when nothing above fired
    if insights.is_empty() {
        insights.push(Insight::new(
            InsightKind::WithinBudget,
            Severity::Info,
            "Great job! You're staying within your budget limits.",
        ));
    }

    Ok(insights)
}
