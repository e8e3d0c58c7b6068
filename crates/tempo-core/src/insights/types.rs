//! Core types for the insight rules engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kinds of advisory insights the rules can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Expenses exceed income
    BudgetPressure,
    /// One category dominates spending
    CategoryOptimization,
    /// One or more categories are past their limit
    OverBudget,
    /// Everything within limits
    WithinBudget,
    /// Overall punctuality standing
    PunctualityPerformance,
    /// Repeated late arrivals
    LateArrivals,
    /// Distance to the punctuality goal
    PunctualityGoal,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::BudgetPressure => "budget_pressure",
            InsightKind::CategoryOptimization => "category_optimization",
            InsightKind::OverBudget => "over_budget",
            InsightKind::WithinBudget => "within_budget",
            InsightKind::PunctualityPerformance => "punctuality_performance",
            InsightKind::LateArrivals => "late_arrivals",
            InsightKind::PunctualityGoal => "punctuality_goal",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "budget_pressure" => Ok(InsightKind::BudgetPressure),
            "category_optimization" => Ok(InsightKind::CategoryOptimization),
            "over_budget" => Ok(InsightKind::OverBudget),
            "within_budget" => Ok(InsightKind::WithinBudget),
            "punctuality_performance" => Ok(InsightKind::PunctualityPerformance),
            "late_arrivals" => Ok(InsightKind::LateArrivals),
            "punctuality_goal" => Ok(InsightKind::PunctualityGoal),
            _ => Err(format!("Unknown insight kind: {}", s)),
        }
    }
}

/// Severity level of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational - no action needed
    Info,
    /// Worth attention but not urgent
    Attention,
    /// Should be addressed soon
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Attention => "attention",
            Severity::Warning => "warning",
        }
    }

    /// Numeric priority for sorting (higher = more urgent)
    pub fn priority(&self) -> u8 {
        match self {
            Severity::Info => 1,
            Severity::Attention => 2,
            Severity::Warning => 3,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Severity::Info),
            "attention" => Ok(Severity::Attention),
            "warning" => Ok(Severity::Warning),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

/// An advisory message derived from the current aggregates
///
/// Insights are data for the presentation layer, never errors, and are
/// recomputed fresh on every evaluation rather than stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub severity: Severity,
    pub message: String,
}

impl Insight {
    pub fn new(kind: InsightKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
        }
    }
}
