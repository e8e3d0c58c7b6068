//! Insight engine - runs every advisory rule over the current aggregates

use crate::config::Config;
use crate::error::Result;
use crate::models::{AttendanceRecord, Transaction};

use super::budget::budget_insights;
use super::punctuality::punctuality_insights;
use super::types::Insight;

/// Context provided to insight rules
pub struct RuleContext<'a> {
    /// Transaction sequence in insertion order
    pub transactions: &'a [Transaction],
    /// Attendance sequence in insertion order
    pub attendance: &'a [AttendanceRecord],
    /// Limits, thresholds and goals the rules measure against
    pub config: &'a Config,
}

impl<'a> RuleContext<'a> {
    pub fn new(
        transactions: &'a [Transaction],
        attendance: &'a [AttendanceRecord],
        config: &'a Config,
    ) -> Self {
        Self {
            transactions,
            attendance,
            config,
        }
    }
}

/// Trait for insight rule groups
pub trait InsightRule: Send + Sync {
    /// Human-readable name for logging
    fn name(&self) -> &'static str;

    /// Evaluate the group and produce its insights
    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<Vec<Insight>>;
}

/// The budget rule group (pressure, optimization, over-budget, fallback)
pub struct BudgetRules;

impl InsightRule for BudgetRules {
    fn name(&self) -> &'static str {
        "budget"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<Vec<Insight>> {
        budget_insights(
            ctx.transactions,
            &ctx.config.budgets,
            ctx.config.high_spend_threshold,
        )
    }
}

/// The punctuality rule group (performance, late count, goal distance)
pub struct PunctualityRules;

impl InsightRule for PunctualityRules {
    fn name(&self) -> &'static str {
        "punctuality"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<Vec<Insight>> {
        Ok(punctuality_insights(
            ctx.attendance,
            ctx.config.punctuality_goal,
        ))
    }
}

/// The main insight engine that orchestrates rule evaluation
pub struct InsightEngine {
    rules: Vec<Box<dyn InsightRule>>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with the built-in rule groups
    pub fn new() -> Self {
        let mut engine = Self { rules: vec![] };
        engine.register(Box::new(BudgetRules));
        engine.register(Box::new(PunctualityRules));
        engine
    }

    /// Register a rule group
    pub fn register(&mut self, rule: Box<dyn InsightRule>) {
        self.rules.push(rule);
    }

    /// Run every rule group and collect insights in registration order
    ///
    /// A failing group is logged and skipped; the others still report.
    pub fn analyze_all(&self, ctx: &RuleContext<'_>) -> Vec<Insight> {
        let mut all = vec![];
        for rule in &self.rules {
            match rule.evaluate(ctx) {
                Ok(insights) => {
                    tracing::debug!(
                        rule = rule.name(),
                        count = insights.len(),
                        "Insight rule evaluated"
                    );
                    all.extend(insights);
                }
                Err(e) => {
                    tracing::warn!(
                        rule = rule.name(),
                        error = %e,
                        "Insight rule failed"
                    );
                }
            }
        }
        all
    }

    /// Names of the registered rule groups
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }
}
