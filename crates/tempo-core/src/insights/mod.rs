//! Insight Rules Engine - Advisory Messages from Current Aggregates
//!
//! A small, ordered set of independently-evaluated rules over the
//! aggregation engine's outputs. Each rule is a pure predicate plus a
//! message; matches are collected, never short-circuited, and the budget
//! group falls back to a positive message when nothing fired.
//!
//! ## Rule Groups
//!
//! - **Budget** - balance pressure, dominant-category optimization,
//!   over-limit warning, within-budget fallback
//! - **Punctuality** - overall performance, late-arrival nudge,
//!   goal distance
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tempo_core::insights::{InsightEngine, RuleContext};
//!
//! let engine = InsightEngine::new();
//! let ctx = RuleContext::new(store.transactions(), store.attendance(), &config);
//! let insights = engine.analyze_all(&ctx);
//! ```

pub mod budget;
pub mod engine;
pub mod punctuality;
pub mod types;

pub use budget::budget_insights;
pub use engine::{BudgetRules, InsightEngine, InsightRule, PunctualityRules, RuleContext};
pub use punctuality::punctuality_insights;
pub use types::{Insight, InsightKind, Severity};
