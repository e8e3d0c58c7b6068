//! Tracker configuration
//!
//! Budget ceilings, the subject roster, income categories and the insight
//! thresholds. Loaded from a TOML file when one is given, otherwise the
//! built-in defaults apply. Category order in the config is the order
//! budget progress reports in.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::BudgetLimit;

/// Process-wide tracker configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Spending ceiling per expense category, in report order
    pub budgets: Vec<BudgetLimit>,
    /// Categories offered for income transactions
    pub income_categories: Vec<String>,
    /// Subject roster for attendance logging
    pub subjects: Vec<String>,
    /// Spend above this in a single category triggers the optimization insight
    pub high_spend_threshold: f64,
    /// Punctuality rate the goal-distance insight measures against
    pub punctuality_goal: i64,
}

impl Default for Config {
    fn default() -> Self {
        let budgets = [
            ("Food", 600.0),
            ("Transport", 200.0),
            ("Entertainment", 300.0),
            ("Supplies", 150.0),
            ("Healthcare", 100.0),
            ("Clothing", 200.0),
            ("Other", 100.0),
        ]
        .into_iter()
        .map(|(category, limit)| BudgetLimit {
            category: category.to_string(),
            limit,
        })
        .collect();

        Self {
            budgets,
            income_categories: [
                "Scholarship",
                "Part-time Job",
                "Family Support",
                "Other",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            subjects: [
                "Mathematics",
                "Chemistry",
                "Physics",
                "History",
                "English",
                "Biology",
                "Computer Science",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            high_spend_threshold: 400.0,
            punctuality_goal: 95,
        }
    }
}

impl Config {
    /// Load from a TOML file, filling unset fields from the defaults
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&raw)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded tracker config");
        Ok(config)
    }

    /// Reject configs that would fail later inside the aggregation engine
    fn validate(&self) -> Result<()> {
        for budget in &self.budgets {
            if budget.limit <= 0.0 {
                return Err(Error::Config(format!(
                    "budget limit for {} must be positive, got {}",
                    budget.category, budget.limit
                )));
            }
        }
        if !(0..=100).contains(&self.punctuality_goal) {
            return Err(Error::Config(format!(
                "punctuality goal must be a percentage, got {}",
                self.punctuality_goal
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_shipped_limits() {
        let config = Config::default();
        assert_eq!(config.budgets.len(), 7);
        assert_eq!(config.budgets[0].category, "Food");
        assert_eq!(config.budgets[0].limit, 600.0);
        assert_eq!(config.subjects.len(), 7);
        assert_eq!(config.high_spend_threshold, 400.0);
        assert_eq!(config.punctuality_goal, 95);
    }

    #[test]
    fn test_load_overrides_merge_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
high_spend_threshold = 250.0

[[budgets]]
category = "Food"
limit = 500.0
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.high_spend_threshold, 250.0);
        assert_eq!(config.budgets.len(), 1);
        assert_eq!(config.budgets[0].limit, 500.0);
        // Untouched fields keep their defaults
        assert_eq!(config.punctuality_goal, 95);
        assert_eq!(config.subjects.len(), 7);
    }

    #[test]
    fn test_load_rejects_non_positive_limit() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[budgets]]
category = "Food"
limit = 0.0
"#
        )
        .unwrap();

        assert!(matches!(
            Config::load(file.path()),
            Err(Error::Config(_))
        ));
    }
}
