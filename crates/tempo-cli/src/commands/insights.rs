//! Advisory insights command

use anyhow::Result;

use tempo_core::{Config, InsightEngine, RecordStore, RuleContext, Severity};

pub fn cmd_insights(store: &RecordStore, config: &Config, json: bool) -> Result<()> {
    let engine = InsightEngine::new();
    let ctx = RuleContext::new(store.transactions(), store.attendance(), config);
    let insights = engine.analyze_all(&ctx);

    if json {
        println!("{}", serde_json::to_string_pretty(&insights)?);
        return Ok(());
    }

    println!();
    println!("💡 Insights");
    println!("   ─────────────────────────────────────────────────────────────");

    if insights.is_empty() {
        println!("   Nothing to report yet.");
        return Ok(());
    }

    for insight in &insights {
        let icon = match insight.severity {
            Severity::Info => "ℹ️ ",
            Severity::Attention => "💡",
            Severity::Warning => "⚠️ ",
        };
        println!("   {} {}", icon, insight.message);
    }

    Ok(())
}
