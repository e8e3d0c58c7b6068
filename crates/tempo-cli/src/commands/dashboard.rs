//! Combined overview command

use anyhow::Result;

use tempo_core::{
    aggregate, Config, InsightEngine, RecordStore, RuleContext, Severity, TransactionKind,
};

pub fn cmd_dashboard(store: &RecordStore, config: &Config, json: bool) -> Result<()> {
    let txs = store.transactions();
    let records = store.attendance();

    let balance = aggregate::balance(txs);
    let expenses = aggregate::total_by_kind(txs, TransactionKind::Expense);
    let attendance = aggregate::attendance_summary(records);

    let engine = InsightEngine::new();
    let ctx = RuleContext::new(txs, records, config);
    let mut insights = engine.analyze_all(&ctx);
    // Most urgent first on the dashboard; evaluation order breaks ties
    insights.sort_by(|a, b| b.severity.priority().cmp(&a.severity.priority()));

    if json {
        let out = serde_json::json!({
            "balance": balance,
            "expenses": expenses,
            "transactions": txs.len(),
            "attendance": attendance,
            "insights": insights,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!("🎓 Tempo Dashboard");
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   Balance: ₱{:.2}    Spent: ₱{:.2}    Transactions: {}",
        balance,
        expenses,
        txs.len()
    );
    match attendance.rate {
        Some(rate) => println!(
            "   Punctuality: {}%   ({} on time, {} late, {} absent)",
            rate, attendance.on_time, attendance.late, attendance.absent
        ),
        None => println!("   Punctuality: no records yet"),
    }

    if !insights.is_empty() {
        println!();
        println!("   Top insights:");
        for insight in insights.iter().take(3) {
            let icon = match insight.severity {
                Severity::Info => "ℹ️ ",
                Severity::Attention => "💡",
                Severity::Warning => "⚠️ ",
            };
            println!("   {} {}", icon, insight.message);
        }
    }

    Ok(())
}
