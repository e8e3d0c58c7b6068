//! Budget tracker command implementations

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};

use tempo_core::{aggregate, insights, Config, RecordStore, Transaction, TransactionKind};

use super::{resolve_date, save_store, truncate};

pub fn cmd_budget_summary(store: &RecordStore, config: &Config, json: bool) -> Result<()> {
    let txs = store.transactions();
    let income = aggregate::total_by_kind(txs, TransactionKind::Income);
    let expenses = aggregate::total_by_kind(txs, TransactionKind::Expense);
    let balance = aggregate::balance(txs);
    let progress = aggregate::budget_progress(txs, &config.budgets)?;
    let advice = insights::budget_insights(txs, &config.budgets, config.high_spend_threshold)?;

    if json {
        let out = serde_json::json!({
            "income": income,
            "expenses": expenses,
            "balance": balance,
            "progress": progress,
            "insights": advice,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!("💰 Budget Summary");
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   Income: ₱{:.2}    Expenses: ₱{:.2}    Balance: ₱{:.2}",
        income, expenses, balance
    );
    println!();
    println!(
        "   {:15} │ {:>10} │ {:>10} │ {:>5}",
        "Category", "Spent", "Limit", "%"
    );
    println!("   ────────────────┼────────────┼────────────┼───────");
    for entry in &progress {
        let flag = if entry.percentage > 100 {
            " ⚠️"
        } else {
            ""
        };
        println!(
            "   {:15} │ {:>10.2} │ {:>10.2} │ {:>4}%{}",
            truncate(&entry.category, 15),
            entry.spent,
            entry.limit,
            entry.percentage,
            flag
        );
    }

    println!();
    println!("💡 Insights");
    for insight in &advice {
        println!("   • {}", insight.message);
    }

    Ok(())
}

pub fn cmd_budget_list(store: &RecordStore, limit: usize) -> Result<()> {
    let listed = store.list_transactions();

    println!();
    println!("🧾 Transactions");
    println!("   ─────────────────────────────────────────────────────────────");

    if listed.is_empty() {
        println!("   No transactions yet. Add one with: tempo budget add");
        return Ok(());
    }

    println!(
        "   {:4} │ {:10} │ {:7} │ {:15} │ {:>10} │ {}",
        "Id", "Date", "Kind", "Category", "Amount", "Description"
    );
    println!("   ─────┼────────────┼─────────┼─────────────────┼────────────┼──────────────");
    for tx in listed.iter().take(limit) {
        let sign = match tx.kind {
            TransactionKind::Income => "+",
            TransactionKind::Expense => "-",
        };
        println!(
            "   {:4} │ {:10} │ {:7} │ {:15} │ {:>9}₱{:.2} │ {}",
            tx.id,
            tx.date,
            tx.kind,
            truncate(&tx.category, 15),
            sign,
            tx.amount,
            truncate(&tx.description, 30)
        );
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn cmd_budget_add(
    store: &mut RecordStore,
    data: &Path,
    kind: &str,
    amount: f64,
    category: &str,
    description: &str,
    date: Option<&str>,
) -> Result<()> {
    let kind = TransactionKind::from_str(kind).map_err(|e| anyhow::anyhow!(e))?;
    let date = resolve_date(date)?;

    let tx = Transaction::new(kind, amount, category, description, date);
    let added = store.add_transaction(tx)?;
    println!(
        "✅ Added {} #{}: ₱{:.2} ({})",
        added.kind, added.id, added.amount, added.category
    );

    save_store(store, data)
}

#[allow(clippy::too_many_arguments)]
pub fn cmd_budget_edit(
    store: &mut RecordStore,
    data: &Path,
    id: &str,
    kind: Option<&str>,
    amount: Option<f64>,
    category: Option<&str>,
    description: Option<&str>,
    date: Option<&str>,
) -> Result<()> {
    let current = store
        .transactions()
        .iter()
        .find(|t| t.id == id)
        .with_context(|| format!("No transaction with id {}", id))?
        .clone();

    // Overlay the provided fields, then replace the record wholesale
    let replacement = Transaction {
        id: current.id.clone(),
        kind: match kind {
            Some(raw) => TransactionKind::from_str(raw).map_err(|e| anyhow::anyhow!(e))?,
            None => current.kind,
        },
        amount: amount.unwrap_or(current.amount),
        category: category.map(String::from).unwrap_or(current.category),
        description: description.map(String::from).unwrap_or(current.description),
        date: match date {
            Some(_) => resolve_date(date)?,
            None => current.date,
        },
    };

    let updated = store.update_transaction(id, replacement)?;
    println!(
        "✅ Updated transaction #{}: ₱{:.2} ({})",
        updated.id, updated.amount, updated.category
    );

    save_store(store, data)
}

pub fn cmd_budget_remove(store: &mut RecordStore, data: &Path, id: &str) -> Result<()> {
    let removed = store.remove_transaction(id)?;
    println!(
        "🗑️  Removed transaction #{}: ₱{:.2} ({})",
        removed.id, removed.amount, removed.category
    );

    save_store(store, data)
}
