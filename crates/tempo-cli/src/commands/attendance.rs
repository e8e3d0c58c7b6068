//! Punctuality log command implementations

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};

use tempo_core::{
    aggregate, insights, AttendanceRecord, AttendanceStatus, Config, RecordStore,
};

use super::{parse_time, resolve_date, save_store, truncate};

pub fn cmd_attendance_summary(store: &RecordStore, config: &Config, json: bool) -> Result<()> {
    let records = store.attendance();
    let summary = aggregate::attendance_summary(records);
    let advice = insights::punctuality_insights(records, config.punctuality_goal);

    if json {
        let out = serde_json::json!({
            "summary": summary,
            "insights": advice,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!("⏰ Punctuality Summary");
    println!("   ─────────────────────────────────────────────────────────────");
    match summary.rate {
        Some(rate) => println!(
            "   Rate: {}%   ({} of {} on time)",
            rate, summary.on_time, summary.total
        ),
        None => println!("   No attendance records yet."),
    }
    println!(
        "   On time: {}    Late: {}    Absent: {}",
        summary.on_time, summary.late, summary.absent
    );

    if !advice.is_empty() {
        println!();
        println!("💡 Insights");
        for insight in &advice {
            println!("   • {}", insight.message);
        }
    }

    Ok(())
}

pub fn cmd_attendance_list(store: &RecordStore, limit: usize) -> Result<()> {
    let listed = store.list_attendance();

    println!();
    println!("📋 Attendance Records");
    println!("   ─────────────────────────────────────────────────────────────");

    if listed.is_empty() {
        println!("   No records yet. Log one with: tempo attendance log");
        return Ok(());
    }

    println!(
        "   {:4} │ {:10} │ {:15} │ {:>9} │ {:>6} │ {:7} │ {:>8} │ {}",
        "Id", "Date", "Subject", "Scheduled", "Actual", "Status", "Lateness", "Notes"
    );
    println!(
        "   ─────┼────────────┼─────────────────┼───────────┼────────┼─────────┼──────────┼───────"
    );
    for record in listed.iter().take(limit) {
        let actual = record
            .actual_time
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        let lateness = aggregate::lateness(record.scheduled_time, record.actual_time)
            .map(|m| format!("{:+} min", m))
            .unwrap_or_else(|| "-".to_string());
        let status_icon = match record.status {
            AttendanceStatus::OnTime => "✅",
            AttendanceStatus::Late => "⏳",
            AttendanceStatus::Absent => "❌",
        };
        println!(
            "   {:4} │ {:10} │ {:15} │ {:>9} │ {:>6} │ {} {:5} │ {:>8} │ {}",
            record.id,
            record.date,
            truncate(&record.subject, 15),
            record.scheduled_time.format("%H:%M"),
            actual,
            status_icon,
            record.status,
            lateness,
            truncate(record.notes.as_deref().unwrap_or("-"), 20)
        );
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn cmd_attendance_log(
    store: &mut RecordStore,
    data: &Path,
    subject: &str,
    scheduled: &str,
    actual: Option<&str>,
    status: &str,
    date: Option<&str>,
    notes: Option<String>,
) -> Result<()> {
    let status = AttendanceStatus::from_str(status).map_err(|e| anyhow::anyhow!(e))?;
    let date = resolve_date(date)?;
    let scheduled = parse_time(scheduled)?;
    let actual = actual.map(parse_time).transpose()?;

    let record = AttendanceRecord::new(date, subject, scheduled, actual, status, notes);
    let added = store.add_attendance(record)?;
    println!(
        "✅ Logged {} for {} on {} (#{})",
        added.status, added.subject, added.date, added.id
    );

    save_store(store, data)
}

#[allow(clippy::too_many_arguments)]
pub fn cmd_attendance_edit(
    store: &mut RecordStore,
    data: &Path,
    id: &str,
    subject: Option<&str>,
    scheduled: Option<&str>,
    actual: Option<&str>,
    status: Option<&str>,
    date: Option<&str>,
    notes: Option<String>,
) -> Result<()> {
    let current = store
        .attendance()
        .iter()
        .find(|r| r.id == id)
        .with_context(|| format!("No attendance record with id {}", id))?
        .clone();

    let status = match status {
        Some(raw) => AttendanceStatus::from_str(raw).map_err(|e| anyhow::anyhow!(e))?,
        None => current.status,
    };

    // Overlay the provided fields, then replace the record wholesale
    let replacement = AttendanceRecord {
        id: current.id.clone(),
        date: match date {
            Some(_) => resolve_date(date)?,
            None => current.date,
        },
        subject: subject.map(String::from).unwrap_or(current.subject),
        scheduled_time: match scheduled {
            Some(raw) => parse_time(raw)?,
            None => current.scheduled_time,
        },
        // An absent record never carries an arrival time
        actual_time: if status == AttendanceStatus::Absent {
            None
        } else {
            match actual {
                Some(raw) => Some(parse_time(raw)?),
                None => current.actual_time,
            }
        },
        status,
        notes: notes.or(current.notes),
    };

    let updated = store.update_attendance(id, replacement)?;
    println!(
        "✅ Updated record #{}: {} on {} ({})",
        updated.id, updated.subject, updated.date, updated.status
    );

    save_store(store, data)
}

pub fn cmd_attendance_remove(store: &mut RecordStore, data: &Path, id: &str) -> Result<()> {
    let removed = store.remove_attendance(id)?;
    println!(
        "🗑️  Removed record #{}: {} on {}",
        removed.id, removed.subject, removed.date
    );

    save_store(store, data)
}

pub fn cmd_attendance_weekly(store: &RecordStore, json: bool) -> Result<()> {
    let weeks = aggregate::weekly_punctuality(store.attendance());

    if json {
        println!("{}", serde_json::to_string_pretty(&weeks)?);
        return Ok(());
    }

    println!();
    println!("📈 Weekly Punctuality");
    println!("   ─────────────────────────────────────────────────────────────");

    if weeks.is_empty() {
        println!("   No attendance records yet.");
        return Ok(());
    }

    println!(
        "   {:6} │ {:>7} │ {:>5} │ {:>6} │ {:>5}",
        "Week", "On time", "Late", "Absent", "Rate"
    );
    println!("   ───────┼─────────┼───────┼────────┼───────");
    for week in &weeks {
        let rate = week
            .rate
            .map(|r| format!("{}%", r))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "   {:6} │ {:>7} │ {:>5} │ {:>6} │ {:>5}",
            week.period, week.on_time, week.late, week.absent, rate
        );
    }

    Ok(())
}

pub fn cmd_attendance_subjects(store: &RecordStore, config: &Config, json: bool) -> Result<()> {
    let by_subject = aggregate::subject_punctuality(store.attendance(), &config.subjects);

    if json {
        println!("{}", serde_json::to_string_pretty(&by_subject)?);
        return Ok(());
    }

    println!();
    println!("📚 Subject Punctuality");
    println!("   ─────────────────────────────────────────────────────────────");

    if by_subject.is_empty() {
        println!("   No attendance records yet.");
        return Ok(());
    }

    println!(
        "   {:18} │ {:>7} │ {:>5}",
        "Subject", "Records", "Rate"
    );
    println!("   ───────────────────┼─────────┼───────");
    for subject in &by_subject {
        println!(
            "   {:18} │ {:>7} │ {:>4}%",
            truncate(&subject.subject, 18),
            subject.total,
            subject.rate
        );
    }

    Ok(())
}
