//! CLI command tests
//!
//! Command functions are exercised against temp snapshot files.

use tempo_core::{sample, Config};

use crate::commands::{self, truncate};

fn temp_data_path() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tempo.json");
    (dir, path)
}

// ========== Init / open ==========

#[test]
fn test_cmd_init_creates_empty_snapshot() {
    let (_dir, path) = temp_data_path();
    commands::cmd_init(&path, false, false).unwrap();

    let store = commands::open_store(&path).unwrap();
    assert!(store.transactions().is_empty());
    assert!(store.attendance().is_empty());
}

#[test]
fn test_cmd_init_with_sample_data() {
    let (_dir, path) = temp_data_path();
    commands::cmd_init(&path, true, false).unwrap();

    let store = commands::open_store(&path).unwrap();
    assert_eq!(store.transactions().len(), 5);
    assert_eq!(store.attendance().len(), 7);
}

#[test]
fn test_cmd_init_refuses_to_overwrite_without_force() {
    let (_dir, path) = temp_data_path();
    commands::cmd_init(&path, true, false).unwrap();
    assert!(commands::cmd_init(&path, false, false).is_err());
    // --force starts over
    commands::cmd_init(&path, false, true).unwrap();
    let store = commands::open_store(&path).unwrap();
    assert!(store.transactions().is_empty());
}

#[test]
fn test_open_store_missing_file_errors() {
    let (_dir, path) = temp_data_path();
    assert!(commands::open_store(&path).is_err());
}

// ========== Budget commands ==========

#[test]
fn test_cmd_budget_add_persists() {
    let (_dir, path) = temp_data_path();
    commands::cmd_init(&path, false, false).unwrap();

    let mut store = commands::open_store(&path).unwrap();
    commands::cmd_budget_add(
        &mut store,
        &path,
        "expense",
        45.0,
        "Food",
        "Lunch",
        Some("2024-10-06"),
    )
    .unwrap();

    let reloaded = commands::open_store(&path).unwrap();
    assert_eq!(reloaded.transactions().len(), 1);
    assert_eq!(reloaded.transactions()[0].amount, 45.0);
}

#[test]
fn test_cmd_budget_add_rejects_bad_kind() {
    let (_dir, path) = temp_data_path();
    commands::cmd_init(&path, false, false).unwrap();

    let mut store = commands::open_store(&path).unwrap();
    assert!(commands::cmd_budget_add(
        &mut store,
        &path,
        "transfer",
        45.0,
        "Food",
        "Lunch",
        None,
    )
    .is_err());
}

#[test]
fn test_cmd_budget_edit_overlays_fields() {
    let (_dir, path) = temp_data_path();
    commands::cmd_init(&path, true, false).unwrap();

    let mut store = commands::open_store(&path).unwrap();
    commands::cmd_budget_edit(&mut store, &path, "2", None, Some(500.0), None, None, None)
        .unwrap();

    let reloaded = commands::open_store(&path).unwrap();
    let edited = reloaded.transactions().iter().find(|t| t.id == "2").unwrap();
    assert_eq!(edited.amount, 500.0);
    // Untouched fields survive
    assert_eq!(edited.category, "Food");
    assert_eq!(edited.description, "Grocery shopping");
}

#[test]
fn test_cmd_budget_remove_unknown_id_errors() {
    let (_dir, path) = temp_data_path();
    commands::cmd_init(&path, false, false).unwrap();

    let mut store = commands::open_store(&path).unwrap();
    assert!(commands::cmd_budget_remove(&mut store, &path, "99").is_err());
}

#[test]
fn test_cmd_budget_summary_runs_on_sample_data() {
    let store = sample::store();
    let config = Config::default();
    assert!(commands::cmd_budget_summary(&store, &config, false).is_ok());
    assert!(commands::cmd_budget_summary(&store, &config, true).is_ok());
    assert!(commands::cmd_budget_list(&store, 20).is_ok());
}

// ========== Attendance commands ==========

#[test]
fn test_cmd_attendance_log_persists() {
    let (_dir, path) = temp_data_path();
    commands::cmd_init(&path, false, false).unwrap();

    let mut store = commands::open_store(&path).unwrap();
    commands::cmd_attendance_log(
        &mut store,
        &path,
        "Biology",
        "08:00",
        Some("08:04"),
        "late",
        Some("2024-10-07"),
        Some("Traffic".to_string()),
    )
    .unwrap();

    let reloaded = commands::open_store(&path).unwrap();
    assert_eq!(reloaded.attendance().len(), 1);
    assert_eq!(reloaded.attendance()[0].subject, "Biology");
}

#[test]
fn test_cmd_attendance_log_absent_without_arrival() {
    let (_dir, path) = temp_data_path();
    commands::cmd_init(&path, false, false).unwrap();

    let mut store = commands::open_store(&path).unwrap();
    commands::cmd_attendance_log(
        &mut store,
        &path,
        "Physics",
        "14:00",
        None,
        "absent",
        Some("2024-10-07"),
        None,
    )
    .unwrap();

    // Present statuses still require an arrival time
    assert!(commands::cmd_attendance_log(
        &mut store,
        &path,
        "Physics",
        "14:00",
        None,
        "on-time",
        Some("2024-10-08"),
        None,
    )
    .is_err());
}

#[test]
fn test_cmd_attendance_log_rejects_bad_time() {
    let (_dir, path) = temp_data_path();
    commands::cmd_init(&path, false, false).unwrap();

    let mut store = commands::open_store(&path).unwrap();
    assert!(commands::cmd_attendance_log(
        &mut store,
        &path,
        "Biology",
        "8 o'clock",
        None,
        "absent",
        None,
        None,
    )
    .is_err());
}

#[test]
fn test_cmd_attendance_edit_overlays_fields() {
    let (_dir, path) = temp_data_path();
    commands::cmd_init(&path, true, false).unwrap();

    let mut store = commands::open_store(&path).unwrap();
    commands::cmd_attendance_edit(
        &mut store,
        &path,
        "2",
        None,
        None,
        Some("11:02"),
        None,
        None,
        None,
    )
    .unwrap();

    let reloaded = commands::open_store(&path).unwrap();
    let edited = reloaded.attendance().iter().find(|r| r.id == "2").unwrap();
    assert_eq!(
        edited.actual_time,
        Some(chrono::NaiveTime::from_hms_opt(11, 2, 0).unwrap())
    );
    // Untouched fields survive
    assert_eq!(edited.subject, "Chemistry");
    assert_eq!(edited.notes.as_deref(), Some("Bus delay"));
}

#[test]
fn test_cmd_attendance_edit_to_absent_clears_arrival() {
    let (_dir, path) = temp_data_path();
    commands::cmd_init(&path, true, false).unwrap();

    let mut store = commands::open_store(&path).unwrap();
    commands::cmd_attendance_edit(
        &mut store,
        &path,
        "2",
        None,
        None,
        None,
        Some("absent"),
        None,
        None,
    )
    .unwrap();

    let reloaded = commands::open_store(&path).unwrap();
    let edited = reloaded.attendance().iter().find(|r| r.id == "2").unwrap();
    assert_eq!(edited.status, tempo_core::AttendanceStatus::Absent);
    assert_eq!(edited.actual_time, None);
}

#[test]
fn test_cmd_attendance_edit_unknown_id_errors() {
    let (_dir, path) = temp_data_path();
    commands::cmd_init(&path, false, false).unwrap();

    let mut store = commands::open_store(&path).unwrap();
    assert!(commands::cmd_attendance_edit(
        &mut store,
        &path,
        "99",
        None,
        None,
        None,
        None,
        None,
        None,
    )
    .is_err());
}

#[test]
fn test_cmd_attendance_reports_run_on_sample_data() {
    let store = sample::store();
    let config = Config::default();
    assert!(commands::cmd_attendance_summary(&store, &config, false).is_ok());
    assert!(commands::cmd_attendance_summary(&store, &config, true).is_ok());
    assert!(commands::cmd_attendance_list(&store, 20).is_ok());
    assert!(commands::cmd_attendance_weekly(&store, false).is_ok());
    assert!(commands::cmd_attendance_weekly(&store, true).is_ok());
    assert!(commands::cmd_attendance_subjects(&store, &config, false).is_ok());
    assert!(commands::cmd_attendance_subjects(&store, &config, true).is_ok());
}

// ========== Reports ==========

#[test]
fn test_cmd_dashboard_and_insights_run() {
    let store = sample::store();
    let config = Config::default();
    assert!(commands::cmd_dashboard(&store, &config, false).is_ok());
    assert!(commands::cmd_dashboard(&store, &config, true).is_ok());
    assert!(commands::cmd_insights(&store, &config, false).is_ok());
    assert!(commands::cmd_insights(&store, &config, true).is_ok());
}

// ========== Helpers ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a very long category name", 10), "a very ...");
}

#[test]
fn test_truncate_cuts_on_char_boundaries() {
    assert_eq!(truncate("éaaaaa", 4), "é...");
    assert_eq!(truncate("日本語のノート", 5), "日本...");
    assert_eq!(truncate("café", 4), "café");
}

#[test]
fn test_resolve_date_and_parse_time() {
    assert_eq!(
        commands::resolve_date(Some("2024-10-06")).unwrap(),
        chrono::NaiveDate::from_ymd_opt(2024, 10, 6).unwrap()
    );
    assert!(commands::resolve_date(Some("06/10/2024")).is_err());
    assert_eq!(
        commands::parse_time("09:05").unwrap(),
        chrono::NaiveTime::from_hms_opt(9, 5, 0).unwrap()
    );
    assert!(commands::parse_time("25:00").is_err());
}
