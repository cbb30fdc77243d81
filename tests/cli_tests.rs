use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{rtc, setup_test_db, temp_out};

/// Run the binary offline against `db`, with `home` as HOME.
fn run(home: &std::path::Path, db: &str, args: &[&str]) -> assert_cmd::assert::Assert {
    rtc(home)
        .args(["--db", db, "--offline", "--test"])
        .args(args)
        .assert()
}

#[test]
fn test_init_in_test_mode_skips_config_file() {
    let (dir, db) = setup_test_db();

    rtc(dir.path())
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db).exists());
    assert!(!dir.path().join(".rtimeclock").join("rtimeclock.conf").exists());
}

#[test]
fn test_full_day_cycle() {
    let (dir, db) = setup_test_db();
    let home = dir.path();

    run(home, &db, &["status"])
        .success()
        .stdout(contains("Ready to clock in."))
        .stdout(contains("No logs."));

    run(home, &db, &["in"])
        .success()
        .stdout(contains("Clocked in successfully."));

    run(home, &db, &["break"])
        .success()
        .stdout(contains("Break started."));

    run(home, &db, &["status"])
        .success()
        .stdout(contains("On break."))
        .stdout(contains("Remaining"));

    run(home, &db, &["break"])
        .success()
        .stdout(contains("Break ended."))
        .stdout(contains("Break duration:"));

    run(home, &db, &["out"])
        .success()
        .stdout(contains("Clocked out. Have a great rest of your day!"))
        .stdout(contains("Total break time:"));

    run(home, &db, &["logs"])
        .success()
        .stdout(contains("Clock In"))
        .stdout(contains("Break Start"))
        .stdout(contains("Break End"))
        .stdout(contains("Clock Out"));
}

#[test]
fn test_repeated_clock_in_is_silent() {
    let (dir, db) = setup_test_db();

    run(dir.path(), &db, &["in"]).success();
    run(dir.path(), &db, &["in"])
        .success()
        .stdout(contains("Clocked in successfully.").not());
}

#[test]
fn test_break_before_clock_in_does_nothing() {
    let (dir, db) = setup_test_db();

    run(dir.path(), &db, &["break"])
        .success()
        .stdout(contains("Break started.").not());
    run(dir.path(), &db, &["logs"])
        .success()
        .stdout(contains("No logs."));
}

#[test]
fn test_clear_with_yes() {
    let (dir, db) = setup_test_db();

    run(dir.path(), &db, &["in"]).success();
    run(dir.path(), &db, &["clear", "--yes"])
        .success()
        .stderr(contains("Logs cleared."));
    run(dir.path(), &db, &["logs"])
        .success()
        .stdout(contains("No logs."));
}

#[test]
fn test_clear_declined_keeps_logs() {
    let (dir, db) = setup_test_db();

    run(dir.path(), &db, &["in"]).success();
    rtc(dir.path())
        .args(["--db", &db, "--offline", "--test", "clear"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Clear all logs forever?"))
        .stdout(contains("Nothing cleared."));
    run(dir.path(), &db, &["logs"])
        .success()
        .stdout(contains("Clock In"));
}

#[test]
fn test_filter_hides_entries_outside_range() {
    let (dir, db) = setup_test_db();

    run(dir.path(), &db, &["in"]).success();
    run(dir.path(), &db, &["filter", "--from", "2000-01-01", "--to", "2000-01-02"])
        .success()
        .stdout(contains("Filter set"));

    run(dir.path(), &db, &["logs"])
        .success()
        .stdout(contains("No logs for the chosen dates."));
    run(dir.path(), &db, &["logs", "--all"])
        .success()
        .stdout(contains("Clock In"));

    run(dir.path(), &db, &["filter", "--show"])
        .success()
        .stdout(contains("2000-01-01 00:00"));

    run(dir.path(), &db, &["filter", "--clear"])
        .success()
        .stdout(contains("Filter cleared."));
    run(dir.path(), &db, &["logs"])
        .success()
        .stdout(contains("Clock In"));
}

#[test]
fn test_filter_rejects_bad_date() {
    let (dir, db) = setup_test_db();

    run(dir.path(), &db, &["filter", "--from", "02/06/2025"])
        .failure()
        .stderr(contains("Invalid timestamp"));
}

#[test]
fn test_sync_offline_reports_failure() {
    let (dir, db) = setup_test_db();

    run(dir.path(), &db, &["in"]).success();
    run(dir.path(), &db, &["sync"])
        .success()
        .stderr(contains("Failed to load logs from backend."));
    run(dir.path(), &db, &["logs"])
        .success()
        .stdout(contains("Clock In"));
}

#[test]
fn test_import_rejects_object() {
    let (dir, db) = setup_test_db();
    let file = temp_out(&dir, "logs.json");
    fs::write(&file, r#"{"logs": []}"#).unwrap();

    run(dir.path(), &db, &["import", "--file", file.to_str().unwrap()])
        .failure()
        .stderr(contains("File does not contain valid logs array."));
}

#[test]
fn test_local_json_export() {
    let (dir, db) = setup_test_db();
    let out = temp_out(&dir, "clocklogs.json");

    run(dir.path(), &db, &["in"]).success();
    run(dir.path(), &db, &["out"]).success();
    run(
        dir.path(),
        &db,
        &[
            "export",
            "--local",
            "--format",
            "json",
            "--force",
            "--file",
            out.to_str().unwrap(),
        ],
    )
    .success()
    .stdout(contains("export completed"));

    let content = fs::read_to_string(&out).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["action"], "Clock Out");
    assert_eq!(rows[1]["action"], "Clock In");
}

#[test]
fn test_backend_export_offline_writes_nothing() {
    let (dir, db) = setup_test_db();
    let out = temp_out(&dir, "clocklogs.csv");

    run(dir.path(), &db, &["export", "--file", out.to_str().unwrap()])
        .success()
        .stderr(contains("Failed to export logs from backend."));
    assert!(!out.exists());
}

#[test]
fn test_watch_stops_after_ticks() {
    let (dir, db) = setup_test_db();

    run(dir.path(), &db, &["in"]).success();
    run(dir.path(), &db, &["watch", "--ticks", "1"])
        .success()
        .stdout(contains("Remaining"));
}

#[test]
fn test_audit_lists_transitions() {
    let (dir, db) = setup_test_db();

    run(dir.path(), &db, &["in"]).success();
    run(dir.path(), &db, &["audit"])
        .success()
        .stdout(contains("clock_in"))
        .stdout(contains("migration_applied"));
}
