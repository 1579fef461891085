//! Persistence round-trip tests for the JSON storage adapter.

use std::fs;

use tempfile::TempDir;

use cadence::{load_schedule, parse_command, sample_schedule, save_schedule, Schedule, StorageError};

fn run(schedule: &mut Schedule, line: &str) {
    let now = "2022-10-13T12:00:00".parse().unwrap();
    parse_command(line)
        .expect("command parses")
        .execute(schedule, now)
        .expect("command executes");
}

#[test]
fn session_state_survives_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cadence.json");

    let mut schedule = Schedule::new();
    run(&mut schedule, "add n/Jacob NG d/2022-10-13 ts/1300-1400 l/The Deck t/CS1231S r/Cool student");
    run(&mut schedule, "add n/Ruth Poh d/2022-10-15 ts/1600-1700 l/Central Library");
    run(&mut schedule, "block d/2022-10-14 ts/0800-0900");

    save_schedule(&schedule, &path).unwrap();
    let loaded = load_schedule(&path).unwrap();

    assert_eq!(loaded.events(), schedule.events());
    assert_eq!(loaded.blocked_slots(), schedule.blocked_slots());
    assert_eq!(loaded.events()[0].remark().as_str(), "Cool student");
}

#[test]
fn sample_schedule_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cadence.json");

    let schedule = sample_schedule();
    save_schedule(&schedule, &path).unwrap();
    let loaded = load_schedule(&path).unwrap();
    assert_eq!(loaded.events(), schedule.events());
}

#[test]
fn corrupt_record_is_reported_not_crashed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cadence.json");
    fs::write(
        &path,
        r#"{"events":[{"name":"","date":"2022-10-13","startTime":"1300","endTime":"1400","location":"Office"}]}"#,
    )
    .unwrap();

    let err = load_schedule(&path).unwrap_err();
    assert!(matches!(err, StorageError::CorruptData(_)));
}

#[test]
fn loaded_schedule_enforces_conflicts_going_forward() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cadence.json");

    let mut schedule = Schedule::new();
    run(&mut schedule, "add n/Consult d/2022-10-13 ts/0900-1000 l/Office");
    run(&mut schedule, "block d/2022-10-14 ts/0800-0900");
    save_schedule(&schedule, &path).unwrap();

    let mut loaded = load_schedule(&path).unwrap();
    let now = "2022-10-13T12:00:00".parse().unwrap();
    let err = parse_command("add n/Blocked d/2022-10-14 ts/0800-0900 l/Office")
        .unwrap()
        .execute(&mut loaded, now)
        .unwrap_err();
    assert_eq!(err.to_string(), "This time slot has been blocked");
}
