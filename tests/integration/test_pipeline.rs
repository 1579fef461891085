//! End-to-end command pipeline tests: text → parser → command → schedule.

use chrono::NaiveDateTime;

use cadence::{
    parse_command, CommandError, CommandResult, Event, ParseError, Schedule, ScheduleError,
};

/// A fixed reference instant for the time-relative commands.
fn noon_oct_13() -> NaiveDateTime {
    "2022-10-13T12:00:00".parse().unwrap()
}

/// Parse and execute one line against the schedule.
fn run(schedule: &mut Schedule, line: &str) -> Result<CommandResult, CommandError> {
    parse_command(line)
        .unwrap_or_else(|err| panic!("parse failed for {line:?}: {err}"))
        .execute(schedule, noon_oct_13())
}

fn names(events: &[Event]) -> Vec<&str> {
    events.iter().map(|e| e.name().as_str()).collect()
}

#[test]
fn full_session_keeps_schedule_consistent() {
    let mut schedule = Schedule::new();

    run(&mut schedule, "add n/Ruth Poh d/2022-10-15 ts/1600-1700 l/Central Library t/supplementary")
        .unwrap();
    run(&mut schedule, "add n/Jacob NG d/2022-10-13 ts/1300-1400 l/The Deck t/CS1231S").unwrap();
    run(&mut schedule, "add n/Teng Foong d/2022-10-18 ts/1000-1100 l/COM1 Basement").unwrap();

    // Always chronological, regardless of insertion order.
    assert_eq!(names(schedule.events()), vec!["Jacob NG", "Ruth Poh", "Teng Foong"]);

    // delete 1 removes the chronologically first event.
    let result = run(&mut schedule, "delete 1").unwrap();
    assert!(result.message.starts_with("Deleted event: Jacob NG"));
    assert_eq!(names(schedule.events()), vec!["Ruth Poh", "Teng Foong"]);

    // Subsequent indices re-point after the deletion.
    run(&mut schedule, "delete 1").unwrap();
    assert_eq!(names(schedule.events()), vec!["Teng Foong"]);
}

#[test]
fn parse_scenario_produces_expected_event() {
    let mut schedule = Schedule::new();
    run(&mut schedule, "add n/Jacob NG d/2022-10-13 ts/1300-1400 l/The Deck t/CS1231S").unwrap();

    let event = &schedule.events()[0];
    assert_eq!(event.name().as_str(), "Jacob NG");
    assert_eq!(event.date().to_string(), "2022-10-13");
    assert_eq!(event.time_slot().to_string(), "1300-1400");
    assert_eq!(event.location().as_str(), "The Deck");
    let tags: Vec<_> = event.tags().iter().map(|t| t.as_str()).collect();
    assert_eq!(tags, vec!["CS1231S"]);
    assert!(event.remark().is_empty());
}

#[test]
fn parse_errors_never_reach_the_schedule() {
    assert!(matches!(
        parse_command("").unwrap_err(),
        ParseError::InvalidCommandFormat { .. }
    ));
    assert_eq!(parse_command("teleport 3").unwrap_err(), ParseError::UnknownCommand);
    assert_eq!(
        parse_command("add n/X d/2022-10-13 ts/1300-1400").unwrap_err(),
        ParseError::MissingField("location")
    );
}

#[test]
fn conflicting_and_blocked_slots_are_rejected() {
    let mut schedule = Schedule::new();
    run(&mut schedule, "add n/Consult d/2022-10-13 ts/0900-1000 l/Office").unwrap();

    let err = run(&mut schedule, "add n/Overlap d/2022-10-13 ts/0930-1030 l/Office").unwrap_err();
    assert_eq!(err, CommandError::Schedule(ScheduleError::SlotConflict));

    // Touching is allowed.
    run(&mut schedule, "add n/Touching d/2022-10-13 ts/1000-1100 l/Office").unwrap();

    run(&mut schedule, "block d/2022-10-14 ts/0800-0900").unwrap();
    let err = run(&mut schedule, "add n/Blocked d/2022-10-14 ts/0830-0930 l/Office").unwrap_err();
    assert_eq!(err, CommandError::Schedule(ScheduleError::SlotBlocked));
    run(&mut schedule, "add n/After Block d/2022-10-14 ts/0900-1000 l/Office").unwrap();

    assert_eq!(schedule.events().len(), 3);
}

#[test]
fn find_filters_view_and_indices_follow_it() {
    let mut schedule = Schedule::new();
    run(&mut schedule, "add n/Jacob NG d/2022-10-13 ts/1300-1400 l/The Deck").unwrap();
    run(&mut schedule, "add n/Ruth Poh d/2022-10-15 ts/1600-1700 l/Library").unwrap();
    run(&mut schedule, "add n/Jacob Tan d/2022-10-18 ts/1000-1100 l/Office").unwrap();

    let result = run(&mut schedule, "find jacob").unwrap();
    assert_eq!(result.message, "2 events listed!");

    // Index 2 of the filtered view is Jacob Tan, not Ruth Poh.
    let result = run(&mut schedule, "delete 2").unwrap();
    assert!(result.message.starts_with("Deleted event: Jacob Tan"));
    assert_eq!(names(schedule.events()), vec!["Jacob NG", "Ruth Poh"]);

    // The filter is still live; out-of-range indices fail cleanly.
    assert_eq!(run(&mut schedule, "delete 2").unwrap_err(), CommandError::IndexOutOfRange);

    run(&mut schedule, "list").unwrap();
    assert_eq!(schedule.filtered_events().len(), 2);
}

#[test]
fn findtag_matches_tags_case_insensitively() {
    let mut schedule = Schedule::new();
    run(&mut schedule, "add n/A d/2022-10-13 ts/1300-1400 l/Office t/CS1231S").unwrap();
    run(&mut schedule, "add n/B d/2022-10-15 ts/1300-1400 l/Office t/URGENT").unwrap();

    let result = run(&mut schedule, "findtag cs1231s").unwrap();
    assert_eq!(result.message, "1 events listed!");
    let filtered: Vec<_> = schedule
        .filtered_events()
        .iter()
        .map(|e| e.name().as_str())
        .collect();
    assert_eq!(filtered, vec!["A"]);
}

#[test]
fn edit_moves_event_to_new_chronological_position() {
    let mut schedule = Schedule::new();
    run(&mut schedule, "add n/Early d/2022-10-13 ts/0900-1000 l/Office").unwrap();
    run(&mut schedule, "add n/Late d/2022-10-15 ts/0900-1000 l/Office").unwrap();

    run(&mut schedule, "edit 1 d/2022-10-20").unwrap();
    assert_eq!(names(schedule.events()), vec!["Late", "Early"]);

    // Editing into another event's slot is rejected atomically.
    let err = run(&mut schedule, "edit 1 d/2022-10-20 ts/0930-1030").unwrap_err();
    assert_eq!(err, CommandError::Schedule(ScheduleError::SlotConflict));
    assert_eq!(names(schedule.events()), vec!["Late", "Early"]);
}

#[test]
fn upcoming_and_next_are_relative_to_reference() {
    let mut schedule = Schedule::new();
    run(&mut schedule, "add n/Past d/2022-10-01 ts/0900-1000 l/Office").unwrap();
    run(&mut schedule, "add n/Today PM d/2022-10-13 ts/1800-1900 l/Office").unwrap();
    run(&mut schedule, "add n/Future d/2022-10-20 ts/0900-1000 l/Office").unwrap();

    let result = run(&mut schedule, "upcoming").unwrap();
    assert!(result.message.starts_with("Upcoming events: 1"));
    assert!(result.message.contains("Future"));

    // Today's evening event is the next event even though it is not "upcoming".
    let result = run(&mut schedule, "next").unwrap();
    assert!(result.message.starts_with("Next event: Today PM"));
}

#[test]
fn clear_empties_events_but_keeps_blocks() {
    let mut schedule = Schedule::new();
    run(&mut schedule, "add n/A d/2022-10-13 ts/1300-1400 l/Office").unwrap();
    run(&mut schedule, "block d/2022-10-14 ts/0800-0900").unwrap();

    let result = run(&mut schedule, "clear").unwrap();
    assert_eq!(result.message, "Schedule has been cleared!");
    assert!(schedule.events().is_empty());
    assert_eq!(schedule.blocked_slots().len(), 1);

    // The block still applies to new entries.
    let err = run(&mut schedule, "add n/B d/2022-10-14 ts/0800-0900 l/Office").unwrap_err();
    assert_eq!(err, CommandError::Schedule(ScheduleError::SlotBlocked));
}

#[test]
fn help_and_exit_set_result_flags() {
    let mut schedule = Schedule::new();
    let help = run(&mut schedule, "help").unwrap();
    assert!(help.show_help);
    assert!(!help.exit);

    let exit = run(&mut schedule, "exit").unwrap();
    assert!(exit.exit);
}
