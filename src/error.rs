//! Error types for the Cadence scheduling core.

use thiserror::Error;

/// Main error type for Cadence operations.
#[derive(Error, Debug)]
pub enum CadenceError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Errors raised while turning raw input into a command.
///
/// A failed parse is reported immediately and never touches the schedule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid {field}: {constraint}")]
    InvalidFormat {
        field: &'static str,
        constraint: &'static str,
    },

    #[error("Unknown command")]
    UnknownCommand,

    #[error("Invalid command format!\n{usage}")]
    InvalidCommandFormat { usage: &'static str },
}

/// Errors raised by schedule mutation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Operation would result in duplicate events")]
    DuplicateEvent,

    #[error("Event not found in the schedule")]
    EventNotFound,

    #[error("This time slot has been blocked")]
    SlotBlocked,

    #[error("This time slot overlaps with another event")]
    SlotConflict,
}

/// Errors raised while executing a parsed command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error("The event index provided is invalid")]
    IndexOutOfRange,
}

/// Errors raised by the persistence adapter.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to access data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse data file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Corrupt data file: {0}")]
    CorruptData(String),
}

/// Convenience result type for Cadence operations.
pub type Result<T, E = CadenceError> = std::result::Result<T, E>;
