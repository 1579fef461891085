//! Cadence: the in-memory scheduling core of a personal assistant.
//!
//! Cadence holds a set of timed events, keeps them chronologically ordered
//! and identity-unique, tracks explicitly blocked time slots, and executes
//! a closed vocabulary of user commands through a parse → validate →
//! execute pipeline.

pub mod command;
pub mod error;
pub mod model;
pub mod parser;
pub mod storage;

pub use command::{Command, CommandResult, EditEventDescriptor};
pub use error::{CadenceError, CommandError, ParseError, Result, ScheduleError, StorageError};
pub use model::{
    sample_schedule, BlockedSlot, Date, DisplayIndex, Event, EventFilter, EventList, Location,
    Name, Remark, Schedule, Tag, TimeSlot,
};
pub use parser::parse_command;
pub use storage::{load_schedule, save_schedule};
