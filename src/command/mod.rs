//! The command layer: a closed vocabulary of schedule operations.
//!
//! Each variant of [`Command`] is produced by the parser, carries already
//! validated arguments, and executes atomically against a [`Schedule`]: a
//! rejected command leaves the schedule exactly as it was. Commands are
//! stateless, one-shot transformations; nothing here touches global state.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use chrono::NaiveDateTime;

use crate::error::CommandError;
use crate::model::{
    BlockedSlot, Date, DisplayIndex, Event, EventFilter, Location, Name, Remark, Schedule, Tag,
    TimeSlot,
};

// ============================================================================
// Command result
// ============================================================================

/// The outcome of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CommandResult {
    /// User-facing feedback message.
    pub message: String,
    /// Whether the caller should display the help window.
    pub show_help: bool,
    /// Whether the caller should terminate the session.
    pub exit: bool,
}

impl CommandResult {
    /// A plain feedback result with no flags set.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            show_help: false,
            exit: false,
        }
    }
}

// ============================================================================
// Edit descriptor
// ============================================================================

/// The optional field overrides carried by an edit command.
///
/// Fields left `None` keep the target event's current value; the edited
/// event is assembled by overlaying the present fields on the target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditEventDescriptor {
    pub name: Option<Name>,
    pub date: Option<Date>,
    pub time_slot: Option<TimeSlot>,
    pub location: Option<Location>,
    pub tags: Option<BTreeSet<Tag>>,
    pub remark: Option<Remark>,
}

impl EditEventDescriptor {
    /// Whether at least one field would change.
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.date.is_some()
            || self.time_slot.is_some()
            || self.location.is_some()
            || self.tags.is_some()
            || self.remark.is_some()
    }

    /// Build the edited event from `target` and this descriptor.
    pub fn apply_to(&self, target: &Event) -> Event {
        Event::new(
            self.name.clone().unwrap_or_else(|| target.name().clone()),
            self.date.unwrap_or(*target.date()),
            self.time_slot.unwrap_or(*target.time_slot()),
            self.location
                .clone()
                .unwrap_or_else(|| target.location().clone()),
            self.tags.clone().unwrap_or_else(|| target.tags().clone()),
            self.remark
                .clone()
                .unwrap_or_else(|| target.remark().clone()),
        )
    }
}

// ============================================================================
// Command
// ============================================================================

/// A validated, executable user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a new event to the schedule.
    Add(Event),
    /// Edit the event at a display index in the current view.
    Edit {
        index: DisplayIndex,
        descriptor: EditEventDescriptor,
    },
    /// Delete the event at a display index in the current view.
    Delete(DisplayIndex),
    /// Filter the view to events whose names contain any keyword.
    Find(Vec<String>),
    /// Filter the view to events carrying any of the given tags.
    FindTag(Vec<String>),
    /// Reset the view to all events.
    List,
    /// Remove every event from the schedule.
    Clear,
    /// Mark a time slot as unavailable.
    Block(BlockedSlot),
    /// Show events dated after today.
    Upcoming,
    /// Show the single next event.
    NextEvent,
    /// Show usage help.
    Help,
    /// End the session.
    Exit,
}

impl Command {
    pub const ADD_USAGE: &'static str =
        "add: Adds an event to the schedule.\n\
         Parameters: n/NAME d/DATE ts/TIMESLOT l/LOCATION [t/TAG]... [r/REMARK]\n\
         Example: add n/Jacob NG d/2022-10-13 ts/1300-1400 l/The Deck t/CS1231S";
    pub const EDIT_USAGE: &'static str =
        "edit: Edits the event at the given index in the displayed list.\n\
         Parameters: INDEX [n/NAME] [d/DATE] [ts/TIMESLOT] [l/LOCATION] [t/TAG]... [r/REMARK]\n\
         Example: edit 1 l/COM1 Basement";
    pub const DELETE_USAGE: &'static str =
        "delete: Deletes the event at the given index in the displayed list.\n\
         Parameters: INDEX\n\
         Example: delete 1";
    pub const FIND_USAGE: &'static str =
        "find: Lists events whose names contain any of the given keywords.\n\
         Parameters: KEYWORD [MORE_KEYWORDS]...\n\
         Example: find jacob ruth";
    pub const FINDTAG_USAGE: &'static str =
        "findtag: Lists events tagged with any of the given keywords.\n\
         Parameters: KEYWORD [MORE_KEYWORDS]...\n\
         Example: findtag CS1231S";
    pub const BLOCK_USAGE: &'static str =
        "block: Marks a time slot as unavailable for scheduling.\n\
         Parameters: d/DATE ts/TIMESLOT\n\
         Example: block d/2022-10-13 ts/0800-0900";
    pub const LIST_USAGE: &'static str = "list: Lists every event in the schedule.";
    pub const CLEAR_USAGE: &'static str = "clear: Removes every event from the schedule.";
    pub const UPCOMING_USAGE: &'static str = "upcoming: Lists events dated after today.";
    pub const NEXT_USAGE: &'static str = "next: Shows the next event after the current time.";
    pub const HELP_USAGE: &'static str = "help: Shows usage instructions.";
    pub const EXIT_USAGE: &'static str = "exit: Exits the application.";

    /// Execute this command against `schedule`.
    ///
    /// `now` is the reference instant for the time-relative queries; the
    /// caller injects it so execution stays deterministic under test.
    pub fn execute(
        &self,
        schedule: &mut Schedule,
        now: NaiveDateTime,
    ) -> Result<CommandResult, CommandError> {
        match self {
            Command::Add(event) => {
                schedule.add_event(event.clone()).map_err(CommandError::from)?;
                Ok(CommandResult::message(format!("New event added: {event}")))
            }
            Command::Edit { index, descriptor } => {
                let target = Self::resolve(schedule, *index)?.clone();
                let edited = descriptor.apply_to(&target);
                schedule.set_event(&target, edited.clone())?;
                Ok(CommandResult::message(format!("Edited event: {edited}")))
            }
            Command::Delete(index) => {
                let target = Self::resolve(schedule, *index)?.clone();
                schedule.remove_event(&target)?;
                Ok(CommandResult::message(format!("Deleted event: {target}")))
            }
            Command::Find(keywords) => {
                schedule.set_filter(EventFilter::NameContains(keywords.clone()));
                Ok(CommandResult::message(listed_message(
                    schedule.filtered_events().len(),
                )))
            }
            Command::FindTag(keywords) => {
                schedule.set_filter(EventFilter::TagContains(keywords.clone()));
                Ok(CommandResult::message(listed_message(
                    schedule.filtered_events().len(),
                )))
            }
            Command::List => {
                schedule.set_filter(EventFilter::All);
                Ok(CommandResult::message("Listed all events"))
            }
            Command::Clear => {
                schedule.clear();
                Ok(CommandResult::message("Schedule has been cleared!"))
            }
            Command::Block(slot) => {
                schedule.add_blocked_slot(slot.clone());
                Ok(CommandResult::message(format!(
                    "Blocked the following time slot: {slot}"
                )))
            }
            Command::Upcoming => {
                let upcoming = schedule.upcoming_events(now);
                if upcoming.is_empty() {
                    return Ok(CommandResult::message("No upcoming events!"));
                }
                let mut message = format!("Upcoming events: {}", upcoming.len());
                for event in upcoming {
                    // Formatting a String never fails.
                    let _ = write!(message, "\n{event}");
                }
                Ok(CommandResult::message(message))
            }
            Command::NextEvent => match schedule.next_event(now) {
                Some(event) => Ok(CommandResult::message(format!("Next event: {event}"))),
                None => Ok(CommandResult::message("No upcoming events!")),
            },
            Command::Help => Ok(CommandResult {
                message: help_text(),
                show_help: true,
                exit: false,
            }),
            Command::Exit => Ok(CommandResult {
                message: "Exiting Cadence as requested ...".to_string(),
                show_help: false,
                exit: true,
            }),
        }
    }

    /// Resolve a display index against the currently filtered view.
    ///
    /// Resolution happens here, at execute time, because earlier commands
    /// may have shifted the view since the index was typed.
    fn resolve(schedule: &Schedule, index: DisplayIndex) -> Result<&Event, CommandError> {
        schedule
            .filtered_events()
            .get(index.zero_based())
            .copied()
            .ok_or(CommandError::IndexOutOfRange)
    }
}

fn listed_message(count: usize) -> String {
    format!("{count} events listed!")
}

fn help_text() -> String {
    [
        Command::ADD_USAGE,
        Command::EDIT_USAGE,
        Command::DELETE_USAGE,
        Command::FIND_USAGE,
        Command::FINDTAG_USAGE,
        Command::LIST_USAGE,
        Command::CLEAR_USAGE,
        Command::BLOCK_USAGE,
        Command::UPCOMING_USAGE,
        Command::NEXT_USAGE,
        Command::HELP_USAGE,
        Command::EXIT_USAGE,
    ]
    .join("\n\n")
}

// ============================================================================
// Tests
// ============================================================================
