//! The event entity: a named commitment occupying a time slot on a date.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveTime;

use super::field::{Date, Location, Name, Remark, Tag, TimeSlot};

/// A scheduled event.
///
/// Events carry two equivalence notions. *Identity equality*
/// ([`Event::is_same_event`]) compares only name, date and time slot and is
/// what the schedule uses for duplicate detection; *full equality*
/// (`PartialEq`) compares every field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    name: Name,
    date: Date,
    time_slot: TimeSlot,
    location: Location,
    tags: BTreeSet<Tag>,
    remark: Remark,
}

impl Event {
    /// Assemble an event from validated fields.
    pub fn new(
        name: Name,
        date: Date,
        time_slot: TimeSlot,
        location: Location,
        tags: BTreeSet<Tag>,
        remark: Remark,
    ) -> Self {
        Self {
            name,
            date,
            time_slot,
            location,
            tags,
            remark,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn date(&self) -> &Date {
        &self.date
    }

    pub fn time_slot(&self) -> &TimeSlot {
        &self.time_slot
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn remark(&self) -> &Remark {
        &self.remark
    }

    /// Identity equality: same name, date and time slot.
    ///
    /// Location, tags and remark play no part; two events that agree on the
    /// identity fields are "the same event" no matter where they happen or
    /// how they are annotated.
    pub fn is_same_event(&self, other: &Event) -> bool {
        self.name == other.name && self.date == other.date && self.time_slot == other.time_slot
    }

    /// The chronological sort key: date first, then slot start time.
    pub fn chronological_key(&self) -> (Date, NaiveTime) {
        (self.date, self.time_slot.start())
    }

    /// Whether this event occupies any of the same time as `other`.
    pub fn conflicts_with(&self, other: &Event) -> bool {
        self.date == other.date && self.time_slot.overlaps(&other.time_slot)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Date: {}; Time: {}; Location: {}",
            self.name, self.date, self.time_slot, self.location
        )?;
        if !self.tags.is_empty() {
            write!(f, "; Tags: ")?;
            for tag in &self.tags {
                write!(f, "{tag}")?;
            }
        }
        if !self.remark.is_empty() {
            write!(f, "; Remark: {}", self.remark)?;
        }
        Ok(())
    }
}
