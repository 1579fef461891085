//! Blocked time slots: date + range pairs marked unavailable for scheduling.

use std::fmt;

use super::event::Event;
use super::field::{Date, TimeSlot};

/// A time range on a date that no new event may occupy.
///
/// Blocked slots are compared by full equality and held as a set; the order
/// in which they were blocked carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockedSlot {
    date: Date,
    time_slot: TimeSlot,
}

impl BlockedSlot {
    pub fn new(date: Date, time_slot: TimeSlot) -> Self {
        Self { date, time_slot }
    }

    pub fn date(&self) -> &Date {
        &self.date
    }

    pub fn time_slot(&self) -> &TimeSlot {
        &self.time_slot
    }

    /// Whether this block covers any of the given event's time.
    pub fn blocks(&self, event: &Event) -> bool {
        self.date == *event.date() && self.time_slot.overlaps(event.time_slot())
    }
}

impl fmt::Display for BlockedSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date: {}; Time: {}", self.date, self.time_slot)
    }
}
