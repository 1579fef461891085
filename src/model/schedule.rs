//! The schedule aggregate: the ordered event collection plus blocked slots.
//!
//! `Schedule` is the only mutation surface the command layer sees. It owns
//! the event list and the blocked-slot set exclusively and enforces the
//! conflict rules between them: a new or edited event may not overlap a
//! blocked slot, another event, or duplicate an existing event's identity.

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::error::ScheduleError;

use super::blocked::BlockedSlot;
use super::event::Event;
use super::event_list::EventList;
use super::field::{Date, Location, Name, Remark, Tag, TimeSlot};

// ============================================================================
// Event filter
// ============================================================================

/// The live view predicate: which events the user is currently looking at.
///
/// Index-carrying commands (edit, delete) resolve against the view this
/// filter produces, so it is part of the schedule's state rather than a
/// transient query argument.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EventFilter {
    /// Every event.
    #[default]
    All,
    /// Events whose name contains any keyword as a whole word,
    /// case-insensitively.
    NameContains(Vec<String>),
    /// Events carrying any of the given tags, case-insensitively.
    TagContains(Vec<String>),
}

impl EventFilter {
    /// Whether `event` passes this filter.
    pub fn matches(&self, event: &Event) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::NameContains(keywords) => keywords.iter().any(|keyword| {
                event
                    .name()
                    .as_str()
                    .split_whitespace()
                    .any(|word| word.eq_ignore_ascii_case(keyword))
            }),
            EventFilter::TagContains(keywords) => keywords.iter().any(|keyword| {
                event
                    .tags()
                    .iter()
                    .any(|tag| tag.as_str().eq_ignore_ascii_case(keyword))
            }),
        }
    }
}

// ============================================================================
// Schedule
// ============================================================================

/// Aggregate root for the scheduling core.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    events: EventList,
    blocked: Vec<BlockedSlot>,
    filter: EventFilter,
}

impl Schedule {
    /// Create an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Add an event, enforcing identity-uniqueness and overlap rules.
    ///
    /// Checks run in order: [`ScheduleError::DuplicateEvent`] on an
    /// identity collision (checked first, since an identity-equal event
    /// always overlaps itself), [`ScheduleError::SlotBlocked`] if the event
    /// overlaps a blocked slot, [`ScheduleError::SlotConflict`] if it
    /// overlaps an existing event. The schedule is unchanged on failure.
    pub fn add_event(&mut self, event: Event) -> Result<(), ScheduleError> {
        if self.events.contains(&event) {
            return Err(ScheduleError::DuplicateEvent);
        }
        self.check_conflicts(&event, None)?;
        self.events.add(event)?;
        info!(total = self.events.len(), "event added");
        Ok(())
    }

    /// Replace `target` with `edited`, re-applying the same checks to the
    /// edited event. The target itself is excluded from both scans so an
    /// event can always be edited in place; editing into another element's
    /// identity is a [`ScheduleError::DuplicateEvent`].
    pub fn set_event(&mut self, target: &Event, edited: Event) -> Result<(), ScheduleError> {
        if !self.events.contains(target) {
            return Err(ScheduleError::EventNotFound);
        }
        let collides = self
            .events
            .iter()
            .any(|e| !e.is_same_event(target) && e.is_same_event(&edited));
        if collides {
            return Err(ScheduleError::DuplicateEvent);
        }
        self.check_conflicts(&edited, Some(target))?;
        self.events.set_event(target, edited)
    }

    /// Remove the identity-equal event.
    pub fn remove_event(&mut self, event: &Event) -> Result<(), ScheduleError> {
        self.events.remove(event)?;
        info!(total = self.events.len(), "event removed");
        Ok(())
    }

    /// Mark a slot as blocked for future scheduling.
    ///
    /// Blocking is forward-only: events already overlapping the slot stay
    /// valid. Re-blocking an identical slot is a no-op.
    pub fn add_blocked_slot(&mut self, slot: BlockedSlot) {
        if !self.blocked.contains(&slot) {
            debug!("blocking slot: {slot}");
            self.blocked.push(slot);
        }
    }

    /// Replace the entire event collection, e.g. when loading from storage.
    pub fn set_events(&mut self, events: Vec<Event>) -> Result<(), ScheduleError> {
        self.events.set_events(events)
    }

    /// Drop every event. Blocked slots are a standing expression of
    /// unavailability and survive a clear.
    pub fn clear(&mut self) {
        info!(cleared = self.events.len(), "clearing schedule");
        self.events = EventList::new();
        self.filter = EventFilter::All;
    }

    /// Install the live view filter used by index-carrying commands.
    pub fn set_filter(&mut self, filter: EventFilter) {
        self.filter = filter;
    }

    // ========================================================================
    // Read-only views
    // ========================================================================

    /// The full chronologically ordered view.
    pub fn events(&self) -> &[Event] {
        self.events.as_slice()
    }

    /// The blocked-slot set, in the order the slots were blocked.
    pub fn blocked_slots(&self) -> &[BlockedSlot] {
        &self.blocked
    }

    /// The current filter.
    pub fn filter(&self) -> &EventFilter {
        &self.filter
    }

    /// The ordered view restricted to the current filter.
    pub fn filtered_events(&self) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| self.filter.matches(e))
            .collect()
    }

    /// Events dated strictly after the reference instant's date, in
    /// chronological order.
    pub fn upcoming_events(&self, reference: NaiveDateTime) -> Vec<&Event> {
        let today: Date = reference.date().into();
        self.events
            .iter()
            .filter(|e| *e.date() > today)
            .collect()
    }

    /// The single earliest event strictly after the reference instant, by
    /// `(date, slot start)`.
    pub fn next_event(&self, reference: NaiveDateTime) -> Option<&Event> {
        let key = (Date::from(reference.date()), reference.time());
        self.events.iter().find(|e| e.chronological_key() > key)
    }

    // ========================================================================
    // Conflict rules
    // ========================================================================

    fn check_conflicts(
        &self,
        event: &Event,
        exclude: Option<&Event>,
    ) -> Result<(), ScheduleError> {
        if self.blocked.iter().any(|slot| slot.blocks(event)) {
            return Err(ScheduleError::SlotBlocked);
        }
        let conflicts = self
            .events
            .iter()
            .filter(|existing| exclude.map_or(true, |t| !existing.is_same_event(t)))
            .any(|existing| existing.conflicts_with(event));
        if conflicts {
            return Err(ScheduleError::SlotConflict);
        }
        Ok(())
    }
}

// ============================================================================
// Sample data
// ============================================================================

/// Build a freshly populated schedule for first runs.
///
/// A plain factory taking no hidden state; callers own the result outright.
pub fn sample_schedule() -> Schedule {
    let samples = [
        ("Jacob NG", "2022-10-13", "1300-1400", "The Deck", &["CS1231S", "URGENT"][..], "Cool student"),
        ("Ruth Poh", "2022-10-15", "1600-1700", "Central Library", &["supplementary"][..], "Coool student"),
        ("Teng Foong", "2022-10-18", "1000-1100", "COM1 Basement", &["CS1231S"][..], "Cooool student"),
        ("Galvin C", "2022-10-19", "1400-1500", "Office", &["CS2100"][..], "Student. Very cool."),
        ("Lulu", "2022-10-20", "1400-1500", "Office", &["supplementary"][..], ""),
    ];

    let mut schedule = Schedule::new();
    for (name, date, slot, location, tags, remark) in samples {
        let event = Event::new(
            Name::new(name).expect("sample name is valid"),
            Date::new(date).expect("sample date is valid"),
            TimeSlot::parse(slot).expect("sample time slot is valid"),
            Location::new(location).expect("sample location is valid"),
            tags.iter()
                .map(|t| Tag::new(*t).expect("sample tag is valid"))
                .collect(),
            Remark::new(remark),
        );
        schedule
            .add_event(event)
            .expect("sample events are conflict-free");
    }
    schedule
}

// ============================================================================
// Tests
// ============================================================================
