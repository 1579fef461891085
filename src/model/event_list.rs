//! The ordered unique event collection.
//!
//! `EventList` keeps its elements sorted by `(date, slot start)` at all
//! times and rejects any mutation that would leave two identity-equal
//! events in the list. Edits that move an event's sort key re-position the
//! element automatically.
//!
//! Backed by a plain sorted `Vec`: the workload is a single user with at
//! most a few thousand events, so a linear scan plus binary-searched insert
//! beats any cleverer structure on simplicity.

use tracing::debug;

use crate::error::ScheduleError;

use super::event::Event;

/// A chronologically sorted collection of events with identity uniqueness.
///
/// Iteration order is non-decreasing in `(date, slot start)`; events with
/// an equal key keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventList {
    events: Vec<Event>,
}

impl EventList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity-equality membership test.
    pub fn contains(&self, event: &Event) -> bool {
        self.events.iter().any(|e| e.is_same_event(event))
    }

    /// Insert an event at its sorted position.
    ///
    /// Fails with [`ScheduleError::DuplicateEvent`] if an identity-equal
    /// event is already present; the list is unchanged on failure.
    pub fn add(&mut self, event: Event) -> Result<(), ScheduleError> {
        if self.contains(&event) {
            return Err(ScheduleError::DuplicateEvent);
        }
        let at = self.insertion_point(&event);
        debug!(position = at, "inserting event: {}", event.name());
        self.events.insert(at, event);
        Ok(())
    }

    /// Replace `target` with `edited`.
    ///
    /// Fails with [`ScheduleError::EventNotFound`] if `target` is not
    /// identity-present, and with [`ScheduleError::DuplicateEvent`] if
    /// `edited` is identity-equal to a *different* existing element. When
    /// the identity (and therefore the sort key) is unchanged the
    /// replacement is in place; otherwise the element is re-positioned.
    pub fn set_event(&mut self, target: &Event, edited: Event) -> Result<(), ScheduleError> {
        let index = self
            .events
            .iter()
            .position(|e| e.is_same_event(target))
            .ok_or(ScheduleError::EventNotFound)?;

        let collides = self
            .events
            .iter()
            .enumerate()
            .any(|(i, e)| i != index && e.is_same_event(&edited));
        if collides {
            return Err(ScheduleError::DuplicateEvent);
        }

        if self.events[index].is_same_event(&edited) {
            // Identity unchanged means the sort key is unchanged too.
            self.events[index] = edited;
        } else {
            self.events.remove(index);
            let at = self.insertion_point(&edited);
            self.events.insert(at, edited);
        }
        Ok(())
    }

    /// Delete the identity-equal element.
    ///
    /// Fails with [`ScheduleError::EventNotFound`] if absent.
    pub fn remove(&mut self, event: &Event) -> Result<(), ScheduleError> {
        let index = self
            .events
            .iter()
            .position(|e| e.is_same_event(event))
            .ok_or(ScheduleError::EventNotFound)?;
        self.events.remove(index);
        Ok(())
    }

    /// Replace the entire contents with `events`, sorted.
    ///
    /// Fails with [`ScheduleError::DuplicateEvent`] if the replacement list
    /// itself contains identity-duplicates; prior state is kept on failure.
    pub fn set_events(&mut self, events: Vec<Event>) -> Result<(), ScheduleError> {
        for (i, a) in events.iter().enumerate() {
            if events[i + 1..].iter().any(|b| a.is_same_event(b)) {
                return Err(ScheduleError::DuplicateEvent);
            }
        }
        let mut events = events;
        events.sort_by_key(Event::chronological_key);
        self.events = events;
        Ok(())
    }

    /// The sorted, read-only view of the list.
    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }

    /// Iterate the events in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// First index at which `event` can be inserted while keeping the list
    /// sorted and insertion-stable: strictly after every equal key.
    fn insertion_point(&self, event: &Event) -> usize {
        let key = event.chronological_key();
        self.events
            .partition_point(|e| e.chronological_key() <= key)
    }
}

impl<'a> IntoIterator for &'a EventList {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::model::field::{Date, Location, Name, Remark, Tag, TimeSlot};

    fn event(name: &str, date: &str, slot: &str) -> Event {
        Event::new(
            Name::new(name).unwrap(),
            Date::new(date).unwrap(),
            TimeSlot::parse(slot).unwrap(),
            Location::new("Office").unwrap(),
            BTreeSet::new(),
            Remark::default(),
        )
    }

    fn names(list: &EventList) -> Vec<&str> {
        list.iter().map(|e| e.name().as_str()).collect()
    }

    #[test]
    fn add_keeps_chronological_order() {
        let mut list = EventList::new();
        list.add(event("B", "2022-10-15", "1600-1700")).unwrap();
        list.add(event("A", "2022-10-13", "1300-1400")).unwrap();
        list.add(event("C", "2022-10-15", "0900-1000")).unwrap();
        assert_eq!(names(&list), vec!["A", "C", "B"]);
    }

    #[test]
    fn add_is_insertion_stable_on_equal_keys() {
        let mut list = EventList::new();
        list.add(event("First", "2022-10-13", "1300-1400")).unwrap();
        list.add(event("Second", "2022-10-13", "1300-1500")).unwrap();
        list.add(event("Third", "2022-10-13", "1300-1600")).unwrap();
        assert_eq!(names(&list), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn add_duplicate_fails_and_leaves_list_unchanged() {
        let mut list = EventList::new();
        list.add(event("A", "2022-10-13", "1300-1400")).unwrap();
        let err = list.add(event("A", "2022-10-13", "1300-1400")).unwrap_err();
        assert_eq!(err, ScheduleError::DuplicateEvent);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn contains_matches_on_identity_only() {
        let mut list = EventList::new();
        list.add(event("A", "2022-10-13", "1300-1400")).unwrap();
        let same_identity = Event::new(
            Name::new("A").unwrap(),
            Date::new("2022-10-13").unwrap(),
            TimeSlot::parse("1300-1400").unwrap(),
            Location::new("Somewhere else").unwrap(),
            BTreeSet::from([Tag::new("urgent").unwrap()]),
            Remark::new("edited"),
        );
        assert!(list.contains(&same_identity));
        assert!(!list.contains(&event("B", "2022-10-13", "1300-1400")));
    }

    #[test]
    fn set_event_missing_target_fails() {
        let mut list = EventList::new();
        let a = event("A", "2022-10-13", "1300-1400");
        assert_eq!(
            list.set_event(&a, a.clone()).unwrap_err(),
            ScheduleError::EventNotFound
        );
    }

    #[test]
    fn set_event_to_itself_is_idempotent() {
        let mut list = EventList::new();
        let a = event("A", "2022-10-13", "1300-1400");
        list.add(a.clone()).unwrap();
        let before = list.clone();
        list.set_event(&a, a.clone()).unwrap();
        assert_eq!(list, before);
    }

    #[test]
    fn set_event_repositions_when_key_moves() {
        let mut list = EventList::new();
        let a = event("A", "2022-10-13", "1300-1400");
        list.add(a.clone()).unwrap();
        list.add(event("B", "2022-10-14", "1300-1400")).unwrap();
        list.set_event(&a, event("A", "2022-10-20", "1300-1400")).unwrap();
        assert_eq!(names(&list), vec!["B", "A"]);
    }

    #[test]
    fn set_event_into_collision_fails() {
        let mut list = EventList::new();
        let a = event("A", "2022-10-13", "1300-1400");
        let b = event("B", "2022-10-14", "1300-1400");
        list.add(a.clone()).unwrap();
        list.add(b.clone()).unwrap();
        assert_eq!(
            list.set_event(&a, b).unwrap_err(),
            ScheduleError::DuplicateEvent
        );
        assert_eq!(names(&list), vec!["A", "B"]);
    }

    #[test]
    fn remove_missing_event_fails() {
        let mut list = EventList::new();
        assert_eq!(
            list.remove(&event("A", "2022-10-13", "1300-1400")).unwrap_err(),
            ScheduleError::EventNotFound
        );
    }

    #[test]
    fn remove_deletes_identity_match() {
        let mut list = EventList::new();
        let a = event("A", "2022-10-13", "1300-1400");
        list.add(a.clone()).unwrap();
        list.remove(&a).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn set_events_sorts_replacement() {
        let mut list = EventList::new();
        list.add(event("Old", "2022-01-01", "0900-1000")).unwrap();
        list.set_events(vec![
            event("Late", "2022-10-15", "1600-1700"),
            event("Early", "2022-10-13", "1300-1400"),
        ])
        .unwrap();
        assert_eq!(names(&list), vec!["Early", "Late"]);
    }

    #[test]
    fn set_events_rejects_duplicate_input_and_keeps_prior_state() {
        let mut list = EventList::new();
        list.add(event("Old", "2022-01-01", "0900-1000")).unwrap();
        let dup = event("A", "2022-10-13", "1300-1400");
        assert_eq!(
            list.set_events(vec![dup.clone(), dup]).unwrap_err(),
            ScheduleError::DuplicateEvent
        );
        assert_eq!(names(&list), vec!["Old"]);
    }
}
