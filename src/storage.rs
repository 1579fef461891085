//! JSON persistence adapter for schedules.
//!
//! The on-disk format is a flat record per event and blocked slot, holding
//! only the canonical textual forms of the field types. Loading re-validates
//! every field through the field constructors, so a hand-edited or truncated
//! file surfaces as [`StorageError::CorruptData`] naming the offending
//! record instead of crashing or silently importing garbage.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ParseError, StorageError};
use crate::model::{BlockedSlot, Date, Event, Location, Name, Remark, Schedule, Tag, TimeSlot};

// ============================================================================
// Serialized records
// ============================================================================

/// Serialization-friendly form of an [`Event`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonAdaptedEvent {
    name: String,
    date: String,
    start_time: String,
    end_time: String,
    location: String,
    #[serde(default)]
    tagged: Vec<String>,
    #[serde(default)]
    remark: String,
}

impl JsonAdaptedEvent {
    fn from_model(event: &Event) -> Self {
        Self {
            name: event.name().as_str().to_string(),
            date: event.date().to_string(),
            start_time: event.time_slot().start_string(),
            end_time: event.time_slot().end_string(),
            location: event.location().as_str().to_string(),
            tagged: event.tags().iter().map(|t| t.as_str().to_string()).collect(),
            remark: event.remark().as_str().to_string(),
        }
    }

    fn to_model(&self) -> Result<Event, StorageError> {
        let name = Name::new(self.name.as_str()).map_err(corrupt)?;
        let date = Date::new(&self.date).map_err(corrupt)?;
        let time_slot = TimeSlot::new(&self.start_time, &self.end_time).map_err(corrupt)?;
        let location = Location::new(self.location.as_str()).map_err(corrupt)?;
        let tags = self
            .tagged
            .iter()
            .map(|t| Tag::new(t.as_str()).map_err(corrupt))
            .collect::<Result<_, _>>()?;
        let remark = Remark::new(self.remark.as_str());
        Ok(Event::new(name, date, time_slot, location, tags, remark))
    }
}

/// Serialization-friendly form of a [`BlockedSlot`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonAdaptedBlockedSlot {
    date: String,
    start_time: String,
    end_time: String,
}

impl JsonAdaptedBlockedSlot {
    fn from_model(slot: &BlockedSlot) -> Self {
        Self {
            date: slot.date().to_string(),
            start_time: slot.time_slot().start_string(),
            end_time: slot.time_slot().end_string(),
        }
    }

    fn to_model(&self) -> Result<BlockedSlot, StorageError> {
        let date = Date::new(&self.date).map_err(corrupt)?;
        let time_slot = TimeSlot::new(&self.start_time, &self.end_time).map_err(corrupt)?;
        Ok(BlockedSlot::new(date, time_slot))
    }
}

/// The complete persisted schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonSchedule {
    #[serde(default)]
    events: Vec<JsonAdaptedEvent>,
    #[serde(default)]
    blocked_slots: Vec<JsonAdaptedBlockedSlot>,
}

fn corrupt(err: ParseError) -> StorageError {
    StorageError::CorruptData(err.to_string())
}

// ============================================================================
// Load / save
// ============================================================================

/// Load a schedule from the JSON file at `path`.
///
/// Field-level violations and identity-duplicate events both surface as
/// [`StorageError::CorruptData`].
pub fn load_schedule(path: &Path) -> Result<Schedule, StorageError> {
    debug!(path = %path.display(), "loading schedule");
    let text = fs::read_to_string(path)?;
    let json: JsonSchedule = serde_json::from_str(&text)?;

    let events = json
        .events
        .iter()
        .map(JsonAdaptedEvent::to_model)
        .collect::<Result<Vec<_>, _>>()?;

    let mut schedule = Schedule::new();
    schedule
        .set_events(events)
        .map_err(|_| StorageError::CorruptData("duplicate events in data file".to_string()))?;
    for slot in &json.blocked_slots {
        schedule.add_blocked_slot(slot.to_model()?);
    }

    info!(
        events = schedule.events().len(),
        blocked = schedule.blocked_slots().len(),
        "schedule loaded"
    );
    Ok(schedule)
}

/// Save `schedule` as pretty-printed JSON at `path`.
pub fn save_schedule(schedule: &Schedule, path: &Path) -> Result<(), StorageError> {
    let json = JsonSchedule {
        events: schedule.events().iter().map(JsonAdaptedEvent::from_model).collect(),
        blocked_slots: schedule
            .blocked_slots()
            .iter()
            .map(JsonAdaptedBlockedSlot::from_model)
            .collect(),
    };
    let text = serde_json::to_string_pretty(&json)?;
    fs::write(path, text)?;
    debug!(path = %path.display(), "schedule saved");
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
