//! Data model for the scheduling core.
//!
//! This module provides the model layer of Cadence:
//!
//! - **Field types**: self-validating primitives for names, dates, time
//!   slots, locations, remarks, tags and display indices
//! - **Event**: the composite entity, with identity vs full equality
//! - **BlockedSlot**: time marked unavailable for scheduling
//! - **EventList**: the ordered, identity-unique collection
//! - **Schedule**: the aggregate root and sole mutation surface

pub mod blocked;
pub mod event;
pub mod event_list;
pub mod field;
pub mod schedule;

pub use blocked::BlockedSlot;
pub use event::Event;
pub use event_list::EventList;
pub use field::{Date, DisplayIndex, Location, Name, Remark, Tag, TimeSlot};
pub use schedule::{sample_schedule, EventFilter, Schedule};
