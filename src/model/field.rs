//! Self-validating field types for events and blocked slots.
//!
//! Each type validates its textual form at construction and exposes a
//! canonical value; an invalid form is rejected with the type's fixed
//! constraint message. Once constructed, a field value is immutable.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};

use crate::error::ParseError;

// ============================================================================
// Name
// ============================================================================

/// An event's name: non-empty printable text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should not be blank and should contain only printable characters";

    /// Create a name from raw text, rejecting blank or non-printable input.
    pub fn new(value: impl Into<String>) -> Result<Self, ParseError> {
        let value = value.into();
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(ParseError::InvalidFormat {
                field: "name",
                constraint: Self::MESSAGE_CONSTRAINTS,
            })
        }
    }

    /// Whether the given text is a valid name.
    pub fn is_valid(value: &str) -> bool {
        !value.trim().is_empty() && !value.chars().any(char::is_control)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Date
// ============================================================================

/// A calendar date in `YYYY-MM-DD` form.
///
/// Backed by [`chrono::NaiveDate`], so only real calendar dates construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date(NaiveDate);

impl Date {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Dates should be valid calendar dates in YYYY-MM-DD format";

    /// Parse a date from its canonical `YYYY-MM-DD` form.
    pub fn new(value: &str) -> Result<Self, ParseError> {
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| ParseError::InvalidFormat {
                field: "date",
                constraint: Self::MESSAGE_CONSTRAINTS,
            })
    }

    /// Whether the given text is a valid date.
    pub fn is_valid(value: &str) -> bool {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

// ============================================================================
// TimeSlot
// ============================================================================

/// A half-open time range on a single day, in 24-hour `HHMM` wall-clock time.
///
/// The invariant `start < end` holds for every constructed slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeSlot {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeSlot {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Time slots should be HHMM-HHMM with valid 24-hour times and start before end";

    /// Build a slot from two `HHMM` strings.
    pub fn new(start: &str, end: &str) -> Result<Self, ParseError> {
        let start = parse_hhmm(start).ok_or(Self::invalid())?;
        let end = parse_hhmm(end).ok_or(Self::invalid())?;
        if start >= end {
            return Err(Self::invalid());
        }
        Ok(Self { start, end })
    }

    /// Parse a slot from its canonical `HHMM-HHMM` form.
    pub fn parse(value: &str) -> Result<Self, ParseError> {
        let (start, end) = value.split_once('-').ok_or(Self::invalid())?;
        Self::new(start, end)
    }

    /// Whether the given text is a valid `HHMM-HHMM` slot.
    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_ok()
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Whether two slots share any time, treating both as half-open ranges.
    /// Touching slots (one ends exactly when the other starts) do not overlap.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// The `HHMM` form of the start time.
    pub fn start_string(&self) -> String {
        self.start.format("%H%M").to_string()
    }

    /// The `HHMM` form of the end time.
    pub fn end_string(&self) -> String {
        self.end.format("%H%M").to_string()
    }

    fn invalid() -> ParseError {
        ParseError::InvalidFormat {
            field: "time slot",
            constraint: Self::MESSAGE_CONSTRAINTS,
        }
    }
}

fn parse_hhmm(value: &str) -> Option<NaiveTime> {
    if value.len() != 4 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour: u32 = value[..2].parse().ok()?;
    let minute: u32 = value[2..].parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start_string(), self.end_string())
    }
}

// ============================================================================
// Location
// ============================================================================

/// Where an event takes place: non-empty text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location(String);

impl Location {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Locations should not be blank";

    /// Create a location from raw text, rejecting blank input.
    pub fn new(value: impl Into<String>) -> Result<Self, ParseError> {
        let value = value.into();
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(ParseError::InvalidFormat {
                field: "location",
                constraint: Self::MESSAGE_CONSTRAINTS,
            })
        }
    }

    /// Whether the given text is a valid location.
    pub fn is_valid(value: &str) -> bool {
        !value.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Remark
// ============================================================================

/// Free-form note attached to an event. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Remark(String);

impl Remark {
    /// Create a remark. Any text is accepted, including the empty string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Remark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Tag
// ============================================================================

/// An alphanumeric label attached to an event.
///
/// Tags live in a set: no duplicates, no ordering significance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Tags should be alphanumeric";

    /// Create a tag, rejecting empty or non-alphanumeric labels.
    pub fn new(value: impl Into<String>) -> Result<Self, ParseError> {
        let value = value.into();
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(ParseError::InvalidFormat {
                field: "tag",
                constraint: Self::MESSAGE_CONSTRAINTS,
            })
        }
    }

    /// Whether the given text is a valid tag.
    pub fn is_valid(value: &str) -> bool {
        !value.is_empty() && value.chars().all(char::is_alphanumeric)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

// ============================================================================
// DisplayIndex
// ============================================================================

/// A validated 1-based position within the currently displayed event view.
///
/// Parsed eagerly (non-numeric or non-positive input is rejected at parse
/// time) but resolved against the filtered view only when the carrying
/// command executes, so later mutations cannot leave a stale index behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayIndex(usize);

impl DisplayIndex {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Index should be a positive whole number";

    /// Create an index from a 1-based position.
    pub fn new(one_based: usize) -> Result<Self, ParseError> {
        if one_based >= 1 {
            Ok(Self(one_based))
        } else {
            Err(Self::invalid())
        }
    }

    /// Parse a 1-based index from text.
    pub fn parse(value: &str) -> Result<Self, ParseError> {
        value
            .trim()
            .parse::<usize>()
            .map_err(|_| Self::invalid())
            .and_then(Self::new)
    }

    /// The 1-based position, as displayed to the user.
    pub fn one_based(&self) -> usize {
        self.0
    }

    /// The 0-based offset into the displayed view.
    pub fn zero_based(&self) -> usize {
        self.0 - 1
    }

    fn invalid() -> ParseError {
        ParseError::InvalidFormat {
            field: "index",
            constraint: Self::MESSAGE_CONSTRAINTS,
        }
    }
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================
