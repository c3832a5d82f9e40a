//! Working-hour schedules.
//!
//! Each employee carries a weekly table of shifts. A shift is a contiguous
//! interval within one day; a day may hold several shifts (e.g. a lunch
//! split). Shift lists are kept in the order they were configured, which is
//! expected to be chronological; overlap between shifts of the same day is
//! not validated.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::time::TimeOfDay;

/// Error for shifts whose start does not precede their end.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid shift: start {start} must be before end {end}")]
pub struct InvalidShift {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

/// A contiguous working interval within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawShift")]
pub struct Shift {
    start: TimeOfDay,
    end: TimeOfDay,
}

#[derive(Deserialize)]
struct RawShift {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TryFrom<RawShift> for Shift {
    type Error = InvalidShift;

    fn try_from(raw: RawShift) -> Result<Self, Self::Error> {
        Shift::new(raw.start, raw.end)
    }
}

impl Shift {
    /// Create a shift, enforcing `start < end`.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self, InvalidShift> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(InvalidShift { start, end })
        }
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Length of the shift in minutes.
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }
}

/// Weekly working-hour table, Sunday-first.
///
/// Serialized with one named list per weekday, matching the shape the
/// booking front end stores per employee:
///
/// ```json
/// { "tuesday": [{ "start": "09:00", "end": "18:00" }] }
/// ```
///
/// Missing days default to no shifts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeeklySchedule {
    pub sunday: Vec<Shift>,
    pub monday: Vec<Shift>,
    pub tuesday: Vec<Shift>,
    pub wednesday: Vec<Shift>,
    pub thursday: Vec<Shift>,
    pub friday: Vec<Shift>,
    pub saturday: Vec<Shift>,
}

impl WeeklySchedule {
    /// Shifts configured for the given weekday.
    pub fn shifts_for(&self, weekday: Weekday) -> &[Shift] {
        match weekday {
            Weekday::Sun => &self.sunday,
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
        }
    }

    /// True when no weekday has any shift.
    pub fn is_empty(&self) -> bool {
        [
            &self.sunday,
            &self.monday,
            &self.tuesday,
            &self.wednesday,
            &self.thursday,
            &self.friday,
            &self.saturday,
        ]
        .iter()
        .all(|day| day.is_empty())
    }
}
