use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

const MINUTES_PER_DAY: u16 = 24 * 60;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeRangeError {
    #[error("malformed time range {0:?}, expected \"HH:MM - HH:MM\"")]
    Malformed(String),
}

/// Time of day as minutes since midnight. `24:00` is allowed as an end bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if minute >= 60 {
            return None;
        }
        let minutes = hour.checked_mul(60)?.checked_add(minute)?;
        (minutes <= MINUTES_PER_DAY).then_some(Self(minutes))
    }
}

impl FromStr for TimeOfDay {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s.split_once(':').ok_or(())?;
        let is_field = |f: &str, max_len| {
            !f.is_empty() && f.len() <= max_len && f.bytes().all(|b| b.is_ascii_digit())
        };
        if !is_field(hour, 2) || minute.len() != 2 || !is_field(minute, 2) {
            return Err(());
        }
        let hour = hour.parse().map_err(|_| ())?;
        let minute = minute.parse().map_err(|_| ())?;
        Self::from_hm(hour, minute).ok_or(())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// Half-open interval `[start, end)` within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl TimeRange {
    /// Whole-hour range `[start_hour:00, end_hour:00)`.
    pub fn hours(start_hour: u16, end_hour: u16) -> Option<Self> {
        let start = TimeOfDay::from_hm(start_hour, 0)?;
        let end = TimeOfDay::from_hm(end_hour, 0)?;
        (start < end).then_some(Self { start, end })
    }

    /// Strict overlap: touching at a boundary does not count.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && self.end > other.start
    }
}

impl FromStr for TimeRange {
    type Err = TimeRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TimeRangeError::Malformed(s.to_string());

        let (start, end) = s.split_once('-').ok_or_else(malformed)?;
        let start: TimeOfDay = start.trim().parse().map_err(|_| malformed())?;
        let end: TimeOfDay = end.trim().parse().map_err(|_| malformed())?;

        if start >= end {
            return Err(malformed());
        }
        Ok(Self { start, end })
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

impl Serialize for TimeRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Overlap test on the textual `HH:MM - HH:MM` form used by the booking table.
///
/// The grid parses each booking once and calls [`TimeRange::overlaps`] directly.
#[cfg(test)]
pub fn slot_range_overlap(slot: &str, booking_range: &str) -> Result<bool, TimeRangeError> {
    let slot: TimeRange = slot.parse()?;
    let booking: TimeRange = booking_range.parse()?;
    Ok(slot.overlaps(&booking))
}

/// One-hour display slots for every hour in `[start_hour, end_hour)`.
pub fn generate_slots(start_hour: u16, end_hour: u16) -> Vec<TimeRange> {
    (start_hour..end_hour)
        .filter_map(|h| TimeRange::hours(h, h + 1))
        .collect()
}
