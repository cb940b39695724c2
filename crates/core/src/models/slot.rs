use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;

use crate::errors::{BookingError, BookingResult};
use crate::models::time_of_day::TimeOfDay;

/// Slot granularity in whole minutes. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotDuration(u32);

impl SlotDuration {
    /// # Errors
    ///
    /// * `BookingError::Configuration` - `minutes` is zero, negative or too large
    pub fn new(minutes: i64) -> BookingResult<Self> {
        if minutes <= 0 {
            return Err(BookingError::configuration(format!(
                "non-positive slot duration ({} minutes)",
                minutes
            )));
        }
        let minutes = u32::try_from(minutes).map_err(|_| {
            BookingError::configuration(format!(
                "slot duration of {} minutes is too large",
                minutes
            ))
        })?;
        Ok(Self(minutes))
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }
}

impl Serialize for SlotDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0)
    }
}

impl<'de> Deserialize<'de> for SlotDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let minutes = i64::deserialize(deserializer)?;
        SlotDuration::new(minutes).map_err(serde::de::Error::custom)
    }
}

/// Working hours for one day, interpreted as the half-open range `[open, close)`.
///
/// A window whose `open` is not strictly before `close` is accepted but empty:
/// it means no working hours are configured and yields no slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingWindow {
    pub open: TimeOfDay,
    pub close: TimeOfDay,
}

impl BookingWindow {
    pub fn new(open: TimeOfDay, close: TimeOfDay) -> Self {
        Self { open, close }
    }

    pub fn is_empty(&self) -> bool {
        self.open >= self.close
    }

    pub fn span_minutes(&self) -> u32 {
        self.close
            .minutes_since_midnight()
            .saturating_sub(self.open.minutes_since_midnight())
    }

    pub fn contains(&self, time: TimeOfDay) -> bool {
        self.open <= time && time < self.close
    }
}

/// Labels of slots that are already reserved.
///
/// Membership is exact text comparison against the canonical label. Labels
/// are not validated; ones that never match a generated label are simply inert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookedSet(HashSet<String>);

impl BookedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>) -> bool {
        self.0.insert(label.into())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Members that parse as a time of day, in no particular order.
    pub fn times(&self) -> impl Iterator<Item = TimeOfDay> + '_ {
        self.0.iter().filter_map(|label| label.parse().ok())
    }
}

impl<S: Into<String>> FromIterator<S> for BookedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for BookedSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

/// One bookable start time in a generated grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub label: String,
    pub start: TimeOfDay,
    pub is_booked: bool,
    pub is_selected: bool,
}

impl Slot {
    pub fn is_available(&self) -> bool {
        !self.is_booked
    }
}
