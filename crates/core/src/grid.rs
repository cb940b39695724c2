//! # Slot Grid
//!
//! Turns a day's working hours into the ordered list of bookable start times.
//!
//! The grid is start-anchored over the half-open window `[open, close)`:
//! a slot is emitted for every `open + k * duration` that is strictly before
//! `close`. Only the start is checked, so the last slot may run past closing
//! time. Labels are the canonical `HH:MM` rendering of each start.
//!
//! Booked slots are marked by exact label match by default. The
//! [`BookedMatch::Overlap`] policy instead blocks every slot that intersects
//! a booked appointment of known length.

use serde::{Deserialize, Serialize};

use crate::errors::BookingResult;
use crate::models::slot::{BookedSet, BookingWindow, Slot, SlotDuration};
use crate::models::time_of_day::TimeOfDay;

/// How booked entries are matched against generated slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BookedMatch {
    /// A slot is booked only when its label is in the booked set.
    #[default]
    ExactLabel,
    /// A slot is booked when its interval intersects any booked appointment
    /// `[start, start + appointment)`. Unparseable booked labels are ignored.
    Overlap { appointment: SlotDuration },
}

/// Number of slots [`generate`] emits for a window: `ceil(span / duration)`.
pub fn expected_len(window: &BookingWindow, duration: SlotDuration) -> usize {
    window.span_minutes().div_ceil(duration.minutes()) as usize
}

/// Generates the slot grid, matching booked slots by exact label.
pub fn generate(
    window: &BookingWindow,
    duration: SlotDuration,
    booked: &BookedSet,
    selected: Option<TimeOfDay>,
) -> Vec<Slot> {
    generate_with_policy(window, duration, booked, selected, BookedMatch::ExactLabel)
}

pub fn generate_with_policy(
    window: &BookingWindow,
    duration: SlotDuration,
    booked: &BookedSet,
    selected: Option<TimeOfDay>,
    policy: BookedMatch,
) -> Vec<Slot> {
    if window.is_empty() {
        return Vec::new();
    }

    let close = window.close.minutes_since_midnight();
    let step = duration.minutes();
    let blocked = match policy {
        BookedMatch::ExactLabel => Vec::new(),
        BookedMatch::Overlap { appointment } => booked
            .times()
            .map(|start| {
                let start = u64::from(start.minutes_since_midnight());
                (start, start + u64::from(appointment.minutes()))
            })
            .collect::<Vec<_>>(),
    };

    let mut slots = Vec::with_capacity(expected_len(window, duration));
    let mut cursor = window.open.minutes_since_midnight();
    while cursor < close {
        // cursor < close <= 23:59, so the conversion cannot fail
        let Some(start) = TimeOfDay::from_minutes(cursor) else {
            break;
        };
        let label = start.to_string();
        let is_booked = match policy {
            BookedMatch::ExactLabel => booked.contains(&label),
            BookedMatch::Overlap { .. } => {
                let (from, to) = (u64::from(cursor), u64::from(cursor) + u64::from(step));
                blocked
                    .iter()
                    .any(|&(b_start, b_end)| b_start < to && from < b_end)
            }
        };

        slots.push(Slot {
            label,
            start,
            is_booked,
            is_selected: selected == Some(start),
        });

        cursor = cursor.saturating_add(step);
    }

    slots
}

/// Unvalidated grid inputs as they arrive from a business record or a page.
///
/// [`SlotGridRequest::generate`] validates everything before generating, so a
/// malformed label or a non-positive duration yields an error and never a
/// partial grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotGridRequest {
    pub open: String,
    pub close: String,
    pub duration_minutes: i64,
    #[serde(default)]
    pub booked: Vec<String>,
    #[serde(default)]
    pub selected: Option<String>,
}

impl SlotGridRequest {
    pub fn generate(&self) -> BookingResult<Vec<Slot>> {
        self.generate_with(BookedMatch::ExactLabel)
    }

    /// # Errors
    ///
    /// * `BookingError::Configuration` - a time label is malformed or out of
    ///   range, or the duration is not positive
    pub fn generate_with(&self, policy: BookedMatch) -> BookingResult<Vec<Slot>> {
        let open: TimeOfDay = self.open.parse()?;
        let close: TimeOfDay = self.close.parse()?;
        let duration = SlotDuration::new(self.duration_minutes)?;
        let selected = self
            .selected
            .as_deref()
            .map(str::parse::<TimeOfDay>)
            .transpose()?;
        let booked: BookedSet = self.booked.iter().cloned().collect();

        Ok(generate_with_policy(
            &BookingWindow::new(open, close),
            duration,
            &booked,
            selected,
            policy,
        ))
    }
}
