//! Single-slot selection.
//!
//! The selection is either empty or names exactly one slot. Selecting an
//! unbooked slot replaces whatever was selected before; selecting a booked
//! slot, or a label that is not in the grid, leaves the state untouched.
//! Neither case is an error.

use crate::models::slot::Slot;
use crate::models::time_of_day::TimeOfDay;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Selected(TimeOfDay),
    RejectedBooked,
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotSelection {
    selected: Option<TimeOfDay>,
}

impl SlotSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<TimeOfDay> {
        self.selected
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Handles a user picking `label` from the rendered `slots`.
    pub fn on_select(&mut self, slots: &[Slot], label: &str) -> SelectOutcome {
        let Some(slot) = slots.iter().find(|slot| slot.label == label.trim()) else {
            return SelectOutcome::Unknown;
        };
        if slot.is_booked {
            return SelectOutcome::RejectedBooked;
        }

        self.selected = Some(slot.start);
        SelectOutcome::Selected(slot.start)
    }

    /// Re-marks `is_selected` on a grid from the current state.
    pub fn apply(&self, slots: &[Slot]) -> Vec<Slot> {
        slots
            .iter()
            .map(|slot| Slot {
                is_selected: self.selected == Some(slot.start),
                ..slot.clone()
            })
            .collect()
    }
}
