//! # Slotbook Core
//!
//! Domain types for the slotbook booking marketplace client: wall-clock
//! times, booking windows, the appointment slot grid and the single-slot
//! selection state machine, plus the marketplace records (businesses,
//! bookings, users, categories) that the client fetches.
//!
//! Everything in this crate is synchronous and free of I/O. The slot grid
//! is recomputed from scratch from caller-supplied inputs each time it is
//! needed.

pub mod errors;
pub mod grid;
pub mod models;
pub mod selection;

pub use errors::{BookingError, BookingResult};
pub use grid::{BookedMatch, SlotGridRequest, generate, generate_with_policy};
pub use models::slot::{BookedSet, BookingWindow, Slot, SlotDuration};
pub use models::time_of_day::TimeOfDay;
pub use selection::{SelectOutcome, SlotSelection};
