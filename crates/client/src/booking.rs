//! # Booking Flow
//!
//! The state behind a business's booking page: the day being booked, a
//! snapshot of the times already taken, and the user's current pick.
//!
//! The slot grid is never stored. [`BookingFlow::slots`] regenerates it from
//! the snapshot each time, so a refreshed snapshot or a new selection is
//! reflected on the next call without any diffing.

use chrono::NaiveDate;
use slotbook_core::{
    BookedMatch, BookedSet, BookingError, BookingResult, SelectOutcome, Slot, SlotSelection,
    TimeOfDay, generate_with_policy,
    models::{
        booking::{Booking, BookingStatus, CreateBookingRequest},
        business::{Business, OpeningHours},
    },
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{session::Session, source::BookingSource};

pub struct BookingFlow<'a, S: ?Sized> {
    source: &'a S,
    business: Business,
    hours: OpeningHours,
    date: NaiveDate,
    booked: BookedSet,
    selection: SlotSelection,
    policy: BookedMatch,
}

impl<'a, S: BookingSource + ?Sized> BookingFlow<'a, S> {
    /// Loads a business and the times already booked there on `date`.
    ///
    /// # Errors
    ///
    /// * `BookingError::Validation` - `date` is before `today`, or the business
    ///   is not approved for bookings
    /// * `BookingError::Configuration` - the business has no working hours
    /// * any error from the source
    pub async fn load(
        source: &'a S,
        business_id: Uuid,
        date: NaiveDate,
        today: NaiveDate,
    ) -> BookingResult<Self> {
        if date < today {
            return Err(BookingError::validation(format!(
                "{} is in the past and cannot be booked",
                date
            )));
        }

        let business = source.business(business_id).await?;
        if !business.is_listed() {
            return Err(BookingError::validation(format!(
                "{} is not accepting bookings",
                business.name
            )));
        }
        let hours = business.opening.ok_or_else(|| {
            BookingError::configuration(format!(
                "{} has no working hours configured",
                business.name
            ))
        })?;

        let booked: BookedSet = source.booked_times(business_id, date).await?.into_iter().collect();
        info!(
            business = %business.name,
            %date,
            booked = booked.len(),
            "booking page loaded"
        );

        Ok(Self {
            source,
            business,
            hours,
            date,
            booked,
            selection: SlotSelection::new(),
            policy: BookedMatch::ExactLabel,
        })
    }

    pub fn with_policy(mut self, policy: BookedMatch) -> Self {
        self.policy = policy;
        self
    }

    pub fn business(&self) -> &Business {
        &self.business
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn booked(&self) -> &BookedSet {
        &self.booked
    }

    pub fn selected(&self) -> Option<TimeOfDay> {
        self.selection.selected()
    }

    pub fn slots(&self) -> Vec<Slot> {
        generate_with_policy(
            &self.hours.window(),
            self.hours.slot_minutes,
            &self.booked,
            self.selection.selected(),
            self.policy,
        )
    }

    /// Selection entry point for the page. Booked or unknown labels are ignored.
    pub fn on_select(&mut self, label: &str) -> SelectOutcome {
        let slots = self.slots();
        let outcome = self.selection.on_select(&slots, label);
        match outcome {
            SelectOutcome::Selected(time) => info!(%time, "slot selected"),
            SelectOutcome::RejectedBooked => warn!(label, "slot already booked"),
            SelectOutcome::Unknown => warn!(label, "no such slot"),
        }
        outcome
    }

    /// Re-reads the booked times, dropping the selection if it was taken meanwhile.
    pub async fn refresh(&mut self) -> BookingResult<()> {
        self.booked = self
            .source
            .reload_booked_times(self.business.id, self.date)
            .await?
            .into_iter()
            .collect();

        let still_free = self
            .slots()
            .iter()
            .any(|slot| slot.is_selected && slot.is_available());
        if self.selection.selected().is_some() && !still_free {
            warn!("selected slot was booked by someone else");
            self.selection.clear();
        }
        Ok(())
    }

    /// Books the selected slot for the signed-in user.
    ///
    /// # Errors
    ///
    /// * `BookingError::Authentication` - nobody is signed in
    /// * `BookingError::Validation` - no slot is selected
    /// * any error from the source
    pub async fn confirm(
        &mut self,
        session: &Session,
        note: Option<String>,
    ) -> BookingResult<Booking> {
        let user = session.require_user()?;
        let time = self
            .selection
            .selected()
            .ok_or_else(|| BookingError::validation("select a time slot first"))?;

        let request = CreateBookingRequest {
            business_id: self.business.id,
            user_email: user.email.clone(),
            user_name: user.name.clone(),
            date: self.date,
            time,
            note,
        };
        let booking = self.source.create_booking(request).await?;

        self.booked.insert(booking.time.to_string());
        self.selection.clear();
        info!(
            business = %self.business.name,
            date = %booking.date,
            time = %booking.time,
            "booking confirmed"
        );
        Ok(booking)
    }
}

/// The signed-in user's bookings, split the way the "my bookings" page shows them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MyBookings {
    /// Still-active bookings from today on, soonest first.
    pub upcoming: Vec<Booking>,
    /// Past, completed and cancelled bookings, most recent first.
    pub history: Vec<Booking>,
}

impl MyBookings {
    pub async fn load<S: BookingSource + ?Sized>(
        source: &S,
        session: &Session,
        today: NaiveDate,
    ) -> BookingResult<Self> {
        let user = session.require_user()?;
        let bookings = source.bookings_by_user(&user.email).await?;
        Ok(Self::partition(bookings, today))
    }

    pub fn partition(bookings: Vec<Booking>, today: NaiveDate) -> Self {
        let (mut upcoming, mut history): (Vec<_>, Vec<_>) = bookings
            .into_iter()
            .partition(|booking| booking.status == BookingStatus::Booked && booking.date >= today);

        upcoming.sort_by_key(|booking| (booking.date, booking.time));
        history.sort_by_key(|booking| std::cmp::Reverse((booking.date, booking.time)));

        Self { upcoming, history }
    }
}
