//! # Admin Review
//!
//! Businesses register in the `Pending` state and only show up in listings
//! once an administrator approves them. Every operation here checks the
//! session against [`Route::Admin`] before reaching the source.

use slotbook_core::{
    BookingResult,
    models::business::{Business, BusinessStatus},
};
use tracing::info;
use uuid::Uuid;

use crate::{
    router::{Route, authorize},
    session::Session,
    source::BookingSource,
};

pub struct AdminReview<'a, S: ?Sized> {
    source: &'a S,
}

impl<'a, S: BookingSource + ?Sized> AdminReview<'a, S> {
    /// Fails unless `session` belongs to an administrator.
    pub fn open(source: &'a S, session: &Session) -> BookingResult<Self> {
        authorize(&Route::Admin, session)?;
        Ok(Self { source })
    }

    /// Businesses waiting for a decision.
    pub async fn pending(&self) -> BookingResult<Vec<Business>> {
        self.source.pending_businesses().await
    }

    pub async fn approve(&self, id: Uuid) -> BookingResult<Business> {
        self.decide(id, BusinessStatus::Approved).await
    }

    pub async fn reject(&self, id: Uuid) -> BookingResult<Business> {
        self.decide(id, BusinessStatus::Rejected).await
    }

    async fn decide(&self, id: Uuid, status: BusinessStatus) -> BookingResult<Business> {
        let business = self.source.set_business_status(id, status).await?;
        info!(business = %business.name, ?status, "business reviewed");
        Ok(business)
    }
}
