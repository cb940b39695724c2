use async_trait::async_trait;
use chrono::NaiveDate;
use slotbook_core::{
    BookingResult,
    models::{
        booking::{Booking, CreateBookingRequest},
        business::{Business, BusinessStatus},
        category::Category,
        user::User,
    },
};
use uuid::Uuid;

/// Where the client gets marketplace data from.
///
/// Implemented over HTTP by [`crate::http::HttpSource`], wrapped with caching
/// by [`crate::cache::CachedSource`], and mocked in tests by
/// [`crate::mock::MockSource`].
#[async_trait]
pub trait BookingSource: Send + Sync {
    async fn categories(&self) -> BookingResult<Vec<Category>>;

    /// Approved businesses, optionally limited to one category.
    async fn businesses(&self, category: Option<Category>) -> BookingResult<Vec<Business>>;

    async fn business(&self, id: Uuid) -> BookingResult<Business>;

    async fn pending_businesses(&self) -> BookingResult<Vec<Business>>;

    async fn set_business_status(
        &self,
        id: Uuid,
        status: BusinessStatus,
    ) -> BookingResult<Business>;

    async fn bookings_by_user(&self, email: &str) -> BookingResult<Vec<Booking>>;

    /// Labels of the slots already reserved at `business_id` on `date`.
    async fn booked_times(&self, business_id: Uuid, date: NaiveDate) -> BookingResult<Vec<String>>;

    /// Same as [`booked_times`](Self::booked_times), but never answered from
    /// a cache. Used when a page needs to see bookings made by others.
    async fn reload_booked_times(
        &self,
        business_id: Uuid,
        date: NaiveDate,
    ) -> BookingResult<Vec<String>> {
        self.booked_times(business_id, date).await
    }

    async fn create_booking(&self, request: CreateBookingRequest) -> BookingResult<Booking>;

    async fn current_user(&self, token: &str) -> BookingResult<User>;
}
