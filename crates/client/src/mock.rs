use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;
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

use crate::source::BookingSource;

// Mock data source for testing consumers of BookingSource
mock! {
    pub Source {}

    #[async_trait]
    impl BookingSource for Source {
        async fn categories(&self) -> BookingResult<Vec<Category>>;

        async fn businesses(&self, category: Option<Category>) -> BookingResult<Vec<Business>>;

        async fn business(&self, id: Uuid) -> BookingResult<Business>;

        async fn pending_businesses(&self) -> BookingResult<Vec<Business>>;

        async fn set_business_status(
            &self,
            id: Uuid,
            status: BusinessStatus,
        ) -> BookingResult<Business>;

        async fn bookings_by_user(&self, email: &str) -> BookingResult<Vec<Booking>>;

        async fn booked_times(
            &self,
            business_id: Uuid,
            date: NaiveDate,
        ) -> BookingResult<Vec<String>>;

        async fn create_booking(&self, request: CreateBookingRequest) -> BookingResult<Booking>;

        async fn current_user(&self, token: &str) -> BookingResult<User>;
    }
}
