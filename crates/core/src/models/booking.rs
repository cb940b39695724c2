use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::time_of_day::TimeOfDay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Booked,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub business_id: Uuid,
    pub user_email: String,
    pub user_name: String,
    pub date: NaiveDate,
    pub time: TimeOfDay,
    #[serde(default)]
    pub note: Option<String>,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub business_id: Uuid,
    pub user_email: String,
    pub user_name: String,
    pub date: NaiveDate,
    pub time: TimeOfDay,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedTimesResponse {
    pub business_id: Uuid,
    pub date: NaiveDate,
    pub times: Vec<String>,
}
