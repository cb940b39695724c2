use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::category::Category;
use crate::models::slot::{BookingWindow, SlotDuration};
use crate::models::time_of_day::TimeOfDay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub open: TimeOfDay,
    pub close: TimeOfDay,
    pub slot_minutes: SlotDuration,
}

impl OpeningHours {
    pub fn window(&self) -> BookingWindow {
        BookingWindow::new(self.open, self.close)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub about: String,
    pub address: String,
    pub contact_person: String,
    pub email: String,
    pub category: Category,
    #[serde(default)]
    pub images: Vec<String>,
    /// Missing when the business has not configured working hours yet.
    #[serde(default)]
    pub opening: Option<OpeningHours>,
    pub status: BusinessStatus,
}

impl Business {
    pub fn is_listed(&self) -> bool {
        self.status == BusinessStatus::Approved
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBusinessStatusRequest {
    pub status: BusinessStatus,
}
