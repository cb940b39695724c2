#![allow(dead_code)]

use chrono::NaiveDate;
use fake::{
    Fake,
    faker::{internet::en::SafeEmail, name::en::Name},
};
use slotbook_core::models::{
    booking::{Booking, BookingStatus, CreateBookingRequest},
    business::{Business, BusinessStatus, OpeningHours},
    category::Category,
    user::{Role, User},
};
use slotbook_core::SlotDuration;
use uuid::Uuid;

pub fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, day).expect("valid October date")
}

pub fn opening(open: &str, close: &str, slot_minutes: i64) -> OpeningHours {
    OpeningHours {
        open: open.parse().unwrap(),
        close: close.parse().unwrap(),
        slot_minutes: SlotDuration::new(slot_minutes).unwrap(),
    }
}

pub fn business(opening: Option<OpeningHours>) -> Business {
    Business {
        id: Uuid::new_v4(),
        name: "Fix-It Plumbing".to_string(),
        about: "Leaks, pipes and boilers".to_string(),
        address: "4 Water Lane".to_string(),
        contact_person: Name().fake(),
        email: SafeEmail().fake(),
        category: Category::Plumbing,
        images: vec!["/img/fixit.jpg".to_string()],
        opening,
        status: BusinessStatus::Approved,
    }
}

pub fn user(role: Role) -> User {
    User {
        id: Uuid::new_v4(),
        name: Name().fake(),
        email: SafeEmail().fake(),
        role,
    }
}

pub fn booking(business_id: Uuid, email: &str, day: NaiveDate, time: &str, status: BookingStatus) -> Booking {
    Booking {
        id: Uuid::new_v4(),
        business_id,
        user_email: email.to_string(),
        user_name: "Test User".to_string(),
        date: day,
        time: time.parse().unwrap(),
        note: None,
        status,
    }
}

pub fn booking_from(request: CreateBookingRequest) -> Booking {
    Booking {
        id: Uuid::new_v4(),
        business_id: request.business_id,
        user_email: request.user_email,
        user_name: request.user_name,
        date: request.date,
        time: request.time,
        note: request.note,
        status: BookingStatus::Booked,
    }
}
