pub mod booking;
pub mod business;
pub mod category;
pub mod slot;
pub mod time_of_day;
pub mod user;
