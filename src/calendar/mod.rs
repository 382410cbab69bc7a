pub mod client;
pub mod token;

pub use client::CalendarClient;
