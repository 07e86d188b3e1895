//! Value objects computed from entities for listings and dashboards.

pub mod booking;
pub mod dashboard;
pub mod property_filter;

pub use booking::BookingWindow;
pub use dashboard::{AdminStats, OwnerStats};
pub use property_filter::PropertyFilter;
