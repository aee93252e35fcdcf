pub mod amenities;
pub mod analytics;
pub mod auth;
pub mod bookings;
pub mod payments;
pub mod properties;
pub mod reviews;
pub mod rooms;
