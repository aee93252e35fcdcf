use axum::Router;

use crate::state::AppState;

pub mod admin;
pub mod amenities;
pub mod auth;
pub mod bookings;
pub mod doc;
pub mod health;
pub mod params;
pub mod properties;
pub mod rooms;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/properties", properties::router())
        .nest("/amenities", amenities::router())
        .nest("/rooms", rooms::router())
        .nest("/bookings", bookings::router())
        .nest("/admin", admin::router())
}
