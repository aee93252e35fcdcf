use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};

use crate::{
    dto::{
        bookings::{BookingList, BookingWithPayments, CreateBookingRequest},
        payments::{PaymentList, RecordPaymentRequest},
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::Payment,
    response::ApiResponse,
    routes::params::Pagination,
    services::{booking_service, payment_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_my_bookings).post(create_booking))
        .route("/{id}", get(get_booking))
        .route("/{id}/cancel", post(cancel_booking))
        .route("/{id}/payments", get(list_payments).post(record_payment))
}

#[utoipa::path(
    get,
    path = "/api/bookings",
    params(Pagination),
    responses(
        (status = 200, description = "Bookings of the caller", body = ApiResponse<BookingList>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Bookings"
)]
pub async fn list_my_bookings(
    State(state): State<AppState>,
    user: AuthUser,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<BookingList>>> {
    let resp = booking_service::list_my_bookings(&state, &user, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 200, description = "Booking confirmed", body = ApiResponse<BookingWithPayments>),
        (status = 400, description = "Check-out not after check-in"),
        (status = 404, description = "Room not found"),
        (status = 409, description = "Room unavailable")
    ),
    security(("bearer_auth" = [])),
    tag = "Bookings"
)]
pub async fn create_booking(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateBookingRequest>,
) -> AppResult<Json<ApiResponse<BookingWithPayments>>> {
    let resp = booking_service::create_booking(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    params(("id" = i64, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking with payments", body = ApiResponse<BookingWithPayments>),
        (status = 404, description = "Booking not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Bookings"
)]
pub async fn get_booking(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<BookingWithPayments>>> {
    let resp = booking_service::get_booking(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/bookings/{id}/cancel",
    params(("id" = i64, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking cancelled", body = ApiResponse<BookingWithPayments>),
        (status = 400, description = "Booking is not confirmed"),
        (status = 404, description = "Booking not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Bookings"
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<BookingWithPayments>>> {
    let resp = booking_service::cancel_booking(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/bookings/{id}/payments",
    params(("id" = i64, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Payments of the booking", body = ApiResponse<PaymentList>),
        (status = 404, description = "Booking not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
pub async fn list_payments(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<PaymentList>>> {
    let resp = payment_service::list_payments(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/bookings/{id}/payments",
    params(("id" = i64, Path, description = "Booking ID")),
    request_body = RecordPaymentRequest,
    responses(
        (status = 200, description = "Payment recorded", body = ApiResponse<Payment>),
        (status = 400, description = "Invalid amount or method"),
        (status = 404, description = "Booking not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
pub async fn record_payment(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<RecordPaymentRequest>,
) -> AppResult<Json<ApiResponse<Payment>>> {
    let resp = payment_service::record_payment(&state, &user, id, payload).await?;
    Ok(Json(resp))
}
