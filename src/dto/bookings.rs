use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Booking, BookingSummary, Payment};

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateBookingRequest {
    pub room_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    /// When given, a completed payment for the full stay is recorded with the booking.
    #[validate(length(min = 1, max = 40))]
    pub payment_method: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingList {
    pub items: Vec<BookingSummary>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingWithPayments {
    pub booking: Booking,
    pub payments: Vec<Payment>,
}
