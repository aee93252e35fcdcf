use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Payment, PaymentStatus};

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct RecordPaymentRequest {
    #[validate(length(min = 1, max = 40))]
    pub payment_method: String,
    #[validate(range(min = 1))]
    pub amount: i64,
    /// Defaults to `completed`.
    pub status: Option<PaymentStatus>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaymentList {
    pub items: Vec<Payment>,
}
