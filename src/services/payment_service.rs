use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use validator::Validate;

use crate::{
    audit,
    dto::payments::{PaymentList, RecordPaymentRequest},
    entity::payments::{ActiveModel as PaymentActive, Column as PaymentCol, Entity as Payments},
    error::AppResult,
    middleware::auth::AuthUser,
    models::{Payment, PaymentStatus},
    response::{ApiResponse, Meta},
    services::booking_service::visible_booking,
    state::AppState,
};

/// Attach a payment to an existing booking. No gateway is involved; the row
/// records what the caller reports.
pub async fn record_payment(
    state: &AppState,
    user: &AuthUser,
    booking_id: i64,
    payload: RecordPaymentRequest,
) -> AppResult<ApiResponse<Payment>> {
    payload.validate()?;
    let booking = visible_booking(&state.orm, user, booking_id).await?;

    let payment = PaymentActive {
        id: NotSet,
        booking_id: Set(booking.id),
        payment_method: Set(payload.payment_method),
        amount: Set(payload.amount),
        status: Set(payload.status.unwrap_or(PaymentStatus::Completed)),
        payment_date: NotSet,
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(payment_id = payment.id, booking_id, amount = payment.amount, "payment recorded");
    audit::record(
        &state.pool,
        Some(user.user_id),
        "payment_record",
        "payments",
        serde_json::json!({ "payment_id": payment.id, "booking_id": booking_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Payment recorded",
        Payment::from(payment),
        Some(Meta::empty()),
    ))
}

pub async fn list_payments(
    state: &AppState,
    user: &AuthUser,
    booking_id: i64,
) -> AppResult<ApiResponse<PaymentList>> {
    let booking = visible_booking(&state.orm, user, booking_id).await?;

    let items: Vec<Payment> = Payments::find()
        .filter(PaymentCol::BookingId.eq(booking.id))
        .order_by_asc(PaymentCol::PaymentDate)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Payment::from)
        .collect();

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Payments",
        PaymentList { items },
        Some(Meta::unpaged(total)),
    ))
}
