use chrono::{NaiveDate, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::{Expr, LockType};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use validator::Validate;

use crate::{
    audit,
    db::OrmConn,
    dto::bookings::{BookingList, BookingWithPayments, CreateBookingRequest},
    entity::{
        bookings::{
            ActiveModel as BookingActive, BookingStatus, Column as BookingCol,
            Entity as Bookings, Model as BookingModel,
        },
        payments::{
            ActiveModel as PaymentActive, Column as PaymentCol, Entity as Payments,
            PaymentStatus,
        },
        rooms::{Column as RoomCol, Entity as Rooms},
        users::Role,
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_guest},
    models::{Booking, BookingSummary, Payment},
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    state::AppState,
};

/// Number of nights between the two dates; check-out must come after check-in.
pub fn stay_nights(check_in: NaiveDate, check_out: NaiveDate) -> AppResult<i64> {
    let nights = (check_out - check_in).num_days();
    if nights <= 0 {
        return Err(AppError::Validation(
            "check_out_date must be after check_in_date".into(),
        ));
    }
    Ok(nights)
}

pub fn total_price(nights: i64, price_per_night: i64) -> AppResult<i64> {
    nights
        .checked_mul(price_per_night)
        .ok_or_else(|| AppError::Validation("stay is too long".into()))
}

/// Fetch a booking visible to the caller: its guest, or any admin.
pub async fn visible_booking<C: ConnectionTrait>(
    conn: &C,
    user: &AuthUser,
    id: i64,
) -> AppResult<BookingModel> {
    let booking = Bookings::find_by_id(id).one(conn).await?;
    match booking {
        Some(b) if b.user_id == user.user_id || user.role == Role::Admin => Ok(b),
        _ => Err(AppError::NotFound),
    }
}

async fn payments_of<C: ConnectionTrait>(conn: &C, booking_id: i64) -> AppResult<Vec<Payment>> {
    let payments = Payments::find()
        .filter(PaymentCol::BookingId.eq(booking_id))
        .order_by_asc(PaymentCol::PaymentDate)
        .all(conn)
        .await?
        .into_iter()
        .map(Payment::from)
        .collect();
    Ok(payments)
}

pub async fn create_booking(
    state: &AppState,
    user: &AuthUser,
    payload: CreateBookingRequest,
) -> AppResult<ApiResponse<BookingWithPayments>> {
    ensure_guest(user)?;
    payload.validate()?;
    let nights = stay_nights(payload.check_in_date, payload.check_out_date)?;

    let txn = state.orm.begin().await?;

    // Row lock serializes concurrent bookings of the same room.
    let room = Rooms::find_by_id(payload.room_id)
        .lock(LockType::Update)
        .one(&txn)
        .await?;
    let room = match room {
        Some(r) => r,
        None => return Err(AppError::NotFound),
    };

    if !room.availability_status {
        return Err(AppError::RoomUnavailable);
    }

    let overlapping = Bookings::find()
        .filter(
            Condition::all()
                .add(BookingCol::RoomId.eq(room.id))
                .add(BookingCol::Status.eq(BookingStatus::Confirmed))
                .add(BookingCol::CheckInDate.lt(payload.check_out_date))
                .add(BookingCol::CheckOutDate.gt(payload.check_in_date)),
        )
        .count(&txn)
        .await?;
    if overlapping > 0 {
        return Err(AppError::RoomUnavailable);
    }

    let total = total_price(nights, room.price_per_night)?;

    let booking = BookingActive {
        id: NotSet,
        user_id: Set(user.user_id),
        room_id: Set(room.id),
        check_in_date: Set(payload.check_in_date),
        check_out_date: Set(payload.check_out_date),
        total_price: Set(total),
        status: Set(BookingStatus::Confirmed),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&txn)
    .await?;

    let mut payments = Vec::new();
    if let Some(method) = payload.payment_method {
        let payment = PaymentActive {
            id: NotSet,
            booking_id: Set(booking.id),
            payment_method: Set(method),
            amount: Set(total),
            status: Set(PaymentStatus::Completed),
            payment_date: NotSet,
            created_at: NotSet,
            updated_at: NotSet,
        }
        .insert(&txn)
        .await?;
        payments.push(Payment::from(payment));
    }

    Rooms::update_many()
        .col_expr(RoomCol::AvailabilityStatus, Expr::value(false))
        .col_expr(RoomCol::UpdatedAt, Expr::value(Utc::now()))
        .filter(RoomCol::Id.eq(room.id))
        .exec(&txn)
        .await?;

    txn.commit().await?;

    tracing::info!(
        booking_id = booking.id,
        room_id = room.id,
        nights,
        total_price = total,
        "booking confirmed"
    );
    audit::record(
        &state.pool,
        Some(user.user_id),
        "booking_create",
        "bookings",
        serde_json::json!({ "booking_id": booking.id, "room_id": room.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Booking confirmed",
        BookingWithPayments {
            booking: Booking::from(booking),
            payments,
        },
        Some(Meta::empty()),
    ))
}

pub async fn list_my_bookings(
    state: &AppState,
    user: &AuthUser,
    pagination: Pagination,
) -> AppResult<ApiResponse<BookingList>> {
    let (page, limit, offset) = pagination.normalize();

    let items = sqlx::query_as::<_, BookingSummary>(
        r#"
        SELECT b.id, b.room_id, r.property_id, b.check_in_date, b.check_out_date,
               b.total_price, b.status, r.room_type, p.address, p.city
        FROM bookings b
        JOIN rooms r ON r.id = b.room_id
        JOIN properties p ON p.id = r.property_id
        WHERE b.user_id = $1
        ORDER BY b.check_in_date DESC, b.id DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(user.user_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(&state.pool)
    .await?;

    let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bookings WHERE user_id = $1")
        .bind(user.user_id)
        .fetch_one(&state.pool)
        .await?;

    Ok(ApiResponse::success(
        "My bookings",
        BookingList { items },
        Some(Meta::new(page, limit, total.0)),
    ))
}

pub async fn get_booking(
    state: &AppState,
    user: &AuthUser,
    id: i64,
) -> AppResult<ApiResponse<BookingWithPayments>> {
    let booking = visible_booking(&state.orm, user, id).await?;
    let payments = payments_of(&state.orm, booking.id).await?;
    Ok(ApiResponse::success(
        "Booking",
        BookingWithPayments {
            booking: Booking::from(booking),
            payments,
        },
        None,
    ))
}

/// Cancel a confirmed booking, refund what was paid and free the room.
pub async fn cancel_booking(
    state: &AppState,
    user: &AuthUser,
    id: i64,
) -> AppResult<ApiResponse<BookingWithPayments>> {
    let txn = state.orm.begin().await?;

    let booking = Bookings::find_by_id(id)
        .lock(LockType::Update)
        .one(&txn)
        .await?;
    let booking = match booking {
        Some(b) if b.user_id == user.user_id => b,
        _ => return Err(AppError::NotFound),
    };

    if booking.status != BookingStatus::Confirmed {
        return Err(AppError::Validation(
            "only confirmed bookings can be cancelled".into(),
        ));
    }

    let room_id = booking.room_id;
    let mut active: BookingActive = booking.into();
    active.status = Set(BookingStatus::Cancelled);
    active.updated_at = Set(Utc::now().into());
    let booking = active.update(&txn).await?;

    Payments::update_many()
        .col_expr(PaymentCol::Status, Expr::value(PaymentStatus::Refunded))
        .col_expr(PaymentCol::UpdatedAt, Expr::value(Utc::now()))
        .filter(
            Condition::all()
                .add(PaymentCol::BookingId.eq(booking.id))
                .add(PaymentCol::Status.is_in([PaymentStatus::Completed, PaymentStatus::Pending])),
        )
        .exec(&txn)
        .await?;

    Rooms::update_many()
        .col_expr(RoomCol::AvailabilityStatus, Expr::value(true))
        .col_expr(RoomCol::UpdatedAt, Expr::value(Utc::now()))
        .filter(RoomCol::Id.eq(room_id))
        .exec(&txn)
        .await?;

    let payments = payments_of(&txn, booking.id).await?;
    txn.commit().await?;

    tracing::info!(booking_id = booking.id, room_id, "booking cancelled");
    audit::record(
        &state.pool,
        Some(user.user_id),
        "booking_cancel",
        "bookings",
        serde_json::json!({ "booking_id": booking.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Booking has been cancelled",
        BookingWithPayments {
            booking: Booking::from(booking),
            payments,
        },
        Some(Meta::empty()),
    ))
}

/// Mark confirmed bookings that checked out on or before `today` as completed
/// and make their rooms bookable again. Returns how many bookings changed.
pub async fn complete_expired_bookings(orm: &OrmConn, today: NaiveDate) -> AppResult<u64> {
    let txn = orm.begin().await?;

    let expired = Bookings::find()
        .filter(
            Condition::all()
                .add(BookingCol::Status.eq(BookingStatus::Confirmed))
                .add(BookingCol::CheckOutDate.lte(today)),
        )
        .lock(LockType::Update)
        .all(&txn)
        .await?;

    if expired.is_empty() {
        txn.commit().await?;
        return Ok(0);
    }

    let booking_ids: Vec<i64> = expired.iter().map(|b| b.id).collect();
    let mut room_ids: Vec<i64> = expired.iter().map(|b| b.room_id).collect();
    room_ids.sort_unstable();
    room_ids.dedup();

    let result = Bookings::update_many()
        .col_expr(BookingCol::Status, Expr::value(BookingStatus::Completed))
        .col_expr(BookingCol::UpdatedAt, Expr::value(Utc::now()))
        .filter(BookingCol::Id.is_in(booking_ids))
        .exec(&txn)
        .await?;

    Rooms::update_many()
        .col_expr(RoomCol::AvailabilityStatus, Expr::value(true))
        .col_expr(RoomCol::UpdatedAt, Expr::value(Utc::now()))
        .filter(RoomCol::Id.is_in(room_ids))
        .exec(&txn)
        .await?;

    txn.commit().await?;

    tracing::info!(completed = result.rows_affected, "expired bookings completed");
    Ok(result.rows_affected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn two_night_stay() {
        let nights = stay_nights(date(2024, 1, 1), date(2024, 1, 3)).expect("nights");
        assert_eq!(nights, 2);
        assert_eq!(total_price(nights, 500).expect("price"), 1000);
    }

    #[test]
    fn same_day_or_reversed_dates_are_rejected() {
        assert!(matches!(
            stay_nights(date(2024, 1, 3), date(2024, 1, 3)),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            stay_nights(date(2024, 1, 3), date(2024, 1, 1)),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn overflowing_price_is_rejected() {
        assert!(total_price(i64::MAX, 2).is_err());
    }
}
