mod common;

use chrono::NaiveDate;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use staynngo_api::{
    dto::{
        bookings::CreateBookingRequest, payments::RecordPaymentRequest, rooms::UpdateRoomRequest,
    },
    entity::{
        audit_logs::{Column as AuditCol, Entity as AuditLogs},
        bookings::Entity as Bookings,
        rooms::Entity as Rooms,
        users::Role,
    },
    error::AppError,
    middleware::auth::AuthUser,
    models::{BookingStatus, PaymentStatus},
    routes::params::Pagination,
    services::{booking_service, payment_service, room_service},
    state::AppState,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn request(room_id: i64, check_in: NaiveDate, check_out: NaiveDate) -> CreateBookingRequest {
    CreateBookingRequest {
        room_id,
        check_in_date: check_in,
        check_out_date: check_out,
        payment_method: Some("card".into()),
    }
}

// Guest books a room, a second guest is turned away, the first cancels and gets refunded.
#[tokio::test]
async fn book_conflict_and_cancel_flow() -> anyhow::Result<()> {
    let Some(state) = common::setup_state().await? else {
        return Ok(());
    };

    let owner = common::create_user(&state, Role::Admin).await?;
    let guest = common::create_user(&state, Role::User).await?;
    let other_guest = common::create_user(&state, Role::User).await?;

    let property = common::create_property(&state, &owner, "Pune").await?;
    let room = common::create_room(&state, &owner, property.id, 500).await?;

    let created = booking_service::create_booking(
        &state,
        &guest,
        request(room.id, date(2099, 1, 1), date(2099, 1, 3)),
    )
    .await?
    .data
    .expect("booking");
    assert_eq!(created.booking.total_price, 1000);
    assert_eq!(created.booking.status, BookingStatus::Confirmed);
    assert_eq!(created.payments.len(), 1);
    assert_eq!(created.payments[0].amount, 1000);

    let stored_room = Rooms::find_by_id(room.id).one(&state.orm).await?.expect("room");
    assert!(!stored_room.availability_status);

    let audited = AuditLogs::find()
        .filter(AuditCol::UserId.eq(guest.user_id))
        .filter(AuditCol::Action.eq("booking_create"))
        .count(&state.orm)
        .await?;
    assert_eq!(audited, 1);

    let conflict = booking_service::create_booking(
        &state,
        &other_guest,
        request(room.id, date(2099, 1, 2), date(2099, 1, 4)),
    )
    .await;
    assert!(matches!(conflict, Err(AppError::RoomUnavailable)));

    let mine = booking_service::list_my_bookings(&state, &guest, Pagination::default())
        .await?
        .data
        .expect("bookings");
    assert_eq!(mine.items.len(), 1);
    assert_eq!(mine.items[0].property_id, property.id);

    // Someone else's booking is invisible.
    let hidden = booking_service::get_booking(&state, &other_guest, created.booking.id).await;
    assert!(matches!(hidden, Err(AppError::NotFound)));

    let cancelled = booking_service::cancel_booking(&state, &guest, created.booking.id)
        .await?
        .data
        .expect("cancelled");
    assert_eq!(cancelled.booking.status, BookingStatus::Cancelled);
    assert!(
        cancelled
            .payments
            .iter()
            .all(|p| p.status == PaymentStatus::Refunded)
    );

    let stored_room = Rooms::find_by_id(room.id).one(&state.orm).await?.expect("room");
    assert!(stored_room.availability_status);

    let again = booking_service::cancel_booking(&state, &guest, created.booking.id).await;
    assert!(matches!(again, Err(AppError::Validation(_))));

    // Freed room can be booked again.
    booking_service::create_booking(
        &state,
        &other_guest,
        request(room.id, date(2099, 1, 2), date(2099, 1, 4)),
    )
    .await?;

    Ok(())
}

async fn reopen(state: &AppState, owner: &AuthUser, room_id: i64) -> anyhow::Result<()> {
    room_service::update_room(
        state,
        owner,
        room_id,
        UpdateRoomRequest {
            room_type: None,
            capacity: None,
            price_per_night: None,
            availability_status: Some(true),
        },
    )
    .await?;
    Ok(())
}

// With the availability flag forced back on, overlapping stays are still refused
// while a stay starting on the previous check-out day is accepted.
#[tokio::test]
async fn overlapping_stays_are_refused_even_when_room_is_flagged_available() -> anyhow::Result<()> {
    let Some(state) = common::setup_state().await? else {
        return Ok(());
    };

    let owner = common::create_user(&state, Role::Admin).await?;
    let guest = common::create_user(&state, Role::User).await?;
    let other_guest = common::create_user(&state, Role::User).await?;
    let property = common::create_property(&state, &owner, "Nashik").await?;
    let room = common::create_room(&state, &owner, property.id, 400).await?;

    booking_service::create_booking(
        &state,
        &guest,
        request(room.id, date(2098, 5, 10), date(2098, 5, 15)),
    )
    .await?;
    reopen(&state, &owner, room.id).await?;

    for (check_in, check_out) in [
        (date(2098, 5, 12), date(2098, 5, 13)),
        (date(2098, 5, 8), date(2098, 5, 11)),
        (date(2098, 5, 14), date(2098, 5, 20)),
        (date(2098, 5, 1), date(2098, 5, 30)),
    ] {
        let overlap =
            booking_service::create_booking(&state, &other_guest, request(room.id, check_in, check_out))
                .await;
        assert!(
            matches!(overlap, Err(AppError::RoomUnavailable)),
            "{check_in}..{check_out} should conflict"
        );
    }

    let back_to_back = booking_service::create_booking(
        &state,
        &other_guest,
        request(room.id, date(2098, 5, 15), date(2098, 5, 17)),
    )
    .await?
    .data
    .expect("booking");
    assert_eq!(back_to_back.booking.total_price, 800);

    reopen(&state, &owner, room.id).await?;
    let ends_on_check_in = booking_service::create_booking(
        &state,
        &other_guest,
        request(room.id, date(2098, 5, 7), date(2098, 5, 10)),
    )
    .await?;
    assert!(ends_on_check_in.data.is_some());

    Ok(())
}

#[tokio::test]
async fn invalid_booking_requests_are_rejected() -> anyhow::Result<()> {
    let Some(state) = common::setup_state().await? else {
        return Ok(());
    };

    let owner = common::create_user(&state, Role::Admin).await?;
    let guest = common::create_user(&state, Role::User).await?;
    let property = common::create_property(&state, &owner, "Goa").await?;
    let room = common::create_room(&state, &owner, property.id, 800).await?;

    let reversed = booking_service::create_booking(
        &state,
        &guest,
        request(room.id, date(2099, 2, 5), date(2099, 2, 5)),
    )
    .await;
    assert!(matches!(reversed, Err(AppError::Validation(_))));

    let missing_room = booking_service::create_booking(
        &state,
        &guest,
        request(i64::MAX, date(2099, 2, 1), date(2099, 2, 2)),
    )
    .await;
    assert!(matches!(missing_room, Err(AppError::NotFound)));

    let by_admin = booking_service::create_booking(
        &state,
        &owner,
        request(room.id, date(2099, 2, 1), date(2099, 2, 2)),
    )
    .await;
    assert!(matches!(by_admin, Err(AppError::Forbidden)));

    let stored_room = Rooms::find_by_id(room.id).one(&state.orm).await?.expect("room");
    assert!(stored_room.availability_status);

    Ok(())
}

#[tokio::test]
async fn payments_attach_to_existing_bookings_only() -> anyhow::Result<()> {
    let Some(state) = common::setup_state().await? else {
        return Ok(());
    };

    let owner = common::create_user(&state, Role::Admin).await?;
    let guest = common::create_user(&state, Role::User).await?;
    let property = common::create_property(&state, &owner, "Jaipur").await?;
    let room = common::create_room(&state, &owner, property.id, 1200).await?;

    let missing = payment_service::record_payment(
        &state,
        &guest,
        i64::MAX,
        RecordPaymentRequest {
            payment_method: "upi".into(),
            amount: 100,
            status: None,
        },
    )
    .await;
    assert!(matches!(missing, Err(AppError::NotFound)));

    let booking = booking_service::create_booking(
        &state,
        &guest,
        CreateBookingRequest {
            room_id: room.id,
            check_in_date: date(2099, 3, 1),
            check_out_date: date(2099, 3, 2),
            payment_method: None,
        },
    )
    .await?
    .data
    .expect("booking")
    .booking;

    let payment = payment_service::record_payment(
        &state,
        &guest,
        booking.id,
        RecordPaymentRequest {
            payment_method: "upi".into(),
            amount: 1200,
            status: None,
        },
    )
    .await?
    .data
    .expect("payment");
    assert_eq!(payment.status, PaymentStatus::Completed);

    let payments = payment_service::list_payments(&state, &owner, booking.id)
        .await?
        .data
        .expect("payments");
    assert_eq!(payments.items.len(), 1);

    Ok(())
}

#[tokio::test]
async fn sweep_completes_past_stays_and_frees_rooms() -> anyhow::Result<()> {
    let Some(state) = common::setup_state().await? else {
        return Ok(());
    };

    let owner = common::create_user(&state, Role::Admin).await?;
    let guest = common::create_user(&state, Role::User).await?;
    let property = common::create_property(&state, &owner, "Mysuru").await?;
    let past_room = common::create_room(&state, &owner, property.id, 500).await?;
    let future_room = common::create_room(&state, &owner, property.id, 500).await?;

    let past = booking_service::create_booking(
        &state,
        &guest,
        request(past_room.id, date(2024, 1, 1), date(2024, 1, 3)),
    )
    .await?
    .data
    .expect("booking")
    .booking;
    assert_eq!(past.total_price, 1000);

    let future = booking_service::create_booking(
        &state,
        &guest,
        request(future_room.id, date(2099, 6, 1), date(2099, 6, 3)),
    )
    .await?
    .data
    .expect("booking")
    .booking;

    let completed = booking_service::complete_expired_bookings(&state.orm, date(2024, 1, 10)).await?;
    assert!(completed >= 1);

    let past = Bookings::find_by_id(past.id).one(&state.orm).await?.expect("booking");
    assert_eq!(past.status, BookingStatus::Completed);
    let future = Bookings::find_by_id(future.id).one(&state.orm).await?.expect("booking");
    assert_eq!(future.status, BookingStatus::Confirmed);

    let past_room = Rooms::find_by_id(past_room.id).one(&state.orm).await?.expect("room");
    assert!(past_room.availability_status);
    let future_room = Rooms::find_by_id(future_room.id).one(&state.orm).await?.expect("room");
    assert!(!future_room.availability_status);

    Ok(())
}
