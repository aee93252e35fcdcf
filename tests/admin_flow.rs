mod common;

use chrono::NaiveDate;
use staynngo_api::{
    dto::{analytics::AnalyticsSummary, bookings::CreateBookingRequest},
    entity::users::Role,
    error::AppError,
    services::{admin_service, booking_service},
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn month_count(summary: &AnalyticsSummary, month: &str) -> i64 {
    summary
        .monthly_trend
        .iter()
        .find(|m| m.month == month)
        .map(|m| m.count)
        .unwrap_or(0)
}

#[tokio::test]
async fn analytics_counts_bookings_per_month() -> anyhow::Result<()> {
    let Some(state) = common::setup_state().await? else {
        return Ok(());
    };

    let owner = common::create_user(&state, Role::Admin).await?;
    let guest = common::create_user(&state, Role::User).await?;
    let property = common::create_property(&state, &owner, "Udaipur").await?;
    let march_a = common::create_room(&state, &owner, property.id, 300).await?;
    let march_b = common::create_room(&state, &owner, property.id, 300).await?;
    let april = common::create_room(&state, &owner, property.id, 300).await?;

    let denied = admin_service::analytics(&state, &guest).await;
    assert!(matches!(denied, Err(AppError::Forbidden)));

    let before = admin_service::summarize(&state.pool).await?;

    let stays = [
        (march_a.id, date(2097, 3, 1), date(2097, 3, 3)),
        (march_b.id, date(2097, 3, 20), date(2097, 3, 21)),
        (april.id, date(2097, 4, 2), date(2097, 4, 4)),
    ];
    for (room_id, check_in, check_out) in stays {
        booking_service::create_booking(
            &state,
            &guest,
            CreateBookingRequest {
                room_id,
                check_in_date: check_in,
                check_out_date: check_out,
                payment_method: Some("card".into()),
            },
        )
        .await?;
    }

    let after = admin_service::analytics(&state, &owner)
        .await?
        .data
        .expect("summary");

    assert_eq!(month_count(&after, "2097-03") - month_count(&before, "2097-03"), 2);
    assert_eq!(month_count(&after, "2097-04") - month_count(&before, "2097-04"), 1);
    assert!(after.bookings_count - before.bookings_count >= 3);
    // 600 + 300 + 600 paid in full at booking time
    assert!(after.total_transactions - before.total_transactions >= 1500);
    assert!(after.user_count >= 1);

    let months: Vec<&str> = after.monthly_trend.iter().map(|m| m.month.as_str()).collect();
    let mut sorted = months.clone();
    sorted.sort_unstable();
    assert_eq!(months, sorted);

    Ok(())
}
