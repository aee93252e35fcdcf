use chrono::Utc;

use crate::{
    audit,
    db::DbPool,
    dto::analytics::{AnalyticsSummary, SweepResult},
    error::AppResult,
    middleware::auth::{AuthUser, ensure_admin},
    models::MonthlyBookings,
    response::{ApiResponse, Meta},
    services::booking_service,
    state::AppState,
};

pub async fn summarize(pool: &DbPool) -> AppResult<AnalyticsSummary> {
    let total_transactions: (i64,) = sqlx::query_as(
        "SELECT COALESCE(SUM(amount), 0)::BIGINT FROM payments WHERE status = 'completed'",
    )
    .fetch_one(pool)
    .await?;

    let user_count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE role = 'user'")
        .fetch_one(pool)
        .await?;

    let bookings_count: (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM bookings WHERE status IN ('confirmed', 'completed')",
    )
    .fetch_one(pool)
    .await?;

    let monthly_trend = sqlx::query_as::<_, MonthlyBookings>(
        r#"
        SELECT TO_CHAR(check_in_date, 'YYYY-MM') AS month, COUNT(*) AS count
        FROM bookings
        WHERE status IN ('confirmed', 'completed')
        GROUP BY month
        ORDER BY month ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(AnalyticsSummary {
        total_transactions: total_transactions.0,
        user_count: user_count.0,
        bookings_count: bookings_count.0,
        monthly_trend,
    })
}

pub async fn analytics(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<AnalyticsSummary>> {
    ensure_admin(user)?;
    let summary = summarize(&state.pool).await?;
    Ok(ApiResponse::success("Analytics", summary, Some(Meta::empty())))
}

/// Run the expired-booking sweep on demand.
pub async fn complete_expired(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<SweepResult>> {
    ensure_admin(user)?;
    let completed =
        booking_service::complete_expired_bookings(&state.orm, Utc::now().date_naive()).await?;

    audit::record(
        &state.pool,
        Some(user.user_id),
        "bookings_sweep",
        "bookings",
        serde_json::json!({ "completed": completed }),
    )
    .await;

    Ok(ApiResponse::success(
        "Expired bookings completed",
        SweepResult { completed },
        Some(Meta::empty()),
    ))
}
