use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::analytics::{AnalyticsSummary, SweepResult},
    error::AppResult,
    middleware::auth::AuthUser,
    response::ApiResponse,
    services::admin_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/analytics", get(analytics))
        .route("/maintenance/complete-expired", post(complete_expired))
}

#[utoipa::path(
    get,
    path = "/api/admin/analytics",
    responses(
        (status = 200, description = "Marketplace totals and monthly booking trend", body = ApiResponse<AnalyticsSummary>),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn analytics(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<AnalyticsSummary>>> {
    let resp = admin_service::analytics(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/maintenance/complete-expired",
    responses(
        (status = 200, description = "Past bookings completed and rooms released", body = ApiResponse<SweepResult>),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn complete_expired(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<SweepResult>>> {
    let resp = admin_service::complete_expired(&state, &user).await?;
    Ok(Json(resp))
}
