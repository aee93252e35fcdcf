use axum::{
    Json, Router,
    extract::{Path, State},
    routing::put,
};

use crate::{
    dto::amenities::UpdateAmenityRequest,
    error::AppResult,
    middleware::auth::AuthUser,
    models::Amenity,
    response::ApiResponse,
    services::amenity_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", put(update_amenity).delete(delete_amenity))
}

#[utoipa::path(
    put,
    path = "/api/amenities/{id}",
    params(("id" = i64, Path, description = "Amenity ID")),
    request_body = UpdateAmenityRequest,
    responses(
        (status = 200, description = "Amenity updated", body = ApiResponse<Amenity>),
        (status = 404, description = "Not found or not owned")
    ),
    security(("bearer_auth" = [])),
    tag = "Amenities"
)]
pub async fn update_amenity(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateAmenityRequest>,
) -> AppResult<Json<ApiResponse<Amenity>>> {
    let resp = amenity_service::update_amenity(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/amenities/{id}",
    params(("id" = i64, Path, description = "Amenity ID")),
    responses(
        (status = 200, description = "Amenity deleted"),
        (status = 404, description = "Not found or not owned")
    ),
    security(("bearer_auth" = [])),
    tag = "Amenities"
)]
pub async fn delete_amenity(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = amenity_service::delete_amenity(&state, &user, id).await?;
    Ok(Json(resp))
}
