use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::{
        reviews::{CreateReviewRequest, ReviewList},
        rooms::UpdateRoomRequest,
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::{Review, Room},
    response::ApiResponse,
    services::{review_service, room_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(get_room).put(update_room).delete(delete_room))
        .route("/{id}/reviews", get(list_reviews).post(add_review))
}

#[utoipa::path(
    get,
    path = "/api/rooms/{id}",
    params(("id" = i64, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room", body = ApiResponse<Room>),
        (status = 404, description = "Room not found")
    ),
    tag = "Rooms"
)]
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Room>>> {
    let resp = room_service::get_room(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/rooms/{id}",
    params(("id" = i64, Path, description = "Room ID")),
    request_body = UpdateRoomRequest,
    responses(
        (status = 200, description = "Room updated", body = ApiResponse<Room>),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Not found or not owned")
    ),
    security(("bearer_auth" = [])),
    tag = "Rooms"
)]
pub async fn update_room(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateRoomRequest>,
) -> AppResult<Json<ApiResponse<Room>>> {
    let resp = room_service::update_room(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/rooms/{id}",
    params(("id" = i64, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room, its bookings and reviews deleted"),
        (status = 404, description = "Not found or not owned")
    ),
    security(("bearer_auth" = [])),
    tag = "Rooms"
)]
pub async fn delete_room(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = room_service::delete_room(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/rooms/{id}/reviews",
    params(("id" = i64, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Reviews, newest first", body = ApiResponse<ReviewList>),
        (status = 404, description = "Room not found")
    ),
    tag = "Reviews"
)]
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<ReviewList>>> {
    let resp = review_service::list_reviews(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/rooms/{id}/reviews",
    params(("id" = i64, Path, description = "Room ID")),
    request_body = CreateReviewRequest,
    responses(
        (status = 200, description = "Review added", body = ApiResponse<Review>),
        (status = 400, description = "Rating out of range"),
        (status = 404, description = "Room not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Reviews"
)]
pub async fn add_review(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<CreateReviewRequest>,
) -> AppResult<Json<ApiResponse<Review>>> {
    let resp = review_service::add_review(&state, &user, id, payload).await?;
    Ok(Json(resp))
}
