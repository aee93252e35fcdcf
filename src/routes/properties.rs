use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::{
        amenities::{AmenityList, CreateAmenityRequest},
        properties::{
            CreatePropertyRequest, PropertyDetails, PropertyList, RoomStatusReport,
            UpdatePropertyRequest,
        },
        rooms::{CreateRoomRequest, RoomList},
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::{Amenity, Property, Room},
    response::ApiResponse,
    routes::params::{Pagination, PropertyQuery},
    services::{amenity_service, property_service, room_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_properties).post(create_property))
        .route("/mine", get(list_my_properties))
        .route(
            "/{id}",
            get(get_property).put(update_property).delete(delete_property),
        )
        .route("/{id}/amenities", get(list_amenities).post(add_amenity))
        .route("/{id}/rooms", get(list_rooms).post(add_room))
        .route("/{id}/room-status", get(room_status))
}

#[utoipa::path(
    get,
    path = "/api/properties",
    params(PropertyQuery),
    responses(
        (status = 200, description = "Properties matching the filters", body = ApiResponse<PropertyList>),
        (status = 400, description = "Invalid filter")
    ),
    tag = "Properties"
)]
pub async fn list_properties(
    State(state): State<AppState>,
    Query(query): Query<PropertyQuery>,
) -> AppResult<Json<ApiResponse<PropertyList>>> {
    let resp = property_service::list_properties(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/properties/mine",
    params(Pagination),
    responses(
        (status = 200, description = "Properties owned by the caller", body = ApiResponse<PropertyList>),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "Properties"
)]
pub async fn list_my_properties(
    State(state): State<AppState>,
    user: AuthUser,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<PropertyList>>> {
    let resp = property_service::list_owned_properties(&state, &user, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/properties",
    request_body = CreatePropertyRequest,
    responses(
        (status = 200, description = "Create property", body = ApiResponse<Property>),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "Properties"
)]
pub async fn create_property(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreatePropertyRequest>,
) -> AppResult<Json<ApiResponse<Property>>> {
    let resp = property_service::create_property(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/properties/{id}",
    params(("id" = i64, Path, description = "Property ID")),
    responses(
        (status = 200, description = "Property with amenities, rooms and reviews", body = ApiResponse<PropertyDetails>),
        (status = 404, description = "Property not found")
    ),
    tag = "Properties"
)]
pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<PropertyDetails>>> {
    let resp = property_service::get_property_details(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/properties/{id}",
    params(("id" = i64, Path, description = "Property ID")),
    request_body = UpdatePropertyRequest,
    responses(
        (status = 200, description = "Updated property", body = ApiResponse<Property>),
        (status = 404, description = "Not found or not owned")
    ),
    security(("bearer_auth" = [])),
    tag = "Properties"
)]
pub async fn update_property(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePropertyRequest>,
) -> AppResult<Json<ApiResponse<Property>>> {
    let resp = property_service::update_property(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/properties/{id}",
    params(("id" = i64, Path, description = "Property ID")),
    responses(
        (status = 200, description = "Property and its rooms and amenities deleted"),
        (status = 404, description = "Not found or not owned")
    ),
    security(("bearer_auth" = [])),
    tag = "Properties"
)]
pub async fn delete_property(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = property_service::delete_property(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/properties/{id}/amenities",
    params(("id" = i64, Path, description = "Property ID")),
    responses(
        (status = 200, description = "Amenities of the property", body = ApiResponse<AmenityList>),
        (status = 404, description = "Property not found")
    ),
    tag = "Amenities"
)]
pub async fn list_amenities(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<AmenityList>>> {
    let resp = amenity_service::list_amenities(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/properties/{id}/amenities",
    params(("id" = i64, Path, description = "Property ID")),
    request_body = CreateAmenityRequest,
    responses(
        (status = 200, description = "Amenity added", body = ApiResponse<Amenity>),
        (status = 404, description = "Not found or not owned")
    ),
    security(("bearer_auth" = [])),
    tag = "Amenities"
)]
pub async fn add_amenity(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<CreateAmenityRequest>,
) -> AppResult<Json<ApiResponse<Amenity>>> {
    let resp = amenity_service::add_amenity(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/properties/{id}/rooms",
    params(("id" = i64, Path, description = "Property ID")),
    responses(
        (status = 200, description = "Rooms of the property", body = ApiResponse<RoomList>),
        (status = 404, description = "Property not found")
    ),
    tag = "Rooms"
)]
pub async fn list_rooms(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<RoomList>>> {
    let resp = room_service::list_rooms(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/properties/{id}/rooms",
    params(("id" = i64, Path, description = "Property ID")),
    request_body = CreateRoomRequest,
    responses(
        (status = 200, description = "Room added", body = ApiResponse<Room>),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Not found or not owned")
    ),
    security(("bearer_auth" = [])),
    tag = "Rooms"
)]
pub async fn add_room(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<CreateRoomRequest>,
) -> AppResult<Json<ApiResponse<Room>>> {
    let resp = room_service::add_room(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/properties/{id}/room-status",
    params(("id" = i64, Path, description = "Property ID")),
    responses(
        (status = 200, description = "Rooms with their confirmed bookings", body = ApiResponse<RoomStatusReport>),
        (status = 404, description = "Not found or not owned")
    ),
    security(("bearer_auth" = [])),
    tag = "Rooms"
)]
pub async fn room_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<RoomStatusReport>>> {
    let resp = room_service::room_status(&state, &user, id).await?;
    Ok(Json(resp))
}
