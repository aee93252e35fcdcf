use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use validator::Validate;

use crate::{
    audit,
    dto::{
        properties::RoomStatusReport,
        rooms::{CreateRoomRequest, RoomList, UpdateRoomRequest},
    },
    entity::{
        properties::Entity as Properties,
        rooms::{ActiveModel as RoomActive, Column as RoomCol, Entity as Rooms, Model as RoomModel},
    },
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{Property, Room, RoomStatus},
    response::{ApiResponse, Meta},
    services::property_service::owned_property,
    state::AppState,
};

async fn owned_room(state: &AppState, user: &AuthUser, id: i64) -> AppResult<RoomModel> {
    let room = Rooms::find_by_id(id).one(&state.orm).await?;
    let room = match room {
        Some(r) => r,
        None => return Err(AppError::NotFound),
    };
    owned_property(&state.orm, user, room.property_id).await?;
    Ok(room)
}

pub async fn list_rooms(state: &AppState, property_id: i64) -> AppResult<ApiResponse<RoomList>> {
    if Properties::find_by_id(property_id)
        .one(&state.orm)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound);
    }

    let items: Vec<Room> = Rooms::find()
        .filter(RoomCol::PropertyId.eq(property_id))
        .order_by_asc(RoomCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Room::from)
        .collect();

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Rooms",
        RoomList { items },
        Some(Meta::unpaged(total)),
    ))
}

pub async fn get_room(state: &AppState, id: i64) -> AppResult<ApiResponse<Room>> {
    let room = Rooms::find_by_id(id).one(&state.orm).await?.map(Room::from);
    let room = match room {
        Some(r) => r,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Room", room, None))
}

pub async fn add_room(
    state: &AppState,
    user: &AuthUser,
    property_id: i64,
    payload: CreateRoomRequest,
) -> AppResult<ApiResponse<Room>> {
    payload.validate()?;
    owned_property(&state.orm, user, property_id).await?;

    let room = RoomActive {
        id: NotSet,
        property_id: Set(property_id),
        room_type: Set(payload.room_type),
        capacity: Set(payload.capacity),
        price_per_night: Set(payload.price_per_night),
        availability_status: Set(payload.availability_status),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(room_id = room.id, property_id, "room added");
    audit::record(
        &state.pool,
        Some(user.user_id),
        "room_create",
        "rooms",
        serde_json::json!({ "room_id": room.id, "property_id": property_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Room added",
        Room::from(room),
        Some(Meta::empty()),
    ))
}

pub async fn update_room(
    state: &AppState,
    user: &AuthUser,
    id: i64,
    payload: UpdateRoomRequest,
) -> AppResult<ApiResponse<Room>> {
    payload.validate()?;
    let existing = owned_room(state, user, id).await?;

    let mut active: RoomActive = existing.into();
    if let Some(room_type) = payload.room_type {
        active.room_type = Set(room_type);
    }
    if let Some(capacity) = payload.capacity {
        active.capacity = Set(capacity);
    }
    if let Some(price) = payload.price_per_night {
        active.price_per_night = Set(price);
    }
    if let Some(available) = payload.availability_status {
        active.availability_status = Set(available);
    }
    active.updated_at = Set(Utc::now().into());
    let room = active.update(&state.orm).await?;

    audit::record(
        &state.pool,
        Some(user.user_id),
        "room_update",
        "rooms",
        serde_json::json!({ "room_id": room.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Room updated",
        Room::from(room),
        Some(Meta::empty()),
    ))
}

/// Bookings (with their payments) and reviews of the room are removed by cascade.
pub async fn delete_room(
    state: &AppState,
    user: &AuthUser,
    id: i64,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let room = owned_room(state, user, id).await?;
    Rooms::delete_by_id(room.id).exec(&state.orm).await?;

    tracing::info!(room_id = id, "room deleted");
    audit::record(
        &state.pool,
        Some(user.user_id),
        "room_delete",
        "rooms",
        serde_json::json!({ "room_id": id, "property_id": room.property_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({ "property_id": room.property_id }),
        Some(Meta::empty()),
    ))
}

/// Every room of an owned property with its confirmed booking and guest.
pub async fn room_status(
    state: &AppState,
    user: &AuthUser,
    property_id: i64,
) -> AppResult<ApiResponse<RoomStatusReport>> {
    let property = owned_property(&state.orm, user, property_id).await?;

    let rooms = sqlx::query_as::<_, RoomStatus>(
        r#"
        SELECT r.id AS room_id, r.room_type, r.capacity, r.price_per_night, r.availability_status,
               b.id AS booking_id, b.check_in_date, b.check_out_date, u.name AS guest_name
        FROM rooms r
        LEFT JOIN bookings b ON b.room_id = r.id AND b.status = 'confirmed'
        LEFT JOIN users u ON u.id = b.user_id
        WHERE r.property_id = $1
        ORDER BY r.id, b.check_in_date
        "#,
    )
    .bind(property_id)
    .fetch_all(&state.pool)
    .await?;

    Ok(ApiResponse::success(
        "Room status",
        RoomStatusReport {
            property: Property::from(property),
            rooms,
        },
        Some(Meta::empty()),
    ))
}
