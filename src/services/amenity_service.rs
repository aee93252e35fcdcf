use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use validator::Validate;

use crate::{
    audit,
    dto::amenities::{AmenityList, CreateAmenityRequest, UpdateAmenityRequest},
    entity::{
        amenities::{
            ActiveModel as AmenityActive, Column as AmenityCol, Entity as Amenities,
            Model as AmenityModel,
        },
        properties::Entity as Properties,
    },
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::Amenity,
    response::{ApiResponse, Meta},
    services::property_service::owned_property,
    state::AppState,
};

// Amenity plus an ownership check on its parent property.
async fn owned_amenity(state: &AppState, user: &AuthUser, id: i64) -> AppResult<AmenityModel> {
    let amenity = Amenities::find_by_id(id).one(&state.orm).await?;
    let amenity = match amenity {
        Some(a) => a,
        None => return Err(AppError::NotFound),
    };
    owned_property(&state.orm, user, amenity.property_id).await?;
    Ok(amenity)
}

pub async fn list_amenities(
    state: &AppState,
    property_id: i64,
) -> AppResult<ApiResponse<AmenityList>> {
    if Properties::find_by_id(property_id)
        .one(&state.orm)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound);
    }

    let items: Vec<Amenity> = Amenities::find()
        .filter(AmenityCol::PropertyId.eq(property_id))
        .order_by_asc(AmenityCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Amenity::from)
        .collect();

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Amenities",
        AmenityList { items },
        Some(Meta::unpaged(total)),
    ))
}

pub async fn add_amenity(
    state: &AppState,
    user: &AuthUser,
    property_id: i64,
    payload: CreateAmenityRequest,
) -> AppResult<ApiResponse<Amenity>> {
    payload.validate()?;
    owned_property(&state.orm, user, property_id).await?;

    let amenity = AmenityActive {
        id: NotSet,
        property_id: Set(property_id),
        name: Set(payload.name.trim().to_string()),
        description: Set(payload.description),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    audit::record(
        &state.pool,
        Some(user.user_id),
        "amenity_create",
        "amenities",
        serde_json::json!({ "amenity_id": amenity.id, "property_id": property_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Amenity added",
        Amenity::from(amenity),
        Some(Meta::empty()),
    ))
}

pub async fn update_amenity(
    state: &AppState,
    user: &AuthUser,
    id: i64,
    payload: UpdateAmenityRequest,
) -> AppResult<ApiResponse<Amenity>> {
    payload.validate()?;
    let existing = owned_amenity(state, user, id).await?;

    let mut active: AmenityActive = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name.trim().to_string());
    }
    if let Some(description) = payload.description {
        active.description = Set(Some(description));
    }
    active.updated_at = Set(Utc::now().into());
    let amenity = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Amenity updated",
        Amenity::from(amenity),
        Some(Meta::empty()),
    ))
}

pub async fn delete_amenity(
    state: &AppState,
    user: &AuthUser,
    id: i64,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let amenity = owned_amenity(state, user, id).await?;
    Amenities::delete_by_id(amenity.id).exec(&state.orm).await?;

    audit::record(
        &state.pool,
        Some(user.user_id),
        "amenity_delete",
        "amenities",
        serde_json::json!({ "amenity_id": id, "property_id": amenity.property_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({ "property_id": amenity.property_id }),
        Some(Meta::empty()),
    ))
}
