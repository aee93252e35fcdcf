use std::collections::HashMap;

use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::{Expr, Func, Query};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use validator::Validate;

use crate::{
    audit,
    dto::properties::{
        CreatePropertyRequest, PropertyDetails, PropertyList, RoomWithReviews,
        UpdatePropertyRequest,
    },
    entity::{
        amenities::{Column as AmenityCol, Entity as Amenities},
        properties::{
            ActiveModel as PropertyActive, Column as PropCol, Entity as Properties,
            Model as PropertyModel,
        },
        rooms::{Column as RoomCol, Entity as Rooms},
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::{Amenity, Property, Room},
    response::{ApiResponse, Meta},
    routes::params::{Pagination, PropertyQuery},
    services::review_service,
    state::AppState,
};

/// Load a property the caller owns. Missing and foreign properties are both
/// reported as not found.
pub async fn owned_property<C: ConnectionTrait>(
    conn: &C,
    user: &AuthUser,
    id: i64,
) -> AppResult<PropertyModel> {
    ensure_admin(user)?;
    let property = Properties::find()
        .filter(
            Condition::all()
                .add(PropCol::Id.eq(id))
                .add(PropCol::OwnerId.eq(user.user_id)),
        )
        .one(conn)
        .await?;
    property.ok_or(AppError::NotFound)
}

/// Search filters shared by the public listing.
pub fn filter_condition(query: &PropertyQuery) -> Condition {
    let mut condition = Condition::all();

    if let Some(city) = query.city() {
        condition = condition
            .add(Expr::expr(Func::lower(Expr::col(PropCol::City))).eq(city.to_lowercase()));
    }

    if let Some(max_price) = query.max_price {
        condition = condition.add(
            PropCol::Id.in_subquery(
                Query::select()
                    .column(RoomCol::PropertyId)
                    .from(Rooms)
                    .and_where(RoomCol::PricePerNight.lte(max_price))
                    .to_owned(),
            ),
        );
    }

    // one semi-join per requested amenity: all of them must be present
    for name in query.amenity_names() {
        condition = condition.add(
            PropCol::Id.in_subquery(
                Query::select()
                    .column(AmenityCol::PropertyId)
                    .from(Amenities)
                    .and_where(Expr::expr(Func::lower(Expr::col(AmenityCol::Name))).eq(name))
                    .to_owned(),
            ),
        );
    }

    condition
}

pub async fn list_properties(
    state: &AppState,
    query: PropertyQuery,
) -> AppResult<ApiResponse<PropertyList>> {
    if matches!(query.max_price, Some(p) if p <= 0) {
        return Err(AppError::Validation("max_price must be positive".into()));
    }
    let (page, limit, offset) = query.pagination().normalize();

    let finder = Properties::find()
        .filter(filter_condition(&query))
        .order_by_asc(PropCol::Id);

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Property::from)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Properties",
        PropertyList { items },
        Some(meta),
    ))
}

pub async fn list_owned_properties(
    state: &AppState,
    user: &AuthUser,
    pagination: Pagination,
) -> AppResult<ApiResponse<PropertyList>> {
    ensure_admin(user)?;
    let (page, limit, offset) = pagination.normalize();

    let finder = Properties::find()
        .filter(PropCol::OwnerId.eq(user.user_id))
        .order_by_desc(PropCol::CreatedAt);

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Property::from)
        .collect();

    Ok(ApiResponse::success(
        "My properties",
        PropertyList { items },
        Some(Meta::new(page, limit, total)),
    ))
}

pub async fn get_property_details(
    state: &AppState,
    id: i64,
) -> AppResult<ApiResponse<PropertyDetails>> {
    let property = Properties::find_by_id(id).one(&state.orm).await?;
    let property = match property {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };

    let amenities = Amenities::find()
        .filter(AmenityCol::PropertyId.eq(id))
        .order_by_asc(AmenityCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Amenity::from)
        .collect();

    let rooms = Rooms::find()
        .filter(RoomCol::PropertyId.eq(id))
        .order_by_asc(RoomCol::Id)
        .all(&state.orm)
        .await?;

    let mut reviews_by_room: HashMap<i64, Vec<_>> = HashMap::new();
    for review in review_service::reviews_for_property(&state.pool, id).await? {
        reviews_by_room.entry(review.room_id).or_default().push(review);
    }

    let rooms = rooms
        .into_iter()
        .map(|room| RoomWithReviews {
            reviews: reviews_by_room.remove(&room.id).unwrap_or_default(),
            room: Room::from(room),
        })
        .collect();

    Ok(ApiResponse::success(
        "Property",
        PropertyDetails {
            property: Property::from(property),
            amenities,
            rooms,
        },
        None,
    ))
}

pub async fn create_property(
    state: &AppState,
    user: &AuthUser,
    payload: CreatePropertyRequest,
) -> AppResult<ApiResponse<Property>> {
    ensure_admin(user)?;
    payload.validate()?;

    let property = PropertyActive {
        id: NotSet,
        owner_id: Set(user.user_id),
        address: Set(payload.address),
        city: Set(payload.city),
        state: Set(payload.state),
        country: Set(payload.country),
        description: Set(payload.description),
        image_url: Set(payload.image_url),
        image_description: Set(payload.image_description),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(property_id = property.id, owner_id = user.user_id, "property created");
    audit::record(
        &state.pool,
        Some(user.user_id),
        "property_create",
        "properties",
        serde_json::json!({ "property_id": property.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Property created",
        Property::from(property),
        Some(Meta::empty()),
    ))
}

pub async fn update_property(
    state: &AppState,
    user: &AuthUser,
    id: i64,
    payload: UpdatePropertyRequest,
) -> AppResult<ApiResponse<Property>> {
    payload.validate()?;
    let existing = owned_property(&state.orm, user, id).await?;

    let mut active: PropertyActive = existing.into();
    if let Some(address) = payload.address {
        active.address = Set(address);
    }
    if let Some(city) = payload.city {
        active.city = Set(city);
    }
    if let Some(region) = payload.state {
        active.state = Set(region);
    }
    if let Some(country) = payload.country {
        active.country = Set(country);
    }
    if let Some(description) = payload.description {
        active.description = Set(Some(description));
    }
    if let Some(image_url) = payload.image_url {
        active.image_url = Set(Some(image_url));
    }
    if let Some(image_description) = payload.image_description {
        active.image_description = Set(Some(image_description));
    }
    active.updated_at = Set(Utc::now().into());

    let property = active.update(&state.orm).await?;

    audit::record(
        &state.pool,
        Some(user.user_id),
        "property_update",
        "properties",
        serde_json::json!({ "property_id": property.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        Property::from(property),
        Some(Meta::empty()),
    ))
}

/// Rooms, amenities and everything hanging off the rooms go with it.
pub async fn delete_property(
    state: &AppState,
    user: &AuthUser,
    id: i64,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let property = owned_property(&state.orm, user, id).await?;
    let result = Properties::delete_by_id(property.id)
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(property_id = id, "property deleted");
    audit::record(
        &state.pool,
        Some(user.user_id),
        "property_delete",
        "properties",
        serde_json::json!({ "property_id": id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
