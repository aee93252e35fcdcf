use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use validator::Validate;

use crate::{
    audit,
    db::DbPool,
    dto::reviews::{CreateReviewRequest, ReviewList},
    entity::{
        reviews::ActiveModel as ReviewActive,
        rooms::Entity as Rooms,
    },
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{Review, ReviewWithAuthor},
    response::{ApiResponse, Meta},
    state::AppState,
};

const REVIEW_COLUMNS: &str = r#"
    SELECT r.id, r.room_id, r.user_id, u.name AS user_name, r.rating, r.comment, r.created_at
    FROM reviews r
    JOIN users u ON u.id = r.user_id
"#;

pub async fn reviews_for_room(pool: &DbPool, room_id: i64) -> AppResult<Vec<ReviewWithAuthor>> {
    let sql = format!("{REVIEW_COLUMNS} WHERE r.room_id = $1 ORDER BY r.created_at DESC, r.id DESC");
    let rows = sqlx::query_as::<_, ReviewWithAuthor>(&sql)
        .bind(room_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn reviews_for_property(
    pool: &DbPool,
    property_id: i64,
) -> AppResult<Vec<ReviewWithAuthor>> {
    let sql = format!(
        "{REVIEW_COLUMNS} JOIN rooms rm ON rm.id = r.room_id \
         WHERE rm.property_id = $1 ORDER BY r.created_at DESC, r.id DESC"
    );
    let rows = sqlx::query_as::<_, ReviewWithAuthor>(&sql)
        .bind(property_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn list_reviews(state: &AppState, room_id: i64) -> AppResult<ApiResponse<ReviewList>> {
    if Rooms::find_by_id(room_id).one(&state.orm).await?.is_none() {
        return Err(AppError::NotFound);
    }
    let items = reviews_for_room(&state.pool, room_id).await?;
    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Reviews",
        ReviewList { items },
        Some(Meta::unpaged(total)),
    ))
}

/// Ratings outside 1..=5 are rejected before touching storage.
pub async fn add_review(
    state: &AppState,
    user: &AuthUser,
    room_id: i64,
    payload: CreateReviewRequest,
) -> AppResult<ApiResponse<Review>> {
    payload.validate()?;

    if Rooms::find_by_id(room_id).one(&state.orm).await?.is_none() {
        return Err(AppError::NotFound);
    }

    let review = ReviewActive {
        id: NotSet,
        room_id: Set(room_id),
        user_id: Set(user.user_id),
        rating: Set(payload.rating),
        comment: Set(payload.comment),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    audit::record(
        &state.pool,
        Some(user.user_id),
        "review_create",
        "reviews",
        serde_json::json!({ "review_id": review.id, "room_id": room_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Your review has been added",
        Review::from(review),
        Some(Meta::empty()),
    ))
}
