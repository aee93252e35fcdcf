mod common;

use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use staynngo_api::{
    dto::{
        amenities::CreateAmenityRequest, auth::RegisterRequest, bookings::CreateBookingRequest,
        reviews::CreateReviewRequest,
    },
    entity::{
        amenities::{Column as AmenityCol, Entity as Amenities},
        bookings::{Column as BookingCol, Entity as Bookings},
        reviews::{Column as ReviewCol, Entity as Reviews},
        rooms::{Column as RoomCol, Entity as Rooms},
        users::Role,
    },
    error::AppError,
    routes::params::PropertyQuery,
    services::{
        amenity_service, auth_service, booking_service, property_service, review_service,
        room_service,
    },
};
use uuid::Uuid;

fn register(email: &str) -> RegisterRequest {
    RegisterRequest {
        name: "Meera".into(),
        email: email.into(),
        password: "secret123".into(),
        role: Role::User,
        phone_number: None,
    }
}

fn amenity(name: &str) -> CreateAmenityRequest {
    CreateAmenityRequest {
        name: name.into(),
        description: None,
    }
}

#[tokio::test]
async fn duplicate_email_is_a_constraint_violation() -> anyhow::Result<()> {
    let Some(state) = common::setup_state().await? else {
        return Ok(());
    };

    let email = format!("{}@test.local", Uuid::new_v4());
    let user = auth_service::register_user(&state, register(&email))
        .await?
        .data
        .expect("user");
    assert_eq!(user.role, Role::User);

    let again = auth_service::register_user(&state, register(&email.to_uppercase())).await;
    assert!(matches!(again, Err(AppError::ConstraintViolation(_))));

    Ok(())
}

#[tokio::test]
async fn listing_filters_by_city_price_and_amenities() -> anyhow::Result<()> {
    let Some(state) = common::setup_state().await? else {
        return Ok(());
    };

    let owner = common::create_user(&state, Role::Admin).await?;
    let city = format!("Town-{}", Uuid::new_v4());

    let cheap = common::create_property(&state, &owner, &city).await?;
    common::create_room(&state, &owner, cheap.id, 900).await?;
    amenity_service::add_amenity(&state, &owner, cheap.id, amenity("WiFi")).await?;
    amenity_service::add_amenity(&state, &owner, cheap.id, amenity("Parking")).await?;

    let pricey = common::create_property(&state, &owner, &city).await?;
    common::create_room(&state, &owner, pricey.id, 5000).await?;
    amenity_service::add_amenity(&state, &owner, pricey.id, amenity("WiFi")).await?;

    let by_city = |extra: PropertyQuery| PropertyQuery {
        city: Some(city.to_lowercase()),
        ..extra
    };

    let all = property_service::list_properties(&state, by_city(PropertyQuery::default()))
        .await?
        .data
        .expect("list");
    assert_eq!(all.items.len(), 2);

    let under_budget = property_service::list_properties(
        &state,
        by_city(PropertyQuery {
            max_price: Some(1000),
            ..Default::default()
        }),
    )
    .await?
    .data
    .expect("list");
    assert_eq!(under_budget.items.len(), 1);
    assert_eq!(under_budget.items[0].id, cheap.id);

    let with_parking = property_service::list_properties(
        &state,
        by_city(PropertyQuery {
            amenities: Some("wifi, PARKING".into()),
            ..Default::default()
        }),
    )
    .await?
    .data
    .expect("list");
    assert_eq!(with_parking.items.len(), 1);
    assert_eq!(with_parking.items[0].id, cheap.id);

    let bad_price = property_service::list_properties(
        &state,
        PropertyQuery {
            max_price: Some(0),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(bad_price, Err(AppError::Validation(_))));

    let far_page = property_service::list_properties(
        &state,
        by_city(PropertyQuery {
            page: Some(i64::MAX / 2),
            ..Default::default()
        }),
    )
    .await?;
    assert!(far_page.data.expect("list").items.is_empty());
    assert_eq!(far_page.meta.and_then(|m| m.total), Some(2));

    Ok(())
}

#[tokio::test]
async fn property_details_group_reviews_by_room() -> anyhow::Result<()> {
    let Some(state) = common::setup_state().await? else {
        return Ok(());
    };

    let owner = common::create_user(&state, Role::Admin).await?;
    let guest = common::create_user(&state, Role::User).await?;
    let property = common::create_property(&state, &owner, "Kochi").await?;
    let reviewed = common::create_room(&state, &owner, property.id, 700).await?;
    common::create_room(&state, &owner, property.id, 900).await?;

    for rating in [0, 6] {
        let rejected = review_service::add_review(
            &state,
            &guest,
            reviewed.id,
            CreateReviewRequest {
                rating,
                comment: None,
            },
        )
        .await;
        assert!(matches!(rejected, Err(AppError::Validation(_))));
    }
    for rating in [1, 5] {
        review_service::add_review(
            &state,
            &guest,
            reviewed.id,
            CreateReviewRequest {
                rating,
                comment: Some("Nice".into()),
            },
        )
        .await?;
    }

    let details = property_service::get_property_details(&state, property.id)
        .await?
        .data
        .expect("details");
    assert_eq!(details.rooms.len(), 2);
    let room = details
        .rooms
        .iter()
        .find(|r| r.room.id == reviewed.id)
        .expect("reviewed room");
    assert_eq!(room.reviews.len(), 2);
    assert!(room.reviews.iter().all(|r| r.user_id == guest.user_id));

    let missing = property_service::get_property_details(&state, i64::MAX).await;
    assert!(matches!(missing, Err(AppError::NotFound)));

    Ok(())
}

#[tokio::test]
async fn only_the_owner_manages_a_property() -> anyhow::Result<()> {
    let Some(state) = common::setup_state().await? else {
        return Ok(());
    };

    let owner = common::create_user(&state, Role::Admin).await?;
    let other_admin = common::create_user(&state, Role::Admin).await?;
    let guest = common::create_user(&state, Role::User).await?;
    let property = common::create_property(&state, &owner, "Shimla").await?;

    let foreign = property_service::delete_property(&state, &other_admin, property.id).await;
    assert!(matches!(foreign, Err(AppError::NotFound)));

    let by_guest = amenity_service::add_amenity(&state, &guest, property.id, amenity("Pool")).await;
    assert!(matches!(by_guest, Err(AppError::Forbidden)));

    Ok(())
}

#[tokio::test]
async fn deletes_cascade_to_dependents() -> anyhow::Result<()> {
    let Some(state) = common::setup_state().await? else {
        return Ok(());
    };

    let owner = common::create_user(&state, Role::Admin).await?;
    let guest = common::create_user(&state, Role::User).await?;
    let property = common::create_property(&state, &owner, "Ooty").await?;
    let room = common::create_room(&state, &owner, property.id, 600).await?;
    let spare = common::create_room(&state, &owner, property.id, 650).await?;
    amenity_service::add_amenity(&state, &owner, property.id, amenity("Heater")).await?;

    booking_service::create_booking(
        &state,
        &guest,
        CreateBookingRequest {
            room_id: room.id,
            check_in_date: chrono::NaiveDate::from_ymd_opt(2099, 12, 1).expect("date"),
            check_out_date: chrono::NaiveDate::from_ymd_opt(2099, 12, 4).expect("date"),
            payment_method: Some("cash".into()),
        },
    )
    .await?;
    review_service::add_review(
        &state,
        &guest,
        room.id,
        CreateReviewRequest {
            rating: 4,
            comment: None,
        },
    )
    .await?;

    room_service::delete_room(&state, &owner, room.id).await?;
    let bookings = Bookings::find()
        .filter(BookingCol::RoomId.eq(room.id))
        .count(&state.orm)
        .await?;
    let reviews = Reviews::find()
        .filter(ReviewCol::RoomId.eq(room.id))
        .count(&state.orm)
        .await?;
    assert_eq!(bookings, 0);
    assert_eq!(reviews, 0);

    property_service::delete_property(&state, &owner, property.id).await?;
    assert!(Rooms::find_by_id(spare.id).one(&state.orm).await?.is_none());
    let rooms = Rooms::find()
        .filter(RoomCol::PropertyId.eq(property.id))
        .count(&state.orm)
        .await?;
    let amenities = Amenities::find()
        .filter(AmenityCol::PropertyId.eq(property.id))
        .count(&state.orm)
        .await?;
    assert_eq!(rooms, 0);
    assert_eq!(amenities, 0);

    Ok(())
}
