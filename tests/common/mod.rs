#![allow(dead_code)]

use sea_orm::ActiveModelTrait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::Set;
use staynngo_api::{
    db::{create_pool, run_migrations},
    dto::{properties::CreatePropertyRequest, rooms::CreateRoomRequest},
    entity::users::{ActiveModel as UserActive, Role},
    middleware::auth::AuthUser,
    models::{Property, Room},
    services::{property_service, room_service},
    state::AppState,
};
use uuid::Uuid;

/// Connect to the test database, or `None` when none is configured.
pub async fn setup_state() -> anyhow::Result<Option<AppState>> {
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration tests.");
            return Ok(None);
        }
    };

    let pool = create_pool(database_url.parse()?, 5).await?;
    run_migrations(&pool).await?;
    Ok(Some(AppState::new(pool)))
}

/// Insert a user with a unique email so tests never collide.
pub async fn create_user(state: &AppState, role: Role) -> anyhow::Result<AuthUser> {
    let user = UserActive {
        id: NotSet,
        name: Set(format!("{} tester", role.as_str())),
        email: Set(format!("{}@test.local", Uuid::new_v4())),
        password_hash: Set("dummy".into()),
        role: Set(role),
        phone_number: Set(None),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(AuthUser {
        user_id: user.id,
        role,
    })
}

pub async fn create_property(
    state: &AppState,
    owner: &AuthUser,
    city: &str,
) -> anyhow::Result<Property> {
    let resp = property_service::create_property(
        state,
        owner,
        CreatePropertyRequest {
            address: format!("{} Test Street", Uuid::new_v4()),
            city: city.into(),
            state: "Test State".into(),
            country: "India".into(),
            description: None,
            image_url: None,
            image_description: None,
        },
    )
    .await?;
    resp.data.ok_or_else(|| anyhow::anyhow!("missing property"))
}

pub async fn create_room(
    state: &AppState,
    owner: &AuthUser,
    property_id: i64,
    price_per_night: i64,
) -> anyhow::Result<Room> {
    let resp = room_service::add_room(
        state,
        owner,
        property_id,
        CreateRoomRequest {
            room_type: "Double".into(),
            capacity: 2,
            price_per_night,
            availability_status: true,
        },
    )
    .await?;
    resp.data.ok_or_else(|| anyhow::anyhow!("missing room"))
}
