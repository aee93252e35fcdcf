use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use password_hash::rand_core::OsRng;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use validator::Validate;

use crate::{
    audit,
    config::jwt_secret,
    dto::auth::{Claims, LoginRequest, LoginResponse, RegisterRequest, UpdateProfileRequest},
    entity::users::{ActiveModel as UserActive, Column as UserCol, Entity as Users},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::User,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(hash)
}

/// Insert a new account. A repeated email surfaces as a constraint violation
/// from the unique index.
pub async fn register_user(
    state: &AppState,
    payload: RegisterRequest,
) -> AppResult<ApiResponse<User>> {
    payload.validate()?;
    let RegisterRequest {
        name,
        email,
        password,
        role,
        phone_number,
    } = payload;

    let password_hash = hash_password(&password)?;

    let user = UserActive {
        id: NotSet,
        name: Set(name),
        email: Set(email.trim().to_lowercase()),
        password_hash: Set(password_hash),
        role: Set(role),
        phone_number: Set(phone_number),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(user_id = user.id, role = user.role.as_str(), "user registered");
    audit::record(
        &state.pool,
        Some(user.id),
        "user_register",
        "users",
        serde_json::json!({ "user_id": user.id }),
    )
    .await;

    Ok(ApiResponse::success("User created", User::from(user), None))
}

pub async fn login_user(
    state: &AppState,
    payload: LoginRequest,
) -> AppResult<ApiResponse<LoginResponse>> {
    payload.validate()?;
    let LoginRequest { email, password } = payload;
    let user = Users::find()
        .filter(UserCol::Email.eq(email.trim().to_lowercase()))
        .one(&state.orm)
        .await?;

    let user = match user {
        Some(u) => u,
        None => return Err(AppError::Unauthorized("Invalid email or password".into())),
    };

    let parsed_hash = PasswordHash::new(&user.password_hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;

    if Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_err()
    {
        return Err(AppError::Unauthorized("Invalid email or password".into()));
    }

    let secret = jwt_secret()?;

    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(24))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        sub: user.id.to_string(),
        role: user.role,
        exp: expiration.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?;

    audit::record(
        &state.pool,
        Some(user.id),
        "user_login",
        "users",
        serde_json::json!({ "user_id": user.id }),
    )
    .await;

    let resp = LoginResponse {
        token: format!("Bearer {}", token),
        user: User::from(user),
    };

    Ok(ApiResponse::success("Logged in", resp, Some(Meta::empty())))
}

pub async fn get_profile(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<User>> {
    let found = Users::find_by_id(user.user_id).one(&state.orm).await?;
    let found = match found {
        Some(u) => u,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Profile", User::from(found), None))
}

/// Name and phone are editable; email and role are fixed at registration.
pub async fn update_profile(
    state: &AppState,
    user: &AuthUser,
    payload: UpdateProfileRequest,
) -> AppResult<ApiResponse<User>> {
    payload.validate()?;
    let existing = Users::find_by_id(user.user_id).one(&state.orm).await?;
    let existing = match existing {
        Some(u) => u,
        None => return Err(AppError::NotFound),
    };

    let mut active: UserActive = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(phone) = payload.phone_number {
        active.phone_number = Set(Some(phone));
    }
    active.updated_at = Set(Utc::now().into());
    let updated = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Profile updated",
        User::from(updated),
        Some(Meta::empty()),
    ))
}
