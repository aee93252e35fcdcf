use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{entity::users::Role, models::User};

#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
    pub role: Role,
    #[validate(length(min = 3, max = 32))]
    pub phone_number: Option<String>,
}

#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    #[validate(length(min = 3, max = 32))]
    pub phone_number: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub exp: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_rejects_malformed_email() {
        let req = RegisterRequest {
            name: "Asha".into(),
            email: "not-an-email".into(),
            password: "hunter22".into(),
            role: Role::User,
            phone_number: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn role_deserializes_lowercase() {
        let claims: Claims =
            serde_json::from_str(r#"{"sub":"7","role":"admin","exp":0}"#).expect("claims");
        assert_eq!(claims.role, Role::Admin);
    }
}
