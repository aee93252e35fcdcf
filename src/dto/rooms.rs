use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Room;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateRoomRequest {
    #[validate(length(min = 1, max = 60))]
    pub room_type: String,
    #[validate(range(min = 1))]
    pub capacity: i32,
    #[validate(range(min = 1))]
    pub price_per_night: i64,
    #[serde(default = "available_by_default")]
    pub availability_status: bool,
}

fn available_by_default() -> bool {
    true
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateRoomRequest {
    #[validate(length(min = 1, max = 60))]
    pub room_type: Option<String>,
    #[validate(range(min = 1))]
    pub capacity: Option<i32>,
    #[validate(range(min = 1))]
    pub price_per_night: Option<i64>,
    pub availability_status: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoomList {
    pub items: Vec<Room>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_price_is_rejected() {
        let req = CreateRoomRequest {
            room_type: "Double".into(),
            capacity: 2,
            price_per_night: 0,
            availability_status: true,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn availability_defaults_to_true() {
        let req: CreateRoomRequest =
            serde_json::from_str(r#"{"room_type":"Single","capacity":1,"price_per_night":500}"#)
                .expect("room request");
        assert!(req.availability_status);
        assert!(req.validate().is_ok());
    }
}
