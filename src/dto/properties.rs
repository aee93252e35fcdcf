use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Amenity, Property, ReviewWithAuthor, Room, RoomStatus};

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreatePropertyRequest {
    #[validate(length(min = 1))]
    pub address: String,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1))]
    pub state: String,
    #[validate(length(min = 1))]
    pub country: String,
    pub description: Option<String>,
    #[validate(url)]
    pub image_url: Option<String>,
    pub image_description: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdatePropertyRequest {
    #[validate(length(min = 1))]
    pub address: Option<String>,
    #[validate(length(min = 1))]
    pub city: Option<String>,
    #[validate(length(min = 1))]
    pub state: Option<String>,
    #[validate(length(min = 1))]
    pub country: Option<String>,
    pub description: Option<String>,
    #[validate(url)]
    pub image_url: Option<String>,
    pub image_description: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PropertyList {
    pub items: Vec<Property>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoomWithReviews {
    pub room: Room,
    pub reviews: Vec<ReviewWithAuthor>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PropertyDetails {
    pub property: Property,
    pub amenities: Vec<Amenity>,
    pub rooms: Vec<RoomWithReviews>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoomStatusReport {
    pub property: Property,
    pub rooms: Vec<RoomStatus>,
}
