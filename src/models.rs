use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::entity::{
    amenities, bookings, payments, properties, reviews, rooms,
    users::{self, Role},
};

pub use crate::entity::{bookings::BookingStatus, payments::PaymentStatus};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub phone_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Property {
    pub id: i64,
    pub owner_id: i64,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub image_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Room {
    pub id: i64,
    pub property_id: i64,
    pub room_type: String,
    pub capacity: i32,
    pub price_per_night: i64,
    pub availability_status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Amenity {
    pub id: i64,
    pub property_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Booking {
    pub id: i64,
    pub user_id: i64,
    pub room_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub total_price: i64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Payment {
    pub id: i64,
    pub booking_id: i64,
    pub payment_method: String,
    pub amount: i64,
    pub status: PaymentStatus,
    pub payment_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Review {
    pub id: i64,
    pub room_id: i64,
    pub user_id: i64,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A review joined with its author's display name.
#[derive(Debug, Serialize, Deserialize, ToSchema, FromRow)]
pub struct ReviewWithAuthor {
    pub id: i64,
    pub room_id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A booking as the guest sees it in their list.
#[derive(Debug, Serialize, Deserialize, ToSchema, FromRow)]
pub struct BookingSummary {
    pub id: i64,
    pub room_id: i64,
    pub property_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub total_price: i64,
    pub status: String,
    pub room_type: String,
    pub address: String,
    pub city: String,
}

/// One room with its current confirmed booking, if any.
#[derive(Debug, Serialize, Deserialize, ToSchema, FromRow)]
pub struct RoomStatus {
    pub room_id: i64,
    pub room_type: String,
    pub capacity: i32,
    pub price_per_night: i64,
    pub availability_status: bool,
    pub booking_id: Option<i64>,
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub guest_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, FromRow)]
pub struct MonthlyBookings {
    pub month: String,
    pub count: i64,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            role: model.role,
            phone_number: model.phone_number,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<properties::Model> for Property {
    fn from(model: properties::Model) -> Self {
        Self {
            id: model.id,
            owner_id: model.owner_id,
            address: model.address,
            city: model.city,
            state: model.state,
            country: model.country,
            description: model.description,
            image_url: model.image_url,
            image_description: model.image_description,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<rooms::Model> for Room {
    fn from(model: rooms::Model) -> Self {
        Self {
            id: model.id,
            property_id: model.property_id,
            room_type: model.room_type,
            capacity: model.capacity,
            price_per_night: model.price_per_night,
            availability_status: model.availability_status,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<amenities::Model> for Amenity {
    fn from(model: amenities::Model) -> Self {
        Self {
            id: model.id,
            property_id: model.property_id,
            name: model.name,
            description: model.description,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<bookings::Model> for Booking {
    fn from(model: bookings::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            room_id: model.room_id,
            check_in_date: model.check_in_date,
            check_out_date: model.check_out_date,
            total_price: model.total_price,
            status: model.status,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<payments::Model> for Payment {
    fn from(model: payments::Model) -> Self {
        Self {
            id: model.id,
            booking_id: model.booking_id,
            payment_method: model.payment_method,
            amount: model.amount,
            status: model.status,
            payment_date: model.payment_date.with_timezone(&Utc),
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<reviews::Model> for Review {
    fn from(model: reviews::Model) -> Self {
        Self {
            id: model.id,
            room_id: model.room_id,
            user_id: model.user_id,
            rating: model.rating,
            comment: model.comment,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
