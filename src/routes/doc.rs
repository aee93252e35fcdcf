use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        amenities::{AmenityList, CreateAmenityRequest, UpdateAmenityRequest},
        analytics::{AnalyticsSummary, SweepResult},
        auth::{LoginRequest, LoginResponse, RegisterRequest, UpdateProfileRequest},
        bookings::{BookingList, BookingWithPayments, CreateBookingRequest},
        payments::{PaymentList, RecordPaymentRequest},
        properties::{
            CreatePropertyRequest, PropertyDetails, PropertyList, RoomStatusReport,
            RoomWithReviews, UpdatePropertyRequest,
        },
        reviews::{CreateReviewRequest, ReviewList},
        rooms::{CreateRoomRequest, RoomList, UpdateRoomRequest},
    },
    entity::users::Role,
    models::{
        Amenity, Booking, BookingStatus, BookingSummary, MonthlyBookings, Payment, PaymentStatus,
        Property, Review, ReviewWithAuthor, Room, RoomStatus, User,
    },
    response::{ApiResponse, ErrorBody, Meta},
    routes::{admin, amenities, auth, bookings, health, params, properties, rooms},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::register,
        auth::login,
        auth::me,
        auth::update_me,
        properties::list_properties,
        properties::list_my_properties,
        properties::create_property,
        properties::get_property,
        properties::update_property,
        properties::delete_property,
        properties::list_amenities,
        properties::add_amenity,
        properties::list_rooms,
        properties::add_room,
        properties::room_status,
        amenities::update_amenity,
        amenities::delete_amenity,
        rooms::get_room,
        rooms::update_room,
        rooms::delete_room,
        rooms::list_reviews,
        rooms::add_review,
        bookings::list_my_bookings,
        bookings::create_booking,
        bookings::get_booking,
        bookings::cancel_booking,
        bookings::list_payments,
        bookings::record_payment,
        admin::analytics,
        admin::complete_expired
    ),
    components(
        schemas(
            Role,
            BookingStatus,
            PaymentStatus,
            User,
            Property,
            Room,
            Amenity,
            Booking,
            Payment,
            Review,
            ReviewWithAuthor,
            BookingSummary,
            RoomStatus,
            MonthlyBookings,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            UpdateProfileRequest,
            CreatePropertyRequest,
            UpdatePropertyRequest,
            PropertyList,
            PropertyDetails,
            RoomWithReviews,
            RoomStatusReport,
            CreateAmenityRequest,
            UpdateAmenityRequest,
            AmenityList,
            CreateRoomRequest,
            UpdateRoomRequest,
            RoomList,
            CreateReviewRequest,
            ReviewList,
            CreateBookingRequest,
            BookingList,
            BookingWithPayments,
            RecordPaymentRequest,
            PaymentList,
            AnalyticsSummary,
            SweepResult,
            health::HealthData,
            params::Pagination,
            params::PropertyQuery,
            Meta,
            ErrorBody,
            ApiResponse<PropertyList>,
            ApiResponse<PropertyDetails>,
            ApiResponse<BookingWithPayments>,
            ApiResponse<BookingList>,
            ApiResponse<AnalyticsSummary>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Registration, login and profile"),
        (name = "Properties", description = "Property listing and management"),
        (name = "Amenities", description = "Amenity management"),
        (name = "Rooms", description = "Room management"),
        (name = "Reviews", description = "Room reviews"),
        (name = "Bookings", description = "Booking endpoints"),
        (name = "Payments", description = "Payments recorded against bookings"),
        (name = "Admin", description = "Analytics and maintenance"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
