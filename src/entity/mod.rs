pub mod amenities;
pub mod audit_logs;
pub mod bookings;
pub mod payments;
pub mod properties;
pub mod reviews;
pub mod rooms;
pub mod users;

pub use amenities::Entity as Amenities;
pub use audit_logs::Entity as AuditLogs;
pub use bookings::Entity as Bookings;
pub use payments::Entity as Payments;
pub use properties::Entity as Properties;
pub use reviews::Entity as Reviews;
pub use rooms::Entity as Rooms;
pub use users::Entity as Users;
