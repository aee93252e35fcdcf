use serde::Serialize;
use utoipa::ToSchema;

use crate::models::MonthlyBookings;

#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyticsSummary {
    /// Sum of completed payments, in minor units.
    pub total_transactions: i64,
    pub user_count: i64,
    pub bookings_count: i64,
    pub monthly_trend: Vec<MonthlyBookings>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SweepResult {
    pub completed: u64,
}
