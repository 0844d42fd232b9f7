use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Athlete-owned vehicle profile. The start number is the athlete's own
/// choice and unique within their garage, not within any event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserVehicle {
    pub vehicle_id: Uuid,
    pub user_id: Uuid,
    pub start_number: i32,
    pub make: String,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub chassis_number: Option<String>,
    pub license_plate: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Vehicle entered into an event under a registration. Carries a snapshot
/// of the vehicle identity; the start number is unique per event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RegistrationVehicle {
    pub registration_vehicle_id: Uuid,
    pub registration_id: Uuid,
    pub event_id: Uuid,
    pub start_number: i32,
    pub make: String,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub chassis_number: Option<String>,
    pub license_plate: Option<String>,
}
