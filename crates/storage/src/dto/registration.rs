use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::dto::vehicle::CreateVehicleRequest;
use crate::models::{Registration, RegistrationVehicle};

/// Entry request for a published event. Vehicles come from the athlete's
/// garage by id; a one-off vehicle can be supplied inline instead.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRegistrationRequest {
    pub class_id: Uuid,

    #[serde(default)]
    pub vehicle_ids: Vec<Uuid>,

    #[validate(nested)]
    pub vehicle: Option<CreateVehicleRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationVehicleResponse {
    pub registration_vehicle_id: Uuid,
    pub start_number: i32,
    pub make: String,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub chassis_number: Option<String>,
    pub license_plate: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationResponse {
    pub registration_id: Uuid,
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub class_id: Uuid,
    pub start_number: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub vehicles: Vec<RegistrationVehicleResponse>,
}

/// Staff view of one entry, joined with athlete and class names.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct EventRegistrationResponse {
    pub registration_id: Uuid,
    pub start_number: i32,
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub class_name: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<RegistrationVehicle> for RegistrationVehicleResponse {
    fn from(vehicle: RegistrationVehicle) -> Self {
        Self {
            registration_vehicle_id: vehicle.registration_vehicle_id,
            start_number: vehicle.start_number,
            make: vehicle.make,
            model: vehicle.model,
            year: vehicle.year,
            chassis_number: vehicle.chassis_number,
            license_plate: vehicle.license_plate,
        }
    }
}

impl RegistrationResponse {
    pub fn from_parts(registration: Registration, vehicles: Vec<RegistrationVehicle>) -> Self {
        Self {
            registration_id: registration.registration_id,
            event_id: registration.event_id,
            user_id: registration.user_id,
            class_id: registration.class_id,
            start_number: registration.start_number,
            status: registration.status,
            created_at: registration.created_at,
            vehicles: vehicles
                .into_iter()
                .map(RegistrationVehicleResponse::from)
                .collect(),
        }
    }
}
