use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::UserVehicle;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateVehicleRequest {
    #[validate(range(min = 1, message = "Start number must be positive"))]
    pub start_number: i32,

    #[validate(length(min = 1, max = 255))]
    pub make: String,

    #[validate(length(max = 255))]
    pub model: Option<String>,

    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,

    #[validate(length(max = 255))]
    pub chassis_number: Option<String>,

    #[validate(length(max = 255))]
    pub license_plate: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateVehicleRequest {
    #[validate(range(min = 1))]
    pub start_number: Option<i32>,

    #[validate(length(min = 1, max = 255))]
    pub make: Option<String>,

    #[validate(length(max = 255))]
    pub model: Option<String>,

    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,

    #[validate(length(max = 255))]
    pub chassis_number: Option<String>,

    #[validate(length(max = 255))]
    pub license_plate: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VehicleResponse {
    pub vehicle_id: Uuid,
    pub start_number: i32,
    pub make: String,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub chassis_number: Option<String>,
    pub license_plate: Option<String>,
}

impl From<UserVehicle> for VehicleResponse {
    fn from(vehicle: UserVehicle) -> Self {
        Self {
            vehicle_id: vehicle.vehicle_id,
            start_number: vehicle.start_number,
            make: vehicle.make,
            model: vehicle.model,
            year: vehicle.year,
            chassis_number: vehicle.chassis_number,
            license_plate: vehicle.license_plate,
        }
    }
}
