use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{WeightControl, WeightLimit};

/// Upsert payload for one reading, keyed by (event, start number, heat).
/// The result comes from the controller at the scale; the class weight
/// band is looked up for display only.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct WeightControlRequest {
    #[validate(range(min = 1, message = "Start number must be positive"))]
    pub start_number: i32,

    pub class_id: Uuid,

    #[validate(custom(function = "validate_heat"))]
    pub heat: String,

    pub measured_weight: Decimal,

    #[validate(custom(function = "validate_result"))]
    pub result: String,

    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeightControlResponse {
    pub control_id: Uuid,
    pub event_id: Uuid,
    pub start_number: i32,
    pub heat: String,
    pub class_id: Uuid,
    pub measured_weight: Decimal,
    pub result: String,
    pub notes: Option<String>,
    pub controller_id: Uuid,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct WeightLimitSpec {
    pub class_id: Uuid,

    pub min_weight: Option<Decimal>,

    pub max_weight: Option<Decimal>,
}

/// Replaces the full weight-limit set of an event in one transaction.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ReplaceWeightLimitsRequest {
    #[validate(nested)]
    pub limits: Vec<WeightLimitSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeightLimitResponse {
    pub limit_id: Uuid,
    pub event_id: Uuid,
    pub class_id: Uuid,
    pub min_weight: Option<Decimal>,
    pub max_weight: Option<Decimal>,
}

/// One scale-eligible participant: checked in OK and inspection approved,
/// with any readings taken so far and the class band for display.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeightBoardEntryResponse {
    pub start_number: i32,
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub class_id: Uuid,
    pub class_name: String,
    pub limit: Option<WeightLimitResponse>,
    pub readings: Vec<WeightControlResponse>,
}

fn validate_heat(heat: &str) -> Result<(), validator::ValidationError> {
    let valid = !heat.is_empty()
        && heat.len() <= 64
        && heat
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');

    if valid {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_heat"))
    }
}

fn validate_result(result: &str) -> Result<(), validator::ValidationError> {
    const VALID_RESULTS: &[&str] = &["PASS", "UNDERWEIGHT", "OVERWEIGHT", "FAIL"];

    if VALID_RESULTS.contains(&result) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_result"))
    }
}

impl From<WeightControl> for WeightControlResponse {
    fn from(control: WeightControl) -> Self {
        Self {
            control_id: control.control_id,
            event_id: control.event_id,
            start_number: control.start_number,
            heat: control.heat,
            class_id: control.class_id,
            measured_weight: control.measured_weight,
            result: control.result,
            notes: control.notes,
            controller_id: control.controller_id,
            recorded_at: control.recorded_at,
        }
    }
}

impl From<WeightLimit> for WeightLimitResponse {
    fn from(limit: WeightLimit) -> Self {
        Self {
            limit_id: limit.limit_id,
            event_id: limit.event_id,
            class_id: limit.class_id,
            min_weight: limit.min_weight,
            max_weight: limit.max_weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heat_labels() {
        assert!(validate_heat("TRAINING").is_ok());
        assert!(validate_heat("HEAT_1").is_ok());
        assert!(validate_heat("").is_err());
        assert!(validate_heat("heat 1").is_err());
    }
}
