use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::StorageError;

/// Weight band for one (event, class) pair. Informational: the recorded
/// result stays with the controller, the band is surfaced for display
/// and reports.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WeightLimit {
    pub limit_id: Uuid,
    pub event_id: Uuid,
    pub class_id: Uuid,
    pub min_weight: Option<Decimal>,
    pub max_weight: Option<Decimal>,
}

/// One reading per (event, start number, heat), so the same car can be
/// weighed independently in TRAINING and each race heat.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WeightControl {
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightResult {
    Pass,
    Underweight,
    Overweight,
    Fail,
}

impl WeightResult {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Underweight => "UNDERWEIGHT",
            Self::Overweight => "OVERWEIGHT",
            Self::Fail => "FAIL",
        }
    }
}

impl FromStr for WeightResult {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PASS" => Ok(Self::Pass),
            "UNDERWEIGHT" => Ok(Self::Underweight),
            "OVERWEIGHT" => Ok(Self::Overweight),
            "FAIL" => Ok(Self::Fail),
            _ => Err(StorageError::InvalidValue {
                field: "weight result",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_string_round_trip() {
        for result in [
            WeightResult::Pass,
            WeightResult::Underweight,
            WeightResult::Overweight,
            WeightResult::Fail,
        ] {
            let parsed: WeightResult = result.as_str().parse().expect("round trip");
            assert_eq!(result, parsed);
        }
    }

    #[test]
    fn test_invalid_result_string() {
        assert!("pass".parse::<WeightResult>().is_err());
        assert!("OVER".parse::<WeightResult>().is_err());
    }
}
