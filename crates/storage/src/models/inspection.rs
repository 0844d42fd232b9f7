use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::StorageError;

/// One inspection record per (event, start number). Re-inspection
/// overwrites status and notes for that key; history across events is
/// preserved because each event gets its own row, matched later by
/// chassis number or license plate.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TechnicalInspection {
    pub inspection_id: Uuid,
    pub event_id: Uuid,
    pub club_id: Uuid,
    pub start_number: i32,
    pub chassis_number: Option<String>,
    pub license_plate: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub status: String,
    pub notes: Option<String>,
    pub inspector_id: Uuid,
    pub inspected_at: DateTime<Utc>,
}

impl TechnicalInspection {
    pub fn inspection_status(&self) -> Result<InspectionStatus, StorageError> {
        self.status.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectionStatus {
    Pending,
    Approved,
    Conditional,
    Rejected,
}

impl InspectionStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Conditional => "CONDITIONAL",
            Self::Rejected => "REJECTED",
        }
    }
}

impl FromStr for InspectionStatus {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            "CONDITIONAL" => Ok(Self::Conditional),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(StorageError::InvalidValue {
                field: "inspection status",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_string_round_trip() {
        for status in [
            InspectionStatus::Pending,
            InspectionStatus::Approved,
            InspectionStatus::Conditional,
            InspectionStatus::Rejected,
        ] {
            let parsed: InspectionStatus = status.as_str().parse().expect("round trip");
            assert_eq!(status, parsed);
        }
    }

    #[test]
    fn test_invalid_status_string() {
        assert!("approved".parse::<InspectionStatus>().is_err());
        assert!("PASS".parse::<InspectionStatus>().is_err());
    }
}
