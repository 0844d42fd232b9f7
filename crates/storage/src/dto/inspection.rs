use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::TechnicalInspection;
use crate::services::inspection_history::{InspectionHistory, StatusCounts};

/// Upsert payload for one inspection, keyed by (event, start number).
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct InspectionRequest {
    pub event_id: Uuid,

    #[validate(range(min = 1, message = "Start number must be positive"))]
    pub start_number: i32,

    #[validate(length(max = 255))]
    pub chassis_number: Option<String>,

    #[validate(length(max = 255))]
    pub license_plate: Option<String>,

    #[validate(length(max = 255))]
    pub make: Option<String>,

    #[validate(length(max = 255))]
    pub model: Option<String>,

    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,

    #[validate(custom(function = "validate_status"))]
    pub status: String,

    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct InspectionListQuery {
    pub event_id: Uuid,
}

/// History lookup by vehicle identity; at least one of the two must be
/// given.
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct InspectionHistoryQuery {
    pub chassis: Option<String>,
    pub plate: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InspectionResponse {
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

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusCountsResponse {
    pub pending: i64,
    pub approved: i64,
    pub conditional: i64,
    pub rejected: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InspectionHistoryResponse {
    pub latest: Option<InspectionResponse>,
    pub counts: StatusCountsResponse,
    /// True when any rejection was recorded within the last 365 days.
    pub critical: bool,
}

fn validate_status(status: &str) -> Result<(), validator::ValidationError> {
    const VALID_STATUSES: &[&str] = &["PENDING", "APPROVED", "CONDITIONAL", "REJECTED"];

    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_status"))
    }
}

impl From<TechnicalInspection> for InspectionResponse {
    fn from(inspection: TechnicalInspection) -> Self {
        Self {
            inspection_id: inspection.inspection_id,
            event_id: inspection.event_id,
            club_id: inspection.club_id,
            start_number: inspection.start_number,
            chassis_number: inspection.chassis_number,
            license_plate: inspection.license_plate,
            make: inspection.make,
            model: inspection.model,
            year: inspection.year,
            status: inspection.status,
            notes: inspection.notes,
            inspector_id: inspection.inspector_id,
            inspected_at: inspection.inspected_at,
        }
    }
}

impl From<StatusCounts> for StatusCountsResponse {
    fn from(counts: StatusCounts) -> Self {
        Self {
            pending: counts.pending,
            approved: counts.approved,
            conditional: counts.conditional,
            rejected: counts.rejected,
        }
    }
}

impl From<InspectionHistory> for InspectionHistoryResponse {
    fn from(history: InspectionHistory) -> Self {
        Self {
            latest: history.latest.map(InspectionResponse::from),
            counts: history.counts.into(),
            critical: history.critical,
        }
    }
}
