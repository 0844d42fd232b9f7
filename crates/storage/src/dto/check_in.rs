use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::CheckIn;
use crate::services::check_ins::CheckInSummary;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CheckInRequest {
    /// Athlete being processed.
    pub user_id: Uuid,

    #[validate(custom(function = "validate_outcome"))]
    pub outcome: String,

    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckInResponse {
    pub check_in_id: Uuid,
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub outcome: String,
    pub notes: Option<String>,
    pub recorded_by: Uuid,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckInSummaryResponse {
    pub total: i64,
    pub checked_in: i64,
    pub issues: i64,
    pub dns: i64,
    pub pending: i64,
}

fn validate_outcome(outcome: &str) -> Result<(), validator::ValidationError> {
    const VALID_OUTCOMES: &[&str] = &["OK", "NOT_OK", "DNS"];

    if VALID_OUTCOMES.contains(&outcome) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_outcome"))
    }
}

impl From<CheckIn> for CheckInResponse {
    fn from(check_in: CheckIn) -> Self {
        Self {
            check_in_id: check_in.check_in_id,
            event_id: check_in.event_id,
            user_id: check_in.user_id,
            outcome: check_in.outcome,
            notes: check_in.notes,
            recorded_by: check_in.recorded_by,
            recorded_at: check_in.recorded_at,
        }
    }
}

impl From<CheckInSummary> for CheckInSummaryResponse {
    fn from(summary: CheckInSummary) -> Self {
        Self {
            total: summary.total,
            checked_in: summary.checked_in,
            issues: summary.issues,
            dns: summary.dns,
            pending: summary.pending,
        }
    }
}
