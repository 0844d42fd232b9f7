use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Event;

/// Request payload for creating a new event. Events always start in DRAFT.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Title must be between 1 and 255 characters"
    ))]
    pub title: String,

    #[validate(length(max = 255))]
    pub location: Option<String>,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,

    /// 0 means unlimited.
    #[validate(range(min = 0))]
    #[serde(default)]
    pub max_participants: i32,

    pub registration_start: Option<DateTime<Utc>>,

    pub registration_end: Option<DateTime<Utc>>,

    #[serde(default)]
    pub requires_vehicle: bool,
}

/// Request payload for editing an event. Only provided fields change.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,

    #[validate(length(max = 255))]
    pub location: Option<String>,

    pub start_date: Option<NaiveDate>,

    pub end_date: Option<NaiveDate>,

    #[validate(range(min = 0))]
    pub max_participants: Option<i32>,

    pub registration_start: Option<DateTime<Utc>>,

    pub registration_end: Option<DateTime<Utc>>,

    pub requires_vehicle: Option<bool>,
}

/// Federation review verdict for a submitted event.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ReviewRequest {
    #[validate(custom(function = "validate_decision"))]
    pub decision: String,

    /// Required when the decision is REJECT.
    #[validate(length(min = 1, max = 2000))]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    pub event_id: Uuid,
    pub club_id: Uuid,
    pub title: String,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    pub max_participants: i32,
    pub registration_start: Option<DateTime<Utc>>,
    pub registration_end: Option<DateTime<Utc>>,
    pub requires_vehicle: bool,
    pub submitted_at: Option<DateTime<Utc>>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewed_by: Option<Uuid>,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

fn validate_decision(decision: &str) -> Result<(), validator::ValidationError> {
    const VALID_DECISIONS: &[&str] = &["APPROVE", "REJECT"];

    if VALID_DECISIONS.contains(&decision) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_decision"))
    }
}

impl CreateEventRequest {
    /// Additional validation that requires multiple fields
    pub fn validate_dates(&self) -> Result<(), &'static str> {
        if self.end_date < self.start_date {
            return Err("End date must be on or after start date");
        }

        if let (Some(open), Some(close)) = (self.registration_start, self.registration_end)
            && close < open
        {
            return Err("Registration end must be on or after registration start");
        }

        Ok(())
    }
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            event_id: event.event_id,
            club_id: event.club_id,
            title: event.title,
            location: event.location,
            start_date: event.start_date,
            end_date: event.end_date,
            status: event.status,
            max_participants: event.max_participants,
            registration_start: event.registration_start,
            registration_end: event.registration_end,
            requires_vehicle: event.requires_vehicle,
            submitted_at: event.submitted_at,
            reviewed_at: event.reviewed_at,
            reviewed_by: event.reviewed_by,
            rejection_reason: event.rejection_reason,
            created_at: event.created_at,
        }
    }
}
