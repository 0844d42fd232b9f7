use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::StorageError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
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

impl Event {
    /// Parses the persisted status column into the lifecycle type.
    pub fn lifecycle_status(&self) -> Result<EventStatus, StorageError> {
        self.status.parse()
    }

    /// True if `at` falls inside the registration window. A missing bound
    /// leaves that side of the window open.
    pub fn registration_open_at(&self, at: DateTime<Utc>) -> bool {
        if let Some(start) = self.registration_start
            && at < start
        {
            return false;
        }
        if let Some(end) = self.registration_end
            && at > end
        {
            return false;
        }
        true
    }
}

/// Event lifecycle states.
///
/// Transitions are actor-initiated only and validated through
/// [`EventStatus::apply`]; the system never advances an event on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
    Published,
}

/// Actions that drive the event lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventAction {
    Submit,
    Approve,
    Reject,
    Publish,
    Edit,
    Delete,
}

impl EventStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Submitted => "SUBMITTED",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Published => "PUBLISHED",
        }
    }

    /// Validates `action` against this state and returns the state the
    /// event moves to. `Edit` and `Delete` leave the state unchanged; the
    /// caller performs the actual mutation once the guard passes.
    pub fn apply(self, action: EventAction) -> Result<EventStatus, StorageError> {
        let next = match action {
            EventAction::Submit => match self {
                Self::Draft | Self::Rejected => Some(Self::Submitted),
                _ => None,
            },
            EventAction::Approve => match self {
                Self::Submitted => Some(Self::Approved),
                _ => None,
            },
            EventAction::Reject => match self {
                Self::Submitted => Some(Self::Rejected),
                _ => None,
            },
            EventAction::Publish => match self {
                Self::Approved => Some(Self::Published),
                _ => None,
            },
            EventAction::Edit => match self {
                Self::Draft | Self::Rejected | Self::Approved => Some(self),
                _ => None,
            },
            EventAction::Delete => match self {
                Self::Draft | Self::Rejected => Some(self),
                _ => None,
            },
        };

        next.ok_or(StorageError::InvalidTransition {
            action: action.as_str(),
            from: self.as_str().to_string(),
            required: action.required_states(),
        })
    }
}

impl EventAction {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::Publish => "publish",
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }

    /// Source states from which this action is permitted, for error messages.
    #[must_use]
    pub const fn required_states(&self) -> &'static str {
        match self {
            Self::Submit | Self::Delete => "DRAFT or REJECTED",
            Self::Approve | Self::Reject => "SUBMITTED",
            Self::Publish => "APPROVED",
            Self::Edit => "DRAFT, REJECTED or APPROVED",
        }
    }
}

impl FromStr for EventStatus {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(Self::Draft),
            "SUBMITTED" => Ok(Self::Submitted),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            "PUBLISHED" => Ok(Self::Published),
            _ => Err(StorageError::InvalidValue {
                field: "event status",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const ALL_STATUSES: [EventStatus; 5] = [
        EventStatus::Draft,
        EventStatus::Submitted,
        EventStatus::Approved,
        EventStatus::Rejected,
        EventStatus::Published,
    ];

    #[test]
    fn test_status_string_round_trip() {
        for status in ALL_STATUSES {
            let parsed: EventStatus = status.as_str().parse().expect("round trip");
            assert_eq!(status, parsed);
        }
    }

    #[test]
    fn test_invalid_status_string() {
        assert!("draft".parse::<EventStatus>().is_err());
        assert!("CANCELLED".parse::<EventStatus>().is_err());
    }

    #[test]
    fn test_submit_from_draft_and_rejected() {
        assert_eq!(
            EventStatus::Draft.apply(EventAction::Submit).unwrap(),
            EventStatus::Submitted
        );
        assert_eq!(
            EventStatus::Rejected.apply(EventAction::Submit).unwrap(),
            EventStatus::Submitted
        );
    }

    #[test]
    fn test_submit_rejected_elsewhere() {
        for status in [
            EventStatus::Submitted,
            EventStatus::Approved,
            EventStatus::Published,
        ] {
            assert!(status.apply(EventAction::Submit).is_err());
        }
    }

    #[test]
    fn test_review_only_from_submitted() {
        assert_eq!(
            EventStatus::Submitted.apply(EventAction::Approve).unwrap(),
            EventStatus::Approved
        );
        assert_eq!(
            EventStatus::Submitted.apply(EventAction::Reject).unwrap(),
            EventStatus::Rejected
        );

        for status in [
            EventStatus::Draft,
            EventStatus::Approved,
            EventStatus::Rejected,
            EventStatus::Published,
        ] {
            assert!(status.apply(EventAction::Approve).is_err());
            assert!(status.apply(EventAction::Reject).is_err());
        }
    }

    #[test]
    fn test_approve_from_draft_names_required_state() {
        let err = EventStatus::Draft.apply(EventAction::Approve).unwrap_err();
        match err {
            StorageError::InvalidTransition {
                action,
                from,
                required,
            } => {
                assert_eq!(action, "approve");
                assert_eq!(from, "DRAFT");
                assert_eq!(required, "SUBMITTED");
            }
            other => panic!("expected InvalidTransition, got {other:?}"),
        }
    }

    #[test]
    fn test_publish_only_from_approved() {
        assert_eq!(
            EventStatus::Approved.apply(EventAction::Publish).unwrap(),
            EventStatus::Published
        );

        for status in [
            EventStatus::Draft,
            EventStatus::Submitted,
            EventStatus::Rejected,
            EventStatus::Published,
        ] {
            assert!(status.apply(EventAction::Publish).is_err());
        }
    }

    #[test]
    fn test_edit_permitted_states() {
        assert!(EventStatus::Draft.apply(EventAction::Edit).is_ok());
        assert!(EventStatus::Rejected.apply(EventAction::Edit).is_ok());
        assert!(EventStatus::Approved.apply(EventAction::Edit).is_ok());
        assert!(EventStatus::Submitted.apply(EventAction::Edit).is_err());
        assert!(EventStatus::Published.apply(EventAction::Edit).is_err());
    }

    #[test]
    fn test_delete_permitted_states() {
        assert!(EventStatus::Draft.apply(EventAction::Delete).is_ok());
        assert!(EventStatus::Rejected.apply(EventAction::Delete).is_ok());
        assert!(EventStatus::Submitted.apply(EventAction::Delete).is_err());
        assert!(EventStatus::Approved.apply(EventAction::Delete).is_err());
        assert!(EventStatus::Published.apply(EventAction::Delete).is_err());
    }

    fn event_with_window(
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Event {
        Event {
            event_id: Uuid::new_v4(),
            club_id: Uuid::new_v4(),
            title: String::from("Spring Cup"),
            location: None,
            start_date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 5, 2).unwrap(),
            status: String::from("PUBLISHED"),
            max_participants: 0,
            registration_start: start,
            registration_end: end,
            requires_vehicle: false,
            submitted_at: None,
            reviewed_at: None,
            reviewed_by: None,
            rejection_reason: None,
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_registration_window_bounds() {
        let start = Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 4, 30, 0, 0, 0).unwrap();
        let event = event_with_window(Some(start), Some(end));

        let before = Utc.with_ymd_and_hms(2026, 3, 31, 23, 0, 0).unwrap();
        let inside = Utc.with_ymd_and_hms(2026, 4, 15, 12, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).unwrap();

        assert!(!event.registration_open_at(before));
        assert!(event.registration_open_at(inside));
        assert!(event.registration_open_at(start));
        assert!(event.registration_open_at(end));
        assert!(!event.registration_open_at(after));
    }

    #[test]
    fn test_registration_window_open_bounds() {
        let anytime = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        assert!(event_with_window(None, None).registration_open_at(anytime));

        let end = Utc.with_ymd_and_hms(2026, 4, 30, 0, 0, 0).unwrap();
        let event = event_with_window(None, Some(end));
        assert!(event.registration_open_at(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()));
        assert!(!event.registration_open_at(anytime));
    }
}
