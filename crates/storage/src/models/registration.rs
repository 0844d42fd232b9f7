use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::StorageError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Registration {
    pub registration_id: Uuid,
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub class_id: Uuid,
    pub start_number: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStatus {
    Confirmed,
    CheckedIn,
    Cancelled,
}

impl RegistrationStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "CONFIRMED",
            Self::CheckedIn => "CHECKED_IN",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Cancelled registrations release their start number and no longer
    /// count against event capacity.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

impl FromStr for RegistrationStatus {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CONFIRMED" => Ok(Self::Confirmed),
            "CHECKED_IN" => Ok(Self::CheckedIn),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(StorageError::InvalidValue {
                field: "registration status",
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
            RegistrationStatus::Confirmed,
            RegistrationStatus::CheckedIn,
            RegistrationStatus::Cancelled,
        ] {
            let parsed: RegistrationStatus = status.as_str().parse().expect("round trip");
            assert_eq!(status, parsed);
        }
    }

    #[test]
    fn test_active_statuses() {
        assert!(RegistrationStatus::Confirmed.is_active());
        assert!(RegistrationStatus::CheckedIn.is_active());
        assert!(!RegistrationStatus::Cancelled.is_active());
    }
}
