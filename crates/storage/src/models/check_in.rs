use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::StorageError;

/// One check-in record per (event, user), upserted as staff process the
/// participant. The outcome is a closed set; free-form remarks go in
/// `notes`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CheckIn {
    pub check_in_id: Uuid,
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub outcome: String,
    pub notes: Option<String>,
    pub recorded_by: Uuid,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckInOutcome {
    /// Participant present, no issues.
    Ok,
    /// Participant present with an issue to resolve.
    NotOk,
    /// Did not start.
    Dns,
}

impl CheckInOutcome {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::NotOk => "NOT_OK",
            Self::Dns => "DNS",
        }
    }
}

impl FromStr for CheckInOutcome {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OK" => Ok(Self::Ok),
            "NOT_OK" => Ok(Self::NotOk),
            "DNS" => Ok(Self::Dns),
            _ => Err(StorageError::InvalidValue {
                field: "check-in outcome",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_string_round_trip() {
        for outcome in [CheckInOutcome::Ok, CheckInOutcome::NotOk, CheckInOutcome::Dns] {
            let parsed: CheckInOutcome = outcome.as_str().parse().expect("round trip");
            assert_eq!(outcome, parsed);
        }
    }

    #[test]
    fn test_invalid_outcome_string() {
        assert!("ok".parse::<CheckInOutcome>().is_err());
        assert!("PRESENT".parse::<CheckInOutcome>().is_err());
    }
}
