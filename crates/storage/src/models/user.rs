use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::StorageError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub user_id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub club_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn role(&self) -> Result<Role, StorageError> {
        self.role.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Superadmin,
    ClubAdmin,
    Athlete,
    FederationAdmin,
    TechnicalInspector,
    WeightController,
    RaceOfficial,
}

impl Role {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Superadmin => "SUPERADMIN",
            Self::ClubAdmin => "CLUBADMIN",
            Self::Athlete => "ATHLETE",
            Self::FederationAdmin => "FEDERATION_ADMIN",
            Self::TechnicalInspector => "TECHNICAL_INSPECTOR",
            Self::WeightController => "WEIGHT_CONTROLLER",
            Self::RaceOfficial => "RACE_OFFICIAL",
        }
    }
}

impl FromStr for Role {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUPERADMIN" => Ok(Self::Superadmin),
            "CLUBADMIN" => Ok(Self::ClubAdmin),
            "ATHLETE" => Ok(Self::Athlete),
            "FEDERATION_ADMIN" => Ok(Self::FederationAdmin),
            "TECHNICAL_INSPECTOR" => Ok(Self::TechnicalInspector),
            "WEIGHT_CONTROLLER" => Ok(Self::WeightController),
            "RACE_OFFICIAL" => Ok(Self::RaceOfficial),
            _ => Err(StorageError::InvalidValue {
                field: "role",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_string_round_trip() {
        let roles = [
            Role::Superadmin,
            Role::ClubAdmin,
            Role::Athlete,
            Role::FederationAdmin,
            Role::TechnicalInspector,
            Role::WeightController,
            Role::RaceOfficial,
        ];

        for role in roles {
            let parsed: Role = role.as_str().parse().expect("round trip");
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_invalid_role_string() {
        assert!("admin".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }
}
