pub mod password;
pub mod session;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use storage::models::Role;
use uuid::Uuid;

use crate::error::WebError;
use crate::state::AppState;

/// Authenticated caller, resolved from the session store. Carries the
/// raw token so logout can invalidate it.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: Uuid,
    pub role: Role,
    pub club_id: Option<Uuid>,
    pub token: String,
}

impl CurrentUser {
    pub fn require_role(&self, allowed: &[Role]) -> Result<(), WebError> {
        if allowed.contains(&self.role) {
            return Ok(());
        }

        let roles: Vec<&str> = allowed.iter().map(Role::as_str).collect();
        Err(WebError::Forbidden(format!(
            "Requires one of the roles: {}",
            roles.join(", ")
        )))
    }

    /// Club admins act only on their own club; superadmins pass.
    pub fn require_club_admin_of(&self, club_id: Uuid) -> Result<(), WebError> {
        match self.role {
            Role::Superadmin => Ok(()),
            Role::ClubAdmin if self.club_id == Some(club_id) => Ok(()),
            _ => Err(WebError::Forbidden(
                "Only the owning club's admin may perform this action".to_string(),
            )),
        }
    }

    pub fn require_federation_reviewer(&self) -> Result<(), WebError> {
        self.require_role(&[Role::FederationAdmin, Role::Superadmin])
    }

    /// Staff-level read access to an event's processing data: any staff
    /// role, or the admin of the owning club.
    pub fn require_staff_for(&self, club_id: Uuid) -> Result<(), WebError> {
        match self.role {
            Role::Superadmin
            | Role::FederationAdmin
            | Role::RaceOfficial
            | Role::TechnicalInspector
            | Role::WeightController => Ok(()),
            Role::ClubAdmin if self.club_id == Some(club_id) => Ok(()),
            _ => Err(WebError::Forbidden(
                "Requires a staff role for this event".to_string(),
            )),
        }
    }
}

fn bearer_token(parts: &Parts) -> Option<String> {
    let value = parts.headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    value.strip_prefix("Bearer ").map(str::to_string)
}

fn cookie_token(parts: &Parts) -> Option<String> {
    let cookies = parts.headers.get(header::COOKIE)?.to_str().ok()?;
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix("session=").map(str::to_string))
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .or_else(|| cookie_token(parts))
            .ok_or(WebError::Unauthorized)?;

        let session = state
            .sessions
            .get(&token)
            .await
            .ok_or(WebError::Unauthorized)?;

        Ok(CurrentUser {
            user_id: session.user_id,
            role: session.role,
            club_id: session.club_id,
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role: Role, club_id: Option<Uuid>) -> CurrentUser {
        CurrentUser {
            user_id: Uuid::new_v4(),
            role,
            club_id,
            token: String::from("test-token"),
        }
    }

    #[test]
    fn test_require_role() {
        let inspector = user_with_role(Role::TechnicalInspector, None);
        assert!(inspector.require_role(&[Role::TechnicalInspector]).is_ok());
        assert!(inspector.require_role(&[Role::WeightController]).is_err());
    }

    #[test]
    fn test_club_admin_scope() {
        let club = Uuid::new_v4();
        let other_club = Uuid::new_v4();

        let admin = user_with_role(Role::ClubAdmin, Some(club));
        assert!(admin.require_club_admin_of(club).is_ok());
        assert!(admin.require_club_admin_of(other_club).is_err());

        let athlete = user_with_role(Role::Athlete, Some(club));
        assert!(athlete.require_club_admin_of(club).is_err());
    }

    #[test]
    fn test_superadmin_bypasses_club_scope() {
        let superadmin = user_with_role(Role::Superadmin, None);
        assert!(superadmin.require_club_admin_of(Uuid::new_v4()).is_ok());
    }

    #[test]
    fn test_staff_access() {
        let club = Uuid::new_v4();

        assert!(user_with_role(Role::RaceOfficial, None).require_staff_for(club).is_ok());
        assert!(user_with_role(Role::WeightController, None).require_staff_for(club).is_ok());
        assert!(user_with_role(Role::ClubAdmin, Some(club)).require_staff_for(club).is_ok());
        assert!(
            user_with_role(Role::ClubAdmin, Some(Uuid::new_v4()))
                .require_staff_for(club)
                .is_err()
        );
        assert!(user_with_role(Role::Athlete, None).require_staff_for(club).is_err());
    }
}
