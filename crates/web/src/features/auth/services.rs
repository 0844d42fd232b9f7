use storage::dto::auth::{LoginRequest, RegisterRequest};
use storage::models::{Role, User};
use storage::repository::club::ClubRepository;
use storage::repository::user::UserRepository;

use crate::auth::{CurrentUser, password};
use crate::error::{WebError, WebResult};
use crate::state::AppState;

/// Creates an athlete account, or founds a club with this account as its
/// admin when a club payload is supplied.
pub async fn register(state: &AppState, req: &RegisterRequest) -> WebResult<User> {
    password::validate_password_strength(&req.password)?;
    let password_hash = password::hash_password(&req.password)?;

    match &req.club {
        Some(club) => {
            let repo = ClubRepository::new(state.db.pool());
            let (_, admin) = repo
                .create_with_admin(
                    club,
                    &req.email,
                    &password_hash,
                    &req.first_name,
                    &req.last_name,
                )
                .await?;
            Ok(admin)
        }
        None => {
            let repo = UserRepository::new(state.db.pool());
            let user = repo
                .create(
                    &req.email,
                    &password_hash,
                    &req.first_name,
                    &req.last_name,
                    Role::Athlete.as_str(),
                    None,
                )
                .await?;
            Ok(user)
        }
    }
}

/// Verifies credentials and mints a server-side session. Credential
/// failures are indistinguishable from unknown accounts.
pub async fn login(state: &AppState, req: &LoginRequest) -> WebResult<(String, User)> {
    let repo = UserRepository::new(state.db.pool());

    let user = repo
        .find_by_email(&req.email)
        .await?
        .ok_or(WebError::Unauthorized)?;

    if !password::verify_password(&req.password, &user.password_hash)? {
        tracing::warn!("Failed login attempt for {}", req.email);
        return Err(WebError::Unauthorized);
    }

    let role = user.role()?;
    let token = state.sessions.create(user.user_id, role, user.club_id).await;

    Ok((token, user))
}

pub async fn logout(state: &AppState, user: &CurrentUser) {
    state.sessions.remove(&user.token).await;
}

pub async fn current_account(state: &AppState, user: &CurrentUser) -> WebResult<User> {
    let repo = UserRepository::new(state.db.pool());
    Ok(repo.find_by_id(user.user_id).await?)
}
