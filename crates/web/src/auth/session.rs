use std::collections::HashMap;
use std::sync::Arc;
use storage::models::Role;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Server-side identity record behind an opaque token. Role and club are
/// resolved here, never from anything the client sends.
#[derive(Clone, Copy, Debug)]
pub struct Session {
    pub user_id: Uuid,
    pub role: Role,
    pub club_id: Option<Uuid>,
}

#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Mints a fresh opaque token for the given identity.
    pub async fn create(&self, user_id: Uuid, role: Role, club_id: Option<Uuid>) -> String {
        let token = Uuid::new_v4().to_string();
        let session = Session {
            user_id,
            role,
            club_id,
        };

        let mut sessions = self.sessions.write().await;
        sessions.insert(token.clone(), session);
        token
    }

    pub async fn get(&self, token: &str) -> Option<Session> {
        let sessions = self.sessions.read().await;
        sessions.get(token).copied()
    }

    pub async fn remove(&self, token: &str) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_resolve_session() {
        let store = SessionStore::new();
        let user_id = Uuid::new_v4();
        let club_id = Uuid::new_v4();

        let token = store.create(user_id, Role::ClubAdmin, Some(club_id)).await;
        let session = store.get(&token).await.expect("session");

        assert_eq!(session.user_id, user_id);
        assert_eq!(session.role, Role::ClubAdmin);
        assert_eq!(session.club_id, Some(club_id));
    }

    #[tokio::test]
    async fn test_unknown_token_resolves_to_none() {
        let store = SessionStore::new();
        assert!(store.get("no-such-token").await.is_none());
    }

    #[tokio::test]
    async fn test_remove_invalidates_token() {
        let store = SessionStore::new();
        let token = store.create(Uuid::new_v4(), Role::Athlete, None).await;

        store.remove(&token).await;
        assert!(store.get(&token).await.is_none());
    }

    #[tokio::test]
    async fn test_tokens_are_unique_per_login() {
        let store = SessionStore::new();
        let user_id = Uuid::new_v4();

        let first = store.create(user_id, Role::Athlete, None).await;
        let second = store.create(user_id, Role::Athlete, None).await;
        assert_ne!(first, second);
    }
}
