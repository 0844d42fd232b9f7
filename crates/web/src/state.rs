use storage::Database;

use crate::auth::session::SessionStore;
use crate::notify::Notifier;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub sessions: SessionStore,
    pub notifier: Notifier,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            sessions: SessionStore::new(),
            notifier: Notifier::new(256),
        }
    }
}
