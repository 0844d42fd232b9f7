use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::handlers::{login, logout, me, register};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
}
