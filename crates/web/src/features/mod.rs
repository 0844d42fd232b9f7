pub mod auth;
pub mod check_in;
pub mod classes;
pub mod events;
pub mod inspections;
pub mod registrations;
pub mod sse;
pub mod start_list;
pub mod vehicles;
pub mod weight;

use axum::Router;

use crate::state::AppState;

pub fn api_router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::routes::routes())
        .nest("/events", events::routes::routes())
        .nest("/registrations", registrations::routes::registration_routes())
        .nest("/vehicles", vehicles::routes::routes())
        .nest("/technical-inspections", inspections::routes::routes())
        .nest("/classes", classes::routes::global_routes())
        .nest("/clubs", classes::routes::club_routes())
}
