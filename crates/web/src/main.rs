use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod auth;
mod config;
mod error;
mod features;
mod notify;
mod state;

use config::Config;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::auth::handlers::register,
        features::auth::handlers::login,
        features::auth::handlers::logout,
        features::auth::handlers::me,
        features::events::handlers::list_events,
        features::events::handlers::get_event,
        features::events::handlers::create_event,
        features::events::handlers::update_event,
        features::events::handlers::delete_event,
        features::events::handlers::submit_event,
        features::events::handlers::review_event,
        features::events::handlers::publish_event,
        features::events::handlers::list_classes,
        features::events::handlers::replace_classes,
        features::registrations::handlers::create_registration,
        features::registrations::handlers::list_for_event,
        features::registrations::handlers::cancel,
        features::vehicles::handlers::list_vehicles,
        features::vehicles::handlers::create_vehicle,
        features::vehicles::handlers::update_vehicle,
        features::vehicles::handlers::delete_vehicle,
        features::check_in::handlers::record_check_in,
        features::check_in::handlers::list_check_ins,
        features::check_in::handlers::check_in_summary,
        features::inspections::handlers::record_inspection,
        features::inspections::handlers::list_inspections,
        features::inspections::handlers::inspection_history,
        features::weight::handlers::weight_board,
        features::weight::handlers::record_weight,
        features::weight::handlers::list_weight_limits,
        features::weight::handlers::replace_weight_limits,
        features::start_list::handlers::get_start_list,
        features::start_list::handlers::export_start_list,
        features::sse::handlers::event_stream,
    ),
    components(
        schemas(
            storage::dto::auth::RegisterRequest,
            storage::dto::auth::FoundClubRequest,
            storage::dto::auth::LoginRequest,
            storage::dto::auth::UserResponse,
            storage::dto::auth::SessionResponse,
            storage::dto::event::CreateEventRequest,
            storage::dto::event::UpdateEventRequest,
            storage::dto::event::ReviewRequest,
            storage::dto::event::EventResponse,
            storage::dto::class::ClassSpec,
            storage::dto::class::ReplaceEventClassesRequest,
            storage::dto::class::EventClassResponse,
            storage::dto::class::ClubClassResponse,
            storage::dto::class::GlobalClassResponse,
            storage::dto::vehicle::CreateVehicleRequest,
            storage::dto::vehicle::UpdateVehicleRequest,
            storage::dto::vehicle::VehicleResponse,
            storage::dto::registration::CreateRegistrationRequest,
            storage::dto::registration::RegistrationResponse,
            storage::dto::registration::RegistrationVehicleResponse,
            storage::dto::registration::EventRegistrationResponse,
            storage::dto::check_in::CheckInRequest,
            storage::dto::check_in::CheckInResponse,
            storage::dto::check_in::CheckInSummaryResponse,
            storage::dto::inspection::InspectionRequest,
            storage::dto::inspection::InspectionResponse,
            storage::dto::inspection::StatusCountsResponse,
            storage::dto::inspection::InspectionHistoryResponse,
            storage::dto::weight::WeightControlRequest,
            storage::dto::weight::WeightControlResponse,
            storage::dto::weight::WeightLimitSpec,
            storage::dto::weight::ReplaceWeightLimitsRequest,
            storage::dto::weight::WeightLimitResponse,
            storage::dto::weight::WeightBoardEntryResponse,
            storage::dto::start_list::StartListEntryResponse,
            storage::dto::start_list::StartListStatsResponse,
            storage::dto::start_list::ClassCountResponse,
            storage::dto::start_list::StartListResponse,
            storage::dto::start_list::ExportRequest,
        )
    ),
    tags(
        (name = "auth", description = "Accounts and sessions"),
        (name = "events", description = "Event lifecycle: draft, review, publish"),
        (name = "registrations", description = "Athlete entries and vehicles per event"),
        (name = "vehicles", description = "Athlete garage"),
        (name = "check-ins", description = "Participant check-in processing"),
        (name = "technical-inspections", description = "Vehicle inspection processing and history"),
        (name = "weight-control", description = "Weight readings and per-class limits"),
        (name = "start-list", description = "Readiness projection and exports"),
        (name = "classes", description = "Class templates"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_token",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("Session token")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting event management API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let state = AppState::new(db);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", features::api_router())
        .layer(cors)
        .with_state(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
