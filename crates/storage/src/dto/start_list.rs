use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StartListEntryResponse {
    pub start_number: i32,
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub class_name: String,
    pub check_in_outcome: Option<String>,
    pub inspection_status: Option<String>,
    pub readiness: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StartListStatsResponse {
    pub total: i64,
    pub ready: i64,
    pub pending_technical: i64,
    pub pending_checkin: i64,
    pub not_ready: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClassCountResponse {
    pub class_name: String,
    pub participants: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StartListResponse {
    pub event_id: Uuid,
    pub title: String,
    pub entries: Vec<StartListEntryResponse>,
    pub stats: StartListStatsResponse,
    pub class_counts: Vec<ClassCountResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ExportRequest {
    #[validate(custom(function = "validate_format"))]
    pub format: String,
}

fn validate_format(format: &str) -> Result<(), validator::ValidationError> {
    const VALID_FORMATS: &[&str] = &["csv", "html"];

    if VALID_FORMATS.contains(&format) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_format"))
    }
}
