use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// System-wide class template.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct GlobalClass {
    pub class_id: Uuid,
    pub name: String,
    pub min_weight: Option<Decimal>,
    pub max_weight: Option<Decimal>,
}

/// Per-club class template. Name unique within the club.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ClubClass {
    pub class_id: Uuid,
    pub club_id: Uuid,
    pub name: String,
    pub min_weight: Option<Decimal>,
    pub max_weight: Option<Decimal>,
}

/// Class attached to a single event. Name unique within the event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EventClass {
    pub class_id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub min_weight: Option<Decimal>,
    pub max_weight: Option<Decimal>,
}
