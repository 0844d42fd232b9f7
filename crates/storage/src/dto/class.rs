use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{ClubClass, EventClass, GlobalClass};

/// One class definition: a name plus an optional weight band.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ClassSpec {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    pub min_weight: Option<Decimal>,

    pub max_weight: Option<Decimal>,
}

/// Replaces the full class set of an event: existing classes are removed
/// and the given set attached, no diffing.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ReplaceEventClassesRequest {
    #[validate(nested)]
    pub classes: Vec<ClassSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventClassResponse {
    pub class_id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub min_weight: Option<Decimal>,
    pub max_weight: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClubClassResponse {
    pub class_id: Uuid,
    pub club_id: Uuid,
    pub name: String,
    pub min_weight: Option<Decimal>,
    pub max_weight: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GlobalClassResponse {
    pub class_id: Uuid,
    pub name: String,
    pub min_weight: Option<Decimal>,
    pub max_weight: Option<Decimal>,
}

impl From<EventClass> for EventClassResponse {
    fn from(class: EventClass) -> Self {
        Self {
            class_id: class.class_id,
            event_id: class.event_id,
            name: class.name,
            min_weight: class.min_weight,
            max_weight: class.max_weight,
        }
    }
}

impl From<ClubClass> for ClubClassResponse {
    fn from(class: ClubClass) -> Self {
        Self {
            class_id: class.class_id,
            club_id: class.club_id,
            name: class.name,
            min_weight: class.min_weight,
            max_weight: class.max_weight,
        }
    }
}

impl From<GlobalClass> for GlobalClassResponse {
    fn from(class: GlobalClass) -> Self {
        Self {
            class_id: class.class_id,
            name: class.name,
            min_weight: class.min_weight,
            max_weight: class.max_weight,
        }
    }
}
