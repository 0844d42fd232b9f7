use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::inspection::InspectionRequest;
use crate::error::Result;
use crate::models::TechnicalInspection;

const INSPECTION_COLUMNS: &str = "inspection_id, event_id, club_id, start_number, \
     chassis_number, license_plate, make, model, year, status, notes, inspector_id, inspected_at";

/// Repository for TechnicalInspection database operations
pub struct InspectionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> InspectionRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Upsert keyed by (event, start number): re-inspection overwrites
    /// the prior status and notes for this event while leaving other
    /// events' rows as history.
    pub async fn upsert(
        &self,
        club_id: Uuid,
        inspector_id: Uuid,
        req: &InspectionRequest,
    ) -> Result<TechnicalInspection> {
        let inspection = sqlx::query_as::<_, TechnicalInspection>(&format!(
            "INSERT INTO technical_inspections (event_id, club_id, start_number, \
             chassis_number, license_plate, make, model, year, status, notes, inspector_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             ON CONFLICT (event_id, start_number) DO UPDATE SET \
                chassis_number = EXCLUDED.chassis_number, \
                license_plate = EXCLUDED.license_plate, \
                make = EXCLUDED.make, \
                model = EXCLUDED.model, \
                year = EXCLUDED.year, \
                status = EXCLUDED.status, \
                notes = EXCLUDED.notes, \
                inspector_id = EXCLUDED.inspector_id, \
                inspected_at = now() \
             RETURNING {INSPECTION_COLUMNS}"
        ))
        .bind(req.event_id)
        .bind(club_id)
        .bind(req.start_number)
        .bind(&req.chassis_number)
        .bind(&req.license_plate)
        .bind(&req.make)
        .bind(&req.model)
        .bind(req.year)
        .bind(&req.status)
        .bind(&req.notes)
        .bind(inspector_id)
        .fetch_one(self.pool)
        .await?;

        Ok(inspection)
    }

    pub async fn list_for_event(&self, event_id: Uuid) -> Result<Vec<TechnicalInspection>> {
        let inspections = sqlx::query_as::<_, TechnicalInspection>(&format!(
            "SELECT {INSPECTION_COLUMNS} FROM technical_inspections \
             WHERE event_id = $1 ORDER BY start_number"
        ))
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(inspections)
    }

    /// All rows for a chassis number, across events and clubs.
    pub async fn history_by_chassis(&self, chassis_number: &str) -> Result<Vec<TechnicalInspection>> {
        let inspections = sqlx::query_as::<_, TechnicalInspection>(&format!(
            "SELECT {INSPECTION_COLUMNS} FROM technical_inspections \
             WHERE chassis_number = $1 ORDER BY inspected_at DESC"
        ))
        .bind(chassis_number)
        .fetch_all(self.pool)
        .await?;

        Ok(inspections)
    }

    /// All rows for a license plate, across events and clubs.
    pub async fn history_by_plate(&self, license_plate: &str) -> Result<Vec<TechnicalInspection>> {
        let inspections = sqlx::query_as::<_, TechnicalInspection>(&format!(
            "SELECT {INSPECTION_COLUMNS} FROM technical_inspections \
             WHERE license_plate = $1 ORDER BY inspected_at DESC"
        ))
        .bind(license_plate)
        .fetch_all(self.pool)
        .await?;

        Ok(inspections)
    }
}
