use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::weight::{WeightControlRequest, WeightLimitSpec};
use crate::error::Result;
use crate::models::{WeightControl, WeightLimit};

const CONTROL_COLUMNS: &str = "control_id, event_id, start_number, heat, class_id, \
     measured_weight, result, notes, controller_id, recorded_at";

const LIMIT_COLUMNS: &str = "limit_id, event_id, class_id, min_weight, max_weight";

/// Scale-eligible participant: checked in OK with an approved inspection.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EligibleEntryRow {
    pub start_number: i32,
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub class_id: Uuid,
    pub class_name: String,
}

/// Repository for WeightControl and WeightLimit database operations
pub struct WeightRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WeightRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Upsert keyed by (event, start number, heat): each heat gets its
    /// own independent reading for the same car.
    pub async fn upsert_control(
        &self,
        event_id: Uuid,
        controller_id: Uuid,
        req: &WeightControlRequest,
    ) -> Result<WeightControl> {
        let control = sqlx::query_as::<_, WeightControl>(&format!(
            "INSERT INTO weight_controls (event_id, start_number, heat, class_id, \
             measured_weight, result, notes, controller_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             ON CONFLICT (event_id, start_number, heat) DO UPDATE SET \
                class_id = EXCLUDED.class_id, \
                measured_weight = EXCLUDED.measured_weight, \
                result = EXCLUDED.result, \
                notes = EXCLUDED.notes, \
                controller_id = EXCLUDED.controller_id, \
                recorded_at = now() \
             RETURNING {CONTROL_COLUMNS}"
        ))
        .bind(event_id)
        .bind(req.start_number)
        .bind(&req.heat)
        .bind(req.class_id)
        .bind(req.measured_weight)
        .bind(&req.result)
        .bind(&req.notes)
        .bind(controller_id)
        .fetch_one(self.pool)
        .await?;

        Ok(control)
    }

    pub async fn list_controls(&self, event_id: Uuid) -> Result<Vec<WeightControl>> {
        let controls = sqlx::query_as::<_, WeightControl>(&format!(
            "SELECT {CONTROL_COLUMNS} FROM weight_controls \
             WHERE event_id = $1 ORDER BY start_number, heat"
        ))
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(controls)
    }

    /// Participants cleared for the scale, by join: an OK check-in and an
    /// APPROVED inspection in this event. No derived flag is stored.
    pub async fn eligible_entries(&self, event_id: Uuid) -> Result<Vec<EligibleEntryRow>> {
        let entries = sqlx::query_as::<_, EligibleEntryRow>(
            "SELECT r.start_number, r.user_id, u.first_name, u.last_name, \
                    c.class_id, c.name AS class_name \
             FROM registrations r \
             JOIN users u ON u.user_id = r.user_id \
             JOIN event_classes c ON c.class_id = r.class_id \
             JOIN check_ins ci ON ci.event_id = r.event_id \
                AND ci.user_id = r.user_id AND ci.outcome = 'OK' \
             JOIN technical_inspections ti ON ti.event_id = r.event_id \
                AND ti.start_number = r.start_number AND ti.status = 'APPROVED' \
             WHERE r.event_id = $1 AND r.status <> 'CANCELLED' \
             ORDER BY r.start_number",
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    pub async fn is_eligible(&self, event_id: Uuid, start_number: i32) -> Result<bool> {
        let eligible = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS ( \
                SELECT 1 FROM registrations r \
                JOIN check_ins ci ON ci.event_id = r.event_id \
                   AND ci.user_id = r.user_id AND ci.outcome = 'OK' \
                JOIN technical_inspections ti ON ti.event_id = r.event_id \
                   AND ti.start_number = r.start_number AND ti.status = 'APPROVED' \
                WHERE r.event_id = $1 AND r.start_number = $2 AND r.status <> 'CANCELLED' \
             )",
        )
        .bind(event_id)
        .bind(start_number)
        .fetch_one(self.pool)
        .await?;

        Ok(eligible)
    }

    pub async fn list_limits(&self, event_id: Uuid) -> Result<Vec<WeightLimit>> {
        let limits = sqlx::query_as::<_, WeightLimit>(&format!(
            "SELECT {LIMIT_COLUMNS} FROM weight_limits WHERE event_id = $1"
        ))
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(limits)
    }

    /// Replaces the event's weight bands wholesale, in one transaction.
    pub async fn replace_limits(
        &self,
        event_id: Uuid,
        specs: &[WeightLimitSpec],
    ) -> Result<Vec<WeightLimit>> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM weight_limits WHERE event_id = $1")
            .bind(event_id)
            .execute(&mut *tx)
            .await?;

        let mut limits = Vec::with_capacity(specs.len());
        for spec in specs {
            let limit = sqlx::query_as::<_, WeightLimit>(&format!(
                "INSERT INTO weight_limits (event_id, class_id, min_weight, max_weight) \
                 VALUES ($1, $2, $3, $4) \
                 RETURNING {LIMIT_COLUMNS}"
            ))
            .bind(event_id)
            .bind(spec.class_id)
            .bind(spec.min_weight)
            .bind(spec.max_weight)
            .fetch_one(&mut *tx)
            .await?;
            limits.push(limit);
        }

        tx.commit().await?;

        Ok(limits)
    }
}
