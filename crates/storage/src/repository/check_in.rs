use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::CheckIn;

const CHECK_IN_COLUMNS: &str =
    "check_in_id, event_id, user_id, outcome, notes, recorded_by, recorded_at";

/// Repository for CheckIn database operations
pub struct CheckInRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CheckInRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Upsert keyed by (event, user): re-processing a participant
    /// overwrites the earlier outcome.
    pub async fn upsert(
        &self,
        event_id: Uuid,
        user_id: Uuid,
        outcome: &str,
        notes: Option<&str>,
        recorded_by: Uuid,
    ) -> Result<CheckIn> {
        let check_in = sqlx::query_as::<_, CheckIn>(&format!(
            "INSERT INTO check_ins (event_id, user_id, outcome, notes, recorded_by) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (event_id, user_id) DO UPDATE SET \
                outcome = EXCLUDED.outcome, \
                notes = EXCLUDED.notes, \
                recorded_by = EXCLUDED.recorded_by, \
                recorded_at = now() \
             RETURNING {CHECK_IN_COLUMNS}"
        ))
        .bind(event_id)
        .bind(user_id)
        .bind(outcome)
        .bind(notes)
        .bind(recorded_by)
        .fetch_one(self.pool)
        .await?;

        Ok(check_in)
    }

    pub async fn list_for_event(&self, event_id: Uuid) -> Result<Vec<CheckIn>> {
        let check_ins = sqlx::query_as::<_, CheckIn>(&format!(
            "SELECT {CHECK_IN_COLUMNS} FROM check_ins WHERE event_id = $1 \
             ORDER BY recorded_at"
        ))
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(check_ins)
    }

    /// Recorded outcomes for the event's active registrations, for the
    /// dashboard summary.
    pub async fn outcomes_for_event(&self, event_id: Uuid) -> Result<Vec<String>> {
        let outcomes = sqlx::query_scalar::<_, String>(
            "SELECT ci.outcome FROM check_ins ci \
             JOIN registrations r ON r.event_id = ci.event_id AND r.user_id = ci.user_id \
             WHERE ci.event_id = $1 AND r.status <> 'CANCELLED'",
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(outcomes)
    }
}
