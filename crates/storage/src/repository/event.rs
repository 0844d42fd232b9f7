use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::event::{CreateEventRequest, UpdateEventRequest};
use crate::error::{Result, StorageError};
use crate::models::Event;

const EVENT_COLUMNS: &str = "event_id, club_id, title, location, start_date, end_date, status, \
     max_participants, registration_start, registration_end, requires_vehicle, \
     submitted_at, reviewed_at, reviewed_by, rejection_reason, created_at";

/// Repository for Event database operations
pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY start_date DESC, created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    pub async fn list_published(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE status = 'PUBLISHED' \
             ORDER BY start_date DESC, created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    /// Everything the club owns plus other clubs' published events.
    pub async fn list_for_club(&self, club_id: Uuid) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE club_id = $1 OR status = 'PUBLISHED' \
             ORDER BY start_date DESC, created_at DESC"
        ))
        .bind(club_id)
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    /// Events waiting for federation review.
    pub async fn list_submitted(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE status = 'SUBMITTED' \
             ORDER BY submitted_at ASC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE event_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    pub async fn create(&self, club_id: Uuid, req: &CreateEventRequest) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "INSERT INTO events (club_id, title, location, start_date, end_date, \
             max_participants, registration_start, registration_end, requires_vehicle) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {EVENT_COLUMNS}"
        ))
        .bind(club_id)
        .bind(&req.title)
        .bind(&req.location)
        .bind(req.start_date)
        .bind(req.end_date)
        .bind(req.max_participants)
        .bind(req.registration_start)
        .bind(req.registration_end)
        .bind(req.requires_vehicle)
        .fetch_one(self.pool)
        .await?;

        Ok(event)
    }

    /// Applies an edit on top of the existing row; omitted fields keep
    /// their current value.
    pub async fn update(
        &self,
        id: Uuid,
        existing: &Event,
        req: &UpdateEventRequest,
    ) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "UPDATE events SET \
                title = $2, \
                location = $3, \
                start_date = $4, \
                end_date = $5, \
                max_participants = $6, \
                registration_start = $7, \
                registration_end = $8, \
                requires_vehicle = $9 \
             WHERE event_id = $1 \
             RETURNING {EVENT_COLUMNS}"
        ))
        .bind(id)
        .bind(req.title.as_ref().unwrap_or(&existing.title))
        .bind(req.location.clone().or_else(|| existing.location.clone()))
        .bind(req.start_date.unwrap_or(existing.start_date))
        .bind(req.end_date.unwrap_or(existing.end_date))
        .bind(req.max_participants.unwrap_or(existing.max_participants))
        .bind(req.registration_start.or(existing.registration_start))
        .bind(req.registration_end.or(existing.registration_end))
        .bind(req.requires_vehicle.unwrap_or(existing.requires_vehicle))
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    /// Moves the event to SUBMITTED and clears any previous review.
    pub async fn mark_submitted(&self, id: Uuid) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "UPDATE events SET \
                status = 'SUBMITTED', \
                submitted_at = now(), \
                reviewed_at = NULL, \
                reviewed_by = NULL, \
                rejection_reason = NULL \
             WHERE event_id = $1 \
             RETURNING {EVENT_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    /// Records the federation verdict. `status` is APPROVED or REJECTED;
    /// `reason` is stored only for rejections.
    pub async fn mark_reviewed(
        &self,
        id: Uuid,
        status: &str,
        reviewer_id: Uuid,
        reason: Option<&str>,
    ) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "UPDATE events SET \
                status = $2, \
                reviewed_at = now(), \
                reviewed_by = $3, \
                rejection_reason = $4 \
             WHERE event_id = $1 \
             RETURNING {EVENT_COLUMNS}"
        ))
        .bind(id)
        .bind(status)
        .bind(reviewer_id)
        .bind(reason)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    pub async fn mark_published(&self, id: Uuid) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "UPDATE events SET status = 'PUBLISHED' WHERE event_id = $1 \
             RETURNING {EVENT_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM events WHERE event_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
