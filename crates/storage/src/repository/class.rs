use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::class::ClassSpec;
use crate::error::{Result, StorageError};
use crate::models::{ClubClass, EventClass, GlobalClass};

/// Repository for class templates and event class sets
pub struct ClassRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ClassRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_global(&self) -> Result<Vec<GlobalClass>> {
        let classes = sqlx::query_as::<_, GlobalClass>(
            "SELECT class_id, name, min_weight, max_weight FROM global_classes ORDER BY name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(classes)
    }

    pub async fn list_for_club(&self, club_id: Uuid) -> Result<Vec<ClubClass>> {
        let classes = sqlx::query_as::<_, ClubClass>(
            "SELECT class_id, club_id, name, min_weight, max_weight \
             FROM club_classes WHERE club_id = $1 ORDER BY name",
        )
        .bind(club_id)
        .fetch_all(self.pool)
        .await?;

        Ok(classes)
    }

    pub async fn create_club_class(&self, club_id: Uuid, spec: &ClassSpec) -> Result<ClubClass> {
        let class = sqlx::query_as::<_, ClubClass>(
            "INSERT INTO club_classes (club_id, name, min_weight, max_weight) \
             VALUES ($1, $2, $3, $4) \
             RETURNING class_id, club_id, name, min_weight, max_weight",
        )
        .bind(club_id)
        .bind(&spec.name)
        .bind(spec.min_weight)
        .bind(spec.max_weight)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).or_conflict("Class name already exists in this club"))?;

        Ok(class)
    }

    pub async fn list_for_event(&self, event_id: Uuid) -> Result<Vec<EventClass>> {
        let classes = sqlx::query_as::<_, EventClass>(
            "SELECT class_id, event_id, name, min_weight, max_weight \
             FROM event_classes WHERE event_id = $1 ORDER BY name",
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(classes)
    }

    pub async fn find_for_event(&self, event_id: Uuid, class_id: Uuid) -> Result<Option<EventClass>> {
        let class = sqlx::query_as::<_, EventClass>(
            "SELECT class_id, event_id, name, min_weight, max_weight \
             FROM event_classes WHERE event_id = $1 AND class_id = $2",
        )
        .bind(event_id)
        .bind(class_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(class)
    }

    /// Replaces the event's class set wholesale: drop everything, attach
    /// the given classes. Runs in one transaction; fails with a conflict
    /// if a dropped class is still referenced by registrations.
    pub async fn replace_for_event(
        &self,
        event_id: Uuid,
        specs: &[ClassSpec],
    ) -> Result<Vec<EventClass>> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM event_classes WHERE event_id = $1")
            .bind(event_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                let err = StorageError::from(e);
                if err.is_foreign_key_violation() {
                    StorageError::ConstraintViolation(
                        "Class is still referenced by registrations".to_string(),
                    )
                } else {
                    err
                }
            })?;

        let mut classes = Vec::with_capacity(specs.len());
        for spec in specs {
            let class = sqlx::query_as::<_, EventClass>(
                "INSERT INTO event_classes (event_id, name, min_weight, max_weight) \
                 VALUES ($1, $2, $3, $4) \
                 RETURNING class_id, event_id, name, min_weight, max_weight",
            )
            .bind(event_id)
            .bind(&spec.name)
            .bind(spec.min_weight)
            .bind(spec.max_weight)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                StorageError::from(e).or_conflict("Class name already exists for this event")
            })?;
            classes.push(class);
        }

        tx.commit().await?;

        Ok(classes)
    }
}
