use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;

/// One non-cancelled entry joined with its check-in and latest
/// inspection, raw material for the readiness projection.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StartListRow {
    pub start_number: i32,
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub class_name: String,
    pub check_in_outcome: Option<String>,
    pub inspection_status: Option<String>,
}

/// Repository for the start-list projection
pub struct StartListRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> StartListRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn rows(&self, event_id: Uuid) -> Result<Vec<StartListRow>> {
        let rows = sqlx::query_as::<_, StartListRow>(
            "SELECT r.start_number, r.user_id, u.first_name, u.last_name, \
                    c.name AS class_name, \
                    ci.outcome AS check_in_outcome, \
                    ti.status AS inspection_status \
             FROM registrations r \
             JOIN users u ON u.user_id = r.user_id \
             JOIN event_classes c ON c.class_id = r.class_id \
             LEFT JOIN check_ins ci ON ci.event_id = r.event_id AND ci.user_id = r.user_id \
             LEFT JOIN technical_inspections ti ON ti.event_id = r.event_id \
                AND ti.start_number = r.start_number \
             WHERE r.event_id = $1 AND r.status <> 'CANCELLED' \
             ORDER BY r.start_number",
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
