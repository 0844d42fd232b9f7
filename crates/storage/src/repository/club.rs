use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::auth::FoundClubRequest;
use crate::error::{Result, StorageError};
use crate::models::{Club, User};

const CLUB_COLUMNS: &str = "club_id, name, city, country, created_at";

/// Repository for Club database operations
pub struct ClubRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ClubRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Club> {
        let club = sqlx::query_as::<_, Club>(&format!(
            "SELECT {CLUB_COLUMNS} FROM clubs WHERE club_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(club)
    }

    /// Founds a new club together with its admin account. Both rows are
    /// created in one transaction.
    pub async fn create_with_admin(
        &self,
        club: &FoundClubRequest,
        email: &str,
        password_hash: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<(Club, User)> {
        let mut tx = self.pool.begin().await?;

        let created_club = sqlx::query_as::<_, Club>(&format!(
            "INSERT INTO clubs (name, city, country) VALUES ($1, $2, $3) \
             RETURNING {CLUB_COLUMNS}"
        ))
        .bind(&club.name)
        .bind(&club.city)
        .bind(&club.country)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| StorageError::from(e).or_conflict("Club name already exists"))?;

        let admin = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password_hash, first_name, last_name, role, club_id) \
             VALUES ($1, $2, $3, $4, 'CLUBADMIN', $5) \
             RETURNING user_id, email, password_hash, first_name, last_name, role, club_id, created_at",
        )
        .bind(email)
        .bind(password_hash)
        .bind(first_name)
        .bind(last_name)
        .bind(created_club.club_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| StorageError::from(e).or_conflict("Email already registered"))?;

        tx.commit().await?;

        Ok((created_club, admin))
    }
}
