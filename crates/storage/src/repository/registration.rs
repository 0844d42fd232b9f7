use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::registration::EventRegistrationResponse;
use crate::error::{Result, StorageError};
use crate::models::{Registration, RegistrationVehicle};

const REGISTRATION_COLUMNS: &str =
    "registration_id, event_id, user_id, class_id, start_number, status, created_at";

const REGISTRATION_VEHICLE_COLUMNS: &str = "registration_vehicle_id, registration_id, event_id, \
     start_number, make, model, year, chassis_number, license_plate";

/// Vehicle snapshot entered alongside a new registration.
#[derive(Debug, Clone)]
pub struct NewRegistrationVehicle {
    pub start_number: i32,
    pub make: String,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub chassis_number: Option<String>,
    pub license_plate: Option<String>,
}

/// Repository for Registration database operations
pub struct RegistrationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RegistrationRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Registration> {
        let registration = sqlx::query_as::<_, Registration>(&format!(
            "SELECT {REGISTRATION_COLUMNS} FROM registrations WHERE registration_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(registration)
    }

    pub async fn find_active_for_user(
        &self,
        event_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Registration>> {
        let registration = sqlx::query_as::<_, Registration>(&format!(
            "SELECT {REGISTRATION_COLUMNS} FROM registrations \
             WHERE event_id = $1 AND user_id = $2 AND status <> 'CANCELLED'"
        ))
        .bind(event_id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(registration)
    }

    pub async fn count_active(&self, event_id: Uuid) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM registrations WHERE event_id = $1 AND status <> 'CANCELLED'",
        )
        .bind(event_id)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }

    /// Start numbers already in use in the event, across registrations
    /// and their entered vehicles.
    pub async fn taken_start_numbers(&self, event_id: Uuid) -> Result<Vec<i32>> {
        let numbers = sqlx::query_scalar::<_, i32>(
            "SELECT start_number FROM registrations \
             WHERE event_id = $1 AND status <> 'CANCELLED' \
             UNION \
             SELECT start_number FROM registration_vehicles WHERE event_id = $1",
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(numbers)
    }

    /// Creates the registration and its vehicle rows atomically. The
    /// partial unique indexes are the last line of defense against racing
    /// writers; their violations surface as conflicts here.
    pub async fn create_with_vehicles(
        &self,
        event_id: Uuid,
        user_id: Uuid,
        class_id: Uuid,
        start_number: i32,
        vehicles: &[NewRegistrationVehicle],
    ) -> Result<(Registration, Vec<RegistrationVehicle>)> {
        let mut tx = self.pool.begin().await?;

        let registration = sqlx::query_as::<_, Registration>(&format!(
            "INSERT INTO registrations (event_id, user_id, class_id, start_number) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {REGISTRATION_COLUMNS}"
        ))
        .bind(event_id)
        .bind(user_id)
        .bind(class_id)
        .bind(start_number)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_registration_conflict)?;

        let mut created = Vec::with_capacity(vehicles.len());
        for vehicle in vehicles {
            let row = sqlx::query_as::<_, RegistrationVehicle>(&format!(
                "INSERT INTO registration_vehicles (registration_id, event_id, start_number, \
                 make, model, year, chassis_number, license_plate) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
                 RETURNING {REGISTRATION_VEHICLE_COLUMNS}"
            ))
            .bind(registration.registration_id)
            .bind(event_id)
            .bind(vehicle.start_number)
            .bind(&vehicle.make)
            .bind(&vehicle.model)
            .bind(vehicle.year)
            .bind(&vehicle.chassis_number)
            .bind(&vehicle.license_plate)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_registration_conflict)?;
            created.push(row);
        }

        tx.commit().await?;

        Ok((registration, created))
    }

    pub async fn vehicles_for(&self, registration_id: Uuid) -> Result<Vec<RegistrationVehicle>> {
        let vehicles = sqlx::query_as::<_, RegistrationVehicle>(&format!(
            "SELECT {REGISTRATION_VEHICLE_COLUMNS} FROM registration_vehicles \
             WHERE registration_id = $1 ORDER BY start_number"
        ))
        .bind(registration_id)
        .fetch_all(self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn list_for_event(&self, event_id: Uuid) -> Result<Vec<EventRegistrationResponse>> {
        let entries = sqlx::query_as::<_, EventRegistrationResponse>(
            "SELECT r.registration_id, r.start_number, r.user_id, u.first_name, u.last_name, \
                    c.name AS class_name, r.status, r.created_at \
             FROM registrations r \
             JOIN users u ON u.user_id = r.user_id \
             JOIN event_classes c ON c.class_id = r.class_id \
             WHERE r.event_id = $1 AND r.status <> 'CANCELLED' \
             ORDER BY r.start_number",
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    /// Flips the participant's registration status as check-in outcomes
    /// are recorded; cancelled rows are never touched.
    pub async fn set_status_for_user(
        &self,
        event_id: Uuid,
        user_id: Uuid,
        status: &str,
    ) -> Result<()> {
        sqlx::query(
            "UPDATE registrations SET status = $3 \
             WHERE event_id = $1 AND user_id = $2 AND status <> 'CANCELLED'",
        )
        .bind(event_id)
        .bind(user_id)
        .bind(status)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    pub async fn cancel(&self, id: Uuid) -> Result<Registration> {
        let registration = sqlx::query_as::<_, Registration>(&format!(
            "UPDATE registrations SET status = 'CANCELLED' WHERE registration_id = $1 \
             RETURNING {REGISTRATION_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(registration)
    }
}

/// Names the specific uniqueness rule a 23505 violated so the caller gets
/// a useful conflict message instead of a bare constraint dump.
fn map_registration_conflict(e: sqlx::Error) -> StorageError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.code().as_deref() == Some("23505")
    {
        let message = match db_err.constraint() {
            Some("registrations_event_user_active") => "Already registered for this event",
            _ => "Start number already taken in this event",
        };
        return StorageError::ConstraintViolation(message.to_string());
    }

    StorageError::from(e)
}
