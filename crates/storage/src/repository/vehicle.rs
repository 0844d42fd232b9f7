use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::vehicle::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::error::{Result, StorageError};
use crate::models::UserVehicle;

const VEHICLE_COLUMNS: &str = "vehicle_id, user_id, start_number, make, model, year, \
     chassis_number, license_plate, created_at";

/// Repository for athlete garage vehicles
pub struct VehicleRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> VehicleRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<UserVehicle>> {
        let vehicles = sqlx::query_as::<_, UserVehicle>(&format!(
            "SELECT {VEHICLE_COLUMNS} FROM user_vehicles WHERE user_id = $1 \
             ORDER BY start_number"
        ))
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<UserVehicle> {
        let vehicle = sqlx::query_as::<_, UserVehicle>(&format!(
            "SELECT {VEHICLE_COLUMNS} FROM user_vehicles WHERE vehicle_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(vehicle)
    }

    /// Fetches the given vehicles, restricted to one owner. A missing or
    /// foreign id simply drops out of the result; callers compare counts.
    pub async fn find_owned(&self, ids: &[Uuid], user_id: Uuid) -> Result<Vec<UserVehicle>> {
        let vehicles = sqlx::query_as::<_, UserVehicle>(&format!(
            "SELECT {VEHICLE_COLUMNS} FROM user_vehicles \
             WHERE vehicle_id = ANY($1) AND user_id = $2 \
             ORDER BY start_number"
        ))
        .bind(ids)
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn create(&self, user_id: Uuid, req: &CreateVehicleRequest) -> Result<UserVehicle> {
        let vehicle = sqlx::query_as::<_, UserVehicle>(&format!(
            "INSERT INTO user_vehicles (user_id, start_number, make, model, year, \
             chassis_number, license_plate) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {VEHICLE_COLUMNS}"
        ))
        .bind(user_id)
        .bind(req.start_number)
        .bind(&req.make)
        .bind(&req.model)
        .bind(req.year)
        .bind(&req.chassis_number)
        .bind(&req.license_plate)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).or_conflict("Start number already used in your garage")
        })?;

        Ok(vehicle)
    }

    pub async fn update(
        &self,
        id: Uuid,
        existing: &UserVehicle,
        req: &UpdateVehicleRequest,
    ) -> Result<UserVehicle> {
        let vehicle = sqlx::query_as::<_, UserVehicle>(&format!(
            "UPDATE user_vehicles SET \
                start_number = $2, \
                make = $3, \
                model = $4, \
                year = $5, \
                chassis_number = $6, \
                license_plate = $7 \
             WHERE vehicle_id = $1 \
             RETURNING {VEHICLE_COLUMNS}"
        ))
        .bind(id)
        .bind(req.start_number.unwrap_or(existing.start_number))
        .bind(req.make.as_ref().unwrap_or(&existing.make))
        .bind(req.model.clone().or_else(|| existing.model.clone()))
        .bind(req.year.or(existing.year))
        .bind(
            req.chassis_number
                .clone()
                .or_else(|| existing.chassis_number.clone()),
        )
        .bind(
            req.license_plate
                .clone()
                .or_else(|| existing.license_plate.clone()),
        )
        .fetch_optional(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).or_conflict("Start number already used in your garage")
        })?
        .ok_or(StorageError::NotFound)?;

        Ok(vehicle)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM user_vehicles WHERE vehicle_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
