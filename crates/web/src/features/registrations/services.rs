use chrono::Utc;
use storage::dto::registration::{
    CreateRegistrationRequest, EventRegistrationResponse, RegistrationResponse,
};
use storage::error::StorageError;
use storage::models::{EventStatus, Registration, Role};
use storage::repository::class::ClassRepository;
use storage::repository::event::EventRepository;
use storage::repository::registration::{NewRegistrationVehicle, RegistrationRepository};
use storage::repository::vehicle::VehicleRepository;
use storage::services::start_numbers;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::error::{WebError, WebResult};
use crate::notify::ProcessingEvent;
use crate::state::AppState;

/// Enters the caller into a published event. The guards run in a fixed
/// order so the caller always learns about the first applicable problem:
/// event state, window, duplicate entry, capacity, class, start number,
/// vehicle requirement.
pub async fn register(
    state: &AppState,
    actor: &CurrentUser,
    event_id: Uuid,
    req: &CreateRegistrationRequest,
) -> WebResult<RegistrationResponse> {
    actor.require_role(&[Role::Athlete])?;

    let events = EventRepository::new(state.db.pool());
    let event = events.find_by_id(event_id).await?;

    if event.lifecycle_status()? != EventStatus::Published {
        return Err(StorageError::InvalidState(
            "Event is not open for registration".to_string(),
        )
        .into());
    }

    if !event.registration_open_at(Utc::now()) {
        return Err(StorageError::WindowClosed.into());
    }

    let registrations = RegistrationRepository::new(state.db.pool());

    if registrations
        .find_active_for_user(event_id, actor.user_id)
        .await?
        .is_some()
    {
        return Err(
            StorageError::ConstraintViolation("Already registered for this event".to_string())
                .into(),
        );
    }

    if event.max_participants > 0 {
        let confirmed = registrations.count_active(event_id).await?;
        if confirmed >= i64::from(event.max_participants) {
            return Err(StorageError::EventFull.into());
        }
    }

    let classes = ClassRepository::new(state.db.pool());
    if classes
        .find_for_event(event_id, req.class_id)
        .await?
        .is_none()
    {
        return Err(StorageError::InvalidClass.into());
    }

    let vehicles = collect_vehicles(state, actor, req).await?;
    let taken = registrations.taken_start_numbers(event_id).await?;

    let start_number = if vehicles.is_empty() {
        start_numbers::lowest_free(&taken)
    } else {
        let declared: Vec<i32> = vehicles.iter().map(|v| v.start_number).collect();
        if let Some(n) = start_numbers::first_collision(&declared, &taken) {
            return Err(StorageError::ConstraintViolation(format!(
                "Start number {n} already taken in this event"
            ))
            .into());
        }
        declared[0]
    };

    if event.requires_vehicle && vehicles.is_empty() {
        return Err(StorageError::VehicleRequired.into());
    }

    let (registration, created_vehicles) = registrations
        .create_with_vehicles(event_id, actor.user_id, req.class_id, start_number, &vehicles)
        .await?;

    state.notifier.publish(ProcessingEvent::registration(
        event_id,
        start_number,
        actor.user_id,
        "CONFIRMED",
    ));

    Ok(RegistrationResponse::from_parts(registration, created_vehicles))
}

/// Resolves the vehicle selection into snapshots: garage vehicles by id
/// (owned by the caller), plus an optional inline one-off vehicle.
async fn collect_vehicles(
    state: &AppState,
    actor: &CurrentUser,
    req: &CreateRegistrationRequest,
) -> WebResult<Vec<NewRegistrationVehicle>> {
    let mut vehicles = Vec::new();

    if !req.vehicle_ids.is_empty() {
        let repo = VehicleRepository::new(state.db.pool());
        let owned = repo.find_owned(&req.vehicle_ids, actor.user_id).await?;

        if owned.len() != req.vehicle_ids.len() {
            return Err(WebError::NotFound);
        }

        for vehicle in owned {
            vehicles.push(NewRegistrationVehicle {
                start_number: vehicle.start_number,
                make: vehicle.make,
                model: vehicle.model,
                year: vehicle.year,
                chassis_number: vehicle.chassis_number,
                license_plate: vehicle.license_plate,
            });
        }
    }

    if let Some(inline) = &req.vehicle {
        vehicles.push(NewRegistrationVehicle {
            start_number: inline.start_number,
            make: inline.make.clone(),
            model: inline.model.clone(),
            year: inline.year,
            chassis_number: inline.chassis_number.clone(),
            license_plate: inline.license_plate.clone(),
        });
    }

    Ok(vehicles)
}

pub async fn list_for_event(
    state: &AppState,
    actor: &CurrentUser,
    event_id: Uuid,
) -> WebResult<Vec<EventRegistrationResponse>> {
    let events = EventRepository::new(state.db.pool());
    let event = events.find_by_id(event_id).await?;

    actor.require_staff_for(event.club_id)?;

    let repo = RegistrationRepository::new(state.db.pool());
    Ok(repo.list_for_event(event_id).await?)
}

/// Cancelling frees the start number and the capacity slot. Athletes may
/// cancel their own entry; the owning club's admin may cancel any.
pub async fn cancel(
    state: &AppState,
    actor: &CurrentUser,
    registration_id: Uuid,
) -> WebResult<Registration> {
    let repo = RegistrationRepository::new(state.db.pool());
    let registration = repo.find_by_id(registration_id).await?;

    if registration.user_id != actor.user_id {
        let events = EventRepository::new(state.db.pool());
        let event = events.find_by_id(registration.event_id).await?;
        actor.require_club_admin_of(event.club_id)?;
    }

    let status: storage::models::RegistrationStatus = registration.status.parse()?;
    if !status.is_active() {
        return Err(StorageError::InvalidState(
            "Registration is already cancelled".to_string(),
        )
        .into());
    }

    let cancelled = repo.cancel(registration_id).await?;

    state.notifier.publish(ProcessingEvent::registration(
        cancelled.event_id,
        cancelled.start_number,
        cancelled.user_id,
        "CANCELLED",
    ));

    Ok(cancelled)
}
