use storage::dto::check_in::CheckInRequest;
use storage::models::{CheckIn, CheckInOutcome, RegistrationStatus, Role};
use storage::repository::check_in::CheckInRepository;
use storage::repository::event::EventRepository;
use storage::repository::registration::RegistrationRepository;
use storage::services::check_ins::{self, CheckInSummary};
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::error::{WebError, WebResult};
use crate::notify::ProcessingEvent;
use crate::state::AppState;

/// Records (or re-records) a participant's check-in. Only participants
/// with an active registration can be processed; an OK outcome moves the
/// registration to CHECKED_IN, anything else back to CONFIRMED.
pub async fn record(
    state: &AppState,
    actor: &CurrentUser,
    event_id: Uuid,
    req: &CheckInRequest,
) -> WebResult<CheckIn> {
    let events = EventRepository::new(state.db.pool());
    let event = events.find_by_id(event_id).await?;

    require_check_in_writer(actor, event.club_id)?;

    let registrations = RegistrationRepository::new(state.db.pool());
    if registrations
        .find_active_for_user(event_id, req.user_id)
        .await?
        .is_none()
    {
        return Err(WebError::NotFound);
    }

    let outcome: CheckInOutcome = req.outcome.parse()?;

    let repo = CheckInRepository::new(state.db.pool());
    let check_in = repo
        .upsert(
            event_id,
            req.user_id,
            outcome.as_str(),
            req.notes.as_deref(),
            actor.user_id,
        )
        .await?;

    let registration_status = match outcome {
        CheckInOutcome::Ok => RegistrationStatus::CheckedIn,
        CheckInOutcome::NotOk | CheckInOutcome::Dns => RegistrationStatus::Confirmed,
    };
    registrations
        .set_status_for_user(event_id, req.user_id, registration_status.as_str())
        .await?;

    state.notifier.publish(ProcessingEvent::check_in(
        event_id,
        req.user_id,
        outcome.as_str(),
    ));

    Ok(check_in)
}

pub async fn list_for_event(
    state: &AppState,
    actor: &CurrentUser,
    event_id: Uuid,
) -> WebResult<Vec<CheckIn>> {
    let events = EventRepository::new(state.db.pool());
    let event = events.find_by_id(event_id).await?;

    actor.require_staff_for(event.club_id)?;

    let repo = CheckInRepository::new(state.db.pool());
    Ok(repo.list_for_event(event_id).await?)
}

/// Dashboard buckets: checked-in / issues / dns, pending being whatever
/// part of the field has not been processed yet.
pub async fn summary(
    state: &AppState,
    actor: &CurrentUser,
    event_id: Uuid,
) -> WebResult<CheckInSummary> {
    let events = EventRepository::new(state.db.pool());
    let event = events.find_by_id(event_id).await?;

    actor.require_staff_for(event.club_id)?;

    let registrations = RegistrationRepository::new(state.db.pool());
    let total = registrations.count_active(event_id).await?;

    let repo = CheckInRepository::new(state.db.pool());
    let outcomes: Vec<CheckInOutcome> = repo
        .outcomes_for_event(event_id)
        .await?
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();

    Ok(check_ins::summarize(total, &outcomes))
}

fn require_check_in_writer(actor: &CurrentUser, club_id: Uuid) -> Result<(), WebError> {
    match actor.role {
        Role::Superadmin | Role::RaceOfficial => Ok(()),
        Role::ClubAdmin if actor.club_id == Some(club_id) => Ok(()),
        _ => Err(WebError::Forbidden(
            "Check-ins are recorded by race officials or the owning club's admin".to_string(),
        )),
    }
}
