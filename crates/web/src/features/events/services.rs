use storage::dto::class::{ClassSpec, ReplaceEventClassesRequest};
use storage::dto::event::{CreateEventRequest, ReviewRequest, UpdateEventRequest};
use storage::error::StorageError;
use storage::models::{Event, EventAction, EventClass, EventStatus, Role};
use storage::repository::class::ClassRepository;
use storage::repository::event::EventRepository;

use crate::auth::CurrentUser;
use crate::error::{WebError, WebResult};
use crate::notify::ProcessingEvent;
use crate::state::AppState;

/// Listing is role-scoped: athletes and processing staff see the public
/// calendar, club admins additionally their own drafts, reviewers
/// everything.
pub async fn list_events(
    state: &AppState,
    actor: &CurrentUser,
    pending_review: bool,
) -> WebResult<Vec<Event>> {
    let repo = EventRepository::new(state.db.pool());

    if pending_review {
        actor.require_federation_reviewer()?;
        return Ok(repo.list_submitted().await?);
    }

    let events = match actor.role {
        Role::Superadmin | Role::FederationAdmin => repo.list_all().await?,
        Role::ClubAdmin => match actor.club_id {
            Some(club_id) => repo.list_for_club(club_id).await?,
            None => repo.list_published().await?,
        },
        _ => repo.list_published().await?,
    };

    Ok(events)
}

/// Unpublished events are visible only to the owning club and reviewers;
/// everyone else gets a plain not-found.
pub async fn get_event(state: &AppState, actor: &CurrentUser, event_id: uuid::Uuid) -> WebResult<Event> {
    let repo = EventRepository::new(state.db.pool());
    let event = repo.find_by_id(event_id).await?;

    if event.lifecycle_status()? != EventStatus::Published && !can_see_unpublished(actor, &event) {
        return Err(WebError::NotFound);
    }

    Ok(event)
}

fn can_see_unpublished(actor: &CurrentUser, event: &Event) -> bool {
    match actor.role {
        Role::Superadmin | Role::FederationAdmin => true,
        Role::ClubAdmin => actor.club_id == Some(event.club_id),
        _ => false,
    }
}

pub async fn create_event(
    state: &AppState,
    actor: &CurrentUser,
    req: &CreateEventRequest,
) -> WebResult<Event> {
    actor.require_role(&[Role::ClubAdmin])?;
    let club_id = actor
        .club_id
        .ok_or_else(|| WebError::Forbidden("Account is not attached to a club".to_string()))?;

    let repo = EventRepository::new(state.db.pool());
    Ok(repo.create(club_id, req).await?)
}

pub async fn update_event(
    state: &AppState,
    actor: &CurrentUser,
    event_id: uuid::Uuid,
    req: &UpdateEventRequest,
) -> WebResult<Event> {
    let repo = EventRepository::new(state.db.pool());
    let event = repo.find_by_id(event_id).await?;

    actor.require_club_admin_of(event.club_id)?;
    event.lifecycle_status()?.apply(EventAction::Edit)?;

    Ok(repo.update(event_id, &event, req).await?)
}

pub async fn delete_event(
    state: &AppState,
    actor: &CurrentUser,
    event_id: uuid::Uuid,
) -> WebResult<()> {
    let repo = EventRepository::new(state.db.pool());
    let event = repo.find_by_id(event_id).await?;

    actor.require_club_admin_of(event.club_id)?;
    event.lifecycle_status()?.apply(EventAction::Delete)?;

    repo.delete(event_id).await?;
    Ok(())
}

/// Club admin hands the event to the federation for review.
pub async fn submit_event(
    state: &AppState,
    actor: &CurrentUser,
    event_id: uuid::Uuid,
) -> WebResult<Event> {
    let repo = EventRepository::new(state.db.pool());
    let event = repo.find_by_id(event_id).await?;

    actor.require_club_admin_of(event.club_id)?;
    event.lifecycle_status()?.apply(EventAction::Submit)?;

    let updated = repo.mark_submitted(event_id).await?;
    state
        .notifier
        .publish(ProcessingEvent::lifecycle(event_id, &updated.status));

    Ok(updated)
}

/// Federation verdict on a submitted event. A rejection must carry a
/// reason, which is stored for the club to act on.
pub async fn review_event(
    state: &AppState,
    actor: &CurrentUser,
    event_id: uuid::Uuid,
    req: &ReviewRequest,
) -> WebResult<Event> {
    actor.require_federation_reviewer()?;

    let repo = EventRepository::new(state.db.pool());
    let event = repo.find_by_id(event_id).await?;
    let status = event.lifecycle_status()?;

    let (next, reason) = match req.decision.as_str() {
        "APPROVE" => (status.apply(EventAction::Approve)?, None),
        "REJECT" => {
            let reason = req
                .reason
                .as_deref()
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .ok_or_else(|| {
                    WebError::BadRequest("A rejection requires a reason".to_string())
                })?;
            (status.apply(EventAction::Reject)?, Some(reason))
        }
        other => {
            return Err(WebError::BadRequest(format!("Unknown decision: {other}")));
        }
    };

    let updated = repo
        .mark_reviewed(event_id, next.as_str(), actor.user_id, reason)
        .await?;
    state
        .notifier
        .publish(ProcessingEvent::lifecycle(event_id, &updated.status));

    Ok(updated)
}

/// Publishing an approved event opens it for registration.
pub async fn publish_event(
    state: &AppState,
    actor: &CurrentUser,
    event_id: uuid::Uuid,
) -> WebResult<Event> {
    let repo = EventRepository::new(state.db.pool());
    let event = repo.find_by_id(event_id).await?;

    actor.require_club_admin_of(event.club_id)?;
    event.lifecycle_status()?.apply(EventAction::Publish)?;

    let updated = repo.mark_published(event_id).await?;
    state
        .notifier
        .publish(ProcessingEvent::lifecycle(event_id, &updated.status));

    Ok(updated)
}

pub async fn list_classes(
    state: &AppState,
    actor: &CurrentUser,
    event_id: uuid::Uuid,
) -> WebResult<Vec<EventClass>> {
    // Visibility follows the event itself.
    get_event(state, actor, event_id).await?;

    let repo = ClassRepository::new(state.db.pool());
    Ok(repo.list_for_event(event_id).await?)
}

/// Replaces the event's class set wholesale; the class edit follows the
/// same lifecycle guard as any other edit.
pub async fn replace_classes(
    state: &AppState,
    actor: &CurrentUser,
    event_id: uuid::Uuid,
    req: &ReplaceEventClassesRequest,
) -> WebResult<Vec<EventClass>> {
    let events = EventRepository::new(state.db.pool());
    let event = events.find_by_id(event_id).await?;

    actor.require_club_admin_of(event.club_id)?;
    event.lifecycle_status()?.apply(EventAction::Edit)?;

    ensure_unique_names(&req.classes)?;

    let repo = ClassRepository::new(state.db.pool());
    Ok(repo.replace_for_event(event_id, &req.classes).await?)
}

fn ensure_unique_names(specs: &[ClassSpec]) -> WebResult<()> {
    for (i, spec) in specs.iter().enumerate() {
        if specs[..i].iter().any(|other| other.name == spec.name) {
            return Err(StorageError::ConstraintViolation(format!(
                "Duplicate class name: {}",
                spec.name
            ))
            .into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn spec(name: &str) -> ClassSpec {
        ClassSpec {
            name: name.to_string(),
            min_weight: None,
            max_weight: Some(Decimal::from(165)),
        }
    }

    #[test]
    fn test_unique_class_names_pass() {
        assert!(ensure_unique_names(&[spec("Junior"), spec("Open")]).is_ok());
        assert!(ensure_unique_names(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_class_names_rejected() {
        assert!(ensure_unique_names(&[spec("Junior"), spec("Junior")]).is_err());
    }
}
