use serde::Serialize;
use tokio::sync::broadcast;
use uuid::Uuid;

/// Processing update pushed to live viewers of an event. Delivery is
/// fire-and-forget and in-process only: with nobody subscribed the
/// update is dropped, and a lagging subscriber simply misses frames.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingEvent {
    pub event_id: Uuid,
    pub kind: String,
    pub start_number: Option<i32>,
    pub user_id: Option<Uuid>,
    pub detail: String,
}

impl ProcessingEvent {
    pub fn lifecycle(event_id: Uuid, status: &str) -> Self {
        Self {
            event_id,
            kind: "lifecycle".to_string(),
            start_number: None,
            user_id: None,
            detail: status.to_string(),
        }
    }

    pub fn registration(event_id: Uuid, start_number: i32, user_id: Uuid, detail: &str) -> Self {
        Self {
            event_id,
            kind: "registration".to_string(),
            start_number: Some(start_number),
            user_id: Some(user_id),
            detail: detail.to_string(),
        }
    }

    pub fn check_in(event_id: Uuid, user_id: Uuid, outcome: &str) -> Self {
        Self {
            event_id,
            kind: "check_in".to_string(),
            start_number: None,
            user_id: Some(user_id),
            detail: outcome.to_string(),
        }
    }

    pub fn inspection(event_id: Uuid, start_number: i32, status: &str) -> Self {
        Self {
            event_id,
            kind: "inspection".to_string(),
            start_number: Some(start_number),
            user_id: None,
            detail: status.to_string(),
        }
    }

    pub fn weight_control(event_id: Uuid, start_number: i32, result: &str) -> Self {
        Self {
            event_id,
            kind: "weight_control".to_string(),
            start_number: Some(start_number),
            user_id: None,
            detail: result.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct Notifier {
    tx: broadcast::Sender<ProcessingEvent>,
}

impl Notifier {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn publish(&self, event: ProcessingEvent) {
        let _ = self.tx.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ProcessingEvent> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscriber_receives_published_event() {
        let notifier = Notifier::new(8);
        let mut rx = notifier.subscribe();

        let event_id = Uuid::new_v4();
        notifier.publish(ProcessingEvent::lifecycle(event_id, "PUBLISHED"));

        let received = rx.recv().await.expect("event");
        assert_eq!(received.event_id, event_id);
        assert_eq!(received.kind, "lifecycle");
        assert_eq!(received.detail, "PUBLISHED");
    }

    #[test]
    fn test_publish_without_subscribers_is_dropped() {
        let notifier = Notifier::new(8);
        // No receiver attached; must not panic.
        notifier.publish(ProcessingEvent::lifecycle(Uuid::new_v4(), "SUBMITTED"));
    }
}
