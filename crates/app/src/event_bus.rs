//! In-process event fan-out.
//!
//! State changes are broadcast to whoever is listening; the daemon hangs a
//! logging task off a subscription so every transition shows up in the logs.

use std::future::Future;

use tokio::sync::broadcast;

use lumo_domain::error::LumoError;
use lumo_domain::event::Event;

use crate::ports::EventPublisher;

/// Channel capacity used by [`InProcessEventBus::default`].
pub const DEFAULT_CAPACITY: usize = 256;

/// Event bus backed by a tokio [`broadcast`] channel.
///
/// Fire-and-forget: an event published while nobody is subscribed is
/// dropped, and publishing never blocks.
pub struct InProcessEventBus {
    tx: broadcast::Sender<Event>,
}

impl Default for InProcessEventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl InProcessEventBus {
    /// Create a bus whose slowest subscriber may lag by `capacity` events
    /// before it starts missing them.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Open a subscription receiving every event published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }
}

impl EventPublisher for InProcessEventBus {
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), LumoError>> + Send {
        // send errors only mean "no receivers right now"
        let _ = self.tx.send(event);
        async { Ok(()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumo_domain::event::EventKind;

    fn threshold_event(threshold: f64) -> Event {
        Event::new(EventKind::ThresholdChanged { threshold })
    }

    #[tokio::test]
    async fn should_deliver_published_event_to_subscriber() {
        let bus = InProcessEventBus::default();
        let mut rx = bus.subscribe();

        let published = threshold_event(0.4);
        let id = published.id;
        bus.publish(published).await.unwrap();

        assert_eq!(rx.recv().await.unwrap().id, id);
    }

    #[tokio::test]
    async fn should_fan_out_to_every_subscriber() {
        let bus = InProcessEventBus::new(8);
        let mut first = bus.subscribe();
        let mut second = bus.subscribe();

        let event = Event::new(EventKind::ModeChanged { auto: false });
        let id = event.id;
        bus.publish(event).await.unwrap();

        assert_eq!(first.recv().await.unwrap().id, id);
        assert_eq!(second.recv().await.unwrap().id, id);
    }

    #[tokio::test]
    async fn should_drop_event_when_nobody_subscribed() {
        let bus = InProcessEventBus::new(8);
        assert!(bus.publish(threshold_event(0.1)).await.is_ok());
    }

    #[tokio::test]
    async fn should_not_replay_events_to_late_subscriber() {
        let bus = InProcessEventBus::new(8);
        bus.publish(threshold_event(0.1)).await.unwrap();

        let mut rx = bus.subscribe();
        let late = threshold_event(0.2);
        let late_id = late.id;
        bus.publish(late).await.unwrap();

        assert_eq!(rx.recv().await.unwrap().id, late_id);
    }

    #[tokio::test]
    async fn should_publish_through_arc_wrapper() {
        let bus = std::sync::Arc::new(InProcessEventBus::default());
        let mut rx = bus.subscribe();

        let event = Event::new(EventKind::ModeChanged { auto: true });
        let id = event.id;
        bus.publish(event).await.unwrap();

        assert_eq!(rx.recv().await.unwrap().id, id);
    }
}
