//! Event bus port — publish/subscribe for domain events.

use std::future::Future;

use lumo_domain::error::LumoError;
use lumo_domain::event::Event;

/// Publishes domain events to interested subscribers.
pub trait EventPublisher: Send + Sync {
    /// Publish an event to all current subscribers.
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), LumoError>> + Send;
}

impl<T: EventPublisher> EventPublisher for std::sync::Arc<T> {
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), LumoError>> + Send {
        (**self).publish(event)
    }
}
