use std::any::Any;
use std::fmt::Debug;

use chrono::{DateTime, Utc};
use serde_json::Value;

/// An in-process notification describing a state change.
///
/// Events are routed by [`DomainEvent::name`]; handlers that need the
/// concrete type use [`downcast_ref`](trait.DomainEvent.html#method.downcast_ref).
pub trait DomainEvent: Debug + Send + Sync + 'static {
    /// Routing key used by the dispatcher.
    fn name(&self) -> &'static str;

    fn occurred_at(&self) -> DateTime<Utc>;

    /// Event data as JSON, for handlers that do not care about the concrete type.
    fn payload(&self) -> Value;

    fn as_any(&self) -> &dyn Any;
}

impl dyn DomainEvent {
    /// Returns the concrete event if it is of type `E`.
    pub fn downcast_ref<E: DomainEvent>(&self) -> Option<&E> {
        self.as_any().downcast_ref::<E>()
    }
}
