use super::DomainEvent;
use crate::error::AppError;

/// Consumer of domain events, invoked synchronously by the dispatcher.
///
/// A returned error stops delivery of the current event to any handler
/// registered after this one.
pub trait EventHandler: Send + Sync {
    fn handle(&self, event: &dyn DomainEvent) -> Result<(), AppError>;
}
