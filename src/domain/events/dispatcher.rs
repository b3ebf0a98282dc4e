//! Synchronous publish/subscribe for domain events.

use std::collections::HashMap;
use std::sync::Arc;

use super::{DomainEvent, EventHandler};
use crate::error::AppError;

/// Maps an event name to the ordered list of handlers subscribed to it.
///
/// - Handlers run on the caller's thread, in registration order.
/// - Nothing is queued or persisted; an event with no handlers is dropped.
/// - Handler failures are not isolated: the first error aborts delivery
///   and is returned from [`EventDispatcher::notify`].
#[derive(Default)]
pub struct EventDispatcher {
    handlers: HashMap<String, Vec<Arc<dyn EventHandler>>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `handler` to the list for `event_name`.
    ///
    /// Registering the same instance twice makes it run twice.
    pub fn register(&mut self, event_name: impl Into<String>, handler: Arc<dyn EventHandler>) {
        self.handlers
            .entry(event_name.into())
            .or_default()
            .push(handler);
    }

    /// Removes the first registration of this exact handler instance.
    ///
    /// Handlers are compared by pointer identity, not by value. Returns
    /// `false` when the instance was not registered for `event_name`.
    pub fn unregister(&mut self, event_name: &str, handler: &Arc<dyn EventHandler>) -> bool {
        let Some(list) = self.handlers.get_mut(event_name) else {
            return false;
        };

        match list.iter().position(|h| same_instance(h, handler)) {
            Some(index) => {
                list.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn unregister_all(&mut self) {
        self.handlers.clear();
    }

    /// Handlers registered for `event_name`, in invocation order.
    pub fn handlers(&self, event_name: &str) -> &[Arc<dyn EventHandler>] {
        self.handlers
            .get(event_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn event_handlers(&self) -> &HashMap<String, Vec<Arc<dyn EventHandler>>> {
        &self.handlers
    }

    /// Delivers `event` to every handler registered under its name.
    ///
    /// # Errors
    ///
    /// Returns the first handler error; later handlers are not called.
    pub fn notify(&self, event: &dyn DomainEvent) -> Result<(), AppError> {
        let handlers = self.handlers(event.name());
        tracing::debug!(
            event = event.name(),
            handlers = handlers.len(),
            "dispatching domain event"
        );

        for handler in handlers {
            handler.handle(event)?;
        }

        Ok(())
    }
}

fn same_instance(a: &Arc<dyn EventHandler>, b: &Arc<dyn EventHandler>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
