//! Built-in event handlers.
//!
//! These handlers only emit log records; they stand in for the side effects
//! (notifications, emails) a real deployment would attach to each event.

use std::sync::Arc;

use serde_json::json;

use super::{
    CustomerAddressChangedEvent, CustomerCreatedEvent, DomainEvent, EventDispatcher, EventHandler,
    ProductCreatedEvent,
};
use crate::error::AppError;

/// Logs a numbered notice for every registered customer.
///
/// Two instances are wired by [`register_default_handlers`], one per notice.
pub struct CustomerCreatedLogHandler {
    sequence: u8,
}

impl CustomerCreatedLogHandler {
    pub fn new(sequence: u8) -> Self {
        Self { sequence }
    }

    pub fn message(&self, event: &CustomerCreatedEvent) -> String {
        let ordinal = match self.sequence {
            1 => "first",
            2 => "second",
            _ => "additional",
        };
        format!(
            "This is the {ordinal} log of the event: {} ({})",
            CustomerCreatedEvent::NAME,
            event.customer_id
        )
    }
}

impl EventHandler for CustomerCreatedLogHandler {
    fn handle(&self, event: &dyn DomainEvent) -> Result<(), AppError> {
        let event = expect_event::<CustomerCreatedEvent>(event)?;
        tracing::info!(customer_id = %event.customer_id, "{}", self.message(event));
        Ok(())
    }
}

/// Logs the new address whenever a customer moves.
#[derive(Default)]
pub struct CustomerAddressChangedLogHandler;

impl CustomerAddressChangedLogHandler {
    pub fn message(&self, event: &CustomerAddressChangedEvent) -> String {
        format!(
            "Address of customer {}, {} changed to: {}",
            event.customer_id, event.name, event.address
        )
    }
}

impl EventHandler for CustomerAddressChangedLogHandler {
    fn handle(&self, event: &dyn DomainEvent) -> Result<(), AppError> {
        let event = expect_event::<CustomerAddressChangedEvent>(event)?;
        tracing::info!(customer_id = %event.customer_id, "{}", self.message(event));
        Ok(())
    }
}

/// Announces a new product by (pretend) email.
#[derive(Default)]
pub struct SendEmailWhenProductIsCreatedHandler;

impl EventHandler for SendEmailWhenProductIsCreatedHandler {
    fn handle(&self, event: &dyn DomainEvent) -> Result<(), AppError> {
        let event = expect_event::<ProductCreatedEvent>(event)?;
        tracing::info!(
            product_id = %event.product_id,
            price = event.price,
            "Sending email about new product {}",
            event.name
        );
        Ok(())
    }
}

/// Subscribes the built-in handlers to their events.
pub fn register_default_handlers(dispatcher: &mut EventDispatcher) {
    dispatcher.register(
        CustomerCreatedEvent::NAME,
        Arc::new(CustomerCreatedLogHandler::new(1)),
    );
    dispatcher.register(
        CustomerCreatedEvent::NAME,
        Arc::new(CustomerCreatedLogHandler::new(2)),
    );
    dispatcher.register(
        CustomerAddressChangedEvent::NAME,
        Arc::new(CustomerAddressChangedLogHandler),
    );
    dispatcher.register(
        ProductCreatedEvent::NAME,
        Arc::new(SendEmailWhenProductIsCreatedHandler),
    );
}

fn expect_event<E: DomainEvent>(event: &dyn DomainEvent) -> Result<&E, AppError> {
    event.downcast_ref::<E>().ok_or_else(|| {
        AppError::internal(
            "Handler received an unexpected event",
            json!({ "event": event.name() }),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Address, Customer, Product};

    #[test]
    fn test_customer_created_messages() {
        let event = CustomerCreatedEvent::new(&Customer::new("123", "Customer 1").unwrap());

        assert_eq!(
            CustomerCreatedLogHandler::new(1).message(&event),
            "This is the first log of the event: CustomerCreatedEvent (123)"
        );
        assert_eq!(
            CustomerCreatedLogHandler::new(2).message(&event),
            "This is the second log of the event: CustomerCreatedEvent (123)"
        );
    }

    #[test]
    fn test_address_changed_message() {
        let address = Address::new("Rua Tal", 1, "89204000", "SC").unwrap();
        let event = CustomerAddressChangedEvent::new("123", "Marcelo Wacha", address);

        assert_eq!(
            CustomerAddressChangedLogHandler.message(&event),
            "Address of customer 123, Marcelo Wacha changed to: Rua Tal, 1, 89204000 SC"
        );
        assert!(CustomerAddressChangedLogHandler.handle(&event).is_ok());
    }

    #[test]
    fn test_handler_rejects_foreign_event() {
        let product = Product::new("p1", "Product 1", 10.0).unwrap();
        let event = ProductCreatedEvent::new(&product);

        let result = CustomerAddressChangedLogHandler.handle(&event);
        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[test]
    fn test_register_default_handlers() {
        let mut dispatcher = EventDispatcher::new();
        register_default_handlers(&mut dispatcher);

        assert_eq!(dispatcher.handlers(CustomerCreatedEvent::NAME).len(), 2);
        assert_eq!(dispatcher.handlers(CustomerAddressChangedEvent::NAME).len(), 1);
        assert_eq!(dispatcher.handlers(ProductCreatedEvent::NAME).len(), 1);

        let product = Product::new("p1", "Product 1", 10.0).unwrap();
        assert!(dispatcher.notify(&ProductCreatedEvent::new(&product)).is_ok());
    }
}
