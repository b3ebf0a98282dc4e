//! Domain events and their in-process dispatcher.
//!
//! # Flow
//!
//! 1. A service changes an aggregate and persists it
//! 2. It builds the matching event ([`CustomerCreatedEvent`], ...)
//! 3. [`EventDispatcher::notify`] runs every handler registered under the
//!    event's name, synchronously and in registration order

pub mod customer_events;
pub mod dispatcher;
pub mod event;
pub mod handler;
pub mod handlers;
pub mod product_events;

pub use customer_events::{CustomerAddressChangedEvent, CustomerCreatedEvent};
pub use dispatcher::EventDispatcher;
pub use event::DomainEvent;
pub use handler::EventHandler;
pub use handlers::{
    CustomerAddressChangedLogHandler, CustomerCreatedLogHandler,
    SendEmailWhenProductIsCreatedHandler, register_default_handlers,
};
pub use product_events::ProductCreatedEvent;
