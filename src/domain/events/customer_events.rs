//! Events raised by the customer aggregate.

use std::any::Any;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Value, json};

use super::DomainEvent;
use crate::domain::entities::{Address, Customer};

/// Raised after a customer has been registered.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerCreatedEvent {
    pub occurred_at: DateTime<Utc>,
    pub customer_id: String,
    pub name: String,
}

impl CustomerCreatedEvent {
    pub const NAME: &'static str = "CustomerCreatedEvent";

    pub fn new(customer: &Customer) -> Self {
        Self {
            occurred_at: Utc::now(),
            customer_id: customer.id().to_string(),
            name: customer.name().to_string(),
        }
    }
}

impl DomainEvent for CustomerCreatedEvent {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn payload(&self) -> Value {
        json!({ "id": self.customer_id, "name": self.name })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Raised after a customer's address has been replaced.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerAddressChangedEvent {
    pub occurred_at: DateTime<Utc>,
    pub customer_id: String,
    pub name: String,
    pub address: Address,
}

impl CustomerAddressChangedEvent {
    pub const NAME: &'static str = "CustomerAddressChangedEvent";

    pub fn new(customer_id: impl Into<String>, name: impl Into<String>, address: Address) -> Self {
        Self {
            occurred_at: Utc::now(),
            customer_id: customer_id.into(),
            name: name.into(),
            address,
        }
    }
}

impl DomainEvent for CustomerAddressChangedEvent {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn payload(&self) -> Value {
        json!({
            "id": self.customer_id,
            "name": self.name,
            "address": self.address,
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
