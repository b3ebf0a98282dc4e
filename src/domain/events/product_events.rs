//! Events raised by the product catalog.

use std::any::Any;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Value, json};

use super::DomainEvent;
use crate::domain::entities::Product;

/// Raised after a product has been added to the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct ProductCreatedEvent {
    pub occurred_at: DateTime<Utc>,
    pub product_id: String,
    pub name: String,
    pub price: f64,
}

impl ProductCreatedEvent {
    pub const NAME: &'static str = "ProductCreatedEvent";

    pub fn new(product: &Product) -> Self {
        Self {
            occurred_at: Utc::now(),
            product_id: product.id().to_string(),
            name: product.name().to_string(),
            price: product.price(),
        }
    }
}

impl DomainEvent for ProductCreatedEvent {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn payload(&self) -> Value {
        json!({
            "id": self.product_id,
            "name": self.name,
            "price": self.price,
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
