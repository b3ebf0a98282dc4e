//! Order aggregate root.

use crate::domain::entities::OrderItem;
use crate::domain::errors::DomainError;

/// An order placed by a customer.
///
/// The order owns its items; the total is always derived from them
/// (`Σ price × quantity`) and never stored independently in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: String,
    customer_id: String,
    items: Vec<OrderItem>,
}

impl Order {
    /// Creates a validated order.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] when the id or customer id is blank or the
    /// order has no items.
    pub fn new(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        items: Vec<OrderItem>,
    ) -> Result<Self, DomainError> {
        let order = Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
        };
        order.validate()?;
        Ok(order)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::IdRequired);
        }
        if self.customer_id.trim().is_empty() {
            return Err(DomainError::CustomerIdRequired);
        }
        if self.items.is_empty() {
            return Err(DomainError::ItemsRequired);
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::total).sum()
    }

    /// Replaces every item of the order.
    ///
    /// The previous items are kept when `items` is empty.
    pub fn change_items(&mut self, items: Vec<OrderItem>) -> Result<(), DomainError> {
        if items.is_empty() {
            return Err(DomainError::ItemsRequired);
        }
        self.items = items;
        Ok(())
    }
}
