//! Order line item.

use crate::domain::entities::product::is_valid_price;
use crate::domain::errors::DomainError;

/// A single line of an [`crate::domain::entities::Order`].
///
/// Carries a snapshot of the product name and unit price taken when the
/// order was placed.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    id: String,
    name: String,
    price: f64,
    product_id: String,
    quantity: i64,
}

impl OrderItem {
    /// Creates a validated order item.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] when an identifier is blank, the price is
    /// negative, or the quantity is not positive.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        product_id: impl Into<String>,
        quantity: i64,
    ) -> Result<Self, DomainError> {
        let item = Self {
            id: id.into(),
            name: name.into(),
            price,
            product_id: product_id.into(),
            quantity,
        };
        item.validate()?;
        Ok(item)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::IdRequired);
        }
        if self.product_id.trim().is_empty() {
            return Err(DomainError::ProductIdRequired);
        }
        if !is_valid_price(self.price) {
            return Err(DomainError::NegativePrice);
        }
        if self.quantity <= 0 {
            return Err(DomainError::InvalidQuantity(self.quantity));
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Unit price times quantity.
    pub fn total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}
