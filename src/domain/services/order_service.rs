//! Domain service for operations spanning orders and customers.

use uuid::Uuid;

use crate::domain::entities::{Customer, Order, OrderItem};
use crate::domain::errors::DomainError;

/// Stateless order rules that do not belong to a single aggregate.
pub struct OrderService;

impl OrderService {
    /// Sum of the totals of `orders`.
    pub fn total(orders: &[Order]) -> f64 {
        orders.iter().map(Order::total).sum()
    }

    /// Creates an order for `customer` and credits half of its total as
    /// reward points.
    ///
    /// The order receives a freshly generated UUID.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ItemsRequired`] when `items` is empty. The
    /// customer is left unchanged on error.
    pub fn place_order(customer: &mut Customer, items: Vec<OrderItem>) -> Result<Order, DomainError> {
        if items.is_empty() {
            return Err(DomainError::ItemsRequired);
        }

        let order = Order::new(Uuid::new_v4().to_string(), customer.id(), items)?;
        customer.add_reward_points(order.total() / 2.0)?;

        Ok(order)
    }
}
