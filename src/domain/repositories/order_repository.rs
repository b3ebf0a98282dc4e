//! Repository trait for the order aggregate.

use crate::domain::entities::Order;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for orders and their items.
///
/// The order row and its item rows are written together on
/// [`create`](OrderRepository::create); afterwards the header and the items
/// are written by separate operations.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteOrderRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_order.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persists the order row and one row per item.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the order or an item id already exists.
    /// Returns [`AppError::Validation`] if the customer or a product does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, order: &Order) -> Result<(), AppError>;

    /// Writes the order row (`customer_id`, `total`) only.
    ///
    /// Stored items are left untouched; use
    /// [`replace_items`](OrderRepository::replace_items) to rewrite them.
    /// An unknown id matches no row and is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, order: &Order) -> Result<(), AppError>;

    /// Loads an order with the item prices stored when it was written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] ("Order not found") on a miss.
    /// Returns [`AppError::Internal`] on database errors.
    async fn find(&self, id: &str) -> Result<Order, AppError>;

    /// Loads every order, pricing each item at the product's current price.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors. Failures are not
    /// reported as "Order not found"; only a [`find`](OrderRepository::find)
    /// miss is.
    async fn find_all(&self) -> Result<Vec<Order>, AppError>;

    /// Deletes the stored items of the order and writes its current items
    /// and total in their place.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no order has this id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn replace_items(&self, order: &Order) -> Result<(), AppError>;
}
