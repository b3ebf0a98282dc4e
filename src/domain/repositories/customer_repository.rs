//! Repository trait for customer persistence.

use crate::domain::entities::Customer;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the customer aggregate.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteCustomerRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_customer.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Persists a new customer, including its address and reward points.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a customer with the same id exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, customer: &Customer) -> Result<(), AppError>;

    /// Overwrites every stored column of the customer with this id.
    ///
    /// An unknown id matches no row and is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, customer: &Customer) -> Result<(), AppError>;

    /// Loads a customer by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] ("Customer not found") on a miss.
    /// Returns [`AppError::Internal`] on database errors.
    async fn find(&self, id: &str) -> Result<Customer, AppError>;

    /// Loads every customer in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<Customer>, AppError>;
}
