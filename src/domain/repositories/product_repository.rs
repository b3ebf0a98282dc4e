//! Repository trait for catalog persistence.

use crate::domain::entities::Product;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for products.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteProductRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a product with the same id exists.
    async fn create(&self, product: &Product) -> Result<(), AppError>;

    /// Overwrites name and price of the product with this id.
    ///
    /// An unknown id matches no row and is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, product: &Product) -> Result<(), AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] ("Product not found") on a miss.
    async fn find(&self, id: &str) -> Result<Product, AppError>;

    async fn find_all(&self) -> Result<Vec<Product>, AppError>;
}
