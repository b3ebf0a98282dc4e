//! Product catalog management.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::Product;
use crate::domain::events::{EventDispatcher, ProductCreatedEvent};
use crate::domain::repositories::ProductRepository;
use crate::domain::services::ProductService;
use crate::error::AppError;

/// Service for adding products and repricing the catalog.
pub struct CatalogService<R: ProductRepository> {
    repository: Arc<R>,
    dispatcher: Arc<EventDispatcher>,
}

impl<R: ProductRepository> CatalogService<R> {
    /// Creates a new catalog service.
    pub fn new(repository: Arc<R>, dispatcher: Arc<EventDispatcher>) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    /// Adds a product with a generated id and announces it with
    /// [`ProductCreatedEvent`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a blank name or negative price.
    pub async fn create_product(&self, name: String, price: f64) -> Result<Product, AppError> {
        let product = Product::new(Uuid::new_v4().to_string(), name, price)?;

        self.repository.create(&product).await?;
        tracing::info!(product_id = product.id(), price, "product created");

        self.dispatcher.notify(&ProductCreatedEvent::new(&product))?;

        Ok(product)
    }

    /// Raises the price of every product by `percentage` percent and
    /// persists each product.
    ///
    /// Products are written one by one; a failure part-way leaves the
    /// earlier products updated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a negative percentage.
    pub async fn increase_prices(&self, percentage: f64) -> Result<Vec<Product>, AppError> {
        let mut products = self.repository.find_all().await?;
        ProductService::increase_price(&mut products, percentage)?;

        for product in &products {
            self.repository.update(product).await?;
        }

        tracing::info!(
            count = products.len(),
            percentage,
            "catalog prices increased"
        );
        Ok(products)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the product does not exist.
    pub async fn get_product(&self, id: &str) -> Result<Product, AppError> {
        self.repository.find(id).await
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        self.repository.find_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::events::SendEmailWhenProductIsCreatedHandler;
    use crate::domain::repositories::MockProductRepository;

    fn dispatcher() -> Arc<EventDispatcher> {
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(
            ProductCreatedEvent::NAME,
            Arc::new(SendEmailWhenProductIsCreatedHandler),
        );
        Arc::new(dispatcher)
    }

    #[tokio::test]
    async fn test_create_product_success() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_create()
            .withf(|p: &Product| p.name() == "Product 1" && p.price() == 10.0)
            .times(1)
            .returning(|_| Ok(()));

        let service = CatalogService::new(Arc::new(mock_repo), dispatcher());

        let product = service
            .create_product("Product 1".to_string(), 10.0)
            .await
            .unwrap();

        assert_eq!(product.name(), "Product 1");
        assert!(Uuid::parse_str(product.id()).is_ok());
    }

    #[tokio::test]
    async fn test_create_product_negative_price() {
        let mock_repo = MockProductRepository::new();
        let service = CatalogService::new(Arc::new(mock_repo), dispatcher());

        let result = service.create_product("Product 1".to_string(), -1.0).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_product_nan_price() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_create().never();
        let service = CatalogService::new(Arc::new(mock_repo), dispatcher());

        let result = service.create_product("Product 1".to_string(), f64::NAN).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_increase_prices_updates_every_product() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_find_all().times(1).returning(|| {
            Ok(vec![
                Product::new("p1", "Product 1", 10.0).unwrap(),
                Product::new("p2", "Product 2", 20.0).unwrap(),
            ])
        });
        mock_repo.expect_update().times(2).returning(|_| Ok(()));

        let service = CatalogService::new(Arc::new(mock_repo), dispatcher());

        let products = service.increase_prices(50.0).await.unwrap();

        assert_eq!(products[0].price(), 15.0);
        assert_eq!(products[1].price(), 30.0);
    }

    #[tokio::test]
    async fn test_increase_prices_negative_percentage() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_all()
            .times(1)
            .returning(|| Ok(vec![Product::new("p1", "Product 1", 10.0).unwrap()]));
        mock_repo.expect_update().never();

        let service = CatalogService::new(Arc::new(mock_repo), dispatcher());

        let result = service.increase_prices(-5.0).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }
}
