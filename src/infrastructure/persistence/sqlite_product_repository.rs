//! SQLite implementation of product repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::Product;
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;

/// SQLite repository for catalog products.
pub struct SqliteProductRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteProductRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: String,
    name: String,
    price: f64,
}

impl ProductRow {
    fn into_product(self) -> Result<Product, AppError> {
        Ok(Product::new(self.id, self.name, self.price)?)
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn create(&self, product: &Product) -> Result<(), AppError> {
        sqlx::query("INSERT INTO products (id, name, price) VALUES (?, ?, ?)")
            .bind(product.id())
            .bind(product.name())
            .bind(product.price())
            .execute(self.pool.as_ref())
            .await?;

        tracing::debug!(product_id = product.id(), "product created");
        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), AppError> {
        sqlx::query("UPDATE products SET name = ?, price = ? WHERE id = ?")
            .bind(product.name())
            .bind(product.price())
            .bind(product.id())
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Product, AppError> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, price FROM products WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.ok_or_else(|| AppError::not_found("Product not found", json!({ "id": id })))?
            .into_product()
    }

    async fn find_all(&self) -> Result<Vec<Product>, AppError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, price FROM products ORDER BY rowid",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(ProductRow::into_product).collect()
    }
}
