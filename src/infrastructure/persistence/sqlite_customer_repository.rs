//! SQLite implementation of customer repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Address, Customer};
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;

/// SQLite repository for customers.
///
/// The address is flattened into nullable `street`, `number`, `zipcode`,
/// `city` columns; a customer without an address stores `NULL` in all four.
pub struct SqliteCustomerRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCustomerRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CustomerRow {
    id: String,
    name: String,
    street: Option<String>,
    number: Option<i64>,
    zipcode: Option<String>,
    city: Option<String>,
    active: bool,
    reward_points: f64,
}

impl CustomerRow {
    fn into_customer(self) -> Result<Customer, AppError> {
        let mut customer = Customer::new(self.id, self.name)?;

        if let (Some(street), Some(number), Some(zip), Some(city)) =
            (self.street, self.number, self.zipcode, self.city)
        {
            customer.change_address(Address::new(street, number, zip, city)?);
        }
        if self.active {
            customer.activate()?;
        }
        customer.add_reward_points(self.reward_points)?;

        Ok(customer)
    }
}

#[async_trait]
impl CustomerRepository for SqliteCustomerRepository {
    async fn create(&self, customer: &Customer) -> Result<(), AppError> {
        let address = customer.address();

        sqlx::query(
            r#"
            INSERT INTO customers (id, name, street, number, zipcode, city, active, reward_points)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(customer.id())
        .bind(customer.name())
        .bind(address.map(Address::street))
        .bind(address.map(Address::number))
        .bind(address.map(Address::zip))
        .bind(address.map(Address::city))
        .bind(customer.is_active())
        .bind(customer.reward_points())
        .execute(self.pool.as_ref())
        .await?;

        tracing::debug!(customer_id = customer.id(), "customer created");
        Ok(())
    }

    async fn update(&self, customer: &Customer) -> Result<(), AppError> {
        let address = customer.address();

        sqlx::query(
            r#"
            UPDATE customers SET
                name          = ?,
                street        = ?,
                number        = ?,
                zipcode       = ?,
                city          = ?,
                active        = ?,
                reward_points = ?
            WHERE id = ?
            "#,
        )
        .bind(customer.name())
        .bind(address.map(Address::street))
        .bind(address.map(Address::number))
        .bind(address.map(Address::zip))
        .bind(address.map(Address::city))
        .bind(customer.is_active())
        .bind(customer.reward_points())
        .bind(customer.id())
        .execute(self.pool.as_ref())
        .await?;

        tracing::debug!(customer_id = customer.id(), "customer updated");
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Customer, AppError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, name, street, number, zipcode, city, active, reward_points
            FROM customers
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.ok_or_else(|| AppError::not_found("Customer not found", json!({ "id": id })))?
            .into_customer()
    }

    async fn find_all(&self) -> Result<Vec<Customer>, AppError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, name, street, number, zipcode, city, active, reward_points
            FROM customers
            ORDER BY rowid
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(CustomerRow::into_customer).collect()
    }
}
