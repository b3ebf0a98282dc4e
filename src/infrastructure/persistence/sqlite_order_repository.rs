//! SQLite implementation of order repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::{SqliteConnection, SqlitePool};
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{Order, OrderItem};
use crate::domain::repositories::OrderRepository;
use crate::error::AppError;

/// SQLite repository for orders and their items.
///
/// An order is stored as one row in `orders` plus one row per item in
/// `order_items`. Multi-row writes run inside a transaction.
pub struct SqliteOrderRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteOrderRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: String,
    customer_id: String,
}

#[derive(sqlx::FromRow)]
struct OrderItemRow {
    id: String,
    order_id: String,
    product_id: String,
    name: String,
    price: f64,
    quantity: i64,
}

impl OrderItemRow {
    fn into_item(self) -> Result<OrderItem, AppError> {
        Ok(OrderItem::new(
            self.id,
            self.name,
            self.price,
            self.product_id,
            self.quantity,
        )?)
    }
}

async fn insert_items(
    conn: &mut SqliteConnection,
    order_id: &str,
    items: &[OrderItem],
) -> Result<(), AppError> {
    for item in items {
        sqlx::query(
            r#"
            INSERT INTO order_items (id, order_id, product_id, name, price, quantity)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(item.id())
        .bind(order_id)
        .bind(item.product_id())
        .bind(item.name())
        .bind(item.price())
        .bind(item.quantity())
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}

fn order_not_found(id: &str) -> AppError {
    AppError::not_found("Order not found", json!({ "id": id }))
}

#[async_trait]
impl OrderRepository for SqliteOrderRepository {
    async fn create(&self, order: &Order) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO orders (id, customer_id, total) VALUES (?, ?, ?)")
            .bind(order.id())
            .bind(order.customer_id())
            .bind(order.total())
            .execute(&mut *tx)
            .await?;

        insert_items(&mut *tx, order.id(), order.items()).await?;

        tx.commit().await?;

        tracing::debug!(
            order_id = order.id(),
            items = order.items().len(),
            "order created"
        );
        Ok(())
    }

    async fn update(&self, order: &Order) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE orders SET customer_id = ?, total = ? WHERE id = ?")
            .bind(order.customer_id())
            .bind(order.total())
            .bind(order.id())
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            tracing::warn!(order_id = order.id(), "update matched no order");
        } else {
            tracing::debug!(order_id = order.id(), "order header updated");
        }
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Order, AppError> {
        let row = sqlx::query_as::<_, OrderRow>("SELECT id, customer_id FROM orders WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or_else(|| order_not_found(id))?;

        let items = sqlx::query_as::<_, OrderItemRow>(
            r#"
            SELECT id, order_id, product_id, name, price, quantity
            FROM order_items
            WHERE order_id = ?
            ORDER BY rowid
            "#,
        )
        .bind(id)
        .fetch_all(self.pool.as_ref())
        .await?
        .into_iter()
        .map(OrderItemRow::into_item)
        .collect::<Result<Vec<_>, _>>()?;

        Ok(Order::new(row.id, row.customer_id, items)?)
    }

    async fn find_all(&self) -> Result<Vec<Order>, AppError> {
        let orders = sqlx::query_as::<_, OrderRow>("SELECT id, customer_id FROM orders ORDER BY rowid")
            .fetch_all(self.pool.as_ref())
            .await?;

        // Items are priced at the product's current price, not the stored one.
        let item_rows = sqlx::query_as::<_, OrderItemRow>(
            r#"
            SELECT oi.id, oi.order_id, oi.product_id, oi.name,
                   COALESCE(p.price, oi.price) AS price, oi.quantity
            FROM order_items oi
            LEFT JOIN products p ON p.id = oi.product_id
            ORDER BY oi.rowid
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut items_by_order: HashMap<String, Vec<OrderItem>> = HashMap::new();
        for row in item_rows {
            let order_id = row.order_id.clone();
            items_by_order
                .entry(order_id)
                .or_default()
                .push(row.into_item()?);
        }

        orders
            .into_iter()
            .map(|row| -> Result<Order, AppError> {
                let items = items_by_order.remove(&row.id).unwrap_or_default();
                Ok(Order::new(row.id, row.customer_id, items)?)
            })
            .collect()
    }

    async fn replace_items(&self, order: &Order) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("UPDATE orders SET total = ? WHERE id = ?")
            .bind(order.total())
            .bind(order.id())
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(order_not_found(order.id()));
        }

        sqlx::query("DELETE FROM order_items WHERE order_id = ?")
            .bind(order.id())
            .execute(&mut *tx)
            .await?;

        insert_items(&mut *tx, order.id(), order.items()).await?;

        tx.commit().await?;

        tracing::debug!(
            order_id = order.id(),
            items = order.items().len(),
            "order items replaced"
        );
        Ok(())
    }
}
