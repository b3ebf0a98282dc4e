//! Order placement and order queries.

use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use crate::domain::entities::{Order, OrderItem};
use crate::domain::repositories::{CustomerRepository, OrderRepository, ProductRepository};
use crate::domain::services::OrderService;
use crate::error::AppError;

/// One requested line of an order: which product and how many.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub product_id: String,
    pub quantity: i64,
}

impl OrderLine {
    pub fn new(product_id: impl Into<String>, quantity: i64) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// Service coordinating customers, products and orders at checkout.
///
/// Each aggregate is written through its own repository; the order and the
/// customer's reward points are separate writes.
pub struct CheckoutService<C, P, O>
where
    C: CustomerRepository,
    P: ProductRepository,
    O: OrderRepository,
{
    customers: Arc<C>,
    products: Arc<P>,
    orders: Arc<O>,
}

impl<C, P, O> CheckoutService<C, P, O>
where
    C: CustomerRepository,
    P: ProductRepository,
    O: OrderRepository,
{
    /// Creates a new checkout service.
    pub fn new(customers: Arc<C>, products: Arc<P>, orders: Arc<O>) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }

    /// Places an order for `customer_id`.
    ///
    /// Items are priced at the products' current prices. Half of the order
    /// total is credited to the customer as reward points.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `lines` is empty or a quantity is
    /// not positive.
    /// Returns [`AppError::NotFound`] if the customer or a product does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn place_order(
        &self,
        customer_id: &str,
        lines: Vec<OrderLine>,
    ) -> Result<Order, AppError> {
        if lines.is_empty() {
            tracing::warn!(customer_id, "order rejected: no items");
            return Err(AppError::bad_request(
                "Order must have at least one item",
                json!({ "customer_id": customer_id }),
            ));
        }

        let mut customer = self.customers.find(customer_id).await?;
        let items = self.build_items(lines).await?;

        let order = OrderService::place_order(&mut customer, items)?;

        self.orders.create(&order).await?;
        self.customers.update(&customer).await?;

        tracing::info!(
            order_id = order.id(),
            customer_id,
            total = order.total(),
            reward_points = customer.reward_points(),
            "order placed"
        );
        Ok(order)
    }

    /// Replaces the items of an existing order, repriced at current
    /// product prices.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the order or a product does not exist.
    /// Returns [`AppError::Validation`] if `lines` is empty.
    pub async fn change_order_items(
        &self,
        order_id: &str,
        lines: Vec<OrderLine>,
    ) -> Result<Order, AppError> {
        let mut order = self.orders.find(order_id).await?;
        let items = self.build_items(lines).await?;

        order.change_items(items)?;
        self.orders.replace_items(&order).await?;

        tracing::info!(order_id, total = order.total(), "order items changed");
        Ok(order)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] ("Order not found") if the order does not exist.
    pub async fn get_order(&self, order_id: &str) -> Result<Order, AppError> {
        self.orders.find(order_id).await
    }

    pub async fn list_orders(&self) -> Result<Vec<Order>, AppError> {
        self.orders.find_all().await
    }

    /// Sum of the totals of every stored order.
    pub async fn orders_total(&self) -> Result<f64, AppError> {
        let orders = self.orders.find_all().await?;
        Ok(OrderService::total(&orders))
    }

    async fn build_items(&self, lines: Vec<OrderLine>) -> Result<Vec<OrderItem>, AppError> {
        let mut items = Vec::with_capacity(lines.len());
        for line in lines {
            let product = self.products.find(&line.product_id).await?;
            items.push(OrderItem::new(
                Uuid::new_v4().to_string(),
                product.name(),
                product.price(),
                product.id(),
                line.quantity,
            )?);
        }
        Ok(items)
    }
}
