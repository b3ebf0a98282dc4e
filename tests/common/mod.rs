#![allow(dead_code)]

use ddd_store::domain::entities::{Address, Customer, Order, OrderItem, Product};
use ddd_store::domain::repositories::{CustomerRepository, ProductRepository};
use ddd_store::infrastructure::persistence::{SqliteCustomerRepository, SqliteProductRepository};
use sqlx::SqlitePool;
use std::sync::Arc;

pub fn address(n: i64) -> Address {
    Address::new(
        format!("Street {}", n),
        n,
        format!("Zipcode {}", n),
        format!("City {}", n),
    )
    .unwrap()
}

pub async fn create_test_customer(pool: &SqlitePool, id: &str) -> Customer {
    let repo = SqliteCustomerRepository::new(Arc::new(pool.clone()));
    let mut customer = Customer::new(id, "Customer 1").unwrap();
    customer.change_address(address(1));
    repo.create(&customer).await.unwrap();
    customer
}

pub async fn create_test_product(pool: &SqlitePool, id: &str, name: &str, price: f64) -> Product {
    let repo = SqliteProductRepository::new(Arc::new(pool.clone()));
    let product = Product::new(id, name, price).unwrap();
    repo.create(&product).await.unwrap();
    product
}

pub fn item_for(id: &str, product: &Product, quantity: i64) -> OrderItem {
    OrderItem::new(id, product.name(), product.price(), product.id(), quantity).unwrap()
}

pub fn order_with(id: &str, customer: &Customer, items: Vec<OrderItem>) -> Order {
    Order::new(id, customer.id(), items).unwrap()
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap()
}
