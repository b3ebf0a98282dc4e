mod common;

use common::{create_test_customer, create_test_product, item_for, order_with};
use ddd_store::AppError;
use ddd_store::domain::entities::{Order, OrderItem};
use ddd_store::domain::repositories::{OrderRepository, ProductRepository};
use ddd_store::infrastructure::persistence::{SqliteOrderRepository, SqliteProductRepository};
use sqlx::SqlitePool;
use std::sync::Arc;

type ItemRecord = (String, String, String, String, f64, i64);

async fn fetch_order(pool: &SqlitePool, id: &str) -> (String, String, f64) {
    sqlx::query_as("SELECT id, customer_id, total FROM orders WHERE id = ?")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn fetch_items(pool: &SqlitePool, order_id: &str) -> Vec<ItemRecord> {
    sqlx::query_as(
        "SELECT id, order_id, product_id, name, price, quantity FROM order_items WHERE order_id = ? ORDER BY rowid",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await
    .unwrap()
}

#[sqlx::test]
async fn test_create_order_with_items(pool: SqlitePool) {
    let customer = create_test_customer(&pool, "123").await;
    let product = create_test_product(&pool, "123", "Product 1", 10.0).await;
    let repo = SqliteOrderRepository::new(Arc::new(pool.clone()));

    let order = order_with("123", &customer, vec![item_for("1", &product, 2)]);
    repo.create(&order).await.unwrap();

    assert_eq!(
        fetch_order(&pool, "123").await,
        ("123".to_string(), "123".to_string(), 20.0)
    );
    assert_eq!(
        fetch_items(&pool, "123").await,
        vec![(
            "1".to_string(),
            "123".to_string(),
            "123".to_string(),
            "Product 1".to_string(),
            10.0,
            2,
        )]
    );
}

#[sqlx::test]
async fn test_create_order_is_atomic(pool: SqlitePool) {
    let customer = create_test_customer(&pool, "123").await;
    let product = create_test_product(&pool, "p1", "Product 1", 10.0).await;
    let repo = SqliteOrderRepository::new(Arc::new(pool.clone()));

    // Second item references a product that does not exist
    let ghost = OrderItem::new("2", "Ghost", 1.0, "ghost", 1).unwrap();
    let order = order_with("o1", &customer, vec![item_for("1", &product, 1), ghost]);

    let result = repo.create(&order).await;

    assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    assert_eq!(common::count_rows(&pool, "orders").await, 0);
    assert_eq!(common::count_rows(&pool, "order_items").await, 0);
}

#[sqlx::test]
async fn test_create_order_for_unknown_customer(pool: SqlitePool) {
    let product = create_test_product(&pool, "p1", "Product 1", 10.0).await;
    let repo = SqliteOrderRepository::new(Arc::new(pool));

    let order = Order::new("o1", "nobody", vec![item_for("1", &product, 1)]).unwrap();

    assert!(matches!(
        repo.create(&order).await.unwrap_err(),
        AppError::Validation { .. }
    ));
}

#[sqlx::test]
async fn test_update_order_header_only(pool: SqlitePool) {
    let customer = create_test_customer(&pool, "123").await;
    let product = create_test_product(&pool, "123", "Product 1", 10.0).await;
    let other = create_test_product(&pool, "456", "Product 2", 20.0).await;
    let repo = SqliteOrderRepository::new(Arc::new(pool.clone()));

    let mut order = order_with("123", &customer, vec![item_for("1", &product, 2)]);
    repo.create(&order).await.unwrap();

    order
        .change_items(vec![item_for("1", &product, 2), item_for("2", &other, 1)])
        .unwrap();
    repo.update(&order).await.unwrap();

    let (_, customer_id, total) = fetch_order(&pool, "123").await;
    assert_eq!(customer_id, "123");
    assert_eq!(total, 40.0);

    // Item rows are not cascaded by update
    let items = fetch_items(&pool, "123").await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].0, "1");
}

#[sqlx::test]
async fn test_update_missing_order_is_noop(pool: SqlitePool) {
    let customer = create_test_customer(&pool, "123").await;
    let product = create_test_product(&pool, "p1", "Product 1", 10.0).await;
    let repo = SqliteOrderRepository::new(Arc::new(pool.clone()));

    let order = order_with("ghost", &customer, vec![item_for("1", &product, 1)]);

    repo.update(&order).await.unwrap();

    assert_eq!(common::count_rows(&pool, "orders").await, 0);
    assert_eq!(common::count_rows(&pool, "order_items").await, 0);
    assert!(matches!(
        repo.find("ghost").await.unwrap_err(),
        AppError::NotFound { .. }
    ));
}

#[sqlx::test]
async fn test_replace_items(pool: SqlitePool) {
    let customer = create_test_customer(&pool, "123").await;
    let product = create_test_product(&pool, "p1", "Product 1", 10.0).await;
    let other = create_test_product(&pool, "p2", "Product 2", 20.0).await;
    let repo = SqliteOrderRepository::new(Arc::new(pool.clone()));

    let mut order = order_with("o1", &customer, vec![item_for("1", &product, 2)]);
    repo.create(&order).await.unwrap();

    order
        .change_items(vec![item_for("2", &other, 1), item_for("3", &product, 3)])
        .unwrap();
    repo.replace_items(&order).await.unwrap();

    assert_eq!(fetch_order(&pool, "o1").await.2, 50.0);
    let ids: Vec<String> = fetch_items(&pool, "o1")
        .await
        .into_iter()
        .map(|item| item.0)
        .collect();
    assert_eq!(ids, vec!["2", "3"]);

    assert_eq!(repo.find("o1").await.unwrap(), order);
}

#[sqlx::test]
async fn test_find_order(pool: SqlitePool) {
    let customer = create_test_customer(&pool, "123").await;
    let product = create_test_product(&pool, "123", "Product 1", 10.0).await;
    let repo = SqliteOrderRepository::new(Arc::new(pool));

    let order = order_with("123", &customer, vec![item_for("1", &product, 2)]);
    repo.create(&order).await.unwrap();

    assert_eq!(repo.find("123").await.unwrap(), order);
}

#[sqlx::test]
async fn test_find_uses_stored_item_price(pool: SqlitePool) {
    let customer = create_test_customer(&pool, "123").await;
    let mut product = create_test_product(&pool, "p1", "Product 1", 10.0).await;
    let repo = SqliteOrderRepository::new(Arc::new(pool.clone()));
    let products = SqliteProductRepository::new(Arc::new(pool));

    let order = order_with("o1", &customer, vec![item_for("1", &product, 2)]);
    repo.create(&order).await.unwrap();

    product.change_price(15.0).unwrap();
    products.update(&product).await.unwrap();

    let found = repo.find("o1").await.unwrap();
    assert_eq!(found.items()[0].price(), 10.0);
    assert_eq!(found.total(), 20.0);
}

#[sqlx::test]
async fn test_find_missing_order(pool: SqlitePool) {
    let repo = SqliteOrderRepository::new(Arc::new(pool));

    let err = repo.find("456ABC").await.unwrap_err();

    assert!(matches!(err, AppError::NotFound { .. }));
    assert_eq!(err.to_string(), "Order not found");
}

#[sqlx::test]
async fn test_find_all_orders(pool: SqlitePool) {
    let customer = create_test_customer(&pool, "123").await;
    let first_product = create_test_product(&pool, "p1", "Product 1", 10.0).await;
    let second_product = create_test_product(&pool, "p2", "Product 2", 20.0).await;
    let repo = SqliteOrderRepository::new(Arc::new(pool));

    let first = order_with("o1", &customer, vec![item_for("1", &first_product, 2)]);
    let second = order_with(
        "o2",
        &customer,
        vec![
            item_for("2", &second_product, 1),
            item_for("3", &first_product, 1),
        ],
    );
    repo.create(&first).await.unwrap();
    repo.create(&second).await.unwrap();

    let orders = repo.find_all().await.unwrap();

    assert_eq!(orders, vec![first, second]);
}

#[sqlx::test]
async fn test_find_all_uses_current_product_price(pool: SqlitePool) {
    let customer = create_test_customer(&pool, "123").await;
    let mut product = create_test_product(&pool, "p1", "Product 1", 10.0).await;
    let repo = SqliteOrderRepository::new(Arc::new(pool.clone()));
    let products = SqliteProductRepository::new(Arc::new(pool));

    repo.create(&order_with("o1", &customer, vec![item_for("1", &product, 2)]))
        .await
        .unwrap();

    product.change_price(15.0).unwrap();
    products.update(&product).await.unwrap();

    let orders = repo.find_all().await.unwrap();
    assert_eq!(orders[0].items()[0].price(), 15.0);
    assert_eq!(orders[0].total(), 30.0);

    // The stored snapshot is untouched
    assert_eq!(repo.find("o1").await.unwrap().total(), 20.0);
}

#[sqlx::test]
async fn test_find_all_empty(pool: SqlitePool) {
    let repo = SqliteOrderRepository::new(Arc::new(pool));

    assert!(repo.find_all().await.unwrap().is_empty());
}
