//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx over a
//! shared [`sqlx::SqlitePool`]. Rows are mapped back into aggregates through
//! the entity constructors, so stored data is re-validated on every read.
//!
//! # Repositories
//!
//! - [`SqliteCustomerRepository`] - Customers and their flattened address
//! - [`SqliteProductRepository`] - Catalog products
//! - [`SqliteOrderRepository`] - Orders with nested item rows

pub mod sqlite_customer_repository;
pub mod sqlite_order_repository;
pub mod sqlite_product_repository;

pub use sqlite_customer_repository::SqliteCustomerRepository;
pub use sqlite_order_repository::SqliteOrderRepository;
pub use sqlite_product_repository::SqliteProductRepository;
