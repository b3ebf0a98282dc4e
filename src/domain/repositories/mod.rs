//! Repository trait definitions for the domain layer.
//!
//! Each aggregate has one repository that exclusively owns its table
//! mapping. Implementations live in `crate::infrastructure::persistence`;
//! mock implementations are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`CustomerRepository`] - Customers with address and reward points
//! - [`ProductRepository`] - Catalog products
//! - [`OrderRepository`] - Orders and their nested items

pub mod customer_repository;
pub mod order_repository;
pub mod product_repository;

pub use customer_repository::CustomerRepository;
pub use order_repository::OrderRepository;
pub use product_repository::ProductRepository;

#[cfg(test)]
pub use customer_repository::MockCustomerRepository;
#[cfg(test)]
pub use order_repository::MockOrderRepository;
#[cfg(test)]
pub use product_repository::MockProductRepository;
