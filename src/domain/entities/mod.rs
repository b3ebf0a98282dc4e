//! Core domain entities and value objects.
//!
//! # Entity Types
//!
//! - [`Customer`] - Aggregate root for a buyer, owning an optional [`Address`]
//! - [`Product`] - Catalog entry with a price
//! - [`Order`] - Aggregate root owning its [`OrderItem`]s
//!
//! # Design Pattern
//!
//! Fields are private; every constructor validates and every mutation goes
//! through a method that re-checks the affected invariant, returning a
//! [`crate::domain::errors::DomainError`] on violation.

pub mod address;
pub mod customer;
pub mod order;
pub mod order_item;
pub mod product;

pub use address::Address;
pub use customer::Customer;
pub use order::Order;
pub use order_item::OrderItem;
pub use product::Product;
