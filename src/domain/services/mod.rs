//! Stateless domain services.
//!
//! Rules that involve several aggregates, or a collection of them, and that
//! need no I/O. Repository orchestration lives in
//! [`crate::application::services`].

pub mod order_service;
pub mod product_service;

pub use order_service::OrderService;
pub use product_service::ProductService;
