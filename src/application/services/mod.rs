//! Business logic services for the application layer.

pub mod catalog_service;
pub mod checkout_service;
pub mod customer_service;

pub use catalog_service::CatalogService;
pub use checkout_service::{CheckoutService, OrderLine};
pub use customer_service::CustomerService;
