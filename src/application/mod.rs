//! Application layer services implementing use cases.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! domain services and event notification. Services consume repository traits
//! so they can be exercised with mocks.
//!
//! # Available Services
//!
//! - [`services::customer_service::CustomerService`] - Customer registration and address changes
//! - [`services::catalog_service::CatalogService`] - Product creation and repricing
//! - [`services::checkout_service::CheckoutService`] - Order placement and queries

pub mod services;
