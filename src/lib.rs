//! # ddd-store
//!
//! An e-commerce domain model (customers, products, orders) built with a
//! domain-driven-design flavor and persisted to SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, value objects, domain events,
//!   repository traits and stateless domain services
//! - **Application Layer** ([`application`]) - Use cases orchestrating
//!   repositories and the event dispatcher
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool, migrations
//!   and repository implementations
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://store.db?mode=rwc"
//!
//! cargo run --bin admin -- db migrate
//! cargo run --bin admin -- product create --name "Product 1" --price 10
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        CatalogService, CheckoutService, CustomerService, OrderLine,
    };
    pub use crate::domain::entities::{Address, Customer, Order, OrderItem, Product};
    pub use crate::domain::events::{DomainEvent, EventDispatcher, EventHandler};
    pub use crate::domain::repositories::{CustomerRepository, OrderRepository, ProductRepository};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{
        SqliteCustomerRepository, SqliteOrderRepository, SqliteProductRepository,
    };
}
