//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Aggregates and value objects
//! - [`errors`] - Business rule violations
//! - [`events`] - Domain events and the synchronous dispatcher
//! - [`repositories`] - Data access trait definitions
//! - [`services`] - Stateless rules spanning several aggregates
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Aggregates do not share mutable state across repositories

pub mod entities;
pub mod errors;
pub mod events;
pub mod repositories;
pub mod services;
