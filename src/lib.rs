//! # Customer API
//!
//! A minimal customer CRUD service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The customer entity and repository trait
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Endpoints
//!
//! - `GET    /customers`             - List all customers
//! - `POST   /customers`             - Create a customer
//! - `GET    /customers/{id}`        - Fetch one customer
//! - `PUT    /customers/{id}`        - Partially update a customer
//! - `DELETE /customers/delete/{id}` - Delete a customer
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; defaults to sqlite://data/data.db and 0.0.0.0:5000
//! export DATABASE_URL="sqlite://data/data.db"
//! export LISTEN="0.0.0.0:5000"
//!
//! # Start the service
//! cargo run
//!
//! # Load sample data
//! cargo run --bin seed -- --file data/data.json
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.
//!
//! ## Concurrency
//!
//! Requests are handled independently; the only shared state is the SQLite
//! connection pool. Updates are read-then-write without row locking, so
//! concurrent writers to the same id race and the last commit wins.

pub mod api;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::entities::{Customer, NewCustomer};
    pub use crate::domain::repositories::CustomerRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
