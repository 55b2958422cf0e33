//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx prepared
//! statements.
//!
//! # Repositories
//!
//! - [`SqliteCustomerRepository`] - Customer storage and retrieval

pub mod sqlite_customer_repository;

pub use sqlite_customer_repository::SqliteCustomerRepository;
