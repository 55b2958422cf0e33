//! Repository trait for customer data access.

use crate::domain::entities::{Customer, NewCustomer};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing customer records.
///
/// The single source of truth is the underlying store; handlers hold only
/// transient `Customer` values during a request and go through this trait
/// for every read and write.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteCustomerRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_customer.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Inserts a new customer and returns the stored row.
    ///
    /// The returned [`Customer`] carries the database-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_customer: NewCustomer) -> Result<Customer, AppError>;

    /// Rewrites an existing row, matched by primary key.
    ///
    /// The write is committed before this returns. A concurrent delete of
    /// the same id makes this a no-op; the caller is not notified (last
    /// writer wins, see the crate-level concurrency notes).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn save(&self, customer: &Customer) -> Result<(), AppError>;

    /// Permanently removes a row.
    ///
    /// Returns `Ok(true)` if a row was deleted, `Ok(false)` if no row with
    /// that id existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Returns every customer row.
    ///
    /// Row order is undefined; callers must not assume insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn get_all(&self) -> Result<Vec<Customer>, AppError>;

    /// Single-row lookup by primary key.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Customer))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn get_by_id(&self, id: i64) -> Result<Option<Customer>, AppError>;
}
