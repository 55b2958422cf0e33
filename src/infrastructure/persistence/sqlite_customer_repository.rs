//! SQLite implementation of the customer repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Customer, NewCustomer};
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;

/// AUTOINCREMENT: ids of deleted rows are never handed out again.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS customers (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    firstname VARCHAR(20) NOT NULL,
    lastname  VARCHAR(10) NOT NULL,
    age       INTEGER NOT NULL
)
"#;

/// SQLite repository for customer storage and retrieval.
///
/// Uses SQLx prepared statements with runtime binding. Every statement runs
/// in autocommit mode, so each operation is durably committed before it
/// returns.
pub struct SqliteCustomerRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCustomerRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Creates the customers table if it does not exist yet.
    ///
    /// Called once at startup; takes the place of a migrations setup for
    /// this single-table schema.
    pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), AppError> {
        sqlx::query(SCHEMA).execute(pool).await?;
        Ok(())
    }
}

#[async_trait]
impl CustomerRepository for SqliteCustomerRepository {
    async fn create(&self, new_customer: NewCustomer) -> Result<Customer, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (firstname, lastname, age)
            VALUES (?1, ?2, ?3)
            RETURNING id, firstname, lastname, age
            "#,
        )
        .bind(new_customer.firstname)
        .bind(new_customer.lastname)
        .bind(new_customer.age)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(customer)
    }

    async fn save(&self, customer: &Customer) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE customers
            SET firstname = ?1, lastname = ?2, age = ?3
            WHERE id = ?4
            "#,
        )
        .bind(&customer.firstname)
        .bind(&customer.lastname)
        .bind(customer.age)
        .bind(customer.id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = ?1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn get_all(&self) -> Result<Vec<Customer>, AppError> {
        // No ORDER BY: row order is the storage's natural order and is
        // undefined as far as callers are concerned.
        let customers = sqlx::query_as::<_, Customer>(
            "SELECT id, firstname, lastname, age FROM customers",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(customers)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Customer>, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            "SELECT id, firstname, lastname, age FROM customers WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(customer)
    }
}
