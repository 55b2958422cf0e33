#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::sync::Arc;

use customer_api::api::routes::customer_routes;
use customer_api::domain::entities::Customer;
use customer_api::infrastructure::persistence::SqliteCustomerRepository;
use customer_api::state::AppState;

/// Creates an in-memory SQLite pool with the schema applied.
///
/// A single connection, so every query in a test sees the same in-memory
/// database.
pub async fn setup_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    SqliteCustomerRepository::ensure_schema(&pool)
        .await
        .unwrap();

    pool
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(SqliteCustomerRepository::new(Arc::new(pool))))
}

/// Builds a test server with the full customer route set.
pub fn make_server(pool: SqlitePool) -> TestServer {
    let state = create_test_state(pool);
    let app = Router::new().merge(customer_routes()).with_state(state);
    TestServer::new(app).unwrap()
}

pub async fn insert_customer(
    pool: &SqlitePool,
    firstname: &str,
    lastname: &str,
    age: i64,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO customers (firstname, lastname, age) VALUES (?1, ?2, ?3) RETURNING id",
    )
    .bind(firstname)
    .bind(lastname)
    .bind(age)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn fetch_customer(pool: &SqlitePool, id: i64) -> Option<Customer> {
    sqlx::query_as::<_, Customer>(
        "SELECT id, firstname, lastname, age FROM customers WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .unwrap()
}

pub async fn count_customers(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customers")
        .fetch_one(pool)
        .await
        .unwrap()
}
