//! Customer route configuration.

use crate::api::handlers::{
    create_customer_handler, customer_detail_handler, customer_list_handler,
    delete_customer_handler, update_customer_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

/// All customer routes.
///
/// # Endpoints
///
/// - `GET    /customers`             - List all customers
/// - `POST   /customers`             - Create a customer
/// - `GET    /customers/{id}`        - Fetch one customer
/// - `PUT    /customers/{id}`        - Partially update a customer
/// - `DELETE /customers/delete/{id}` - Delete a customer
///
/// The delete verb lives under its own `/customers/delete/{id}` path; that
/// layout is part of the public contract and is kept as-is.
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/customers",
            get(customer_list_handler).post(create_customer_handler),
        )
        .route(
            "/customers/{id}",
            get(customer_detail_handler).put(update_customer_handler),
        )
        .route("/customers/delete/{id}", delete(delete_customer_handler))
}
