//! Handlers for the customer collection endpoints (list, create).

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::api::dto::customer::{CreateCustomerRequest, CustomerResponse};
use crate::domain::entities::NewCustomer;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every customer.
///
/// # Endpoint
///
/// `GET /customers`
///
/// # Response
///
/// A JSON array of `{id, firstname, lastname, age}` objects in undefined
/// order. An empty collection is an empty array, not an error.
pub async fn customer_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerResponse>>, AppError> {
    let customers = state.customers.get_all().await?;

    Ok(Json(
        customers.into_iter().map(CustomerResponse::from).collect(),
    ))
}

/// Creates a customer.
///
/// # Endpoint
///
/// `POST /customers`
///
/// # Request Body
///
/// ```json
/// {
///   "firstname": "Ada",
///   "lastname": "Lovelace",
///   "age": 36
/// }
/// ```
///
/// The keys must match exactly — a missing or unknown key is rejected the
/// same way malformed JSON is.
///
/// # Errors
///
/// Returns 400 Bad Request for a body that is not valid JSON or whose keys
/// do not match. Nothing is persisted on rejection.
pub async fn create_customer_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateCustomerRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CustomerResponse>), AppError> {
    let Json(payload) = payload?;

    let customer = state
        .customers
        .create(NewCustomer {
            firstname: payload.firstname,
            lastname: payload.lastname,
            age: payload.age,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(CustomerResponse::from(customer))))
}
