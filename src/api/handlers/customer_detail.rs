//! Handlers for single-customer endpoints (fetch, update, delete).

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde_json::json;

use crate::api::dto::customer::{
    CustomerResponse, DeleteCustomerResponse, UpdateCustomerRequest, UpdateCustomerResponse,
};
use crate::domain::entities::Customer;
use crate::error::AppError;
use crate::state::AppState;

/// Shared lookup: every item endpoint resolves the id before doing anything
/// else, so an unknown id is a 404 regardless of method.
async fn get_customer(state: &AppState, id: i64) -> Result<Customer, AppError> {
    state
        .customers
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Customer not found", json!({ "id": id })))
}

/// Returns a single customer.
///
/// # Endpoint
///
/// `GET /customers/{id}`
///
/// # Errors
///
/// Returns 404 Not Found for an unknown id.
pub async fn customer_detail_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<CustomerResponse>, AppError> {
    let customer = get_customer(&state, id).await?;

    Ok(Json(CustomerResponse::from(customer)))
}

/// Partially updates a customer.
///
/// # Endpoint
///
/// `PUT /customers/{id}`
///
/// # Request Body
///
/// Any subset of the three writable fields:
///
/// ```json
/// {
///   "firstname": "Ada",
///   "lastname": "Lovelace",
///   "age": 37
/// }
/// ```
///
/// A field is applied only when present with a truthy value — empty
/// strings, `0`, and `null` are treated as "not provided" and silently
/// ignored. In particular, `{"age": 0}` does NOT set age to zero; this
/// mirrors the contract's update-filtering rule. Unknown keys are ignored.
///
/// The row is written once, and only if at least one field actually
/// changed. The read-modify-write is not atomic with respect to concurrent
/// writers of the same id: the last commit wins.
///
/// # Errors
///
/// Returns 404 Not Found for an unknown id, 400 Bad Request for a body
/// that is not valid JSON.
pub async fn update_customer_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateCustomerRequest>, JsonRejection>,
) -> Result<Json<UpdateCustomerResponse>, AppError> {
    let mut customer = get_customer(&state, id).await?;
    let Json(payload) = payload?;

    let mut changed = 0;

    if let Some(firstname) = payload.firstname.filter(|v| !v.is_empty()) {
        if customer.firstname != firstname {
            customer.firstname = firstname;
            changed += 1;
        }
    }
    if let Some(lastname) = payload.lastname.filter(|v| !v.is_empty()) {
        if customer.lastname != lastname {
            customer.lastname = lastname;
            changed += 1;
        }
    }
    if let Some(age) = payload.age.filter(|v| *v != 0) {
        if customer.age != age {
            customer.age = age;
            changed += 1;
        }
    }

    if changed > 0 {
        state.customers.save(&customer).await?;
    }

    Ok(Json(UpdateCustomerResponse {
        message: format!("update {}", id),
    }))
}

/// Permanently deletes a customer.
///
/// # Endpoint
///
/// `DELETE /customers/delete/{id}`
///
/// # Behavior
///
/// The row is removed from the database; there is no soft delete and no
/// way back. A repeated delete of the same id fails the shared lookup and
/// returns 404.
///
/// # Errors
///
/// Returns 404 Not Found for an unknown id.
pub async fn delete_customer_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<DeleteCustomerResponse>, AppError> {
    let customer = get_customer(&state, id).await?;

    state.customers.delete_by_id(customer.id).await?;

    Ok(Json(DeleteCustomerResponse {
        customer: format!("customer {} deleted successfully", customer.id),
    }))
}
