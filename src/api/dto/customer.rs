//! DTOs for the customer endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Customer;

/// JSON representation of a customer returned by every read endpoint.
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub age: i64,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            firstname: customer.firstname,
            lastname: customer.lastname,
            age: customer.age,
        }
    }
}

/// Request body for `POST /customers`.
///
/// The payload's keys must exactly match these fields: a missing field or
/// an unknown key is a deserialization failure, surfaced as 400.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateCustomerRequest {
    pub firstname: String,
    pub lastname: String,
    pub age: i64,
}

/// Request body for `PUT /customers/{id}`.
///
/// All fields are optional and unknown keys are ignored — each field is
/// read individually, absent ones are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateCustomerRequest {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub age: Option<i64>,
}

/// Confirmation body for `PUT /customers/{id}`.
#[derive(Debug, Serialize)]
pub struct UpdateCustomerResponse {
    pub message: String,
}

/// Confirmation body for `DELETE /customers/delete/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteCustomerResponse {
    pub customer: String,
}
