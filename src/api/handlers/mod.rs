//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod customer_detail;
pub mod customers;

pub use customer_detail::{
    customer_detail_handler, delete_customer_handler, update_customer_handler,
};
pub use customers::{create_customer_handler, customer_list_handler};
