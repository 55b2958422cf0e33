//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::domain::repositories::CustomerRepository;

/// Application state constructed once at startup.
///
/// Holds the persistence capability behind its trait so handlers never see
/// a concrete database type; tests swap in mocks or in-memory pools.
#[derive(Clone)]
pub struct AppState {
    pub customers: Arc<dyn CustomerRepository>,
}

impl AppState {
    pub fn new(customers: Arc<dyn CustomerRepository>) -> Self {
        Self { customers }
    }
}
