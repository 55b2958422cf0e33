//! Customer entity representing one row of the customers table.

use sqlx::FromRow;

/// A persisted customer record.
///
/// Every field is populated once the record has been stored; `id` is
/// assigned by the database on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Customer {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub age: i64,
}

impl Customer {
    /// Returns "firstname lastname" for log and confirmation messages.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

/// Input data for a customer that has not been persisted yet.
///
/// The transient, id-less construction state; the repository assigns the
/// id when the record is inserted.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub firstname: String,
    pub lastname: String,
    pub age: i64,
}
