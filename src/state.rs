//! Implements a struct that holds the state of the REST server.

use crate::store::TransactionStore;

/// The state of the REST server.
///
/// The store is a type parameter rather than a concrete client so that
/// tests can substitute an in-memory double for the remote spreadsheet.
#[derive(Debug, Clone)]
pub struct AppState<S>
where
    S: TransactionStore + Send + Sync,
{
    /// The store holding the user's recorded transactions.
    pub transaction_store: S,
}

impl<S> AppState<S>
where
    S: TransactionStore + Send + Sync,
{
    /// Create a new [AppState] over `transaction_store`.
    pub fn new(transaction_store: S) -> Self {
        Self { transaction_store }
    }
}
