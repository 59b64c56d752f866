//! Defines the transaction store trait.

use async_trait::async_trait;

use crate::{
    Error,
    transaction::{RowNumber, Transaction},
};

/// Handles the creation, retrieval and deletion of the transaction rows
/// held in the remote table.
///
/// The table is the sole source of truth: implementers load it in full on
/// every read and never cache rows across calls.
#[async_trait]
pub trait TransactionStore {
    /// Append `transaction` as a new row at the end of the table.
    ///
    /// Rows are stored in append order, not chronological order.
    async fn append(&self, transaction: Transaction) -> Result<(), Error>;

    /// Retrieve every data row in the table, excluding the header row.
    ///
    /// Returns an empty vector when the table has no data rows.
    async fn get_all(&self) -> Result<Vec<Transaction>, Error>;

    /// Remove the row at `row_number` (1-based, header-inclusive).
    ///
    /// Positions are volatile: every row after the deleted one shifts up,
    /// so callers must recompute positions from a fresh
    /// [get_all](TransactionStore::get_all) before the next delete.
    async fn delete_row(&self, row_number: RowNumber) -> Result<(), Error>;
}
