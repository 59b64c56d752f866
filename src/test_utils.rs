//! Test doubles and helpers shared between the test suites.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::{
    AppState, Error,
    store::TransactionStore,
    transaction::{ROW_NUMBER_OFFSET, RowNumber, Transaction, TransactionKind},
};

/// An in-memory [TransactionStore] standing in for the remote spreadsheet.
#[derive(Debug, Clone, Default)]
pub struct FakeTransactionStore {
    rows: Arc<Mutex<Vec<Transaction>>>,
    failing: Arc<Mutex<bool>>,
}

impl FakeTransactionStore {
    /// Create a store seeded with `rows`.
    pub fn with_rows(rows: Vec<Transaction>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
            failing: Arc::new(Mutex::new(false)),
        }
    }

    /// A snapshot of the stored rows.
    pub fn rows(&self) -> Vec<Transaction> {
        self.rows.lock().unwrap().clone()
    }

    /// Make every subsequent store operation fail, for exercising error
    /// paths.
    pub fn set_failing(&self) {
        *self.failing.lock().unwrap() = true;
    }

    fn check_failing(&self) -> Result<(), Error> {
        if *self.failing.lock().unwrap() {
            Err(Error::SheetApi {
                status: 500,
                message: "injected failure".to_owned(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl TransactionStore for FakeTransactionStore {
    async fn append(&self, transaction: Transaction) -> Result<(), Error> {
        self.check_failing()?;
        self.rows.lock().unwrap().push(transaction);

        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        self.check_failing()?;

        Ok(self.rows())
    }

    async fn delete_row(&self, row_number: RowNumber) -> Result<(), Error> {
        self.check_failing()?;

        let mut rows = self.rows.lock().unwrap();
        let index = row_number
            .checked_sub(ROW_NUMBER_OFFSET)
            .map(|index| index as usize)
            .filter(|index| *index < rows.len())
            .ok_or(Error::NotFound)?;

        rows.remove(index);

        Ok(())
    }
}

/// Build an [AppState] over the given store.
pub fn test_state(store: FakeTransactionStore) -> AppState<FakeTransactionStore> {
    AppState::new(store)
}

/// Shorthand for building a [Transaction] in tests.
pub fn transaction(
    kind: TransactionKind,
    amount: f64,
    date: &str,
    remark: &str,
) -> Transaction {
    Transaction {
        kind,
        amount,
        date: date.to_owned(),
        remark: remark.to_owned(),
    }
}

#[cfg(test)]
mod fake_store_tests {
    use crate::{Error, store::TransactionStore, transaction::TransactionKind};

    use super::{FakeTransactionStore, transaction};

    #[tokio::test]
    async fn append_then_get_all_round_trips() {
        let store = FakeTransactionStore::default();

        store
            .append(transaction(TransactionKind::Invest, 1.0, "01-01-2024", "a"))
            .await
            .unwrap();

        let rows = store.get_all().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].remark, "a");
    }

    #[tokio::test]
    async fn delete_row_rejects_positions_before_the_data_rows() {
        let store =
            FakeTransactionStore::with_rows(vec![transaction(TransactionKind::Sell, 1.0, "", "")]);

        assert_eq!(store.delete_row(0).await, Err(Error::NotFound));
        assert_eq!(store.delete_row(1).await, Err(Error::NotFound));
        assert_eq!(store.delete_row(2).await, Ok(()));
    }

    #[tokio::test]
    async fn delete_row_rejects_positions_past_the_table() {
        let store =
            FakeTransactionStore::with_rows(vec![transaction(TransactionKind::Sell, 1.0, "", "")]);

        assert_eq!(store.delete_row(3).await, Err(Error::NotFound));
    }
}
