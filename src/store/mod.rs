//! Store implementations for persisting transactions to the remote
//! spreadsheet.

mod credentials;
mod sheets;
mod transaction;

pub use credentials::ServiceAccountKey;
pub use sheets::GoogleSheetsStore;
pub use transaction::TransactionStore;
