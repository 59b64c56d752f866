//! Transaction entry, history and deletion for the stock maintenance app.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the row conventions of the remote table
//! - View handlers for the entry form and history pages
//! - Endpoints for recording and deleting transactions

mod create_endpoint;
mod create_page;
mod delete_endpoint;
mod history_page;
mod model;

pub use create_endpoint::create_transaction_endpoint;
pub use create_page::{get_new_investment_page, get_new_sell_page};
pub use delete_endpoint::delete_transaction_endpoint;
pub use history_page::{get_investment_history_page, get_sell_history_page};
pub use model::{
    ROW_NUMBER_OFFSET, RowNumber, Transaction, TransactionKind, format_sheet_date,
    row_number_for_index,
};
