//! Defines the core transaction model and the row conventions of the remote
//! table.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

/// The 1-based, header-inclusive position of a row in the remote table.
///
/// Position is the only row identifier the table has. It shifts on every
/// deletion, so it must always be recomputed from a fresh load and never
/// cached across user interactions.
pub type RowNumber = u32;

/// Offset from a zero-based data row index to its [RowNumber]: one for the
/// header row at position 1, one because rows are 1-indexed.
pub const ROW_NUMBER_OFFSET: RowNumber = 2;

/// The format of the date strings stored in the table's Date column.
const SHEET_DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[day]-[month]-[year]");

/// The direction of money flow in a [Transaction].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money put into a holding.
    Invest,
    /// Money received by selling a holding.
    Sell,
}

impl TransactionKind {
    /// The tag stored in the table's Type column.
    pub fn tag(&self) -> &'static str {
        match self {
            TransactionKind::Invest => "invest",
            TransactionKind::Sell => "sell",
        }
    }

    /// Parse a Type cell back into a kind. Returns `None` for anything other
    /// than the two stored tags.
    pub fn from_tag(tag: &str) -> Option<TransactionKind> {
        match tag {
            "invest" => Some(TransactionKind::Invest),
            "sell" => Some(TransactionKind::Sell),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single invest or sell event recorded in the remote table.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The direction of money flow.
    pub kind: TransactionKind,
    /// The amount of money that changed hands.
    pub amount: f64,
    /// When the transaction happened, as the dd-mm-yyyy string stored in the
    /// table. Loaded rows carry this back verbatim.
    pub date: String,
    /// Free text describing the transaction. May be empty.
    pub remark: String,
}

/// Format a calendar date as the dd-mm-yyyy display string stored in the
/// table's Date column.
pub fn format_sheet_date(date: Date) -> Result<String, Error> {
    date.format(SHEET_DATE_FORMAT)
        .map_err(|error| Error::InvalidDateFormat(error.to_string(), date.to_string()))
}

/// The position in the remote table of the data row at the zero-based
/// `index` within a full load.
pub fn row_number_for_index(index: usize) -> RowNumber {
    index as RowNumber + ROW_NUMBER_OFFSET
}
