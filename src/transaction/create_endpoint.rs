//! Defines the endpoint for recording a new transaction.

use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
};
// axum_extra's Form is lenient about fields the browser omits or leaves
// empty, unlike axum::Form.
use axum_extra::extract::Form;
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error,
    alert::AlertTemplate,
    html::render,
    store::TransactionStore,
    transaction::{Transaction, TransactionKind, format_sheet_date},
};

/// The form data for recording a transaction.
#[derive(Debug, Deserialize)]
pub struct TransactionEntryForm {
    /// The direction of money flow, carried by a hidden input on each
    /// entry page.
    pub kind: TransactionKind,
    /// The value of the transaction in rupees.
    pub amount: f64,
    /// The date when the transaction occurred.
    pub date: Date,
    /// Text detailing the transaction.
    #[serde(default)]
    pub remark: String,
}

/// A route handler for recording a new transaction.
///
/// Appends a row to the end of the remote table and responds with a success
/// alert. A zero or negative amount skips the write and responds with a
/// validation alert instead; this is the only validated input error.
pub async fn create_transaction_endpoint<S>(
    State(state): State<AppState<S>>,
    Form(form): Form<TransactionEntryForm>,
) -> Response
where
    S: TransactionStore + Send + Sync,
{
    if form.amount <= 0.0 {
        tracing::debug!(
            "rejected {} entry with non-positive amount {}",
            form.kind,
            form.amount
        );
        return Error::InvalidAmount(form.amount).into_alert_response();
    }

    let date = match format_sheet_date(form.date) {
        Ok(date) => date,
        Err(error) => {
            tracing::error!("could not format transaction date: {error}");
            return error.into_alert_response();
        }
    };

    let transaction = Transaction {
        kind: form.kind,
        amount: form.amount,
        date,
        remark: form.remark,
    };

    if let Err(error) = state.transaction_store.append(transaction).await {
        tracing::error!("could not append transaction: {error}");
        return error.into_alert_response();
    }

    let message = match form.kind {
        TransactionKind::Invest => "Investment Saved Successfully!",
        TransactionKind::Sell => "Sell Saved Successfully!",
    };

    render(StatusCode::OK, AlertTemplate::success(message, "").into_markup())
}
