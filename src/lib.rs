//! Stocksheet is a small web app for maintaining stock invest/sell records.
//!
//! Every recorded transaction lives in one worksheet of a remote Google
//! Sheets spreadsheet; the app is a thin presentation and CRUD layer over
//! that table. This library provides a REST API that directly serves HTML
//! pages.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod dashboard;
mod endpoints;
mod html;
mod internal_server_error;
mod navigation;
mod not_found;
mod routing;
mod state;
pub mod store;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use routing::build_router;
pub use state::AppState;
pub use transaction::{RowNumber, Transaction, TransactionKind};

use crate::{
    alert::AlertTemplate,
    html::render,
    internal_server_error::{InternalServerErrorPageTemplate, render_internal_server_error},
    not_found::get_404_not_found_response,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The user submitted a zero or negative amount.
    ///
    /// This is the only validated input error: the write is skipped and an
    /// inline alert is shown instead.
    #[error("{0} is not a valid amount, amounts must be greater than zero")]
    InvalidAmount(f64),

    /// The service account key file could not be read or parsed.
    #[error("could not load the service account credentials: {0}")]
    Credentials(String),

    /// The token endpoint rejected the service account assertion.
    #[error("could not exchange the service account assertion for an access token: {0}")]
    TokenExchange(String),

    /// The HTTP request to the spreadsheet API could not be completed.
    #[error("could not reach the spreadsheet API: {0}")]
    SheetRequest(String),

    /// The spreadsheet API answered with a non-success status.
    #[error("the spreadsheet API returned HTTP {status}: {message}")]
    SheetApi {
        /// The HTTP status code of the response.
        status: u16,
        /// The error message extracted from the response body.
        message: String,
    },

    /// The spreadsheet has no worksheets to operate on.
    #[error("the spreadsheet has no worksheets")]
    MissingWorksheet,

    /// A stored row could not be mapped to a transaction.
    ///
    /// The table is the sole source of truth and rows are only ever written
    /// by the entry form, so a malformed row means the sheet was edited by
    /// hand. The current action is aborted rather than guessing.
    #[error("row {row_number} is malformed: {reason}")]
    MalformedRow {
        /// The 1-based, header-inclusive position of the offending row.
        row_number: u32,
        /// What made the row unusable.
        reason: String,
    },

    /// There was an error formatting a date for storage.
    #[error("could not format the date {1}: {0}")]
    InvalidDateFormat(String, String),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Error::SheetRequest(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                render_internal_server_error(InternalServerErrorPageTemplate::default())
            }
        }
    }
}

impl Error {
    fn into_alert_response(self) -> Response {
        match self {
            Error::InvalidAmount(_) => render(
                StatusCode::BAD_REQUEST,
                AlertTemplate::error("Invalid amount", "Please enter valid amount").into_markup(),
            ),
            Error::NotFound => render(
                StatusCode::NOT_FOUND,
                AlertTemplate::error(
                    "Could not delete transaction",
                    "The row could not be found. \
                    Try refreshing the page to see if the transaction has already been deleted.",
                )
                .into_markup(),
            ),
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                render(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    AlertTemplate::error(
                        "Something went wrong",
                        "An unexpected error occurred, check the server logs for more details.",
                    )
                    .into_markup(),
                )
            }
        }
    }
}
