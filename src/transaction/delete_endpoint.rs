//! Defines the endpoint for deleting a row of the transaction table.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use serde::Deserialize;

use crate::{
    AppState, endpoints,
    store::TransactionStore,
    transaction::RowNumber,
};

/// Query parameters for the delete endpoint.
#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    /// The view to reload after the delete. Row positions shift on every
    /// deletion, so the whole view must be recomputed from a fresh load.
    #[serde(default)]
    pub redirect: Option<String>,
}

/// A route handler for deleting the row at the given 1-based,
/// header-inclusive position.
///
/// The position is whatever the caller computed at render time; there is no
/// check that the same row still lives there. Concurrent external edits can
/// therefore delete a neighbour — an accepted limitation of the
/// position-only data model.
pub async fn delete_transaction_endpoint<S>(
    State(state): State<AppState<S>>,
    Path(row_number): Path<RowNumber>,
    Query(params): Query<DeleteParams>,
) -> Response
where
    S: TransactionStore + Send + Sync,
{
    match state.transaction_store.delete_row(row_number).await {
        Ok(()) => {
            let redirect = params
                .redirect
                .unwrap_or_else(|| endpoints::DASHBOARD_VIEW.to_owned());

            (HxRedirect(redirect), StatusCode::SEE_OTHER).into_response()
        }
        Err(error) => {
            tracing::error!("could not delete row {row_number}: {error}");
            error.into_alert_response()
        }
    }
}
