//! The 404 not found page.

use axum::{http::StatusCode, response::Response};

use crate::html::{error_view, render};

/// Render the 404 not found page.
pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

/// Get a response containing the rendered 404 not found page.
pub fn get_404_not_found_response() -> Response {
    render(
        StatusCode::NOT_FOUND,
        error_view(
            "Page Not Found",
            "404",
            "Sorry, we can't find that page.",
            "Head back to the dashboard to keep tracking your stocks.",
        ),
    )
}
