//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/transactions/{row_number}',
//! use [format_endpoint].

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The landing page showing aggregate totals.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page for recording a new investment.
pub const NEW_INVESTMENT_VIEW: &str = "/investments/new";
/// The page for recording a new sell.
pub const NEW_SELL_VIEW: &str = "/sells/new";
/// The page listing every recorded investment.
pub const INVESTMENT_HISTORY_VIEW: &str = "/investments";
/// The page listing every recorded sell.
pub const SELL_HISTORY_VIEW: &str = "/sells";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route to record a transaction.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route to delete a single row of the transaction table.
pub const DELETE_TRANSACTION: &str = "/api/transactions/{row_number}";

/// Replace the parameter in `endpoint_path` with `row_number`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/transactions/{row_number}',
/// '{row_number}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, row_number: u32) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        row_number,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD_VIEW);
        assert_endpoint_is_valid_uri(endpoints::NEW_INVESTMENT_VIEW);
        assert_endpoint_is_valid_uri(endpoints::NEW_SELL_VIEW);
        assert_endpoint_is_valid_uri(endpoints::INVESTMENT_HISTORY_VIEW);
        assert_endpoint_is_valid_uri(endpoints::SELL_HISTORY_VIEW);
        assert_endpoint_is_valid_uri(endpoints::INTERNAL_ERROR_VIEW);

        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS_API);
        assert_endpoint_is_valid_uri(endpoints::DELETE_TRANSACTION);
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint("/api/transactions/{row_number}", 2);

        assert_eq!(formatted_path, "/api/transactions/2");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint("/hello/world", 1);

        assert_eq!(formatted_path, "/hello/world");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn parameter_in_middle() {
        let formatted_path = format_endpoint("/hello/{world}/bye", 1);

        assert_eq!(formatted_path, "/hello/1/bye");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }
}
