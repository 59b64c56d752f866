//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{delete, get, post},
};

use crate::{
    AppState,
    dashboard::get_dashboard_page,
    endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    store::TransactionStore,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, get_investment_history_page,
        get_new_investment_page, get_new_sell_page, get_sell_history_page,
    },
};

/// Return a router with all the app's routes.
pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: TransactionStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page::<S>))
        .route(endpoints::NEW_INVESTMENT_VIEW, get(get_new_investment_page))
        .route(endpoints::NEW_SELL_VIEW, get(get_new_sell_page))
        .route(
            endpoints::INVESTMENT_HISTORY_VIEW,
            get(get_investment_history_page::<S>),
        )
        .route(endpoints::SELL_HISTORY_VIEW, get(get_sell_history_page::<S>))
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint::<S>),
        )
        .route(
            endpoints::DELETE_TRANSACTION,
            delete(delete_transaction_endpoint::<S>),
        )
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, routing::get_index_page};

    #[tokio::test]
    async fn root_redirects_to_dashboard() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::DASHBOARD_VIEW);
    }
}

#[cfg(test)]
mod router_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;

    use crate::{
        build_router, endpoints,
        test_utils::{FakeTransactionStore, test_state, transaction},
        transaction::TransactionKind,
    };

    fn test_server() -> TestServer {
        let store = FakeTransactionStore::with_rows(vec![transaction(
            TransactionKind::Invest,
            100.0,
            "01-01-2024",
            "seed",
        )]);

        TestServer::new(build_router(test_state(store)))
    }

    #[tokio::test]
    async fn dashboard_renders_through_the_router() {
        let server = test_server();

        let response = server.get(endpoints::DASHBOARD_VIEW).await;

        response.assert_status_ok();
        response.assert_text_contains("Total Invested");
    }

    #[tokio::test]
    async fn history_views_render_through_the_router() {
        let server = test_server();

        server
            .get(endpoints::INVESTMENT_HISTORY_VIEW)
            .await
            .assert_status_ok();
        server
            .get(endpoints::SELL_HISTORY_VIEW)
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_not_found() {
        let server = test_server();

        let response = server.get("/no/such/page").await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_text_contains("404");
    }
}
