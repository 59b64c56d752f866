//! The Investment History and Sell History pages.
//!
//! Each page reloads the full table, filters it by kind on the client side
//! and renders one line per transaction with an adjacent delete action. A
//! row's delete target is computed from its position in the *unfiltered*
//! table, so rows hidden by the filter still count towards the position.

use axum::{extract::State, response::IntoResponse, response::Response};
use maud::{Markup, html};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    AppState, Error, endpoints,
    html::{BUTTON_DELETE_STYLE, PAGE_CONTAINER_STYLE, base, format_currency},
    navigation::NavBar,
    store::TransactionStore,
    transaction::{Transaction, TransactionKind, row_number_for_index},
};

/// The max number of graphemes to display for a remark before truncating
/// and displaying ellipses.
const MAX_REMARK_GRAPHEMES: usize = 32;

/// One line of a history page, ready for rendering.
#[derive(Debug, PartialEq)]
struct HistoryRow {
    amount: f64,
    date: String,
    remark: String,
    /// The API path that deletes this row, carrying the view to reload
    /// afterwards.
    delete_url: String,
}

fn view_endpoint(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Invest => endpoints::INVESTMENT_HISTORY_VIEW,
        TransactionKind::Sell => endpoints::SELL_HISTORY_VIEW,
    }
}

fn truncate_remark(remark: &str) -> String {
    let graphemes: Vec<&str> = remark.graphemes(true).collect();

    if graphemes.len() <= MAX_REMARK_GRAPHEMES {
        remark.to_owned()
    } else {
        format!("{}…", graphemes[..MAX_REMARK_GRAPHEMES].concat())
    }
}

/// Filter `transactions` down to `kind`, keeping each row's full-table
/// position for the delete link.
fn history_rows(transactions: Vec<Transaction>, kind: TransactionKind) -> Vec<HistoryRow> {
    transactions
        .into_iter()
        .enumerate()
        .filter(|(_, transaction)| transaction.kind == kind)
        .map(|(index, transaction)| {
            let delete_endpoint =
                endpoints::format_endpoint(endpoints::DELETE_TRANSACTION, row_number_for_index(index));

            HistoryRow {
                amount: transaction.amount,
                date: transaction.date,
                remark: truncate_remark(&transaction.remark),
                delete_url: format!("{delete_endpoint}?redirect={}", view_endpoint(kind)),
            }
        })
        .collect()
}

fn history_view(kind: TransactionKind, rows: &[HistoryRow], table_is_empty: bool) -> Markup {
    let (title, empty_message) = match kind {
        TransactionKind::Invest => ("Investment History", "No Investment transactions found."),
        TransactionKind::Sell => ("Sell History", "No Sell transactions found."),
    };
    let nav_bar = NavBar::new(view_endpoint(kind)).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full max-w-2xl space-y-4"
            {
                h2 class="text-xl font-bold" { (title) }

                @if table_is_empty {
                    p class="text-gray-600 dark:text-gray-400" { "No Data Available." }
                } @else if rows.is_empty() {
                    p class="text-gray-600 dark:text-gray-400" { (empty_message) }
                } @else {
                    ul class="divide-y divide-gray-200 dark:divide-gray-700 rounded bg-white dark:bg-gray-800"
                    {
                        @for row in rows {
                            li class="flex items-center justify-between gap-4 px-4 py-3"
                            {
                                span
                                {
                                    (format_currency(row.amount))
                                    " | "
                                    (row.date)
                                    " | "
                                    (row.remark)
                                }

                                button
                                    type="button"
                                    hx-delete=(row.delete_url)
                                    hx-target-error="#alert-container"
                                    class=(BUTTON_DELETE_STYLE)
                                {
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    base(title, &content)
}

async fn history_page<S>(state: AppState<S>, kind: TransactionKind) -> Result<Response, Error>
where
    S: TransactionStore + Send + Sync,
{
    let transactions = state
        .transaction_store
        .get_all()
        .await
        .inspect_err(|error| tracing::error!("could not load transactions for {kind} history: {error}"))?;

    let table_is_empty = transactions.is_empty();
    let rows = history_rows(transactions, kind);

    Ok(history_view(kind, &rows, table_is_empty).into_response())
}

/// Display every recorded investment with a delete action per row.
pub async fn get_investment_history_page<S>(
    State(state): State<AppState<S>>,
) -> Result<Response, Error>
where
    S: TransactionStore + Send + Sync,
{
    history_page(state, TransactionKind::Invest).await
}

/// Display every recorded sell with a delete action per row.
pub async fn get_sell_history_page<S>(State(state): State<AppState<S>>) -> Result<Response, Error>
where
    S: TransactionStore + Send + Sync,
{
    history_page(state, TransactionKind::Sell).await
}


#[cfg(test)]
mod view_tests {
    use axum::{body::Body, extract::State, http::StatusCode, response::Response};
    use scraper::{Html, Selector};

    use crate::{
        store::TransactionStore,
        test_utils::{FakeTransactionStore, test_state, transaction},
        transaction::TransactionKind,
    };

    use super::{get_investment_history_page, get_sell_history_page};

    fn seeded_store() -> FakeTransactionStore {
        FakeTransactionStore::with_rows(vec![
            transaction(TransactionKind::Invest, 100.0, "01-01-2024", "seed"),
            transaction(TransactionKind::Sell, 40.0, "02-01-2024", "partial"),
        ])
    }

    #[tokio::test]
    async fn investment_history_lists_invest_rows_only() {
        let state = test_state(seeded_store());

        let response = get_investment_history_page(State(state)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html(response).await;
        assert_valid_html(&html);

        // Scope to main so the nav bar's list items are not counted.
        let items = select_all(&html, "main li");
        assert_eq!(items.len(), 1, "want only the invest row listed");
        assert!(items[0].contains("₹100.00"));
        assert!(items[0].contains("01-01-2024"));
        assert!(items[0].contains("seed"));
        assert!(!items[0].contains("partial"));
    }

    #[tokio::test]
    async fn invest_row_delete_button_targets_row_two() {
        let state = test_state(seeded_store());

        let response = get_investment_history_page(State(state)).await.unwrap();

        let html = parse_html(response).await;
        let selector = Selector::parse("button[hx-delete]").unwrap();
        let buttons: Vec<_> = html.select(&selector).collect();
        assert_eq!(buttons.len(), 1);
        assert_eq!(
            buttons[0].value().attr("hx-delete"),
            Some("/api/transactions/2?redirect=/investments")
        );
    }

    #[tokio::test]
    async fn sell_row_delete_button_accounts_for_preceding_invest_row() {
        let state = test_state(seeded_store());

        let response = get_sell_history_page(State(state)).await.unwrap();

        let html = parse_html(response).await;
        let selector = Selector::parse("button[hx-delete]").unwrap();
        let buttons: Vec<_> = html.select(&selector).collect();
        assert_eq!(buttons.len(), 1);
        assert_eq!(
            buttons[0].value().attr("hx-delete"),
            Some("/api/transactions/3?redirect=/sells")
        );
    }

    #[tokio::test]
    async fn deleting_the_only_invest_row_leaves_empty_message() {
        let store = seeded_store();
        store
            .delete_row(2)
            .await
            .expect("could not delete the invest row");
        let state = test_state(store);

        let response = get_investment_history_page(State(state)).await.unwrap();

        let html = parse_html(response).await;
        let text = html.html();
        assert!(
            text.contains("No Investment transactions found."),
            "want the empty filter message after deleting the only invest row"
        );
    }

    #[tokio::test]
    async fn empty_table_shows_no_data_available() {
        let state = test_state(FakeTransactionStore::default());

        let response = get_sell_history_page(State(state)).await.unwrap();

        let html = parse_html(response).await;
        assert!(html.html().contains("No Data Available."));
    }

    fn select_all(html: &Html, selector: &str) -> Vec<String> {
        let selector = Selector::parse(selector).unwrap();
        html.select(&selector)
            .map(|element| element.html())
            .collect()
    }

    async fn parse_html(response: Response<Body>) -> Html {
        let body = response.into_body();
        let body = axum::body::to_bytes(body, usize::MAX).await.unwrap();
        let text = String::from_utf8_lossy(&body).to_string();

        Html::parse_document(&text)
    }

    #[track_caller]
    fn assert_valid_html(html: &Html) {
        assert!(
            html.errors.is_empty(),
            "Got HTML parsing errors: {:?}",
            html.errors
        );
    }
}
