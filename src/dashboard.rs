//! The dashboard page: aggregate totals over every recorded transaction.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error, endpoints,
    html::{PAGE_CONTAINER_STYLE, base, format_currency, link},
    navigation::NavBar,
    store::TransactionStore,
    transaction::{Transaction, TransactionKind},
};

/// The aggregate totals shown on the dashboard.
#[derive(Debug, PartialEq)]
struct Totals {
    invested: f64,
    sold: f64,
    profit: f64,
}

/// Sum the loaded transactions into the dashboard totals.
///
/// An empty slice yields all three totals as zero.
fn summarize(transactions: &[Transaction]) -> Totals {
    let sum_for = |kind: TransactionKind| -> f64 {
        transactions
            .iter()
            .filter(|transaction| transaction.kind == kind)
            .map(|transaction| transaction.amount)
            .sum()
    };

    let invested = sum_for(TransactionKind::Invest);
    let sold = sum_for(TransactionKind::Sell);

    Totals {
        invested,
        sold,
        profit: sold - invested,
    }
}

fn amount_class(amount: f64) -> &'static str {
    if amount < 0.0 {
        "text-red-700 dark:text-red-300"
    } else {
        "text-green-700 dark:text-green-300"
    }
}

fn metric_card(label: &str, value: &str, value_class: Option<&str>) -> Markup {
    html! {
        div
            class="bg-white dark:bg-gray-800 border border-gray-200
                dark:border-gray-700 rounded-lg p-4 shadow-md"
        {
            h4 class="text-sm text-gray-600 dark:text-gray-400 mb-1" { (label) }

            div class={ "text-3xl font-bold " (value_class.unwrap_or_default()) }
            {
                (value)
            }
        }
    }
}

fn dashboard_view(totals: &Totals, has_data: bool) -> Markup {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();
    let new_investment_link = link(endpoints::NEW_INVESTMENT_VIEW, "recording an investment");

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full max-w-2xl space-y-4"
            {
                h2 class="text-xl font-bold" { "Dashboard" }

                div class="grid grid-cols-1 sm:grid-cols-2 gap-4"
                {
                    (metric_card("Total Invested", &format_currency(totals.invested), None))
                    (metric_card("Total Sold", &format_currency(totals.sold), None))
                }

                (metric_card(
                    "Profit / Loss",
                    &format_currency(totals.profit),
                    Some(amount_class(totals.profit)),
                ))

                @if !has_data {
                    p class="text-gray-600 dark:text-gray-400"
                    {
                        "No Data Available. Start by " (new_investment_link) "."
                    }
                }
            }
        }
    };

    base("Dashboard", &content)
}

/// Display the aggregate totals over the full transaction table.
pub async fn get_dashboard_page<S>(State(state): State<AppState<S>>) -> Result<Response, Error>
where
    S: TransactionStore + Send + Sync,
{
    let transactions = state
        .transaction_store
        .get_all()
        .await
        .inspect_err(|error| tracing::error!("could not load transactions for the dashboard: {error}"))?;

    let totals = summarize(&transactions);

    Ok(dashboard_view(&totals, !transactions.is_empty()).into_response())
}

#[cfg(test)]
mod aggregation_tests {
    use crate::{test_utils::transaction, transaction::TransactionKind};

    use super::{Totals, summarize};

    #[test]
    fn empty_table_sums_to_zero() {
        let totals = summarize(&[]);

        assert_eq!(
            totals,
            Totals {
                invested: 0.0,
                sold: 0.0,
                profit: 0.0
            }
        );
    }

    #[test]
    fn profit_is_sold_minus_invested() {
        let transactions = vec![
            transaction(TransactionKind::Invest, 100.0, "01-01-2024", "seed"),
            transaction(TransactionKind::Sell, 40.0, "02-01-2024", "partial"),
        ];

        let totals = summarize(&transactions);

        assert_eq!(totals.invested, 100.0);
        assert_eq!(totals.sold, 40.0);
        assert_eq!(totals.profit, -60.0);
    }

    #[test]
    fn sums_each_kind_separately() {
        let transactions = vec![
            transaction(TransactionKind::Invest, 10.0, "01-01-2024", ""),
            transaction(TransactionKind::Invest, 20.0, "02-01-2024", ""),
            transaction(TransactionKind::Sell, 50.0, "03-01-2024", ""),
            transaction(TransactionKind::Sell, 5.0, "04-01-2024", ""),
        ];

        let totals = summarize(&transactions);

        assert_eq!(totals.invested, 30.0);
        assert_eq!(totals.sold, 55.0);
        assert_eq!(totals.profit, 25.0);
    }
}
