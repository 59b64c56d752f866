//! Defines the route handlers for the Add Investment and Add Sell pages.

use maud::{Markup, html};
use time::OffsetDateTime;

use crate::{
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, base,
        loading_spinner,
    },
    navigation::NavBar,
    transaction::TransactionKind,
};

fn entry_form_view(kind: TransactionKind) -> Markup {
    let (title, active_endpoint, submit_label) = match kind {
        TransactionKind::Invest => ("Add Investment", endpoints::NEW_INVESTMENT_VIEW, "Save Investment"),
        TransactionKind::Sell => ("Add Sell", endpoints::NEW_SELL_VIEW, "Save Sell"),
    };
    let nav_bar = NavBar::new(active_endpoint).into_html();
    let spinner = loading_spinner();
    // The date may be any value the date picker allows, past or future, so
    // today is only a default, not a bound.
    let today = OffsetDateTime::now_utc().date();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            form
                hx-post=(endpoints::TRANSACTIONS_API)
                hx-target="#alert-container"
                hx-swap="innerHTML"
                hx-target-error="#alert-container"
                class="w-full space-y-4 md:space-y-6"
            {
                h2 class="text-xl font-bold" { (title) }

                input type="hidden" name="kind" value=(kind.tag());

                div
                {
                    label
                        for="amount"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Enter Amount"
                    }

                    input
                        name="amount"
                        id="amount"
                        type="number"
                        min="0"
                        step="0.01"
                        placeholder="0.00"
                        required
                        autofocus
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label
                        for="date"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Select Date"
                    }

                    input
                        name="date"
                        id="date"
                        type="date"
                        required
                        value=(today)
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label
                        for="remark"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Remark"
                    }

                    input
                        name="remark"
                        id="remark"
                        type="text"
                        placeholder="Remark"
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
                {
                    span
                        id="indicator"
                        class="inline htmx-indicator"
                    {
                        (spinner)
                    }
                    " " (submit_label)
                }
            }
        }
    };

    base(title, &content)
}

/// Renders the page for recording an investment.
pub async fn get_new_investment_page() -> Markup {
    entry_form_view(TransactionKind::Invest)
}

/// Renders the page for recording a sell.
pub async fn get_new_sell_page() -> Markup {
    entry_form_view(TransactionKind::Sell)
}
