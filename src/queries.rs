//! Read-only dashboard queries over the seed store.
//!
//! Every operation is a stateless function taking `&SeedStore`: linear
//! scans, joins against the customer index, and per-call aggregation.
//! An internal failure is logged with its cause and surfaced as the
//! operation's single generic error, keeping backend detail out of the
//! UI layer.

use tracing::error;

use crate::currency::{format_currency, to_major_units};
use crate::dto::{
    CardData, Customer, CustomerField, CustomerRow, Invoice, InvoiceForm, InvoiceRow,
    InvoiceStatus, LatestInvoice, Revenue,
};
use crate::error::Error;
use crate::stores::SeedStore;

/// Fixed page size for the invoices table.
pub const ITEMS_PER_PAGE: usize = 6;

/// How many invoices the latest-invoices panel shows.
const LATEST_INVOICES_LIMIT: usize = 5;

/// Returns the full revenue series in seed order.
pub fn fetch_revenue(store: &SeedStore) -> Result<Vec<Revenue>, Error> {
    Ok(store.revenue().to_vec())
}

/// Returns the most recent invoices, newest first, joined with the
/// owning customer and the amount rendered as a currency string.
pub fn fetch_latest_invoices(store: &SeedStore) -> Result<Vec<LatestInvoice>, Error> {
    let mut invoices: Vec<&Invoice> = store.invoices().iter().collect();
    // Stable sort: invoices issued the same day keep their seed order.
    invoices.sort_by(|a, b| b.date.cmp(&a.date));

    invoices
        .into_iter()
        .take(LATEST_INVOICES_LIMIT)
        .map(|invoice| {
            let customer = join_customer(store, invoice, Error::FetchLatestInvoices)?;
            Ok(LatestInvoice {
                id: invoice.id.clone(),
                name: customer.name.clone(),
                image_url: customer.image_url.clone(),
                email: customer.email.clone(),
                amount: format_currency(invoice.amount),
            })
        })
        .collect()
}

/// Returns the summary counts and per-status totals for the dashboard
/// cards.
pub fn fetch_card_data(store: &SeedStore) -> Result<CardData, Error> {
    let mut total_paid = 0i64;
    let mut total_pending = 0i64;
    for invoice in store.invoices().iter() {
        match invoice.status {
            InvoiceStatus::Paid => total_paid += invoice.amount,
            InvoiceStatus::Pending => total_pending += invoice.amount,
        }
    }

    Ok(CardData {
        number_of_customers: store.customers().len(),
        number_of_invoices: store.invoices().len(),
        total_paid_invoices: format_currency(total_paid),
        total_pending_invoices: format_currency(total_pending),
    })
}

/// Returns one page of invoices whose search text contains `query`,
/// newest first. Pages are 1-indexed and hold at most [`ITEMS_PER_PAGE`]
/// rows; pages past the end are empty.
pub fn fetch_filtered_invoices(
    store: &SeedStore,
    query: &str,
    page: usize,
) -> Result<Vec<InvoiceRow>, Error> {
    let mut rows = Vec::new();
    for invoice in store.invoices().iter() {
        let customer = join_customer(store, invoice, Error::FetchFilteredInvoices)?;
        if !matches_query(invoice, customer, query) {
            continue;
        }
        rows.push(InvoiceRow {
            id: invoice.id.clone(),
            customer_id: invoice.customer_id.clone(),
            name: customer.name.clone(),
            email: customer.email.clone(),
            image_url: customer.image_url.clone(),
            date: invoice.date,
            amount: invoice.amount,
            status: invoice.status,
        });
    }
    rows.sort_by(|a, b| b.date.cmp(&a.date));

    let offset = page.saturating_sub(1) * ITEMS_PER_PAGE;
    Ok(rows.into_iter().skip(offset).take(ITEMS_PER_PAGE).collect())
}

/// Returns how many pages the filtered invoices table spans.
pub fn fetch_invoices_pages(store: &SeedStore, query: &str) -> Result<usize, Error> {
    let mut matches: usize = 0;
    for invoice in store.invoices().iter() {
        let customer = join_customer(store, invoice, Error::FetchInvoicesPages)?;
        if matches_query(invoice, customer, query) {
            matches += 1;
        }
    }
    Ok(matches.div_ceil(ITEMS_PER_PAGE))
}

/// Looks up a single invoice in the edit-form shape, with the amount
/// converted to major units. Returns `None` for an unknown id.
pub fn fetch_invoice_by_id(store: &SeedStore, id: &str) -> Result<Option<InvoiceForm>, Error> {
    Ok(store.invoices().get(id).map(|invoice| InvoiceForm {
        id: invoice.id.clone(),
        customer_id: invoice.customer_id.clone(),
        amount: to_major_units(invoice.amount),
        status: invoice.status,
    }))
}

/// Returns id/name pairs for every customer, in seed order, for
/// selection widgets.
pub fn fetch_customers(store: &SeedStore) -> Result<Vec<CustomerField>, Error> {
    Ok(store
        .customers()
        .iter()
        .map(|customer| CustomerField {
            id: customer.id.clone(),
            name: customer.name.clone(),
        })
        .collect())
}

/// Returns customers whose name or email contains `query`
/// (case-insensitively), annotated with their invoice counts and
/// per-status totals, sorted by name.
pub fn fetch_filtered_customers(store: &SeedStore, query: &str) -> Result<Vec<CustomerRow>, Error> {
    let needle = query.to_lowercase();
    let mut rows = Vec::new();
    for customer in store.customers().iter() {
        if !customer.name.to_lowercase().contains(&needle)
            && !customer.email.to_lowercase().contains(&needle)
        {
            continue;
        }

        let mut total_invoices = 0;
        let mut total_pending = 0i64;
        let mut total_paid = 0i64;
        for invoice in store.invoices().for_customer(&customer.id) {
            total_invoices += 1;
            match invoice.status {
                InvoiceStatus::Pending => total_pending += invoice.amount,
                InvoiceStatus::Paid => total_paid += invoice.amount,
            }
        }

        rows.push(CustomerRow {
            id: customer.id.clone(),
            name: customer.name.clone(),
            email: customer.email.clone(),
            image_url: customer.image_url.clone(),
            total_invoices,
            total_pending,
            total_paid,
        });
    }
    rows.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(rows)
}

/// Composite search text for an invoice row: customer name, email, raw
/// minor-unit amount, ISO date, and status, matched case-insensitively.
fn matches_query(invoice: &Invoice, customer: &Customer, query: &str) -> bool {
    let haystack = format!(
        "{} {} {} {} {}",
        customer.name,
        customer.email,
        invoice.amount,
        invoice.date,
        invoice.status.as_str()
    )
    .to_lowercase();
    haystack.contains(&query.to_lowercase())
}

fn join_customer<'a>(
    store: &'a SeedStore,
    invoice: &Invoice,
    op_error: Error,
) -> Result<&'a Customer, Error> {
    store.customers().get(&invoice.customer_id).ok_or_else(|| {
        error!(
            invoice = %invoice.id,
            customer = %invoice.customer_id,
            "invoice references a customer missing from the seed store"
        );
        op_error
    })
}
