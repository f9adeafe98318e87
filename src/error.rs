//! Domain-specific errors for the dashboard data layer.
//!
//! Split along the two failure surfaces:
//! - [`LoadError`] for seed ingestion and validation (malformed CSV,
//!   duplicate ids, invoices referencing unknown customers)
//! - [`Error`] for the query operations, one generic variant per
//!   operation
//!
//! Query errors deliberately carry no detail: the underlying cause is
//! logged where it occurs, and the UI layer only ever sees the generic
//! per-operation message.

/// Query-facing errors, one variant per dashboard operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("failed to fetch revenue data")]
    FetchRevenue,
    #[error("failed to fetch the latest invoices")]
    FetchLatestInvoices,
    #[error("failed to fetch card data")]
    FetchCardData,
    #[error("failed to fetch invoices")]
    FetchFilteredInvoices,
    #[error("failed to fetch total number of invoices")]
    FetchInvoicesPages,
    #[error("failed to fetch invoice")]
    FetchInvoiceById,
    #[error("failed to fetch all customers")]
    FetchCustomers,
    #[error("failed to fetch customer table")]
    FetchFilteredCustomers,
}

/// Seed ingestion and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("duplicate customer id: {id}")]
    DuplicateCustomer { id: String },
    #[error("duplicate invoice id: {id}")]
    DuplicateInvoice { id: String },
    #[error("invoice {invoice_id} references unknown customer {customer_id}")]
    UnknownCustomer {
        invoice_id: String,
        customer_id: String,
    },
}
