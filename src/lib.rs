mod csv_utils;
mod currency;
mod dto;
mod error;
mod gate;
mod queries;
mod seed;
mod stores;

pub use currency::{format_currency, to_major_units};
pub use dto::{
    CardData, Customer, CustomerField, CustomerRow, Invoice, InvoiceForm, InvoiceRow,
    InvoiceStatus, LatestInvoice, Revenue,
};
pub use error::{Error, LoadError};
pub use gate::{authorize, Access, DASHBOARD_PATH, LOGIN_PATH};
pub use queries::{
    fetch_card_data, fetch_customers, fetch_filtered_customers, fetch_filtered_invoices,
    fetch_invoice_by_id, fetch_invoices_pages, fetch_latest_invoices, fetch_revenue,
    ITEMS_PER_PAGE,
};
pub use seed::placeholder;
pub use stores::{CustomersStore, InvoicesStore, SeedStore};
