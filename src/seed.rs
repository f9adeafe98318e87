//! Bundled placeholder seed data.
//!
//! Hand-authored records for running the dashboard without an external
//! data source. The CSVs live under `data/` and are compiled into the
//! binary.

use crate::error::LoadError;
use crate::stores::SeedStore;

const CUSTOMERS_CSV: &str = include_str!("../data/customers.csv");
const INVOICES_CSV: &str = include_str!("../data/invoices.csv");
const REVENUE_CSV: &str = include_str!("../data/revenue.csv");

/// Builds the bundled placeholder store.
///
/// # Errors
/// Returns an error if the bundled CSVs fail validation; the data is
/// fixed at compile time, so an error here means the bundled seed
/// itself is broken.
pub fn placeholder() -> Result<SeedStore, LoadError> {
    SeedStore::from_csv(
        CUSTOMERS_CSV.as_bytes(),
        INVOICES_CSV.as_bytes(),
        REVENUE_CSV.as_bytes(),
    )
}
