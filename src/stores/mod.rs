//! Storage layer for the dashboard seed data. Provides storage for:
//! - Customer records ([`CustomersStore`])
//! - Invoice records ([`InvoicesStore`])
//! - The monthly revenue series
//!
//! All collections are built and validated once at startup and never
//! mutated afterwards; reads are synchronous, direct memory access.

mod customers;
mod invoices;

pub use customers::CustomersStore;
pub use invoices::InvoicesStore;

use std::io::Read;

use crate::csv_utils::read_csv;
use crate::dto::{Customer, Invoice, Revenue};
use crate::error::LoadError;

/// The immutable seed store backing every dashboard query.
///
/// Constructed once by the composing application and passed by reference
/// into the query functions.
#[derive(Debug, Default)]
pub struct SeedStore {
    customers: CustomersStore,
    invoices: InvoicesStore,
    revenue: Vec<Revenue>,
}

impl SeedStore {
    /// Builds a validated store from in-memory records.
    ///
    /// # Errors
    /// Returns an error if a customer or invoice id repeats, or if an
    /// invoice references a customer that is not part of the seed.
    pub fn from_records(
        customers: Vec<Customer>,
        invoices: Vec<Invoice>,
        revenue: Vec<Revenue>,
    ) -> Result<Self, LoadError> {
        let mut store = Self::default();
        for customer in customers {
            store.customers.insert(customer)?;
        }
        for invoice in invoices {
            if !store.customers.contains(&invoice.customer_id) {
                return Err(LoadError::UnknownCustomer {
                    invoice_id: invoice.id,
                    customer_id: invoice.customer_id,
                });
            }
            store.invoices.insert(invoice)?;
        }
        store.revenue = revenue;
        Ok(store)
    }

    /// Builds a validated store from three CSV sources (with headers).
    ///
    /// # Errors
    /// Returns an error if any source is malformed CSV, or if the parsed
    /// records fail [`SeedStore::from_records`] validation.
    pub fn from_csv<C, I, R>(customers: C, invoices: I, revenue: R) -> Result<Self, LoadError>
    where
        C: Read,
        I: Read,
        R: Read,
    {
        let customers = read_csv(customers).collect::<Result<_, _>>()?;
        let invoices = read_csv(invoices).collect::<Result<_, _>>()?;
        let revenue = read_csv(revenue).collect::<Result<_, _>>()?;
        Self::from_records(customers, invoices, revenue)
    }

    pub fn customers(&self) -> &CustomersStore {
        &self.customers
    }

    pub fn invoices(&self) -> &InvoicesStore {
        &self.invoices
    }

    /// The monthly revenue series, in seed order.
    pub fn revenue(&self) -> &[Revenue] {
        &self.revenue
    }

    /// Assembles a store without referential validation, for exercising
    /// query behavior on broken seed data.
    #[cfg(test)]
    pub(crate) fn from_parts_unchecked(
        customers: CustomersStore,
        invoices: InvoicesStore,
        revenue: Vec<Revenue>,
    ) -> Self {
        Self {
            customers,
            invoices,
            revenue,
        }
    }
}
