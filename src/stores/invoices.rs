use std::collections::HashMap;

use crate::dto::Invoice;
use crate::error::LoadError;

/// Invoice records in seed order, with an id index for single-invoice
/// lookups.
#[derive(Debug, Default)]
pub struct InvoicesStore {
    invoices: Vec<Invoice>,
    by_id: HashMap<String, usize>,
}

impl InvoicesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an invoice record. Ids must be unique.
    pub fn insert(&mut self, invoice: Invoice) -> Result<(), LoadError> {
        if self.by_id.contains_key(&invoice.id) {
            return Err(LoadError::DuplicateInvoice { id: invoice.id });
        }
        self.by_id.insert(invoice.id.clone(), self.invoices.len());
        self.invoices.push(invoice);
        Ok(())
    }

    /// Looks up an invoice by id.
    pub fn get(&self, id: &str) -> Option<&Invoice> {
        self.by_id.get(id).map(|&index| &self.invoices[index])
    }

    /// Iterates invoices in seed order.
    pub fn iter(&self) -> impl Iterator<Item = &Invoice> {
        self.invoices.iter()
    }

    /// Iterates the invoices owned by one customer, in seed order.
    pub fn for_customer<'a>(&'a self, customer_id: &'a str) -> impl Iterator<Item = &'a Invoice> {
        self.invoices
            .iter()
            .filter(move |invoice| invoice.customer_id == customer_id)
    }

    pub fn len(&self) -> usize {
        self.invoices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }
}
