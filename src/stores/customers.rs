use std::collections::HashMap;

use crate::dto::Customer;
use crate::error::LoadError;

/// Customer records in seed order, with an id index for joins.
#[derive(Debug, Default)]
pub struct CustomersStore {
    customers: Vec<Customer>,
    by_id: HashMap<String, usize>,
}

impl CustomersStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a customer record. Ids must be unique.
    pub fn insert(&mut self, customer: Customer) -> Result<(), LoadError> {
        if self.by_id.contains_key(&customer.id) {
            return Err(LoadError::DuplicateCustomer { id: customer.id });
        }
        self.by_id.insert(customer.id.clone(), self.customers.len());
        self.customers.push(customer);
        Ok(())
    }

    /// Looks up a customer by id.
    pub fn get(&self, id: &str) -> Option<&Customer> {
        self.by_id.get(id).map(|&index| &self.customers[index])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Iterates customers in seed order.
    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.customers.iter()
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}
