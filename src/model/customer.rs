use crate::model::{Address, AddressKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

sequential_id!(
    /// Type-safe identifier for Customers.
    CustomerId,
    "customer"
);

/// A registered customer.
///
/// # Actor Framework
/// Managed by the customer actor; see
/// [`impl ActorEntity for Customer`](#impl-ActorEntity-for-Customer).
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub addresses: HashMap<AddressKind, Address>,
}

impl Customer {
    /// Creates a customer with no saved addresses.
    pub fn new(id: CustomerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            addresses: HashMap::new(),
        }
    }

    /// Stores `address` under `kind`, returning the one it replaced.
    pub fn set_address(&mut self, kind: AddressKind, address: Address) -> Option<Address> {
        self.addresses.insert(kind, address)
    }

    pub fn address(&self, kind: AddressKind) -> Option<&Address> {
        self.addresses.get(&kind)
    }
}

/// Payload for registering a customer.
#[derive(Debug, Clone)]
pub struct CustomerCreate {
    pub name: String,
}

/// Payload for updating a customer's profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub name: Option<String>,
}
