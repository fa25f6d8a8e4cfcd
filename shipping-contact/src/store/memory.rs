//! Thread-safe in-memory metadata store.

use super::{MetadataStore, OrderId};
use crate::errors::StoreError;
use parking_lot::RwLock;
use std::collections::HashMap;

/// An in-memory [`MetadataStore`] keyed by order.
///
/// Useful for tests and for hosts that keep order metadata in process.
#[derive(Debug, Default)]
pub struct InMemoryMetadataStore {
    orders: RwLock<HashMap<OrderId, HashMap<String, String>>>,
}

impl InMemoryMetadataStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all metadata for an order.
    #[must_use]
    pub fn metadata(&self, order: OrderId) -> HashMap<String, String> {
        self.orders.read().get(&order).cloned().unwrap_or_default()
    }

    /// Checks if an order has a value under `key`.
    #[must_use]
    pub fn contains_key(&self, order: OrderId, key: &str) -> bool {
        self.orders
            .read()
            .get(&order)
            .is_some_and(|meta| meta.contains_key(key))
    }

    /// Returns the number of orders with metadata.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.read().len()
    }

    /// Returns true if no order has metadata.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.read().is_empty()
    }

    /// Removes all metadata.
    pub fn clear(&self) {
        self.orders.write().clear();
    }
}

impl MetadataStore for InMemoryMetadataStore {
    fn get(&self, order: OrderId, key: &str) -> Option<String> {
        self.orders.read().get(&order)?.get(key).cloned()
    }

    fn set(&self, order: OrderId, key: &str, value: &str) -> Result<(), StoreError> {
        self.orders
            .write()
            .entry(order)
            .or_default()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl Clone for InMemoryMetadataStore {
    fn clone(&self) -> Self {
        Self {
            orders: RwLock::new(self.orders.read().clone()),
        }
    }
}
