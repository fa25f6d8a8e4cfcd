//! Order identity, submitted form data, and the host metadata store seam.

mod memory;

pub use memory::InMemoryMetadataStore;

use crate::errors::StoreError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identifier of a host order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// Wraps a raw order id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-order key/value metadata owned by the host.
///
/// Implementations handle their own locking; callers perform plain reads and
/// writes with no retries.
#[cfg_attr(test, mockall::automock)]
pub trait MetadataStore: Send + Sync {
    /// Reads a value. A missing key is `None`.
    fn get(&self, order: OrderId, key: &str) -> Option<String>;

    /// Writes a value, replacing any previous one.
    fn set(&self, order: OrderId, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Raw values submitted with a checkout form, keyed by field key.
///
/// Read-only once built; handlers borrow it for the duration of one call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmittedFormData {
    values: HashMap<String, String>,
}

impl SubmittedFormData {
    /// Creates an empty submission.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a submission from key/value pairs.
    #[must_use]
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Gets the raw value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Gets the value for a key, treating whitespace-only as absent.
    #[must_use]
    pub fn non_blank(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Checks if a key was submitted.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns the number of submitted keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing was submitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SubmittedFormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_display() {
        let id = OrderId::from(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn test_submission_non_blank() {
        let submitted = SubmittedFormData::from_pairs([
            ("shipping_email", "  a@b.com "),
            ("shipping_phone", "   "),
        ]);

        assert_eq!(submitted.non_blank("shipping_email"), Some("a@b.com"));
        assert_eq!(submitted.non_blank("shipping_phone"), None);
        assert!(submitted.contains_key("shipping_phone"));
        assert_eq!(submitted.non_blank("missing"), None);
        assert_eq!(submitted.len(), 2);
    }

    #[test]
    fn test_submission_deserializes_from_map() {
        let submitted: SubmittedFormData =
            serde_json::from_str(r#"{"shipping_phone": "555-1234"}"#).unwrap();
        assert_eq!(submitted.get("shipping_phone"), Some("555-1234"));
    }
}
