//! Priority-ordered filter chain for field schemas.

use crate::schema::FieldSchema;
use std::sync::Arc;

/// Priority given to handlers that do not ask for one.
pub const DEFAULT_PRIORITY: i32 = 10;

/// A transformer applied to a field schema as it passes through a chain.
pub trait SchemaFilter: Send + Sync {
    /// Returns the filter's priority (lower = earlier execution).
    fn priority(&self) -> i32 {
        DEFAULT_PRIORITY
    }

    /// Transforms the schema.
    fn filter(&self, schema: FieldSchema) -> FieldSchema;
}

impl<F> SchemaFilter for F
where
    F: Fn(FieldSchema) -> FieldSchema + Send + Sync,
{
    fn filter(&self, schema: FieldSchema) -> FieldSchema {
        self(schema)
    }
}

/// A chain of schema filters.
///
/// Filters run in ascending priority; filters with equal priority run in
/// registration order.
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Arc<dyn SchemaFilter>>,
}

impl FilterChain {
    /// Creates a new empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter to the chain.
    pub fn add(&mut self, filter: Arc<dyn SchemaFilter>) {
        self.filters.push(filter);
        self.filters.sort_by_key(|f| f.priority());
    }

    /// Passes `schema` through every filter.
    #[must_use]
    pub fn apply(&self, schema: FieldSchema) -> FieldSchema {
        self.filters
            .iter()
            .fold(schema, |schema, filter| filter.filter(schema))
    }

    /// Returns the number of filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns true if the chain is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl std::fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterChain")
            .field("len", &self.filters.len())
            .finish()
    }
}
