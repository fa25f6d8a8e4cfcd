//! Hook registry dispatching host events to typed handlers.

use super::chain::{FilterChain, SchemaFilter, DEFAULT_PRIORITY};
use crate::render::MarkupFragment;
use crate::schema::FieldSchema;
use crate::store::{MetadataStore, OrderId, SubmittedFormData};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Schema extension points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaHook {
    /// Shipping fields shown on the customer checkout form.
    CheckoutShippingFields,
    /// Shipping fields shown when editing an order in the admin.
    AdminShippingFields,
}

/// Handler run once per finalized order.
pub trait OrderFinalizedListener: Send + Sync {
    /// Returns the listener's priority (lower = earlier execution).
    fn priority(&self) -> i32 {
        DEFAULT_PRIORITY
    }

    /// Called with the submitted form after the order is created.
    fn on_order_finalized(
        &self,
        order: OrderId,
        submitted: &SubmittedFormData,
        store: &dyn MetadataStore,
    );
}

/// Handler run once per rendering of an order's details.
pub trait OrderDetailsRenderer: Send + Sync {
    /// Returns the renderer's priority (lower = earlier output).
    fn priority(&self) -> i32 {
        DEFAULT_PRIORITY
    }

    /// Produces the markup appended after the customer details.
    fn render_order_details(&self, order: OrderId, store: &dyn MetadataStore) -> MarkupFragment;
}

/// Registry of handlers for every extension point.
#[derive(Default)]
pub struct HookRegistry {
    schema_filters: HashMap<SchemaHook, FilterChain>,
    finalized_listeners: Vec<Arc<dyn OrderFinalizedListener>>,
    detail_renderers: Vec<Arc<dyn OrderDetailsRenderer>>,
}

impl HookRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a schema filter on an extension point.
    pub fn add_schema_filter(&mut self, hook: SchemaHook, filter: Arc<dyn SchemaFilter>) {
        self.schema_filters.entry(hook).or_default().add(filter);
    }

    /// Passes `schema` through every filter registered on `hook`.
    #[must_use]
    pub fn apply_schema_filters(&self, hook: SchemaHook, schema: FieldSchema) -> FieldSchema {
        match self.schema_filters.get(&hook) {
            Some(chain) => {
                debug!(?hook, filters = chain.len(), "Applying schema filters");
                chain.apply(schema)
            }
            None => schema,
        }
    }

    /// Registers an order-finalized listener.
    pub fn add_order_finalized_listener(&mut self, listener: Arc<dyn OrderFinalizedListener>) {
        self.finalized_listeners.push(listener);
        self.finalized_listeners.sort_by_key(|l| l.priority());
    }

    /// Notifies every order-finalized listener in priority order.
    pub fn dispatch_order_finalized(
        &self,
        order: OrderId,
        submitted: &SubmittedFormData,
        store: &dyn MetadataStore,
    ) {
        debug!(
            order_id = %order,
            listeners = self.finalized_listeners.len(),
            "Dispatching order finalized"
        );
        for listener in &self.finalized_listeners {
            listener.on_order_finalized(order, submitted, store);
        }
    }

    /// Registers an order-details renderer.
    pub fn add_order_details_renderer(&mut self, renderer: Arc<dyn OrderDetailsRenderer>) {
        self.detail_renderers.push(renderer);
        self.detail_renderers.sort_by_key(|r| r.priority());
    }

    /// Collects the markup of every order-details renderer in priority order.
    #[must_use]
    pub fn render_order_details(&self, order: OrderId, store: &dyn MetadataStore) -> MarkupFragment {
        let mut fragment = MarkupFragment::new();
        for renderer in &self.detail_renderers {
            fragment.append(renderer.render_order_details(order, store));
        }
        fragment
    }

    /// Returns the number of filters registered on `hook`.
    #[must_use]
    pub fn schema_filter_count(&self, hook: SchemaHook) -> usize {
        self.schema_filters.get(&hook).map_or(0, FilterChain::len)
    }

    /// Returns the number of order-finalized listeners.
    #[must_use]
    pub fn order_finalized_listener_count(&self) -> usize {
        self.finalized_listeners.len()
    }

    /// Returns the number of order-details renderers.
    #[must_use]
    pub fn order_details_renderer_count(&self) -> usize {
        self.detail_renderers.len()
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookRegistry")
            .field("schema_filters", &self.schema_filters)
            .field("finalized_listeners", &self.finalized_listeners.len())
            .field("detail_renderers", &self.detail_renderers.len())
            .finish()
    }
}
