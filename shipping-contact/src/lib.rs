//! # Shipping Contact
//!
//! Adds a shipping email and a shipping phone to a checkout form and carries
//! them through the order lifecycle.
//!
//! The crate provides:
//!
//! - **Schema augmentation**: declares the extra fields on the checkout and
//!   admin field schemas
//! - **Persistence**: sanitizes submitted values and stores them as order
//!   metadata
//! - **Presentation**: renders the stored values back as escaped markup
//! - **Typed hooks**: a registry of extension points the host dispatches into
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shipping_contact::prelude::*;
//! use std::sync::Arc;
//!
//! let mut hooks = HookRegistry::new();
//! Arc::new(ShippingContactExtension::default()).register(&mut hooks);
//!
//! let checkout = hooks.apply_schema_filters(SchemaHook::CheckoutShippingFields, FieldSchema::new());
//!
//! let store = InMemoryMetadataStore::new();
//! let submitted = SubmittedFormData::from_pairs([("shipping_email", "a@b.com")]);
//! hooks.dispatch_order_finalized(OrderId::new(42), &submitted, &store);
//!
//! println!("{}", hooks.render_order_details(OrderId::new(42), &store).to_html());
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod config;
pub mod errors;
pub mod extension;
pub mod hooks;
pub mod i18n;
pub mod observability;
pub mod render;
pub mod sanitize;
pub mod schema;
pub mod store;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{ContactFieldConfig, ExtensionConfig, LoggingConfig};
    pub use crate::errors::{ConfigError, ShippingContactError, StoreError};
    pub use crate::extension::{PersistReport, ShippingContactExtension};
    pub use crate::hooks::{
        FilterChain, HookRegistry, OrderDetailsRenderer, OrderFinalizedListener, SchemaFilter,
        SchemaHook,
    };
    pub use crate::i18n::{CatalogTranslator, IdentityTranslator, Translator};
    pub use crate::render::{MarkupFragment, RenderedLine};
    pub use crate::sanitize::{sanitize_email, sanitize_text_field};
    pub use crate::schema::{FieldDefinition, FieldSchema, InputType, Validator};
    pub use crate::store::{InMemoryMetadataStore, MetadataStore, OrderId, SubmittedFormData};
}

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, errors::ShippingContactError>;
