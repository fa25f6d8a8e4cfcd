//! The shipping contact extension.
//!
//! Adds a shipping email and phone to the checkout and admin schemas, stores
//! the submitted values as order metadata, and renders them on the order
//! details view. Every handler is infallible from the host's point of view.


use crate::config::{ContactFieldConfig, ExtensionConfig};
use crate::hooks::{HookRegistry, OrderDetailsRenderer, OrderFinalizedListener, SchemaFilter, SchemaHook};
use crate::i18n::{IdentityTranslator, Translator};
use crate::render::{MarkupFragment, RenderedLine};
use crate::sanitize::{sanitize_email, sanitize_text_field};
use crate::schema::{FieldDefinition, FieldSchema, InputType, Validator};
use crate::store::{MetadataStore, OrderId, SubmittedFormData};
use std::sync::Arc;
use tracing::{debug, warn};

/// CSS class placing a field on its own full-width row.
const WIDE_ROW_CLASS: &str = "form-row-wide";

/// How a tracked field's raw value is cleaned before storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sanitizer {
    Email,
    PlainText,
}

impl Sanitizer {
    fn apply(self, raw: &str) -> crate::Result<String> {
        match self {
            Self::Email => sanitize_email(raw),
            Self::PlainText => Ok(sanitize_text_field(raw)),
        }
    }
}

/// What [`ShippingContactExtension::persist`] did with each tracked field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistReport {
    /// Metadata keys that were written.
    pub written: Vec<String>,
    /// Submission keys that were absent or blank.
    pub skipped: Vec<String>,
    /// Submission keys whose value was rejected or could not be stored, with the reason.
    pub rejected: Vec<(String, String)>,
}

impl PersistReport {
    /// True when at least one field was written.
    #[must_use]
    pub fn wrote_anything(&self) -> bool {
        !self.written.is_empty()
    }
}

/// Shipping email and phone fields for a checkout.
pub struct ShippingContactExtension {
    config: ExtensionConfig,
    translator: Arc<dyn Translator>,
}

impl Default for ShippingContactExtension {
    fn default() -> Self {
        Self::new(ExtensionConfig::default())
    }
}

impl std::fmt::Debug for ShippingContactExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShippingContactExtension")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ShippingContactExtension {
    /// Creates an extension with untranslated labels.
    #[must_use]
    pub fn new(config: ExtensionConfig) -> Self {
        Self {
            config,
            translator: Arc::new(IdentityTranslator),
        }
    }

    /// Sets the translator used for labels.
    #[must_use]
    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = translator;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ExtensionConfig {
        &self.config
    }

    fn tracked_fields(&self) -> [(&ContactFieldConfig, Sanitizer); 2] {
        [
            (&self.config.email, Sanitizer::Email),
            (&self.config.phone, Sanitizer::PlainText),
        ]
    }

    fn label(&self, text: &str) -> String {
        self.translator.translate(text, &self.config.text_domain)
    }

    /// Adds the shipping email and phone to the checkout schema.
    ///
    /// Existing fields are kept; a field already registered under one of
    /// these keys is replaced.
    #[must_use]
    pub fn augment_checkout_schema(&self, mut schema: FieldSchema) -> FieldSchema {
        let email = &self.config.email;
        let phone = &self.config.phone;

        schema.insert(
            FieldDefinition::new(&email.checkout_key, self.label(&email.label))
                .required()
                .with_input_type(InputType::Email)
                .with_class(WIDE_ROW_CLASS)
                .with_validator(Validator::Email),
        );
        schema.insert(
            FieldDefinition::new(&phone.checkout_key, self.label(&phone.label))
                .required()
                .with_input_type(InputType::Tel)
                .with_class(WIDE_ROW_CLASS)
                .clearing()
                .with_validator(Validator::Phone),
        );
        schema
    }

    /// Adds label-only email and phone entries to the admin schema.
    #[must_use]
    pub fn augment_admin_schema(&self, mut schema: FieldSchema) -> FieldSchema {
        for (field, _) in self.tracked_fields() {
            schema.insert(FieldDefinition::display_only(
                &field.admin_key,
                self.label(&field.admin_label),
            ));
        }
        schema
    }

    /// Stores the submitted shipping email and phone on the order.
    ///
    /// Blank or missing values leave any stored value untouched. Values that
    /// fail sanitization and writes the store refuses are logged and skipped;
    /// nothing here can fail the surrounding checkout.
    pub fn persist(
        &self,
        order: OrderId,
        submitted: &SubmittedFormData,
        store: &dyn MetadataStore,
    ) -> PersistReport {
        let mut report = PersistReport::default();

        for (field, sanitizer) in self.tracked_fields() {
            let Some(raw) = submitted.non_blank(&field.checkout_key) else {
                debug!(order_id = %order, field = %field.checkout_key, "No value submitted");
                report.skipped.push(field.checkout_key.clone());
                continue;
            };

            let value = match sanitizer.apply(raw) {
                Ok(value) if !value.is_empty() => value,
                Ok(_) => {
                    debug!(order_id = %order, field = %field.checkout_key, "Value empty after sanitizing");
                    report.skipped.push(field.checkout_key.clone());
                    continue;
                }
                Err(err) => {
                    warn!(order_id = %order, field = %field.checkout_key, error = %err, "Dropping invalid value");
                    report.rejected.push((field.checkout_key.clone(), err.to_string()));
                    continue;
                }
            };

            match store.set(order, &field.meta_key, &value) {
                Ok(()) => {
                    debug!(order_id = %order, meta_key = %field.meta_key, "Stored shipping contact field");
                    report.written.push(field.meta_key.clone());
                }
                Err(err) => {
                    warn!(order_id = %order, meta_key = %field.meta_key, error = %err, "Metadata write failed");
                    report.rejected.push((field.checkout_key.clone(), err.to_string()));
                }
            }
        }

        report
    }

    /// Renders the stored shipping email and phone, skipping empty ones.
    #[must_use]
    pub fn render(&self, order: OrderId, store: &dyn MetadataStore) -> MarkupFragment {
        self.tracked_fields()
            .into_iter()
            .filter_map(|(field, _)| {
                let value = store.get(order, &field.meta_key)?;
                let value = value.trim();
                if value.is_empty() {
                    return None;
                }
                Some(RenderedLine::new(self.label(&field.display_label), value))
            })
            .collect()
    }

    /// Registers one handler on each extension point.
    pub fn register(self: Arc<Self>, registry: &mut HookRegistry) {
        registry.add_schema_filter(
            SchemaHook::CheckoutShippingFields,
            Arc::new(CheckoutFields(Arc::clone(&self))),
        );
        registry.add_schema_filter(
            SchemaHook::AdminShippingFields,
            Arc::new(AdminFields(Arc::clone(&self))),
        );
        registry.add_order_finalized_listener(Arc::clone(&self) as Arc<dyn OrderFinalizedListener>);
        registry.add_order_details_renderer(self);
    }
}

struct CheckoutFields(Arc<ShippingContactExtension>);

impl SchemaFilter for CheckoutFields {
    fn filter(&self, schema: FieldSchema) -> FieldSchema {
        self.0.augment_checkout_schema(schema)
    }
}

struct AdminFields(Arc<ShippingContactExtension>);

impl SchemaFilter for AdminFields {
    fn filter(&self, schema: FieldSchema) -> FieldSchema {
        self.0.augment_admin_schema(schema)
    }
}

impl OrderFinalizedListener for ShippingContactExtension {
    fn on_order_finalized(
        &self,
        order: OrderId,
        submitted: &SubmittedFormData,
        store: &dyn MetadataStore,
    ) {
        let _ = self.persist(order, submitted, store);
    }
}

impl OrderDetailsRenderer for ShippingContactExtension {
    fn render_order_details(&self, order: OrderId, store: &dyn MetadataStore) -> MarkupFragment {
        self.render(order, store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StoreError;
    use crate::i18n::CatalogTranslator;
    use crate::store::{InMemoryMetadataStore, MockMetadataStore};
    use pretty_assertions::assert_eq;

    fn extension() -> ShippingContactExtension {
        ShippingContactExtension::default()
    }

    #[test]
    fn test_checkout_schema_fields() {
        let schema = extension().augment_checkout_schema(FieldSchema::new());

        let email = schema.get("shipping_email").unwrap();
        assert_eq!(email.label, "Email");
        assert!(email.required);
        assert_eq!(email.input_type, InputType::Email);
        assert_eq!(email.css_classes.iter().collect::<Vec<_>>(), vec!["form-row-wide"]);
        assert_eq!(email.validators.iter().collect::<Vec<_>>(), vec![&Validator::Email]);
        assert!(!email.clears_layout);

        let phone = schema.get("shipping_phone").unwrap();
        assert_eq!(phone.label, "Phone");
        assert!(phone.required);
        assert_eq!(phone.input_type, InputType::Tel);
        assert_eq!(phone.css_classes.iter().collect::<Vec<_>>(), vec!["form-row-wide"]);
        assert_eq!(phone.validators.iter().collect::<Vec<_>>(), vec![&Validator::Phone]);
        assert!(phone.clears_layout);

        assert_eq!(schema.len(), 2);
    }

    #[test]
    fn test_checkout_schema_preserves_and_overrides() {
        let existing: FieldSchema = [
            FieldDefinition::new("shipping_city", "City").required(),
            FieldDefinition::new("shipping_email", "Old email"),
        ]
        .into_iter()
        .collect();

        let schema = extension().augment_checkout_schema(existing);

        assert_eq!(schema.get("shipping_city").map(|d| d.label.as_str()), Some("City"));
        assert_eq!(schema.get("shipping_email").map(|d| d.label.as_str()), Some("Email"));
        assert_eq!(schema.len(), 3);
    }

    #[test]
    fn test_admin_schema_is_label_only() {
        let schema = extension().augment_admin_schema(FieldSchema::new());

        let email = schema.get("email").unwrap();
        assert_eq!(email.label, "Email Address");
        assert!(email.is_display_only());

        let phone = schema.get("shipping_phone").unwrap();
        assert_eq!(phone.label, "Phone");
        assert!(phone.is_display_only());
        assert_eq!(schema.len(), 2);
    }

    #[test]
    fn test_labels_are_translated_in_text_domain() {
        let catalog = CatalogTranslator::new("de_DE")
            .with_entry("woocommerce", "Phone", "Telefon")
            .with_entry("woocommerce", "Phone:", "Telefon:")
            .with_entry("elsewhere", "Email", "E-Mail");
        let ext = extension().with_translator(Arc::new(catalog));

        let checkout = ext.augment_checkout_schema(FieldSchema::new());
        assert_eq!(checkout.get("shipping_phone").map(|d| d.label.as_str()), Some("Telefon"));
        assert_eq!(checkout.get("shipping_email").map(|d| d.label.as_str()), Some("Email"));

        let store = InMemoryMetadataStore::new();
        let order = OrderId::new(5);
        store.set(order, "shipping_phone", "555-1234").unwrap();
        assert_eq!(ext.render(order, &store).to_string(), "Telefon: 555-1234");
    }

    #[test]
    fn test_persist_writes_sanitized_values() {
        let store = InMemoryMetadataStore::new();
        let order = OrderId::new(10);
        let submitted = SubmittedFormData::from_pairs([
            ("shipping_email", " jo hn@example.com "),
            ("shipping_phone", "<b>555</b>-1234\n"),
        ]);

        let report = extension().persist(order, &submitted, &store);

        assert_eq!(store.get(order, "shipping_email"), Some("john@example.com".to_string()));
        assert_eq!(store.get(order, "shipping_phone"), Some("555-1234".to_string()));
        assert_eq!(report.written, vec!["shipping_email".to_string(), "shipping_phone".to_string()]);
        assert!(report.skipped.is_empty());
        assert!(report.rejected.is_empty());
    }

    #[test]
    fn test_persist_blank_values_leave_store_untouched() {
        let store = InMemoryMetadataStore::new();
        let order = OrderId::new(11);
        store.set(order, "shipping_email", "keep@example.com").unwrap();

        let submitted = SubmittedFormData::from_pairs([("shipping_email", "   ")]);
        let report = extension().persist(order, &submitted, &store);

        assert_eq!(store.get(order, "shipping_email"), Some("keep@example.com".to_string()));
        assert!(!store.contains_key(order, "shipping_phone"));
        assert!(!report.wrote_anything());
        assert_eq!(report.skipped.len(), 2);
    }

    #[test]
    fn test_persist_never_writes_blank_fields() {
        let mut store = MockMetadataStore::new();
        store.expect_set().never();

        let submitted = SubmittedFormData::from_pairs([("shipping_email", ""), ("shipping_phone", " \t ")]);
        let report = extension().persist(OrderId::new(12), &submitted, &store);

        assert_eq!(report.skipped, vec!["shipping_email".to_string(), "shipping_phone".to_string()]);
    }

    #[test]
    fn test_persist_drops_invalid_email() {
        let mut store = MockMetadataStore::new();
        store
            .expect_set()
            .withf(|_, key, value| key == "shipping_phone" && value == "555-1234")
            .times(1)
            .returning(|_, _, _| Ok(()));

        let submitted = SubmittedFormData::from_pairs([
            ("shipping_email", "not-an-address"),
            ("shipping_phone", "555-1234"),
        ]);
        let report = extension().persist(OrderId::new(13), &submitted, &store);

        assert_eq!(report.written, vec!["shipping_phone".to_string()]);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].0, "shipping_email");
    }

    #[test]
    fn test_persist_skips_values_sanitized_to_nothing() {
        let store = InMemoryMetadataStore::new();
        let order = OrderId::new(14);
        let submitted = SubmittedFormData::from_pairs([("shipping_phone", "<i></i>")]);

        let report = extension().persist(order, &submitted, &store);

        assert!(!store.contains_key(order, "shipping_phone"));
        assert!(report.skipped.contains(&"shipping_phone".to_string()));
    }

    #[test]
    fn test_persist_survives_store_failure() {
        let mut store = MockMetadataStore::new();
        store
            .expect_set()
            .times(2)
            .returning(|_, key, _| Err(StoreError::rejected(key, "read-only")));

        let submitted = SubmittedFormData::from_pairs([
            ("shipping_email", "a@b.com"),
            ("shipping_phone", "555-1234"),
        ]);
        let report = extension().persist(OrderId::new(15), &submitted, &store);

        assert!(!report.wrote_anything());
        assert_eq!(report.rejected.len(), 2);
    }

    #[test]
    fn test_render_empty_store() {
        let fragment = extension().render(OrderId::new(20), &InMemoryMetadataStore::new());
        assert!(fragment.is_empty());
        assert_eq!(fragment.to_html(), "");
    }

    #[test]
    fn test_render_skips_blank_stored_values() {
        let store = InMemoryMetadataStore::new();
        let order = OrderId::new(21);
        store.set(order, "shipping_email", "  ").unwrap();
        store.set(order, "shipping_phone", "555-1234").unwrap();

        let fragment = extension().render(order, &store);
        assert_eq!(fragment.to_string(), "Phone: 555-1234");
    }

    #[test]
    fn test_render_reads_configured_meta_key() {
        let config = ExtensionConfig::new()
            .with_phone(ContactFieldConfig::phone().with_meta_key("_shipping_phone"));
        let ext = ShippingContactExtension::new(config);

        let store = InMemoryMetadataStore::new();
        let order = OrderId::new(22);
        let submitted = SubmittedFormData::from_pairs([("shipping_phone", "555-0000")]);
        ext.persist(order, &submitted, &store);

        assert_eq!(store.get(order, "_shipping_phone"), Some("555-0000".to_string()));
        assert_eq!(store.get(order, "shipping_phone"), None);
        assert_eq!(ext.render(order, &store).to_string(), "Phone: 555-0000");
    }

    #[test]
    fn test_register_adds_one_handler_per_hook() {
        let mut registry = HookRegistry::new();
        Arc::new(extension()).register(&mut registry);

        assert_eq!(registry.schema_filter_count(SchemaHook::CheckoutShippingFields), 1);
        assert_eq!(registry.schema_filter_count(SchemaHook::AdminShippingFields), 1);
        assert_eq!(registry.order_finalized_listener_count(), 1);
        assert_eq!(registry.order_details_renderer_count(), 1);
    }
}
