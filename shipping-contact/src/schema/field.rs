//! Field definitions and field schemas.

use super::Validator;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// HTML input type rendered for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputType {
    /// Single-line text.
    #[default]
    Text,
    /// Email address.
    Email,
    /// Telephone number.
    Tel,
    /// Numeric value.
    Number,
    /// Multi-line text.
    Textarea,
    /// Masked text.
    Password,
    /// Not shown to the user.
    Hidden,
}

impl InputType {
    /// Returns the host's name for this input type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Number => "number",
            Self::Textarea => "textarea",
            Self::Password => "password",
            Self::Hidden => "hidden",
        }
    }
}

/// A single form field declaration.
///
/// Serializes in the host's field-array shape (`type`, `class`, `validate`,
/// `clear`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Key of the field, unique within a schema.
    pub key: String,
    /// Display label.
    pub label: String,
    /// Whether the host should require a value.
    #[serde(default)]
    pub required: bool,
    /// Input type.
    #[serde(rename = "type", default)]
    pub input_type: InputType,
    /// CSS classes applied to the field row.
    #[serde(rename = "class", default, skip_serializing_if = "BTreeSet::is_empty")]
    pub css_classes: BTreeSet<String>,
    /// Format validators the host runs on submission.
    #[serde(rename = "validate", default, skip_serializing_if = "BTreeSet::is_empty")]
    pub validators: BTreeSet<Validator>,
    /// Whether the field row clears the layout after it.
    #[serde(rename = "clear", default)]
    pub clears_layout: bool,
}

impl FieldDefinition {
    /// Creates an optional text field.
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            required: false,
            input_type: InputType::Text,
            css_classes: BTreeSet::new(),
            validators: BTreeSet::new(),
            clears_layout: false,
        }
    }

    /// Creates a label-only entry as used by display schemas.
    #[must_use]
    pub fn display_only(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label)
    }

    /// Marks the field as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the input type.
    #[must_use]
    pub fn with_input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    /// Adds a CSS class.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.css_classes.insert(class.into());
        self
    }

    /// Adds a validator.
    #[must_use]
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.insert(validator);
        self
    }

    /// Makes the field row clear the layout.
    #[must_use]
    pub fn clearing(mut self) -> Self {
        self.clears_layout = true;
        self
    }

    /// True when the entry carries nothing beyond its label.
    #[must_use]
    pub fn is_display_only(&self) -> bool {
        !self.required
            && self.input_type == InputType::Text
            && self.css_classes.is_empty()
            && self.validators.is_empty()
            && !self.clears_layout
    }

    /// Runs every validator against `value`.
    pub fn validate(&self, value: &str) -> crate::Result<()> {
        self.validators
            .iter()
            .try_for_each(|validator| validator.check(value))
    }
}

/// A mapping from field key to field definition.
///
/// Schemas only grow: inserting under an existing key replaces that entry and
/// leaves every other key alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSchema {
    fields: BTreeMap<String, FieldDefinition>,
}

impl FieldSchema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a definition under its own key, returning any definition it displaced.
    pub fn insert(&mut self, definition: FieldDefinition) -> Option<FieldDefinition> {
        self.fields.insert(definition.key.clone(), definition)
    }

    /// Gets a definition by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldDefinition> {
        self.fields.get(key)
    }

    /// Checks if a key exists.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Returns all keys in sorted order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }

    /// Iterates over definitions in key order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.values()
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the schema has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<FieldDefinition> for FieldSchema {
    fn from_iter<I: IntoIterator<Item = FieldDefinition>>(iter: I) -> Self {
        let mut schema = Self::new();
        for definition in iter {
            schema.insert(definition);
        }
        schema
    }
}

impl Extend<FieldDefinition> for FieldSchema {
    fn extend<I: IntoIterator<Item = FieldDefinition>>(&mut self, iter: I) {
        for definition in iter {
            self.insert(definition);
        }
    }
}
