//! Label translation.

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Looks up the localized form of a label within a text domain.
pub trait Translator: Send + Sync {
    /// Translates `text` within `domain`, falling back to `text`.
    fn translate(&self, text: &str, domain: &str) -> String;
}

/// A translator that returns every label unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, text: &str, _domain: &str) -> String {
        text.to_string()
    }
}

/// A catalog-backed translator for a single locale.
///
/// Loads from JSON shaped as
/// `{"locale": "de_DE", "entries": {"woocommerce": {"Phone": "Telefon"}}}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogTranslator {
    /// Locale the catalog translates into.
    pub locale: String,
    /// Translations by domain, then by source text.
    #[serde(default)]
    entries: HashMap<String, HashMap<String, String>>,
}

impl CatalogTranslator {
    /// Creates an empty catalog for `locale`.
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            entries: HashMap::new(),
        }
    }

    /// Adds a translation.
    #[must_use]
    pub fn with_entry(
        mut self,
        domain: impl Into<String>,
        text: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        self.insert(domain, text, translation);
        self
    }

    /// Adds or replaces a translation.
    pub fn insert(
        &mut self,
        domain: impl Into<String>,
        text: impl Into<String>,
        translation: impl Into<String>,
    ) {
        self.entries
            .entry(domain.into())
            .or_default()
            .insert(text.into(), translation.into());
    }

    /// Parses a catalog from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a catalog from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Returns the number of translations across all domains.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    /// Returns true if the catalog has no translations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Translator for CatalogTranslator {
    fn translate(&self, text: &str, domain: &str) -> String {
        self.entries
            .get(domain)
            .and_then(|domain_entries| domain_entries.get(text))
            .cloned()
            .unwrap_or_else(|| text.to_string())
    }
}
