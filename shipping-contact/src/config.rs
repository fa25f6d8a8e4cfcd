//! Configuration for the shipping contact extension.

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Keys and labels for one tracked contact field.
///
/// `meta_key` is the only key used to store and to read the value back, so
/// persisting and rendering can never disagree on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFieldConfig {
    /// Key in the checkout schema and in the submitted form.
    pub checkout_key: String,
    /// Key in the order metadata store.
    pub meta_key: String,
    /// Checkout form label.
    pub label: String,
    /// Key in the admin schema.
    pub admin_key: String,
    /// Admin form label.
    pub admin_label: String,
    /// Label prefixed to the value on order details.
    pub display_label: String,
}

impl ContactFieldConfig {
    /// Default keys and labels for the shipping email.
    #[must_use]
    pub fn email() -> Self {
        Self {
            checkout_key: "shipping_email".to_string(),
            meta_key: "shipping_email".to_string(),
            label: "Email".to_string(),
            admin_key: "email".to_string(),
            admin_label: "Email Address".to_string(),
            display_label: "Email:".to_string(),
        }
    }

    /// Default keys and labels for the shipping phone.
    #[must_use]
    pub fn phone() -> Self {
        Self {
            checkout_key: "shipping_phone".to_string(),
            meta_key: "shipping_phone".to_string(),
            label: "Phone".to_string(),
            admin_key: "shipping_phone".to_string(),
            admin_label: "Phone".to_string(),
            display_label: "Phone:".to_string(),
        }
    }

    /// Sets the metadata key.
    #[must_use]
    pub fn with_meta_key(mut self, key: impl Into<String>) -> Self {
        self.meta_key = key.into();
        self
    }

    /// Sets the checkout key.
    #[must_use]
    pub fn with_checkout_key(mut self, key: impl Into<String>) -> Self {
        self.checkout_key = key.into();
        self
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        let keys = [
            ("checkout_key", &self.checkout_key),
            ("meta_key", &self.meta_key),
            ("admin_key", &self.admin_key),
        ];
        for (field, value) in keys {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{name}.{field} cannot be empty")));
            }
        }
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

impl LoggingConfig {
    /// Sets the filter directive.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Enables JSON output.
    #[must_use]
    pub fn json(mut self) -> Self {
        self.json = true;
        self
    }
}

/// Top-level extension configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionConfig {
    /// Text domain passed to the translator for every label.
    #[serde(default = "default_text_domain")]
    pub text_domain: String,
    /// Shipping email field.
    #[serde(default = "ContactFieldConfig::email")]
    pub email: ContactFieldConfig,
    /// Shipping phone field.
    #[serde(default = "ContactFieldConfig::phone")]
    pub phone: ContactFieldConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_text_domain() -> String {
    "woocommerce".to_string()
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            text_domain: default_text_domain(),
            email: ContactFieldConfig::email(),
            phone: ContactFieldConfig::phone(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ExtensionConfig {
    /// Creates a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text domain.
    #[must_use]
    pub fn with_text_domain(mut self, domain: impl Into<String>) -> Self {
        self.text_domain = domain.into();
        self
    }

    /// Replaces the email field settings.
    #[must_use]
    pub fn with_email(mut self, email: ContactFieldConfig) -> Self {
        self.email = email;
        self
    }

    /// Replaces the phone field settings.
    #[must_use]
    pub fn with_phone(mut self, phone: ContactFieldConfig) -> Self {
        self.phone = phone;
        self
    }

    /// Replaces the logging settings.
    #[must_use]
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }

    /// Checks that keys are present and that the two fields store under different keys.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.email.validate("email")?;
        self.phone.validate("phone")?;

        if self.email.meta_key == self.phone.meta_key {
            return Err(ConfigError::Invalid(format!(
                "email and phone share meta_key '{}'",
                self.email.meta_key
            )));
        }
        if self.email.checkout_key == self.phone.checkout_key {
            return Err(ConfigError::Invalid(format!(
                "email and phone share checkout_key '{}'",
                self.email.checkout_key
            )));
        }
        Ok(())
    }

    /// Parses and validates a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}
