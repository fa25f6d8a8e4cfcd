//! Error types for the shipping contact extension.
//!
//! None of these errors are allowed to escape the order-processing handlers:
//! validation failures are recovered by skipping the write, and store
//! failures are logged and swallowed. They are surfaced only by the
//! lower-level building blocks (sanitizers, stores, config loading).

use thiserror::Error;

/// The main error type for shipping contact operations.
#[derive(Debug, Error)]
pub enum ShippingContactError {
    /// A submitted email address failed address-syntax validation.
    #[error("Invalid email address: {reason}")]
    InvalidEmail {
        /// Why the address was rejected.
        reason: String,
    },

    /// A submitted phone number contains characters outside the phone alphabet.
    #[error("Invalid phone number: '{value}'")]
    InvalidPhone {
        /// The offending value.
        value: String,
    },

    /// A submitted value failed a generic format check.
    #[error("Invalid value for '{validator}': '{value}'")]
    InvalidFormat {
        /// The validator that rejected the value.
        validator: String,
        /// The offending value.
        value: String,
    },

    /// The host metadata store failed.
    #[error("{0}")]
    Store(#[from] StoreError),

    /// The extension configuration could not be loaded.
    #[error("{0}")]
    Config(#[from] ConfigError),
}

impl ShippingContactError {
    /// Creates an invalid email error.
    #[must_use]
    pub fn invalid_email(reason: impl Into<String>) -> Self {
        Self::InvalidEmail {
            reason: reason.into(),
        }
    }

    /// Creates an invalid phone error.
    #[must_use]
    pub fn invalid_phone(value: impl Into<String>) -> Self {
        Self::InvalidPhone {
            value: value.into(),
        }
    }

    /// True for malformed user input, which is always recovered locally.
    #[must_use]
    pub const fn is_validation_failure(&self) -> bool {
        matches!(
            self,
            Self::InvalidEmail { .. } | Self::InvalidPhone { .. } | Self::InvalidFormat { .. }
        )
    }
}

/// Errors reported by a [`MetadataStore`](crate::store::MetadataStore).
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("Metadata store unavailable: {0}")]
    Unavailable(String),

    /// The store refused a particular write.
    #[error("Metadata write rejected for '{key}': {reason}")]
    Rejected {
        /// The metadata key.
        key: String,
        /// The reason for rejection.
        reason: String,
    },
}

impl StoreError {
    /// Creates a rejected-write error.
    #[must_use]
    pub fn rejected(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Rejected {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration document is not valid JSON for the expected shape.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration parsed but is inconsistent.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
