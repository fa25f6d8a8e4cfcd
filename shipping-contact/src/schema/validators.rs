//! Format validators attached to field definitions.

use crate::errors::ShippingContactError;
use crate::sanitize::sanitize_email;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

#[allow(clippy::unwrap_used)]
static PHONE_ALPHABET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s#0-9_\-+/().]").unwrap());

#[allow(clippy::unwrap_used)]
static POSTCODE_ALPHABET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-A-Za-z0-9]").unwrap());

/// A named format check the host runs on submitted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validator {
    /// Email address syntax.
    Email,
    /// Phone number alphabet.
    Phone,
    /// Postal code alphabet.
    Postcode,
}

impl Validator {
    /// Returns the validator name used in serialized schemas.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Postcode => "postcode",
        }
    }

    /// Checks `value` against this validator.
    ///
    /// Empty values always pass; whether a value is required is decided elsewhere.
    pub fn check(self, value: &str) -> crate::Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(());
        }

        match self {
            Self::Email => match sanitize_email(value) {
                Ok(clean) if clean == value => Ok(()),
                Ok(_) => Err(ShippingContactError::invalid_email(
                    "address contains disallowed characters",
                )),
                Err(err) => Err(err),
            },
            Self::Phone => {
                if PHONE_ALPHABET.replace_all(value, "").is_empty() {
                    Ok(())
                } else {
                    Err(ShippingContactError::invalid_phone(value))
                }
            }
            Self::Postcode => {
                if POSTCODE_ALPHABET.replace_all(value, "").is_empty() {
                    Ok(())
                } else {
                    Err(ShippingContactError::InvalidFormat {
                        validator: self.as_str().to_string(),
                        value: value.to_string(),
                    })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validator() {
        assert!(Validator::Email.check("a@b.com").is_ok());
        assert!(Validator::Email.check("first.last+tag@mail.example.org").is_ok());
        assert!(Validator::Email.check("a b@example.com").is_err());
        assert!(Validator::Email.check("nope").is_err());
    }

    #[test]
    fn test_phone_validator() {
        assert!(Validator::Phone.check("555-1234").is_ok());
        assert!(Validator::Phone.check("+44 (0)20 7946.0000 #12").is_ok());
        assert!(matches!(
            Validator::Phone.check("555-CALL"),
            Err(ShippingContactError::InvalidPhone { .. })
        ));
    }

    #[test]
    fn test_postcode_validator() {
        assert!(Validator::Postcode.check("SW1A 1AA").is_ok());
        assert!(Validator::Postcode.check("12345-6789").is_ok());
        assert!(Validator::Postcode.check("123#45").is_err());
    }

    #[test]
    fn test_empty_values_pass() {
        for validator in [Validator::Email, Validator::Phone, Validator::Postcode] {
            assert!(validator.check("   ").is_ok());
        }
    }
}
