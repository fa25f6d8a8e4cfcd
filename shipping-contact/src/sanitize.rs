//! Input sanitizers applied before submitted values are stored.
//!
//! Both sanitizers are total over `&str`: malformed input either comes back
//! cleaned or, for email, as an [`InvalidEmail`](ShippingContactError::InvalidEmail)
//! error the caller is expected to recover from.

use crate::errors::ShippingContactError;
use regex::Regex;
use std::sync::LazyLock;

/// Minimum length of a plausible address (`a@b.co`).
const MIN_EMAIL_LEN: usize = 6;

/// Characters trimmed from the ends of a domain.
const DOMAIN_TRIM: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B', '.'];

/// Characters trimmed from the ends of each domain label.
const LABEL_TRIM: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B', '-'];

#[allow(clippy::unwrap_used)]
static LOCAL_DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9!#$%&'*+/=?^_`{|}~.\-]").unwrap());

#[allow(clippy::unwrap_used)]
static DOT_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.{2,}").unwrap());

#[allow(clippy::unwrap_used)]
static LABEL_DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[^a-z0-9\-]").unwrap());

#[allow(clippy::unwrap_used)]
static SCRIPT_OR_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script[^>]*?>.*?</script\s*>|<style[^>]*?>.*?</style\s*>").unwrap()
});

#[allow(clippy::unwrap_used)]
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[a-zA-Z/!?][^>]*(?:>|$)").unwrap());

#[allow(clippy::unwrap_used)]
static WHITESPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

#[allow(clippy::unwrap_used)]
static PERCENT_OCTET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"%[a-fA-F0-9]{2}").unwrap());

/// Canonicalizes an email address.
///
/// Disallowed characters are stripped from the local part and from each
/// domain label. The address is rejected when it is too short, has no `@`
/// after the first character, or is left without a local part or without at
/// least two domain labels.
pub fn sanitize_email(raw: &str) -> Result<String, ShippingContactError> {
    if raw.chars().count() < MIN_EMAIL_LEN {
        return Err(ShippingContactError::invalid_email("address too short"));
    }

    let (local, domain) = match raw.split_once('@') {
        Some((local, domain)) if !local.is_empty() => (local, domain),
        _ => return Err(ShippingContactError::invalid_email("missing '@'")),
    };

    let local = LOCAL_DISALLOWED.replace_all(local, "");
    if local.is_empty() {
        return Err(ShippingContactError::invalid_email("invalid characters in local part"));
    }

    let domain = DOT_RUNS.replace_all(domain, "");
    let domain = domain.trim_matches(DOMAIN_TRIM);
    if domain.is_empty() {
        return Err(ShippingContactError::invalid_email("invalid domain"));
    }

    let labels: Vec<String> = domain
        .split('.')
        .map(|label| {
            LABEL_DISALLOWED
                .replace_all(label.trim_matches(LABEL_TRIM), "")
                .into_owned()
        })
        .filter(|label| !label.is_empty())
        .collect();

    if labels.len() < 2 {
        return Err(ShippingContactError::invalid_email("domain needs at least two labels"));
    }

    Ok(format!("{local}@{}", labels.join(".")))
}

/// Reduces a free-text value to a single line of plain text.
///
/// Script and style blocks are dropped with their content, remaining tags are
/// stripped, whitespace runs collapse to one space, control characters and
/// percent-encoded octets are removed, and the result is trimmed.
pub fn sanitize_text_field(raw: &str) -> String {
    let without_blocks = SCRIPT_OR_STYLE.replace_all(raw, "");
    let without_tags = TAG.replace_all(&without_blocks, "");
    let collapsed = WHITESPACE_RUNS.replace_all(&without_tags, " ");

    let mut text: String = collapsed.chars().filter(|c| !c.is_control()).collect();

    while PERCENT_OCTET.is_match(&text) {
        text = PERCENT_OCTET.replace_all(&text, "").into_owned();
    }

    WHITESPACE_RUNS.replace_all(text.trim(), " ").into_owned()
}
