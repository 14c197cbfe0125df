//! Input validation and sanitization utilities
//!
//! This module provides utilities for validating and sanitizing user input
//! and configuration values before they reach the PDL API.

use crate::error::{ConfigError, QueryError};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)+$",
    )
    .expect("email pattern is valid")
});

/// Trim and lowercase an email, then check it is well formed.
///
/// The returned error carries the value exactly as the caller supplied it.
pub fn normalize_email(email: &str) -> Result<String, QueryError> {
    let normalized = email.trim().to_lowercase();

    if normalized.contains("..") || !EMAIL_PATTERN.is_match(&normalized) {
        return Err(QueryError::InvalidEmail {
            email: email.to_string(),
        });
    }

    Ok(normalized)
}

/// Validate that a URL is properly formatted
pub fn validate_url(url: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::InvalidValue {
            field: "base_url".to_string(),
            value: url.to_string(),
            reason: "URL must start with http:// or https://".to_string(),
        });
    }

    Ok(())
}

/// Validate API key format
pub fn validate_api_key(api_key: &str) -> Result<(), ConfigError> {
    if api_key.trim().is_empty() {
        return Err(ConfigError::MissingField {
            field: "PEOPLEDATALABS_KEY".to_string(),
            hint: "Must set a valid PEOPLEDATALABS_KEY value (environment, local .env file or --api-key)"
                .to_string(),
        });
    }

    if api_key.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidValue {
            field: "PEOPLEDATALABS_KEY".to_string(),
            value: "<redacted>".to_string(),
            reason: "API key must not contain whitespace".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email_lowercases_and_trims() {
        assert_eq!(
            normalize_email("  Person@Example.COM ").unwrap(),
            "person@example.com"
        );
        assert_eq!(
            normalize_email("first.last+tag@sub.example.co.uk").unwrap(),
            "first.last+tag@sub.example.co.uk"
        );
        assert_eq!(
            normalize_email("O'Brien@Example.com").unwrap(),
            "o'brien@example.com"
        );
    }

    #[test]
    fn test_normalize_email_rejects_malformed() {
        for bad in ["BAD@@", "no-at-sign", "@example.com", "user@", "user@localhost", "a..b@x.io"] {
            match normalize_email(bad) {
                Err(QueryError::InvalidEmail { email }) => assert_eq!(email, bad),
                other => panic!("expected InvalidEmail for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("https://api.peopledatalabs.com").is_ok());
        assert!(validate_url("http://127.0.0.1:8080").is_ok());
        assert!(validate_url("api.peopledatalabs.com").is_err());
    }

    #[test]
    fn test_validate_api_key() {
        assert!(validate_api_key("abc123def456").is_ok());
        assert!(matches!(
            validate_api_key("   "),
            Err(ConfigError::MissingField { .. })
        ));
        assert!(matches!(
            validate_api_key("abc 123"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
