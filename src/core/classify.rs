//! Secret detection.
//!
//! Guesses whether a `.env` key/value pair should be stored encrypted.
//! Rules are checked in order and the first match wins:
//!
//! 1. key contains a secret keyword (case-insensitive)
//! 2. value contains a PEM header (`-----BEGIN`)
//! 3. value is a run of 20+ base64/alphanumeric characters
//! 4. value is an http(s) URL with embedded credentials
//! 5. value has three dot-separated base64 segments (JWT shape)
//! 6. value is longer than 20 bytes and token-like (base64, `-`, newlines)
//!
//! Anything else is plaintext.

use regex::Regex;
use std::sync::LazyLock;

use crate::core::domain::ParameterType;

/// Substrings of a lower-cased key that mark it as a secret.
pub const SECRET_KEYWORDS: &[&str] = &[
    "password",
    "secret",
    "key",
    "token",
    "api",
    "auth",
    "credential",
    "private",
    "cert",
    "ssl",
    "secure",
];

const PEM_MARKER: &str = "-----BEGIN";

static LONG_BASE64: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9+/=]{20,}$").expect("valid base64 run pattern"));

static CREDENTIAL_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^@]+@").expect("valid credential url pattern"));

static JWT_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+/=]+\.[A-Za-z0-9+/=]+\.[A-Za-z0-9+/=]+$").expect("valid jwt pattern")
});

static TOKEN_LIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9+/=\-\n]+$").expect("valid token pattern"));

/// Classify a key/value pair as [`ParameterType::Plain`] or
/// [`ParameterType::Secret`].
///
/// Total and deterministic; never returns [`ParameterType::List`].
pub fn classify(key: &str, value: &str) -> ParameterType {
    if key_is_secret(key) || value_is_secret(value) {
        ParameterType::Secret
    } else {
        ParameterType::Plain
    }
}

/// Whether the key contains a credential keyword, ignoring case.
pub fn key_is_secret(key: &str) -> bool {
    let key = key.to_lowercase();
    SECRET_KEYWORDS.iter().any(|keyword| key.contains(keyword))
}

/// Whether the value looks like key material, a credential URL or a token.
pub fn value_is_secret(value: &str) -> bool {
    value.contains(PEM_MARKER)
        || LONG_BASE64.is_match(value)
        || CREDENTIAL_URL.is_match(value)
        || JWT_SHAPE.is_match(value)
        || (value.len() > 20 && TOKEN_LIKE.is_match(value))
}
