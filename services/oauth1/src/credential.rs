use std::fmt::{Debug, Formatter};

use oriole_core::utils::Redact;

/// Consumer credentials identifying the application.
#[derive(Clone, PartialEq, Eq)]
pub struct Consumer {
    /// Consumer key, sent as `oauth_consumer_key`.
    pub key: String,
    /// Consumer secret, first half of the signing key.
    pub secret: String,
}

impl Consumer {
    /// Create a new consumer.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }
}

impl Debug for Consumer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Consumer")
            .field("key", &Redact::from(&self.key))
            .field("secret", &Redact::from(&self.secret))
            .finish()
    }
}

/// Token identifying the acting user or integration.
///
/// A pair without `key` signs two-legged, consumer only requests.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenPair {
    /// Token key, sent as `oauth_token`.
    pub key: Option<String>,
    /// Token secret, second half of the signing key.
    pub secret: Option<String>,
}

impl TokenPair {
    /// Create a token pair for three-legged signing.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            secret: Some(secret.into()),
        }
    }

    /// Create an empty pair for two-legged signing.
    pub fn two_legged() -> Self {
        Self::default()
    }

    /// Returns true if no token key is set.
    pub fn is_two_legged(&self) -> bool {
        self.key.is_none()
    }
}

impl Debug for TokenPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPair")
            .field("key", &Redact::from(&self.key))
            .field("secret", &Redact::from(&self.secret))
            .finish()
    }
}
