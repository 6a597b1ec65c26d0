use std::fmt::{Debug, Display, Formatter};

use http::HeaderValue;
use oriole_core::utils::Redact;
use oriole_core::Result;

use crate::constants::OAUTH_PREFIX;
use crate::encode::percent_encode;

/// The value of an `Authorization` header, scheme included.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthorizationHeader(String);

impl AuthorizationHeader {
    /// Format OAuth protocol parameters as `OAuth k1="v1", k2="v2"`.
    ///
    /// Only `oauth_` prefixed keys are kept, sorted by key. Keys and values
    /// are percent encoded; the realm is written as given and always first.
    pub fn oauth<K, V>(
        pairs: impl IntoIterator<Item = (K, V)>,
        realm: Option<&str>,
        separator: &str,
    ) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut pairs: Vec<(K, V)> = pairs
            .into_iter()
            .filter(|(k, _)| k.as_ref().starts_with(OAUTH_PREFIX))
            .collect();
        pairs.sort_by(|a, b| a.0.as_ref().cmp(b.0.as_ref()));

        let mut fields = Vec::with_capacity(pairs.len() + 1);
        if let Some(realm) = realm.filter(|v| !v.is_empty()) {
            fields.push(format!("realm=\"{realm}\""));
        }
        for (k, v) in pairs {
            fields.push(format!(
                "{}=\"{}\"",
                percent_encode(k.as_ref()),
                percent_encode(v.as_ref())
            ));
        }

        Self(format!("OAuth {}", fields.join(separator)))
    }

    /// `Bearer <token>`
    pub fn bearer(token: &str) -> Self {
        Self(format!("Bearer {token}"))
    }

    /// The full header value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The header value after the scheme token.
    pub fn credentials(&self) -> &str {
        self.0
            .split_once(' ')
            .map(|(_, rest)| rest)
            .unwrap_or_default()
    }

    /// Convert into a sensitive `HeaderValue`.
    pub fn to_header_value(&self) -> Result<HeaderValue> {
        let mut value: HeaderValue = self.0.parse()?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl Display for AuthorizationHeader {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Debug for AuthorizationHeader {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0.strip_prefix("Bearer ") {
            Some(token) => f
                .debug_tuple("AuthorizationHeader")
                .field(&format_args!("Bearer {:?}", Redact::from(token)))
                .finish(),
            None => f.debug_tuple("AuthorizationHeader").field(&self.0).finish(),
        }
    }
}
