use std::collections::BTreeMap;

use log::warn;
use oriole_core::RequestDescriptor;
use serde::Serialize;

use crate::constants::*;
use crate::encode::percent_encode;

/// The protocol parameters of one signed request, without the signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OAuthParameters {
    /// `oauth_consumer_key`
    #[serde(rename = "oauth_consumer_key")]
    pub consumer_key: String,
    /// `oauth_nonce`
    #[serde(rename = "oauth_nonce")]
    pub nonce: String,
    /// `oauth_signature_method`
    #[serde(rename = "oauth_signature_method")]
    pub signature_method: String,
    /// `oauth_timestamp`, seconds since the Unix epoch.
    #[serde(rename = "oauth_timestamp")]
    pub timestamp: i64,
    /// `oauth_version`
    #[serde(rename = "oauth_version")]
    pub version: String,
    /// `oauth_token`, absent for two-legged requests.
    #[serde(rename = "oauth_token", skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// `oauth_body_hash`, present only when the body is signed by hash.
    #[serde(rename = "oauth_body_hash", skip_serializing_if = "Option::is_none")]
    pub body_hash: Option<String>,
}

impl OAuthParameters {
    /// Name and value of every parameter that is set.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            (OAUTH_CONSUMER_KEY, self.consumer_key.clone()),
            (OAUTH_NONCE, self.nonce.clone()),
            (OAUTH_SIGNATURE_METHOD, self.signature_method.clone()),
            (OAUTH_TIMESTAMP, self.timestamp.to_string()),
            (OAUTH_VERSION, self.version.clone()),
        ];
        if let Some(token) = &self.token {
            pairs.push((OAUTH_TOKEN, token.clone()));
        }
        if let Some(body_hash) = &self.body_hash {
            pairs.push((OAUTH_BODY_HASH, body_hash.clone()));
        }
        pairs
    }
}

/// Protocol parameters together with the computed `oauth_signature`.
///
/// Serializes to a flat JSON object keyed by the `oauth_*` names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignedAuthorization {
    /// The parameters that were signed.
    #[serde(flatten)]
    pub parameters: OAuthParameters,
    /// `oauth_signature`
    #[serde(rename = "oauth_signature")]
    pub signature: String,
}

impl SignedAuthorization {
    /// Name and value of every parameter including the signature.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.parameters.pairs();
        pairs.push((OAUTH_SIGNATURE, self.signature.clone()));
        pairs
    }
}

/// Build the normalized request parameter string.
///
/// Sources, in order:
///
/// - the protocol parameters
/// - the form body, skipped when `oauth_body_hash` is present
/// - the decoded query string of the url
///
/// A body or query parameter carrying the name of a protocol parameter is
/// dropped. Keys and values are percent encoded, then grouped by encoded key
/// in ascending order. Values sharing a key are sorted and written as
/// repeated `key=value` pairs. All pairs are joined by `&`.
///
/// ## Reference
///
/// - [Parameters Normalization](https://www.rfc-editor.org/rfc/rfc5849#section-3.4.1.3.2)
pub fn parameter_string(request: &RequestDescriptor, params: &OAuthParameters) -> String {
    let protocol = params.pairs();

    let mut normalized: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (k, v) in &protocol {
        normalized
            .entry(percent_encode(k))
            .or_default()
            .push(percent_encode(v));
    }

    let mut application = Vec::new();
    if params.body_hash.is_none() {
        if let Some(data) = &request.data {
            application.extend(data.form_pairs());
        }
    }
    application.extend(request.query_pairs());

    for (k, v) in application {
        if protocol.iter().any(|(name, _)| *name == k) {
            warn!("request parameter {k} shadows a protocol parameter and is not signed");
            continue;
        }
        normalized
            .entry(percent_encode(&k))
            .or_default()
            .push(percent_encode(&v));
    }

    let mut s = String::new();
    for (k, mut values) in normalized {
        values.sort();
        for v in values {
            if !s.is_empty() {
                s.push('&');
            }
            s.push_str(&k);
            s.push('=');
            s.push_str(&v);
        }
    }
    s
}
