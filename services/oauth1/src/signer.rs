// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! OAuth 1.0a request signer.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use log::debug;
use oriole_core::time::{now, unix_timestamp, DateTime};
use oriole_core::utils::Redact;
use oriole_core::{Error, RequestDescriptor, Result};
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::config::Config;
use crate::constants::*;
use crate::credential::{Consumer, TokenPair};
use crate::encode::percent_encode;
use crate::hash_function::{HashFunction, Plaintext};
use crate::header::AuthorizationHeader;
use crate::parameters::{parameter_string, OAuthParameters, SignedAuthorization};

/// Signer computes OAuth 1.0a signatures and `Authorization` headers.
///
/// The signer is immutable once built; clones share the hash functions and
/// it can be used from many threads at once.
///
/// - [Signing Requests](https://www.rfc-editor.org/rfc/rfc5849#section-3.4)
#[derive(Clone)]
pub struct Signer {
    consumer: Consumer,
    signature_method: String,
    hash_function: Arc<dyn HashFunction>,
    body_hash_function: Arc<dyn HashFunction>,
    nonce_length: usize,
    version: String,
    parameter_separator: String,
    realm: Option<String>,
    last_ampersand: bool,
    time: Option<DateTime>,
}

impl Signer {
    /// Build a signer from config.
    ///
    /// Fails with [`oriole_core::ErrorKind::ConfigInvalid`] if consumer
    /// credentials are missing, if the nonce length is zero, or if a
    /// signature method other than `PLAINTEXT` comes without a hash function.
    pub fn new(config: Config) -> Result<Self> {
        let key = config
            .consumer_key
            .ok_or_else(|| Error::config_invalid("consumer key is required"))?;
        let secret = config
            .consumer_secret
            .ok_or_else(|| Error::config_invalid("consumer secret is required"))?;
        if key.is_empty() {
            return Err(Error::credential_invalid("consumer key must not be empty"));
        }

        let signature_method = config
            .signature_method
            .unwrap_or_else(|| PLAINTEXT.to_string());
        let hash_function: Arc<dyn HashFunction> = match config.hash_function {
            Some(f) => f,
            None if signature_method == PLAINTEXT => Arc::new(Plaintext),
            None => {
                return Err(Error::config_invalid(format!(
                    "hash function is required for signature method {signature_method}"
                )))
            }
        };
        let body_hash_function = config
            .body_hash_function
            .unwrap_or_else(|| hash_function.clone());

        let nonce_length = config.nonce_length.unwrap_or(DEFAULT_NONCE_LENGTH);
        if nonce_length == 0 {
            return Err(Error::config_invalid("nonce length must be positive"));
        }

        Ok(Self {
            consumer: Consumer::new(key, secret),
            signature_method,
            hash_function,
            body_hash_function,
            nonce_length,
            version: config.version.unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            parameter_separator: config
                .parameter_separator
                .unwrap_or_else(|| DEFAULT_PARAMETER_SEPARATOR.to_string()),
            realm: config.realm,
            last_ampersand: config.last_ampersand.unwrap_or(true),
            time: None,
        })
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// The consumer this signer signs for.
    pub fn consumer(&self) -> &Consumer {
        &self.consumer
    }

    /// The configured signature method.
    pub fn signature_method(&self) -> &str {
        &self.signature_method
    }

    /// Sign a request with a fresh nonce and the current time.
    pub fn authorize(
        &self,
        request: &RequestDescriptor,
        token: &TokenPair,
    ) -> Result<SignedAuthorization> {
        let timestamp = unix_timestamp(self.time.unwrap_or_else(now));
        self.authorize_with(request, token, self.nonce(), timestamp)
    }

    /// Sign a request with the given nonce and timestamp.
    ///
    /// Servers reject a reused nonce/timestamp pair, so outside of tests
    /// and reproducing a recorded request use [`Signer::authorize`].
    pub fn authorize_with(
        &self,
        request: &RequestDescriptor,
        token: &TokenPair,
        nonce: impl Into<String>,
        timestamp: i64,
    ) -> Result<SignedAuthorization> {
        request.validate()?;

        let mut parameters = OAuthParameters {
            consumer_key: self.consumer.key.clone(),
            nonce: nonce.into(),
            signature_method: self.signature_method.clone(),
            timestamp,
            version: self.version.clone(),
            token: token.key.clone(),
            body_hash: None,
        };
        if request.include_body_hash {
            parameters.body_hash = Some(self.body_hash(request, token)?);
        }

        let base_string = self.base_string(request, &parameters)?;
        let signature = self
            .hash_function
            .hash(&base_string, &self.signing_key(token.secret.as_deref()));

        Ok(SignedAuthorization {
            parameters,
            signature,
        })
    }

    /// Construct the signature base string.
    ///
    /// ## Format
    ///
    /// ```text
    /// UPPER(method) + "&" +
    /// percent_encode(url without query) + "&" +
    /// percent_encode(parameter string)
    /// ```
    pub fn base_string(
        &self,
        request: &RequestDescriptor,
        parameters: &OAuthParameters,
    ) -> Result<String> {
        request.validate()?;

        let s = format!(
            "{}&{}&{}",
            request.method_upper(),
            percent_encode(request.base_url()),
            percent_encode(&parameter_string(request, parameters))
        );
        debug!("signature base string: {s}");
        Ok(s)
    }

    /// Derive the key passed to the hash functions.
    ///
    /// `percent_encode(consumer secret) + "&" + percent_encode(token secret)`,
    /// without the `&` if `last_ampersand` is off and there is no token secret.
    pub fn signing_key(&self, token_secret: Option<&str>) -> String {
        let token_secret = token_secret.unwrap_or_default();
        let consumer_secret = percent_encode(&self.consumer.secret);

        if !self.last_ampersand && token_secret.is_empty() {
            return consumer_secret;
        }
        format!("{consumer_secret}&{}", percent_encode(token_secret))
    }

    /// Compute `oauth_body_hash` for the request body.
    ///
    /// A request without body is hashed as an empty JSON object.
    pub fn body_hash(&self, request: &RequestDescriptor, token: &TokenPair) -> Result<String> {
        let body = match &request.data {
            Some(data) => data.to_body_string()?,
            None => "{}".to_string(),
        };
        Ok(self
            .body_hash_function
            .hash(&body, &self.signing_key(token.secret.as_deref())))
    }

    /// Format a signed authorization as an `Authorization` header.
    pub fn to_header(&self, signed: &SignedAuthorization) -> AuthorizationHeader {
        let header = AuthorizationHeader::oauth(
            signed.pairs(),
            self.realm.as_deref(),
            &self.parameter_separator,
        );
        debug!(
            "authorization header built for consumer {:?}",
            Redact::from(&self.consumer.key)
        );
        header
    }

    /// Generate a random `[a-zA-Z0-9]` nonce of the configured length.
    pub fn nonce(&self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(self.nonce_length)
            .map(char::from)
            .collect()
    }
}

impl Debug for Signer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer")
            .field("consumer", &self.consumer)
            .field("signature_method", &self.signature_method)
            .field("nonce_length", &self.nonce_length)
            .field("version", &self.version)
            .field("parameter_separator", &self.parameter_separator)
            .field("realm", &self.realm)
            .field("last_ampersand", &self.last_ampersand)
            .finish_non_exhaustive()
    }
}
