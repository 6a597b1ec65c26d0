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

use std::fmt::{Debug, Formatter};
use std::str::FromStr;
use std::sync::Arc;

use oriole_core::utils::Redact;
use oriole_core::{Context, Error, Result};

use crate::constants::*;
use crate::credential::TokenPair;
use crate::hash_function::{HashFunction, HmacSha1};

/// Config carries all the configuration of an OAuth 1.0a signer.
///
/// Nothing has a built-in credential: consumer key and secret must be set
/// here or come from the environment.
#[derive(Clone, Default)]
pub struct Config {
    /// `consumer_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ORIOLE_OAUTH_CONSUMER_KEY`]
    pub consumer_key: Option<String>,
    /// `consumer_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ORIOLE_OAUTH_CONSUMER_SECRET`]
    pub consumer_secret: Option<String>,
    /// `access_token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ORIOLE_OAUTH_ACCESS_TOKEN`]
    pub access_token: Option<String>,
    /// `access_token_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ORIOLE_OAUTH_ACCESS_TOKEN_SECRET`]
    pub access_token_secret: Option<String>,
    /// `bearer_token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ORIOLE_BEARER_TOKEN`]
    pub bearer_token: Option<String>,
    /// Signature method, `PLAINTEXT` if unset.
    ///
    /// Env value: [`ORIOLE_OAUTH_SIGNATURE_METHOD`]
    pub signature_method: Option<String>,
    /// Hash function computing `oauth_signature`.
    ///
    /// Required for every signature method except `PLAINTEXT`.
    pub hash_function: Option<Arc<dyn HashFunction>>,
    /// Hash function computing `oauth_body_hash`, `hash_function` if unset.
    pub body_hash_function: Option<Arc<dyn HashFunction>>,
    /// Length of `oauth_nonce`, 32 if unset.
    ///
    /// Env value: [`ORIOLE_OAUTH_NONCE_LENGTH`]
    pub nonce_length: Option<usize>,
    /// `oauth_version`, `1.0` if unset.
    ///
    /// Env value: [`ORIOLE_OAUTH_VERSION`]
    pub version: Option<String>,
    /// Separator between header fields, `, ` if unset.
    pub parameter_separator: Option<String>,
    /// Realm written first into the header.
    ///
    /// Env value: [`ORIOLE_OAUTH_REALM`]
    pub realm: Option<String>,
    /// Keep the `&` at the end of the signing key when the token secret is
    /// empty. `true` if unset.
    ///
    /// Env value: [`ORIOLE_OAUTH_LAST_AMPERSAND`]
    pub last_ampersand: Option<bool>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set consumer key and secret
    pub fn with_consumer(mut self, key: impl Into<String>, secret: impl Into<String>) -> Self {
        self.consumer_key = Some(key.into());
        self.consumer_secret = Some(secret.into());
        self
    }

    /// Set access token and its secret
    pub fn with_access_token(mut self, key: impl Into<String>, secret: impl Into<String>) -> Self {
        self.access_token = Some(key.into());
        self.access_token_secret = Some(secret.into());
        self
    }

    /// Set bearer_token
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Set signature_method
    pub fn with_signature_method(mut self, method: impl Into<String>) -> Self {
        self.signature_method = Some(method.into());
        self
    }

    /// Set hash_function
    pub fn with_hash_function(mut self, f: impl HashFunction) -> Self {
        self.hash_function = Some(Arc::new(f));
        self
    }

    /// Set body_hash_function
    pub fn with_body_hash_function(mut self, f: impl HashFunction) -> Self {
        self.body_hash_function = Some(Arc::new(f));
        self
    }

    /// Sign with `HMAC-SHA1`, the method the REST API expects.
    pub fn hmac_sha1(self) -> Self {
        self.with_signature_method(HMAC_SHA1)
            .with_hash_function(HmacSha1)
    }

    /// Set nonce_length
    pub fn with_nonce_length(mut self, len: usize) -> Self {
        self.nonce_length = Some(len);
        self
    }

    /// Set version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set parameter_separator
    pub fn with_parameter_separator(mut self, separator: impl Into<String>) -> Self {
        self.parameter_separator = Some(separator.into());
        self
    }

    /// Set realm
    pub fn with_realm(mut self, realm: impl Into<String>) -> Self {
        self.realm = Some(realm.into());
        self
    }

    /// Set last_ampersand
    pub fn with_last_ampersand(mut self, last_ampersand: bool) -> Self {
        self.last_ampersand = Some(last_ampersand);
        self
    }

    /// The configured access token, two-legged if none is set.
    pub fn token_pair(&self) -> TokenPair {
        TokenPair {
            key: self.access_token.clone(),
            secret: self.access_token_secret.clone(),
        }
    }

    /// Load config from env.
    ///
    /// Fields that are already set are kept. Returns an error if a numeric
    /// or boolean variable can't be parsed.
    pub fn from_env(mut self, ctx: &Context) -> Result<Self> {
        if let Some(v) = ctx.env_var(ORIOLE_OAUTH_CONSUMER_KEY) {
            self.consumer_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ORIOLE_OAUTH_CONSUMER_SECRET) {
            self.consumer_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ORIOLE_OAUTH_ACCESS_TOKEN) {
            self.access_token.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ORIOLE_OAUTH_ACCESS_TOKEN_SECRET) {
            self.access_token_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ORIOLE_BEARER_TOKEN) {
            self.bearer_token.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ORIOLE_OAUTH_SIGNATURE_METHOD) {
            self.signature_method.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ORIOLE_OAUTH_REALM) {
            self.realm.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ORIOLE_OAUTH_VERSION) {
            self.version.get_or_insert(v);
        }
        if self.nonce_length.is_none() {
            self.nonce_length = parse_env(ctx, ORIOLE_OAUTH_NONCE_LENGTH)?;
        }
        if self.last_ampersand.is_none() {
            self.last_ampersand = parse_env(ctx, ORIOLE_OAUTH_LAST_AMPERSAND)?;
        }

        Ok(self)
    }
}

fn parse_env<T>(ctx: &Context, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let Some(v) = ctx.env_var(key) else {
        return Ok(None);
    };
    v.trim().parse().map(Some).map_err(|e| {
        Error::config_invalid(format!("env {key} has invalid value {v:?}")).with_source(e)
    })
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("consumer_key", &self.consumer_key.as_ref().map(Redact::from))
            .field("consumer_secret", &self.consumer_secret.as_ref().map(Redact::from))
            .field("access_token", &self.access_token.as_ref().map(Redact::from))
            .field(
                "access_token_secret",
                &self.access_token_secret.as_ref().map(Redact::from),
            )
            .field("bearer_token", &self.bearer_token.as_ref().map(Redact::from))
            .field("signature_method", &self.signature_method)
            .field("hash_function", &self.hash_function.is_some())
            .field("body_hash_function", &self.body_hash_function.is_some())
            .field("nonce_length", &self.nonce_length)
            .field("version", &self.version)
            .field("parameter_separator", &self.parameter_separator)
            .field("realm", &self.realm)
            .field("last_ampersand", &self.last_ampersand)
            .finish()
    }
}
