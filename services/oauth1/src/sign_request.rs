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

//! Authenticate `http` requests for the REST API.
use http::header::AUTHORIZATION;
use log::debug;
use oriole_core::{Error, RequestData, RequestDescriptor, Result};

use crate::config::Config;
use crate::credential::TokenPair;
use crate::header::AuthorizationHeader;
use crate::signer::Signer;

/// RequestSigner puts an `Authorization` header on outgoing requests.
///
/// Requests are either signed with OAuth 1.0a for an integration's access
/// token, or carry a bearer token.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    auth: Authentication,
}

#[derive(Debug, Clone)]
enum Authentication {
    OAuth1 { signer: Signer, token: TokenPair },
    Bearer(String),
}

impl RequestSigner {
    /// Sign with OAuth 1.0a on behalf of `token`.
    pub fn oauth1(signer: Signer, token: TokenPair) -> Self {
        Self {
            auth: Authentication::OAuth1 { signer, token },
        }
    }

    /// Send `Bearer <token>`.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            auth: Authentication::Bearer(token.into()),
        }
    }

    /// Pick the authentication from config.
    ///
    /// Consumer credentials select OAuth 1.0a with the configured access
    /// token; otherwise a bearer token is required.
    pub fn from_config(config: Config) -> Result<Self> {
        if config.consumer_key.is_some() || config.consumer_secret.is_some() {
            let token = config.token_pair();
            return Ok(Self::oauth1(Signer::new(config)?, token));
        }

        match config.bearer_token {
            Some(token) if !token.is_empty() => Ok(Self::bearer(token)),
            _ => Err(Error::config_invalid(
                "either oauth consumer credentials or a bearer token are required",
            )),
        }
    }

    /// Compute the `Authorization` header for a request.
    pub fn authorization(&self, request: &RequestDescriptor) -> Result<AuthorizationHeader> {
        match &self.auth {
            Authentication::OAuth1 { signer, token } => {
                let signed = signer.authorize(request, token)?;
                Ok(signer.to_header(&signed))
            }
            Authentication::Bearer(token) => Ok(AuthorizationHeader::bearer(token)),
        }
    }

    /// Sign `parts` in place.
    ///
    /// `data` is the body that will be sent, needed when it is form encoded
    /// or when `include_body_hash` is set.
    pub fn sign(
        &self,
        parts: &mut http::request::Parts,
        data: Option<&RequestData>,
        include_body_hash: bool,
    ) -> Result<()> {
        let mut request = RequestDescriptor::from_parts(parts)?.with_body_hash(include_body_hash);
        request.data = data.cloned();

        let header = self.authorization(&request)?;
        debug!("signing {} {}", request.method, request.base_url());
        parts.headers.insert(AUTHORIZATION, header.to_header_value()?);

        Ok(())
    }
}
