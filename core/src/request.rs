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

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::mem;
use std::slice;

use http::Method;
use http::Uri;
use serde::Serialize;

use crate::{Error, Result};

/// A single value or a list of values sent under one parameter name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// `key=value`
    Single(String),
    /// `key=value1&key=value2`
    Multiple(Vec<String>),
}

impl ParamValue {
    /// All values carried by this parameter.
    pub fn values(&self) -> &[String] {
        match self {
            ParamValue::Single(v) => slice::from_ref(v),
            ParamValue::Multiple(vs) => vs,
        }
    }

    /// Append another value, turning a single value into a list.
    pub fn push(&mut self, value: String) {
        match self {
            ParamValue::Single(first) => {
                let first = mem::take(first);
                *self = ParamValue::Multiple(vec![first, value]);
            }
            ParamValue::Multiple(values) => values.push(value),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Single(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Single(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::Multiple(values)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        ParamValue::Multiple(values.into_iter().map(String::from).collect())
    }
}

/// Body of the request being signed.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestData {
    /// Form style parameters. These take part in the signature base string
    /// unless a body hash is requested.
    Params(BTreeMap<String, ParamValue>),
    /// A JSON document. Only ever covered by the body hash.
    Json(serde_json::Value),
    /// An already serialized body. Only ever covered by the body hash.
    Raw(String),
}

impl RequestData {
    /// Build form parameters from `(key, value)` pairs.
    ///
    /// A key given more than once becomes a multi-value parameter.
    pub fn params<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut map: BTreeMap<String, ParamValue> = BTreeMap::new();
        for (k, v) in pairs {
            match map.entry(k.into()) {
                Entry::Occupied(mut e) => e.get_mut().push(v.into()),
                Entry::Vacant(e) => {
                    e.insert(ParamValue::Single(v.into()));
                }
            }
        }
        RequestData::Params(map)
    }

    /// Flatten form parameters into `(key, value)` pairs.
    ///
    /// JSON and raw bodies carry no signable parameters.
    pub fn form_pairs(&self) -> Vec<(String, String)> {
        match self {
            RequestData::Params(map) => map
                .iter()
                .flat_map(|(k, v)| v.values().iter().map(move |v| (k.clone(), v.clone())))
                .collect(),
            RequestData::Json(_) | RequestData::Raw(_) => Vec::new(),
        }
    }

    /// Serialize the body for hashing.
    ///
    /// Raw bodies pass through unchanged, everything else becomes JSON with
    /// keys in ascending order.
    pub fn to_body_string(&self) -> Result<String> {
        match self {
            RequestData::Raw(s) => Ok(s.clone()),
            RequestData::Params(map) => Ok(serde_json::to_string(map)?),
            RequestData::Json(value) => Ok(serde_json::to_string(value)?),
        }
    }
}

impl From<serde_json::Value> for RequestData {
    fn from(value: serde_json::Value) -> Self {
        RequestData::Json(value)
    }
}

/// Everything about a request that takes part in signing.
///
/// The descriptor is only ever read by signers.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    /// HTTP method, compared case-insensitively.
    pub method: String,
    /// Absolute url, may carry a query string.
    pub url: String,
    /// Optional body.
    pub data: Option<RequestData>,
    /// Sign the body through `oauth_body_hash` instead of the base string.
    pub include_body_hash: bool,
}

impl RequestDescriptor {
    /// Create a descriptor without body.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            data: None,
            include_body_hash: false,
        }
    }

    /// Set the body.
    pub fn with_data(mut self, data: RequestData) -> Self {
        self.data = Some(data);
        self
    }

    /// Request `oauth_body_hash`.
    pub fn with_body_hash(mut self, include_body_hash: bool) -> Self {
        self.include_body_hash = include_body_hash;
        self
    }

    /// Build a descriptor from `http::request::Parts`.
    pub fn from_parts(parts: &http::request::Parts) -> Result<Self> {
        if parts.uri.authority().is_none() {
            return Err(Error::request_invalid(
                "request without authority is invalid for signing",
            ));
        }

        Ok(Self::new(parts.method.as_str(), parts.uri.to_string()))
    }

    /// Check that method and url can be signed.
    pub fn validate(&self) -> Result<()> {
        Method::from_bytes(self.method.as_bytes())?;

        let uri: Uri = self.url_without_fragment().parse()?;
        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(Error::request_invalid(format!(
                "url must be absolute: {}",
                self.url
            )));
        }
        Ok(())
    }

    /// Upper cased method.
    pub fn method_upper(&self) -> String {
        self.method.to_ascii_uppercase()
    }

    /// The url with its query string and fragment removed.
    pub fn base_url(&self) -> &str {
        let url = self.url_without_fragment();
        match url.split_once('?') {
            Some((base, _)) => base,
            None => url,
        }
    }

    /// Decoded query string parameters in their original order.
    ///
    /// `+` decodes to a space and a key without `=` has an empty value.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        match self.url_without_fragment().split_once('?') {
            Some((_, query)) => form_urlencoded::parse(query.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
            None => Vec::new(),
        }
    }

    fn url_without_fragment(&self) -> &str {
        match self.url.split_once('#') {
            Some((url, _)) => url,
            None => &self.url,
        }
    }
}
