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

use super::{hmac_sha1_signer, init_signing_test, plaintext_signer};
use anyhow::Result;
use oriole_core::{RequestData, RequestDescriptor};
use oriole_oauth1::{parameter_string, TokenPair};
use pretty_assertions::assert_eq;

#[test]
fn test_plaintext_end_to_end() -> Result<()> {
    init_signing_test();

    let signer = plaintext_signer();
    let req = RequestDescriptor::new("GET", "http://x.test/resource?foo=bar");
    let signed = signer.authorize(&req, &TokenPair::new("tk", "ts"))?;

    assert_eq!(signed.signature, "cs&ts");
    assert_eq!(signed.parameters.signature_method, "PLAINTEXT");
    assert_eq!(signed.parameters.version, "1.0");
    assert_eq!(signed.parameters.nonce.len(), 32);

    let header = signer.to_header(&signed);
    assert!(header.as_str().contains(r#"oauth_signature="cs%26ts""#));
    Ok(())
}

#[test]
fn test_hmac_sha1_reference_request() -> Result<()> {
    init_signing_test();

    // Reference request from Twitter's "Creating a signature" guide.
    let signer = hmac_sha1_signer(
        "xvz1evFS4wEEPTGEFPHBog",
        "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
    );
    let token = TokenPair::new(
        "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
        "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
    );
    let req = RequestDescriptor::new(
        "POST",
        "https://api.twitter.com/1.1/statuses/update.json?include_entities=true",
    )
    .with_data(RequestData::params([(
        "status",
        "Hello Ladies + Gentlemen, a signed OAuth request!",
    )]));

    let signed = signer.authorize_with(
        &req,
        &token,
        "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg",
        1318622958,
    )?;

    assert_eq!(
        signer.base_string(&req, &signed.parameters)?,
        "POST&https%3A%2F%2Fapi.twitter.com%2F1.1%2Fstatuses%2Fupdate.json\
         &include_entities%3Dtrue%26oauth_consumer_key%3Dxvz1evFS4wEEPTGEFPHBog\
         %26oauth_nonce%3DkYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg\
         %26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1318622958\
         %26oauth_token%3D370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb\
         %26oauth_version%3D1.0%26status%3DHello%2520Ladies%2520%252B%2520Gentlemen\
         %252C%2520a%2520signed%2520OAuth%2520request%2521"
    );
    assert_eq!(signed.signature, "hCtSmYh+iHYCEqBWrE7C7hYmtUk=");
    Ok(())
}

#[test]
fn test_hmac_sha1_product_search() -> Result<()> {
    init_signing_test();

    let signer = hmac_sha1_signer("ck", "cs");
    let req = RequestDescriptor::new(
        "get",
        "http://localhost:8080/rest/V1/products?fields=items%5Bsku%2Cname%2Cprice%5D&searchCriteria=carrot",
    );
    let signed = signer.authorize_with(
        &req,
        &TokenPair::new("tk", "ts"),
        "abcdef0123456789abcdef0123456789",
        1700000000,
    )?;

    assert_eq!(
        signer.base_string(&req, &signed.parameters)?,
        "GET&http%3A%2F%2Flocalhost%3A8080%2Frest%2FV1%2Fproducts\
         &fields%3Ditems%255Bsku%252Cname%252Cprice%255D%26oauth_consumer_key%3Dck\
         %26oauth_nonce%3Dabcdef0123456789abcdef0123456789\
         %26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1700000000\
         %26oauth_token%3Dtk%26oauth_version%3D1.0%26searchCriteria%3Dcarrot"
    );
    assert_eq!(signed.signature, "XLogwmyUNpHbisp21nzMHnmMn40=");
    Ok(())
}

#[test]
fn test_parameter_normalization_with_body_and_duplicates() -> Result<()> {
    init_signing_test();

    // Parameters from RFC 5849 section 3.4.1.3, plus oauth_version.
    let signer = hmac_sha1_signer("9djdj82h48djs9d2", "j49sk3j29djd");
    let req = RequestDescriptor::new(
        "POST",
        "http://example.com/request?b5=%3D%253D&a3=a&c%40=&a2=r%20b",
    )
    .with_data(RequestData::params([("c2", ""), ("a3", "2 q")]));
    let signed = signer.authorize_with(
        &req,
        &TokenPair::new("kkk9d7dh3k39sjv7", "dh893hdasih9"),
        "7d8f3e4a",
        137131201,
    )?;

    assert_eq!(
        parameter_string(&req, &signed.parameters),
        "a2=r%20b&a3=2%20q&a3=a&b5=%3D%253D&c%40=&c2=\
         &oauth_consumer_key=9djdj82h48djs9d2&oauth_nonce=7d8f3e4a\
         &oauth_signature_method=HMAC-SHA1&oauth_timestamp=137131201\
         &oauth_token=kkk9d7dh3k39sjv7&oauth_version=1.0"
    );
    Ok(())
}

#[test]
fn test_multi_value_query_regression() -> Result<()> {
    init_signing_test();

    let signer = plaintext_signer();
    let req = RequestDescriptor::new("GET", "http://x.test/r?a=2&a=1");
    let signed = signer.authorize_with(&req, &TokenPair::two_legged(), "n", 1)?;

    // Values of a repeated key are sorted and no separator follows the last one.
    assert_eq!(
        parameter_string(&req, &signed.parameters),
        "a=1&a=2&oauth_consumer_key=ck&oauth_nonce=n&oauth_signature_method=PLAINTEXT\
         &oauth_timestamp=1&oauth_version=1.0"
    );
    Ok(())
}

#[test]
fn test_two_legged_signature() -> Result<()> {
    init_signing_test();

    let signer = plaintext_signer();
    let req = RequestDescriptor::new("GET", "http://x.test/r");
    let signed = signer.authorize(&req, &TokenPair::two_legged())?;

    assert!(signed.parameters.token.is_none());
    assert_eq!(signed.signature, "cs&");
    assert!(!signer.to_header(&signed).as_str().contains("oauth_token"));
    Ok(())
}

#[test]
fn test_body_hash_excludes_body_from_base_string() -> Result<()> {
    init_signing_test();

    let signer = oriole_oauth1::Signer::new(
        oriole_oauth1::Config::new()
            .with_consumer("ck", "cs")
            .hmac_sha1()
            .with_body_hash_function(oriole_oauth1::Sha1BodyHash),
    )?;
    let req = RequestDescriptor::new("POST", "http://x.test/rest/V1/products")
        .with_data(RequestData::from(
            serde_json::json!({"product": {"sku": "A"}}),
        ))
        .with_body_hash(true);
    let signed = signer.authorize_with(&req, &TokenPair::new("tk", "ts"), "n", 1)?;

    assert_eq!(
        signed.parameters.body_hash.as_deref(),
        Some("Ocbj3YM1j1OJ00PTPTLej9Ldc7g=")
    );
    let base = signer.base_string(&req, &signed.parameters)?;
    assert!(base.contains("oauth_body_hash%3DOcbj3YM1j1OJ00PTPTLej9Ldc7g%253D"));
    assert!(!base.contains("sku"));
    Ok(())
}
